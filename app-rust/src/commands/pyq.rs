use crate::cli::PyqCommands;
use cognipath::{Attachment, PyqAnalysis, Scholar, ScholarError, ScholarResult};
use std::fs;

pub async fn handle(app: &Scholar, action: PyqCommands) -> ScholarResult<()> {
    let analyzer = app.pyq();
    match action {
        PyqCommands::Analyze {
            subject,
            text,
            text_file,
            attach,
        } => {
            let text = match text_file {
                Some(path) => fs::read_to_string(&path)
                    .map_err(|source| ScholarError::Attachment { path, source })?,
                None => text,
            };
            let attachment = attach.map(Attachment::from_path).transpose()?;

            let analysis = analyzer.analyze(&subject, &text, attachment).await?;
            print_analysis(&analysis);
        }
        PyqCommands::History { id: Some(id) } => print_analysis(&analyzer.get(&id)?),
        PyqCommands::History { id: None } => {
            let history = analyzer.history()?;
            if history.is_empty() {
                println!("No analyses yet.");
            }
            for analysis in history {
                println!(
                    "{}  {}  ({} topics, {} questions)",
                    analysis.id,
                    analysis.subject,
                    analysis.topics.len(),
                    analysis.predicted_questions.len()
                );
            }
        }
    }
    Ok(())
}

fn print_analysis(analysis: &PyqAnalysis) {
    println!("{} [{}]\n", analysis.subject, analysis.id);

    println!("High-yield topics:");
    for topic in &analysis.topics {
        println!("  - {} [{}]: {}", topic.topic, topic.importance, topic.description);
    }

    println!("\nPredicted questions:");
    for (i, question) in analysis.predicted_questions.iter().enumerate() {
        println!("\n  Q{}. {} ({:.0}% likely)", i + 1, question.question, question.probability_score);
        println!("  Answer: {}", question.answer);
        println!("  Why: {}", question.explanation);
    }
}
