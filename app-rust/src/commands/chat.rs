use crate::cli::{ChatArgs, FeedbackArgs, Verdict};
use cognipath::{Attachment, ChatMessage, ChatMode, ChatRole, Scholar, ScholarResult};

pub async fn send(app: &Scholar, args: ChatArgs) -> ScholarResult<()> {
    let attachment = args.attach.map(Attachment::from_path).transpose()?;

    let reply = app.chat(args.mode).send(&args.message, attachment).await?;
    print_message(&reply);
    Ok(())
}

pub fn history(app: &Scholar, mode: ChatMode) -> ScholarResult<()> {
    println!("{} ({})\n", title(mode), mode.tagline());
    for message in app.chat(mode).messages()? {
        print_message(&message);
    }
    Ok(())
}

pub fn feedback(app: &Scholar, args: FeedbackArgs) -> ScholarResult<()> {
    let is_helpful = args.verdict == Verdict::Helpful;
    app.chat(args.mode)
        .give_feedback(&args.message_id, is_helpful, args.comment)?;
    println!("Thanks for the feedback.");
    Ok(())
}

pub fn clear(app: &Scholar, mode: ChatMode) -> ScholarResult<()> {
    app.chat(mode).clear()?;
    println!("Conversation with the {mode} cleared.");
    Ok(())
}

fn title(mode: ChatMode) -> &'static str {
    match mode {
        ChatMode::Tutor => "AI Tutor",
        ChatMode::Counsellor => "Mira (Counsellor)",
    }
}

fn print_message(message: &ChatMessage) {
    let speaker = match message.role {
        ChatRole::User => "You",
        ChatRole::Model => "AI",
    };
    println!("[{}] {speaker}:", message.id);
    if let Some(attachment) = &message.attachment {
        println!("  (attached {})", attachment.name);
    }
    if !message.text.is_empty() {
        println!("  {}", message.text.replace('\n', "\n  "));
    }
    if let Some(feedback) = &message.feedback {
        let verdict = if feedback.is_helpful { "helpful" } else { "not helpful" };
        match &feedback.comment {
            Some(comment) => println!("  feedback: {verdict} ({comment})"),
            None => println!("  feedback: {verdict}"),
        }
    }
    println!();
}
