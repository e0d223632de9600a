use crate::cli::RoutineCommands;
use cognipath::{routine::RoutinePlanner, Routine, Scholar, ScholarError, ScholarResult};

pub async fn handle(app: &Scholar, action: RoutineCommands) -> ScholarResult<()> {
    let planner = app.routines();
    match action {
        RoutineCommands::Generate { preferences } => {
            let routine = planner.generate(&preferences).await?;
            print_routine(&routine, &planner)?;
        }
        RoutineCommands::Show => match planner.current()? {
            Some(routine) => print_routine(&routine, &planner)?,
            None => println!("No routine yet. Describe your day with `cognipath routine generate`."),
        },
        RoutineCommands::Toggle { item } => {
            let routine = planner.toggle(item_index(item)?)?;
            print_routine(&routine, &planner)?;
        }
    }
    Ok(())
}

/// Items are numbered from 1 on the command line.
fn item_index(item: u64) -> ScholarResult<usize> {
    item.checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .ok_or_else(|| ScholarError::InvalidInput(format!("item {item} is out of range")))
}

fn print_routine(routine: &Routine, planner: &RoutinePlanner) -> ScholarResult<()> {
    println!("Routine for {}\n", routine.date);
    for (i, item) in routine.items.iter().enumerate() {
        let mark = if item.completed { 'x' } else { ' ' };
        println!(
            "  {:>2}. [{mark}] {:<22} {:<9} {}",
            i + 1,
            item.time,
            item.category,
            item.activity
        );
    }

    let stats = planner.stats()?;
    let summary: Vec<String> = stats
        .entries()
        .iter()
        .map(|(category, count)| format!("{category}: {count}"))
        .collect();
    println!("\n  {}", summary.join(" | "));
    Ok(())
}
