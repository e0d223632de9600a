use crate::cli::ReviewCommands;
use cognipath::{Scholar, ScholarResult};

pub fn handle(app: &Scholar, action: ReviewCommands) -> ScholarResult<()> {
    let board = app.reviews();
    match action {
        ReviewCommands::Add { rating, comment } => {
            let user = app.session().require()?;
            board.submit(&user, rating, &comment)?;
            println!("Thanks for your review, {}!", user.name);
        }
        ReviewCommands::List => {
            let reviews = board.list()?;
            match board.average_rating()? {
                Some(average) => println!("{} reviews, average {average:.1}/5\n", reviews.len()),
                None => println!("No reviews yet. Be the first!"),
            }
            for review in reviews {
                let stars = "*".repeat(usize::from(review.rating));
                println!("{} ({})  {stars:<5}", review.user_name, review.date);
                println!("  {}\n", review.comment);
            }
        }
    }
    Ok(())
}
