use crate::cli::Commands;
use cognipath::{Scholar, ScholarResult};

mod account;
mod chat;
mod pyq;
mod review;
mod routine;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(command: Commands, app: &Scholar) -> ScholarResult<()> {
    match command {
        Commands::Login { name, email } => account::login(app, &name, &email),
        Commands::Logout => account::logout(app),
        Commands::Whoami => account::whoami(app),
        Commands::Profile(args) => account::profile(app, args),
        Commands::Dashboard => account::dashboard(app),
        Commands::Chat(args) => chat::send(app, args).await,
        Commands::ChatHistory { mode } => chat::history(app, mode),
        Commands::Feedback(args) => chat::feedback(app, args),
        Commands::ChatClear { mode } => chat::clear(app, mode),
        Commands::Pyq { action } => pyq::handle(app, action).await,
        Commands::Routine { action } => routine::handle(app, action).await,
        Commands::Review { action } => review::handle(app, action),
    }
}
