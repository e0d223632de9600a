use clap::{Args, Parser, Subcommand, ValueEnum};
use cognipath::{config::ConfigOverrides, ChatMode};
use std::path::PathBuf;

/// Top-level CLI parser for the `cognipath` binary.
#[derive(Debug, Parser)]
#[command(
    name = "cognipath",
    version,
    about = "AI study companion: exam predictor, tutor, counsellor and routine planner"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Gemini API key
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Gemini model id
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Override the Gemini API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Directory holding the stored documents
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            data_dir: self.data_dir.clone(),
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in with a name and email (no password, stored locally).
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Sign out and forget the stored user.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Show or edit the profile.
    Profile(ProfileArgs),
    /// Greeting, features and today's schedule.
    Dashboard,
    /// Send a message to the tutor or the counsellor.
    Chat(ChatArgs),
    /// Print a conversation.
    ChatHistory {
        /// tutor or counsellor
        mode: ChatMode,
    },
    /// Rate a reply.
    Feedback(FeedbackArgs),
    /// Forget a conversation.
    ChatClear {
        /// tutor or counsellor
        mode: ChatMode,
    },
    /// Exam predictor.
    Pyq {
        #[command(subcommand)]
        action: PyqCommands,
    },
    /// Daily routine planner.
    Routine {
        #[command(subcommand)]
        action: RoutineCommands,
    },
    /// Community reviews.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub grade: Option<String>,
    #[arg(long)]
    pub goal: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
}

impl ProfileArgs {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.grade.is_none() && self.goal.is_none() && self.bio.is_none()
    }
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// tutor or counsellor
    pub mode: ChatMode,
    /// Message text; may be empty when a file is attached.
    #[arg(default_value = "")]
    pub message: String,
    /// Image or PDF to send with the message (tutor only).
    #[arg(long)]
    pub attach: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct FeedbackArgs {
    /// tutor or counsellor
    pub mode: ChatMode,
    pub message_id: String,
    pub verdict: Verdict,
    #[arg(long)]
    pub comment: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Verdict {
    Helpful,
    NotHelpful,
}

#[derive(Clone, Debug, Subcommand)]
pub enum PyqCommands {
    /// Predict high-yield questions from past papers.
    Analyze {
        #[arg(long)]
        subject: String,
        /// Past questions as text.
        #[arg(long, default_value = "")]
        text: String,
        /// Read past questions from a text file.
        #[arg(long, conflicts_with = "text")]
        text_file: Option<PathBuf>,
        /// Image or PDF of a question paper.
        #[arg(long)]
        attach: Option<PathBuf>,
    },
    /// List past analyses, or show one in full.
    History { id: Option<String> },
}

#[derive(Clone, Debug, Subcommand)]
pub enum RoutineCommands {
    /// Generate a routine from your schedule and goals.
    Generate { preferences: String },
    /// Show the current routine with progress.
    Show,
    /// Mark an item done or not done (1-based).
    Toggle {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        item: u64,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// Leave a review.
    Add {
        #[arg(long, default_value_t = cognipath::reviews::DEFAULT_RATING,
              value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
        comment: String,
    },
    /// Show all reviews, newest first.
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn chat_accepts_an_attachment() {
        let cli = Cli::try_parse_from([
            "cognipath",
            "chat",
            "tutor",
            "explain this",
            "--attach",
            "q.png",
        ])
        .unwrap();

        let Commands::Chat(args) = cli.command else {
            panic!("expected chat command");
        };
        assert_eq!(args.mode, ChatMode::Tutor);
        assert_eq!(args.message, "explain this");
        assert_eq!(args.attach, Some(PathBuf::from("q.png")));
    }

    #[test]
    fn review_rating_is_bounded() {
        assert!(Cli::try_parse_from(["cognipath", "review", "add", "--rating", "6", "ok"]).is_err());

        let cli = Cli::try_parse_from(["cognipath", "review", "add", "great"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Review {
                action: ReviewCommands::Add { rating: 5, .. }
            }
        ));
    }

    #[test]
    fn routine_items_are_numbered_from_one() {
        assert!(Cli::try_parse_from(["cognipath", "routine", "toggle", "0"]).is_err());

        let cli = Cli::try_parse_from(["cognipath", "routine", "toggle", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Routine {
                action: RoutineCommands::Toggle { item: 2 }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["cognipath", "whoami", "--data-dir", "/tmp/x", "-v"]).unwrap();
        assert_eq!(cli.overrides().data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }
}
