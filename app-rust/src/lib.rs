mod app;
pub mod attachment;
pub mod chat;
pub mod config;
pub mod dashboard;
mod errors;
pub mod history;
pub mod instruction;
pub mod pyq;
pub mod reviews;
pub mod routine;
pub mod session;
pub mod store;
pub mod types;

pub use app::Scholar;
pub use errors::{ScholarError, ScholarResult};
pub use instruction::ChatMode;
pub use types::*;
