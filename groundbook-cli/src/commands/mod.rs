//! Command implementations for the groundbook CLI.

mod book;
mod cancel;
mod completions;
mod ground;
mod init;
mod list;
mod review;
mod slots;
mod user;

pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use ground::GroundCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use review::{ApproveCommand, RejectCommand};
pub use slots::SlotsCommand;
pub use user::UserCommand;
