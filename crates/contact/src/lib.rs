mod collector;
mod error;
mod gateway;
mod mailer;
mod message;
mod result;
mod state;
mod submission;

pub use collector::*;
pub use error::*;
pub use gateway::*;
pub use mailer::*;
pub use message::*;
pub use result::*;
pub use state::*;
pub use submission::*;
