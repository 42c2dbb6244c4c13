//! songwriter-services: song persistence and edit sessions

mod error;
pub mod project;
pub mod session;

pub use error::{Result, ServiceError};
pub use project::ProjectStore;
pub use session::{EditAction, EditOutcome, EditSession};
