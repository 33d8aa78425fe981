pub mod board;
pub mod codec;
pub mod config;
pub mod error;
pub mod library;
pub mod models;
pub mod routes;
pub mod session;

pub use board::{Board, TaskStatus};
pub use codec::{Block, BlockDocument, BlockKind};
pub use config::ServiceConfig;
pub use error::{AuthError, ValidationError};
pub use library::{Library, WorkspaceFilter};
pub use models::{
    Document, DocumentPatch, NewDocument, NewTask, Task, TaskUpdate, UserInfo, UserUpdate,
};
pub use routes::{AccessDecision, View};
pub use session::{CredentialVerifier, ProfileSource, Session, SessionGuard};
