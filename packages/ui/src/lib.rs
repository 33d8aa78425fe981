//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_auth, use_current_user, AuthProvider, LogoutButton};

mod services;
pub use services::{use_services, ServicesProvider};

mod navbar;
pub use navbar::Navbar;

mod modal;
pub use modal::{flash, ConfirmDialog, ModalOverlay, Notice};

pub mod document_editor;
pub use document_editor::{DocumentEditor, EditorDraft, EditorMode};

mod document_card;
pub use document_card::DocumentCard;

pub mod task_form;
pub use task_form::{TaskDraft, TaskForm};

mod task_board;
pub use task_board::TaskBoard;
