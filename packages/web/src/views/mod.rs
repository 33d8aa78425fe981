mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::Profile;

mod documents;
pub use documents::Documents;

mod document_edit;
pub use document_edit::DocumentEdit;

mod tasks;
pub use tasks::{DocumentTasks, Tasks};

mod not_found;
pub use not_found::NotFound;
