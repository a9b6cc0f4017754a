pub mod auth_gate;
pub mod dashboard;
pub mod form;

pub use auth_gate::{AuthGate, CredentialStore};
pub use dashboard::DashboardState;
pub use form::FormController;
