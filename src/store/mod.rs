pub mod employee;
pub mod session;

pub use employee::EmployeeStore;
pub use session::SessionStore;
