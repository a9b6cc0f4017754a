pub mod draft;
pub mod employee;
pub mod session;
