pub mod auth;
pub mod employee;
pub mod file;
pub mod form;
pub mod view;
