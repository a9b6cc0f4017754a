pub mod image;
pub mod jwt;
pub mod session;
pub mod validation;
