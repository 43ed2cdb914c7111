pub mod error;
pub mod movie;
pub mod response;
pub mod user;
