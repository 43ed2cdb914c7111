pub mod omdb;
pub mod validate;
