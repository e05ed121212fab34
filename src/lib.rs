pub mod errors;
pub mod handlers;
pub mod models;
pub mod templates_structs;
pub mod validate;
pub mod viewer;
