pub mod error;
pub mod models;
pub mod utility;
pub mod tasks;
