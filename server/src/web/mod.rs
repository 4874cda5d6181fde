mod error;
pub mod routes_app;

pub use error::{Error, Result};
