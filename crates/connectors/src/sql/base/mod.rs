pub mod error;
pub mod installer;
pub mod query;
pub mod requests;
pub mod session;
