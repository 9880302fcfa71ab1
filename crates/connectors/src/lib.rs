pub mod file;
pub mod installer;
pub mod sql;
