pub mod image;
pub mod row;
