pub mod records;
pub mod transform;
