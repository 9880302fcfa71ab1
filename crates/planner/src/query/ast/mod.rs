pub mod clear;
pub mod common;
pub mod insert;
pub mod select;
