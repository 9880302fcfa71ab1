pub mod params;
pub mod session;
pub mod utils;
