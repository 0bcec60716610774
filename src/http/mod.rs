pub mod routing;
pub mod trace;
pub mod types;
