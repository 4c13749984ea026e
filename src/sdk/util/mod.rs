pub mod log;
pub mod sign;
