pub mod errors;
pub mod range;
