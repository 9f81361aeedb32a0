pub mod patterns;
pub mod extract;

pub use extract::*;
