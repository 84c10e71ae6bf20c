pub mod shared;
pub mod token;

pub use shared::*;
pub use token::*;
