pub mod bn;
pub mod reward_math;

pub use bn::*;
pub use reward_math::*;
