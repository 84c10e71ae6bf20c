pub mod config;
pub mod farm;
pub mod incentive;
pub mod pool;
pub mod reward_balance;
pub mod tick;
pub mod tickmap;
pub mod virtual_pool;

pub use self::virtual_pool::*;
pub use config::*;
pub use farm::*;
pub use incentive::*;
pub use pool::*;
pub use reward_balance::*;
pub use tick::*;
pub use tickmap::*;
