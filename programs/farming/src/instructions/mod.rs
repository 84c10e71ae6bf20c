pub mod add_rewards;
pub mod apply_liquidity_delta;
pub mod claim_reward;
pub mod collect_rewards;
pub mod create_eternal_farming;
pub mod cross_to;
pub mod deactivate_incentive;
pub mod decrease_rewards_amount;
pub mod enter_farming;
pub mod exit_farming;
pub mod initialize_config;
pub mod initialize_pool;
pub mod set_emergency_withdraw_status;
pub mod set_rates;

pub use add_rewards::*;
pub use apply_liquidity_delta::*;
pub use claim_reward::*;
pub use collect_rewards::*;
pub use create_eternal_farming::*;
pub use cross_to::*;
pub use deactivate_incentive::*;
pub use decrease_rewards_amount::*;
pub use enter_farming::*;
pub use exit_farming::*;
pub use initialize_config::*;
pub use initialize_pool::*;
pub use set_emergency_withdraw_status::*;
pub use set_rates::*;
