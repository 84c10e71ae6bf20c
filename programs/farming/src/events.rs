use anchor_lang::prelude::*;

#[event]
pub struct PoolRegistered {
    pub pool: Pubkey,
    pub plugin: Pubkey,
    pub tick_spacing: u16,
}

#[event]
pub struct EternalFarmingCreated {
    pub incentive: Pubkey,
    pub pool: Pubkey,
    pub virtual_pool: Pubkey,
    pub reward_mint: Pubkey,
    pub bonus_reward_mint: Pubkey,
    pub reward: u64,
    pub bonus_reward: u64,
    pub reward_rate: u64,
    pub bonus_reward_rate: u64,
    pub minimal_position_width: u32,
    pub nonce: u64,
}

#[event]
pub struct FarmEntered {
    pub incentive: Pubkey,
    pub position: Pubkey,
    pub liquidity: u128,
}

#[event]
pub struct FarmEnded {
    pub incentive: Pubkey,
    pub position: Pubkey,
    pub reward: u64,
    pub bonus_reward: u64,
    pub to: Pubkey,
}

#[event]
pub struct RewardsCollected {
    pub incentive: Pubkey,
    pub position: Pubkey,
    pub reward: u64,
    pub bonus_reward: u64,
    pub to: Pubkey,
}

#[event]
pub struct RewardClaimed {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RewardsRatesChanged {
    pub incentive: Pubkey,
    pub reward_rate: u64,
    pub bonus_reward_rate: u64,
}

#[event]
pub struct RewardsAdded {
    pub incentive: Pubkey,
    pub reward: u64,
    pub bonus_reward: u64,
}

#[event]
pub struct RewardAmountsDecreased {
    pub incentive: Pubkey,
    pub reward: u64,
    pub bonus_reward: u64,
}

#[event]
pub struct IncentiveDeactivated {
    pub incentive: Pubkey,
}

#[event]
pub struct EmergencyWithdrawStatusChanged {
    pub active: bool,
}
