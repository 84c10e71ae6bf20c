use anchor_lang::prelude::*;

use std::result::Result;

use crate::errors::ErrorCode;

pub const INCENTIVE_SEED: &[u8] = b"incentive";

/// A configured reward program for one pool and reward-token pair.
///
/// The record outlives deactivation so farms can still settle and exit
/// against it; only `deactivated` and the reserve mirrors keep moving.
#[account]
#[derive(Default)]
pub struct Incentive {
    pub pool: Pubkey,
    pub reward_mint: Pubkey,
    pub bonus_reward_mint: Pubkey,
    pub virtual_pool: Pubkey,
    pub nonce: u64,
    /// Mirrors of the measured amounts currently backing the incentive.
    pub total_reward: u64,
    pub bonus_reward: u64,
    /// Positions narrower than this many ticks cannot enter.
    pub minimal_position_width: u32,
    pub deactivated: bool,
    /// Count of live farm records referencing this incentive.
    pub number_of_farms: u64,
}

impl Incentive {
    pub const LEN: usize = 8 + 32 * 4 + 8 + 8 + 8 + 4 + 1 + 8;

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        pool: Pubkey,
        reward_mint: Pubkey,
        bonus_reward_mint: Pubkey,
        virtual_pool: Pubkey,
        nonce: u64,
        total_reward: u64,
        bonus_reward: u64,
        minimal_position_width: u32,
    ) {
        self.pool = pool;
        self.reward_mint = reward_mint;
        self.bonus_reward_mint = bonus_reward_mint;
        self.virtual_pool = virtual_pool;
        self.nonce = nonce;
        self.total_reward = total_reward;
        self.bonus_reward = bonus_reward;
        self.minimal_position_width = minimal_position_width;
        self.deactivated = false;
        self.number_of_farms = 0;
    }

    pub fn add_rewards(&mut self, reward: u64, bonus_reward: u64) -> Result<(), ErrorCode> {
        self.total_reward = self
            .total_reward
            .checked_add(reward)
            .ok_or(ErrorCode::RewardReserveOverflow)?;
        self.bonus_reward = self
            .bonus_reward
            .checked_add(bonus_reward)
            .ok_or(ErrorCode::RewardReserveOverflow)?;
        Ok(())
    }

    pub fn decrease_rewards(&mut self, reward: u64, bonus_reward: u64) {
        self.total_reward = self.total_reward.saturating_sub(reward);
        self.bonus_reward = self.bonus_reward.saturating_sub(bonus_reward);
    }

    pub fn deactivate(&mut self) {
        self.deactivated = true;
    }
}
