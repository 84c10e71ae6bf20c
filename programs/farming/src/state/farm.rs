use anchor_lang::prelude::*;

use super::NUM_REWARDS;

pub const FARM_SEED: &[u8] = b"farm";

/// Links one liquidity position to one incentive while actively earning.
/// Created on enter, closed on exit; unclaimed rewards live in the ledger,
/// not here.
#[account]
#[derive(Default)]
pub struct Farm {
    pub incentive: Pubkey,
    /// Mint of the position NFT in the external registry.
    pub position: Pubkey,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub liquidity: u128,
    /// X128 inner-growth snapshots taken at entry or last settlement.
    pub inner_rewards_growth: [u128; NUM_REWARDS],
}

impl Farm {
    pub const LEN: usize = 8 + 32 + 32 + 4 + 4 + 16 + NUM_REWARDS * 16;

    pub fn initialize(
        &mut self,
        incentive: Pubkey,
        position: Pubkey,
        tick_lower_index: i32,
        tick_upper_index: i32,
        liquidity: u128,
        inner_rewards_growth: [u128; NUM_REWARDS],
    ) {
        self.incentive = incentive;
        self.position = position;
        self.tick_lower_index = tick_lower_index;
        self.tick_upper_index = tick_upper_index;
        self.liquidity = liquidity;
        self.inner_rewards_growth = inner_rewards_growth;
    }

    pub fn is_live(&self) -> bool {
        self.liquidity > 0
    }
}
