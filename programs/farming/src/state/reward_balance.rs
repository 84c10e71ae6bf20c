use anchor_lang::prelude::*;

use std::result::Result;

use crate::errors::ErrorCode;

pub const REWARD_BALANCE_SEED: &[u8] = b"reward_balance";

/// Claimable-reward ledger entry for one (owner, mint) pair.
///
/// Credited by exit/collect settlement, debited by claim. Tokens themselves
/// stay in the program vault until claimed.
#[account]
#[derive(Default)]
pub struct RewardBalance {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

impl RewardBalance {
    pub const LEN: usize = 8 + 32 + 32 + 8;

    pub fn credit(&mut self, amount: u64) -> Result<(), ErrorCode> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(ErrorCode::RewardReserveOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) {
        self.amount = self.amount.saturating_sub(amount);
    }
}
