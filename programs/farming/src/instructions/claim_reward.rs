use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::ErrorCode;
use crate::events::RewardClaimed;
use crate::state::*;
use crate::util::transfer_from_vault;

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub config: Box<Account<'info, FarmingConfig>>,

    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [REWARD_BALANCE_SEED, owner.key().as_ref(), reward_balance.mint.as_ref()],
        bump,
    )]
    pub reward_balance: Box<Account<'info, RewardBalance>>,

    #[account(mut,
        constraint = reward_vault.owner == config.key(),
        constraint = reward_vault.mint == reward_balance.mint,
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut,
        constraint = to.key() != Pubkey::default() @ ErrorCode::ClaimToZeroAddress,
        constraint = to.mint == reward_balance.mint,
    )]
    pub to: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Pays out claimable rewards accumulated by exits and collections.
///
/// `amount_requested == 0` claims the full balance; a request above the
/// balance is clipped to it.
pub fn handler(ctx: Context<ClaimReward>, amount_requested: u64) -> Result<()> {
    let reward_balance = &mut ctx.accounts.reward_balance;

    let amount = calculate_claim_amount(reward_balance.amount, amount_requested);
    reward_balance.debit(amount);

    transfer_from_vault(
        &ctx.accounts.config,
        &ctx.accounts.reward_vault,
        &ctx.accounts.to,
        &ctx.accounts.token_program,
        amount,
    )?;

    if amount > 0 {
        emit!(RewardClaimed {
            mint: reward_balance.mint,
            owner: ctx.accounts.owner.key(),
            to: ctx.accounts.to.key(),
            amount,
        });
    }

    Ok(())
}

fn calculate_claim_amount(balance: u64, amount_requested: u64) -> u64 {
    if amount_requested == 0 {
        balance
    } else {
        amount_requested.min(balance)
    }
}
