use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::events::RewardsCollected;
use crate::manager::farm_manager::collect_farm_rewards;
use crate::state::*;
use crate::util::{to_timestamp_u64, verify_position_authority};

#[derive(Accounts)]
#[instruction(position_mint: Pubkey)]
pub struct CollectRewards<'info> {
    pub incentive: Box<Account<'info, Incentive>>,

    #[account(mut)]
    pub position_authority: Signer<'info>,

    #[account(constraint = position_token_account.mint == position_mint)]
    pub position_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = incentive.virtual_pool)]
    pub virtual_pool: Box<Account<'info, VirtualPool>>,

    #[account(
        mut,
        seeds = [FARM_SEED, incentive.key().as_ref(), position_mint.as_ref()],
        bump,
    )]
    pub farm: Box<Account<'info, Farm>>,

    /// CHECK: ledger owner the settled rewards are credited to
    pub to: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = position_authority,
        space = RewardBalance::LEN,
        seeds = [REWARD_BALANCE_SEED, to.key().as_ref(), incentive.reward_mint.as_ref()],
        bump,
    )]
    pub reward_balance: Box<Account<'info, RewardBalance>>,

    #[account(
        init_if_needed,
        payer = position_authority,
        space = RewardBalance::LEN,
        seeds = [REWARD_BALANCE_SEED, to.key().as_ref(), incentive.bonus_reward_mint.as_ref()],
        bump,
    )]
    pub bonus_reward_balance: Box<Account<'info, RewardBalance>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CollectRewards>, position_mint: Pubkey) -> Result<()> {
    verify_position_authority(
        &ctx.accounts.position_token_account,
        &position_mint,
        &ctx.accounts.position_authority,
    )?;

    let timestamp = to_timestamp_u64(Clock::get()?.unix_timestamp)?;
    let amounts = collect_farm_rewards(
        &mut ctx.accounts.virtual_pool,
        &mut ctx.accounts.farm,
        timestamp,
    )?;

    // a settlement with nothing accrued is a no-op, not an error
    if amounts == [0, 0] {
        return Ok(());
    }

    let to = ctx.accounts.to.key();
    let incentive = &ctx.accounts.incentive;

    let reward_balance = &mut ctx.accounts.reward_balance;
    reward_balance.owner = to;
    reward_balance.mint = incentive.reward_mint;
    reward_balance.credit(amounts[0])?;

    let bonus_reward_balance = &mut ctx.accounts.bonus_reward_balance;
    bonus_reward_balance.owner = to;
    bonus_reward_balance.mint = incentive.bonus_reward_mint;
    bonus_reward_balance.credit(amounts[1])?;

    emit!(RewardsCollected {
        incentive: incentive.key(),
        position: position_mint,
        reward: amounts[0],
        bonus_reward: amounts[1],
        to,
    });

    Ok(())
}
