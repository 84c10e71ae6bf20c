use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::ErrorCode;
use crate::events::RewardsAdded;
use crate::manager::virtual_pool_manager::next_virtual_pool_rewards;
use crate::state::*;
use crate::util::{to_timestamp_u64, transfer_to_vault_measured};

#[derive(Accounts)]
pub struct AddRewards<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub config: Box<Account<'info, FarmingConfig>>,

    #[account(address = config.incentive_maker)]
    pub incentive_maker: Signer<'info>,

    #[account(mut)]
    pub incentive: Box<Account<'info, Incentive>>,

    #[account(mut, address = incentive.virtual_pool)]
    pub virtual_pool: Box<Account<'info, VirtualPool>>,

    #[account(mut,
        constraint = reward_vault.owner == config.key(),
        constraint = reward_vault.mint == incentive.reward_mint,
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut,
        constraint = bonus_reward_vault.owner == config.key(),
        constraint = bonus_reward_vault.mint == incentive.bonus_reward_mint,
    )]
    pub bonus_reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, constraint = maker_reward_account.mint == incentive.reward_mint)]
    pub maker_reward_account: Box<Account<'info, TokenAccount>>,
    #[account(mut, constraint = maker_bonus_reward_account.mint == incentive.bonus_reward_mint)]
    pub maker_bonus_reward_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<AddRewards>, reward: u64, bonus_reward: u64) -> Result<()> {
    let virtual_pool = &mut ctx.accounts.virtual_pool;
    if ctx.accounts.incentive.deactivated || virtual_pool.deactivated {
        return Err(ErrorCode::IncentiveStopped.into());
    }

    // settle before the reserve changes so past growth is charged against
    // the reserves that actually backed it
    let timestamp = to_timestamp_u64(Clock::get()?.unix_timestamp)?;
    let reward_infos = next_virtual_pool_rewards(virtual_pool, timestamp)?;
    virtual_pool.update_rewards(reward_infos, timestamp);

    let received = transfer_to_vault_measured(
        &ctx.accounts.incentive_maker,
        &ctx.accounts.maker_reward_account,
        &mut ctx.accounts.reward_vault,
        &ctx.accounts.token_program,
        reward,
    )?;
    let bonus_received = transfer_to_vault_measured(
        &ctx.accounts.incentive_maker,
        &ctx.accounts.maker_bonus_reward_account,
        &mut ctx.accounts.bonus_reward_vault,
        &ctx.accounts.token_program,
        bonus_reward,
    )?;

    let virtual_pool = &mut ctx.accounts.virtual_pool;
    virtual_pool.reward_infos[0].reserve = virtual_pool.reward_infos[0]
        .reserve
        .checked_add(received)
        .ok_or(ErrorCode::RewardReserveOverflow)?;
    virtual_pool.reward_infos[1].reserve = virtual_pool.reward_infos[1]
        .reserve
        .checked_add(bonus_received)
        .ok_or(ErrorCode::RewardReserveOverflow)?;

    ctx.accounts.incentive.add_rewards(received, bonus_received)?;

    if received > 0 || bonus_received > 0 {
        emit!(RewardsAdded {
            incentive: ctx.accounts.incentive.key(),
            reward: received,
            bonus_reward: bonus_received,
        });
    }

    Ok(())
}
