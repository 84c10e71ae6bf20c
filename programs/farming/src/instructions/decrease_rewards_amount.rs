use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::events::RewardAmountsDecreased;
use crate::manager::virtual_pool_manager::next_virtual_pool_rewards;
use crate::state::*;
use crate::util::{to_timestamp_u64, transfer_from_vault};

#[derive(Accounts)]
pub struct DecreaseRewardsAmount<'info> {
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

/// Withdraws undistributed reward backing. Requests above the available
/// reserve are clipped to the reserve rather than rejected, so wind-down
/// never has to guess the exact remaining amount.
pub fn handler(ctx: Context<DecreaseRewardsAmount>, reward: u64, bonus_reward: u64) -> Result<()> {
    let virtual_pool = &mut ctx.accounts.virtual_pool;

    // only what is still undistributed after settling can be withdrawn
    let timestamp = to_timestamp_u64(Clock::get()?.unix_timestamp)?;
    let reward_infos = next_virtual_pool_rewards(virtual_pool, timestamp)?;
    virtual_pool.update_rewards(reward_infos, timestamp);

    let amount = reward.min(virtual_pool.reward_infos[0].reserve);
    let bonus_amount = bonus_reward.min(virtual_pool.reward_infos[1].reserve);
    virtual_pool.reward_infos[0].reserve -= amount;
    virtual_pool.reward_infos[1].reserve -= bonus_amount;

    ctx.accounts.incentive.decrease_rewards(amount, bonus_amount);

    transfer_from_vault(
        &ctx.accounts.config,
        &ctx.accounts.reward_vault,
        &ctx.accounts.maker_reward_account,
        &ctx.accounts.token_program,
        amount,
    )?;
    transfer_from_vault(
        &ctx.accounts.config,
        &ctx.accounts.bonus_reward_vault,
        &ctx.accounts.maker_bonus_reward_account,
        &ctx.accounts.token_program,
        bonus_amount,
    )?;

    if amount > 0 || bonus_amount > 0 {
        emit!(RewardAmountsDecreased {
            incentive: ctx.accounts.incentive.key(),
            reward: amount,
            bonus_reward: bonus_amount,
        });
    }

    Ok(())
}
