use anchor_lang::prelude::*;
use anchor_lang::AccountsClose;

use crate::events::{FarmEnded, RewardsCollected};
use crate::manager::farm_manager::update_farm_liquidity;
use crate::state::*;
use crate::util::to_timestamp_u64;

#[derive(Accounts)]
#[instruction(position_mint: Pubkey)]
pub struct ApplyLiquidityDelta<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub config: Box<Account<'info, FarmingConfig>>,

    #[account(address = config.farming_center)]
    pub farming_center: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut)]
    pub incentive: Box<Account<'info, Incentive>>,

    #[account(mut, address = incentive.virtual_pool)]
    pub virtual_pool: Box<Account<'info, VirtualPool>>,

    #[account(address = incentive.pool)]
    pub pool: Box<Account<'info, Pool>>,

    /// Absent when the position was never farmed; the notification is then a
    /// no-op.
    #[account(
        mut,
        seeds = [FARM_SEED, incentive.key().as_ref(), position_mint.as_ref()],
        bump,
    )]
    pub farm: Option<Box<Account<'info, Farm>>>,

    /// CHECK: receives the rent when a liquidity change becomes a full exit
    #[account(mut)]
    pub receiver: UncheckedAccount<'info>,

    /// CHECK: ledger owner the settled rewards are credited to
    pub owner: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = RewardBalance::LEN,
        seeds = [REWARD_BALANCE_SEED, owner.key().as_ref(), incentive.reward_mint.as_ref()],
        bump,
    )]
    pub reward_balance: Box<Account<'info, RewardBalance>>,

    #[account(
        init_if_needed,
        payer = payer,
        space = RewardBalance::LEN,
        seeds = [REWARD_BALANCE_SEED, owner.key().as_ref(), incentive.bonus_reward_mint.as_ref()],
        bump,
    )]
    pub bonus_reward_balance: Box<Account<'info, RewardBalance>>,

    pub system_program: Program<'info, System>,
}

/// Relays a liquidity-change notification from the external position
/// registry. The registry has already applied the change on its side;
/// `new_liquidity` is the position's resulting liquidity.
pub fn handler(
    ctx: Context<ApplyLiquidityDelta>,
    position_mint: Pubkey,
    new_liquidity: u128,
) -> Result<()> {
    let Some(farm) = ctx.accounts.farm.as_mut() else {
        return Ok(());
    };

    let timestamp = to_timestamp_u64(Clock::get()?.unix_timestamp)?;
    let outcome = update_farm_liquidity(
        &mut ctx.accounts.virtual_pool,
        &mut ctx.accounts.incentive,
        farm,
        new_liquidity,
        ctx.accounts.pool.tick_current_index,
        timestamp,
        ctx.accounts.config.emergency_withdraw,
    )?;

    let owner = ctx.accounts.owner.key();
    let incentive = &ctx.accounts.incentive;

    let reward_balance = &mut ctx.accounts.reward_balance;
    reward_balance.owner = owner;
    reward_balance.mint = incentive.reward_mint;
    reward_balance.credit(outcome.amounts[0])?;

    let bonus_reward_balance = &mut ctx.accounts.bonus_reward_balance;
    bonus_reward_balance.owner = owner;
    bonus_reward_balance.mint = incentive.bonus_reward_mint;
    bonus_reward_balance.credit(outcome.amounts[1])?;

    if outcome.exited {
        farm.close(ctx.accounts.receiver.to_account_info())?;
        emit!(FarmEnded {
            incentive: incentive.key(),
            position: position_mint,
            reward: outcome.amounts[0],
            bonus_reward: outcome.amounts[1],
            to: owner,
        });
    } else if outcome.amounts != [0, 0] {
        emit!(RewardsCollected {
            incentive: incentive.key(),
            position: position_mint,
            reward: outcome.amounts[0],
            bonus_reward: outcome.amounts[1],
            to: owner,
        });
    }

    Ok(())
}
