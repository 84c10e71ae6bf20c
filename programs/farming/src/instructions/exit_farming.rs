use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::events::FarmEnded;
use crate::manager::farm_manager::exit_farm;
use crate::state::*;
use crate::util::to_timestamp_u64;

#[derive(Accounts)]
#[instruction(position_mint: Pubkey)]
pub struct ExitFarming<'info> {
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

    #[account(
        mut,
        close = receiver,
        seeds = [FARM_SEED, incentive.key().as_ref(), position_mint.as_ref()],
        bump,
    )]
    pub farm: Box<Account<'info, Farm>>,

    /// CHECK: destination for the closed farm record's rent
    #[account(mut)]
    pub receiver: UncheckedAccount<'info>,

    /// CHECK: ledger owner the settled rewards are credited to
    pub to: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = RewardBalance::LEN,
        seeds = [REWARD_BALANCE_SEED, to.key().as_ref(), incentive.reward_mint.as_ref()],
        bump,
    )]
    pub reward_balance: Box<Account<'info, RewardBalance>>,

    #[account(
        init_if_needed,
        payer = payer,
        space = RewardBalance::LEN,
        seeds = [REWARD_BALANCE_SEED, to.key().as_ref(), incentive.bonus_reward_mint.as_ref()],
        bump,
    )]
    pub bonus_reward_balance: Box<Account<'info, RewardBalance>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ExitFarming>, position_mint: Pubkey) -> Result<()> {
    let farm = &ctx.accounts.farm;
    if !farm.is_live() {
        return Err(ErrorCode::FarmDoesNotExist.into());
    }

    let timestamp = to_timestamp_u64(Clock::get()?.unix_timestamp)?;
    let amounts = exit_farm(
        &mut ctx.accounts.virtual_pool,
        &mut ctx.accounts.incentive,
        farm,
        ctx.accounts.pool.tick_current_index,
        timestamp,
    )?;

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

    emit!(FarmEnded {
        incentive: incentive.key(),
        position: position_mint,
        reward: amounts[0],
        bonus_reward: amounts[1],
        to,
    });

    Ok(())
}
