use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::events::FarmEntered;
use crate::manager::farm_manager::enter_farm;
use crate::state::*;
use crate::util::to_timestamp_u64;

#[derive(Accounts)]
#[instruction(position_mint: Pubkey)]
pub struct EnterFarming<'info> {
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
        init_if_needed,
        payer = payer,
        space = Farm::LEN,
        seeds = [FARM_SEED, incentive.key().as_ref(), position_mint.as_ref()],
        bump,
    )]
    pub farm: Box<Account<'info, Farm>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<EnterFarming>,
    position_mint: Pubkey,
    position_pool: Pubkey,
    liquidity: u128,
    tick_lower_index: i32,
    tick_upper_index: i32,
) -> Result<()> {
    let farm = &mut ctx.accounts.farm;
    if farm.is_live() {
        return Err(ErrorCode::TokenAlreadyFarmed.into());
    }
    if position_pool != ctx.accounts.incentive.pool {
        return Err(ErrorCode::InvalidPool.into());
    }

    let timestamp = to_timestamp_u64(Clock::get()?.unix_timestamp)?;
    let inner_rewards_growth = enter_farm(
        &mut ctx.accounts.virtual_pool,
        &mut ctx.accounts.incentive,
        liquidity,
        tick_lower_index,
        tick_upper_index,
        ctx.accounts.pool.tick_current_index,
        timestamp,
        ctx.accounts.config.emergency_withdraw,
    )?;

    farm.initialize(
        ctx.accounts.incentive.key(),
        position_mint,
        tick_lower_index,
        tick_upper_index,
        liquidity,
        inner_rewards_growth,
    );

    emit!(FarmEntered {
        incentive: ctx.accounts.incentive.key(),
        position: position_mint,
        liquidity,
    });

    Ok(())
}
