use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::events::PoolRegistered;
use crate::state::*;

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(init, payer = funder, space = Pool::LEN)]
    pub pool: Account<'info, Pool>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializePool>,
    plugin: Pubkey,
    initial_tick: i32,
    tick_spacing: u16,
) -> Result<()> {
    if tick_spacing == 0 {
        return Err(ErrorCode::InvalidTickSpacing.into());
    }
    if Tick::check_is_out_of_bounds(initial_tick) {
        return Err(ErrorCode::InvalidTickIndex.into());
    }

    let pool = &mut ctx.accounts.pool;
    pool.initialize(plugin, initial_tick, tick_spacing);

    emit!(PoolRegistered {
        pool: pool.key(),
        plugin,
        tick_spacing,
    });

    Ok(())
}
