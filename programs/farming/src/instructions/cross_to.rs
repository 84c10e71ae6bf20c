use anchor_lang::prelude::*;

use crate::manager::virtual_pool_manager;
use crate::state::*;
use crate::util::to_timestamp_u64;

#[derive(Accounts)]
pub struct CrossTo<'info> {
    #[account(mut)]
    pub pool: Box<Account<'info, Pool>>,

    #[account(address = pool.plugin)]
    pub plugin: Signer<'info>,

    #[account(mut, constraint = virtual_pool.pool == pool.key())]
    pub virtual_pool: Box<Account<'info, VirtualPool>>,
}

/// Tick-crossing notification from the price engine's hook. An inconsistent
/// direction deactivates the virtual pool instead of erroring: the caller is
/// the trusted engine, not a party that benefits from the failure.
pub fn handler(ctx: Context<CrossTo>, target_tick: i32, zero_to_one: bool) -> Result<()> {
    let timestamp = to_timestamp_u64(Clock::get()?.unix_timestamp)?;
    virtual_pool_manager::cross_to(
        &mut ctx.accounts.virtual_pool,
        target_tick,
        zero_to_one,
        timestamp,
    )?;

    ctx.accounts.pool.tick_current_index = target_tick;

    Ok(())
}
