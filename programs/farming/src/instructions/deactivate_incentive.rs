use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::events::IncentiveDeactivated;
use crate::manager::virtual_pool_manager::next_virtual_pool_rewards;
use crate::state::*;
use crate::util::to_timestamp_u64;

#[derive(Accounts)]
pub struct DeactivateIncentive<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub config: Box<Account<'info, FarmingConfig>>,

    #[account(address = config.incentive_maker)]
    pub incentive_maker: Signer<'info>,

    #[account(mut)]
    pub incentive: Box<Account<'info, Incentive>>,

    #[account(mut, address = incentive.virtual_pool)]
    pub virtual_pool: Box<Account<'info, VirtualPool>>,

    #[account(mut, address = incentive.pool)]
    pub pool: Box<Account<'info, Pool>>,
}

/// Permanently stops an incentive. If the price engine already detached the
/// hook on its own, this call catches the local record up instead of failing.
pub fn handler(ctx: Context<DeactivateIncentive>) -> Result<()> {
    let incentive = &mut ctx.accounts.incentive;
    if incentive.deactivated {
        return Err(ErrorCode::IncentiveStopped.into());
    }

    let virtual_pool = &mut ctx.accounts.virtual_pool;

    // growth accrued up to this moment is preserved for later exits
    let timestamp = to_timestamp_u64(Clock::get()?.unix_timestamp)?;
    let reward_infos = next_virtual_pool_rewards(virtual_pool, timestamp)?;
    virtual_pool.update_rewards(reward_infos, timestamp);

    virtual_pool.zero_rates();
    virtual_pool.deactivate();
    incentive.deactivate();

    let pool = &mut ctx.accounts.pool;
    if pool.active_incentive == incentive.key() {
        pool.disconnect_incentive();
    }

    emit!(IncentiveDeactivated {
        incentive: incentive.key(),
    });

    Ok(())
}
