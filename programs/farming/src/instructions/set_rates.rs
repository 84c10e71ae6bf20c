use anchor_lang::prelude::*;

use crate::events::RewardsRatesChanged;
use crate::manager::virtual_pool_manager::set_reward_rates;
use crate::state::*;
use crate::util::to_timestamp_u64;

#[derive(Accounts)]
pub struct SetRates<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub config: Box<Account<'info, FarmingConfig>>,

    #[account(address = config.incentive_maker)]
    pub incentive_maker: Signer<'info>,

    pub incentive: Box<Account<'info, Incentive>>,

    #[account(mut, address = incentive.virtual_pool)]
    pub virtual_pool: Box<Account<'info, VirtualPool>>,
}

pub fn handler(ctx: Context<SetRates>, reward_rate: u64, bonus_reward_rate: u64) -> Result<()> {
    let timestamp = to_timestamp_u64(Clock::get()?.unix_timestamp)?;
    set_reward_rates(
        &mut ctx.accounts.virtual_pool,
        ctx.accounts.incentive.deactivated,
        [reward_rate, bonus_reward_rate],
        timestamp,
    )?;

    emit!(RewardsRatesChanged {
        incentive: ctx.accounts.incentive.key(),
        reward_rate,
        bonus_reward_rate,
    });

    Ok(())
}
