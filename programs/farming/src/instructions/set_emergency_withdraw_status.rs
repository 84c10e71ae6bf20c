use anchor_lang::prelude::*;

use crate::events::EmergencyWithdrawStatusChanged;
use crate::state::*;

#[derive(Accounts)]
pub struct SetEmergencyWithdrawStatus<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, FarmingConfig>,

    #[account(address = config.owner)]
    pub owner: Signer<'info>,
}

pub fn handler(ctx: Context<SetEmergencyWithdrawStatus>, active: bool) -> Result<()> {
    ctx.accounts.config.set_emergency_withdraw(active);

    emit!(EmergencyWithdrawStatusChanged { active });

    Ok(())
}
