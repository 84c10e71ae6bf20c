use anchor_lang::prelude::*;

use crate::state::*;

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(init, payer = funder, space = FarmingConfig::LEN, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, FarmingConfig>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeConfig>,
    owner: Pubkey,
    incentive_maker: Pubkey,
    farming_center: Pubkey,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.initialize(owner, incentive_maker, farming_center, ctx.bumps.config);

    Ok(())
}
