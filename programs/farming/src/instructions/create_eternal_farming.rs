use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::errors::ErrorCode;
use crate::events::EternalFarmingCreated;
use crate::state::*;
use crate::util::{to_timestamp_u64, transfer_to_vault_measured};

#[derive(Accounts)]
#[instruction(nonce: u64)]
pub struct CreateEternalFarming<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub config: Box<Account<'info, FarmingConfig>>,

    #[account(mut, address = config.incentive_maker)]
    pub incentive_maker: Signer<'info>,

    #[account(mut)]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init,
        payer = incentive_maker,
        space = Incentive::LEN,
        seeds = [
            INCENTIVE_SEED,
            pool.key().as_ref(),
            reward_mint.key().as_ref(),
            bonus_reward_mint.key().as_ref(),
            nonce.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub incentive: Box<Account<'info, Incentive>>,

    #[account(
        init,
        payer = incentive_maker,
        space = VirtualPool::LEN,
        seeds = [VIRTUAL_POOL_SEED, incentive.key().as_ref()],
        bump,
    )]
    pub virtual_pool: Box<Account<'info, VirtualPool>>,

    pub reward_mint: Box<Account<'info, Mint>>,
    pub bonus_reward_mint: Box<Account<'info, Mint>>,

    #[account(mut,
        constraint = reward_vault.owner == config.key(),
        constraint = reward_vault.mint == reward_mint.key(),
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut,
        constraint = bonus_reward_vault.owner == config.key(),
        constraint = bonus_reward_vault.mint == bonus_reward_mint.key(),
    )]
    pub bonus_reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, constraint = maker_reward_account.mint == reward_mint.key())]
    pub maker_reward_account: Box<Account<'info, TokenAccount>>,
    #[account(mut, constraint = maker_bonus_reward_account.mint == bonus_reward_mint.key())]
    pub maker_bonus_reward_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<CreateEternalFarming>,
    nonce: u64,
    reward: u64,
    bonus_reward: u64,
    reward_rate: u64,
    bonus_reward_rate: u64,
    minimal_position_width: u32,
    plugin: Pubkey,
) -> Result<()> {
    let pool = &mut ctx.accounts.pool;

    if reward == 0 {
        return Err(ErrorCode::ZeroRewardAmount.into());
    }
    if plugin != pool.plugin {
        return Err(ErrorCode::PluginNotConnected.into());
    }
    if pool.has_active_incentive() {
        return Err(ErrorCode::AnotherFarmingIsActive.into());
    }
    if minimal_position_width > (MAX_TICK_INDEX - MIN_TICK_INDEX) as u32 {
        return Err(ErrorCode::MinimalPositionWidthTooWide.into());
    }
    if ctx.accounts.reward_mint.key() == ctx.accounts.bonus_reward_mint.key() {
        return Err(ErrorCode::DuplicateRewardMint.into());
    }

    // the books record what the vaults actually received, not what was asked
    let received = transfer_to_vault_measured(
        &ctx.accounts.incentive_maker,
        &ctx.accounts.maker_reward_account,
        &mut ctx.accounts.reward_vault,
        &ctx.accounts.token_program,
        reward,
    )?;
    let bonus_received = transfer_to_vault_measured(
        &ctx.accounts.incentive_maker,
        &ctx.accounts.maker_bonus_reward_account,
        &mut ctx.accounts.bonus_reward_vault,
        &ctx.accounts.token_program,
        bonus_reward,
    )?;

    let incentive = &mut ctx.accounts.incentive;
    incentive.initialize(
        pool.key(),
        ctx.accounts.reward_mint.key(),
        ctx.accounts.bonus_reward_mint.key(),
        ctx.accounts.virtual_pool.key(),
        nonce,
        received,
        bonus_received,
        minimal_position_width,
    );

    let timestamp = to_timestamp_u64(Clock::get()?.unix_timestamp)?;
    let virtual_pool = &mut ctx.accounts.virtual_pool;
    virtual_pool.initialize(
        incentive.key(),
        pool.key(),
        pool.tick_spacing,
        pool.tick_current_index,
        timestamp,
        [reward_rate, bonus_reward_rate],
        [received, bonus_received],
    );

    pool.connect_incentive(incentive.key());

    emit!(EternalFarmingCreated {
        incentive: incentive.key(),
        pool: pool.key(),
        virtual_pool: virtual_pool.key(),
        reward_mint: ctx.accounts.reward_mint.key(),
        bonus_reward_mint: ctx.accounts.bonus_reward_mint.key(),
        reward: received,
        bonus_reward: bonus_received,
        reward_rate,
        bonus_reward_rate,
        minimal_position_width,
        nonce,
    });

    Ok(())
}
