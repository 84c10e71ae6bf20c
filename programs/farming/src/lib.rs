use anchor_lang::prelude::*;

declare_id!("3Pf4wmpHu27agdt8w3qanMsTQHy8rY311rf9oXhbgoC1");

#[doc(hidden)]
pub mod errors;
#[doc(hidden)]
pub mod events;
#[doc(hidden)]
pub mod instructions;
#[doc(hidden)]
pub mod manager;
#[doc(hidden)]
pub mod math;
pub mod state;
#[doc(hidden)]
pub mod tests;
#[doc(hidden)]
pub mod util;

use instructions::*;

#[program]
pub mod farming {
    use super::*;

    /// Initializes the FarmingConfig account that hosts the authorities
    /// governing all incentives.
    ///
    /// ### Parameters
    /// - `owner` - Authority authorized to toggle emergency-withdraw mode.
    /// - `incentive_maker` - Authority authorized to create, fund and
    ///   deactivate incentives.
    /// - `farming_center` - The routing boundary; the only signer accepted
    ///   for position-mutating farm operations.
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        owner: Pubkey,
        incentive_maker: Pubkey,
        farming_center: Pubkey,
    ) -> Result<()> {
        instructions::initialize_config::handler(ctx, owner, incentive_maker, farming_center)
    }

    /// Registers the farming-side mirror of an external pool: its plugin
    /// hook, tick spacing and current tick.
    ///
    /// #### Special Errors
    /// - `InvalidTickSpacing` - Zero tick spacing.
    /// - `InvalidTickIndex` - Initial tick outside the supported range.
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        plugin: Pubkey,
        initial_tick: i32,
        tick_spacing: u16,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, plugin, initial_tick, tick_spacing)
    }

    /// Creates an eternal (rate-based, refillable) incentive for a pool and
    /// connects its virtual pool to the pool's plugin hook. The recorded
    /// reward amounts are the balances the vaults actually received.
    ///
    /// ### Authority
    /// - "incentive_maker" - Set authority in the FarmingConfig.
    ///
    /// #### Special Errors
    /// - `ZeroRewardAmount` - No main reward provided.
    /// - `PluginNotConnected` - The declared plugin is not the pool's hook.
    /// - `AnotherFarmingIsActive` - The pool already has a connected incentive.
    /// - `MinimalPositionWidthTooWide` - Width above the full tick range.
    #[allow(clippy::too_many_arguments)]
    pub fn create_eternal_farming(
        ctx: Context<CreateEternalFarming>,
        nonce: u64,
        reward: u64,
        bonus_reward: u64,
        reward_rate: u64,
        bonus_reward_rate: u64,
        minimal_position_width: u32,
        plugin: Pubkey,
    ) -> Result<()> {
        instructions::create_eternal_farming::handler(
            ctx,
            nonce,
            reward,
            bonus_reward,
            reward_rate,
            bonus_reward_rate,
            minimal_position_width,
            plugin,
        )
    }

    /// Admits a position into an incentive and starts accruing rewards for
    /// it. Position facts are relayed by the farming center, which receives
    /// them from the external position registry.
    ///
    /// ### Authority
    /// - "farming_center" - Set authority in the FarmingConfig.
    ///
    /// #### Special Errors
    /// - `TokenAlreadyFarmed` - The position already has a live farm here.
    /// - `InvalidPool` - The position belongs to a different pool.
    /// - `ZeroLiquidity` - The position holds no liquidity.
    /// - `InvalidTickIndex` - Out-of-bounds or misaligned boundary ticks.
    /// - `PositionIsTooNarrow` - Range below the incentive's minimal width.
    /// - `IncentiveStopped` - Deactivated directly or by the price engine.
    /// - `EmergencyActivated` - Emergency-withdraw mode is on.
    pub fn enter_farming(
        ctx: Context<EnterFarming>,
        position_mint: Pubkey,
        position_pool: Pubkey,
        liquidity: u128,
        tick_lower_index: i32,
        tick_upper_index: i32,
    ) -> Result<()> {
        instructions::enter_farming::handler(
            ctx,
            position_mint,
            position_pool,
            liquidity,
            tick_lower_index,
            tick_upper_index,
        )
    }

    /// Settles a farm's rewards into the claimable ledger, removes its
    /// liquidity from the virtual pool and closes the farm record. Never
    /// blocked by deactivation or emergency mode, and a zero payout is fine.
    ///
    /// ### Authority
    /// - "farming_center" - Set authority in the FarmingConfig.
    ///
    /// #### Special Errors
    /// - `FarmDoesNotExist` - No live farm for this position.
    pub fn exit_farming(ctx: Context<ExitFarming>, position_mint: Pubkey) -> Result<()> {
        instructions::exit_farming::handler(ctx, position_mint)
    }

    /// Settles a farm's pending rewards into the claimable ledger and
    /// re-baselines its snapshots, keeping the farm open. A settlement with
    /// nothing accrued is a no-op.
    ///
    /// ### Authority
    /// - `position_authority` - owner of the token representing the position.
    pub fn collect_rewards(ctx: Context<CollectRewards>, position_mint: Pubkey) -> Result<()> {
        instructions::collect_rewards::handler(ctx, position_mint)
    }

    /// Pays claimable rewards out of the program vault. A zero
    /// `amount_requested` claims the full balance; larger requests are
    /// clipped to it.
    ///
    /// #### Special Errors
    /// - `ClaimToZeroAddress` - Destination is the zero address.
    pub fn claim_reward(ctx: Context<ClaimReward>, amount_requested: u64) -> Result<()> {
        instructions::claim_reward::handler(ctx, amount_requested)
    }

    /// Relays a liquidity change on a farmed position from the external
    /// registry. Unknown positions are a no-op. A decrease to zero, a
    /// deactivated incentive or emergency mode turn the update into a full
    /// exit.
    ///
    /// ### Authority
    /// - "farming_center" - Set authority in the FarmingConfig.
    pub fn apply_liquidity_delta(
        ctx: Context<ApplyLiquidityDelta>,
        position_mint: Pubkey,
        new_liquidity: u128,
    ) -> Result<()> {
        instructions::apply_liquidity_delta::handler(ctx, position_mint, new_liquidity)
    }

    /// Tick-crossing notification from the pool's plugin. Settles pending
    /// reward growth, then walks the crossed boundaries. A notification that
    /// contradicts the tracked tick order deactivates the virtual pool; it
    /// is never surfaced as a caller error.
    ///
    /// ### Authority
    /// - `plugin` - The hook registered on the pool.
    pub fn cross_to(ctx: Context<CrossTo>, target_tick: i32, zero_to_one: bool) -> Result<()> {
        instructions::cross_to::handler(ctx, target_tick, zero_to_one)
    }

    /// Sets the per-second distribution rates. Setting non-zero rates on a
    /// stopped incentive fails; zeroing is always permitted.
    ///
    /// ### Authority
    /// - "incentive_maker" - Set authority in the FarmingConfig.
    ///
    /// #### Special Errors
    /// - `IncentiveStopped` - Non-zero rate on a deactivated incentive.
    pub fn set_rates(
        ctx: Context<SetRates>,
        reward_rate: u64,
        bonus_reward_rate: u64,
    ) -> Result<()> {
        instructions::set_rates::handler(ctx, reward_rate, bonus_reward_rate)
    }

    /// Tops up the reward reserves with measured balance deltas.
    ///
    /// ### Authority
    /// - "incentive_maker" - Set authority in the FarmingConfig.
    ///
    /// #### Special Errors
    /// - `IncentiveStopped` - The incentive is deactivated.
    /// - `RewardReserveOverflow` - A reserve mirror would overflow.
    pub fn add_rewards(ctx: Context<AddRewards>, reward: u64, bonus_reward: u64) -> Result<()> {
        instructions::add_rewards::handler(ctx, reward, bonus_reward)
    }

    /// Withdraws undistributed reward backing; requests above the available
    /// reserve are clipped to the reserve.
    ///
    /// ### Authority
    /// - "incentive_maker" - Set authority in the FarmingConfig.
    pub fn decrease_rewards_amount(
        ctx: Context<DecreaseRewardsAmount>,
        reward: u64,
        bonus_reward: u64,
    ) -> Result<()> {
        instructions::decrease_rewards_amount::handler(ctx, reward, bonus_reward)
    }

    /// Permanently stops an incentive: zeroes its rates, deactivates the
    /// virtual pool and frees the pool's hook connection. Succeeds even if
    /// the engine already detached the hook on its own.
    ///
    /// ### Authority
    /// - "incentive_maker" - Set authority in the FarmingConfig.
    ///
    /// #### Special Errors
    /// - `IncentiveStopped` - Already explicitly deactivated.
    pub fn deactivate_incentive(ctx: Context<DeactivateIncentive>) -> Result<()> {
        instructions::deactivate_incentive::handler(ctx)
    }

    /// Toggles the global emergency-withdraw switch. While active, new farms
    /// cannot be entered; exits keep working.
    ///
    /// ### Authority
    /// - "owner" - Set authority in the FarmingConfig.
    pub fn set_emergency_withdraw_status(
        ctx: Context<SetEmergencyWithdrawStatus>,
        active: bool,
    ) -> Result<()> {
        instructions::set_emergency_withdraw_status::handler(ctx, active)
    }
}
