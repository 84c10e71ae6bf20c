use super::{
    tick_manager::next_tick_modify_liquidity_update,
    virtual_pool_manager::next_virtual_pool_rewards,
};
use crate::{
    errors::ErrorCode,
    math::add_liquidity_delta,
    state::{TickUpdate, VirtualPool, VirtualPoolRewardInfo, NUM_REWARDS},
};

#[derive(Debug)]
pub struct ModifyLiquidityUpdate {
    pub pool_liquidity: u128,
    pub reward_infos: [VirtualPoolRewardInfo; NUM_REWARDS],
    pub tick_lower_update: TickUpdate,
    pub tick_upper_update: TickUpdate,
}

/// Calculates state after applying a position's liquidity delta to the
/// virtual pool. Pending reward growth is settled against the liquidity that
/// was active during the elapsed interval, never the post-delta value.
pub fn calculate_apply_liquidity_delta(
    pool: &VirtualPool,
    tick_lower_index: i32,
    tick_upper_index: i32,
    liquidity_delta: i128,
    current_tick: i32,
    timestamp: u64,
) -> Result<ModifyLiquidityUpdate, ErrorCode> {
    let next_reward_infos = next_virtual_pool_rewards(pool, timestamp)?;

    let mut reward_growths = [0u128; NUM_REWARDS];
    for i in 0..NUM_REWARDS {
        reward_growths[i] = next_reward_infos[i].growth_global_x128;
    }

    let tick_lower = pool.tick_or_default(tick_lower_index);
    let tick_upper = pool.tick_or_default(tick_upper_index);

    let tick_lower_update = next_tick_modify_liquidity_update(
        &tick_lower,
        tick_lower_index,
        current_tick,
        &reward_growths,
        liquidity_delta,
        false,
    )?;

    let tick_upper_update = next_tick_modify_liquidity_update(
        &tick_upper,
        tick_upper_index,
        current_tick,
        &reward_growths,
        liquidity_delta,
        true,
    )?;

    let pool_liquidity = if (tick_lower_index..tick_upper_index).contains(&current_tick) {
        add_liquidity_delta(pool.liquidity, liquidity_delta)?
    } else {
        pool.liquidity
    };

    Ok(ModifyLiquidityUpdate {
        pool_liquidity,
        reward_infos: next_reward_infos,
        tick_lower_update,
        tick_upper_update,
    })
}

/// Writes a calculated liquidity modification back into the virtual pool and
/// re-syncs the mirrored tick to the externally reported one.
pub fn sync_apply_liquidity_delta(
    pool: &mut VirtualPool,
    update: ModifyLiquidityUpdate,
    tick_lower_index: i32,
    tick_upper_index: i32,
    current_tick: i32,
    timestamp: u64,
) -> Result<(), ErrorCode> {
    pool.update_rewards(update.reward_infos, timestamp);
    pool.update_tick(tick_lower_index, &update.tick_lower_update)?;
    pool.update_tick(tick_upper_index, &update.tick_upper_update)?;
    pool.liquidity = update.pool_liquidity;
    pool.global_tick = current_tick;
    pool.update_tick_pointers();
    Ok(())
}

/// Convenience wrapper used by the lifecycle paths.
pub fn apply_liquidity_delta(
    pool: &mut VirtualPool,
    tick_lower_index: i32,
    tick_upper_index: i32,
    liquidity_delta: i128,
    current_tick: i32,
    timestamp: u64,
) -> Result<(), ErrorCode> {
    let update = calculate_apply_liquidity_delta(
        pool,
        tick_lower_index,
        tick_upper_index,
        liquidity_delta,
        current_tick,
        timestamp,
    )?;
    sync_apply_liquidity_delta(
        pool,
        update,
        tick_lower_index,
        tick_upper_index,
        current_tick,
        timestamp,
    )
}
