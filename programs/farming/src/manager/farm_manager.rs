use super::{
    liquidity_manager::apply_liquidity_delta,
    tick_manager::next_reward_growths_inside,
    virtual_pool_manager::next_virtual_pool_rewards,
};
use crate::{
    errors::ErrorCode,
    math::{convert_to_liquidity_delta, reward_amount_delta},
    state::{Farm, Incentive, Tick, VirtualPool, NUM_REWARDS},
};

pub struct LiquidityChangeOutcome {
    pub amounts: [u64; NUM_REWARDS],
    pub exited: bool,
}

/// Settles the growth accumulated inside the farm's range since its last
/// snapshot into token amounts. A settlement whose token amount cannot be
/// represented degrades to zero owed, as the snapshots still advance.
pub fn next_farm_rewards(
    farm: &Farm,
    inner_growths: &[u128; NUM_REWARDS],
) -> [u64; NUM_REWARDS] {
    let mut amounts = [0u64; NUM_REWARDS];
    for i in 0..NUM_REWARDS {
        let growth_delta = inner_growths[i].wrapping_sub(farm.inner_rewards_growth[i]);
        amounts[i] = reward_amount_delta(farm.liquidity, growth_delta).unwrap_or(0);
    }
    amounts
}

fn settle_and_read_inner_growths(
    pool: &mut VirtualPool,
    tick_lower_index: i32,
    tick_upper_index: i32,
    timestamp: u64,
) -> Result<[u128; NUM_REWARDS], ErrorCode> {
    let reward_infos = next_virtual_pool_rewards(pool, timestamp)?;
    pool.update_rewards(reward_infos, timestamp);
    next_reward_growths_inside(
        pool.global_tick,
        pool.tick(tick_lower_index),
        tick_lower_index,
        pool.tick(tick_upper_index),
        tick_upper_index,
        &pool.reward_growths(),
    )
}

/// Admits a position into an incentive. Returns the inner-growth baseline for
/// the new farm record.
#[allow(clippy::too_many_arguments)]
pub fn enter_farm(
    pool: &mut VirtualPool,
    incentive: &mut Incentive,
    liquidity: u128,
    tick_lower_index: i32,
    tick_upper_index: i32,
    current_tick: i32,
    timestamp: u64,
    emergency: bool,
) -> Result<[u128; NUM_REWARDS], ErrorCode> {
    if liquidity == 0 {
        return Err(ErrorCode::ZeroLiquidity);
    }
    if !Tick::check_is_usable_tick(tick_lower_index, pool.tick_spacing)
        || !Tick::check_is_usable_tick(tick_upper_index, pool.tick_spacing)
        || tick_lower_index >= tick_upper_index
    {
        return Err(ErrorCode::InvalidTickIndex);
    }
    if ((tick_upper_index - tick_lower_index) as u32) < incentive.minimal_position_width {
        return Err(ErrorCode::PositionIsTooNarrow);
    }
    // The price engine may have detached the hook without notice, so the
    // virtual pool's own flag is consulted, not just the local one
    if incentive.deactivated || pool.deactivated {
        return Err(ErrorCode::IncentiveStopped);
    }
    if emergency {
        return Err(ErrorCode::EmergencyActivated);
    }

    let liquidity_delta = convert_to_liquidity_delta(liquidity, true)?;
    apply_liquidity_delta(
        pool,
        tick_lower_index,
        tick_upper_index,
        liquidity_delta,
        current_tick,
        timestamp,
    )?;

    let inner_growths = next_reward_growths_inside(
        pool.global_tick,
        pool.tick(tick_lower_index),
        tick_lower_index,
        pool.tick(tick_upper_index),
        tick_upper_index,
        &pool.reward_growths(),
    )?;

    incentive.number_of_farms += 1;
    Ok(inner_growths)
}

/// Settles and removes a farm. Never gated on deactivation or emergency mode:
/// a position must always be able to leave.
pub fn exit_farm(
    pool: &mut VirtualPool,
    incentive: &mut Incentive,
    farm: &Farm,
    current_tick: i32,
    timestamp: u64,
) -> Result<[u64; NUM_REWARDS], ErrorCode> {
    let inner_growths = settle_and_read_inner_growths(
        pool,
        farm.tick_lower_index,
        farm.tick_upper_index,
        timestamp,
    )?;
    let amounts = next_farm_rewards(farm, &inner_growths);

    let liquidity_delta = convert_to_liquidity_delta(farm.liquidity, false)?;
    apply_liquidity_delta(
        pool,
        farm.tick_lower_index,
        farm.tick_upper_index,
        liquidity_delta,
        current_tick,
        timestamp,
    )?;

    incentive.number_of_farms = incentive.number_of_farms.saturating_sub(1);
    Ok(amounts)
}

/// Settles a farm's pending rewards and re-baselines its snapshots without
/// touching its liquidity.
pub fn collect_farm_rewards(
    pool: &mut VirtualPool,
    farm: &mut Farm,
    timestamp: u64,
) -> Result<[u64; NUM_REWARDS], ErrorCode> {
    let inner_growths = settle_and_read_inner_growths(
        pool,
        farm.tick_lower_index,
        farm.tick_upper_index,
        timestamp,
    )?;
    let amounts = next_farm_rewards(farm, &inner_growths);
    farm.inner_rewards_growth = inner_growths;
    Ok(amounts)
}

/// Applies a liquidity change relayed from the external position registry.
///
/// A decrease to zero, a (directly or indirectly) deactivated incentive, or
/// active emergency mode all turn the update into a full exit.
#[allow(clippy::too_many_arguments)]
pub fn update_farm_liquidity(
    pool: &mut VirtualPool,
    incentive: &mut Incentive,
    farm: &mut Farm,
    new_liquidity: u128,
    current_tick: i32,
    timestamp: u64,
    emergency: bool,
) -> Result<LiquidityChangeOutcome, ErrorCode> {
    let stopped = incentive.deactivated || pool.deactivated;
    if new_liquidity == 0 || stopped || emergency {
        let amounts = exit_farm(pool, incentive, farm, current_tick, timestamp)?;
        return Ok(LiquidityChangeOutcome {
            amounts,
            exited: true,
        });
    }

    let inner_growths = settle_and_read_inner_growths(
        pool,
        farm.tick_lower_index,
        farm.tick_upper_index,
        timestamp,
    )?;
    let amounts = next_farm_rewards(farm, &inner_growths);

    let liquidity_delta = if new_liquidity >= farm.liquidity {
        convert_to_liquidity_delta(new_liquidity - farm.liquidity, true)?
    } else {
        convert_to_liquidity_delta(farm.liquidity - new_liquidity, false)?
    };
    apply_liquidity_delta(
        pool,
        farm.tick_lower_index,
        farm.tick_upper_index,
        liquidity_delta,
        current_tick,
        timestamp,
    )?;

    farm.liquidity = new_liquidity;
    farm.inner_rewards_growth = inner_growths;
    Ok(LiquidityChangeOutcome {
        amounts,
        exited: false,
    })
}
