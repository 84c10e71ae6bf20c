use crate::errors::ErrorCode;
use crate::manager::tick_manager::next_tick_cross_update;
use crate::math::{add_liquidity_delta, reward_growth_delta};
use crate::state::{VirtualPool, VirtualPoolRewardInfo, MAX_TICK_INDEX, MIN_TICK_INDEX, NUM_REWARDS};

/// Calculates the next global reward growth variables based on the given
/// timestamp. The provided timestamp must be greater than or equal to the
/// last updated timestamp.
///
/// While no farmed liquidity is active nothing is distributed: the elapsed
/// interval is skipped and the reserves keep the undistributed balance.
pub fn next_virtual_pool_rewards(
    pool: &VirtualPool,
    next_timestamp: u64,
) -> Result<[VirtualPoolRewardInfo; NUM_REWARDS], ErrorCode> {
    let curr_timestamp = pool.reward_last_updated_timestamp;
    if next_timestamp < curr_timestamp {
        return Err(ErrorCode::InvalidTimestamp);
    }

    // No-op if no liquidity or no change in timestamp
    if pool.liquidity == 0 || next_timestamp == curr_timestamp {
        return Ok(pool.reward_infos);
    }

    let time_delta = u128::from(next_timestamp - curr_timestamp);
    let mut next_reward_infos = pool.reward_infos;
    for reward_info in next_reward_infos.iter_mut() {
        if reward_info.rate == 0 || reward_info.reserve == 0 {
            continue;
        }

        let unclamped = u128::from(reward_info.rate).saturating_mul(time_delta);
        let amount = unclamped.min(u128::from(reward_info.reserve)) as u64;

        // A growth delta that cannot be represented in 128 bits halts
        // distribution for this token; the reserve is left untouched so no
        // value is burned against an unrepresentable delta.
        if let Ok(growth_delta) = reward_growth_delta(amount, pool.liquidity) {
            reward_info.reserve -= amount;
            reward_info.growth_global_x128 =
                reward_info.growth_global_x128.wrapping_add(growth_delta);
        }
    }

    Ok(next_reward_infos)
}

/// Changes the distribution rates after settling under the old ones, so no
/// elapsed interval is ever charged at a rate that was not active during it.
///
/// Zeroing rates stays available after deactivation to support wind-down;
/// raising them again does not.
pub fn set_reward_rates(
    pool: &mut VirtualPool,
    incentive_deactivated: bool,
    rates: [u64; NUM_REWARDS],
    timestamp: u64,
) -> Result<(), ErrorCode> {
    let reward_infos = next_virtual_pool_rewards(pool, timestamp)?;
    pool.update_rewards(reward_infos, timestamp);

    let stopped = incentive_deactivated || pool.deactivated;
    if stopped && rates.iter().any(|rate| *rate != 0) {
        return Err(ErrorCode::IncentiveStopped);
    }
    for (info, rate) in pool.reward_infos.iter_mut().zip(rates) {
        info.rate = rate;
    }
    Ok(())
}

/// Applies a tick-crossing notification from the external price engine.
///
/// The engine is trusted but not verified: a notification whose direction
/// contradicts the tracked tick order deactivates the pool instead of
/// guessing, and a deactivated pool ignores all further notifications.
pub fn cross_to(
    pool: &mut VirtualPool,
    target_tick: i32,
    zero_to_one: bool,
    timestamp: u64,
) -> Result<(), ErrorCode> {
    if pool.deactivated {
        return Ok(());
    }
    if target_tick == pool.global_tick {
        return Ok(());
    }

    let next_reward_infos = next_virtual_pool_rewards(pool, timestamp)?;
    pool.update_rewards(next_reward_infos, timestamp);

    if (target_tick < pool.global_tick) != zero_to_one {
        pool.deactivate();
        return Ok(());
    }

    let tick_spacing = pool.tick_spacing;
    if zero_to_one {
        // price decreasing: cross every initialized tick in (target, global]
        loop {
            let crossed = pool.prev_tick;
            if crossed <= target_tick {
                break;
            }
            let Some(tick) = pool.tick(crossed).copied() else {
                break;
            };

            let update = next_tick_cross_update(&tick, &pool.reward_growths());
            pool.update_tick(crossed, &update)?;

            let signed_net = tick
                .liquidity_net
                .checked_neg()
                .ok_or(ErrorCode::LiquidityNetError)?;
            pool.liquidity = add_liquidity_delta(pool.liquidity, signed_net)?;

            pool.next_tick = crossed;
            pool.prev_tick = pool
                .tickmap
                .next_initialized_tick(crossed - 1, tick_spacing, true)
                .unwrap_or(MIN_TICK_INDEX);
            pool.global_tick = crossed - 1;
        }
    } else {
        // price increasing: cross every initialized tick in (global, target]
        loop {
            let crossed = pool.next_tick;
            if crossed > target_tick {
                break;
            }
            let Some(tick) = pool.tick(crossed).copied() else {
                break;
            };

            let update = next_tick_cross_update(&tick, &pool.reward_growths());
            pool.update_tick(crossed, &update)?;

            pool.liquidity = add_liquidity_delta(pool.liquidity, tick.liquidity_net)?;

            pool.prev_tick = crossed;
            pool.next_tick = pool
                .tickmap
                .next_initialized_tick(crossed, tick_spacing, false)
                .unwrap_or(MAX_TICK_INDEX);
            pool.global_tick = crossed;
        }
    }

    pool.global_tick = target_tick;
    pool.update_tick_pointers();
    Ok(())
}
