//! Lifecycle scenarios exercising the managers together, the way the
//! instruction handlers drive them.

use crate::errors::ErrorCode;
use crate::manager::farm_manager::{
    collect_farm_rewards, enter_farm, exit_farm, update_farm_liquidity,
};
use crate::manager::virtual_pool_manager::{cross_to, next_virtual_pool_rewards, set_reward_rates};
use crate::state::virtual_pool_builder::VirtualPoolBuilder;
use crate::state::{
    Farm, Incentive, VirtualPool, VirtualPoolRewardInfo, INITIAL_REWARD_GROWTH, MAX_TICK_INDEX,
    MIN_TICK_INDEX, NUM_REWARDS,
};

fn reward_info(rate: u64, reserve: u64) -> VirtualPoolRewardInfo {
    VirtualPoolRewardInfo {
        rate,
        reserve,
        growth_global_x128: INITIAL_REWARD_GROWTH,
    }
}

fn eternal_pool(rate: u64, reserve: u64, tick_spacing: u16) -> VirtualPool {
    VirtualPoolBuilder::new()
        .global_tick(0)
        .tick_spacing(tick_spacing)
        .reward_infos([reward_info(rate, reserve), reward_info(0, 0)])
        .build()
}

fn incentive_with_width(minimal_position_width: u32) -> Incentive {
    Incentive {
        minimal_position_width,
        ..Default::default()
    }
}

fn farm_record(
    liquidity: u128,
    tick_lower_index: i32,
    tick_upper_index: i32,
    inner: [u128; NUM_REWARDS],
) -> Farm {
    let mut farm = Farm::default();
    farm.initialize(
        Default::default(),
        Default::default(),
        tick_lower_index,
        tick_upper_index,
        liquidity,
        inner,
    );
    farm
}

#[test]
fn three_equal_positions_split_nearly_the_full_reward() {
    // 100 tokens/second against a 1_000_000 token reserve: the reserve runs
    // dry after 10_000 seconds
    let total_reward = 1_000_000u64;
    let mut pool = eternal_pool(100, total_reward, 60);
    let mut incentive = incentive_with_width(0);

    let liquidity = 1_000_000u128;
    let mut farms = Vec::new();
    for _ in 0..3 {
        let inner = enter_farm(
            &mut pool,
            &mut incentive,
            liquidity,
            -600,
            600,
            0,
            0,
            false,
        )
        .unwrap();
        farms.push(farm_record(liquidity, -600, 600, inner));
    }
    assert_eq!(incentive.number_of_farms, 3);
    assert_eq!(pool.liquidity, 3 * liquidity);

    // well past reserve exhaustion, with no price movement in between
    let mut paid_out = 0u64;
    for farm in &farms {
        let amounts = exit_farm(&mut pool, &mut incentive, farm, 0, 20_000).unwrap();
        paid_out += amounts[0];
    }

    assert_eq!(incentive.number_of_farms, 0);
    assert_eq!(pool.reward_infos[0].reserve, 0);
    // floor rounding keeps at most a few units of dust in the books
    assert!(paid_out <= total_reward);
    assert!(u128::from(paid_out) * 10_000 >= u128::from(total_reward) * 9_999);
}

#[test]
fn enter_then_exit_immediately_yields_nothing_and_restores_counts() {
    let mut pool = eternal_pool(100, 1_000_000, 1);
    let mut incentive = incentive_with_width(0);

    let inner = enter_farm(&mut pool, &mut incentive, 50_000, -10, 10, 0, 500, false).unwrap();
    let farm = farm_record(50_000, -10, 10, inner);
    assert_eq!(incentive.number_of_farms, 1);

    let amounts = exit_farm(&mut pool, &mut incentive, &farm, 0, 500).unwrap();
    assert_eq!(amounts, [0, 0]);
    assert_eq!(incentive.number_of_farms, 0);
    assert_eq!(pool.liquidity, 0);
    assert!(pool.ticks.is_empty());
}

#[test]
fn full_range_width_requirement_only_admits_full_range_positions() {
    let full_width = (MAX_TICK_INDEX - MIN_TICK_INDEX) as u32;
    let mut pool = eternal_pool(1, 1_000, 1);
    let mut incentive = incentive_with_width(full_width);

    // one tick short on either side is too narrow
    assert_eq!(
        enter_farm(
            &mut pool,
            &mut incentive,
            1_000,
            MIN_TICK_INDEX + 1,
            MAX_TICK_INDEX,
            0,
            0,
            false,
        )
        .unwrap_err(),
        ErrorCode::PositionIsTooNarrow
    );

    enter_farm(
        &mut pool,
        &mut incentive,
        1_000,
        MIN_TICK_INDEX,
        MAX_TICK_INDEX,
        0,
        0,
        false,
    )
    .unwrap();
    assert_eq!(incentive.number_of_farms, 1);
    assert_eq!(pool.liquidity, 1_000);
}

#[test]
fn deactivated_incentive_allows_zero_rates_but_not_restart() {
    let mut pool = eternal_pool(100, 1_000_000, 1);
    let mut incentive = incentive_with_width(0);

    let inner = enter_farm(&mut pool, &mut incentive, 100_000, -100, 100, 0, 0, false).unwrap();
    let farm = farm_record(100_000, -100, 100, inner);

    // reward accrues for 100 seconds, then the maker shuts the incentive down
    let reward_infos = next_virtual_pool_rewards(&pool, 100).unwrap();
    pool.update_rewards(reward_infos, 100);
    pool.deactivate();
    incentive.deactivate();

    assert_eq!(
        set_reward_rates(&mut pool, incentive.deactivated, [100, 0], 100).unwrap_err(),
        ErrorCode::IncentiveStopped
    );
    set_reward_rates(&mut pool, incentive.deactivated, [0, 0], 100).unwrap();
    assert_eq!(pool.reward_infos[0].rate, 0);

    // entry is closed but the pending farm still exits with its accrued pay
    assert_eq!(
        enter_farm(&mut pool, &mut incentive, 1_000, -10, 10, 0, 100, false).unwrap_err(),
        ErrorCode::IncentiveStopped
    );
    let amounts = exit_farm(&mut pool, &mut incentive, &farm, 0, 500).unwrap();
    assert_eq!(amounts[0], 9_999);
    assert_eq!(incentive.number_of_farms, 0);
}

#[test]
fn emergency_mode_blocks_entry_but_never_exit() {
    let mut pool = eternal_pool(100, 1_000_000, 1);
    let mut incentive = incentive_with_width(0);

    let inner = enter_farm(&mut pool, &mut incentive, 100_000, -100, 100, 0, 0, false).unwrap();
    let farm = farm_record(100_000, -100, 100, inner);

    let emergency = true;
    assert_eq!(
        enter_farm(&mut pool, &mut incentive, 1_000, -10, 10, 0, 50, emergency).unwrap_err(),
        ErrorCode::EmergencyActivated
    );

    let amounts = exit_farm(&mut pool, &mut incentive, &farm, 0, 100).unwrap();
    assert_eq!(amounts[0], 9_999);
    assert_eq!(incentive.number_of_farms, 0);

    // a liquidity-change notification during emergency also becomes an exit
    let inner = enter_farm(&mut pool, &mut incentive, 100_000, -100, 100, 0, 100, false).unwrap();
    let mut farm = farm_record(100_000, -100, 100, inner);
    let outcome = update_farm_liquidity(
        &mut pool,
        &mut incentive,
        &mut farm,
        200_000,
        0,
        100,
        emergency,
    )
    .unwrap();
    assert!(outcome.exited);
    assert_eq!(incentive.number_of_farms, 0);
}

#[test]
fn rewards_accrue_only_while_price_is_inside_the_range() {
    let mut pool = eternal_pool(10, 1_000_000, 1);
    let mut incentive = incentive_with_width(0);

    let inner = enter_farm(&mut pool, &mut incentive, 100_000, -100, 100, 0, 0, false).unwrap();
    let mut farm = farm_record(100_000, -100, 100, inner);

    // the price leaves the range after 100 seconds
    cross_to(&mut pool, 150, false, 100).unwrap();
    assert_eq!(pool.liquidity, 0);

    // another 100 seconds outside the range accrue nothing and keep the
    // reserve intact
    let first = collect_farm_rewards(&mut pool, &mut farm, 200).unwrap();
    assert_eq!(first[0], 999);
    assert_eq!(pool.reward_infos[0].reserve, 1_000_000 - 1_000);

    // the price returns and earning resumes
    cross_to(&mut pool, 0, true, 300).unwrap();
    assert_eq!(pool.liquidity, 100_000);
    let second = collect_farm_rewards(&mut pool, &mut farm, 400).unwrap();
    assert_eq!(second[0], 999);

    let amounts = exit_farm(&mut pool, &mut incentive, &farm, 0, 400).unwrap();
    assert_eq!(amounts, [0, 0]);
}

#[test]
fn desynchronized_crossing_freezes_the_pool_but_funds_stay_exitable() {
    let mut pool = eternal_pool(10, 1_000_000, 1);
    let mut incentive = incentive_with_width(0);

    let inner = enter_farm(&mut pool, &mut incentive, 100_000, -100, 100, 0, 0, false).unwrap();
    let farm = farm_record(100_000, -100, 100, inner);

    // a crossing whose direction contradicts the tracked order
    cross_to(&mut pool, 50, true, 100).unwrap();
    assert!(pool.deactivated);

    // entry is refused through the capability query on the virtual pool,
    // even though the incentive record still looks live
    assert!(!incentive.deactivated);
    assert_eq!(
        enter_farm(&mut pool, &mut incentive, 1_000, -10, 10, 0, 100, false).unwrap_err(),
        ErrorCode::IncentiveStopped
    );

    // the accrued 100 seconds are still paid on exit
    let amounts = exit_farm(&mut pool, &mut incentive, &farm, 0, 200).unwrap();
    assert_eq!(amounts[0], 1_999);
}
