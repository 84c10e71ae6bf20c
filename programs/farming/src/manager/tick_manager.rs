use crate::{
    errors::ErrorCode,
    math::add_liquidity_delta,
    state::{Tick, TickUpdate, INITIAL_REWARD_GROWTH, NUM_REWARDS},
};

/// Flips the outside growth snapshots when the active tick moves past this
/// boundary. Applying the flip twice restores the original snapshots.
pub fn next_tick_cross_update(
    tick: &Tick,
    reward_growths: &[u128; NUM_REWARDS],
) -> TickUpdate {
    let mut update = TickUpdate::from(tick);

    for i in 0..NUM_REWARDS {
        update.reward_growths_outside[i] =
            reward_growths[i].wrapping_sub(tick.reward_growths_outside[i]);
    }
    update
}

pub fn next_tick_modify_liquidity_update(
    tick: &Tick,
    tick_index: i32,
    current_tick: i32,
    reward_growths: &[u128; NUM_REWARDS],
    liquidity_delta: i128,
    is_upper_tick: bool,
) -> Result<TickUpdate, ErrorCode> {
    // noop if there is no change in liquidity
    if liquidity_delta == 0 {
        return Ok(TickUpdate::from(tick));
    }

    let liquidity_gross = add_liquidity_delta(tick.liquidity_gross, liquidity_delta)?;

    // Update to an uninitialized tick if remaining liquidity is being removed
    if liquidity_gross == 0 {
        return Ok(TickUpdate::default());
    }

    let reward_growths_outside = if tick.liquidity_gross == 0 {
        // By convention, assume all prior growth happened below the tick
        if current_tick >= tick_index {
            *reward_growths
        } else {
            [INITIAL_REWARD_GROWTH; NUM_REWARDS]
        }
    } else {
        tick.reward_growths_outside
    };

    let liquidity_net = if is_upper_tick {
        tick.liquidity_net
            .checked_sub(liquidity_delta)
            .ok_or(ErrorCode::LiquidityNetError)?
    } else {
        tick.liquidity_net
            .checked_add(liquidity_delta)
            .ok_or(ErrorCode::LiquidityNetError)?
    };

    Ok(TickUpdate {
        initialized: true,
        liquidity_net,
        liquidity_gross,
        reward_growths_outside,
    })
}

/// Calculates the reward growths accumulated strictly inside
/// [tick_lower, tick_upper) based on their positions relative to the active
/// tick.
///
/// Unlike a swap pool's fee accounting there is no by-convention default for
/// an absent boundary: querying a range whose boundary was never initialized
/// in this virtual pool is a hard failure.
pub fn next_reward_growths_inside(
    current_tick: i32,
    tick_lower: Option<&Tick>,
    tick_lower_index: i32,
    tick_upper: Option<&Tick>,
    tick_upper_index: i32,
    reward_growths: &[u128; NUM_REWARDS],
) -> Result<[u128; NUM_REWARDS], ErrorCode> {
    let (tick_lower, tick_upper) = match (tick_lower, tick_upper) {
        (Some(lower), Some(upper)) if lower.initialized && upper.initialized => (lower, upper),
        _ => return Err(ErrorCode::TickNotInitialized),
    };

    let mut reward_growths_inside = [0; NUM_REWARDS];

    for i in 0..NUM_REWARDS {
        let reward_growths_below = if current_tick < tick_lower_index {
            reward_growths[i].wrapping_sub(tick_lower.reward_growths_outside[i])
        } else {
            tick_lower.reward_growths_outside[i]
        };

        let reward_growths_above = if current_tick < tick_upper_index {
            tick_upper.reward_growths_outside[i]
        } else {
            reward_growths[i].wrapping_sub(tick_upper.reward_growths_outside[i])
        };

        reward_growths_inside[i] = reward_growths[i]
            .wrapping_sub(reward_growths_below)
            .wrapping_sub(reward_growths_above);
    }

    Ok(reward_growths_inside)
}

#[cfg(test)]
mod tick_manager_tests {
    use super::*;
    use crate::state::tick_builder::TickBuilder;

    #[test]
    fn test_next_tick_cross_update_is_involution() {
        let tick = TickBuilder::default()
            .initialized(true)
            .liquidity_net(500)
            .liquidity_gross(500)
            .reward_growths_outside([100, 250])
            .build();
        let growths = [1000u128, 1000u128];

        let crossed = Tick::from(next_tick_cross_update(&tick, &growths));
        assert_eq!(crossed.reward_growths_outside, [900, 750]);
        // net liquidity and gross liquidity are untouched by a cross
        assert_eq!(crossed.liquidity_net, 500);
        assert_eq!(crossed.liquidity_gross, 500);

        let restored = Tick::from(next_tick_cross_update(&crossed, &growths));
        assert_eq!(restored, tick);
    }

    #[test]
    fn test_next_tick_cross_update_wraps() {
        let tick = TickBuilder::default()
            .initialized(true)
            .reward_growths_outside([u128::MAX, 0])
            .build();
        let update = next_tick_cross_update(&tick, &[5, 5]);
        assert_eq!(update.reward_growths_outside, [6, 5]);
    }

    #[test]
    fn test_next_tick_modify_liquidity_update() {
        struct Test<'a> {
            name: &'a str,
            tick: Tick,
            tick_index: i32,
            current_tick: i32,
            reward_growths: [u128; NUM_REWARDS],
            liquidity_delta: i128,
            is_upper_tick: bool,
            expected_update: TickUpdate,
        }

        for test in [
            Test {
                name: "initialize lower tick above the active tick, sentinel snapshots",
                tick: Tick::default(),
                tick_index: 200,
                current_tick: 100,
                reward_growths: [500, 600],
                liquidity_delta: 42069,
                is_upper_tick: false,
                expected_update: TickUpdate {
                    initialized: true,
                    liquidity_net: 42069,
                    liquidity_gross: 42069,
                    reward_growths_outside: [INITIAL_REWARD_GROWTH; NUM_REWARDS],
                },
            },
            Test {
                name: "initialize lower tick at or below the active tick, snapshots current growth",
                tick: Tick::default(),
                tick_index: 200,
                current_tick: 300,
                reward_growths: [500, 600],
                liquidity_delta: 42069,
                is_upper_tick: false,
                expected_update: TickUpdate {
                    initialized: true,
                    liquidity_net: 42069,
                    liquidity_gross: 42069,
                    reward_growths_outside: [500, 600],
                },
            },
            Test {
                name: "already initialized tick keeps its snapshots",
                tick: TickBuilder::default()
                    .initialized(true)
                    .liquidity_net(100)
                    .liquidity_gross(100)
                    .reward_growths_outside([7, 9])
                    .build(),
                tick_index: 200,
                current_tick: 300,
                reward_growths: [500, 600],
                liquidity_delta: 100,
                is_upper_tick: false,
                expected_update: TickUpdate {
                    initialized: true,
                    liquidity_net: 200,
                    liquidity_gross: 200,
                    reward_growths_outside: [7, 9],
                },
            },
            Test {
                name: "upper tick subtracts the delta from net liquidity",
                tick: TickBuilder::default()
                    .initialized(true)
                    .liquidity_net(100_000)
                    .liquidity_gross(100_000)
                    .build(),
                tick_index: 200,
                current_tick: 100,
                reward_growths: [0, 0],
                liquidity_delta: 42069,
                is_upper_tick: true,
                expected_update: TickUpdate {
                    initialized: true,
                    liquidity_net: 57931,
                    liquidity_gross: 142069,
                    reward_growths_outside: [0, 0],
                },
            },
            Test {
                name: "removing the last liquidity releases the tick",
                tick: TickBuilder::default()
                    .initialized(true)
                    .liquidity_net(-100_000)
                    .liquidity_gross(100_000)
                    .reward_growths_outside([1, 1])
                    .build(),
                tick_index: 200,
                current_tick: 100,
                reward_growths: [0, 0],
                liquidity_delta: -100_000,
                is_upper_tick: true,
                expected_update: TickUpdate::default(),
            },
            Test {
                name: "liquidity delta zero is a no-op",
                tick: TickBuilder::default()
                    .initialized(true)
                    .liquidity_net(100_000)
                    .liquidity_gross(200_000)
                    .build(),
                tick_index: 200,
                current_tick: 100,
                reward_growths: [0, 0],
                liquidity_delta: 0,
                is_upper_tick: false,
                expected_update: TickUpdate {
                    initialized: true,
                    liquidity_net: 100_000,
                    liquidity_gross: 200_000,
                    reward_growths_outside: [0, 0],
                },
            },
        ] {
            let update = next_tick_modify_liquidity_update(
                &test.tick,
                test.tick_index,
                test.current_tick,
                &test.reward_growths,
                test.liquidity_delta,
                test.is_upper_tick,
            )
            .unwrap();

            assert_eq!(update, test.expected_update, "{}", test.name);
        }
    }

    #[test]
    fn test_next_tick_modify_liquidity_update_errors() {
        struct Test<'a> {
            name: &'a str,
            tick: Tick,
            liquidity_delta: i128,
            is_upper_tick: bool,
            expected_error: ErrorCode,
        }

        for test in [
            Test {
                name: "liquidity gross overflow",
                tick: TickBuilder::default().liquidity_gross(u128::MAX).build(),
                liquidity_delta: i128::MAX,
                is_upper_tick: false,
                expected_error: ErrorCode::LiquidityOverflow,
            },
            Test {
                name: "liquidity gross underflow",
                tick: Tick::default(),
                liquidity_delta: -100,
                is_upper_tick: false,
                expected_error: ErrorCode::LiquidityUnderflow,
            },
            Test {
                name: "liquidity net overflow from subtracting negative delta",
                tick: TickBuilder::default()
                    .liquidity_gross(i128::MAX as u128)
                    .liquidity_net(i128::MAX)
                    .build(),
                liquidity_delta: -(i128::MAX - 1),
                is_upper_tick: true,
                expected_error: ErrorCode::LiquidityNetError,
            },
            Test {
                name: "liquidity net overflow from adding positive delta",
                tick: TickBuilder::default()
                    .liquidity_gross(10000)
                    .liquidity_net(i128::MAX)
                    .build(),
                liquidity_delta: i128::MAX,
                is_upper_tick: false,
                expected_error: ErrorCode::LiquidityNetError,
            },
        ] {
            let err = next_tick_modify_liquidity_update(
                &test.tick,
                0,
                10,
                &[0; NUM_REWARDS],
                test.liquidity_delta,
                test.is_upper_tick,
            )
            .unwrap_err();

            assert_eq!(err, test.expected_error, "{}", test.name);
        }
    }

    #[test]
    fn test_next_reward_growths_inside() {
        struct Test<'a> {
            name: &'a str,
            current_tick: i32,
            tick_lower: Tick,
            tick_upper: Tick,
            reward_growths: [u128; NUM_REWARDS],
            expected: [u128; NUM_REWARDS],
        }

        for test in [
            Test {
                name: "current tick below the range sees no inner growth",
                current_tick: -200,
                tick_lower: TickBuilder::default()
                    .initialized(true)
                    .reward_growths_outside([100, 666])
                    .build(),
                tick_upper: TickBuilder::default()
                    .initialized(true)
                    .reward_growths_outside([100, 666])
                    .build(),
                reward_growths: [500, 1000],
                expected: [0, 0],
            },
            Test {
                name: "current tick inside the range",
                current_tick: 10,
                tick_lower: TickBuilder::default()
                    .initialized(true)
                    .reward_growths_outside([200, 134])
                    .build(),
                tick_upper: TickBuilder::default()
                    .initialized(true)
                    .reward_growths_outside([100, 666])
                    .build(),
                reward_growths: [1000, 2000],
                expected: [700, 1200],
            },
            Test {
                name: "current tick above the range",
                current_tick: 250,
                tick_lower: TickBuilder::default()
                    .initialized(true)
                    .reward_growths_outside([200, 134])
                    .build(),
                tick_upper: TickBuilder::default()
                    .initialized(true)
                    .reward_growths_outside([900, 1334])
                    .build(),
                reward_growths: [1000, 2000],
                expected: [700, 1200],
            },
        ] {
            let results = next_reward_growths_inside(
                test.current_tick,
                Some(&test.tick_lower),
                -100,
                Some(&test.tick_upper),
                100,
                &test.reward_growths,
            )
            .unwrap();

            assert_eq!(results, test.expected, "{}", test.name);
        }
    }

    #[test]
    fn test_next_reward_growths_inside_uninitialized_fails() {
        let initialized = TickBuilder::default().initialized(true).build();

        assert_eq!(
            next_reward_growths_inside(0, None, -100, Some(&initialized), 100, &[0, 0])
                .unwrap_err(),
            ErrorCode::TickNotInitialized
        );
        assert_eq!(
            next_reward_growths_inside(
                0,
                Some(&initialized),
                -100,
                Some(&Tick::default()),
                100,
                &[0, 0]
            )
            .unwrap_err(),
            ErrorCode::TickNotInitialized
        );
    }
}
