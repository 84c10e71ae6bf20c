use crate::errors::ErrorCode;

use super::U256;

pub const Q128_RESOLUTION: u32 = 128;

/// Converts a token amount into a growth-per-unit-of-liquidity delta,
/// scaled by 2^128 and rounded down.
///
/// Errors with `NumberCastError` when the scaled quotient does not fit in
/// 128 bits; callers treat that as a halt of distribution rather than a
/// corrupted accumulator.
pub fn reward_growth_delta(amount: u64, liquidity: u128) -> Result<u128, ErrorCode> {
    if liquidity == 0 {
        return Err(ErrorCode::DivideByZero);
    }
    let shifted = U256::from(amount) << (Q128_RESOLUTION as usize);
    (shifted / U256::from(liquidity)).try_into_u128()
}

/// Multiplies a liquidity amount by an X128 growth delta and scales the
/// product back down to a token amount, rounded down.
pub fn reward_amount_delta(liquidity: u128, growth_delta: u128) -> Result<u64, ErrorCode> {
    let product = U256::from(liquidity) * U256::from(growth_delta);
    (product >> (Q128_RESOLUTION as usize)).try_into_u64()
}

// Adds a signed liquidity delta to a given integer liquidity amount.
// Errors on overflow or underflow.
pub fn add_liquidity_delta(liquidity: u128, delta: i128) -> Result<u128, ErrorCode> {
    if delta == 0 {
        return Ok(liquidity);
    }
    if delta > 0 {
        liquidity
            .checked_add(delta as u128)
            .ok_or(ErrorCode::LiquidityOverflow)
    } else {
        liquidity
            .checked_sub(delta.unsigned_abs())
            .ok_or(ErrorCode::LiquidityUnderflow)
    }
}

// Converts an unsigned liquidity amount to a signed liquidity delta
pub fn convert_to_liquidity_delta(
    liquidity_amount: u128,
    positive: bool,
) -> Result<i128, ErrorCode> {
    if liquidity_amount > i128::MAX as u128 {
        // The most significant bit of the u128 would be lost in the i128
        return Err(ErrorCode::LiquidityTooHigh);
    }
    Ok(if positive {
        liquidity_amount as i128
    } else {
        -(liquidity_amount as i128)
    })
}


#[cfg(test)]
mod fuzz_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_growth_round_trip_never_overpays(
            amount in 0..u64::MAX,
            liquidity in 1..u128::MAX,
        ) {
            if let Ok(delta) = reward_growth_delta(amount, liquidity) {
                let paid = reward_amount_delta(liquidity, delta).unwrap();
                // floor rounding can only lose value, never mint it,
                // and loses at most one token per settlement
                assert!(paid <= amount);
                assert!(amount - paid <= 1);
            }
        }

        #[test]
        fn test_growth_delta_matches_wide_division(
            amount in 0..u64::MAX,
            liquidity in 1..u128::MAX,
        ) {
            let wide = (U256::from(amount) << 128) / U256::from(liquidity);
            let narrow = reward_growth_delta(amount, liquidity);
            match narrow {
                Ok(delta) => assert_eq!(U256::from(delta), wide),
                Err(_) => assert!(wide > U256::from(u128::MAX)),
            }
        }
    }
}
