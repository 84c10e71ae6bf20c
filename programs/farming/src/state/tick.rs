use anchor_lang::prelude::*;

use super::NUM_REWARDS;

// Max & min tick index based on sqrt(1.0001) & max.min price of 2^64
pub const MAX_TICK_INDEX: i32 = 443636;
pub const MIN_TICK_INDEX: i32 = -443636;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq)]
pub struct Tick {
    pub initialized: bool,
    pub liquidity_net: i128,
    pub liquidity_gross: u128,

    // Array of X128
    pub reward_growths_outside: [u128; NUM_REWARDS],
}

impl From<TickUpdate> for Tick {
    fn from(update: TickUpdate) -> Self {
        Tick {
            initialized: update.initialized,
            liquidity_net: update.liquidity_net,
            liquidity_gross: update.liquidity_gross,
            reward_growths_outside: update.reward_growths_outside,
        }
    }
}

impl Tick {
    pub const LEN: usize = 1 + 16 + 16 + NUM_REWARDS * 16;

    /// Apply an update for this tick
    pub fn update(&mut self, update: &TickUpdate) {
        self.initialized = update.initialized;
        self.liquidity_net = update.liquidity_net;
        self.liquidity_gross = update.liquidity_gross;
        self.reward_growths_outside = update.reward_growths_outside;
    }

    /// Check that the tick index is within the supported range
    ///
    /// # Returns
    /// - `true`: The tick index is not within the range supported by this program
    /// - `false`: The tick index is within the range supported by this program
    pub fn check_is_out_of_bounds(tick_index: i32) -> bool {
        !(MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick_index)
    }

    /// Check that the tick index is within bounds and is a usable boundary for
    /// the given tick spacing.
    pub fn check_is_usable_tick(tick_index: i32, tick_spacing: u16) -> bool {
        if Tick::check_is_out_of_bounds(tick_index) {
            return false;
        }

        tick_index % tick_spacing as i32 == 0
    }

    pub fn full_range_indexes(tick_spacing: u16) -> (i32, i32) {
        let lower_index = MIN_TICK_INDEX / tick_spacing as i32 * tick_spacing as i32;
        let upper_index = MAX_TICK_INDEX / tick_spacing as i32 * tick_spacing as i32;
        (lower_index, upper_index)
    }
}

#[derive(Default, Clone, Debug, PartialEq)]
pub struct TickUpdate {
    pub initialized: bool,
    pub liquidity_net: i128,
    pub liquidity_gross: u128,
    pub reward_growths_outside: [u128; NUM_REWARDS],
}

impl From<&Tick> for TickUpdate {
    fn from(tick: &Tick) -> Self {
        TickUpdate {
            initialized: tick.initialized,
            liquidity_net: tick.liquidity_net,
            liquidity_gross: tick.liquidity_gross,
            reward_growths_outside: tick.reward_growths_outside,
        }
    }
}


#[cfg(test)]
mod check_is_out_of_bounds_tests {
    use super::*;

    #[test]
    fn test_min_tick_index() {
        assert!(!Tick::check_is_out_of_bounds(MIN_TICK_INDEX));
    }

    #[test]
    fn test_max_tick_index() {
        assert!(!Tick::check_is_out_of_bounds(MAX_TICK_INDEX));
    }

    #[test]
    fn test_min_tick_index_sub_1() {
        assert!(Tick::check_is_out_of_bounds(MIN_TICK_INDEX - 1));
    }

    #[test]
    fn test_max_tick_index_add_1() {
        assert!(Tick::check_is_out_of_bounds(MAX_TICK_INDEX + 1));
    }
}
