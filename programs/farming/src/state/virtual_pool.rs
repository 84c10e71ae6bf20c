use anchor_lang::prelude::*;

use std::result::Result;

use crate::errors::ErrorCode;

use super::{Tick, TickUpdate, Tickmap, MAX_TICK_INDEX, MIN_TICK_INDEX};

pub const VIRTUAL_POOL_SEED: &[u8] = b"virtual_pool";

// Number of reward tokens per incentive (reward + bonus reward)
pub const NUM_REWARDS: usize = 2;

/// Growth accumulators start here instead of zero so an untouched snapshot
/// can be told apart from a snapshot taken at genesis.
pub const INITIAL_REWARD_GROWTH: u128 = 1;

// Capacity budget baked into the account size. Every initialized tick sets
// exactly one bitmap bit, so the occupied words never outnumber the ticks.
pub const MAX_FARMED_TICKS: usize = 128;
pub const MAX_TICK_WORDS: usize = MAX_FARMED_TICKS;

/// Per-token reward state of a virtual pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq)]
pub struct VirtualPoolRewardInfo {
    /// Tokens distributed per second while any farmed liquidity is active.
    pub rate: u64,
    /// Undistributed token balance backing this reward.
    pub reserve: u64,
    /// X128 number that tracks the total tokens earned per unit of farmed
    /// liquidity since the incentive was created. Advances mod 2^128; only
    /// differences of snapshots carry meaning.
    pub growth_global_x128: u128,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq)]
pub struct TickEntry {
    pub index: i32,
    pub tick: Tick,
}

/// Mirror of the incentivized pool that tracks only farmed liquidity.
///
/// The external price engine drives `global_tick` through `cross_to`
/// notifications; the farm lifecycle drives `liquidity` through position
/// deltas. `prev_tick`/`next_tick` always bracket `global_tick` with the
/// nearest initialized boundaries (falling back to the min/max tick indexes
/// when none exist in a direction).
#[account]
#[derive(Default, Debug)]
pub struct VirtualPool {
    pub incentive: Pubkey,
    pub pool: Pubkey,
    /// Sum of farmed ranges whose tick interval contains `global_tick`.
    pub liquidity: u128,
    pub global_tick: i32,
    pub reward_last_updated_timestamp: u64,
    pub prev_tick: i32,
    pub next_tick: i32,
    pub tick_spacing: u16,
    /// One-way flag. Set by an explicit deactivation or by a tick-crossing
    /// notification whose direction contradicts the tracked state.
    pub deactivated: bool,
    pub reward_infos: [VirtualPoolRewardInfo; NUM_REWARDS],
    pub tickmap: Tickmap,
    /// Boundary tick records, sorted by tick index.
    pub ticks: Vec<TickEntry>,
}

impl VirtualPool {
    pub const LEN: usize = 8 // discriminator
        + 32 + 32 // incentive, pool
        + 16 + 4 + 8 + 4 + 4 + 2 + 1 // liquidity..deactivated
        + NUM_REWARDS * (8 + 8 + 16) // reward_infos
        + 4 + MAX_TICK_WORDS * (2 + 16) // tickmap
        + 4 + MAX_FARMED_TICKS * (4 + Tick::LEN); // ticks

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        incentive: Pubkey,
        pool: Pubkey,
        tick_spacing: u16,
        current_tick: i32,
        timestamp: u64,
        rates: [u64; NUM_REWARDS],
        reserves: [u64; NUM_REWARDS],
    ) {
        self.incentive = incentive;
        self.pool = pool;
        self.liquidity = 0;
        self.global_tick = current_tick;
        self.reward_last_updated_timestamp = timestamp;
        self.prev_tick = MIN_TICK_INDEX;
        self.next_tick = MAX_TICK_INDEX;
        self.tick_spacing = tick_spacing;
        self.deactivated = false;
        for i in 0..NUM_REWARDS {
            self.reward_infos[i] = VirtualPoolRewardInfo {
                rate: rates[i],
                reserve: reserves[i],
                growth_global_x128: INITIAL_REWARD_GROWTH,
            };
        }
        self.tickmap = Tickmap::default();
        self.ticks = Vec::new();
    }

    pub fn tick(&self, tick_index: i32) -> Option<&Tick> {
        self.ticks
            .binary_search_by_key(&tick_index, |e| e.index)
            .ok()
            .map(|i| &self.ticks[i].tick)
    }

    pub fn tick_or_default(&self, tick_index: i32) -> Tick {
        self.tick(tick_index).copied().unwrap_or_default()
    }

    /// Writes a tick transition back into the arena, creating or releasing
    /// the record and its bitmap bit as the initialized flag demands.
    pub fn update_tick(&mut self, tick_index: i32, update: &TickUpdate) -> Result<(), ErrorCode> {
        match self.ticks.binary_search_by_key(&tick_index, |e| e.index) {
            Ok(i) => {
                if update.initialized {
                    self.ticks[i].tick.update(update);
                } else {
                    self.ticks.remove(i);
                    self.tickmap.toggle(tick_index, self.tick_spacing)?;
                }
            }
            Err(i) => {
                if update.initialized {
                    if self.ticks.len() >= MAX_FARMED_TICKS {
                        return Err(ErrorCode::TickCapacityExceeded);
                    }
                    self.ticks.insert(
                        i,
                        TickEntry {
                            index: tick_index,
                            tick: Tick::from(update.clone()),
                        },
                    );
                    self.tickmap.toggle(tick_index, self.tick_spacing)?;
                }
            }
        }
        Ok(())
    }

    /// Update all reward values for the virtual pool.
    pub fn update_rewards(
        &mut self,
        reward_infos: [VirtualPoolRewardInfo; NUM_REWARDS],
        reward_last_updated_timestamp: u64,
    ) {
        self.reward_infos = reward_infos;
        self.reward_last_updated_timestamp = reward_last_updated_timestamp;
    }

    /// Maps the reward data to only the growth accumulators
    pub fn reward_growths(&self) -> [u128; NUM_REWARDS] {
        let mut growths = [0u128; NUM_REWARDS];
        for i in 0..NUM_REWARDS {
            growths[i] = self.reward_infos[i].growth_global_x128;
        }
        growths
    }

    /// Re-derives the boundary pointer pair around `global_tick`.
    pub fn update_tick_pointers(&mut self) {
        self.prev_tick = self
            .tickmap
            .next_initialized_tick(self.global_tick, self.tick_spacing, true)
            .unwrap_or(MIN_TICK_INDEX);
        self.next_tick = self
            .tickmap
            .next_initialized_tick(self.global_tick, self.tick_spacing, false)
            .unwrap_or(MAX_TICK_INDEX);
    }

    pub fn deactivate(&mut self) {
        self.deactivated = true;
    }

    pub fn zero_rates(&mut self) {
        for info in self.reward_infos.iter_mut() {
            info.rate = 0;
        }
    }
}

#[cfg(test)]
pub mod virtual_pool_builder {
    use super::*;

    #[derive(Default)]
    pub struct VirtualPoolBuilder {
        liquidity: u128,
        global_tick: i32,
        tick_spacing: u16,
        reward_last_updated_timestamp: u64,
        reward_infos: [VirtualPoolRewardInfo; NUM_REWARDS],
    }

    impl VirtualPoolBuilder {
        pub fn new() -> Self {
            Self {
                tick_spacing: 1,
                ..Default::default()
            }
        }

        pub fn liquidity(mut self, liquidity: u128) -> Self {
            self.liquidity = liquidity;
            self
        }

        pub fn global_tick(mut self, global_tick: i32) -> Self {
            self.global_tick = global_tick;
            self
        }

        pub fn tick_spacing(mut self, tick_spacing: u16) -> Self {
            self.tick_spacing = tick_spacing;
            self
        }

        pub fn reward_last_updated_timestamp(mut self, timestamp: u64) -> Self {
            self.reward_last_updated_timestamp = timestamp;
            self
        }

        pub fn reward_info(mut self, index: usize, reward_info: VirtualPoolRewardInfo) -> Self {
            self.reward_infos[index] = reward_info;
            self
        }

        pub fn reward_infos(
            mut self,
            reward_infos: [VirtualPoolRewardInfo; NUM_REWARDS],
        ) -> Self {
            self.reward_infos = reward_infos;
            self
        }

        pub fn build(self) -> VirtualPool {
            let mut pool = VirtualPool {
                liquidity: self.liquidity,
                global_tick: self.global_tick,
                tick_spacing: self.tick_spacing,
                reward_last_updated_timestamp: self.reward_last_updated_timestamp,
                reward_infos: self.reward_infos,
                prev_tick: MIN_TICK_INDEX,
                next_tick: MAX_TICK_INDEX,
                ..Default::default()
            };
            for info in pool.reward_infos.iter_mut() {
                if info.growth_global_x128 == 0 {
                    info.growth_global_x128 = INITIAL_REWARD_GROWTH;
                }
            }
            pool
        }
    }
}
