use anchor_lang::prelude::*;

/// Registration mirror of an external concentrated-liquidity pool.
///
/// The swap engine itself lives outside this program; what farming consumes
/// is the pool's plugin hook (the signer of `cross_to` notifications), the
/// single incentive connection slot, and the last reported active tick.
#[account]
#[derive(Default)]
pub struct Pool {
    /// Hook authority registered on the pool. Tick-crossing notifications
    /// must be signed by this key.
    pub plugin: Pubkey,
    /// The incentive currently connected to the hook, or the default pubkey
    /// when the slot is free. One incentive at a time.
    pub active_incentive: Pubkey,
    /// Active tick as of the last notification.
    pub tick_current_index: i32,
    pub tick_spacing: u16,
}

impl Pool {
    pub const LEN: usize = 8 + 32 + 32 + 4 + 2;

    pub fn initialize(&mut self, plugin: Pubkey, tick_current_index: i32, tick_spacing: u16) {
        self.plugin = plugin;
        self.active_incentive = Pubkey::default();
        self.tick_current_index = tick_current_index;
        self.tick_spacing = tick_spacing;
    }

    pub fn has_active_incentive(&self) -> bool {
        self.active_incentive != Pubkey::default()
    }

    pub fn connect_incentive(&mut self, incentive: Pubkey) {
        self.active_incentive = incentive;
    }

    pub fn disconnect_incentive(&mut self) {
        self.active_incentive = Pubkey::default();
    }
}
