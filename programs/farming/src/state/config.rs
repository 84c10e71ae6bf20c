use anchor_lang::prelude::*;

pub const CONFIG_SEED: &[u8] = b"config";

/// Global authorities and the emergency switch.
#[account]
#[derive(Default)]
pub struct FarmingConfig {
    /// Administers the other authorities and the emergency switch.
    pub owner: Pubkey,
    /// Allowed to create, fund and deactivate incentives.
    pub incentive_maker: Pubkey,
    /// The routing boundary: the only signer accepted for position-mutating
    /// farm operations.
    pub farming_center: Pubkey,
    /// While set, new farms cannot be entered. Exits are never blocked.
    pub emergency_withdraw: bool,
    pub bump: [u8; 1],
}

impl FarmingConfig {
    pub const LEN: usize = 8 + 96 + 1 + 1;

    pub fn seeds(&self) -> [&[u8]; 2] {
        [CONFIG_SEED, self.bump.as_ref()]
    }

    pub fn initialize(
        &mut self,
        owner: Pubkey,
        incentive_maker: Pubkey,
        farming_center: Pubkey,
        bump: u8,
    ) {
        self.owner = owner;
        self.incentive_maker = incentive_maker;
        self.farming_center = farming_center;
        self.emergency_withdraw = false;
        self.bump = [bump];
    }

    pub fn set_emergency_withdraw(&mut self, active: bool) {
        self.emergency_withdraw = active;
    }
}

#[cfg(test)]
mod data_layout_tests {
    use anchor_lang::Discriminator;

    use super::*;

    #[test]
    fn test_farming_config_data_layout() {
        let owner = Pubkey::new_unique();
        let incentive_maker = Pubkey::new_unique();
        let farming_center = Pubkey::new_unique();

        let mut config_data = [0u8; FarmingConfig::LEN];
        let mut offset = 0;
        config_data[offset..offset + 8].copy_from_slice(FarmingConfig::DISCRIMINATOR);
        offset += 8;
        config_data[offset..offset + 32].copy_from_slice(&owner.to_bytes());
        offset += 32;
        config_data[offset..offset + 32].copy_from_slice(&incentive_maker.to_bytes());
        offset += 32;
        config_data[offset..offset + 32].copy_from_slice(&farming_center.to_bytes());
        offset += 32;
        config_data[offset] = 1; // emergency_withdraw
        offset += 1;
        config_data[offset] = 0xfe; // bump
        offset += 1;
        assert_eq!(offset, FarmingConfig::LEN);

        let deserialized = FarmingConfig::try_deserialize(&mut config_data.as_ref()).unwrap();
        assert_eq!(deserialized.owner, owner);
        assert_eq!(deserialized.incentive_maker, incentive_maker);
        assert_eq!(deserialized.farming_center, farming_center);
        assert!(deserialized.emergency_withdraw);
        assert_eq!(deserialized.bump, [0xfe]);
    }
}
