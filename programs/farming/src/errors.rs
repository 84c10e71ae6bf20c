use std::num::TryFromIntError;

use anchor_lang::prelude::*;

#[error_code]
#[derive(PartialEq)]
pub enum ErrorCode {
    #[msg("Unable to divide by zero")]
    DivideByZero, // 0x1770 (6000)
    #[msg("Unable to cast number into a smaller width")]
    NumberCastError, // 0x1771 (6001)
    #[msg("Timestamp should be convertible from i64 to u64")]
    InvalidTimestampConversion, // 0x1772 (6002)
    #[msg("Timestamp should be greater than the last updated timestamp")]
    InvalidTimestamp, // 0x1773 (6003)

    #[msg("Provided tick index is out of bounds or not aligned to the tick spacing")]
    InvalidTickIndex, // 0x1774 (6004)
    #[msg("Tick is not aligned to the tick spacing")]
    TickNotAligned, // 0x1775 (6005)
    #[msg("Tick was never initialized in this virtual pool")]
    TickNotInitialized, // 0x1776 (6006)
    #[msg("Virtual pool cannot track any more boundary ticks")]
    TickCapacityExceeded, // 0x1777 (6007)

    #[msg("Liquidity amount must be greater than zero")]
    ZeroLiquidity, // 0x1778 (6008)
    #[msg("Liquidity amount must be less than i128::MAX")]
    LiquidityTooHigh, // 0x1779 (6009)
    #[msg("Liquidity overflow")]
    LiquidityOverflow, // 0x177a (6010)
    #[msg("Liquidity underflow")]
    LiquidityUnderflow, // 0x177b (6011)
    #[msg("Tick liquidity net underflowed or overflowed")]
    LiquidityNetError, // 0x177c (6012)

    #[msg("Reward amount must be greater than zero")]
    ZeroRewardAmount, // 0x177d (6013)
    #[msg("Provided plugin is not registered on the pool")]
    PluginNotConnected, // 0x177e (6014)
    #[msg("Pool already has an active incentive")]
    AnotherFarmingIsActive, // 0x177f (6015)
    #[msg("Minimal position width exceeds the full tick range")]
    MinimalPositionWidthTooWide, // 0x1780 (6016)
    #[msg("Incentive is deactivated")]
    IncentiveStopped, // 0x1781 (6017)
    #[msg("Emergency withdraw mode is active")]
    EmergencyActivated, // 0x1782 (6018)
    #[msg("Position is already participating in this incentive")]
    TokenAlreadyFarmed, // 0x1783 (6019)
    #[msg("Position range is narrower than the incentive allows")]
    PositionIsTooNarrow, // 0x1784 (6020)
    #[msg("Position does not belong to the incentivized pool")]
    InvalidPool, // 0x1785 (6021)
    #[msg("Farm does not exist for this position")]
    FarmDoesNotExist, // 0x1786 (6022)
    #[msg("Cannot claim rewards to the zero address")]
    ClaimToZeroAddress, // 0x1787 (6023)
    #[msg("Reward reserve overflowed")]
    RewardReserveOverflow, // 0x1788 (6024)
    #[msg("Reward and bonus reward mints must differ")]
    DuplicateRewardMint, // 0x1789 (6025)

    #[msg("Position token account has a missing or invalid delegate")]
    MissingOrInvalidDelegate, // 0x178a (6026)
    #[msg("Position token amount must be 1")]
    InvalidPositionTokenAmount, // 0x178b (6027)

    #[msg("Tick-spacing is not supported")]
    InvalidTickSpacing, // 0x178c (6028)
}

impl From<TryFromIntError> for ErrorCode {
    fn from(_: TryFromIntError) -> Self {
        ErrorCode::NumberCastError
    }
}
