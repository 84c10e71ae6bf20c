#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]

/// 256-bit unsigned integer built on parity's uint crate
/// https://github.com/paritytech/parity-common/tree/master/uint
///
/// The X128 reward accounting multiplies two 128-bit quantities before the
/// scale-down division, so the intermediate products need the full 256 bits.
use std::convert::TryInto;
use uint::construct_uint;

use crate::errors::ErrorCode;

construct_uint! {
    // U256 of [u64; 4]
    pub struct U256(4);
}

impl U256 {
    pub fn try_into_u64(self) -> Result<u64, ErrorCode> {
        self.try_into().map_err(|_| ErrorCode::NumberCastError)
    }

    pub fn try_into_u128(self) -> Result<u128, ErrorCode> {
        self.try_into().map_err(|_| ErrorCode::NumberCastError)
    }
}
