use anchor_lang::prelude::*;

use std::result::Result;

use crate::errors::ErrorCode;

// Bits per bitmap word
pub const TICKMAP_WORD_SIZE: u32 = 128;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq)]
pub struct TickWord {
    pub index: i16,
    pub bits: u128,
}

/// Sparse bitmap over spacing-compressed tick indices. A set bit marks a tick
/// that is currently a boundary of at least one farmed liquidity range.
///
/// Words are kept sorted by index and all-zero words are dropped, so lookups
/// are logarithmic in the number of *occupied* words and never depend on the
/// total tick count.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq)]
pub struct Tickmap {
    pub words: Vec<TickWord>,
}

impl Tickmap {
    fn compress(tick: i32, tick_spacing: u16) -> i32 {
        tick.div_euclid(tick_spacing as i32)
    }

    fn position(compressed: i32) -> (i16, u32) {
        ((compressed >> 7) as i16, (compressed & 127) as u32)
    }

    fn word(&self, index: i16) -> u128 {
        match self.words.binary_search_by_key(&index, |w| w.index) {
            Ok(i) => self.words[i].bits,
            Err(_) => 0,
        }
    }

    fn set_word(&mut self, index: i16, bits: u128) {
        match self.words.binary_search_by_key(&index, |w| w.index) {
            Ok(i) => {
                if bits == 0 {
                    self.words.remove(i);
                } else {
                    self.words[i].bits = bits;
                }
            }
            Err(i) => {
                if bits != 0 {
                    self.words.insert(i, TickWord { index, bits });
                }
            }
        }
    }

    /// Flips the bit for `tick`. Fails if `tick` is not aligned to the
    /// configured spacing.
    pub fn toggle(&mut self, tick: i32, tick_spacing: u16) -> Result<(), ErrorCode> {
        if tick % tick_spacing as i32 != 0 {
            return Err(ErrorCode::TickNotAligned);
        }
        let compressed = Self::compress(tick, tick_spacing);
        let (word_index, bit) = Self::position(compressed);
        let bits = self.word(word_index) ^ (1u128 << bit);
        self.set_word(word_index, bits);
        Ok(())
    }

    pub fn is_initialized(&self, tick: i32, tick_spacing: u16) -> bool {
        if tick % tick_spacing as i32 != 0 {
            return false;
        }
        let compressed = Self::compress(tick, tick_spacing);
        let (word_index, bit) = Self::position(compressed);
        self.word(word_index) & (1u128 << bit) != 0
    }

    /// Returns the nearest set bit in the search direction, bounded to the
    /// word containing the starting position, plus whether the returned tick
    /// is itself initialized. When the word holds no set bit in range, the
    /// word boundary is returned with `false`.
    ///
    /// `search_left == true` searches at or below `tick`; otherwise strictly
    /// above `tick`. Cost is a constant number of word operations.
    pub fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        tick_spacing: u16,
        search_left: bool,
    ) -> (i32, bool) {
        let spacing = tick_spacing as i32;
        if search_left {
            let compressed = Self::compress(tick, tick_spacing);
            let (word_index, bit) = Self::position(compressed);
            let mask = if bit == 127 {
                u128::MAX
            } else {
                (1u128 << (bit + 1)) - 1
            };
            let masked = self.word(word_index) & mask;
            if masked != 0 {
                let msb = 127 - masked.leading_zeros();
                ((compressed - (bit as i32 - msb as i32)) * spacing, true)
            } else {
                ((compressed - bit as i32) * spacing, false)
            }
        } else {
            let compressed = Self::compress(tick, tick_spacing) + 1;
            let (word_index, bit) = Self::position(compressed);
            let mask = !((1u128 << bit) - 1);
            let masked = self.word(word_index) & mask;
            if masked != 0 {
                let lsb = masked.trailing_zeros();
                ((compressed + (lsb as i32 - bit as i32)) * spacing, true)
            } else {
                ((compressed + (127 - bit as i32)) * spacing, false)
            }
        }
    }

    /// Like `next_initialized_tick_within_one_word`, but continues across the
    /// occupied words until a set bit is found. Returns `None` when no
    /// initialized tick exists in the search direction.
    pub fn next_initialized_tick(
        &self,
        tick: i32,
        tick_spacing: u16,
        search_left: bool,
    ) -> Option<i32> {
        let spacing = tick_spacing as i32;
        if search_left {
            let compressed = Self::compress(tick, tick_spacing);
            let (word_index, bit) = Self::position(compressed);
            let mask = if bit == 127 {
                u128::MAX
            } else {
                (1u128 << (bit + 1)) - 1
            };
            let end = self.words.partition_point(|w| w.index <= word_index);
            for word in self.words[..end].iter().rev() {
                let bits = if word.index == word_index {
                    word.bits & mask
                } else {
                    word.bits
                };
                if bits != 0 {
                    let msb = 127 - bits.leading_zeros();
                    return Some(((word.index as i32) * 128 + msb as i32) * spacing);
                }
            }
            None
        } else {
            let compressed = Self::compress(tick, tick_spacing) + 1;
            let (word_index, bit) = Self::position(compressed);
            let mask = !((1u128 << bit) - 1);
            let start = self.words.partition_point(|w| w.index < word_index);
            for word in self.words[start..].iter() {
                let bits = if word.index == word_index {
                    word.bits & mask
                } else {
                    word.bits
                };
                if bits != 0 {
                    let lsb = bits.trailing_zeros();
                    return Some(((word.index as i32) * 128 + lsb as i32) * spacing);
                }
            }
            None
        }
    }
}
