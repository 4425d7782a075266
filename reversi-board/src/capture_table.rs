//! The capture rule for one line of eight squares, tabulated.
//!
//! The table maps `(player_row, opponent_row, position)` to the player's row
//! after a disc is placed at `position` and every bracketed opponent disc on
//! the line is flipped. Entries that capture nothing hold `player_row`
//! unchanged, so comparing a lookup against its input row answers whether
//! the move has any effect along that line.

use std::sync::OnceLock;
use std::time::Instant;

/// 256 player rows × 256 opponent rows × 8 move positions.
pub const TABLE_SIZE: usize = 256 * 256 * 8;

static TABLE: OnceLock<CaptureTable> = OnceLock::new();

/// The precomputed capture rule for all inputs. Read-only once built.
pub struct CaptureTable(Box<[u8]>);

/// Get the process-wide table, building it on first use.
///
/// Callers that share boards across threads may call this once up front so
/// that no search pays for construction.
#[inline]
pub fn init() -> &'static CaptureTable {
    TABLE.get_or_init(CaptureTable::build)
}

/// Look up a single entry of the process-wide table.
#[inline]
pub fn capture(player_row: u8, opponent_row: u8, position: u8) -> u8 {
    init().get(player_row, opponent_row, position)
}

impl CaptureTable {
    /// Build the table by enumerating every input.
    pub fn build() -> Self {
        let started = Instant::now();
        let mut entries = vec![0u8; TABLE_SIZE].into_boxed_slice();

        for player_row in 0..=u8::MAX {
            for opponent_row in 0..=u8::MAX {
                for position in 0..8 {
                    entries[index(player_row, opponent_row, position)] =
                        capture_in_row(player_row, opponent_row, position);
                }
            }
        }

        log::debug!(
            "built {} capture table entries in {:?}",
            TABLE_SIZE,
            started.elapsed()
        );
        Self(entries)
    }

    /// The player's row after moving at `position`.
    /// `position` must be below 8.
    #[inline]
    pub fn get(&self, player_row: u8, opponent_row: u8, position: u8) -> u8 {
        self.0[index(player_row, opponent_row, position)]
    }
}

#[inline]
fn index(player_row: u8, opponent_row: u8, position: u8) -> usize {
    usize::from(player_row) | usize::from(opponent_row) << 8 | usize::from(position) << 16
}

/// Apply the capture rule to a single row.
fn capture_in_row(player_row: u8, opponent_row: u8, position: u8) -> u8 {
    let move_bit = 1u8 << position;
    let filled = player_row | opponent_row;
    let empties = !filled;

    // Overlapping rows cannot come from a board; occupied squares cannot be played.
    if player_row & opponent_row != 0 || move_bit & filled != 0 {
        return player_row;
    }

    let placed = player_row | move_bit;
    let mut after = placed;

    // Squares below the move bit lie to its left on the line.
    let left_bracket = highest_bit(player_row & (move_bit - 1));
    let left_run = strictly_between(left_bracket | move_bit);
    if left_run & empties == 0 {
        after |= left_run;
    }

    let right_bracket = lowest_bit(player_row & !(move_bit - 1));
    let right_run = strictly_between(right_bracket | move_bit);
    if right_run & empties == 0 {
        after |= right_run;
    }

    // Nothing flipped on either side: no effect along this line.
    if after == placed {
        player_row
    } else {
        after
    }
}

#[inline]
fn highest_bit(bits: u8) -> u8 {
    if bits == 0 {
        0
    } else {
        1 << (7 - bits.leading_zeros())
    }
}

#[inline]
fn lowest_bit(bits: u8) -> u8 {
    bits & bits.wrapping_neg()
}

/// The bits strictly between the lowest and highest set bits of `bits`.
#[inline]
fn strictly_between(bits: u8) -> u8 {
    if bits == 0 {
        return 0;
    }
    let high = highest_bit(bits);
    let low = lowest_bit(bits);
    high.wrapping_sub(1) & !(low | low.wrapping_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_between_excludes_the_ends() {
        assert_eq!(strictly_between(0b1000_0001), 0b0111_1110);
        assert_eq!(strictly_between(0b0000_0110), 0);
        assert_eq!(strictly_between(0b0001_0000), 0);
        assert_eq!(strictly_between(0), 0);
    }

    #[test]
    fn flips_a_single_bracketed_disc() {
        // X O _ : playing at bit 2 flips bit 1.
        assert_eq!(capture(0b001, 0b010, 2), 0b111);
        // _ O X : playing at bit 0 flips bit 1.
        assert_eq!(capture(0b100, 0b010, 0), 0b111);
    }

    #[test]
    fn flips_both_sides_at_once() {
        // X O O _ O X
        let player = 0b10_0001;
        let opponent = 0b01_0110;
        assert_eq!(capture(player, opponent, 3), 0b11_1111);
    }

    #[test]
    fn gaps_and_missing_brackets_capture_nothing() {
        // X _ O _ : the run toward X contains an empty square.
        assert_eq!(capture(0b0001, 0b0100, 3), 0b0001);
        // O O _ : no bracketing disc.
        assert_eq!(capture(0, 0b011, 2), 0);
        // X _ : adjacent bracket, nothing to flip.
        assert_eq!(capture(0b01, 0, 1), 0b01);
    }

    #[test]
    fn occupied_or_overlapping_input_is_a_no_op() {
        let table = init();
        for player_row in 0..=u8::MAX {
            for opponent_row in 0..=u8::MAX {
                for position in 0..8 {
                    let move_bit = 1 << position;
                    let occupied = (player_row | opponent_row) & move_bit != 0;
                    let overlapping = player_row & opponent_row != 0;
                    if occupied || overlapping {
                        assert_eq!(table.get(player_row, opponent_row, position), player_row);
                    }
                }
            }
        }
    }

    #[test]
    fn results_only_grow_by_flipping_opponent_discs() {
        let table = init();
        for player_row in 0..=u8::MAX {
            for opponent_row in 0..=u8::MAX {
                if player_row & opponent_row != 0 {
                    continue;
                }
                for position in 0..8 {
                    let after = table.get(player_row, opponent_row, position);
                    if after == player_row {
                        continue;
                    }
                    let gained = after & !player_row;
                    let move_bit = 1 << position;
                    assert_ne!(gained & move_bit, 0);
                    assert_eq!(gained & !move_bit & !opponent_row, 0);
                    assert_ne!(gained & !move_bit, 0);
                    assert_eq!(after & player_row, player_row);
                }
            }
        }
    }
}
