use crate::errors::{SequenceError, SequenceResult};
use crate::types::TokenId;

/// Bit `k` is set when both sequences carry the same token at position `k`.
/// Positions past the shorter sequence are never set.
pub fn match_bits(a: &[TokenId], b: &[TokenId]) -> usize {
    a.iter()
        .zip(b)
        .enumerate()
        .filter(|(_, (x, y))| x == y)
        .fold(0, |bits, (k, _)| bits | (1 << k))
}

/// Number of subtuple cells (`2^length`) for a sequence of `length` tokens.
pub fn subtuple_cells(length: usize) -> SequenceResult<usize> {
    u32::try_from(length)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .ok_or(SequenceError::HistogramTooLarge { length })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_bits_marks_equal_positions() {
        assert_eq!(match_bits(&[1, 2, 3], &[1, 9, 3]), 0b101);
        assert_eq!(match_bits(&[1, 2], &[9, 9]), 0);
        assert_eq!(match_bits(&[4, 5], &[4, 5]), 0b11);
    }

    #[test]
    fn match_bits_stops_at_shorter_sequence() {
        assert_eq!(match_bits(&[1, 2], &[1, 2, 3, 4]), 0b11);
        assert_eq!(match_bits(&[1, 2, 3, 4], &[1, 7]), 0b1);
        assert_eq!(match_bits(&[], &[1, 2]), 0);
    }

    #[test]
    fn subtuple_cells_is_exact_power_of_two() {
        assert_eq!(subtuple_cells(0).unwrap(), 1);
        assert_eq!(subtuple_cells(3).unwrap(), 8);
        assert_eq!(subtuple_cells(20).unwrap(), 1 << 20);
    }

    #[test]
    fn subtuple_cells_rejects_unaddressable_lengths() {
        let length = usize::BITS as usize;
        assert!(matches!(
            subtuple_cells(length),
            Err(SequenceError::HistogramTooLarge { length: l }) if l == length
        ));
    }
}
