//! Reorder Algorithm
//!
//! Single-element relocation: remove at `source`, insert at `target` of the
//! shortened sequence. Not a pairwise swap.

use crate::domain::{BoardError, BoardResult};

/// Move the element at `source` so that it ends up at index `target`.
///
/// Both indices must address the current sequence. On error the sequence
/// is left untouched.
pub fn move_element<T>(seq: &mut Vec<T>, source: usize, target: usize) -> BoardResult<()> {
    let len = seq.len();
    for index in [source, target] {
        if index >= len {
            return Err(BoardError::IndexOutOfRange { index, len });
        }
    }
    if source == target {
        return Ok(());
    }
    let element = seq.remove(source);
    seq.insert(target, element);
    Ok(())
}

/// Owned variant of [`move_element`]
pub fn moved<T: Clone>(seq: &[T], source: usize, target: usize) -> BoardResult<Vec<T>> {
    let mut out = seq.to_vec();
    move_element(&mut out, source, target)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_move_forward() {
        let out = moved(&['a', 'b', 'c', 'd'], 0, 2).unwrap();
        assert_eq!(out, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_move_backward() {
        let out = moved(&['a', 'b', 'c', 'd'], 3, 1).unwrap();
        assert_eq!(out, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_move_to_last() {
        let out = moved(&[1, 2, 3], 0, 2).unwrap();
        assert_eq!(out, vec![2, 3, 1]);
    }

    #[test]
    fn test_out_of_range_is_rejected_not_clamped() {
        let mut seq = vec![1, 2, 3];
        let err = move_element(&mut seq, 0, 3).unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(seq, vec![1, 2, 3]);

        let err = move_element(&mut seq, 5, 0).unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { index: 5, len: 3 }));
    }

    #[test]
    fn test_empty_sequence_rejects_everything() {
        let mut seq: Vec<u8> = Vec::new();
        assert!(move_element(&mut seq, 0, 0).is_err());
    }

    fn seq_and_indices() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
        // Distinct elements make relative-order checks unambiguous.
        (1usize..24).prop_flat_map(|len| {
            (
                Just((0..len as u32).collect::<Vec<_>>()),
                0..len,
                0..len,
            )
        })
    }

    proptest! {
        #[test]
        fn prop_move_preserves_multiset((seq, i, j) in seq_and_indices()) {
            let out = moved(&seq, i, j).unwrap();
            prop_assert_eq!(out.len(), seq.len());
            let mut sorted = out.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, seq.clone());
            prop_assert_eq!(out[j], seq[i]);
        }

        #[test]
        fn prop_move_keeps_relative_order_of_others((seq, i, j) in seq_and_indices()) {
            let out = moved(&seq, i, j).unwrap();
            let moved_value = seq[i];
            let before: Vec<_> = seq.iter().filter(|v| **v != moved_value).collect();
            let after: Vec<_> = out.iter().filter(|v| **v != moved_value).collect();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn prop_self_move_is_identity((seq, i, _j) in seq_and_indices()) {
            prop_assert_eq!(moved(&seq, i, i).unwrap(), seq);
        }
    }
}
