//! Splitting the ordered item sequence into consecutive groups.

use core::num::NonZeroUsize;
use core::ops::Range;

/// One group of the partition: a 1-based position and the item indices it owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    pub index: usize,
    pub range: Range<usize>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// The items of `all` this group owns.
    pub fn items<'items, T>(&self, all: &'items [T]) -> &'items [T] {
        all.get(self.range.clone()).unwrap_or_default()
    }
}

/// Chunk `item_count` items into groups of `group_size`; the last group holds the remainder.
pub fn partition(item_count: usize, group_size: NonZeroUsize) -> Vec<Partition> {
    let size = group_size.get();
    (0..item_count)
        .step_by(size)
        .enumerate()
        .map(|(position, start)| Partition {
            index: position + 1,
            range: start..start.saturating_add(size).min(item_count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(item_count: usize, group_size: usize) -> Vec<usize> {
        partition(item_count, NonZeroUsize::new(group_size).unwrap())
            .iter()
            .map(Partition::len)
            .collect()
    }

    #[test]
    fn remainder_lands_in_last_group() {
        assert_eq!(sizes(7, 3), vec![3, 3, 1]);
        assert_eq!(sizes(6, 3), vec![3, 3]);
        assert_eq!(sizes(2, 5), vec![2]);
        assert_eq!(sizes(7, 1), vec![1; 7]);
        assert!(sizes(0, 4).is_empty());
    }

    #[test]
    fn indices_are_one_based_and_contiguous() {
        let groups = partition(5, NonZeroUsize::new(2).unwrap());
        assert_eq!(
            groups,
            vec![
                Partition { index: 1, range: 0..2 },
                Partition { index: 2, range: 2..4 },
                Partition { index: 3, range: 4..5 },
            ]
        );
        let items = ["a", "b", "c", "d", "e"];
        assert_eq!(groups[2].items(&items), &["e"]);
    }
}
