//! Index column holding stable row identities

use std::collections::HashSet;

use crate::error::{DataFrameError, DataFrameResult};

/// Column of `u64` row identities
///
/// Identities stay attached to a row when rows are reordered or filtered,
/// which is what lets views with different orderings exchange selections.
/// Uniqueness is expected but not enforced; see [`duplicates`](Self::duplicates).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexColumn {
    header: String,
    ids: Vec<u64>,
    /// Largest identity in `ids`, `None` when empty
    max: Option<u64>,
}

impl IndexColumn {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ids: Vec::new(),
            max: None,
        }
    }

    /// Identities `0..size`
    pub fn sequential(header: impl Into<String>, size: usize) -> Self {
        Self::from_ids(header, (0..size as u64).collect())
    }

    pub fn from_ids(header: impl Into<String>, ids: Vec<u64>) -> Self {
        let max = ids.iter().copied().max();
        Self {
            header: header.into(),
            ids,
            max,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    pub(crate) fn ids_vec(&self) -> &Vec<u64> {
        &self.ids
    }

    /// Identity at `row`
    pub fn id(&self, row: usize) -> DataFrameResult<u64> {
        self.ids.get(row).copied().ok_or(DataFrameError::RowOutOfRange {
            row,
            rows: self.ids.len(),
        })
    }

    /// Next free identity: one past the maximum, 0 when empty
    ///
    /// Fails with [`DataFrameError::IdentityOverflow`] once `u64::MAX` is taken.
    pub fn next_id(&self) -> DataFrameResult<u64> {
        match self.max {
            None => Ok(0),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| DataFrameError::IdentityOverflow {
                    header: self.header.clone(),
                }),
        }
    }

    pub fn push(&mut self, id: u64) {
        self.ids.push(id);
        self.max = self.max.max(Some(id));
    }

    /// Append `count` fresh identities continuing from [`next_id`](Self::next_id)
    ///
    /// Nothing is appended when the new identities would not fit in `u64`.
    pub fn extend_sequential(&mut self, count: usize) -> DataFrameResult<()> {
        if count == 0 {
            return Ok(());
        }
        let start = self.next_id()?;
        let last = start
            .checked_add(count as u64 - 1)
            .ok_or_else(|| DataFrameError::IdentityOverflow {
                header: self.header.clone(),
            })?;
        self.ids.extend(start..=last);
        self.max = Some(last);
        Ok(())
    }

    pub fn truncate(&mut self, len: usize) {
        if len < self.ids.len() {
            self.ids.truncate(len);
            self.max = self.ids.iter().copied().max();
        }
    }

    pub fn is_unique(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.ids.len());
        self.ids.iter().all(|id| seen.insert(*id))
    }

    /// Identities that occur more than once, sorted
    pub fn duplicates(&self) -> Vec<u64> {
        let mut seen = HashSet::with_capacity(self.ids.len());
        let mut dups: Vec<u64> = self
            .ids
            .iter()
            .filter(|id| !seen.insert(**id))
            .copied()
            .collect();
        dups.sort_unstable();
        dups.dedup();
        dups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential() {
        let col = IndexColumn::sequential("index", 3);
        assert_eq!(col.ids(), &[0, 1, 2]);
        assert_eq!(col.next_id(), Ok(3));
    }

    #[test]
    fn test_extend_continues_from_max() {
        let mut col = IndexColumn::from_ids("index", vec![10, 4]);
        col.extend_sequential(2).unwrap();
        assert_eq!(col.ids(), &[10, 4, 11, 12]);
        assert_eq!(col.next_id(), Ok(13));
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(IndexColumn::new("index").next_id(), Ok(0));
    }

    #[test]
    fn test_next_id_tracks_push_and_truncate() {
        let mut col = IndexColumn::from_ids("index", vec![2, 9]);
        col.push(4);
        assert_eq!(col.next_id(), Ok(10));
        col.truncate(1);
        assert_eq!(col.next_id(), Ok(3));
        col.truncate(0);
        assert_eq!(col.next_id(), Ok(0));
    }

    #[test]
    fn test_next_id_at_u64_max() {
        let col = IndexColumn::from_ids("index", vec![u64::MAX]);
        assert_eq!(
            col.next_id(),
            Err(DataFrameError::IdentityOverflow {
                header: "index".into()
            })
        );
    }

    #[test]
    fn test_extend_sequential_overflow_leaves_column_unchanged() {
        let mut col = IndexColumn::from_ids("index", vec![u64::MAX - 2]);
        assert!(col.extend_sequential(3).is_err());
        assert_eq!(col.ids(), &[u64::MAX - 2]);

        col.extend_sequential(2).unwrap();
        assert_eq!(col.ids(), &[u64::MAX - 2, u64::MAX - 1, u64::MAX]);
        assert!(col.extend_sequential(0).is_ok());
    }

    #[test]
    fn test_duplicates() {
        let col = IndexColumn::from_ids("index", vec![3, 1, 3, 2, 1, 3]);
        assert!(!col.is_unique());
        assert_eq!(col.duplicates(), vec![1, 3]);
        assert!(IndexColumn::sequential("index", 4).is_unique());
    }
}
