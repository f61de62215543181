
/*!
This module provides the per-column frequency table feeding the consensus caller.
Symbols are kept in first-encounter order, so downstream sweeps over the table are
deterministic for a given column.

# Example usage
```rust
use column_con::frequency::FrequencyTable;

let table = FrequencyTable::from_column(b"AACCA".iter().copied());
assert_eq!(table.total(), 5);
assert_eq!(table.count(b'A'), 3);
assert_eq!(table.count(b'C'), 2);
assert_eq!(table.count(b'G'), 0);
```
*/

/// Symbol occurrence counts for a single alignment column.
/// Iteration order is the order symbols were first seen in the column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyTable {
    /// (symbol, count) pairs in first-encounter order; the alphabet per column is tiny, so linear scans win over hashing
    entries: Vec<(u8, u64)>,
    /// Sum of all counts still in the table
    total: u64
}

impl FrequencyTable {
    /// Tallies one column of symbols into a table.
    /// # Arguments
    /// * `column` - the symbols of a single alignment column, one per sequence
    pub fn from_column(column: impl Iterator<Item = u8>) -> FrequencyTable {
        let mut table = FrequencyTable::default();
        for symbol in column {
            table.increment(symbol);
        }
        table
    }

    /// Adds one observation of a symbol.
    pub fn increment(&mut self, symbol: u8) {
        match self.entries.iter_mut().find(|(s, _c)| *s == symbol) {
            Some((_s, count)) => *count += 1,
            None => self.entries.push((symbol, 1))
        };
        self.total += 1;
    }

    /// Removes a symbol from the table, returning its count (0 if absent).
    /// The total shrinks accordingly, so later fractions are relative to what remains.
    /// # Arguments
    /// * `symbol` - the symbol to drop from consideration
    pub fn remove(&mut self, symbol: u8) -> u64 {
        match self.entries.iter().position(|(s, _c)| *s == symbol) {
            Some(index) => {
                let (_s, count) = self.entries.remove(index);
                self.total -= count;
                count
            },
            None => 0
        }
    }

    /// Returns the count for a symbol, 0 if it was never seen.
    pub fn count(&self, symbol: u8) -> u64 {
        self.entries.iter()
            .find(|(s, _c)| *s == symbol)
            .map(|(_s, c)| *c)
            .unwrap_or(0)
    }

    /// Iterates (symbol, count) pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.entries.iter().copied()
    }

    // getters
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let table = FrequencyTable::from_column(b"GATTACA".iter().copied());
        let observed: Vec<(u8, u64)> = table.iter().collect();
        assert_eq!(observed, vec![
            (b'G', 1),
            (b'A', 3),
            (b'T', 2),
            (b'C', 1)
        ]);
        assert_eq!(table.total(), 7);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_remove() {
        let mut table = FrequencyTable::from_column(b"AAC--".iter().copied());
        assert_eq!(table.total(), 5);

        let removed = table.remove(b'-');
        assert_eq!(removed, 2);
        assert_eq!(table.total(), 3);
        assert_eq!(table.count(b'-'), 0);

        // removing an absent symbol is a no-op
        assert_eq!(table.remove(b'-'), 0);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_empty_column() {
        let table = FrequencyTable::from_column(std::iter::empty());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }
}
