
/*!
This module provides the Alignment container: an ordered set of named sequences that
are all the same length and can therefore be sliced column-by-column.

# Example usage
```rust
use column_con::alignment::Alignment;

let mut alignment = Alignment::default();
alignment.add_sequence("seq1", b"acgt").unwrap();
alignment.add_sequence("seq2", b"ACGA").unwrap();

assert_eq!(alignment.sequence_count(), 2);
assert_eq!(alignment.width(), 4);
// input is normalized to uppercase
assert_eq!(alignment.column(0).collect::<Vec<u8>>(), vec![b'A', b'A']);
```
*/

use itertools::Itertools;
use rustc_hash::FxHashSet as HashSet;
use simple_error::bail;

/// An ordered collection of named sequences of identical length.
/// Sequences are normalized to uppercase on the way in and never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct Alignment {
    /// Record names, parallel to `sequences`
    names: Vec<String>,
    /// The uppercase sequence rows, all of length `width()`
    sequences: Vec<Vec<u8>>,
    /// Every symbol observed across the alignment
    alphabet: HashSet<u8>
}

impl Alignment {
    /// Adds a new named sequence to the alignment.
    /// # Arguments
    /// * `name` - the record name
    /// * `sequence` - the sequence row, any case
    /// # Errors
    /// * if the sequence length does not match the rows already added
    pub fn add_sequence(&mut self, name: &str, sequence: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(first) = self.sequences.first() {
            if first.len() != sequence.len() {
                bail!(
                    "Input is not aligned: record \"{}\" has length {}, expected {}",
                    name, sequence.len(), first.len()
                );
            }
        }

        let normalized: Vec<u8> = sequence.iter().map(|s| s.to_ascii_uppercase()).collect();
        self.alphabet.extend(normalized.iter().copied());
        self.names.push(name.to_string());
        self.sequences.push(normalized);
        Ok(())
    }

    /// Batch constructor from (name, sequence) records.
    /// # Arguments
    /// * `records` - the (name, sequence) pairs, in input order
    /// # Errors
    /// * if the records do not all share one length
    pub fn from_records<'a>(records: impl IntoIterator<Item = (&'a str, &'a [u8])>) -> Result<Alignment, Box<dyn std::error::Error>> {
        let records: Vec<(&str, &[u8])> = records.into_iter().collect();
        if !records.iter().map(|(_n, s)| s.len()).all_equal() {
            let lengths: Vec<usize> = records.iter().map(|(_n, s)| s.len()).collect();
            bail!("Input is not aligned: sequence lengths differ: {:?}", lengths);
        }

        let mut alignment = Alignment::default();
        for (name, sequence) in records {
            alignment.add_sequence(name, sequence)?;
        }
        Ok(alignment)
    }

    /// Returns the vertical slice of the alignment at one position.
    /// # Arguments
    /// * `position` - the 0-based column index, must be < `width()`
    pub fn column(&self, position: usize) -> impl Iterator<Item = u8> + '_ {
        assert!(position < self.width());
        self.sequences.iter().map(move |s| s[position])
    }

    /// The number of sequence rows.
    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    /// The shared sequence length, 0 if the alignment is empty.
    pub fn width(&self) -> usize {
        self.sequences.first().map_or(0, |s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    // getters
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn sequences(&self) -> &[Vec<u8>] {
        &self.sequences
    }

    pub fn alphabet(&self) -> &HashSet<u8> {
        &self.alphabet
    }
}
