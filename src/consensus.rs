
/*!
This module provides access to the ColumnConsensus engine, which reduces an alignment to a
single consensus sequence with one sweep over the columns.

# Example usage
```rust
use column_con::consensus::ColumnConsensus;

let sequences = [
    b"ACGT-A".to_vec(),
    b"ACGTCA".to_vec(),
    b"ACGACA".to_vec(),
    b"ACGTCA".to_vec()
];

// add all the rows
let mut caller: ColumnConsensus = Default::default();
for s in sequences.iter() {
    caller.add_sequence(s).unwrap();
}

// run consensus and check the results
let consensus = caller.consensus().unwrap();
assert_eq!(consensus.sequence(), b"ACGTCA");
```
*/

use log::{debug, trace};
use simple_error::bail;

use crate::alignment::Alignment;
use crate::consensus_config::ConsensusConfig;
use crate::frequency::FrequencyTable;
use crate::iupac::{ambiguity_code, is_unambiguous};

/// The alignment gap symbol.
pub const GAP: u8 = b'-';

/// Contains a final consensus result along with the per-symbol summary counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Consensus {
    /// The generated consensus
    sequence: Vec<u8>,
    /// Number of output positions that are not gaps
    called_positions: usize,
    /// Number of output positions carrying an ambiguity code
    ambiguous_positions: usize,
    /// Number of output positions that are gaps
    gap_positions: usize,
    /// Number of input columns that contributed no output symbol
    dropped_columns: usize
}

impl Consensus {
    /// Constructor; the counters are derived from the sequence plus the drop count.
    pub fn new(sequence: Vec<u8>, dropped_columns: usize) -> Consensus {
        let gap_positions = sequence.iter().filter(|&&s| s == GAP).count();
        let ambiguous_positions = sequence.iter()
            .filter(|&&s| s != GAP && !is_unambiguous(s))
            .count();
        let called_positions = sequence.len() - gap_positions;
        Consensus {
            sequence,
            called_positions,
            ambiguous_positions,
            gap_positions,
            dropped_columns
        }
    }

    // Getters
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn called_positions(&self) -> usize {
        self.called_positions
    }

    pub fn ambiguous_positions(&self) -> usize {
        self.ambiguous_positions
    }

    pub fn gap_positions(&self) -> usize {
        self.gap_positions
    }

    pub fn dropped_columns(&self) -> usize {
        self.dropped_columns
    }
}

/// Core utility that generates a consensus by majority-calling each alignment column.
/// All added rows must share one length; the rows are borrowed, never copied.
#[derive(Debug, Default)]
pub struct ColumnConsensus<'a> {
    /// Contains all the rows that have been added to this consensus so far
    sequences: Vec<&'a [u8]>,
    /// The config for this consensus run
    config: ConsensusConfig
}

impl<'a> ColumnConsensus<'a> {
    /// Creates a new instance of ColumnConsensus and performs sanity checks.
    /// # Arguments
    /// * `config` - the thresholds and flags controlling each column call
    /// # Errors
    /// * if any threshold in the config is outside [0.0, 1.0]
    pub fn with_config(config: ConsensusConfig) -> Result<ColumnConsensus<'a>, Box<dyn std::error::Error>> {
        config.validate()?;
        Ok(ColumnConsensus {
            sequences: vec![],
            config
        })
    }

    /// Wraps an already-loaded alignment.
    /// # Arguments
    /// * `alignment` - the alignment to reduce
    /// * `config` - the thresholds and flags controlling each column call
    /// # Errors
    /// * if any threshold in the config is outside [0.0, 1.0]
    pub fn from_alignment(alignment: &'a Alignment, config: ConsensusConfig) -> Result<ColumnConsensus<'a>, Box<dyn std::error::Error>> {
        let mut caller = Self::with_config(config)?;
        for sequence in alignment.sequences() {
            caller.add_sequence(sequence)?;
        }
        Ok(caller)
    }

    /// Adds a new row to the alignment.
    /// # Arguments
    /// * `sequence` - the new row to add
    /// # Errors
    /// * if the row length does not match the rows already added
    pub fn add_sequence(&mut self, sequence: &'a [u8]) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(first) = self.sequences.first() {
            if first.len() != sequence.len() {
                bail!("Input is not aligned: sequence has length {}, expected {}", sequence.len(), first.len());
            }
        }
        self.sequences.push(sequence);
        Ok(())
    }

    /// The core function that gets called after adding all the rows we care about.
    /// Sweeps the columns left to right, tabulating and calling each one in turn.
    /// # Errors
    /// * if the alignment is empty or zero-width
    /// * if a candidate set has no IUPAC code (non-ACGT symbols below the call threshold)
    pub fn consensus(&self) -> Result<Consensus, Box<dyn std::error::Error>> {
        if self.sequences.is_empty() {
            bail!("Empty alignment: no sequences to build a consensus from");
        }
        let width = self.sequences[0].len();
        if width == 0 {
            bail!("Empty alignment: sequences have zero length");
        }

        debug!("Building consensus: {} sequences x {} positions", self.sequences.len(), width);

        let mut sequence: Vec<u8> = Vec::with_capacity(width);
        let mut dropped_columns: usize = 0;
        for position in 0..width {
            let table = FrequencyTable::from_column(
                self.sequences.iter().map(|s| s[position].to_ascii_uppercase())
            );
            let call = call_column(table, &self.config)?;
            trace!("column {position}: {:?}", call.map(|c| c as char));

            match call {
                Some(GAP) if self.config.remove_gaps => dropped_columns += 1,
                Some(symbol) => sequence.push(symbol),
                None => dropped_columns += 1
            };
        }

        let consensus = Consensus::new(sequence, dropped_columns);
        debug!("Consensus positions: {}", consensus.called_positions());
        debug!("Of which are ambiguous: {}", consensus.ambiguous_positions());
        debug!("Of which are gaps: {}", consensus.gap_positions());
        Ok(consensus)
    }

    // getters
    pub fn sequences(&self) -> &[&'a [u8]] {
        &self.sequences
    }

    pub fn config(&self) -> &ConsensusConfig {
        &self.config
    }
}

/// Calls the consensus symbol for one column, None if the column contributes nothing.
/// # Arguments
/// * `table` - the column frequency table, insertion ordered
/// * `config` - the thresholds and flags controlling the call
/// # Errors
/// * if the candidate set has no IUPAC code
fn call_column(mut table: FrequencyTable, config: &ConsensusConfig) -> Result<Option<u8>, Box<dyn std::error::Error>> {
    let column_total = table.total();

    // gaps first: a dominant gap ends the column before any base is considered
    let gap_count = table.count(GAP);
    if gap_count > 0 {
        let gap_fraction = gap_count as f64 / column_total as f64;
        if gap_fraction >= config.gap_threshold {
            return Ok(Some(GAP));
        }
        // gaps are a minority here, all later fractions are relative to the bases that remain
        table.remove(GAP);
    }
    let total = table.total();
    debug_assert!(total > 0);

    let mut called: Option<u8> = None;
    let mut candidates: Vec<u8> = vec![];
    let mut most: Option<u8> = None;
    let mut most_fraction: f64 = 0.0;
    for (symbol, count) in table.iter() {
        let fraction = count as f64 / total as f64;
        if fraction >= config.call_threshold {
            // on a tie above the call threshold, the last symbol in column order wins
            called = Some(symbol);
        } else if fraction >= config.candidate_threshold {
            candidates.push(symbol);
        }
        if fraction > most_fraction {
            most = Some(symbol);
            most_fraction = fraction;
        }
    }

    if called.is_some() {
        return Ok(called);
    }
    if config.use_most_abundant {
        return Ok(most);
    }
    if !candidates.is_empty() {
        let code = match ambiguity_code(&candidates) {
            Some(code) => code,
            None => bail!(
                "No IUPAC code for candidate set {:?}",
                candidates.iter().map(|&c| c as char).collect::<Vec<char>>()
            )
        };
        let code = if config.ambiguities_to_n && !is_unambiguous(code) {
            b'N'
        } else {
            code
        };
        return Ok(Some(code));
    }

    // nothing reached any threshold and no fallback requested
    Ok(None)
}
