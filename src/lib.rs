/*!
# column_con
This library builds a consensus sequence from a multiple sequence alignment by
majority-calling each column, with IUPAC ambiguity codes where no single base dominates.

Key behaviors:
* Gap-dominated columns call a gap before any base is considered
* Columns without a dominant base resolve to an IUPAC ambiguity code, a flat `N`, or the most abundant base, depending on configuration
* Columns where nothing reaches a threshold contribute no symbol

# Example usage
```rust
use column_con::consensus::ColumnConsensus;
use column_con::consensus_config::ConsensusConfigBuilder;

let sequences = [
    b"ACGT-".to_vec(),
    b"ACGTT".to_vec(),
    b"ACCTT".to_vec(),
    b"AGCTT".to_vec()
];

let config = ConsensusConfigBuilder::default()
    .call_threshold(0.7)
    .build()
    .unwrap();

// add all the rows
let mut caller = ColumnConsensus::with_config(config).unwrap();
for s in sequences.iter() {
    caller.add_sequence(s).unwrap();
}

// run consensus and check the results
let consensus = caller.consensus().unwrap();
assert_eq!(consensus.sequence(), b"ACSTT");
```
*/

/// The alignment container with the equal-length invariant
pub mod alignment;
/// Main functionality for the column consensus component
pub mod consensus;
/// Configuration for ColumnConsensus
pub mod consensus_config;
/// Utility for generating example alignments
pub mod example_gen;
/// Aligned-FASTA loading and consensus record writing
pub mod fasta;
/// Per-column symbol frequency table
pub mod frequency;
/// Static IUPAC ambiguity-code lookup
pub mod iupac;
