
/*!
Contains configuration information for the column consensus algorithm.
Typical usage is to the use the builder to construct the config, e.g.
```
use column_con::consensus_config::{ConsensusConfig, ConsensusConfigBuilder};
let config: ConsensusConfig = ConsensusConfigBuilder::default()
    .call_threshold(0.9)
    .remove_gaps(true)
    .build()
    .unwrap();
config.validate().unwrap();
```
*/

use simple_error::bail;

/**
Contains configuration information for the column consensus algorithm.
Typical usage is to the use the builder to construct the config, e.g.
```
use column_con::consensus_config::{ConsensusConfig, ConsensusConfigBuilder};
let config: ConsensusConfig = ConsensusConfigBuilder::default()
    .call_threshold(0.9)
    .remove_gaps(true)
    .build()
    .unwrap();
config.validate().unwrap();
```
*/
#[derive(derive_builder::Builder, Clone, Debug)]
#[builder(default)]
pub struct ConsensusConfig {
    /// Minimum fraction of the effective column total for a single base to get called outright
    pub call_threshold: f64,
    /// Minimum fraction of the effective column total for a base to join the ambiguity candidate set
    pub candidate_threshold: f64,
    /// Minimum gap fraction of the full column for the consensus to be a gap
    pub gap_threshold: f64,
    /// If true, any non-ACGT ambiguity code is collapsed to 'N'
    pub ambiguities_to_n: bool,
    /// If true, columns without a called base fall back to the most abundant base instead of an ambiguity code
    pub use_most_abundant: bool,
    /// If true, gap consensus columns are dropped from the output sequence
    pub remove_gaps: bool
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            // 70% majority is a solid call for most alignments
            call_threshold: 0.7,
            // below 30%, a base is more likely noise than signal
            candidate_threshold: 0.3,
            // gaps only dominate when they are nearly the whole column
            gap_threshold: 0.8,
            // most users want the IUPAC codes, not a flat 'N'
            ambiguities_to_n: false,
            // plurality calling changes the meaning of the output, so it is opt-in
            use_most_abundant: false,
            // keeping gaps preserves coordinates against the input alignment
            remove_gaps: false
        }
    }
}

impl ConsensusConfig {
    /// Checks that every threshold is a sensible fraction.
    /// # Errors
    /// * if any threshold is outside [0.0, 1.0]
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        for (label, value) in [
            ("call_threshold", self.call_threshold),
            ("candidate_threshold", self.candidate_threshold),
            ("gap_threshold", self.gap_threshold)
        ] {
            if !(0.0..=1.0).contains(&value) {
                bail!("Invalid threshold: {} must be in [0.0, 1.0], got {}", label, value);
            }
        }
        Ok(())
    }
}
