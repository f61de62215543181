
/*!
Aligned-FASTA loading and consensus record writing.
Parsing is delegated to needletail; this module only enforces the alignment invariant on
the way in and synthesizes the consensus record on the way out.
*/

use log::debug;
use needletail::parse_fastx_file;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::alignment::Alignment;
use crate::consensus::Consensus;
use crate::consensus_config::ConsensusConfig;

/// Loads a multi-FASTA file into an Alignment.
/// The record id is the full header line and sequences are normalized to uppercase.
/// # Arguments
/// * `path` - the aligned FASTA file to read
/// # Errors
/// * if the file cannot be parsed as FASTA
/// * if the records do not all share one length
pub fn load_alignment(path: &Path) -> Result<Alignment, Box<dyn std::error::Error>> {
    let mut reader = parse_fastx_file(path)?;
    let mut alignment = Alignment::default();
    while let Some(record) = reader.next() {
        let record = record?;
        let name = String::from_utf8_lossy(record.id()).into_owned();
        alignment.add_sequence(&name, &record.seq())?;
    }
    debug!(
        "Loaded alignment from {:?}: {} sequences x {} positions",
        path, alignment.sequence_count(), alignment.width()
    );
    Ok(alignment)
}

/// Returns the input file name with its final extension stripped, for use in the consensus header.
/// # Arguments
/// * `path` - the input alignment path
pub fn input_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Synthesizes the consensus record header from the input name and the thresholds used.
/// # Arguments
/// * `stem` - the input name, typically from `input_stem`
/// * `config` - the config the consensus was built with
pub fn consensus_header(stem: &str, config: &ConsensusConfig) -> String {
    let mut header = format!(
        "{}_consensus_t{}_b{}_g{}",
        stem,
        (config.call_threshold * 100.0).round(),
        (config.candidate_threshold * 100.0).round(),
        (config.gap_threshold * 100.0).round()
    );
    if config.use_most_abundant {
        header.push_str("_mostAbundant");
    }
    header
}

/// Writes one consensus FASTA record to the given writer.
/// # Arguments
/// * `writer` - the destination
/// * `header` - the record header, without the leading '>'
/// * `consensus` - the consensus to write
/// # Errors
/// * on any I/O failure
pub fn write_consensus(writer: &mut impl Write, header: &str, consensus: &Consensus) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(writer, ">{header}")?;
    writer.write_all(consensus.sequence())?;
    writeln!(writer)?;
    Ok(())
}

/// Appends one consensus FASTA record to a file, creating it if necessary.
/// # Arguments
/// * `path` - the output file
/// * `header` - the record header, without the leading '>'
/// * `consensus` - the consensus to write
/// # Errors
/// * on any I/O failure
pub fn append_consensus(path: &Path, header: &str, consensus: &Consensus) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let mut writer = BufWriter::new(file);
    write_consensus(&mut writer, header, consensus)?;
    writer.flush()?;
    debug!("Consensus sequence exported to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use crate::consensus::ColumnConsensus;
    use crate::consensus_config::ConsensusConfigBuilder;

    /// Creates a scratch file path that will not collide across parallel tests.
    fn scratch_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("column_con_{}_{}", std::process::id(), label))
    }

    #[test]
    fn test_load_alignment() {
        let path = scratch_path("load.fa");
        // wrapped lines and lowercase must both be handled
        std::fs::write(&path, ">seq1 sample\nACGT\nACGT\n>seq2\nacgt\nacga\n").unwrap();

        let alignment = load_alignment(&path).unwrap();
        assert_eq!(alignment.sequence_count(), 2);
        assert_eq!(alignment.width(), 8);
        assert_eq!(alignment.names(), &["seq1 sample".to_string(), "seq2".to_string()]);
        assert_eq!(alignment.sequences()[1], b"ACGTACGA");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_unaligned() {
        let path = scratch_path("unaligned.fa");
        std::fs::write(&path, ">seq1\nACGT\n>seq2\nAC\n").unwrap();

        let error = load_alignment(&path).err().unwrap();
        assert_eq!(error.to_string(), "Input is not aligned: record \"seq2\" has length 2, expected 4");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_consensus_header() {
        let config = ConsensusConfigBuilder::default()
            .call_threshold(0.75)
            .build().unwrap();
        assert_eq!(consensus_header("my_aln", &config), "my_aln_consensus_t75_b30_g80");

        let config = ConsensusConfigBuilder::default()
            .use_most_abundant(true)
            .build().unwrap();
        assert_eq!(consensus_header("my_aln", &config), "my_aln_consensus_t70_b30_g80_mostAbundant");
    }

    #[test]
    fn test_input_stem() {
        assert_eq!(input_stem(&PathBuf::from("/data/my_aln.fasta")), "my_aln");
        assert_eq!(input_stem(&PathBuf::from("my_aln.v2.fa")), "my_aln.v2");
        assert_eq!(input_stem(&PathBuf::from("no_extension")), "no_extension");
    }

    #[test]
    fn test_append_round_trip() {
        let in_path = scratch_path("roundtrip.fa");
        let out_path = scratch_path("roundtrip_out.fa");
        let _ = std::fs::remove_file(&out_path);
        // column 1 is A,A,C,A: 3/4 = 0.75 clears the 0.7 call threshold
        std::fs::write(&in_path, ">s1\nAAGT\n>s2\nAAGT\n>s3\nACGT\n>s4\nAAGT\n").unwrap();

        let config = ConsensusConfigBuilder::default().build().unwrap();
        let alignment = load_alignment(&in_path).unwrap();
        let caller = ColumnConsensus::from_alignment(&alignment, config.clone()).unwrap();
        let consensus = caller.consensus().unwrap();
        assert_eq!(consensus.sequence(), b"AAGT");

        // append twice, the second record must not clobber the first
        let header = consensus_header(&input_stem(&in_path), &config);
        append_consensus(&out_path, &header, &consensus).unwrap();
        append_consensus(&out_path, &header, &consensus).unwrap();

        let reloaded = load_alignment(&out_path).unwrap();
        assert_eq!(reloaded.sequence_count(), 2);
        assert_eq!(reloaded.sequences()[0], b"AAGT");
        assert!(reloaded.names()[0].ends_with("_consensus_t70_b30_g80"));

        std::fs::remove_file(&in_path).unwrap();
        std::fs::remove_file(&out_path).unwrap();
    }
}
