
use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};

/// The unambiguous DNA alphabet used for generated data
const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Creates a test alignment we can verify is working.
/// Rows are the same length as the truth by construction (substitutions and gaps only).
/// # Arguments
/// * `seq_len` - the length of the alignment
/// * `num_samples` - the number of rows to generate from the truth sequence
/// * `substitution_rate` - per-base probability of replacing the truth base with another base
/// * `gap_rate` - per-base probability of replacing the truth base with a gap
pub fn generate_alignment(seq_len: usize, num_samples: usize, substitution_rate: f64, gap_rate: f64) -> (Vec<u8>, Vec<Vec<u8>>) {
    assert!((0.0..=1.0).contains(&substitution_rate));
    assert!((0.0..=1.0).contains(&gap_rate));
    assert!(substitution_rate + gap_rate <= 1.0);

    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let base_distribution = Uniform::new(0, BASES.len());
    let basem1_distribution = Uniform::new(1, BASES.len());
    let error_distribution = Uniform::new(0.0, 1.0);

    let truth: Vec<u8> = (0..seq_len)
        .map(|_i| BASES[rng.sample(base_distribution)])
        .collect();

    let rows: Vec<Vec<u8>> = (0..num_samples)
        .map(|_i| {
            truth.iter()
                .map(|&base| {
                    let roll = rng.sample(error_distribution);
                    if roll < gap_rate {
                        b'-'
                    } else if roll < gap_rate + substitution_rate {
                        // shift to one of the three other bases
                        let base_index = BASES.iter().position(|&b| b == base).unwrap();
                        let sub_offset = rng.sample(basem1_distribution);
                        BASES[(base_index + sub_offset) % BASES.len()]
                    } else {
                        base
                    }
                })
                .collect()
        })
        .collect();

    (truth, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    use itertools::Itertools;

    #[test]
    fn test_rows_stay_aligned() {
        let (truth, rows) = generate_alignment(500, 10, 0.05, 0.05);
        assert_eq!(truth.len(), 500);
        assert_eq!(rows.len(), 10);
        assert!(rows.iter().map(|r| r.len()).all_equal());
        assert_eq!(rows[0].len(), truth.len());
    }

    #[test]
    fn test_error_free_rows_match_truth() {
        let (truth, rows) = generate_alignment(100, 5, 0.0, 0.0);
        for row in rows.iter() {
            assert_eq!(row, &truth);
        }
    }
}
