
/*!
Static IUPAC ambiguity-code lookup.
The lookup is keyed by the *set* of bases, not their order: the input is sorted into
canonical order internally, so every permutation of the same bases maps to the same code.

# Example usage
```rust
use column_con::iupac::ambiguity_code;

assert_eq!(ambiguity_code(b"AC"), Some(b'M'));
assert_eq!(ambiguity_code(b"CA"), Some(b'M'));
assert_eq!(ambiguity_code(b"ACGT"), Some(b'N'));
assert_eq!(ambiguity_code(b"AX"), None);
```
*/

/// Returns the single-letter IUPAC code for a set of unambiguous bases, in any order.
/// Single bases map to themselves; unknown symbols or sets yield None.
/// # Arguments
/// * `bases` - the distinct bases observed at one column, in any order
pub fn ambiguity_code(bases: &[u8]) -> Option<u8> {
    let mut key = bases.to_vec();
    key.sort_unstable();
    let code = match key.as_slice() {
        b"A" => b'A',
        b"C" => b'C',
        b"G" => b'G',
        b"T" => b'T',
        b"AG" => b'R',
        b"CT" => b'Y',
        b"CG" => b'S',
        b"AT" => b'W',
        b"GT" => b'K',
        b"AC" => b'M',
        b"CGT" => b'B',
        b"AGT" => b'D',
        b"ACT" => b'H',
        b"ACG" => b'V',
        b"ACGT" => b'N',
        _ => return None
    };
    Some(code)
}

/// Returns true for the four unambiguous DNA bases.
pub fn is_unambiguous(symbol: u8) -> bool {
    matches!(symbol, b'A' | b'C' | b'G' | b'T')
}
