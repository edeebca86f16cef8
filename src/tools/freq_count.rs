//! Character frequency count for the huffzip compressor.

use rustc_hash::FxHashMap;

/// Returns a frequency count of the characters in the escaped input text.
/// The characters inside placeholder tokens count individually; there is no
/// tokenization at this stage. Empty input yields an empty map.
pub fn freqs(text: &str) -> FxHashMap<char, u32> {
    let mut freqs = FxHashMap::default();
    text.chars().for_each(|ch| *freqs.entry(ch).or_insert(0) += 1);
    freqs
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn hello_counts() {
        let f = freqs("hello");
        assert_eq!(f.len(), 4);
        assert_eq!(f[&'h'], 1);
        assert_eq!(f[&'e'], 1);
        assert_eq!(f[&'l'], 2);
        assert_eq!(f[&'o'], 1);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(freqs("").is_empty());
    }

    #[test]
    fn token_characters_count_individually() {
        let f = freqs("__NEWLINE__");
        assert_eq!(f[&'_'], 4);
        assert_eq!(f[&'N'], 2);
        assert_eq!(f[&'E'], 2);
    }
}
