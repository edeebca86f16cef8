//! Code assignment for the huffzip compressor.
//!
//! Walks the Huffman tree depth-first to hand every leaf character its
//! bit-string code, then appends the reserved end-of-stream sentinel. The
//! resulting table is the only artifact that outlives a compression call:
//! it is persisted beside the payload and reloaded fresh for decoding.

use rustc_hash::FxHashMap;

use super::tree::{Node, NodeData};

/// Token used in the table file to mark the end-of-stream sentinel row.
pub const EOF_TOKEN: &str = "__EOF__";

/// Fixed code reserved for the end-of-stream sentinel.
///
/// The sentinel is appended after the real codes are generated, so it is not
/// guaranteed distinct from a real leaf's code. The encoder never emits it;
/// the decoder's sentinel check only fires on a coincidental collision, in
/// which case decoding truncates early. Known limitation, kept for format
/// compatibility.
pub const EOF_CODE: &str = "11111111";

/// A unit coded by the table: a character of the escaped alphabet, or the
/// reserved end-of-stream sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Char(char),
    Eof,
}

/// Character-to-code mapping with insertion-order iteration, so the
/// serialized table file is deterministic for a given generation run.
/// Lookups go through an FxHashMap index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeTable {
    entries: Vec<(Symbol, String)>,
    index: FxHashMap<Symbol, usize>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code for a symbol. A repeated symbol keeps its original
    /// position and gets the new code.
    pub fn insert(&mut self, symbol: Symbol, code: String) {
        match self.index.get(&symbol) {
            Some(&at) => self.entries[at].1 = code,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, code));
            }
        }
    }

    /// Code for a symbol, if present.
    pub fn code(&self, symbol: &Symbol) -> Option<&str> {
        self.index.get(symbol).map(|&at| self.entries[at].1.as_str())
    }

    /// Code for a plain character of the escaped text.
    pub fn char_code(&self, ch: char) -> Option<&str> {
        self.code(&Symbol::Char(ch))
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(Symbol, String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of real (non-sentinel) entries.
    pub fn real_symbols(&self) -> usize {
        self.entries
            .iter()
            .filter(|(symbol, _)| matches!(symbol, Symbol::Char(_)))
            .count()
    }

    /// Reverse mapping from code to symbol, used by the decoder's scan loop.
    pub fn reverse(&self) -> FxHashMap<&str, Symbol> {
        self.entries
            .iter()
            .map(|(symbol, code)| (code.as_str(), *symbol))
            .collect()
    }
}

/// Generate the code table from the tree root, consuming the tree: '0' on a
/// left descent, '1' on a right descent, a leaf's accumulated path is its
/// code. A single-leaf tree has no meaningful left/right, so its one code is
/// overwritten with "0" by convention. The sentinel row is appended last.
pub fn generate_codes(root: Node) -> CodeTable {
    let mut table = CodeTable::new();
    walk(&root, String::new(), &mut table);

    if table.len() == 1 {
        let only = table.entries[0].0;
        table.insert(only, "0".to_string());
    }
    table.insert(Symbol::Eof, EOF_CODE.to_string());
    table
}

fn walk(node: &Node, path: String, table: &mut CodeTable) {
    match &node.node_data {
        NodeData::Leaf(ch) => table.insert(Symbol::Char(*ch), path),
        NodeData::Kids(left, right) => {
            walk(left, format!("{}0", path), table);
            walk(right, format!("{}1", path), table);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::tree::build_tree;
    use crate::tools::freq_count::freqs;

    fn codes_for(text: &str) -> CodeTable {
        generate_codes(build_tree(&freqs(text)).unwrap())
    }

    #[test]
    fn single_symbol_code_is_zero() {
        let table = codes_for("aaaaaaaaaaaaaaaaaaaa");
        assert_eq!(table.real_symbols(), 1);
        assert_eq!(table.char_code('a'), Some("0"));
    }

    #[test]
    fn sentinel_always_present_with_fixed_code() {
        let table = codes_for("hello");
        assert_eq!(table.code(&Symbol::Eof), Some(EOF_CODE));
        // The sentinel sits after the real codes in the serialization order.
        assert_eq!(table.iter().last().unwrap().0, Symbol::Eof);
    }

    #[test]
    fn real_codes_are_prefix_free() {
        let table = codes_for("The quick brown fox jumps over the lazy dog.");
        let codes: Vec<&str> = table
            .iter()
            .filter(|(symbol, _)| matches!(symbol, Symbol::Char(_)))
            .map(|(_, code)| code.as_str())
            .collect();
        assert!(codes.len() > 2);
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn most_frequent_symbol_gets_a_shortest_code() {
        let table = codes_for("aaaaaaaabbbbcccdde");
        let a_len = table.char_code('a').unwrap().len();
        for (symbol, code) in table.iter() {
            if let Symbol::Char(_) = symbol {
                assert!(a_len <= code.len());
            }
        }
    }

    #[test]
    fn reinserting_a_symbol_keeps_its_slot() {
        let mut table = CodeTable::new();
        table.insert(Symbol::Char('x'), "10".to_string());
        table.insert(Symbol::Char('y'), "11".to_string());
        table.insert(Symbol::Char('x'), "0".to_string());
        assert_eq!(table.len(), 2);
        assert_eq!(table.iter().next().unwrap(), &(Symbol::Char('x'), "0".to_string()));
    }

    #[test]
    fn reverse_maps_code_to_symbol() {
        let table = codes_for("hello");
        let reverse = table.reverse();
        assert_eq!(reverse.len(), table.len());
        assert_eq!(reverse[EOF_CODE], Symbol::Eof);
        let l_code = table.char_code('l').unwrap();
        assert_eq!(reverse[l_code], Symbol::Char('l'));
    }
}
