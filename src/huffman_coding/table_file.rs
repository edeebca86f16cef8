//! Line-oriented persistence for the code table.
//!
//! One `character:code` line per symbol, in table insertion order. The space
//! character is written as an empty field (a parsed line is trimmed, so a
//! literal leading space could not survive anyway), and the end-of-stream
//! sentinel is written with the literal `__EOF__` field. Nothing but the
//! field content distinguishes the sentinel row from real rows. Codes never
//! contain a colon, so a line splits safely on its first colon.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use log::{debug, warn};

use super::code_table::{CodeTable, Symbol, EOF_CODE, EOF_TOKEN};

/// Render the table in its file format, one line per entry in table order.
pub fn serialize(table: &CodeTable) -> String {
    let mut out = String::new();
    for (symbol, code) in table.iter() {
        match symbol {
            Symbol::Eof => out.push_str(&format!("{}:{}\n", EOF_TOKEN, code)),
            Symbol::Char(' ') => out.push_str(&format!(":{}\n", code)),
            Symbol::Char(ch) => out.push_str(&format!("{}:{}\n", ch, code)),
        }
    }
    out
}

/// Parse a table file back into a CodeTable. Each line splits on its first
/// colon; an empty character field is the space character, and the literal
/// `__EOF__` field is the sentinel. Malformed lines are skipped, not fatal.
/// The sentinel entry is guaranteed present after loading whether or not the
/// file carried its row.
pub fn deserialize(text: &str) -> CodeTable {
    let mut table = CodeTable::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.split_once(':') {
            Some((field, code)) if field == EOF_TOKEN => {
                table.insert(Symbol::Eof, code.to_string());
            }
            Some(("", code)) => {
                table.insert(Symbol::Char(' '), code.to_string());
            }
            Some((field, code)) => {
                let mut chars = field.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => table.insert(Symbol::Char(ch), code.to_string()),
                    _ => warn!("Skipping table line with a multi-character field: {}", line),
                }
            }
            None => warn!("Skipping malformed table line: {}", line),
        }
    }
    table.insert(Symbol::Eof, EOF_CODE.to_string());
    table
}

/// Write the table file, creating parent directories as needed.
pub fn write_table_file(path: &Path, table: &CodeTable) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut f_out = File::create(path)?;
    f_out.write_all(serialize(table).as_bytes())?;
    debug!("Wrote {} table entries to {}", table.len(), path.display());
    Ok(())
}

/// Load a code table from disk. This is the decode side's only source of
/// code information; it is reloaded fresh on every call.
pub fn read_table_file(path: &Path) -> io::Result<CodeTable> {
    let mut text = String::new();
    File::open(path)?.read_to_string(&mut text)?;
    let table = deserialize(&text);
    debug!("Loaded {} table entries from {}", table.len(), path.display());
    Ok(table)
}
