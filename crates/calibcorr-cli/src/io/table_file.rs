// crates/calibcorr-cli/src/io/table_file.rs

use anyhow::{Context, Result};
use calibcorr_core::CalibCorr;

/// Load a correction table, failing when the file cannot be read.
///
/// The library constructor degrades a missing file to an empty table; the CLI
/// would rather say so.
pub fn load_table(path: &str, debug: bool) -> Result<CalibCorr> {
    CalibCorr::try_load(path, debug).with_context(|| format!("read correction table {path}"))
}

/// Parse a channel id given as decimal or `0x`-prefixed hex.
pub fn parse_id(s: &str) -> Result<u32, String> {
    let t = s.trim();
    let parsed = match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => t.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid channel id {s:?}: {e}"))
}
