// crates/calibcorr-core/src/table/loader.rs

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::detid::codec::encode_he;
use crate::error::Result;
use crate::table::checksum::{blake3_16, hex16};
use crate::table::format::{self, LineKind};
use crate::validate::validate_boundaries;

/// Most periods that carry correction factors. Columns past this index are
/// parsed and discarded.
pub const MAX_PERIODS: usize = 10;

/// Line counters collected while loading.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Every line read, blank ones included.
    pub lines: usize,
    /// Data rows stored.
    pub good: usize,
    /// Data rows or headers that failed to parse.
    pub ignored: usize,
    pub comments: usize,
    pub headers: usize,
    /// Largest number of correction columns dropped by the period cap.
    pub truncated_columns: usize,
}

/// Per-period channel correction factors plus the period start runs.
#[derive(Clone, Debug, Default)]
pub struct CorrectionTable {
    runs: Vec<i32>,
    periods: Vec<HashMap<u32, f32>>,
    stats: LoadStats,
    source_id: Option<[u8; 16]>,
}

impl CorrectionTable {
    /// Table with no periods: every lookup falls back to the identity factor.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read and parse a table file. Only the open/read can fail; bad lines are
    /// logged and skipped.
    pub fn open<P: AsRef<Path>>(path: P, debug: bool) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let text = String::from_utf8_lossy(&bytes);
        let mut table = Self::parse(&text, debug);
        table.source_id = Some(blake3_16(&bytes));
        Ok(table)
    }

    /// Parse table text that is already in memory.
    pub fn parse(text: &str, debug: bool) -> Self {
        let mut table = Self::empty();
        let mut ncorr = 0usize;

        for line in text.lines() {
            table.stats.lines += 1;
            match format::classify(line) {
                LineKind::Blank => {}
                LineKind::Comment => table.stats.comments += 1,
                LineKind::Header(rest) => match format::parse_header(rest) {
                    Ok(header) => {
                        table.stats.headers += 1;
                        ncorr = header.columns();
                        table.add_header(header.runs);
                    }
                    Err(e) => {
                        table.stats.ignored += 1;
                        warn!("Ignore header: {} ({})", line, e);
                    }
                },
                LineKind::Data(tokens) => match format::parse_row(&tokens, ncorr) {
                    Ok(row) => {
                        table.stats.good += 1;
                        let id = encode_he(row.ieta, row.iphi, row.depth);
                        for (n, &f) in row.factors.iter().take(MAX_PERIODS).enumerate() {
                            table.periods[n].insert(id, f);
                        }
                        if debug {
                            debug!(
                                "ID {:x}:{} (eta {} phi {} depth {}) {:?}",
                                id, id, row.ieta, row.iphi, row.depth, row.factors
                            );
                        }
                    }
                    Err(e) => {
                        table.stats.ignored += 1;
                        warn!("Ignore line: {} ({})", line, e);
                    }
                },
            }
        }

        if let Err(e) = validate_boundaries(&table.runs) {
            warn!("{}; period selection assumes ascending runs", e);
        }
        info!(
            "Reads total of {} and {} good records",
            table.stats.lines, table.stats.good
        );
        table
    }

    fn add_header(&mut self, runs: Vec<i32>) {
        let columns = runs.len();
        if columns > MAX_PERIODS {
            let dropped = columns - MAX_PERIODS;
            self.stats.truncated_columns = self.stats.truncated_columns.max(dropped);
            warn!(
                "#IOVs declares {} periods; only the first {} carry factors",
                columns, MAX_PERIODS
            );
        }
        let stored = columns.min(MAX_PERIODS);
        if self.periods.len() < stored {
            self.periods.resize_with(stored, HashMap::new);
        }

        self.runs.extend(runs);
        let listed: Vec<String> = self
            .runs
            .iter()
            .enumerate()
            .map(|(n, r)| format!("[{}] {}", n, r))
            .collect();
        info!("{}:{} Run ranges {}", columns, self.runs.len(), listed.join(" "));
    }

    /// Period start runs in file order.
    pub fn run_boundaries(&self) -> &[i32] {
        &self.runs
    }

    /// Number of periods that hold factors (at most [`MAX_PERIODS`]).
    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    pub fn period(&self, n: usize) -> Option<&HashMap<u32, f32>> {
        self.periods.get(n)
    }

    /// Index of the last boundary that is `<= run`, if any.
    pub fn select_period(&self, run: i32) -> Option<usize> {
        self.runs.iter().rposition(|&start| start <= run)
    }

    /// Stored factor for a canonical id in one period.
    pub fn factor(&self, period: usize, id: u32) -> Option<f32> {
        self.periods.get(period)?.get(&id).copied()
    }

    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Stable identifier of the file contents this table was read from.
    pub fn source_id_hex(&self) -> Option<String> {
        self.source_id.as_ref().map(hex16)
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() && self.periods.iter().all(HashMap::is_empty)
    }
}
