// crates/calibcorr-core/src/table/lookup.rs

use std::path::Path;

use tracing::{debug, warn};

use crate::detid::codec::normalize_traced;
use crate::error::Result;
use crate::table::loader::CorrectionTable;

/// Factor returned when no correction applies.
pub const DEFAULT_FACTOR: f32 = 1.0;

/// Run-dependent channel correction lookup.
///
/// Built once from a table file and read-only afterwards, so a shared
/// reference can serve lookups from several threads.
#[derive(Clone, Debug)]
pub struct CalibCorr {
    table: CorrectionTable,
    debug: bool,
}

impl CalibCorr {
    /// Load `path`. A file that cannot be read is logged and leaves the table
    /// empty, so every lookup returns [`DEFAULT_FACTOR`].
    pub fn new<P: AsRef<Path>>(path: P, debug: bool) -> Self {
        let path = path.as_ref();
        match Self::try_load(path, debug) {
            Ok(c) => c,
            Err(e) => {
                warn!("Cannot open file {}: {}", path.display(), e);
                Self::from_table(CorrectionTable::empty(), debug)
            }
        }
    }

    /// Like [`CalibCorr::new`] but reports a file that cannot be read.
    pub fn try_load<P: AsRef<Path>>(path: P, debug: bool) -> Result<Self> {
        let table = CorrectionTable::open(path, debug)?;
        Ok(Self::from_table(table, debug))
    }

    pub fn from_table(table: CorrectionTable, debug: bool) -> Self {
        Self { table, debug }
    }

    pub fn table(&self) -> &CorrectionTable {
        &self.table
    }

    /// Correction factor for channel `id` (legacy or canonical) in `run`.
    ///
    /// Returns [`DEFAULT_FACTOR`] when `run` precedes every period or the
    /// channel has no entry in the selected period.
    pub fn get_corr(&self, run: i32, id: u32) -> f32 {
        let period = self.table.select_period(run);
        if self.debug {
            match period {
                Some(p) => debug!("Run {} Period {}", run, p),
                None => debug!("Run {} Period none", run),
            }
        }

        let (key, coord) = normalize_traced(id, self.debug);
        let factor = period
            .and_then(|p| self.table.factor(p, key))
            .unwrap_or(DEFAULT_FACTOR);

        if self.debug {
            debug!("ID {:x} ({})  Factor {}", id, coord, factor);
        }
        factor
    }
}
