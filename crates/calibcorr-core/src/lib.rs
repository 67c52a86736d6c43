pub mod error;
pub mod validate;

pub mod detid;
pub mod table;

pub use crate::detid::coord::HcalCoord;
pub use crate::error::{CalibError, Result};
pub use crate::table::lookup::{CalibCorr, DEFAULT_FACTOR};
pub use crate::table::loader::{CorrectionTable, LoadStats, MAX_PERIODS};
