use crate::error::{CalibError, Result};

/// Run boundaries must be strictly increasing for period selection to be
/// meaningful. The loader never re-sorts them.
pub fn validate_boundaries(runs: &[i32]) -> Result<()> {
    for (i, w) in runs.windows(2).enumerate() {
        if w[1] <= w[0] {
            return Err(CalibError::Validation(format!(
                "run boundaries not ascending: [{}]={} then [{}]={}",
                i,
                w[0],
                i + 1,
                w[1]
            )));
        }
    }
    Ok(())
}
