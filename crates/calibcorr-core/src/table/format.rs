// crates/calibcorr-core/src/table/format.rs

//! Line grammar of the correction table text file.
//!
//! ```text
//! #IOVs <run_0> <run_1> ... <run_k-1> <sentinel>
//! # free comment
//! <ieta> <iphi> <depth> <corr_0> ... <corr_k-1>
//! ```
//!
//! Tokens are separated by runs of whitespace.

use crate::error::{CalibError, Result};

pub const IOV_MARKER: &str = "#IOVs";
pub const COMMENT_MARKER: char = '#';

/// Number of leading channel columns (ieta, iphi, depth) in a data row.
pub const CHANNEL_COLUMNS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    /// Remainder of an `#IOVs` line after the marker.
    Header(&'a str),
    Data(Vec<&'a str>),
}

pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix(IOV_MARKER) {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return LineKind::Header(rest);
        }
    }
    if line.starts_with(COMMENT_MARKER) {
        return LineKind::Comment;
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Data(tokens)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IovHeader {
    /// Period start runs in file order.
    pub runs: Vec<i32>,
}

impl IovHeader {
    /// Correction columns every following data row must carry.
    #[inline]
    pub fn columns(&self) -> usize {
        self.runs.len()
    }
}

/// Parse the text after `#IOVs`. The final token is a sentinel column and is
/// dropped.
pub fn parse_header(rest: &str) -> Result<IovHeader> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let Some((_sentinel, run_tokens)) = tokens.split_last() else {
        return Err(CalibError::TableFormat(
            "#IOVs header has no columns".into(),
        ));
    };

    let mut runs = Vec::with_capacity(run_tokens.len());
    for (i, tok) in run_tokens.iter().enumerate() {
        let run = tok.parse::<i32>().map_err(|_| {
            CalibError::TableFormat(format!("#IOVs run[{}] is not an integer: {:?}", i, tok))
        })?;
        runs.push(run);
    }
    Ok(IovHeader { runs })
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataRow {
    pub ieta: i32,
    pub iphi: i32,
    pub depth: i32,
    pub factors: Vec<f32>,
}

/// Parse a tokenized data row that must carry exactly `ncorr` factors.
pub fn parse_row(tokens: &[&str], ncorr: usize) -> Result<DataRow> {
    let expected = ncorr + CHANNEL_COLUMNS;
    if tokens.len() != expected {
        return Err(CalibError::TableFormat(format!(
            "expected {} tokens, got {}",
            expected,
            tokens.len()
        )));
    }

    let ieta = parse_int(tokens[0], "ieta")?;
    let iphi = parse_int(tokens[1], "iphi")?;
    let depth = parse_int(tokens[2], "depth")?;

    let mut factors = Vec::with_capacity(ncorr);
    for (n, tok) in tokens[CHANNEL_COLUMNS..].iter().enumerate() {
        let f = tok.parse::<f32>().map_err(|_| {
            CalibError::TableFormat(format!("corr[{}] is not a number: {:?}", n, tok))
        })?;
        factors.push(f);
    }

    Ok(DataRow { ieta, iphi, depth, factors })
}

fn parse_int(tok: &str, what: &str) -> Result<i32> {
    tok.parse::<i32>()
        .map_err(|_| CalibError::TableFormat(format!("{} is not an integer: {:?}", what, tok)))
}
