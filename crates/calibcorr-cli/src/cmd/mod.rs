// crates/calibcorr-cli/src/cmd/mod.rs

pub mod detid;
pub mod inspect;
pub mod lookup;
