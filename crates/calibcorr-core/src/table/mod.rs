// crates/calibcorr-core/src/table/mod.rs

pub mod checksum;
pub mod format;
pub mod loader;
pub mod lookup;
