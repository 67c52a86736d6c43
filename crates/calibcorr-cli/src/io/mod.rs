// crates/calibcorr-cli/src/io/mod.rs

pub mod table_file;
