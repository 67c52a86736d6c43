// crates/calibcorr-core/src/detid/mod.rs

pub mod codec;
pub mod coord;
pub mod layout;

pub use codec::{decode, encode, encode_he, normalize};
