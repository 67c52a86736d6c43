// crates/calibcorr-cli/src/cmd/detid.rs

use anyhow::Context;
use clap::Args;
use calibcorr_core::detid::{decode, layout, normalize};
use calibcorr_core::HcalCoord;

use crate::io::table_file;

#[derive(Args)]
pub struct EncodeArgs {
    /// Subdetector code (1 = HB, 2 = HE)
    #[arg(long, default_value_t = 2)]
    pub subdet: u8,

    #[arg(long, allow_hyphen_values = true)]
    pub ieta: i32,

    #[arg(long)]
    pub iphi: u16,

    #[arg(long)]
    pub depth: u8,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Channel id, decimal or 0x-hex
    #[arg(long, value_parser = table_file::parse_id)]
    pub id: u32,
}

pub fn run_encode(a: EncodeArgs) -> anyhow::Result<()> {
    let coord = HcalCoord::new(a.subdet, a.ieta, a.iphi, a.depth).context("encode channel")?;
    let id = coord.encode();
    println!("coord   = {}", coord);
    println!("id      = {:#010x}", id);
    println!("id_dec  = {}", id);
    Ok(())
}

pub fn run_decode(a: DecodeArgs) -> anyhow::Result<()> {
    let raw = decode(a.id);
    let canonical = normalize(a.id);

    println!("id        = {:#010x}", a.id);
    println!(
        "encoding  = {}",
        if layout::is_canonical(a.id) { "canonical" } else { "legacy" }
    );
    println!("raw       = {}", raw);
    println!("canonical = {:#010x}", canonical);
    println!("coord     = {}", decode(canonical));
    Ok(())
}
