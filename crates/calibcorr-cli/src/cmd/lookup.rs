// crates/calibcorr-cli/src/cmd/lookup.rs

use clap::Args;
use calibcorr_core::detid::normalize;

use crate::io::table_file;

#[derive(Args)]
pub struct LookupArgs {
    /// Correction table path
    #[arg(long)]
    pub table: String,

    /// Run number
    #[arg(long, allow_hyphen_values = true)]
    pub run: i32,

    /// Channel id, decimal or 0x-hex (legacy or canonical encoding)
    #[arg(long, value_parser = table_file::parse_id)]
    pub id: u32,
}

pub fn run(args: LookupArgs, debug: bool) -> anyhow::Result<()> {
    let corr = table_file::load_table(&args.table, debug)?;
    let period = corr.table().select_period(args.run);
    let factor = corr.get_corr(args.run, args.id);

    println!("run     = {}", args.run);
    println!("id      = {:#010x}", args.id);
    println!("key     = {:#010x}", normalize(args.id));
    match period {
        Some(p) => println!("period  = {}", p),
        None => println!("period  = none"),
    }
    println!("factor  = {}", factor);
    Ok(())
}
