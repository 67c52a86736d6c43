// crates/calibcorr-cli/src/cmd/inspect.rs

use clap::Args;
use calibcorr_core::validate::validate_boundaries;
use calibcorr_core::{CorrectionTable, MAX_PERIODS};

use crate::io::table_file;

#[derive(Args)]
pub struct InspectArgs {
    /// Correction table path
    #[arg(long)]
    pub table: String,
}

pub fn run(args: InspectArgs, debug: bool) -> anyhow::Result<()> {
    let corr = table_file::load_table(&args.table, debug)?;
    let t = corr.table();

    println!("table_path = {}", args.table);
    println!(
        "source_id  = {}",
        t.source_id_hex().unwrap_or_else(|| "-".into())
    );

    let s = t.stats();
    println!("lines      = {}", s.lines);
    println!("good       = {}", s.good);
    println!("ignored    = {}", s.ignored);
    println!("comments   = {}", s.comments);
    println!("headers    = {}", s.headers);

    println!("periods    = {}", t.run_boundaries().len());
    for (n, run) in t.run_boundaries().iter().enumerate() {
        match t.period(n) {
            Some(m) => println!("period[{}] start={} entries={}", n, run, m.len()),
            None => println!("period[{}] start={} entries=- (past cap)", n, run),
        }
    }

    println!();
    println!("--- diagnostics ---");
    diagnostics(t);

    Ok(())
}

fn diagnostics(t: &CorrectionTable) {
    if t.run_boundaries().is_empty() {
        println!("WARN: no #IOVs header; every lookup returns the identity factor.");
    }
    if let Err(e) = validate_boundaries(t.run_boundaries()) {
        println!("WARN: {}. Period selection picks the last start <= run.", e);
    }
    if t.stats().truncated_columns > 0 {
        println!(
            "WARN: {} correction column(s) past the {}-period cap were dropped.",
            t.stats().truncated_columns,
            MAX_PERIODS
        );
    }
    if t.stats().ignored > 0 {
        println!("WARN: {} line(s) ignored; see the warnings above.", t.stats().ignored);
    }
}
