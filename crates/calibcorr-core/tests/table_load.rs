// crates/calibcorr-core/tests/table_load.rs

use std::io::Write;

use calibcorr_core::detid::{encode, encode_he};
use calibcorr_core::{CalibCorr, CorrectionTable, DEFAULT_FACTOR, MAX_PERIODS};

fn write_table(text: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    f.write_all(text.as_bytes()).expect("write table");
    f.flush().expect("flush");
    f
}

const THREE_PERIODS: &str = "\
# HE response corrections
#IOVs 100 200 300 999999
17 3 1 0.5 0.6 0.7
-18 10 2 1.1 1.2 1.3

# trailing comment
";

#[test]
fn loads_boundaries_and_rows() {
    let f = write_table(THREE_PERIODS);
    let corr = CalibCorr::try_load(f.path(), false).expect("load");
    let table = corr.table();

    assert_eq!(table.run_boundaries(), &[100, 200, 300]);
    assert_eq!(table.period_count(), 3);
    assert_eq!(table.factor(0, encode_he(17, 3, 1)), Some(0.5));
    assert_eq!(table.factor(2, encode_he(-18, 10, 2)), Some(1.3));

    let stats = table.stats();
    assert_eq!(stats.lines, 6);
    assert_eq!(stats.good, 2);
    assert_eq!(stats.ignored, 0);
    assert_eq!(stats.comments, 2);
    assert_eq!(stats.headers, 1);
    assert!(table.source_id_hex().is_some_and(|h| h.len() == 32));
}

#[test]
fn period_selection_scans_from_the_end() {
    let table = CorrectionTable::parse(THREE_PERIODS, false);
    assert_eq!(table.select_period(150), Some(1));
    assert_eq!(table.select_period(50), None);
    assert_eq!(table.select_period(100), Some(0));
    assert_eq!(table.select_period(300), Some(2));
    assert_eq!(table.select_period(1000), Some(2));
}

#[test]
fn get_corr_uses_selected_period() {
    let corr = CalibCorr::from_table(CorrectionTable::parse(THREE_PERIODS, false), true);
    let id = encode_he(17, 3, 1);

    assert_eq!(corr.get_corr(150, id), 0.6);
    assert_eq!(corr.get_corr(50, id), DEFAULT_FACTOR);
    assert_eq!(corr.get_corr(300, id), 0.7);
    assert_eq!(corr.get_corr(1000, id), 0.7);
}

#[test]
fn absent_channel_gets_identity() {
    let corr = CalibCorr::from_table(CorrectionTable::parse(THREE_PERIODS, false), false);
    assert_eq!(corr.get_corr(250, encode_he(25, 40, 3)), 1.0);
}

#[test]
fn legacy_query_matches_he_row() {
    let corr = CalibCorr::from_table(CorrectionTable::parse(THREE_PERIODS, false), false);
    // legacy layout, subdet unset, +eta 17, phi 3, depth 1
    let legacy = (4u32 << 28) | (1 << 14) | 0x2000 | (17 << 7) | 3;
    assert_eq!(corr.get_corr(250, legacy), 0.6);
}

#[test]
fn barrel_rows_are_keyed_as_he() {
    let text = "#IOVs 1 0\n10 5 1 0.8\n";
    let corr = CalibCorr::from_table(CorrectionTable::parse(text, false), false);

    assert_eq!(corr.get_corr(5, encode_he(10, 5, 1)), 0.8);
    // the same channel queried as HB misses
    assert_eq!(corr.get_corr(5, encode(1, 10, 5, 1)), 1.0);
    let legacy = (4u32 << 28) | (1 << 14) | 0x2000 | (10 << 7) | 5;
    assert_eq!(corr.get_corr(5, legacy), 1.0);
}

#[test]
fn malformed_rows_are_skipped() {
    let text = "\
#IOVs 100 200 0
17 3 1 0.5
17 3 1 0.5 0.6 0.7
bad 3 1 0.5 0.6
18 4 1 0.9 0.95
";
    let table = CorrectionTable::parse(text, false);
    assert_eq!(table.stats().good, 1);
    assert_eq!(table.stats().ignored, 3);
    assert_eq!(table.factor(0, encode_he(17, 3, 1)), None);
    assert_eq!(table.factor(1, encode_he(18, 4, 1)), Some(0.95));
    assert_eq!(table.period(0).map(|m| m.len()), Some(1));
}

#[test]
fn whitespace_runs_collapse() {
    let text = "#IOVs   100\t 200   0  \n   17\t3  1   0.5\t\t0.6   \n";
    let table = CorrectionTable::parse(text, false);
    assert_eq!(table.run_boundaries(), &[100, 200]);
    assert_eq!(table.factor(1, encode_he(17, 3, 1)), Some(0.6));
}

#[test]
fn columns_past_the_cap_are_dropped() {
    let runs: Vec<String> = (1..=12).map(|i| (i * 100).to_string()).collect();
    let factors: Vec<String> = (1..=12).map(|i| format!("1.{:02}", i)).collect();
    let text = format!(
        "#IOVs {} end\n20 1 2 {}\n",
        runs.join(" "),
        factors.join(" ")
    );
    let corr = CalibCorr::from_table(CorrectionTable::parse(&text, false), false);
    let table = corr.table();
    let id = encode_he(20, 1, 2);

    assert_eq!(table.run_boundaries().len(), 12);
    assert_eq!(table.period_count(), MAX_PERIODS);
    assert_eq!(table.stats().good, 1);
    assert_eq!(table.stats().truncated_columns, 2);
    assert!(table.period(MAX_PERIODS).is_none());

    assert_eq!(corr.get_corr(1000, id), 1.10);
    // period 11 exists as a boundary but carries no factors
    assert_eq!(corr.get_corr(1200, id), 1.0);
}

#[test]
fn rows_before_any_header_need_three_tokens() {
    let table = CorrectionTable::parse("17 3 1\n17 3 1 0.5\n", false);
    assert_eq!(table.stats().good, 1);
    assert_eq!(table.stats().ignored, 1);
    assert_eq!(table.period_count(), 0);
}

#[test]
fn missing_file_degrades_to_identity() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no_such_table.txt");

    assert!(CalibCorr::try_load(&path, false).is_err());

    let corr = CalibCorr::new(&path, true);
    assert!(corr.table().is_empty());
    assert!(corr.table().source_id_hex().is_none());
    for run in [-1, 0, 1, 100_000] {
        assert_eq!(corr.get_corr(run, encode_he(17, 3, 1)), 1.0);
        assert_eq!(corr.get_corr(run, 0), 1.0);
    }
}

#[test]
fn source_id_follows_contents() {
    let a = write_table(THREE_PERIODS);
    let b = write_table(THREE_PERIODS);
    let c = write_table("#IOVs 1 0\n17 3 1 0.5\n");

    let id = |f: &tempfile::NamedTempFile| {
        CorrectionTable::open(f.path(), false)
            .expect("open")
            .source_id_hex()
            .expect("id")
    };
    assert_eq!(id(&a), id(&b));
    assert_ne!(id(&a), id(&c));
}

#[test]
fn shared_lookups_across_threads() {
    let corr = CalibCorr::from_table(CorrectionTable::parse(THREE_PERIODS, false), false);
    let id = encode_he(-18, 10, 2);

    std::thread::scope(|s| {
        for run in [150, 250, 350] {
            let corr = &corr;
            s.spawn(move || {
                let expected = match run {
                    150 => 1.2,
                    250 => 1.2,
                    _ => 1.3,
                };
                assert_eq!(corr.get_corr(run, id), expected);
            });
        }
    });
}
