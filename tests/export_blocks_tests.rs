mod common;
use common::{d, temp_out};
use hourblocks::core::MemoryStore;
use hourblocks::export::{ExportFormat, ExportKind, ExportLogic};
use hourblocks::models::{HourRow, Mode};
use std::fs;
use std::time::{Duration, Instant};

/// 20 projects with hours on every day of 2025-03-01 .. 2025-03-28.
fn busy_march() -> MemoryStore {
    let mut rows = Vec::new();
    for p in 0..20 {
        for day in d("2025-03-01").iter_days().take(28) {
            rows.push(HourRow::new(&format!("project{p:02}"), &day.to_string(), 2.0, None));
        }
    }
    MemoryStore::with_rows("tester", &rows)
}

#[test]
fn test_block_export_without_range_only_walks_weeks_with_data() {
    let store = busy_march();
    let out = temp_out("block_export_no_range", "json");

    let started = Instant::now();
    let n = ExportLogic::export(
        &store,
        "tester",
        ExportFormat::Json,
        ExportKind::Blocks(Mode::Plan),
        &out,
        &None,
        true,
    )
    .expect("export");
    let elapsed = started.elapsed();

    // per project: W09 (Sat 1 - Sun 2), W10, W11, W12, W13 (Mon 24 - Fri 28)
    assert_eq!(n, 100);
    assert!(elapsed < Duration::from_secs(5), "export took {elapsed:?}");

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 100);
    assert!(rows.iter().any(|r| r["week"] == "2025-W09" && r["days"] == 2));
    assert!(rows.iter().any(|r| r["week"] == "2025-W13" && r["days"] == 5));
}

#[test]
fn test_block_export_all_matches_no_range() {
    let store = busy_march();
    let out = temp_out("block_export_all", "csv");

    let n = ExportLogic::export(
        &store,
        "tester",
        ExportFormat::Csv,
        ExportKind::Blocks(Mode::Plan),
        &out,
        &Some("all".to_string()),
        true,
    )
    .expect("export");
    assert_eq!(n, 100);
}

#[test]
fn test_block_export_of_empty_store_writes_nothing() {
    let store = MemoryStore::new();
    let out = temp_out("block_export_empty", "csv");

    let n = ExportLogic::export(
        &store,
        "tester",
        ExportFormat::Csv,
        ExportKind::Blocks(Mode::Plan),
        &out,
        &None,
        true,
    )
    .expect("export");
    assert_eq!(n, 0);
    assert!(!std::path::Path::new(&out).exists());
}
