//! Facade tests: status mapping, recording rules, stats, purge.

use std::sync::Arc;
use std::thread;

use mutant_core::config::MutantConfig;
use mutant_core::errors::StorageError;
use mutant_core::{ClassifierSettings, DirectionSet};
use mutant_service::{CheckOutcome, MutantService};
use mutant_storage::queries::samples;
use mutant_storage::SampleKind;
use tempfile::TempDir;

const MUTANT: &str = r#"{"dna":["ATGCGA","CAGTGC","TTATGT","AGAAGG","CCCCTA","TCACTG"]}"#;
const HUMAN: &str = r#"{"dna":["ATGCGA","CAGTGC","TTATTT","AGACGG","GCGTCA","TCACTG"]}"#;
const NOT_SQUARE: &str = r#"{"dna":["ATGC","CAGT","TTAT","AGAA","CCCC"]}"#;

fn service() -> MutantService {
    MutantService::in_memory(ClassifierSettings::default()).unwrap()
}

#[test]
fn mutant_is_200_and_recorded() {
    let svc = service();
    let outcome = svc.check(MUTANT);
    assert_eq!(outcome, CheckOutcome::Mutant);
    assert_eq!(outcome.status_code(), 200);

    let stats = svc.stats().unwrap();
    assert_eq!(stats.count_mutant_dna, 1);
    assert_eq!(stats.count_human_dna, 0);
    assert_eq!(stats.mutants_ratio, 1.0);
}

#[test]
fn human_is_403_and_recorded() {
    let svc = service();
    let outcome = svc.check(HUMAN);
    assert_eq!(outcome, CheckOutcome::Human);
    assert_eq!(outcome.status_code(), 403);
    assert_eq!(svc.stats().unwrap().count_human_dna, 1);
}

#[test]
fn bad_shape_is_422_and_not_recorded() {
    let svc = service();
    let outcome = svc.check(NOT_SQUARE);
    assert_eq!(outcome.status_code(), 422);
    assert!(matches!(outcome, CheckOutcome::Unprocessable { .. }));

    let empty = svc.check(r#"{"dna":[]}"#);
    assert_eq!(empty.status_code(), 422);
    assert_eq!(svc.stats().unwrap().total(), 0);
}

#[test]
fn malformed_body_is_412_and_not_recorded() {
    let svc = service();
    for body in ["", "{", r#"{"rows":["A"]}"#, r#"{"dna":"ATGC"}"#] {
        let outcome = svc.check(body);
        assert_eq!(outcome.status_code(), 412, "body {body:?}");
        match outcome {
            CheckOutcome::Rejected { code, .. } => assert_eq!(code, "INVALID_REQUEST"),
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(svc.stats().unwrap().total(), 0);
}

#[test]
fn stored_sample_is_the_joined_grid() {
    let svc = service();
    svc.check(HUMAN);
    let recent = svc.recent(10).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].dna, "ATGCGA;CAGTGC;TTATTT;AGACGG;GCGTCA;TCACTG");
    assert_eq!(recent[0].kind, SampleKind::Human);
}

#[test]
fn duplicates_are_counted_each_time() {
    let svc = service();
    svc.check(MUTANT);
    svc.check(MUTANT);
    svc.check(HUMAN);
    let stats = svc.stats().unwrap();
    assert_eq!(stats.count_mutant_dna, 2);
    assert_eq!(stats.count_human_dna, 1);
    assert_eq!(stats.mutants_ratio, 0.67);
    assert_eq!(stats.humans_ratio, 0.33);
}

#[test]
fn stats_json_keys() {
    let svc = service();
    svc.check(MUTANT);
    let json = serde_json::to_value(svc.stats().unwrap()).unwrap();
    let obj = json.as_object().unwrap();
    for key in ["count_mutant_dna", "count_human_dna", "mutants_ratio", "humans_ratio"] {
        assert!(obj.contains_key(key), "missing {key}");
    }
}

#[test]
fn check_rows_skips_json() {
    let svc = service();
    assert_eq!(svc.check_rows(&["AAAA", "AAAA", "AAAA", "AAAA"]), CheckOutcome::Mutant);
    assert_eq!(svc.check_rows(&["A"]), CheckOutcome::Human);
}

#[test]
fn purge_empties_and_is_idempotent() {
    let svc = service();
    svc.check(MUTANT);
    svc.check(HUMAN);

    let report = svc.purge().unwrap();
    assert_eq!(report.total_deleted, 4);
    assert_eq!(svc.stats().unwrap().total(), 0);
    assert_eq!(svc.recent(10).unwrap().len(), 0);

    let again = svc.purge().unwrap();
    assert_eq!(again.total_deleted, 0);
}

#[test]
fn storage_failure_keeps_the_verdict() {
    let svc = service();
    svc.database()
        .with_writer(|conn| {
            conn.execute_batch("DROP TABLE samples")
                .map_err(|e| StorageError::SqliteError { message: e.to_string() })
        })
        .unwrap();

    assert_eq!(svc.check(MUTANT), CheckOutcome::Mutant);
    // The failed transaction left the counters untouched.
    assert_eq!(svc.stats().unwrap().count_mutant_dna, 0);
}

#[test]
fn legacy_settings_change_the_verdict() {
    // One down-right diagonal of C's: counted twice by the legacy vectors.
    let body = r#"{"dna":["ATGCGA","CCGTGC","TTCTTT","AGACGG","GCGTCA","TCACTG"]}"#;
    let full = service();
    let legacy = MutantService::in_memory(ClassifierSettings {
        directions: DirectionSet::Legacy,
        ..ClassifierSettings::default()
    })
    .unwrap();
    assert_eq!(full.check(body), CheckOutcome::Human);
    assert_eq!(legacy.check(body), CheckOutcome::Mutant);
}

#[test]
fn from_config_uses_project_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("mutant.toml"),
        "[classifier]\nquota = 1\n\n[storage]\ndb_path = \"data/test.db\"\npurge_batch_size = 1\n",
    )
    .unwrap();
    let config = MutantConfig::load(dir.path(), None).unwrap();
    let svc = MutantService::from_config(&config, dir.path()).unwrap();

    assert_eq!(svc.classifier().settings().quota, 1);
    assert!(dir.path().join("data").join("test.db").exists());

    // A single run is enough with quota 1.
    let single = r#"{"dna":["ATGCGA","CCGTGC","TTCTTT","AGACGG","GCGTCA","TCACTG"]}"#;
    assert_eq!(svc.check(single), CheckOutcome::Mutant);
    svc.check(HUMAN);
    let report = svc.purge().unwrap();
    // 2 counters + 2 samples, one row per batch.
    assert_eq!(report.batches, 4);
}

#[test]
fn shared_service_across_threads() {
    let dir = TempDir::new().unwrap();
    let mut config = MutantConfig::default();
    config.storage.db_path = Some("mutant.db".to_string());
    let svc = Arc::new(MutantService::from_config(&config, dir.path()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || {
                for _ in 0..10 {
                    let body = if i % 2 == 0 { MUTANT } else { HUMAN };
                    assert!(svc.check(body).is_verdict());
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let stats = svc.stats().unwrap();
    assert_eq!(stats.count_mutant_dna, 20);
    assert_eq!(stats.count_human_dna, 20);
    assert_eq!(stats.mutants_ratio, 0.5);
    let stored = svc.database().with_reader(samples::count).unwrap();
    assert_eq!(stored, 40);
}
