use mutant_storage::migrations::run_migrations;
use mutant_storage::purge::purge_all;
use mutant_storage::queries::{counters, samples};
use mutant_storage::stats::load_stats;
use mutant_storage::SampleKind;
use proptest::prelude::*;
use rusqlite::Connection;

fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    conn
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn counters_match_recorded_verdicts(verdicts in prop::collection::vec(any::<bool>(), 0..60)) {
        let conn = setup_db();
        for (i, v) in verdicts.iter().enumerate() {
            samples::record(&conn, "A", SampleKind::from_verdict(*v), i as i64).unwrap();
        }
        let mutants = verdicts.iter().filter(|v| **v).count() as i64;
        let humans = verdicts.len() as i64 - mutants;

        let stats = load_stats(&conn).unwrap();
        prop_assert_eq!(stats.count_mutant_dna, mutants);
        prop_assert_eq!(stats.count_human_dna, humans);
        if verdicts.is_empty() {
            prop_assert_eq!(stats.mutants_ratio, 0.0);
        } else {
            prop_assert!((stats.mutants_ratio + stats.humans_ratio - 1.0).abs() <= 0.011);
        }
    }

    #[test]
    fn purge_always_empties(rows in 0usize..80, batch in 1usize..20) {
        let conn = setup_db();
        for i in 0..rows {
            samples::record(&conn, "A", SampleKind::from_verdict(i % 2 == 0), i as i64).unwrap();
        }
        let report = purge_all(&conn, batch).unwrap();
        let counter_rows = rows.min(2) as u64;
        prop_assert_eq!(report.total_deleted, rows as u64 + counter_rows);
        prop_assert_eq!(samples::count(&conn).unwrap(), 0);
        prop_assert_eq!(counters::total(&conn).unwrap(), 0);
    }
}
