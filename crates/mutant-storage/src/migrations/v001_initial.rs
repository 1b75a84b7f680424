//! V001: classified samples and per-category counters.

pub const MIGRATION_SQL: &str = r#"
-- One row per classified grid. Duplicates are kept: every request is a sample.
CREATE TABLE IF NOT EXISTS samples (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    dna TEXT NOT NULL,
    kind TEXT NOT NULL CHECK (kind IN ('mutant', 'human')),
    created_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_samples_kind ON samples(kind);
CREATE INDEX IF NOT EXISTS idx_samples_created
    ON samples(created_at DESC);

-- Running totals, one row per category, bumped in the same
-- transaction as the sample insert.
CREATE TABLE IF NOT EXISTS counters (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    kind TEXT NOT NULL UNIQUE,
    count INTEGER NOT NULL DEFAULT 0
) STRICT;
"#;
