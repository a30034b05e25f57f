//! Invariants checked over a deterministic spread of generated rosters.

use std::collections::HashSet;

use chrono::Utc;
use kam_core::entities::AccountManagerRecord;
use kam_core::enums::RecordSource;
use kam_reconcile::{commit, diff, diff_tagged, match_key, reconciliation_progress};
use rstest::rstest;

/// Small linear congruential generator so cases are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn pick(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn identifier(rng: &mut Lcg, prefix: &str) -> Option<String> {
    match rng.pick(5) {
        0 => None,
        1 => Some(String::new()),
        2 => Some("   ".to_string()),
        3 => Some(format!(" {prefix}{} ", rng.pick(6))),
        _ => Some(format!("{prefix}{}", rng.pick(6))),
    }
}

fn roster(rng: &mut Lcg, len: usize) -> Vec<AccountManagerRecord> {
    (0..len)
        .map(|i| AccountManagerRecord {
            nik_am: identifier(rng, ""),
            id_sales: identifier(rng, "S-"),
            name: Some(format!("AM {i}")),
            ..AccountManagerRecord::default()
        })
        .collect()
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(17)]
#[case(99)]
#[case(2026)]
fn diff_partitions_source_in_order(#[case] seed: u64) {
    let mut rng = Lcg(seed);
    let source = roster(&mut rng, 40);
    let master = roster(&mut rng, 15);

    let outcome = diff(&source, &master);
    assert_eq!(outcome.valid.len() + outcome.invalid.len(), source.len());

    // Merge the two lists back by walking the source; each row must be the
    // next unconsumed element of exactly one list.
    let (mut v, mut i) = (0, 0);
    for record in &source {
        if outcome.valid.get(v).is_some_and(|row| &row.record == record)
            && match_key(record).is_some()
        {
            v += 1;
        } else {
            assert_eq!(&outcome.invalid[i].record, record);
            i += 1;
        }
    }
    assert_eq!(v, outcome.valid.len());
    assert_eq!(i, outcome.invalid.len());
}

#[rstest]
#[case(5)]
#[case(6)]
#[case(7)]
fn keyless_rows_are_always_invalid(#[case] seed: u64) {
    let mut rng = Lcg(seed);
    let mut master = roster(&mut rng, 20);
    master.push(AccountManagerRecord::default());
    master.push(AccountManagerRecord::with_ids(" ", ""));

    let source = roster(&mut rng, 40);
    let outcome = diff(&source, &master);
    for row in &outcome.valid {
        assert!(match_key(&row.record).is_some());
    }
    let keyless = source.iter().filter(|r| match_key(r).is_none()).count();
    let keyless_invalid = outcome
        .invalid
        .iter()
        .filter(|r| match_key(&r.record).is_none())
        .count();
    assert_eq!(keyless, keyless_invalid);
}

#[rstest]
#[case(11)]
#[case(12)]
#[case(13)]
#[case(14)]
fn commit_is_idempotent_and_keeps_keys_unique(#[case] seed: u64) {
    let mut rng = Lcg(seed);
    let master = roster(&mut rng, 10);
    let master: Vec<_> = {
        // Start from a master roster that already satisfies the invariant.
        let mut seen = HashSet::new();
        master
            .into_iter()
            .filter(|r| match_key(r).is_some_and(|k| seen.insert(k)))
            .collect()
    };
    let source = roster(&mut rng, 30);

    let outcome = diff_tagged(RecordSource::Ca, &source, &master, Utc::now());
    let selected = outcome.invalid;

    let first = commit("ops", &selected, &master);
    let second = commit("ops", &selected, &first.updated_master);
    assert_eq!(second.inserted_count, 0);
    assert_eq!(second.updated_master, first.updated_master);

    let mut seen = HashSet::new();
    for record in &first.updated_master {
        let key = match_key(record).expect("master rows are keyed");
        assert!(seen.insert(key), "duplicate key after commit");
    }
    assert_eq!(
        first.updated_master[..master.len()],
        master[..],
        "master order must be preserved"
    );
}

#[rstest]
#[case(21)]
#[case(22)]
fn full_match_is_one_hundred_percent(#[case] seed: u64) {
    let mut rng = Lcg(seed);
    let source: Vec<_> = roster(&mut rng, 25)
        .into_iter()
        .filter(|r| match_key(r).is_some())
        .collect();
    assert_eq!(reconciliation_progress(&source, &source), 100);
    assert_eq!(reconciliation_progress(&[], &source), 0);
}

#[test]
fn nik_wins_over_sales_id_and_is_trimmed() {
    let record = AccountManagerRecord::with_ids("  7  ", "X");
    assert_eq!(match_key(&record).as_deref(), Some("nik:7"));
}
