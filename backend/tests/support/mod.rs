#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use serde_json::{json, Value};

use school_holidays::models::SchoolYear;
use school_holidays::source::LocalSource;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// A source document with the given vacation entries.
pub fn holiday_document(vacations: Value) -> Value {
    json!({ "content": [{ "vacations": vacations }] })
}

/// One vacation entry of a source document.
pub fn vacation(kind: &str, compulsory: &str, regions: Value) -> Value {
    json!({ "type": kind, "compulsorydates": compulsory, "regions": regions })
}

/// One per-region date range of a vacation entry.
pub fn region_dates(region: &str, start: &str, end: &str) -> Value {
    json!({ "region": region, "startdate": start, "enddate": end })
}

/// A document with a single nationwide summer vacation.
pub fn summer_document(start: &str, end: &str) -> Value {
    holiday_document(json!([vacation(
        "Zomervakantie",
        "true",
        json!([region_dates("heel Nederland", start, end)]),
    )]))
}

/// Local source serving a summer document for every given starting year.
pub fn source_with_years(years: &[i32]) -> LocalSource {
    let source = LocalSource::new();
    for &year in years {
        source.insert_document(
            SchoolYear::starting(year),
            summer_document(&format!("{}-07-11", year + 1), &format!("{}-08-23", year + 1)),
        );
    }
    source
}
