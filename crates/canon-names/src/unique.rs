//! Uniqueness resolution — numeric suffixes for repeated base names.

use canon_core::UniquenessPolicy;
use std::collections::{HashMap, HashSet};

/// Occurrence counters for one processing run.
#[derive(Debug, Default)]
pub struct UniquenessTable {
    policy: UniquenessPolicy,
    counters: HashMap<String, usize>,
    emitted: HashSet<String>,
}

impl UniquenessTable {
    pub fn new(policy: UniquenessPolicy) -> Self {
        Self { policy, ..Default::default() }
    }

    /// Resolve the next name in row order.
    ///
    /// The first occurrence of a base is emitted as is; the n-th repeat
    /// becomes `base_n`. Under [`UniquenessPolicy::Strict`] a name already
    /// emitted earlier is also treated as a repeat, and the counter keeps
    /// advancing until the suffixed name is unused. An empty base is left
    /// empty under `Strict`, since `_1` would not be a canonical name.
    pub fn resolve(&mut self, base: &str) -> String {
        let strict = self.policy == UniquenessPolicy::Strict;
        if strict && base.is_empty() {
            return String::new();
        }
        let fresh = !self.counters.contains_key(base) && !(strict && self.emitted.contains(base));
        if fresh {
            self.counters.insert(base.to_string(), 0);
            self.emitted.insert(base.to_string());
            return base.to_string();
        }

        let counter = self.counters.entry(base.to_string()).or_insert(0);
        let name = loop {
            *counter += 1;
            let candidate = format!("{base}_{counter}");
            if !strict || !self.emitted.contains(&candidate) {
                break candidate;
            }
        };
        self.emitted.insert(name.clone());
        name
    }

    pub fn policy(&self) -> UniquenessPolicy {
        self.policy
    }
}

/// Resolve a whole column of base names in order.
pub fn resolve_all<S: AsRef<str>>(names: &[S], policy: UniquenessPolicy) -> Vec<String> {
    let mut table = UniquenessTable::new(policy);
    names.iter().map(|n| table.resolve(n.as_ref())).collect()
}
