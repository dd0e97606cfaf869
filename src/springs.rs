//! Hot springs: counting the damaged-spring arrangements that fit a record.

use std::collections::HashMap;
use std::path::Path;

use itertools::Itertools;
use regex::Regex;
use tracing::{debug, trace};

use crate::input;
use crate::Result;

mod brute;
pub use brute::Candidates;

pub const LINE_PATTERN: &str = r"^(?P<conditions>[.#?]+)\s+(?P<groups>[0-9,]+)$";

const OPERATIONAL: u8 = b'.';
const DAMAGED: u8 = b'#';
const UNKNOWN: u8 = b'?';

/// One row of springs and the lengths of its damaged runs, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    conditions: Vec<u8>,
    groups: Vec<usize>,
}

pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let lines = input::read_matching(path, LINE_PATTERN)?;
    let re = Regex::new(LINE_PATTERN)?;
    Ok(lines.iter().filter_map(|line| Record::parse(&re, line)).collect())
}

impl Record {
    pub fn new(conditions: &str, groups: Vec<usize>) -> Record {
        Record {
            conditions: conditions.as_bytes().to_vec(),
            groups,
        }
    }

    /// Parse a line of the form `???.### 1,1,3`.
    pub fn parse(re: &Regex, line: &str) -> Option<Record> {
        let caps = re.captures(line)?;
        let groups = caps["groups"]
            .split(',')
            .filter(|g| !g.is_empty())
            .map(str::parse)
            .collect::<std::result::Result<Vec<usize>, _>>();
        match groups {
            Ok(groups) => Some(Record::new(&caps["conditions"], groups)),
            Err(e) => {
                debug!("dropping {:?}: {}", line, e);
                None
            }
        }
    }

    pub fn conditions(&self) -> &[u8] {
        &self.conditions
    }

    pub fn groups(&self) -> &[usize] {
        &self.groups
    }

    /// Repeat the record `folds` times, joining the conditions with an unknown spring.
    pub fn unfold(&self, folds: usize) -> Record {
        let conditions = std::iter::repeat(self.conditions.as_slice())
            .take(folds)
            .collect::<Vec<_>>()
            .join(&UNKNOWN);
        let groups = self.groups.repeat(folds);
        Record { conditions, groups }
    }

    /// Number of ways to resolve every unknown spring so the damaged runs match
    /// `groups` exactly.
    pub fn arrangements(&self) -> u64 {
        let mut memo = HashMap::new();
        let n = self.count(0, 0, &mut memo);
        debug!(
            "{} {} has {} arrangements",
            String::from_utf8_lossy(&self.conditions),
            self.groups.iter().join(","),
            n
        );
        n
    }

    /// Arrangements of `conditions[pos..]` against `groups[group..]`.
    fn count(&self, pos: usize, group: usize, memo: &mut HashMap<(usize, usize), u64>) -> u64 {
        if let Some(&n) = memo.get(&(pos, group)) {
            trace!("memo hit for ({}, {}) := {}", pos, group, n);
            return n;
        }

        let n = match self.conditions.get(pos) {
            None => u64::from(group == self.groups.len()),
            Some(&OPERATIONAL) => self.count(pos + 1, group, memo),
            Some(&DAMAGED) => self.place(pos, group, memo),
            Some(_) => self.count(pos + 1, group, memo) + self.place(pos, group, memo),
        };

        memo.insert((pos, group), n);
        n
    }

    /// Arrangements where the run `groups[group]` starts exactly at `pos`.
    fn place(&self, pos: usize, group: usize, memo: &mut HashMap<(usize, usize), u64>) -> u64 {
        // A run can't be empty.
        let Some(&len) = self.groups.get(group).filter(|&&len| len > 0) else {
            return 0;
        };
        let end = pos + len;
        if end > self.conditions.len() || self.conditions[pos..end].contains(&OPERATIONAL) {
            return 0;
        }
        match self.conditions.get(end) {
            None => u64::from(group + 1 == self.groups.len()),
            Some(&DAMAGED) => 0,
            // The spring after a run must be operational.
            Some(_) => self.count(end + 1, group + 1, memo),
        }
    }

    /// Every full resolution of the unknown springs. There are `2^unknowns` of them.
    pub fn candidates(&self) -> Candidates<'_> {
        Candidates::new(self)
    }

    /// Same as [`Record::arrangements`], by checking every candidate.
    pub fn arrangements_brute(&self) -> u64 {
        self.candidates()
            .filter(|candidate| brute::runs(candidate) == self.groups)
            .count() as u64
    }
}
