//! Lens library: the HASH algorithm and the HASHMAP box procedure.

use std::path::Path;

use tracing::debug;

use crate::input;
use crate::Result;

pub const BOX_COUNT: usize = 256;

pub fn read_steps(path: impl AsRef<Path>) -> Result<Vec<String>> {
    input::read_fields(path, ',')
}

/// The HASH algorithm, bounded to `0..BOX_COUNT`.
pub fn hash(s: &str) -> u8 {
    s.chars()
        .fold(0u32, |h, c| (h + c as u32) * 17 % BOX_COUNT as u32) as u8
}

pub fn hash_sum<S: AsRef<str>>(steps: &[S]) -> u64 {
    steps
        .iter()
        .map(|step| {
            let h = hash(step.as_ref());
            debug!("hash {:?} = {}", step.as_ref(), h);
            u64::from(h)
        })
        .sum()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<'a> {
    Insert { label: &'a str, focal: u32 },
    Remove { label: &'a str },
}

impl<'a> Step<'a> {
    /// Parse `label=N` or `label-`.
    pub fn parse(s: &'a str) -> Option<Step<'a>> {
        if let Some((label, focal)) = s.split_once('=') {
            let focal = focal.trim().parse().ok()?;
            Some(Step::Insert { label, focal })
        } else {
            let label = s.strip_suffix('-')?;
            Some(Step::Remove { label })
        }
    }

    pub fn label(&self) -> &'a str {
        match *self {
            Step::Insert { label, .. } | Step::Remove { label } => label,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lens {
    pub label: String,
    pub focal: u32,
}

pub struct Boxes {
    boxes: Vec<Vec<Lens>>,
}

impl Default for Boxes {
    fn default() -> Self {
        Boxes {
            boxes: vec![vec![]; BOX_COUNT],
        }
    }
}

impl Boxes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lenses(&self, n: usize) -> &[Lens] {
        &self.boxes[n]
    }

    pub fn apply(&mut self, step: Step<'_>) {
        let n = hash(step.label()) as usize;
        let lenses = &mut self.boxes[n];
        let slot = lenses.iter().position(|lens| lens.label == step.label());

        match (step, slot) {
            (Step::Insert { focal, .. }, Some(slot)) => {
                debug!("box {}: replacing {} with focal {}", n, step.label(), focal);
                lenses[slot].focal = focal;
            }
            (Step::Insert { label, focal }, None) => {
                debug!("box {}: adding {} with focal {}", n, label, focal);
                lenses.push(Lens {
                    label: label.to_string(),
                    focal,
                });
            }
            (Step::Remove { label }, Some(slot)) => {
                debug!("box {}: removing {}", n, label);
                lenses.remove(slot);
            }
            (Step::Remove { label }, None) => {
                debug!("box {}: {} not present", n, label);
            }
        }
    }

    pub fn focusing_power(&self) -> u64 {
        let mut power = 0;
        for (n, lenses) in self.boxes.iter().enumerate() {
            for (slot, lens) in lenses.iter().enumerate() {
                power += (n as u64 + 1) * (slot as u64 + 1) * u64::from(lens.focal);
            }
        }
        power
    }
}

/// Run every step through the boxes and return the resulting focusing power.
pub fn focusing_power<S: AsRef<str>>(steps: &[S]) -> u64 {
    let mut boxes = Boxes::new();
    for step in steps {
        match Step::parse(step.as_ref()) {
            Some(parsed) => boxes.apply(parsed),
            None => debug!("skipping step {:?}", step.as_ref()),
        }
    }
    boxes.focusing_power()
}
