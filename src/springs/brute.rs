use std::array;
use std::iter::{self, Once};

use itertools::structs::MultiProduct;
use itertools::{Either, Itertools};

use super::{Record, DAMAGED, OPERATIONAL, UNKNOWN};

/// Lazily yields each resolution of a record's unknown springs.
pub struct Candidates<'a> {
    record: &'a Record,
    unknowns: Vec<usize>,
    choices: Either<Once<Vec<u8>>, MultiProduct<array::IntoIter<u8, 2>>>,
}

impl<'a> Candidates<'a> {
    pub(super) fn new(record: &'a Record) -> Self {
        let unknowns: Vec<usize> = record
            .conditions
            .iter()
            .positions(|&c| c == UNKNOWN)
            .collect();

        // A product over no factors still has one (empty) element.
        let choices = if unknowns.is_empty() {
            Either::Left(iter::once(vec![]))
        } else {
            Either::Right(
                iter::repeat([OPERATIONAL, DAMAGED])
                    .take(unknowns.len())
                    .multi_cartesian_product(),
            )
        };

        Candidates {
            record,
            unknowns,
            choices,
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        let choice = self.choices.next()?;
        let mut candidate = self.record.conditions.clone();
        for (&pos, c) in self.unknowns.iter().zip(choice) {
            candidate[pos] = c;
        }
        Some(candidate)
    }
}

/// Lengths of the maximal damaged runs of a fully resolved row.
pub fn runs(conditions: &[u8]) -> Vec<usize> {
    conditions
        .split(|&c| c != DAMAGED)
        .filter(|run| !run.is_empty())
        .map(<[u8]>::len)
        .collect()
}
