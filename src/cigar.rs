//! CIGAR codec
//!
//! Converts between the expanded [`EditSequence`] and its run-length encoded
//! text form (`1M1D6M1I4M`). Only the `M`, `I` and `D` operations exist here.

use crate::edit::{EditOp, EditSequence};
use crate::error::CigarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One `<len><op>` element of a CIGAR
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CigarRun {
    pub len: usize,
    pub op: EditOp,
}

impl CigarRun {
    pub const fn new(len: usize, op: EditOp) -> Self {
        Self { len, op }
    }
}

impl From<(usize, EditOp)> for CigarRun {
    fn from((len, op): (usize, EditOp)) -> Self {
        Self { len, op }
    }
}

impl fmt::Display for CigarRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len, self.op)
    }
}

/// A parsed CIGAR.
///
/// Runs built by [`Cigar::from_edits`] are maximal. Parsed text keeps the
/// runs it was given; call [`Cigar::normalize`] to merge neighbours.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cigar(Vec<CigarRun>);

impl Cigar {
    pub fn runs(&self) -> &[CigarRun] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Run-length encode `edits` into maximal runs
    pub fn from_edits(edits: &EditSequence) -> Self {
        Self(
            edits
                .runs()
                .map(|run| CigarRun::new(run.len(), run[0]))
                .collect(),
        )
    }

    /// One operation per column.
    ///
    /// Fails rather than aborting when the total length cannot be allocated.
    pub fn expand(&self) -> Result<EditSequence, CigarError> {
        let total = checked_total(self.0.iter())?;
        let mut edits = EditSequence::try_with_capacity(total)
            .map_err(|_| CigarError::ExpandedLengthOverflow)?;
        for run in &self.0 {
            for _ in 0..run.len {
                edits.push(run.op);
            }
        }
        Ok(edits)
    }

    /// Merge adjacent runs that share an operation.
    ///
    /// On overflow the CIGAR is left unchanged.
    pub fn normalize(&mut self) -> Result<(), CigarError> {
        if self.0.len() <= 1 {
            return Ok(());
        }

        let mut merged: Vec<CigarRun> = Vec::with_capacity(self.0.len());
        for &run in &self.0 {
            match merged.last_mut() {
                Some(last) if last.op == run.op => {
                    last.len = last
                        .len
                        .checked_add(run.len)
                        .ok_or(CigarError::ExpandedLengthOverflow)?;
                }
                _ => merged.push(run),
            }
        }
        self.0 = merged;
        Ok(())
    }

    pub fn is_normalized(&self) -> bool {
        self.0.windows(2).all(|w| w[0].op != w[1].op)
    }

    /// Sum of `M` and `D` run lengths: the row-one symbols covered
    pub fn reference_length(&self) -> Result<usize, CigarError> {
        checked_total(self.0.iter().filter(|r| r.op.consumes_reference()))
    }

    /// Sum of `M` and `I` run lengths: the row-two symbols covered
    pub fn query_length(&self) -> Result<usize, CigarError> {
        checked_total(self.0.iter().filter(|r| r.op.consumes_query()))
    }
}

fn checked_total<'a>(mut runs: impl Iterator<Item = &'a CigarRun>) -> Result<usize, CigarError> {
    runs.try_fold(0usize, |acc, r| acc.checked_add(r.len))
        .ok_or(CigarError::ExpandedLengthOverflow)
}

impl FromStr for Cigar {
    type Err = CigarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|pairs| Self(pairs.into_iter().map(CigarRun::from).collect()))
    }
}

impl TryFrom<String> for Cigar {
    type Error = CigarError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Cigar> for String {
    fn from(cigar: Cigar) -> Self {
        cigar.to_string()
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.0 {
            write!(f, "{}", run)?;
        }
        Ok(())
    }
}

/// Split CIGAR text into `(count, operation)` pairs.
///
/// Greedy left to right: the longest digit run, then exactly one operation
/// character, until the input is used up. Empty input gives an empty list.
///
/// ```
/// use seqcigar::cigar::parse;
/// use seqcigar::EditOp::*;
///
/// let pairs = parse("1M1D6M1I4M").unwrap();
/// assert_eq!(pairs, vec![(1, Match), (1, Delete), (6, Match), (1, Insert), (4, Match)]);
/// ```
pub fn parse(cigar: &str) -> Result<Vec<(usize, EditOp)>, CigarError> {
    let mut pairs = Vec::with_capacity(cigar.len() / 2);
    let mut count: usize = 0;
    let mut run_start: Option<usize> = None;

    for (position, ch) in cigar.char_indices() {
        if let Some(digit) = ch.to_digit(10) {
            let start = *run_start.get_or_insert(position);
            count = count
                .checked_mul(10)
                .and_then(|c| c.checked_add(digit as usize))
                .ok_or(CigarError::LengthOverflow { position: start })?;
            continue;
        }

        let start = run_start.take().ok_or(CigarError::MissingLength { position })?;
        let op = u8::try_from(ch)
            .ok()
            .and_then(EditOp::from_byte)
            .ok_or(CigarError::UnknownOperation { op: ch, position })?;
        if count == 0 {
            return Err(CigarError::ZeroLength { position: start });
        }
        pairs.push((count, op));
        count = 0;
    }

    if let Some(position) = run_start {
        return Err(CigarError::TrailingLength { position });
    }

    log::trace!("parsed CIGAR {:?} into {} runs", cigar, pairs.len());
    Ok(pairs)
}

/// Expand CIGAR text into one operation per column
pub fn expand(cigar: &str) -> Result<EditSequence, CigarError> {
    cigar.parse::<Cigar>()?.expand()
}

/// Run-length encode `edits` as CIGAR text, e.g. `MDMMI` -> `1M1D2M1I`
pub fn compress(edits: &EditSequence) -> String {
    Cigar::from_edits(edits).to_string()
}
