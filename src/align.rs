//! Alignment engine: aligned rows <-> (sequence, sequence, edits)
//!
//! Row one is always the reference side. `Insert` puts a gap in row one and
//! `Delete` puts a gap in row two; every other column is a `Match`, whether
//! or not the two symbols agree.

use crate::cigar::Cigar;
use crate::edit::{EditOp, EditSequence};
use crate::error::AlignError;
use crate::sequence::{GappedRow, Sequence, GAP};
use serde::{Deserialize, Serialize};

/// Tag for one column, or `None` when both rows are gapped
#[inline]
fn classify(a: u8, b: u8) -> Option<EditOp> {
    match (a == GAP, b == GAP) {
        (false, false) => Some(EditOp::Match),
        (true, false) => Some(EditOp::Insert),
        (false, true) => Some(EditOp::Delete),
        (true, true) => None,
    }
}

/// Recover the ungapped sequences and the edit sequence from two aligned rows.
///
/// ```
/// use seqcigar::{align::edits_from_rows, GappedRow};
///
/// let (s1, s2, edits) = edits_from_rows(
///     &GappedRow::from("ACCACAGT-CATA"),
///     &GappedRow::from("A-CAGAGTACAAA"),
/// ).unwrap();
/// assert_eq!(s1.to_string(), "ACCACAGTCATA");
/// assert_eq!(s2.to_string(), "ACAGAGTACAAA");
/// assert_eq!(edits.to_string(), "MDMMMMMMIMMMM");
/// ```
pub fn edits_from_rows(
    row1: &GappedRow,
    row2: &GappedRow,
) -> Result<(Sequence, Sequence, EditSequence), AlignError> {
    if row1.len() != row2.len() {
        return Err(AlignError::RowLengthMismatch {
            left: row1.len(),
            right: row2.len(),
        });
    }

    let mut edits = EditSequence::with_capacity(row1.len());
    for (column, (&a, &b)) in row1.as_bytes().iter().zip(row2.as_bytes()).enumerate() {
        let op = classify(a, b).ok_or(AlignError::DoubleGap { column })?;
        edits.push(op);
    }

    Ok((row1.ungapped(), row2.ungapped(), edits))
}

/// Lay `first` and `second` out as two rows following `edits`.
///
/// Returns the rows and how many symbols of each input were used. Both rows
/// are written once into buffers sized to the edit length.
fn weave(
    first: &[u8],
    second: &[u8],
    edits: &EditSequence,
    names: (&'static str, &'static str),
) -> Result<(GappedRow, GappedRow, usize, usize), AlignError> {
    let mut row1 = GappedRow::with_capacity(edits.len());
    let mut row2 = GappedRow::with_capacity(edits.len());
    let mut i = 0;
    let mut j = 0;

    for (column, &op) in edits.iter().enumerate() {
        if op.consumes_reference() {
            let b = *first.get(i).ok_or(AlignError::EditsExhausted {
                column,
                which: names.0,
            })?;
            row1.push(b);
            i += 1;
        } else {
            row1.push(GAP);
        }

        if op.consumes_query() {
            let b = *second.get(j).ok_or(AlignError::EditsExhausted {
                column,
                which: names.1,
            })?;
            row2.push(b);
            j += 1;
        } else {
            row2.push(GAP);
        }
    }

    Ok((row1, row2, i, j))
}

fn ensure_consumed(seq: &[u8], used: usize, which: &'static str) -> Result<(), AlignError> {
    if used < seq.len() {
        return Err(AlignError::UnconsumedSequence {
            remaining: seq.len() - used,
            which,
        });
    }
    Ok(())
}

/// Rebuild the aligned rows for `seq1` and `seq2` from their edit sequence.
///
/// The edits must use up both sequences exactly. This is the inverse of
/// [`edits_from_rows`].
pub fn rows_from_edits(
    seq1: &Sequence,
    seq2: &Sequence,
    edits: &EditSequence,
) -> Result<(GappedRow, GappedRow), AlignError> {
    if edits.is_all_match() && seq1.len() == edits.len() && seq2.len() == edits.len() {
        return Ok((seq1.clone().into(), seq2.clone().into()));
    }

    let (row1, row2, used1, used2) =
        weave(seq1.as_bytes(), seq2.as_bytes(), edits, ("first", "second"))?;
    ensure_consumed(seq1.as_bytes(), used1, "first")?;
    ensure_consumed(seq2.as_bytes(), used2, "second")?;
    Ok((row1, row2))
}

/// Rebuild the rows of a read `p` aligned at `offset` inside reference `x`.
///
/// `p` is row one and `x` is row two: `Delete` gaps `x`, `Insert` gaps `p`.
/// `p` is laid out from its start and must be used up by the edits. Only
/// `x[offset..]` takes part, and the reference row ends where the edits stop,
/// so it covers `x[offset..offset + edits.query_length()]` and both rows have
/// the edit sequence's length.
pub fn local_align(
    p: &Sequence,
    x: &Sequence,
    offset: usize,
    edits: &EditSequence,
) -> Result<(GappedRow, GappedRow), AlignError> {
    let window = x.suffix(offset).ok_or(AlignError::OffsetOutOfBounds {
        offset,
        len: x.len(),
    })?;

    if edits.is_all_match() && p.len() == edits.len() && window.len() >= edits.len() {
        return Ok((
            p.clone().into(),
            GappedRow::new(&window[..edits.len()]),
        ));
    }

    let (row_p, row_x, used_p, _) = weave(p.as_bytes(), window, edits, ("read", "reference"))?;
    ensure_consumed(p.as_bytes(), used_p, "read")?;
    Ok((row_p, row_x))
}

/// Number of columns that are gapped in either row or hold two different
/// symbols
fn count_differences(row1: &GappedRow, row2: &GappedRow) -> usize {
    row1.as_bytes()
        .iter()
        .zip(row2.as_bytes())
        .filter(|&(&a, &b)| a == GAP || b == GAP || a != b)
        .count()
}

/// Edit distance between `p` and the stretch of `x` starting at `offset`,
/// as described by `edits`.
///
/// The edits are trusted, not optimised: this counts gapped and mismatched
/// columns of the alignment they describe. An empty `p` or `x` gives 0.
///
/// ```
/// use seqcigar::{align::edit_distance, EditSequence, Sequence};
///
/// let p: Sequence = "accaaagta".parse().unwrap();
/// let x: Sequence = "cgacaaatgtcca".parse().unwrap();
/// let edits: EditSequence = "MDMMIMMMMIIM".parse().unwrap();
/// assert_eq!(edit_distance(&p, &x, 2, &edits).unwrap(), 5);
/// ```
pub fn edit_distance(
    p: &Sequence,
    x: &Sequence,
    offset: usize,
    edits: &EditSequence,
) -> Result<usize, AlignError> {
    if p.is_empty() || x.is_empty() {
        return Ok(0);
    }

    let (row_p, row_x) = local_align(p, x, offset, edits)?;
    Ok(count_differences(&row_p, &row_x))
}

#[derive(Deserialize)]
struct AlignmentRows {
    row1: GappedRow,
    row2: GappedRow,
}

/// A checked pair of aligned rows together with their edit sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AlignmentRows")]
pub struct Alignment {
    row1: GappedRow,
    row2: GappedRow,
    edits: EditSequence,
}

impl TryFrom<AlignmentRows> for Alignment {
    type Error = AlignError;

    fn try_from(rows: AlignmentRows) -> Result<Self, Self::Error> {
        Self::from_rows(rows.row1, rows.row2)
    }
}

impl Alignment {
    pub fn from_rows(row1: GappedRow, row2: GappedRow) -> Result<Self, AlignError> {
        let (_, _, edits) = edits_from_rows(&row1, &row2)?;
        Ok(Self { row1, row2, edits })
    }

    pub fn from_edits(
        seq1: &Sequence,
        seq2: &Sequence,
        edits: EditSequence,
    ) -> Result<Self, AlignError> {
        let (row1, row2) = rows_from_edits(seq1, seq2, &edits)?;
        Ok(Self { row1, row2, edits })
    }

    pub fn row1(&self) -> &GappedRow {
        &self.row1
    }

    pub fn row2(&self) -> &GappedRow {
        &self.row2
    }

    pub fn edits(&self) -> &EditSequence {
        &self.edits
    }

    pub fn cigar(&self) -> Cigar {
        Cigar::from_edits(&self.edits)
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Gapped plus mismatched columns
    pub fn distance(&self) -> usize {
        count_differences(&self.row1, &self.row2)
    }

    /// Share of columns holding the same symbol in both rows; 0.0 when empty
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        (self.len() - self.distance()) as f64 / self.len() as f64
    }
}
