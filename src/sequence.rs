/// Sequence and row value types.
///
/// A [`Sequence`] never contains the gap marker; a [`GappedRow`] may. Keeping
/// them apart means an aligned row cannot be handed to code that expects the
/// raw read or reference.
use crate::error::AlignError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The reserved gap marker in aligned rows
pub const GAP: u8 = b'-';

/// A gap-free run of sequence symbols.
///
/// Any byte other than [`GAP`] is accepted as a symbol; no alphabet is
/// enforced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence(Vec<u8>);

impl Sequence {
    pub fn new(data: impl Into<Vec<u8>>) -> Result<Self, AlignError> {
        let data = data.into();
        if let Some(position) = data.iter().position(|&b| b == GAP) {
            return Err(AlignError::GapInSequence { position });
        }
        Ok(Self(data))
    }

    /// Strip every gap marker from `row`, keeping symbol order.
    pub fn from_row(row: &GappedRow) -> Self {
        Self(row.0.iter().copied().filter(|&b| b != GAP).collect())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// The gap-free suffix starting at `offset`, or `None` past the end
    pub fn suffix(&self, offset: usize) -> Option<&[u8]> {
        self.0.get(offset..)
    }
}

impl FromStr for Sequence {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes())
    }
}

impl TryFrom<String> for Sequence {
    type Error = AlignError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s.into_bytes())
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        String::from_utf8_lossy(&seq.0).into_owned()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// One row of a pairwise alignment; may contain [`GAP`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct GappedRow(Vec<u8>);

impl GappedRow {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self(data.into())
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    #[inline]
    pub(crate) fn push(&mut self, b: u8) {
        self.0.push(b);
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn gap_count(&self) -> usize {
        self.0.iter().filter(|&&b| b == GAP).count()
    }

    #[inline]
    pub fn is_gap(&self, column: usize) -> bool {
        self.0.get(column) == Some(&GAP)
    }

    /// The row with gaps removed
    pub fn ungapped(&self) -> Sequence {
        Sequence::from_row(self)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<&str> for GappedRow {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for GappedRow {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<GappedRow> for String {
    fn from(row: GappedRow) -> Self {
        String::from_utf8_lossy(&row.0).into_owned()
    }
}

/// A gap-free sequence is a valid row with no gaps
impl From<Sequence> for GappedRow {
    fn from(seq: Sequence) -> Self {
        Self(seq.0)
    }
}

impl fmt::Display for GappedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl PartialEq<&str> for GappedRow {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for Sequence {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}
