/// Per-column edit operations and the expanded edit sequence
use crate::error::CigarError;
use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;
use std::fmt;
use std::str::FromStr;

/// One alignment column, read with row one as the reference.
///
/// There is no substitution tag. A column where both rows carry a symbol is
/// a `Match` whether or not the symbols agree, exactly as the SAM `M`
/// operation works. Callers that need to tell substitutions apart must
/// compare the symbols themselves (see [`crate::align::edit_distance`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EditOp {
    /// Both rows carry a symbol (equal or substituted)
    #[serde(rename = "M")]
    Match = b'M',
    /// Gap in row one, symbol in row two
    #[serde(rename = "I")]
    Insert = b'I',
    /// Symbol in row one, gap in row two
    #[serde(rename = "D")]
    Delete = b'D',
}

impl EditOp {
    #[inline(always)]
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'M' => Some(Self::Match),
            b'I' => Some(Self::Insert),
            b'D' => Some(Self::Delete),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// True if the column holds a symbol of row one. In
    /// [`crate::align::local_align`] row one is the read `p`.
    #[inline(always)]
    pub const fn consumes_reference(self) -> bool {
        matches!(self, Self::Match | Self::Delete)
    }

    /// True if the column holds a symbol of row two. In
    /// [`crate::align::local_align`] row two is the reference `x`.
    #[inline(always)]
    pub const fn consumes_query(self) -> bool {
        matches!(self, Self::Match | Self::Insert)
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One operation per alignment column, e.g. `MDMMMMMMIMMMM`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EditSequence(Vec<EditOp>);

impl EditSequence {
    pub fn new(ops: Vec<EditOp>) -> Self {
        Self(ops)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut ops = Vec::new();
        ops.try_reserve_exact(capacity)?;
        Ok(Self(ops))
    }

    #[inline]
    pub fn push(&mut self, op: EditOp) {
        self.0.push(op);
    }

    pub fn ops(&self) -> &[EditOp] {
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

    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.0.iter()
    }

    /// True when no column is gapped (vacuously true when empty)
    pub fn is_all_match(&self) -> bool {
        self.0.iter().all(|&op| op == EditOp::Match)
    }

    /// Number of row-one symbols the edits cover (the read in `local_align`)
    pub fn reference_length(&self) -> usize {
        self.0.iter().filter(|op| op.consumes_reference()).count()
    }

    /// Number of row-two symbols the edits cover (the reference window in
    /// `local_align`)
    pub fn query_length(&self) -> usize {
        self.0.iter().filter(|op| op.consumes_query()).count()
    }

    /// Maximal blocks of equal operations, e.g. `MDMMI` -> `M`, `D`, `MM`, `I`
    pub fn runs(&self) -> Runs<'_> {
        Runs { ops: &self.0 }
    }
}

impl From<Vec<EditOp>> for EditSequence {
    fn from(ops: Vec<EditOp>) -> Self {
        Self(ops)
    }
}

impl FromIterator<EditOp> for EditSequence {
    fn from_iter<I: IntoIterator<Item = EditOp>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EditSequence {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for EditSequence {
    type Err = CigarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.char_indices()
            .map(|(position, ch)| {
                u8::try_from(ch)
                    .ok()
                    .and_then(EditOp::from_byte)
                    .ok_or(CigarError::UnknownOperation { op: ch, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl TryFrom<String> for EditSequence {
    type Error = CigarError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EditSequence> for String {
    fn from(edits: EditSequence) -> Self {
        edits.to_string()
    }
}

impl fmt::Display for EditSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.0.iter().map(|op| op.as_char()).collect();
        f.write_str(&text)
    }
}

/// Iterator over maximal runs of one operation, see [`EditSequence::runs`]
pub struct Runs<'a> {
    ops: &'a [EditOp],
}

impl<'a> Iterator for Runs<'a> {
    type Item = &'a [EditOp];

    fn next(&mut self) -> Option<Self::Item> {
        let first = *self.ops.first()?;
        let len = self.ops.iter().take_while(|&&op| op == first).count();
        let (run, rest) = self.ops.split_at(len);
        self.ops = rest;
        Some(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_op_from_byte() {
        assert_eq!(EditOp::from_byte(b'M'), Some(EditOp::Match));
        assert_eq!(EditOp::from_byte(b'I'), Some(EditOp::Insert));
        assert_eq!(EditOp::from_byte(b'D'), Some(EditOp::Delete));
        assert_eq!(EditOp::from_byte(b'X'), None);
        assert_eq!(EditOp::Delete.to_byte(), b'D');
    }

    #[test]
    fn test_op_consumes() {
        assert!(EditOp::Match.consumes_reference());
        assert!(EditOp::Match.consumes_query());
        assert!(!EditOp::Insert.consumes_reference());
        assert!(EditOp::Insert.consumes_query());
        assert!(EditOp::Delete.consumes_reference());
        assert!(!EditOp::Delete.consumes_query());
    }

    #[test]
    fn test_parse_and_display() {
        let edits: EditSequence = "MDMMMMMMIMMMM".parse().unwrap();
        assert_eq!(edits.len(), 13);
        assert_eq!(edits.to_string(), "MDMMMMMMIMMMM");
        assert_eq!(edits.reference_length(), 12);
        assert_eq!(edits.query_length(), 12);
        assert!(!edits.is_all_match());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "MMXM".parse::<EditSequence>(),
            Err(CigarError::UnknownOperation { op: 'X', position: 2 })
        );
    }

    #[test]
    fn test_runs() {
        let edits: EditSequence = "MDMMMMMMIMMMM".parse().unwrap();
        let runs: Vec<usize> = edits.runs().map(|r| r.len()).collect();
        assert_eq!(runs, vec![1, 1, 6, 1, 4]);
        assert_eq!(EditSequence::default().runs().count(), 0);
    }

    #[test]
    fn test_empty_is_all_match() {
        assert!(EditSequence::default().is_all_match());
        assert_eq!(EditSequence::default().to_string(), "");
    }
}
