//! Conversions between the three forms of a pairwise alignment:
//! gapped rows, the per-column edit sequence and the CIGAR string.
//!
//! ```
//! use seqcigar::{align, cigar, GappedRow};
//!
//! let (s1, s2, edits) = align::edits_from_rows(
//!     &GappedRow::from("ACCACAGT-CATA"),
//!     &GappedRow::from("A-CAGAGTACAAA"),
//! )?;
//! assert_eq!(cigar::compress(&edits), "1M1D6M1I4M");
//!
//! let (row1, row2) = align::rows_from_edits(&s1, &s2, &cigar::expand("1M1D6M1I4M")?)?;
//! assert_eq!(row1.to_string(), "ACCACAGT-CATA");
//! assert_eq!(row2.to_string(), "A-CAGAGTACAAA");
//! # Ok::<(), seqcigar::AlignError>(())
//! ```

pub mod align;
pub mod batch;
pub mod cigar;
pub mod edit;
pub mod error;
pub mod sequence;

pub use align::{edit_distance, edits_from_rows, local_align, rows_from_edits, Alignment};
pub use batch::{BatchConfig, BatchConverter, ReadHit};
pub use cigar::{Cigar, CigarRun};
pub use edit::{EditOp, EditSequence};
pub use error::{AlignError, BatchError, CigarError};
pub use sequence::{GappedRow, Sequence, GAP};
