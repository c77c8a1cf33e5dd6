/// Parallel conversion of many alignments at once.
///
/// Every conversion in this crate is pure, so a batch is just a rayon
/// `par_iter` over independent items. Output order always follows input order.
use crate::align::{edit_distance, local_align};
use crate::cigar::{compress, expand};
use crate::edit::EditSequence;
use crate::error::{AlignError, BatchError, CigarError};
use crate::sequence::{GappedRow, Sequence};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Worker threads; 0 lets rayon pick
    #[serde(default)]
    pub threads: usize,
}

/// A read placed on the reference by an upstream search
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadHit {
    pub read: Sequence,
    pub offset: usize,
    pub edits: EditSequence,
}

pub struct BatchConverter {
    pool: rayon::ThreadPool,
}

impl BatchConverter {
    pub fn new(config: &BatchConfig) -> Result<Self, BatchError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        log::debug!(
            "built conversion pool with {} threads",
            pool.current_num_threads()
        );
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn compress_all(&self, edits: &[EditSequence]) -> Vec<String> {
        log::debug!("compressing {} edit sequences", edits.len());
        self.pool
            .install(|| edits.par_iter().map(compress).collect())
    }

    pub fn expand_all<S>(&self, cigars: &[S]) -> Vec<Result<EditSequence, CigarError>>
    where
        S: AsRef<str> + Sync,
    {
        log::debug!("expanding {} CIGARs", cigars.len());
        self.pool
            .install(|| cigars.par_iter().map(|c| expand(c.as_ref())).collect())
    }

    /// Edit distance of every hit against the shared `reference`
    pub fn edit_distances(
        &self,
        reference: &Sequence,
        hits: &[ReadHit],
    ) -> Vec<Result<usize, AlignError>> {
        log::debug!("scoring {} hits", hits.len());
        self.pool.install(|| {
            hits.par_iter()
                .map(|hit| edit_distance(&hit.read, reference, hit.offset, &hit.edits))
                .collect()
        })
    }

    /// Aligned rows for every hit against the shared `reference`
    pub fn local_alignments(
        &self,
        reference: &Sequence,
        hits: &[ReadHit],
    ) -> Vec<Result<(GappedRow, GappedRow), AlignError>> {
        log::debug!("aligning {} hits", hits.len());
        self.pool.install(|| {
            hits.par_iter()
                .map(|hit| local_align(&hit.read, reference, hit.offset, &hit.edits))
                .collect()
        })
    }
}
