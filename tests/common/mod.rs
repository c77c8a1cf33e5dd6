use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqcigar::{EditOp, EditSequence, GappedRow};

/// Seeded source of random alignments for property checks
pub struct AlignmentGenerator {
    rng: StdRng,
}

impl AlignmentGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn base(&mut self) -> u8 {
        const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];
        BASES[self.rng.gen_range(0..4)]
    }

    pub fn random_op(&mut self) -> EditOp {
        match self.rng.gen_range(0..10) {
            0 => EditOp::Insert,
            1 => EditOp::Delete,
            _ => EditOp::Match,
        }
    }

    pub fn random_edits(&mut self, max_len: usize) -> EditSequence {
        let len = self.rng.gen_range(0..=max_len);
        (0..len).map(|_| self.random_op()).collect()
    }

    /// Two equal-length rows with no column gapped in both
    pub fn random_rows(&mut self, max_len: usize) -> (GappedRow, GappedRow) {
        let edits = self.random_edits(max_len);
        let mut row1 = Vec::with_capacity(edits.len());
        let mut row2 = Vec::with_capacity(edits.len());
        for &op in &edits {
            row1.push(if op.consumes_reference() { self.base() } else { b'-' });
            row2.push(if op.consumes_query() { self.base() } else { b'-' });
        }
        (GappedRow::new(row1), GappedRow::new(row2))
    }

    /// CIGAR text with maximal runs and positive counts
    pub fn random_cigar(&mut self, max_runs: usize) -> String {
        let runs = self.rng.gen_range(0..=max_runs);
        let mut cigar = String::new();
        let mut last: Option<EditOp> = None;
        for _ in 0..runs {
            let op = loop {
                let op = self.random_op();
                if Some(op) != last {
                    break op;
                }
            };
            let len = self.rng.gen_range(1..=150);
            cigar.push_str(&format!("{}{}", len, op));
            last = Some(op);
        }
        cigar
    }
}
