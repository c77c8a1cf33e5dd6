mod common;

use common::AlignmentGenerator;
use seqcigar::cigar::{compress, expand, parse};
use seqcigar::{edits_from_rows, rows_from_edits, Cigar};

#[test]
fn cigar_compress_expand_roundtrip() {
    let mut gen = AlignmentGenerator::new(7);
    for _ in 0..500 {
        let cigar = gen.random_cigar(12);
        let edits = expand(&cigar).unwrap();
        assert_eq!(compress(&edits), cigar);
    }
}

#[test]
fn cigar_reserialisation_is_idempotent() {
    let mut gen = AlignmentGenerator::new(11);
    for _ in 0..200 {
        let cigar = gen.random_cigar(8);
        let once = cigar.parse::<Cigar>().unwrap().to_string();
        let twice = once.parse::<Cigar>().unwrap().to_string();
        assert_eq!(once, cigar);
        assert_eq!(twice, once);
        assert_eq!(parse(&once).unwrap().len(), once.parse::<Cigar>().unwrap().runs().len());
    }
}

#[test]
fn edit_length_survives_compression() {
    let mut gen = AlignmentGenerator::new(23);
    for _ in 0..500 {
        let edits = gen.random_edits(300);
        let back = expand(&compress(&edits)).unwrap();
        assert_eq!(back.len(), edits.len());
        assert_eq!(back, edits);
    }
}

#[test]
fn rows_edits_roundtrip() {
    let mut gen = AlignmentGenerator::new(42);
    for _ in 0..500 {
        let (row1, row2) = gen.random_rows(200);
        let (s1, s2, edits) = edits_from_rows(&row1, &row2).unwrap();
        assert_eq!(edits.len(), row1.len());
        assert_eq!(s1.len(), edits.reference_length());
        assert_eq!(s2.len(), edits.query_length());

        let (back1, back2) = rows_from_edits(&s1, &s2, &edits).unwrap();
        assert_eq!(back1, row1);
        assert_eq!(back2, row2);
    }
}

#[test]
fn cigar_lengths_match_sequences() {
    let mut gen = AlignmentGenerator::new(5);
    for _ in 0..200 {
        let (row1, row2) = gen.random_rows(120);
        let (s1, s2, edits) = edits_from_rows(&row1, &row2).unwrap();
        let cigar = Cigar::from_edits(&edits);
        assert!(cigar.is_normalized());
        assert_eq!(cigar.reference_length(), Ok(s1.len()));
        assert_eq!(cigar.query_length(), Ok(s2.len()));
    }
}
