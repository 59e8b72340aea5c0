use boolmask::data::{
    combine, combine_chunked, logical_and, logical_not, logical_or, logical_xor, BooleanMask,
};
use boolmask::types::Logical;
use boolmask::{MaskError, NumericSequence};
use polars::prelude::{BooleanChunked, NewChunkedArray};
use rand::Rng;

fn a() -> NumericSequence {
    NumericSequence::from_ints(vec![1, 2, 3, 4, 5, 6, 7, 8, 9])
}

fn b() -> NumericSequence {
    NumericSequence::from_ints(vec![3, 4, 5, 6, 7, 8, 9, 1, 2])
}

fn random_mask(rng: &mut impl Rng, len: usize) -> BooleanMask {
    (0..len).map(|_| rng.gen::<bool>()).collect()
}

#[test]
fn test_a_above_3_and_b_below_6() {
    let mask1 = a().greater_than(3).unwrap();
    let mask2 = b().less_than(6).unwrap();

    let result = logical_and(&mask1, &mask2).unwrap();

    assert_eq!(
        result.to_vec(),
        vec![false, false, false, false, false, false, false, true, true]
    );
}

#[test]
fn test_a_between_3_and_6() {
    let mask1 = a().greater_than(3).unwrap();
    let mask3 = a().less_than(6).unwrap();

    let result = logical_and(&mask1, &mask3).unwrap();

    assert_eq!(
        result.to_vec(),
        vec![false, false, false, true, true, false, false, false, false]
    );
}

#[test]
fn test_matches_positionwise_and() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let len = rng.gen_range(0..64);
        let x = random_mask(&mut rng, len);
        let y = random_mask(&mut rng, len);

        let result = logical_and(&x, &y).unwrap();

        assert_eq!(result.len(), len);
        for i in 0..len {
            assert_eq!(result.get(i), Some(x.get(i).unwrap() && y.get(i).unwrap()));
        }
    }
}

#[test]
fn test_commutative() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let len = rng.gen_range(0..64);
        let x = random_mask(&mut rng, len);
        let y = random_mask(&mut rng, len);

        assert_eq!(logical_and(&x, &y).unwrap(), logical_and(&y, &x).unwrap());
    }
}

#[test]
fn test_all_false_operand_gives_all_false() {
    let mut rng = rand::thread_rng();
    let zeros = BooleanMask::new(&[false; 32]);
    let other = random_mask(&mut rng, 32);

    let result = logical_and(&zeros, &other).unwrap();

    assert_eq!(result.len(), 32);
    assert!(!result.any());
}

#[test]
fn test_length_mismatch_is_rejected() {
    let x = BooleanMask::new(&[true, false, true]);
    let y = BooleanMask::new(&[true, false]);

    let err = logical_and(&x, &y).unwrap_err();

    assert!(matches!(err, MaskError::ShapeMismatch { left: 3, right: 2 }));
}

#[test]
fn test_length_one_does_not_broadcast() {
    let x = BooleanMask::new(&[true, true, true]);
    let y = BooleanMask::new(&[true]);

    assert!(matches!(
        logical_and(&x, &y),
        Err(MaskError::ShapeMismatch { left: 3, right: 1 })
    ));
}

#[test]
fn test_empty_masks() {
    let empty = BooleanMask::new(&[]);

    let result = logical_and(&empty, &empty).unwrap();

    assert!(result.is_empty());
}

#[test]
fn test_inputs_are_not_modified() {
    let x = BooleanMask::new(&[true, true, false]);
    let y = BooleanMask::new(&[false, true, true]);

    let _ = logical_and(&x, &y).unwrap();

    assert_eq!(x.to_vec(), vec![true, true, false]);
    assert_eq!(y.to_vec(), vec![false, true, true]);
}

#[test]
fn test_or_xor_not() {
    let x = BooleanMask::new(&[true, true, false, false]);
    let y = BooleanMask::new(&[true, false, true, false]);

    assert_eq!(logical_or(&x, &y).unwrap().to_vec(), vec![true, true, true, false]);
    assert_eq!(logical_xor(&x, &y).unwrap().to_vec(), vec![false, true, true, false]);
    assert_eq!(logical_not(&x).to_vec(), vec![false, false, true, true]);
}

#[test]
fn test_chunked_matches_sequential() {
    let mut rng = rand::thread_rng();
    let x = random_mask(&mut rng, 10_000);
    let y = random_mask(&mut rng, 10_000);

    for op in [Logical::And, Logical::Or, Logical::Xor] {
        let sequential = combine(op, &x, &y).unwrap();
        let chunked = combine_chunked(op, &x, &y, 97).unwrap();
        assert_eq!(sequential, chunked);
    }
}

#[test]
fn test_chunked_checks_shape_and_chunk_size() {
    let x = BooleanMask::new(&[true, false]);
    let y = BooleanMask::new(&[true]);

    assert!(matches!(
        combine_chunked(Logical::And, &x, &y, 4),
        Err(MaskError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        combine_chunked(Logical::And, &x, &x, 0),
        Err(MaskError::Configuration(_))
    ));
}

#[test]
fn test_mask_summaries() {
    let mask = BooleanMask::new(&[true, false, true]);

    assert_eq!(mask.count_true(), 2);
    assert!(mask.any());
    assert!(!mask.all());
    assert_eq!(mask.get(3), None);
}

#[test]
fn test_mask_display() {
    let mask = BooleanMask::new(&[false, true]);

    assert_eq!(mask.to_string(), "array([False,  True])");
}

#[test]
fn test_mask_serializes_as_plain_array() {
    let mask = BooleanMask::new(&[true, false, true]);

    let json = serde_json::to_string(&mask).unwrap();
    assert_eq!(json, "[true,false,true]");

    let back: BooleanMask = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mask);
}

#[test]
fn test_nulls_in_foreign_mask_count_as_false() {
    let chunked =
        BooleanChunked::from_slice_options("m".into(), &[Some(true), None, Some(false), None]);

    let mask = BooleanMask::from_chunked(chunked);

    assert_eq!(mask.to_vec(), vec![true, false, false, false]);
    assert_eq!(
        logical_or(&mask, &BooleanMask::new(&[false; 4])).unwrap().to_vec(),
        vec![true, false, false, false]
    );
    assert_eq!(serde_json::to_string(&mask).unwrap(), "[true,false,false,false]");
}
