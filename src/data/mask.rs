use crate::error::{MaskError, Result};
use crate::types::Logical;
use polars::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sequence of booleans, one per position of the sequence it was
/// derived from.
///
/// Nulls are folded to `false` on construction, so every position always
/// holds a definite value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<bool>", into = "Vec<bool>")]
pub struct BooleanMask {
    values: BooleanChunked,
}

impl BooleanMask {
    pub fn new(values: &[bool]) -> Self {
        Self {
            values: BooleanChunked::from_slice("mask".into(), values),
        }
    }

    pub fn from_chunked(values: BooleanChunked) -> Self {
        if values.null_count() == 0 {
            return Self { values };
        }
        let filled = BooleanChunked::from_iter_values(
            values.name().clone(),
            (&values).into_iter().map(|v| v.unwrap_or(false)),
        );
        Self { values: filled }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<bool> {
        if idx >= self.len() {
            return None;
        }
        Some(self.values.get(idx).unwrap_or(false))
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (&self.values).into_iter().map(|v| v.unwrap_or(false))
    }

    pub fn to_vec(&self) -> Vec<bool> {
        self.iter().collect()
    }

    pub fn as_chunked(&self) -> &BooleanChunked {
        &self.values
    }

    pub fn into_series(self) -> Series {
        self.values.into_series()
    }

    pub fn count_true(&self) -> usize {
        self.iter().filter(|&bit| bit).count()
    }

    pub fn all(&self) -> bool {
        self.iter().all(|bit| bit)
    }

    pub fn any(&self) -> bool {
        self.iter().any(|bit| bit)
    }
}

pub(crate) fn check_shape(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(MaskError::ShapeMismatch { left, right });
    }
    Ok(())
}

/// Elementwise `a AND b`. Both masks must have the same length.
pub fn logical_and(a: &BooleanMask, b: &BooleanMask) -> Result<BooleanMask> {
    combine(Logical::And, a, b)
}

pub fn logical_or(a: &BooleanMask, b: &BooleanMask) -> Result<BooleanMask> {
    combine(Logical::Or, a, b)
}

pub fn logical_xor(a: &BooleanMask, b: &BooleanMask) -> Result<BooleanMask> {
    combine(Logical::Xor, a, b)
}

pub fn logical_not(a: &BooleanMask) -> BooleanMask {
    BooleanMask::from_chunked(!a.as_chunked())
}

/// Combines two masks position by position. No broadcasting: a length-1
/// operand against a longer one is a shape mismatch like any other.
pub fn combine(op: Logical, a: &BooleanMask, b: &BooleanMask) -> Result<BooleanMask> {
    check_shape(a.len(), b.len())?;
    let (left, right) = (a.as_chunked(), b.as_chunked());
    let values = match op {
        Logical::And => left & right,
        Logical::Or => left | right,
        Logical::Xor => left ^ right,
    };
    Ok(BooleanMask::from_chunked(values))
}

/// Same as [`combine`], but evaluates `chunk_size` positions at a time on
/// the rayon pool.
pub fn combine_chunked(
    op: Logical,
    a: &BooleanMask,
    b: &BooleanMask,
    chunk_size: usize,
) -> Result<BooleanMask> {
    check_shape(a.len(), b.len())?;
    if chunk_size == 0 {
        return Err(MaskError::Configuration(
            "Chunk size must be at least 1".to_string(),
        ));
    }

    let left = a.to_vec();
    let right = b.to_vec();
    let values: Vec<bool> = left
        .par_chunks(chunk_size)
        .zip(right.par_chunks(chunk_size))
        .flat_map_iter(|(l, r)| l.iter().zip(r).map(move |(x, y)| op.apply(*x, *y)))
        .collect();

    Ok(BooleanMask::new(&values))
}

impl PartialEq for BooleanMask {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for BooleanMask {}

impl From<Vec<bool>> for BooleanMask {
    fn from(values: Vec<bool>) -> Self {
        BooleanMask::new(&values)
    }
}

impl From<&[bool]> for BooleanMask {
    fn from(values: &[bool]) -> Self {
        BooleanMask::new(values)
    }
}

impl From<BooleanMask> for Vec<bool> {
    fn from(mask: BooleanMask) -> Self {
        mask.to_vec()
    }
}

impl FromIterator<bool> for BooleanMask {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let values: Vec<bool> = iter.into_iter().collect();
        BooleanMask::new(&values)
    }
}

impl fmt::Display for BooleanMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self
            .iter()
            .map(|bit| format!("{:>5}", if bit { "True" } else { "False" }))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "array([{}])", items)
    }
}
