//! Serialization document and the special-value codec.
//!
//! IEEE specials do not survive every transport (JSON has no `Infinity` or
//! `NaN`), so the wire form carries a finite payload plus two offset lists
//! that restore the specials on decode:
//!
//! * `+Inf` is stored as `f64::MAX` with its offset in `inf`,
//! * `-Inf` is stored as `-f64::MAX` with its negated offset in `inf`,
//! * `NaN` is stored as `0.0` with its offset in `nan`.
//!
//! Decoding overwrites the listed offsets, so the round trip is lossless for
//! every array, including ones that genuinely contain `±f64::MAX` (those are
//! simply not listed). Two quirks of the offset scheme are kept as is: a
//! reader that ignores the lists cannot tell a placeholder `±f64::MAX` from
//! a genuine one, and `-Inf` at offset zero encodes as `0` in `inf`, which
//! decodes as `+Inf`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::array::row_major_strides;
use crate::{ArrayError, NArray, Result};

/// Wire form of an [`NArray`]: shape metadata, a finite payload, and the
/// offset lists restoring IEEE specials. `strides` is redundant with `shape`
/// and is validated, not trusted, on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayDocument {
    pub rank: usize,
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
    pub strides: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inf: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nan: Vec<usize>,
}

/// Replace specials with finite placeholders and record their offsets.
fn encode_specials(data: &[f64]) -> (Vec<f64>, Vec<i64>, Vec<usize>) {
    let mut payload = Vec::with_capacity(data.len());
    let mut inf = Vec::new();
    let mut nan = Vec::new();
    for (i, &v) in data.iter().enumerate() {
        if v == f64::INFINITY {
            payload.push(f64::MAX);
            inf.push(i as i64);
        } else if v == f64::NEG_INFINITY {
            payload.push(-f64::MAX);
            inf.push(-(i as i64));
        } else if v.is_nan() {
            payload.push(0.0);
            nan.push(i);
        } else {
            payload.push(v);
        }
    }
    (payload, inf, nan)
}

/// Restore specials at the listed offsets. The sign of an `inf` entry is the
/// sign of the infinity; offset zero therefore always restores `+Inf`.
fn decode_specials(data: &mut [f64], inf: &[i64], nan: &[usize]) {
    for &o in inf {
        if o >= 0 {
            data[o as usize] = f64::INFINITY;
        } else {
            data[(-o) as usize] = f64::NEG_INFINITY;
        }
    }
    for &i in nan {
        data[i] = f64::NAN;
    }
}

impl NArray {
    /// Build the wire document for this array.
    pub fn to_document(&self) -> ArrayDocument {
        let (data, inf, nan) = encode_specials(self.data());
        ArrayDocument {
            rank: self.rank(),
            shape: self.shape().to_vec(),
            data,
            strides: self.strides().to_vec(),
            inf,
            nan,
        }
    }

    /// Rebuild an array from a wire document, validating every field before
    /// restoring the specials.
    ///
    /// # Errors
    /// Fails when `rank` disagrees with `shape`, `data` does not hold
    /// exactly one value per cell, `strides` is not the row-major stride
    /// vector of `shape`, or an offset list points outside `data`.
    pub fn from_document(doc: ArrayDocument) -> Result<NArray> {
        let ArrayDocument {
            rank,
            shape,
            mut data,
            strides,
            inf,
            nan,
        } = doc;
        if rank != shape.len() {
            return Err(ArrayError::RankMismatch(shape.len(), rank));
        }
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(ArrayError::LengthMismatch {
                len: data.len(),
                shape,
            });
        }
        if strides != row_major_strides(&shape) {
            return Err(ArrayError::BadStrides { strides, shape });
        }
        for &o in &inf {
            if o.unsigned_abs() as usize >= data.len() {
                return Err(ArrayError::BadOffset {
                    offset: o,
                    len: data.len(),
                });
            }
        }
        for &i in &nan {
            if i >= data.len() {
                return Err(ArrayError::BadOffset {
                    offset: i as i64,
                    len: data.len(),
                });
            }
        }
        decode_specials(&mut data, &inf, &nan);
        NArray::from_vec(&shape, data)
    }
}

impl Serialize for NArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let doc = ArrayDocument::deserialize(deserializer)?;
        NArray::from_document(doc).map_err(D::Error::custom)
    }
}
