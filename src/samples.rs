//! Bit-exact re-interpretation of audio samples between the 8 bit signed,
//! 8 bit unsigned and 16 bit signed representations.
//!
//! The carrier frame stores unsigned bytes, microphones deliver signed 16 bit
//! samples. Every conversion in here is bijective over the full domain of its
//! input type, so a recording survives the trip into a frame and back without
//! losing a single amplitude value.

use byteorder::{BigEndian, ByteOrder};

use crate::error::SoundveilError;
use crate::result::Result;

/// the closed set of sample representations the converter understands
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SampleType {
    I8,
    U8,
    I16,
}

impl SampleType {
    /// Maps capture metadata (bits per sample plus signedness) onto one of the
    /// supported representations.
    ///
    /// Anything outside the supported set, for example 24 bit samples,
    /// is rejected with [`SoundveilError::UnsupportedType`].
    pub fn from_spec(bits: u16, signed: bool) -> Result<Self> {
        match (bits, signed) {
            (8, true) => Ok(Self::I8),
            (8, false) => Ok(Self::U8),
            (16, true) => Ok(Self::I16),
            _ => Err(SoundveilError::UnsupportedType { bits, signed }),
        }
    }
}

/// a block of audio samples in one of the supported representations
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Samples {
    I8(Vec<i8>),
    U8(Vec<u8>),
    I16(Vec<i16>),
}

impl Samples {
    pub fn sample_type(&self) -> SampleType {
        match self {
            Samples::I8(_) => SampleType::I8,
            Samples::U8(_) => SampleType::U8,
            Samples::I16(_) => SampleType::I16,
        }
    }

    /// number of samples, regardless of their width
    pub fn len(&self) -> usize {
        match self {
            Samples::I8(v) => v.len(),
            Samples::U8(v) => v.len(),
            Samples::I16(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_i8(self) -> Option<Vec<i8>> {
        match self {
            Samples::I8(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_u8(self) -> Option<Vec<u8>> {
        match self {
            Samples::U8(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_i16(self) -> Option<Vec<i16>> {
        match self {
            Samples::I16(v) => Some(v),
            _ => None,
        }
    }

    /// Re-interprets the samples as `to`.
    ///
    /// Conversions between non adjacent representations chain through the
    /// signed 8 bit form, e.g. `U8 -> I16` goes via `I8`. Converting to the
    /// type the samples already have is a no-op.
    ///
    /// Note that `I8 -> I16` recombines *pairs* of bytes, so a trailing odd
    /// byte is dropped, see [`int8_to_int16`].
    pub fn convert(self, to: SampleType) -> Samples {
        match (self, to) {
            (same @ Samples::I8(_), SampleType::I8)
            | (same @ Samples::U8(_), SampleType::U8)
            | (same @ Samples::I16(_), SampleType::I16) => same,

            (Samples::I8(v), SampleType::U8) => Samples::U8(int8_to_uint8(&v)),
            (Samples::I8(v), SampleType::I16) => Samples::I16(int8_to_int16(&v)),
            (Samples::U8(v), SampleType::I8) => Samples::I8(uint8_to_int8(&v)),
            (Samples::I16(v), SampleType::I8) => Samples::I8(int16_to_int8(&v)),

            // non adjacent pairs pivot through the signed 8 bit form
            (Samples::U8(v), SampleType::I16) => {
                Samples::I8(uint8_to_int8(&v)).convert(SampleType::I16)
            }
            (Samples::I16(v), SampleType::U8) => {
                Samples::I8(int16_to_int8(&v)).convert(SampleType::U8)
            }
        }
    }
}

/// shifts the domain `[-128, 127]` to `[0, 255]`, inverse of [`uint8_to_int8`]
pub fn int8_to_uint8(samples: &[i8]) -> Vec<u8> {
    samples
        .iter()
        .map(|s| (*s as i16 - i8::MIN as i16) as u8)
        .collect()
}

/// shifts the domain `[0, 255]` to `[-128, 127]`, inverse of [`int8_to_uint8`]
pub fn uint8_to_int8(samples: &[u8]) -> Vec<i8> {
    samples
        .iter()
        .map(|s| (*s as i16 + i8::MIN as i16) as i8)
        .collect()
}

/// Splits every 16 bit sample into two 8 bit values, high byte first.
///
/// The output is twice as long as the input and feeds [`int8_to_int16`]
/// back to the original values exactly.
pub fn int16_to_int8(samples: &[i16]) -> Vec<i8> {
    let mut bytes = vec![0u8; samples.len() * 2];
    BigEndian::write_i16_into(samples, &mut bytes);
    bytes.into_iter().map(|b| b as i8).collect()
}

/// Recombines consecutive pairs of 8 bit values, high byte first, into
/// 16 bit samples.
///
/// A trailing byte that does not complete a pair cannot form a sample and
/// is dropped. That is a documented truncation, not a failure.
pub fn int8_to_int16(samples: &[i8]) -> Vec<i16> {
    let whole = samples.len() / 2 * 2;
    let bytes: Vec<u8> = samples[..whole].iter().map(|b| *b as u8).collect();
    let mut out = vec![0i16; whole / 2];
    BigEndian::read_i16_into(&bytes, &mut out);
    out
}
