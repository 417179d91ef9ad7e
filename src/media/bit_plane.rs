//! Reads and writes a single bit plane of a flat pixel sample buffer.
//!
//! A bit plane is the set of one same-significance bit from every sample,
//! viewed as a binary image. All operations return a new buffer, the input
//! is only borrowed for the duration of the call.

use crate::error::SoundveilError;
use crate::result::Result;

/// unsigned pixel word a bit plane can be carved out of
pub trait PlaneWord: Copy + Eq {
    const BITS: u32;

    /// the value of bit `plane`, as 0 or 1 in the word's own width
    fn plane_bit(self, plane: u32) -> Self;

    /// the word with bit `plane` cleared and replaced by `bit`
    fn with_plane_bit(self, plane: u32, bit: bool) -> Self;

    /// truthiness: any non zero plane value counts as a set bit
    fn is_one(self) -> bool;
}

impl PlaneWord for u8 {
    const BITS: u32 = u8::BITS;

    fn plane_bit(self, plane: u32) -> Self {
        (self >> plane) & 1
    }

    fn with_plane_bit(self, plane: u32, bit: bool) -> Self {
        (self & !(1 << plane)) | ((bit as u8) << plane)
    }

    fn is_one(self) -> bool {
        self != 0
    }
}

impl PlaneWord for u16 {
    const BITS: u32 = u16::BITS;

    fn plane_bit(self, plane: u32) -> Self {
        (self >> plane) & 1
    }

    fn with_plane_bit(self, plane: u32, bit: bool) -> Self {
        (self & !(1 << plane)) | ((bit as u16) << plane)
    }

    fn is_one(self) -> bool {
        self != 0
    }
}

fn ensure_plane<T: PlaneWord>(plane: u32) -> Result<()> {
    if plane >= T::BITS {
        return Err(SoundveilError::InvalidPlane {
            plane,
            bits: T::BITS,
        });
    }
    Ok(())
}

/// Extracts the `plane`-th bit plane of `buffer` as a same-length buffer of
/// 0/1 values.
pub fn get_bit_plane<T: PlaneWord>(buffer: &[T], plane: u32) -> Result<Vec<T>> {
    ensure_plane::<T>(plane)?;
    Ok(buffer.iter().map(|w| w.plane_bit(plane)).collect())
}

/// Replaces the `plane`-th bit plane of `buffer` with `plane_values`.
///
/// Any non zero plane value is treated as a set bit, so the values do not
/// have to be strictly 0/1 already.
///
/// # Panics
///
/// When `plane_values` does not have the same length as `buffer`.
pub fn set_bit_plane<T: PlaneWord>(buffer: &[T], plane: u32, plane_values: &[T]) -> Result<Vec<T>> {
    ensure_plane::<T>(plane)?;
    assert_eq!(
        buffer.len(),
        plane_values.len(),
        "plane values must cover the whole buffer"
    );

    Ok(buffer
        .iter()
        .zip(plane_values.iter())
        .map(|(word, value)| word.with_plane_bit(plane, value.is_one()))
        .collect())
}

/// Replaces only the first `changed_count` values of the `plane`-th bit plane.
///
/// Positions at and beyond `changed_count` keep the bit the buffer already
/// carries, so a caller can reveal payload in a plane incrementally without
/// disturbing positions it has not written yet. A `changed_count` beyond the
/// buffer length behaves like a full [`set_bit_plane`].
///
/// # Panics
///
/// When `plane_values` does not have the same length as `buffer`.
pub fn set_bit_plane_partial<T: PlaneWord>(
    buffer: &[T],
    plane: u32,
    plane_values: &[T],
    changed_count: usize,
) -> Result<Vec<T>> {
    ensure_plane::<T>(plane)?;
    assert_eq!(
        buffer.len(),
        plane_values.len(),
        "plane values must cover the whole buffer"
    );

    let changed = changed_count.min(buffer.len());
    let mut hybrid = plane_values.to_vec();
    for (value, word) in hybrid.iter_mut().zip(buffer.iter()).skip(changed) {
        *value = word.plane_bit(plane);
    }

    set_bit_plane(buffer, plane, &hybrid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_extract_a_plane_as_zeroes_and_ones() {
        let buffer: [u8; 4] = [0b0000_0000, 0b0100_0000, 0b1011_1111, 0b1111_1111];
        assert_eq!(get_bit_plane(&buffer, 6).unwrap(), vec![0, 1, 0, 1]);
        assert_eq!(get_bit_plane(&buffer, 7).unwrap(), vec![0, 0, 1, 1]);
    }

    #[test]
    fn it_should_set_a_plane_from_truthy_values() {
        let buffer: [u8; 3] = [0, 0xFF, 0b0010_0000];
        // 200 is not a literal bit value but still counts as 1
        let plane = set_bit_plane(&buffer, 5, &[200, 0, 1]).unwrap();
        assert_eq!(plane, vec![0b0010_0000, 0b1101_1111, 0b0010_0000]);
    }

    #[test]
    fn it_should_round_trip_set_then_get_for_every_plane() {
        let buffer: Vec<u8> = (0..=255).collect();
        let mask: Vec<u8> = (0..=255).map(|i| i % 3).collect();
        for plane in 0..u8::BITS {
            let written = set_bit_plane(&buffer, plane, &mask).unwrap();
            let read = get_bit_plane(&written, plane).unwrap();
            let expected: Vec<u8> = mask.iter().map(|v| (*v != 0) as u8).collect();
            assert_eq!(read, expected, "plane {plane} did not round trip");
        }
    }

    #[test]
    fn it_should_leave_the_tail_untouched_on_partial_updates() {
        let buffer: Vec<u8> = vec![0b1000_0000; 8];
        let values: Vec<u8> = vec![1, 1, 1, 0, 0, 1, 1, 1];

        let written = set_bit_plane_partial(&buffer, 7, &values, 4).unwrap();
        let read = get_bit_plane(&written, 7).unwrap();

        // first 4 positions follow the values, the tail keeps the buffer's plane
        assert_eq!(read, vec![1, 1, 1, 0, 1, 1, 1, 1]);
    }

    #[test]
    fn it_should_treat_a_partial_update_of_zero_positions_as_a_no_op() {
        let buffer: Vec<u8> = (100..150).collect();
        let values = vec![1u8; buffer.len()];
        let written = set_bit_plane_partial(&buffer, 3, &values, 0).unwrap();
        assert_eq!(written, buffer);
    }

    #[test]
    fn it_should_clamp_an_oversized_changed_count() {
        let buffer = vec![0u8; 4];
        let values = vec![1u8; 4];
        let full = set_bit_plane(&buffer, 0, &values).unwrap();
        let clamped = set_bit_plane_partial(&buffer, 0, &values, 100).unwrap();
        assert_eq!(clamped, full);
    }

    #[test]
    fn it_should_reject_planes_outside_the_word_width() {
        let buffer = vec![0u8; 2];
        match get_bit_plane(&buffer, 8) {
            Err(SoundveilError::InvalidPlane { plane: 8, bits: 8 }) => {}
            other => panic!("expected InvalidPlane, got {other:?}"),
        }
        assert!(set_bit_plane(&buffer, 9, &[0, 0]).is_err());

        // 16 bit words accept the wider range
        let wide = vec![0u16; 2];
        assert!(get_bit_plane(&wide, 15).is_ok());
        assert!(get_bit_plane(&wide, 16).is_err());
    }
}
