//! Embeds a byte message into one bit plane of a whole RGB frame and
//! extracts it again.
//!
//! The message is unpacked most significant bit first and distributed
//! round-robin across the color channels: bit `i` lands in channel `i % 3`
//! at flat position `i / 3` of that channel. Capacity is always a whole-byte
//! multiple, a trailing partial byte of bit capacity is never used.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use image::{Pixel, Rgb, RgbImage};
use log::debug;

use crate::media::bit_plane;
use crate::result::Result;

const CHANNELS: usize = Rgb::<u8>::CHANNEL_COUNT as usize;

/// whole-byte payload capacity of one frame at a single bit plane, in bits
pub fn capacity_bits(image: &RgbImage) -> usize {
    image.as_raw().len() / 8 * 8
}

/// whole-byte payload capacity of one frame at a single bit plane, in bytes
pub fn capacity_bytes(image: &RgbImage) -> usize {
    capacity_bits(image) / 8
}

/// Hides `message` in the `plane`-th bit plane of `image` and returns the
/// new frame.
///
/// A message larger than [`capacity_bits`] is silently clipped to capacity;
/// capacity planning is the caller's job. Color channels beyond the last
/// message bit keep their original plane content.
pub fn encode(image: &RgbImage, plane: u32, message: &[u8]) -> Result<RgbImage> {
    let max_bits = capacity_bits(image);

    // unpack the message, most significant bit first, clipped to capacity
    let mut bits: Vec<u8> = Vec::with_capacity(max_bits.min(message.len() * 8));
    let mut reader = BitReader::endian(Cursor::new(message), BigEndian);
    while bits.len() < max_bits {
        match reader.read_bit() {
            Ok(bit) => bits.push(bit as u8),
            Err(_) => break,
        }
    }
    if message.len() * 8 > max_bits {
        debug!(
            "message of {} bits exceeds the frame capacity of {max_bits} bits, clipping",
            message.len() * 8
        );
    }

    let raw = image.as_raw();
    let mut encoded = image.clone();
    let samples: &mut [u8] = &mut encoded;

    for channel in 0..CHANNELS {
        let channel_samples: Vec<u8> = raw[channel..].iter().step_by(CHANNELS).copied().collect();
        let assigned: Vec<u8> = bits.iter().skip(channel).step_by(CHANNELS).copied().collect();

        let mut plane_values = vec![0u8; channel_samples.len()];
        plane_values[..assigned.len()].copy_from_slice(&assigned);
        let written =
            bit_plane::set_bit_plane_partial(&channel_samples, plane, &plane_values, assigned.len())?;

        for (i, value) in written.into_iter().enumerate() {
            samples[i * CHANNELS + channel] = value;
        }
    }

    Ok(encoded)
}

/// Extracts the whole-byte message hidden in the `plane`-th bit plane of
/// `image`.
///
/// The full plane is always read, so the result has exactly
/// [`capacity_bytes`] bytes; trailing bits that do not complete a byte are
/// dropped. Knowing where the payload ends is the caller's job.
pub fn decode(image: &RgbImage, plane: u32) -> Result<Vec<u8>> {
    let raw = image.as_raw();
    let max_bits = capacity_bits(image);

    let mut planes: Vec<Vec<u8>> = Vec::with_capacity(CHANNELS);
    for channel in 0..CHANNELS {
        let channel_samples: Vec<u8> = raw[channel..].iter().step_by(CHANNELS).copied().collect();
        planes.push(bit_plane::get_bit_plane(&channel_samples, plane)?);
    }

    // re-interleave the channel planes position by position, in the same
    // cyclic order encode used, and clip to whole bytes
    let per_channel = planes.first().map_or(0, Vec::len);
    let mut message = Vec::with_capacity(max_bits / 8);
    {
        let mut writer = BitWriter::endian(&mut message, BigEndian);
        let mut written = 0usize;
        'plane: for position in 0..per_channel {
            for channel_plane in planes.iter() {
                if written == max_bits {
                    break 'plane;
                }
                writer.write_bit(channel_plane[position] != 0)?;
                written += 1;
            }
        }
    }

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SoundveilError;
    use crate::test_utils::prepare_linear_rgb_image;

    #[test]
    fn it_should_round_trip_a_message_that_exactly_fills_the_frame() {
        let image = prepare_linear_rgb_image(8, 8);
        let capacity = capacity_bytes(&image);
        assert_eq!(capacity, 24); // 8 * 8 * 3 = 192 samples -> 24 bytes

        let message: Vec<u8> = (0..capacity as u8).map(|i| i.wrapping_mul(11)).collect();
        for plane in [0, 3, 7] {
            let encoded = encode(&image, plane, &message).unwrap();
            assert_eq!(decode(&encoded, plane).unwrap(), message);
        }
    }

    #[test]
    fn it_should_clip_an_oversized_message_instead_of_failing() {
        let image = prepare_linear_rgb_image(2, 4);
        let capacity = capacity_bytes(&image);
        assert_eq!(capacity, 3); // 24 samples -> 24 bits -> 3 bytes

        let message: Vec<u8> = vec![0xDE, 0xAD, 0xBE, 0xEF, 0x42];
        let encoded = encode(&image, 6, &message).unwrap();
        assert_eq!(decode(&encoded, 6).unwrap(), message[..capacity]);
    }

    #[test]
    fn it_should_leave_samples_beyond_the_message_untouched() {
        let image = prepare_linear_rgb_image(8, 8);
        let encoded = encode(&image, 0, &[0xFF]).unwrap();

        // 8 bits spread round-robin touch the first 3 positions of channels
        // 0 and 1 and the first 2 of channel 2; everything after stays put
        let raw = image.as_raw();
        let written = encoded.as_raw();
        assert_ne!(raw[..8], written[..8]);
        assert_eq!(raw[8..], written[8..]);
    }

    #[test]
    fn it_should_distribute_bits_round_robin_across_channels() {
        // all-zero frame, message 0b10110100: bit i goes to channel i % 3
        let image = RgbImage::new(4, 4);
        let encoded = encode(&image, 0, &[0b1011_0100]).unwrap();

        let raw = encoded.as_raw();
        assert_eq!(&raw[..8], &[1, 0, 1, 1, 0, 1, 0, 0]);
        assert!(raw[8..].iter().all(|s| *s == 0));
    }

    #[test]
    fn it_should_only_touch_the_requested_plane() {
        let image = prepare_linear_rgb_image(8, 8);
        let message = vec![0b1010_1010; capacity_bytes(&image)];
        let encoded = encode(&image, 5, &message).unwrap();

        for (before, after) in image.as_raw().iter().zip(encoded.as_raw().iter()) {
            assert_eq!(before & !(1 << 5), after & !(1 << 5));
        }
    }

    #[test]
    fn it_should_reject_planes_outside_the_sample_width() {
        let image = prepare_linear_rgb_image(2, 2);
        match encode(&image, 8, &[1]) {
            Err(SoundveilError::InvalidPlane { plane: 8, bits: 8 }) => {}
            other => panic!("expected InvalidPlane, got {other:?}"),
        }
        assert!(decode(&image, 8).is_err());
    }
}
