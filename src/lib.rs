//! # Soundveil Core API
//!
//! Embeds a continuously captured audio stream into the bit planes of video
//! frames, and recovers it again. The building blocks are
//! - [`samples`] for bit-exact sample width conversion (i16, i8, u8)
//! - [`media::bit_plane`] for reading and writing one bit plane of a pixel buffer
//! - [`media::frame`] for embedding a byte message across a whole RGB frame
//! - [`stream`] for reconciling the live capture stream with the fixed
//!   per-frame carrier capacity
//!
//! Device access, WAV/PNG file I/O, playback and preview are the job of
//! external collaborators; this crate only consumes their pixel buffers and
//! sample blocks by value.
//!
//! # Usage Examples
//!
//! ## Hide a chunk of audio inside a frame
//!
//! ```rust
//! use soundveil::media::frame;
//! use soundveil::samples::{SampleType, Samples};
//!
//! let carrier = image::RgbImage::new(32, 32);
//! let audio: Vec<i16> = (0..96i16).map(|i| i * 50 - 2400).collect();
//!
//! let payload = Samples::I16(audio.clone())
//!     .convert(SampleType::U8)
//!     .into_u8()
//!     .unwrap();
//!
//! let secret = frame::encode(&carrier, 6, &payload).unwrap();
//! let unveiled = frame::decode(&secret, 6).unwrap();
//!
//! let recovered = Samples::U8(unveiled[..payload.len()].to_vec())
//!     .convert(SampleType::I16)
//!     .into_i16()
//!     .unwrap();
//! assert_eq!(recovered, audio);
//! ```
//!
//! ## Buffer a live capture stream frame by frame
//!
//! ```rust
//! use soundveil::media::frame;
//! use soundveil::stream::{BlockQueue, CarrierBuffer};
//!
//! let carrier = image::RgbImage::new(32, 32);
//!
//! // the capture callback pushes blocks, the frame loop drains them per tick
//! let queue = BlockQueue::new();
//! queue.push(vec![100, -100, 32767, -32768]);
//!
//! let mut buffer = CarrierBuffer::new(frame::capacity_bytes(&carrier));
//! buffer.append(&queue.drain_concat()).unwrap();
//! assert_eq!(buffer.cursor(), 8); // 4 samples became 8 carrier bytes
//! ```

pub mod error;
pub mod media;
pub mod result;
pub mod samples;
pub mod stream;

pub use crate::error::SoundveilError;
pub use crate::result::Result;
