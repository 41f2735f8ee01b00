//! # Stegano MP3 Core API
//!
//! Hides one secret file in the ancillary bytes of MPEG-1 Layer III frames,
//! the bytes a frame carries behind its audio data. The compressed audio itself
//! is never touched.
//!
//! The plain functions work on byte slices:
//! - [`embed`] hides a secret and returns a [`StegoReport`]
//! - [`extract`] recovers the [`SecretFile`] with the same [`Configuration`]
//! - [`scan`] lists the frames and their ancillary bytes
//!
//! The [`api`] module offers builders that work on files.
//!
//! # Usage Examples
//!
//! ## Hide and unveil in memory
//!
//! ```rust
//! use stegano_mp3_core::{embed, extract, Configuration};
//!
//! // 20 silent mono frames, 32 kbps at 48 kHz
//! let mut frame = vec![0u8; 96];
//! frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x14, 0xC0]);
//! let carrier = frame.repeat(20);
//!
//! let config = Configuration::new(true, true, 2, "SuperSecret42")?;
//! let report = embed(&carrier, b"Hello, World!", "hello", "txt", &config)?;
//! assert!(report.bits_embedded <= report.capacity_bits);
//!
//! let secret = extract(&report.result, &config)?;
//! assert_eq!(secret.data, b"Hello, World!");
//! assert_eq!(secret.file_name()?, "hello.txt");
//! # Ok::<(), stegano_mp3_core::SteganoError>(())
//! ```
//!
//! ## Hide a file inside an MP3 file
//!
//! ```rust
//! use stegano_mp3_core::Configuration;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let mut frame = vec![0u8; 96];
//! frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x14, 0xC0]);
//! let carrier = temp_dir.path().join("carrier.mp3");
//! std::fs::write(&carrier, frame.repeat(200)).expect("Failed to write carrier");
//!
//! stegano_mp3_core::api::hide::prepare()
//!     .with_file("Cargo.toml")        // will hide this file inside the audio
//!     .with_configuration(Configuration::new(true, false, 1, "SuperSecret42").unwrap())
//!     .with_audio(&carrier)
//!     .with_output(temp_dir.path().join("audio-with-a-file-inside.mp3"))
//!     .execute()
//!     .expect("Failed to hide file in audio");
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
// clippy::cast_lossless,
// clippy::cognitive_complexity,
// clippy::match_bool,
// clippy::missing_panics_doc,
// clippy::option_if_let_else,
    clippy::redundant_else,
// clippy::use_self,
)]

pub mod message;
pub use message::*;

pub mod raw_message;
pub use raw_message::*;

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod quality;
pub mod result;

pub use crate::error::SteganoError;
pub use crate::media::mp3::{
    embed, extract, extract_raw, scan, AncillaryStrategy, FrameDescriptor, FrameTable,
};
pub use crate::media::{Configuration, ConfigurationBuilder, Key, LsbBits, Mp3Audio, StegoReport};
pub use crate::result::Result;
