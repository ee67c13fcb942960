// tagtune/src/protocol/mod.rs

//! Command protocol of the serial audio player (DFPlayer Mini command set).
//!
//! Every command is a fixed 10-byte frame:
//! `7E FF 06 CMD 00 PARAM_HI PARAM_LO CHK_HI CHK_LO EF`. Encoding is pure and
//! infallible; writing the bytes and honoring settle delays is the job of
//! [`crate::player::AudioPlayer`].

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;

pub use checksum::{checksum, payload_sum, verify};
pub use codec::{decode_command_frame, encode, encode_command_frame};
pub use commands::Command;
pub use frame::Frame;
