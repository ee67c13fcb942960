// tagtune/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;

/// Encode a Command into its frame. Synchronous and instantaneous; any
/// settle delay the command needs is the caller's business.
pub fn encode(command: &Command) -> Frame {
    Frame::encode(command)
}

/// Encode a Command into the raw bytes to put on the wire.
pub fn encode_command_frame(command: &Command) -> Vec<u8> {
    encode(command).as_bytes().to_vec()
}

/// Verify a full wire frame and return the command it carries.
pub fn decode_command_frame(bytes: &[u8]) -> Result<Command> {
    Frame::decode(bytes)?.to_command()
}
