// tagtune/src/protocol/frame.rs

use crate::constants::{
    PLAYER_END, PLAYER_FRAME_LEN, PLAYER_NO_FEEDBACK, PLAYER_PAYLOAD_LEN, PLAYER_START,
    PLAYER_VERSION,
};
use crate::protocol::checksum::checksum;
use crate::protocol::commands::Command;
use crate::{Error, Result};

/// Player command frame, immutable once built.
/// Format: [Start] [Ver] [Len] [Cmd] [Feedback] [ParamHi] [ParamLo] [ChkHi] [ChkLo] [End]
/// Start: 0x7E, Ver: 0xFF, Len: 0x06, Feedback: 0x00, End: 0xEF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame([u8; PLAYER_FRAME_LEN]);

impl Frame {
    /// Build the frame for a raw command code and parameter.
    pub fn new(command_code: u8, parameter: u16) -> Self {
        let [param_hi, param_lo] = parameter.to_be_bytes();
        let payload = [
            PLAYER_VERSION,
            PLAYER_PAYLOAD_LEN,
            command_code,
            PLAYER_NO_FEEDBACK,
            param_hi,
            param_lo,
        ];
        let [chk_hi, chk_lo] = checksum(&payload).to_be_bytes();
        Self([
            PLAYER_START,
            payload[0],
            payload[1],
            payload[2],
            payload[3],
            payload[4],
            payload[5],
            chk_hi,
            chk_lo,
            PLAYER_END,
        ])
    }

    /// Encode a Command into its wire frame. Total; arguments are clamped.
    pub fn encode(command: &Command) -> Self {
        Self::new(command.command_code(), command.parameter())
    }

    /// Parse and verify a 10-byte frame. Used by mocks and diagnostics; the
    /// player itself never sends frames back that we read.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; PLAYER_FRAME_LEN] =
            bytes.try_into().map_err(|_| Error::InvalidLength {
                expected: PLAYER_FRAME_LEN,
                actual: bytes.len(),
            })?;

        if raw[0] != PLAYER_START {
            return Err(Error::FrameFormat("invalid start marker".into()));
        }
        if raw[9] != PLAYER_END {
            return Err(Error::FrameFormat("invalid end marker".into()));
        }
        if raw[1] != PLAYER_VERSION || raw[2] != PLAYER_PAYLOAD_LEN {
            return Err(Error::FrameFormat("unsupported version or length".into()));
        }

        let frame = Self(raw);
        let expected = checksum(frame.payload());
        let actual = frame.checksum();
        if expected != actual {
            return Err(Error::ChecksumMismatch { expected, actual });
        }
        Ok(frame)
    }

    pub fn as_bytes(&self) -> &[u8; PLAYER_FRAME_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; PLAYER_FRAME_LEN] {
        self.0
    }

    /// The six checksummed bytes (version through parameter low byte).
    pub fn payload(&self) -> &[u8] {
        &self.0[1..7]
    }

    pub fn command_code(&self) -> u8 {
        self.0[3]
    }

    pub fn parameter(&self) -> u16 {
        u16::from_be_bytes([self.0[5], self.0[6]])
    }

    pub fn checksum(&self) -> u16 {
        u16::from_be_bytes([self.0[7], self.0[8]])
    }

    /// Interpret the frame as a known Command.
    pub fn to_command(&self) -> Result<Command> {
        Command::from_wire(self.command_code(), self.parameter())
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(&self.0)
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&Command> for Frame {
    fn from(command: &Command) -> Self {
        Self::encode(command)
    }
}
