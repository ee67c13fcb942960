// tagtune/src/protocol/commands.rs

use std::time::Duration;

use crate::constants::{
    MAX_VOLUME, MIN_TRACK, MIN_VOLUME, PLAY_TRACK_SETTLE_MS, PLAYER_CMD_PLAY_TRACK,
    PLAYER_CMD_RESET, PLAYER_CMD_SET_VOLUME, RESET_SETTLE_MS, SET_VOLUME_SETTLE_MS,
};
use crate::{Error, Result};

/// High-level player command. Arguments are signed so out-of-range requests
/// can be expressed; they are clamped when the wire parameter is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Reset the module (0x0C)
    Reset,
    /// Set output volume (0x06), clamped to 0..=30
    SetVolume(i32),
    /// Play a track from the root folder by global index (0x03), minimum 1
    PlayTrack(i32),
}

impl Command {
    /// Return the command code of the player command set.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Reset => PLAYER_CMD_RESET,
            Self::SetVolume(_) => PLAYER_CMD_SET_VOLUME,
            Self::PlayTrack(_) => PLAYER_CMD_PLAY_TRACK,
        }
    }

    /// The 16-bit parameter carried on the wire, after clamping.
    pub fn parameter(&self) -> u16 {
        match *self {
            Self::Reset => 0,
            Self::SetVolume(level) => clamp_volume(level),
            Self::PlayTrack(index) => clamp_track(index),
        }
    }

    /// How long the device needs after this command before it accepts the
    /// next one. Encoding never waits; the caller does.
    pub fn default_settle_delay(&self) -> Duration {
        let ms = match self {
            Self::Reset => RESET_SETTLE_MS,
            Self::SetVolume(_) => SET_VOLUME_SETTLE_MS,
            Self::PlayTrack(_) => PLAY_TRACK_SETTLE_MS,
        };
        crate::utils::ms(ms)
    }

    /// Same command with its argument replaced by the clamped wire value.
    pub fn normalized(&self) -> Self {
        match *self {
            Self::Reset => Self::Reset,
            Self::SetVolume(_) => Self::SetVolume(i32::from(self.parameter())),
            Self::PlayTrack(_) => Self::PlayTrack(i32::from(self.parameter())),
        }
    }

    /// Rebuild a command from a wire code and parameter.
    pub fn from_wire(code: u8, parameter: u16) -> Result<Self> {
        let cmd = match code {
            PLAYER_CMD_RESET => Self::Reset,
            PLAYER_CMD_SET_VOLUME => Self::SetVolume(i32::from(parameter)),
            PLAYER_CMD_PLAY_TRACK => Self::PlayTrack(i32::from(parameter)),
            other => return Err(Error::UnknownCommand(other)),
        };
        Ok(cmd)
    }
}

/// Clamp a volume request into 0..=30.
pub fn clamp_volume(level: i32) -> u16 {
    // the range fits u16, so the cast is lossless
    level.clamp(MIN_VOLUME, MAX_VOLUME) as u16
}

/// Clamp a track request to at least 1. Values beyond the 16-bit field
/// saturate at 0xFFFF.
pub fn clamp_track(index: i32) -> u16 {
    u16::try_from(index.max(MIN_TRACK)).unwrap_or(u16::MAX)
}
