// tagtune/src/config.rs

//! Runtime configuration passed into the player, reader and loop.
//!
//! Everything that used to be a module-level constant on the device
//! (volume, serial ports, timing) lives in one explicit `Config` value.

use std::time::Duration;

use crate::constants::{
    DEFAULT_DEBOUNCE_PAUSE_MS, DEFAULT_POLL_TIMEOUT_MS, DEFAULT_VOLUME, MAX_ADDRESSABLE_TRACK,
    MAX_VOLUME, PLAY_TRACK_SETTLE_MS, PLAYER_BAUD_RATE, PLAYER_BOOT_DELAY_MS, PN532_BAUD_RATE,
    RESET_SETTLE_MS, SET_VOLUME_SETTLE_MS,
};
use crate::protocol::Command;
use crate::types::{TagId, TrackMap};
use crate::utils::ms;
use crate::{Error, Result};

/// Settle delay per command kind, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SettleDelays {
    pub reset_ms: u64,
    pub set_volume_ms: u64,
    pub play_track_ms: u64,
}

impl Default for SettleDelays {
    fn default() -> Self {
        Self {
            reset_ms: RESET_SETTLE_MS,
            set_volume_ms: SET_VOLUME_SETTLE_MS,
            play_track_ms: PLAY_TRACK_SETTLE_MS,
        }
    }
}

impl SettleDelays {
    pub fn for_command(&self, command: &Command) -> Duration {
        match command {
            Command::Reset => ms(self.reset_ms),
            Command::SetVolume(_) => ms(self.set_volume_ms),
            Command::PlayTrack(_) => ms(self.play_track_ms),
        }
    }
}

/// Serial link settings (device path and baud rate; always 8N1).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkConfig {
    pub path: String,
    pub baud_rate: u32,
}

impl LinkConfig {
    pub fn new(path: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            path: path.into(),
            baud_rate,
        }
    }

    /// Player default: 9600 baud
    pub fn player(path: impl Into<String>) -> Self {
        Self::new(path, PLAYER_BAUD_RATE)
    }

    /// PN532 HSU default: 115200 baud
    pub fn pn532(path: impl Into<String>) -> Self {
        Self::new(path, PN532_BAUD_RATE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub track_map: TrackMap,
    /// Volume applied at power-on (0..=30)
    pub default_volume: u8,
    /// Upper bound for a single reader poll
    pub poll_timeout_ms: u64,
    /// Pause after every poll cycle
    pub debounce_pause_ms: u64,
    /// Wait after power-up before the first player command
    pub boot_delay_ms: u64,
    pub settle: SettleDelays,
    pub player_link: LinkConfig,
    pub reader_link: LinkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            track_map: TrackMap::new(),
            default_volume: DEFAULT_VOLUME,
            poll_timeout_ms: DEFAULT_POLL_TIMEOUT_MS,
            debounce_pause_ms: DEFAULT_DEBOUNCE_PAUSE_MS,
            boot_delay_ms: PLAYER_BOOT_DELAY_MS,
            settle: SettleDelays::default(),
            player_link: LinkConfig::player("/dev/ttyS0"),
            reader_link: LinkConfig::pn532("/dev/ttyUSB0"),
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn poll_timeout(&self) -> Duration {
        ms(self.poll_timeout_ms)
    }

    pub fn debounce_pause(&self) -> Duration {
        ms(self.debounce_pause_ms)
    }

    pub fn boot_delay(&self) -> Duration {
        ms(self.boot_delay_ms)
    }

    /// Check the invariants the builder enforces. Useful for configs that
    /// were deserialized rather than built.
    pub fn validate(&self) -> Result<()> {
        if i32::from(self.default_volume) > MAX_VOLUME {
            return Err(Error::InvalidConfig(format!(
                "default volume {} out of range 0..={}",
                self.default_volume, MAX_VOLUME
            )));
        }
        if self.poll_timeout_ms == 0 {
            return Err(Error::InvalidConfig("poll timeout must be non-zero".into()));
        }
        for (tag, track) in self.track_map.iter() {
            if !(1..=MAX_ADDRESSABLE_TRACK).contains(&track) {
                return Err(Error::InvalidConfig(format!(
                    "track {} for tag {} out of range 1..={}",
                    track, tag, MAX_ADDRESSABLE_TRACK
                )));
            }
        }
        Ok(())
    }
}

/// Helper to construct a validated Config.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
    tracks: Vec<(TagId, u16)>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a tag to a track index
    pub fn map_tag(mut self, tag: TagId, track: u16) -> Self {
        self.tracks.push((tag, track));
        self
    }

    /// Map a tag given as hex (as printed in the logs) to a track index
    pub fn map_hex(self, hex: &str, track: u16) -> Result<Self> {
        let tag = hex.parse()?;
        Ok(self.map_tag(tag, track))
    }

    pub fn default_volume(mut self, volume: u8) -> Self {
        self.config.default_volume = volume;
        self
    }

    pub fn poll_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.poll_timeout_ms = timeout_ms;
        self
    }

    pub fn debounce_pause_ms(mut self, pause_ms: u64) -> Self {
        self.config.debounce_pause_ms = pause_ms;
        self
    }

    pub fn boot_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.boot_delay_ms = delay_ms;
        self
    }

    pub fn settle(mut self, settle: SettleDelays) -> Self {
        self.config.settle = settle;
        self
    }

    pub fn player_link(mut self, link: LinkConfig) -> Self {
        self.config.player_link = link;
        self
    }

    pub fn reader_link(mut self, link: LinkConfig) -> Self {
        self.config.reader_link = link;
        self
    }

    /// Consume the builder and return a validated Config.
    pub fn build(self) -> Result<Config> {
        let mut config = self.config;
        if !self.tracks.is_empty() {
            config.track_map = config
                .track_map
                .iter()
                .map(|(tag, track)| (tag.clone(), track))
                .chain(self.tracks)
                .collect();
        }
        config.validate()?;
        Ok(config)
    }
}
