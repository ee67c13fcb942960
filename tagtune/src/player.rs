// tagtune/src/player.rs

use std::time::Duration;

use log::{debug, info};

use crate::config::{Config, SettleDelays};
use crate::protocol::{Command, codec};
use crate::transport::Transport;
use crate::utils::Delay;
use crate::Result;

/// Serial audio player driver.
///
/// Encodes commands, writes them to the transport, then blocks for the
/// command's settle delay so the next command is not issued too early.
pub struct AudioPlayer<T, D> {
    transport: T,
    delay: D,
    settle: SettleDelays,
    boot_delay: Duration,
}

impl<T: Transport, D: Delay> AudioPlayer<T, D> {
    pub fn new(transport: T, delay: D, config: &Config) -> Self {
        Self {
            transport,
            delay,
            settle: config.settle,
            boot_delay: config.boot_delay(),
        }
    }

    /// Write one command frame and wait out its settle delay.
    pub fn send(&mut self, command: Command) -> Result<()> {
        let frame = codec::encode(&command);
        debug!("player <- {:?}: {}", command, frame.to_hex());
        self.transport.send(frame.as_bytes())?;
        self.delay.delay(self.settle.for_command(&command));
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.send(Command::Reset)
    }

    pub fn set_volume(&mut self, level: i32) -> Result<()> {
        self.send(Command::SetVolume(level))
    }

    pub fn play_track(&mut self, index: i32) -> Result<()> {
        self.send(Command::PlayTrack(index))
    }

    /// Power-on sequence: wait for the module to boot, reset it, set volume.
    pub fn power_on(&mut self, volume: u8) -> Result<()> {
        self.delay.delay(self.boot_delay);
        self.reset()?;
        self.set_volume(i32::from(volume))?;
        info!("player ready at volume {}", volume);
        Ok(())
    }

    /// Block for `duration` on the player's delay source.
    pub fn pause(&mut self, duration: Duration) {
        self.delay.delay(duration);
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn into_parts(self) -> (T, D) {
        (self.transport, self.delay)
    }
}
