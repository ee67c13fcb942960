// tagtune/src/jukebox.rs

//! The control loop: poll, debounce, look up, play.
//!
//! One blocking poll, one debouncer update, at most one player command,
//! then the debounce pause; repeated until a collaborator fails.

use derive_more::Display;
use log::{info, warn};

use crate::config::Config;
use crate::player::AudioPlayer;
use crate::presence::{Debouncer, PresenceEvent, PresenceState};
use crate::reader::TagReader;
use crate::transport::Transport;
use crate::types::TagId;
use crate::utils::Delay;
use crate::Result;

/// What one loop cycle did
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StepOutcome {
    /// No presence change
    #[display(fmt = "quiet")]
    Quiet,
    /// A new tag arrived and its track was started
    #[display(fmt = "played track {} for {}", track, tag)]
    Played { tag: TagId, track: u16 },
    /// A new tag arrived but nothing is mapped to it
    #[display(fmt = "no track mapped for {}", tag)]
    Unmapped { tag: TagId },
    /// The tag left the reader
    #[display(fmt = "removed {}", tag)]
    Removed { tag: TagId },
}

pub struct Jukebox<R, T, D> {
    reader: R,
    player: AudioPlayer<T, D>,
    debouncer: Debouncer,
    config: Config,
}

impl<R: TagReader, T: Transport, D: Delay> Jukebox<R, T, D> {
    pub fn new(reader: R, player: AudioPlayer<T, D>, config: Config) -> Self {
        Self {
            reader,
            player,
            debouncer: Debouncer::new(),
            config,
        }
    }

    /// Run one poll cycle.
    pub fn step(&mut self) -> Result<StepOutcome> {
        let sample = self.reader.poll(self.config.poll_timeout())?;
        let outcome = match self.debouncer.observe(sample) {
            None => StepOutcome::Quiet,
            Some(PresenceEvent::TagArrived(tag)) => self.on_arrival(tag)?,
            Some(PresenceEvent::TagRemoved(tag)) => {
                info!("tag removed: {}", tag);
                StepOutcome::Removed { tag }
            }
        };
        self.player.pause(self.config.debounce_pause());
        Ok(outcome)
    }

    fn on_arrival(&mut self, tag: TagId) -> Result<StepOutcome> {
        info!("tag detected, UID = {}", tag);
        match self.config.track_map.get(&tag) {
            Some(track) => {
                info!("playing track {}", track);
                self.player.play_track(i32::from(track))?;
                Ok(StepOutcome::Played { tag, track })
            }
            None => {
                warn!("no track mapped for {}", tag);
                Ok(StepOutcome::Unmapped { tag })
            }
        }
    }

    /// Poll forever. Returns only when the reader or transport fails.
    pub fn run(&mut self) -> Result<()> {
        info!("waiting for tags");
        loop {
            self.step()?;
        }
    }

    pub fn presence(&self) -> &PresenceState {
        self.debouncer.state()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn player(&self) -> &AudioPlayer<T, D> {
        &self.player
    }

    pub fn into_parts(self) -> (R, AudioPlayer<T, D>) {
        (self.reader, self.player)
    }
}
