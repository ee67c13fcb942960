// tagtune/src/prelude.rs

pub use crate::config::{Config, ConfigBuilder, LinkConfig, SettleDelays};
pub use crate::jukebox::{Jukebox, StepOutcome};
pub use crate::player::AudioPlayer;
pub use crate::presence::{Debouncer, PresenceEvent, PresenceState};
pub use crate::protocol::{Command, Frame};
pub use crate::reader::{Pn532, ScriptedReader, TagReader};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{Error, Result, TagId, TrackMap};

// Re-export small utilities for convenience
pub use crate::utils::{Delay, StdDelay, bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
