// tagtune/src/lib.rs

//! tagtune
//!
//! Play a track on a serial audio player (DFPlayer Mini command set) when a
//! contactless tag is placed on a PN532 reader.
//!
//! - [`protocol`]: 10-byte player command frames and their checksum
//! - [`presence`]: debouncing of per-poll tag samples into arrival/removal events
//! - [`jukebox`]: the poll / debounce / play loop
//! - [`reader`], [`transport`], [`player`]: the hardware collaborators
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod error;
pub mod jukebox;
pub mod player;
pub mod prelude;
pub mod presence;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
