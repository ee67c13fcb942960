// tagtune/src/reader/mod.rs

//! Tag reader collaborators.
//!
//! The control loop only needs "which tag is in the field right now, if
//! any". `TagReader` is that seam; `Pn532` talks to real hardware and
//! `ScriptedReader` replays canned samples.

use std::time::Duration;

use crate::Result;
use crate::types::TagId;

pub mod pn532;
pub mod scripted;

pub use pn532::Pn532;
pub use scripted::ScriptedReader;

pub trait TagReader {
    /// Report the tag currently in the field. Must not block longer than
    /// `timeout`; returns `Ok(None)` when no tag shows up in time.
    fn poll(&mut self, timeout: Duration) -> Result<Option<TagId>>;
}

impl<R: TagReader + ?Sized> TagReader for &mut R {
    fn poll(&mut self, timeout: Duration) -> Result<Option<TagId>> {
        (**self).poll(timeout)
    }
}

impl<R: TagReader + ?Sized> TagReader for Box<R> {
    fn poll(&mut self, timeout: Duration) -> Result<Option<TagId>> {
        (**self).poll(timeout)
    }
}
