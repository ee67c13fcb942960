// tagtune/src/reader/scripted.rs

use std::collections::VecDeque;
use std::time::Duration;

use crate::reader::TagReader;
use crate::types::TagId;
use crate::{Error, Result};

/// Reader that replays a fixed list of poll samples, then fails with
/// `ReaderFault` so a running loop stops.
#[derive(Debug, Default)]
pub struct ScriptedReader {
    samples: VecDeque<Option<TagId>>,
    /// Timeouts passed to `poll`, in call order
    pub polls: Vec<Duration>,
}

impl ScriptedReader {
    pub fn new<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Option<TagId>>,
    {
        Self {
            samples: samples.into_iter().collect(),
            polls: Vec::new(),
        }
    }

    /// Build from hex identifiers, `None` meaning an empty field.
    pub fn from_hex(samples: &[Option<&str>]) -> Result<Self> {
        let parsed = samples
            .iter()
            .map(|s| s.map(str::parse::<TagId>).transpose())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(parsed))
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl TagReader for ScriptedReader {
    fn poll(&mut self, timeout: Duration) -> Result<Option<TagId>> {
        self.polls.push(timeout);
        self.samples
            .pop_front()
            .ok_or_else(|| Error::ReaderFault("script exhausted".into()))
    }
}
