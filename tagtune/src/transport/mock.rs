// tagtune/src/transport/mock.rs

use crate::protocol::{Command, Frame};
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent payloads and returns queued responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Timeouts passed to `receive`, in call order
    pub receive_timeouts: Vec<u64>,
    /// Testing hook: number of subsequent `send` calls that should fail
    pub send_failures: usize,
    /// Number of `reset` calls seen
    pub resets: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent send calls should fail (for tests).
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Decode every sent chunk as a player frame. Chunks that are not valid
    /// player frames are skipped.
    pub fn sent_frames(&self) -> Vec<Frame> {
        self.sent
            .iter()
            .filter_map(|bytes| Frame::decode(bytes).ok())
            .collect()
    }

    /// Commands carried by the sent player frames, in order.
    pub fn sent_commands(&self) -> Vec<Command> {
        self.sent_frames()
            .iter()
            .filter_map(|frame| frame.to_command().ok())
            .collect()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "mock send failure",
            )));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        self.receive_timeouts.push(timeout_ms);
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn reset(&mut self) -> Result<()> {
        // Keep queued responses so tests can pre-seed replies (ACKs, frames)
        // before handing the transport to a driver that resets it.
        self.resets += 1;
        Ok(())
    }
}
