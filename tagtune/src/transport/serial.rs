// tagtune/src/transport/serial.rs

//! `serialport` backed transport (feature `serial`).

use std::io::{ErrorKind, Read, Write};
use std::time::Instant;

use log::debug;
use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::config::LinkConfig;
use crate::transport::traits::Transport;
use crate::utils::{bytes_to_hex_spaced, ms, remaining_ms};
use crate::{Error, Result};

const READ_CHUNK: usize = 64;

/// A serial port opened 8N1 with no flow control.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    name: String,
}

impl SerialTransport {
    /// Open the port described by `link`.
    pub fn open(link: &LinkConfig) -> Result<Self> {
        let port = serialport::new(&link.path, link.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(ms(crate::utils::DEFAULT_READ_TIMEOUT_MS))
            .open()?;
        debug!("opened serial port {} at {} baud", link.path, link.baud_rate);
        Ok(Self {
            port,
            name: link.path.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        debug!("{} <- {}", self.name, bytes_to_hex_spaced(data));
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        let deadline = Instant::now() + ms(timeout_ms);
        let mut buf = [0u8; READ_CHUNK];
        while let Some(left) = remaining_ms(deadline) {
            self.port.set_timeout(ms(left))?;
            match self.port.read(&mut buf) {
                Ok(0) => continue,
                Ok(n) => {
                    debug!("{} -> {}", self.name, bytes_to_hex_spaced(&buf[..n]));
                    return Ok(buf[..n].to_vec());
                }
                Err(e) if e.kind() == ErrorKind::TimedOut => break,
                Err(e) => return Err(e.into()),
            }
        }
        Err(Error::Timeout)
    }

    fn reset(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }
}
