// tagtune/src/reader/pn532/mod.rs

//! PN532 driver over its HSU (serial) interface.
//!
//! Every host command is sent as a normal information frame with TFI 0xD4.
//! The chip first answers with an ACK frame, then with a response frame whose
//! payload starts with `D5 <command + 1>`.

use std::marker::PhantomData;
use std::time::{Duration, Instant};

use log::{debug, info, trace};

use crate::constants::{
    PN532_ACK, PN532_ACK_TIMEOUT_MS, PN532_CMD_PREFIX_DEVICE, PN532_CMD_PREFIX_HOST,
    PN532_HSU_WAKEUP, PN532_SETUP_TIMEOUT_MS,
};
use crate::reader::TagReader;
use crate::transport::Transport;
use crate::types::TagId;
use crate::utils::{bytes_to_hex_spaced, ms, remaining_ms};
use crate::{Error, Result};

pub mod commands;
pub mod frame;

pub use commands::FirmwareVersion;
use frame::Incoming;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// PN532 handle that enforces initialization state at compile time.
pub struct Pn532<T, State = Uninitialized> {
    transport: T,
    rx: Vec<u8>,
    firmware: Option<FirmwareVersion>,
    _state: PhantomData<State>,
}

impl<T: Transport> Pn532<T, Uninitialized> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            rx: Vec::new(),
            firmware: None,
            _state: PhantomData,
        }
    }

    /// Wake the chip, put it in normal SAM mode and check that it answers
    /// GetFirmwareVersion. A chip that stays silent yields `DeviceNotFound`.
    pub fn initialize(mut self) -> Result<Pn532<T, Initialized>> {
        self.transport.reset()?;
        self.transport.send(&PN532_HSU_WAKEUP)?;

        self.call(&commands::sam_configuration(), PN532_SETUP_TIMEOUT_MS)
            .map_err(not_found_on_timeout)?;
        let data = self
            .call(&commands::get_firmware_version(), PN532_SETUP_TIMEOUT_MS)
            .map_err(not_found_on_timeout)?;
        let firmware = FirmwareVersion::parse(&data).map_err(|_| Error::DeviceNotFound)?;
        info!(
            "PN532 detected, IC: {:#04X}, Ver: {}.{}, Support: {:#04X}",
            firmware.ic, firmware.version, firmware.revision, firmware.support
        );

        Ok(Pn532 {
            transport: self.transport,
            rx: self.rx,
            firmware: Some(firmware),
            _state: PhantomData,
        })
    }
}

fn not_found_on_timeout(err: Error) -> Error {
    match err {
        Error::Timeout => Error::DeviceNotFound,
        other => other,
    }
}

impl<T: Transport, S> Pn532<T, S> {
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Send a command and return the response data after `D5 <code+1>`.
    fn call(&mut self, command: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        let deadline = Instant::now() + ms(timeout_ms);
        self.write_command(command)?;
        self.wait_ack(deadline)?;
        self.read_response(command[0], deadline)
    }

    fn write_command(&mut self, command: &[u8]) -> Result<()> {
        let mut payload = Vec::with_capacity(command.len() + 1);
        payload.push(PN532_CMD_PREFIX_HOST);
        payload.extend_from_slice(command);
        let bytes = frame::encode(&payload)?;
        debug!("PN532 <- {}", bytes_to_hex_spaced(&bytes));
        self.rx.clear();
        self.transport.send(&bytes)
    }

    /// Next complete frame, reading from the transport until `deadline`.
    fn read_incoming(&mut self, deadline: Instant) -> Result<Incoming> {
        loop {
            if let Some(incoming) = frame::take_frame(&mut self.rx)? {
                return Ok(incoming);
            }
            let left = remaining_ms(deadline).ok_or(Error::Timeout)?;
            let chunk = self.transport.receive(left)?;
            self.rx.extend_from_slice(&chunk);
        }
    }

    fn wait_ack(&mut self, deadline: Instant) -> Result<()> {
        let ack_deadline = deadline.min(Instant::now() + ms(PN532_ACK_TIMEOUT_MS));
        loop {
            match self.read_incoming(ack_deadline)? {
                Incoming::Ack => return Ok(()),
                Incoming::Nack => return Err(Error::Nack),
                Incoming::Data(stale) => {
                    // late answer to a command we already gave up on
                    debug!("PN532 dropping stale frame: {}", bytes_to_hex_spaced(&stale));
                }
            }
        }
    }

    fn read_response(&mut self, command_code: u8, deadline: Instant) -> Result<Vec<u8>> {
        let payload = match self.read_incoming(deadline)? {
            Incoming::Data(payload) => payload,
            other => {
                return Err(Error::FrameFormat(format!(
                    "expected response frame, got {:?}",
                    other
                )));
            }
        };
        debug!("PN532 -> {}", bytes_to_hex_spaced(&payload));

        let tfi = payload.first().copied().unwrap_or_default();
        if tfi != PN532_CMD_PREFIX_DEVICE {
            return Err(Error::UnexpectedResponse {
                expected: PN532_CMD_PREFIX_DEVICE,
                actual: tfi,
            });
        }
        let expected = command_code.wrapping_add(1);
        let actual = payload.get(1).copied().unwrap_or_default();
        if actual != expected {
            return Err(Error::UnexpectedResponse { expected, actual });
        }
        Ok(payload[2..].to_vec())
    }

    /// Host ACK frame: tells the chip to abort the pending command.
    fn abort(&mut self) -> Result<()> {
        self.rx.clear();
        self.transport.send(&PN532_ACK)
    }
}

impl<T: Transport> Pn532<T, Initialized> {
    pub fn firmware(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    /// Look for one ISO14443A tag. Returns `Ok(None)` when nothing answers
    /// before `timeout`; the pending InListPassiveTarget is aborted then.
    pub fn read_passive_target(&mut self, timeout: Duration) -> Result<Option<TagId>> {
        let command = commands::in_list_passive_target(1, commands::BRTY_ISO14443A);
        match self.call(&command, crate::utils::as_ms(timeout)) {
            Ok(data) => commands::parse_passive_target(&data),
            Err(Error::Timeout) => {
                trace!("PN532 poll timed out");
                self.abort()?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl<T: Transport> TagReader for Pn532<T, Initialized> {
    fn poll(&mut self, timeout: Duration) -> Result<Option<TagId>> {
        self.read_passive_target(timeout)
    }
}
