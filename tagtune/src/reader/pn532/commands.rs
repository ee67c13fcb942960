// tagtune/src/reader/pn532/commands.rs

//! PN532 command payloads and response parsers.
//!
//! Builders return the command code plus parameters (without the D4 TFI);
//! parsers receive the response data that follows `D5 <code+1>`.

use crate::constants::{
    PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_INLIST_PASSIVE_TARGET, PN532_CMD_SAM_CONFIGURATION,
};
use crate::types::TagId;
use crate::{Error, Result};

/// Baud-rate/modulation selector for InListPassiveTarget: 106 kbps type A
pub const BRTY_ISO14443A: u8 = 0x00;

/// SAMConfiguration: normal mode, 50 ms * 0x14 = 1 s virtual card timeout,
/// use IRQ pin.
pub fn sam_configuration() -> Vec<u8> {
    vec![PN532_CMD_SAM_CONFIGURATION, 0x01, 0x14, 0x01]
}

pub fn get_firmware_version() -> Vec<u8> {
    vec![PN532_CMD_GET_FIRMWARE_VERSION]
}

pub fn in_list_passive_target(max_targets: u8, brty: u8) -> Vec<u8> {
    vec![PN532_CMD_INLIST_PASSIVE_TARGET, max_targets, brty]
}

/// GetFirmwareVersion response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}

impl FirmwareVersion {
    pub fn parse(data: &[u8]) -> Result<Self> {
        let b = slice_at(data, 0, 4)?;
        Ok(Self {
            ic: b[0],
            version: b[1],
            revision: b[2],
            support: b[3],
        })
    }
}

/// Extract the NFCID1 of the first target from InListPassiveTarget data.
/// Layout: NbTg [Tg SENS_RES(2) SEL_RES NFCIDLength NFCID1...]
pub fn parse_passive_target(data: &[u8]) -> Result<Option<TagId>> {
    let count = byte_at(data, 0)?;
    if count == 0 {
        return Ok(None);
    }
    let uid_len = usize::from(byte_at(data, 5)?);
    let uid = slice_at(data, 6, uid_len)?;
    Ok(Some(TagId::try_from(uid)?))
}

/// Ensure the slice has at least `min` bytes.
fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}
