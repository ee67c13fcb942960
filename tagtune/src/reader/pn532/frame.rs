// tagtune/src/reader/pn532/frame.rs

use crate::constants::{PN532_MAX_PAYLOAD_LEN, PN532_POSTAMBLE, PN532_PREAMBLE};
use crate::{Error, Result};

/// Compute Length Checksum (LCS) for a PN53x frame
/// LCS = 0x100 - length (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) for a PN53x frame
/// DCS = 0x100 - (sum(payload) & 0xff)
pub fn dcs(payload: &[u8]) -> u8 {
    let sum = payload.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// Encode a payload (TFI + command + data) into a normal information frame.
/// Format: [Preamble+Start(3)] [Len(1)] [LCS(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > PN532_MAX_PAYLOAD_LEN {
        return Err(Error::InvalidLength {
            expected: PN532_MAX_PAYLOAD_LEN,
            actual: payload.len(),
        });
    }

    let len = payload.len() as u8;
    let mut out = Vec::with_capacity(3 + 1 + 1 + payload.len() + 1 + 1);
    out.extend_from_slice(&PN532_PREAMBLE);
    out.push(len);
    out.push(lcs(len));
    out.extend_from_slice(payload);
    out.push(dcs(payload));
    out.push(PN532_POSTAMBLE);
    Ok(out)
}

/// One frame pulled off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incoming {
    Ack,
    Nack,
    Data(Vec<u8>),
}

/// Try to pull one complete frame from the front of `buf`, consuming it.
///
/// Bytes before the `00 FF` start code are discarded. Returns `Ok(None)` when
/// `buf` does not hold a complete frame yet; the partial frame stays in
/// `buf` for the next call.
pub fn take_frame(buf: &mut Vec<u8>) -> Result<Option<Incoming>> {
    let start = match buf.windows(2).position(|w| w == [0x00, 0xFF]) {
        Some(pos) => pos,
        None => {
            // keep a trailing 0x00, it may be the first half of a start code
            let keep = usize::from(buf.last() == Some(&0x00));
            buf.drain(..buf.len() - keep);
            return Ok(None);
        }
    };
    buf.drain(..start);

    if buf.len() < 4 {
        return Ok(None);
    }
    let len = buf[2];
    let lcs_actual = buf[3];

    match (len, lcs_actual) {
        (0x00, 0xFF) => {
            consume(buf, 4);
            return Ok(Some(Incoming::Ack));
        }
        (0xFF, 0x00) => {
            consume(buf, 4);
            return Ok(Some(Incoming::Nack));
        }
        _ => {}
    }

    let lcs_expected = lcs(len);
    if lcs_actual != lcs_expected {
        buf.drain(..2);
        return Err(Error::ChecksumMismatch {
            expected: u16::from(lcs_expected),
            actual: u16::from(lcs_actual),
        });
    }

    let payload_end = 4 + usize::from(len);
    if buf.len() < payload_end + 1 {
        return Ok(None);
    }

    let payload = buf[4..payload_end].to_vec();
    let dcs_actual = buf[payload_end];
    consume(buf, payload_end + 1);

    let dcs_expected = dcs(&payload);
    if dcs_actual != dcs_expected {
        return Err(Error::ChecksumMismatch {
            expected: u16::from(dcs_expected),
            actual: u16::from(dcs_actual),
        });
    }
    Ok(Some(Incoming::Data(payload)))
}

/// Drop a frame of `n` bytes (start code onward) plus its postamble if it
/// has already arrived.
fn consume(buf: &mut Vec<u8>, n: usize) {
    let with_postamble = if buf.get(n) == Some(&PN532_POSTAMBLE) {
        n + 1
    } else {
        n
    };
    buf.drain(..with_postamble);
}

/// Decode one complete frame and return the payload.
pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
    let mut buf = frame.to_vec();
    match take_frame(&mut buf)? {
        Some(Incoming::Data(payload)) => Ok(payload),
        Some(other) => Err(Error::FrameFormat(format!("expected data frame, got {:?}", other))),
        None => Err(Error::FrameFormat("incomplete frame".into())),
    }
}
