//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common mock setup so tests across the crate and
//! the tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::config::Config;
use crate::jukebox::Jukebox;
use crate::player::AudioPlayer;
use crate::reader::ScriptedReader;
use crate::reader::pn532::{self, Initialized, Pn532};
use crate::transport::mock::MockTransport;
use crate::utils::RecordingDelay;
use crate::{Result, constants};

/// Jukebox wired to a scripted reader, a mock transport and a recording
/// delay.
pub type MockJukebox = Jukebox<ScriptedReader, MockTransport, RecordingDelay>;

/// Build a player backed by a fresh MockTransport and RecordingDelay.
#[doc(hidden)]
pub fn mock_player(config: &Config) -> AudioPlayer<MockTransport, RecordingDelay> {
    AudioPlayer::new(MockTransport::new(), RecordingDelay::new(), config)
}

/// Build a jukebox that replays `samples` (hex identifiers, `None` for an
/// empty field).
#[doc(hidden)]
pub fn scripted_jukebox(samples: &[Option<&str>], config: Config) -> Result<MockJukebox> {
    let reader = ScriptedReader::from_hex(samples)?;
    let player = mock_player(&config);
    Ok(Jukebox::new(reader, player, config))
}

/// Push the ACK + response frames a PN532 sends during initialization
/// (SAMConfiguration, then GetFirmwareVersion 1.6).
#[doc(hidden)]
pub fn seed_pn532_init(mock: &mut MockTransport) {
    mock.push_response(constants::PN532_ACK.to_vec());
    push_pn532_response(mock, &[0xD5, 0x15]);
    mock.push_response(constants::PN532_ACK.to_vec());
    push_pn532_response(mock, &[0xD5, 0x03, 0x32, 0x01, 0x06, 0x07]);
}

/// Push one framed PN532 response payload (starting with D5).
#[doc(hidden)]
pub fn push_pn532_response(mock: &mut MockTransport, payload: &[u8]) {
    if let Ok(frame) = pn532::frame::encode(payload) {
        mock.push_response(frame);
    }
}

/// Push the ACK + InListPassiveTarget response for one target with `uid`.
#[doc(hidden)]
pub fn push_pn532_target(mock: &mut MockTransport, uid: &[u8]) {
    mock.push_response(constants::PN532_ACK.to_vec());
    let mut payload = vec![0xD5, 0x4B, 0x01, 0x01, 0x00, 0x44, 0x00, uid.len() as u8];
    payload.extend_from_slice(uid);
    push_pn532_response(mock, &payload);
}

/// Convenience: an initialized PN532 backed by a MockTransport that already
/// holds the init handshake followed by `frames`.
#[doc(hidden)]
pub fn initialized_mock_pn532(frames: Vec<Vec<u8>>) -> Result<Pn532<MockTransport, Initialized>> {
    let mut mock = MockTransport::new();
    seed_pn532_init(&mut mock);
    for f in frames {
        mock.push_response(f);
    }
    Pn532::new(mock).initialize()
}
