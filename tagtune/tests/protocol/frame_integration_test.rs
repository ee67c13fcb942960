#[path = "../common/mod.rs"]
mod common;

use tagtune::Error;
use tagtune::protocol::{Command, Frame, decode_command_frame};

#[test]
fn fixture_frames_decode_to_commands() {
    assert_eq!(
        decode_command_frame(&common::fixtures::reset_frame()).unwrap(),
        Command::Reset
    );
    assert_eq!(
        decode_command_frame(&common::fixtures::play_track_three_frame()).unwrap(),
        Command::PlayTrack(3)
    );
}

#[test]
fn truncated_frame_is_rejected() {
    let frame = common::fixtures::volume_twenty_frame();
    assert!(matches!(
        Frame::decode(&frame[..9]),
        Err(Error::InvalidLength {
            expected: 10,
            actual: 9
        })
    ));
}

#[test]
fn every_command_frame_is_ten_bytes_with_markers() {
    for cmd in [
        Command::Reset,
        Command::SetVolume(i32::MIN),
        Command::SetVolume(15),
        Command::PlayTrack(i32::MAX),
        Command::PlayTrack(1),
    ] {
        let bytes = Frame::encode(&cmd).into_bytes();
        assert_eq!(bytes.len(), 10);
        assert_eq!(bytes[0], 0x7E);
        assert_eq!(bytes[9], 0xEF);
    }
}
