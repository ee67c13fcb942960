#[path = "../common/mod.rs"]
mod common;

use tagtune::protocol::{Command, encode, encode_command_frame};

#[test]
fn known_commands_encode_to_fixture_frames() {
    assert_eq!(
        encode_command_frame(&Command::Reset),
        common::fixtures::reset_frame()
    );
    assert_eq!(
        encode_command_frame(&Command::SetVolume(20)),
        common::fixtures::volume_twenty_frame()
    );
    assert_eq!(
        encode_command_frame(&Command::PlayTrack(3)),
        common::fixtures::play_track_three_frame()
    );
}

#[test]
fn clamping_matches_boundary_frames() {
    assert_eq!(
        encode(&Command::SetVolume(-5)).as_bytes()[5..7],
        encode(&Command::SetVolume(0)).as_bytes()[5..7]
    );
    assert_eq!(
        encode(&Command::SetVolume(99)).as_bytes()[5..7],
        encode(&Command::SetVolume(30)).as_bytes()[5..7]
    );
    assert_eq!(encode(&Command::PlayTrack(0)), encode(&Command::PlayTrack(1)));
}

#[test]
fn large_track_index_uses_both_parameter_bytes() {
    let frame = encode(&Command::PlayTrack(2999));
    // 2999 = 0x0BB7
    assert_eq!(frame.as_bytes()[5], 0x0B);
    assert_eq!(frame.as_bytes()[6], 0xB7);
}
