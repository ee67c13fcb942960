#[path = "../common/mod.rs"]
mod common;

use tagtune::protocol::{checksum, verify};

#[test]
fn checksum_is_twos_complement_of_payload_sum() {
    // 0xFFFF - (0xFF + 0x06 + 0x03 + 0x00 + 0x00 + 0x03) + 1 = 0xFEF5
    assert_eq!(checksum(&[0xFF, 0x06, 0x03, 0x00, 0x00, 0x03]), 0xFEF5);
    assert!(verify(&[0xFF, 0x06, 0x03, 0x00, 0x00, 0x03], 0xFEF5));
}

#[test]
fn checksum_of_fixture_frames() {
    for frame in [
        common::fixtures::reset_frame(),
        common::fixtures::volume_twenty_frame(),
        common::fixtures::play_track_three_frame(),
    ] {
        let chk = u16::from_be_bytes([frame[7], frame[8]]);
        assert_eq!(checksum(&frame[1..7]), chk);
    }
}
