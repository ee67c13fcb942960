#[path = "../common/mod.rs"]
mod common;

use tagtune::protocol::Command;
use tagtune::transport::MockTransport;
use tagtune::transport::Transport;

#[test]
fn mock_transport_send_and_receive() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x01]);
    m.send(&[0xAA]).unwrap();
    assert_eq!(m.sent.len(), 1);
    let r = m.receive(1000).unwrap();
    assert_eq!(r, vec![0x01]);
}

#[test]
fn sent_frames_decode_back_to_commands() {
    let mut m = MockTransport::new();
    m.send(&common::fixtures::reset_frame()).unwrap();
    m.send(&common::fixtures::volume_twenty_frame()).unwrap();
    m.send(&common::fixtures::play_track_three_frame()).unwrap();
    assert_eq!(
        m.sent_commands(),
        vec![Command::Reset, Command::SetVolume(20), Command::PlayTrack(3)]
    );
    assert_eq!(m.pop_sent(), Some(common::fixtures::play_track_three_frame()));
}

#[test]
fn boxed_transport_forwards() {
    let mut boxed: Box<MockTransport> = Box::new(MockTransport::new());
    boxed.push_response(vec![0x7E]);
    Transport::send(&mut boxed, &[0x01]).unwrap();
    assert_eq!(Transport::receive(&mut boxed, 10).unwrap(), vec![0x7E]);
    Transport::reset(&mut boxed).unwrap();
    assert_eq!(boxed.resets, 1);
}
