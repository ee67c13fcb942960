#[path = "../common/mod.rs"]
mod common;

use tagtune::Error;
use tagtune::player::AudioPlayer;
use tagtune::transport::MockTransport;
use tagtune::transport::Transport;
use tagtune::utils::RecordingDelay;

#[test]
fn send_failure_and_recovery() {
    let mut m = MockTransport::new();
    m.set_send_failures(1);

    // First send should fail (simulated)
    assert!(matches!(m.send(&[0x01]), Err(Error::Io(_))));

    // Second send goes through
    m.send(&[0x02]).unwrap();
    assert_eq!(m.sent, vec![vec![0x02]]);
}

#[test]
fn empty_queue_times_out() {
    let mut m = MockTransport::new();
    assert!(matches!(m.receive(250), Err(Error::Timeout)));
    assert_eq!(m.receive_timeouts, vec![250]);
}

#[test]
fn reset_keeps_queued_responses() {
    let mut m = MockTransport::new();
    m.push_response(vec![0xAA]);
    m.reset().unwrap();
    assert_eq!(m.receive(10).unwrap(), vec![0xAA]);
}

#[test]
fn player_send_failure_surfaces_as_io() {
    let config = common::fixtures::mapped_config();
    let mut transport = MockTransport::new();
    transport.set_send_failures(1);
    let mut player = AudioPlayer::new(transport, RecordingDelay::new(), &config);
    assert!(matches!(player.reset(), Err(Error::Io(_))));
    assert!(player.delay().delays.is_empty());
}
