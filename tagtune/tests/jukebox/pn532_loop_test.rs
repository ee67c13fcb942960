#[path = "../common/mod.rs"]
mod common;

use tagtune::constants::PN532_ACK;
use tagtune::jukebox::{Jukebox, StepOutcome};
use tagtune::transport::MockTransport;

use common::fixtures::{mapped_config, mapped_tag};

#[test]
fn pn532_samples_drive_the_loop() {
    let mut reader_link = MockTransport::new();
    common::seed_pn532_init(&mut reader_link);
    // poll 1: tag present, poll 2: same tag, poll 3: silence (timeout)
    common::push_pn532_target(&mut reader_link, mapped_tag().as_bytes());
    common::push_pn532_target(&mut reader_link, mapped_tag().as_bytes());

    let reader = tagtune::reader::Pn532::new(reader_link).initialize().unwrap();
    let config = mapped_config();
    let player = common::mock_player(&config);
    let mut jb = Jukebox::new(reader, player, config);

    assert!(matches!(jb.step().unwrap(), StepOutcome::Played { track: 3, .. }));
    assert_eq!(jb.step().unwrap(), StepOutcome::Quiet);
    assert!(matches!(jb.step().unwrap(), StepOutcome::Removed { .. }));

    let (reader, player) = jb.into_parts();
    assert_eq!(player.transport().sent.len(), 1);
    // the timed-out poll was aborted with a host ACK
    assert_eq!(
        reader.transport().sent.last().unwrap(),
        &PN532_ACK.to_vec()
    );
}

#[test]
fn initialized_helper_reads_target() {
    let mut frames = Vec::new();
    let mut scratch = MockTransport::new();
    common::push_pn532_target(&mut scratch, &[0x04, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    frames.append(&mut scratch.responses);

    let mut pn532 = common::initialized_mock_pn532(frames).unwrap();
    let tag = pn532.read_passive_target(tagtune::utils::ms(500)).unwrap();
    assert_eq!(tag.unwrap().to_hex(), "04010203040506");
}
