#[path = "../common/mod.rs"]
mod common;

use tagtune::Error;
use tagtune::jukebox::StepOutcome;
use tagtune::protocol::Command;
use tagtune::utils::ms;

use common::fixtures::{MAPPED_HEX, OTHER_HEX, mapped_config, mapped_tag};

#[test]
fn mapped_tag_plays_exactly_one_frame() {
    let id = Some(MAPPED_HEX);
    let mut jb = common::scripted_jukebox(&[None, Some(MAPPED_HEX), id, None], mapped_config())
        .unwrap();

    // the script runs out after four polls and stops the loop
    assert!(matches!(jb.run(), Err(Error::ReaderFault(_))));

    let (reader, player) = jb.into_parts();
    assert_eq!(reader.polls.len(), 5);
    let (transport, _) = player.into_parts();
    assert_eq!(
        transport.sent,
        vec![common::fixtures::play_track_three_frame()]
    );
}

#[test]
fn unmapped_and_mapped_tags_in_one_session() {
    let mut jb = common::scripted_jukebox(
        &[Some(OTHER_HEX), None, Some(MAPPED_HEX), Some(OTHER_HEX)],
        mapped_config(),
    )
    .unwrap();

    let outcomes: Vec<StepOutcome> = (0..4).map(|_| jb.step().unwrap()).collect();
    assert!(matches!(outcomes[0], StepOutcome::Unmapped { .. }));
    assert!(matches!(outcomes[1], StepOutcome::Removed { .. }));
    assert_eq!(
        outcomes[2],
        StepOutcome::Played {
            tag: mapped_tag(),
            track: 3
        }
    );
    // swapping straight to another tag re-triggers without a removal
    assert!(matches!(outcomes[3], StepOutcome::Unmapped { .. }));

    assert_eq!(
        jb.player().transport().sent_commands(),
        vec![Command::PlayTrack(3)]
    );
}

#[test]
fn power_on_then_play() {
    let mut jb = common::scripted_jukebox(&[Some(MAPPED_HEX)], mapped_config()).unwrap();
    let mut player = common::mock_player(jb.config());
    player.power_on(jb.config().default_volume).unwrap();
    assert_eq!(
        player.transport().sent_commands(),
        vec![Command::Reset, Command::SetVolume(20)]
    );
    assert_eq!(player.delay().delays, vec![ms(1000), ms(1500), ms(100)]);

    jb.step().unwrap();
    assert_eq!(jb.player().delay().delays, vec![ms(0), ms(300)]);
}
