#![cfg(feature = "serial")]

#[path = "common.rs"]
mod common;

use serial_test::serial;
use tagtune::config::Config;
use tagtune::player::AudioPlayer;
use tagtune::utils::StdDelay;
use tagtune::Result;

// Requires a player module on TAGTUNE_PLAYER_PORT with at least one track
// on its card. Run manually with `-- --ignored`.

#[test]
#[ignore]
#[serial]
fn power_on_and_play_first_track() -> Result<()> {
    let Some(transport) = common::open_player_port()? else {
        return Ok(());
    };
    let config = Config::default();
    let mut player = AudioPlayer::new(transport, StdDelay, &config);
    player.power_on(10)?;
    player.play_track(1)
}
