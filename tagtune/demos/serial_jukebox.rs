//! Run the jukebox against real hardware.
//!
//! ```text
//! RUST_LOG=debug cargo run -p tagtune --example serial_jukebox --features serial -- \
//!     /dev/ttyUSB0 /dev/ttyS0 04AABBCCDD11=1 04332211FF55=2
//! ```
//!
//! Arguments: PN532 port, player port, then any number of `UID=track` pairs.

use anyhow::{Context, bail};
use log::error;

use tagtune::config::{Config, LinkConfig};
use tagtune::jukebox::Jukebox;
use tagtune::player::AudioPlayer;
use tagtune::reader::Pn532;
use tagtune::transport::SerialTransport;
use tagtune::utils::StdDelay;

fn parse_mapping(arg: &str) -> anyhow::Result<(String, u16)> {
    let (uid, track) = arg
        .split_once('=')
        .with_context(|| format!("expected UID=track, got {:?}", arg))?;
    let track = track
        .parse()
        .with_context(|| format!("bad track number in {:?}", arg))?;
    Ok((uid.to_string(), track))
}

fn config_from_args() -> anyhow::Result<Config> {
    let mut args = std::env::args().skip(1);
    let (Some(reader_port), Some(player_port)) = (args.next(), args.next()) else {
        bail!("usage: serial_jukebox <reader-port> <player-port> [UID=track ...]");
    };

    let mut builder = Config::builder()
        .reader_link(LinkConfig::pn532(reader_port))
        .player_link(LinkConfig::player(player_port));
    for arg in args {
        let (uid, track) = parse_mapping(&arg)?;
        builder = builder.map_hex(&uid, track)?;
    }
    Ok(builder.build()?)
}

fn run() -> anyhow::Result<()> {
    let config = config_from_args()?;

    let reader_link = SerialTransport::open(&config.reader_link)
        .with_context(|| format!("opening reader port {}", config.reader_link.path))?;
    let reader = Pn532::new(reader_link)
        .initialize()
        .context("PN532 did not answer")?;

    let player_link = SerialTransport::open(&config.player_link)
        .with_context(|| format!("opening player port {}", config.player_link.path))?;
    let mut player = AudioPlayer::new(player_link, StdDelay, &config);
    player.power_on(config.default_volume)?;

    let mut jukebox = Jukebox::new(reader, player, config);
    jukebox.run()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("fatal: {:#}", e);
        std::process::exit(1);
    }
}
