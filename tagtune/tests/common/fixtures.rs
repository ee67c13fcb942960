// fixtures.rs — provides commonly used identifiers, configs and frames

use tagtune::config::Config;
use tagtune::types::TagId;

pub const MAPPED_HEX: &str = "04AABBCCDD11";
pub const OTHER_HEX: &str = "04332211FF55";

pub fn mapped_tag() -> TagId {
    MAPPED_HEX.parse().unwrap()
}

pub fn other_tag() -> TagId {
    OTHER_HEX.parse().unwrap()
}

/// `04AABBCCDD11` -> track 3, nothing else mapped
pub fn mapped_config() -> Config {
    Config::builder()
        .map_hex(MAPPED_HEX, 3)
        .unwrap()
        .build()
        .unwrap()
}

/// Frame for PlayTrack(3) as it must appear on the wire
pub fn play_track_three_frame() -> Vec<u8> {
    hex::decode("7EFF0603000003FEF5EF").unwrap()
}

pub fn reset_frame() -> Vec<u8> {
    hex::decode("7EFF060C000000FEEFEF").unwrap()
}

pub fn volume_twenty_frame() -> Vec<u8> {
    hex::decode("7EFF0606000014FEE1EF").unwrap()
}
