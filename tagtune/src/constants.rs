// tagtune/src/constants.rs
//! Common protocol constants used across the crate

/// Player frame start marker
pub const PLAYER_START: u8 = 0x7E;

/// Player protocol version byte
pub const PLAYER_VERSION: u8 = 0xFF;

/// Player payload length byte (version..param-low)
pub const PLAYER_PAYLOAD_LEN: u8 = 0x06;

/// Feedback flag: the player is never asked to acknowledge
pub const PLAYER_NO_FEEDBACK: u8 = 0x00;

/// Player frame end marker
pub const PLAYER_END: u8 = 0xEF;

/// Player wire frame length in bytes
pub const PLAYER_FRAME_LEN: usize = 10;

/// Player command codes
pub const PLAYER_CMD_PLAY_TRACK: u8 = 0x03;
pub const PLAYER_CMD_SET_VOLUME: u8 = 0x06;
pub const PLAYER_CMD_RESET: u8 = 0x0C;

/// Volume range accepted by the player
pub const MIN_VOLUME: i32 = 0;
pub const MAX_VOLUME: i32 = 30;

/// Lowest track index. The player has no track 0.
pub const MIN_TRACK: i32 = 1;

/// Highest track index the player can address in the root folder.
/// The wire format itself carries up to 0xFFFF.
pub const MAX_ADDRESSABLE_TRACK: u16 = 2999;

/// Settle delays per command kind, in milliseconds
pub const RESET_SETTLE_MS: u64 = 1500;
pub const SET_VOLUME_SETTLE_MS: u64 = 100;
pub const PLAY_TRACK_SETTLE_MS: u64 = 0;

/// Time the player needs after power-up before it accepts commands
pub const PLAYER_BOOT_DELAY_MS: u64 = 1000;

/// Loop timing defaults
pub const DEFAULT_VOLUME: u8 = 20;
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 500;
pub const DEFAULT_DEBOUNCE_PAUSE_MS: u64 = 300;

/// Serial defaults: the player talks 9600 8N1, the PN532 HSU port 115200 8N1
pub const PLAYER_BAUD_RATE: u32 = 9600;
pub const PN532_BAUD_RATE: u32 = 115_200;

/// PN53x wire frame preamble + start code: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// PN53x wire frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// ACK / NACK frames sent by the PN532 (and ACK by the host to abort)
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];
pub const PN532_NACK: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// Maximum payload length for PN53x normal information frames
pub const PN532_MAX_PAYLOAD_LEN: usize = 255;

/// PN532/PN533 host->device prefix (D4) and device->host prefix (D5)
pub const PN532_CMD_PREFIX_HOST: u8 = 0xD4;
pub const PN532_CMD_PREFIX_DEVICE: u8 = 0xD5;

/// PN532 command codes used by the reader driver
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;

/// HSU wake-up: two 0x55 bytes followed by a run of zeros
pub const PN532_HSU_WAKEUP: [u8; 5] = [0x55, 0x55, 0x00, 0x00, 0x00];

/// How long the PN532 may take to acknowledge a command frame
pub const PN532_ACK_TIMEOUT_MS: u64 = 100;

/// Timeout for the short setup commands (SAM configuration, firmware)
pub const PN532_SETUP_TIMEOUT_MS: u64 = 1000;

/// ISO14443A UIDs are 4, 7 or 10 bytes
pub const MAX_TAG_ID_LEN: usize = 10;
