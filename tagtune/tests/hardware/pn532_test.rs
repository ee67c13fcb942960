#![cfg(feature = "serial")]

#[path = "common.rs"]
mod common;

use serial_test::serial;
use tagtune::Result;
use tagtune::reader::TagReader;
use tagtune::utils::ms;

// These tests require a PN532 on the port named by TAGTUNE_READER_PORT.
// They are marked `#[ignore]` so CI does not attempt to run them. Run
// manually with:
//
// TAGTUNE_READER_PORT=/dev/ttyUSB0 cargo test -p tagtune --test hardware --features serial -- --ignored

#[test]
#[ignore]
#[serial]
fn open_and_initialize_pn532() -> Result<()> {
    match common::open_and_initialize_reader()? {
        Some(reader) => {
            assert!(reader.firmware().is_some());
            Ok(())
        }
        None => Ok(()),
    }
}

#[test]
#[ignore]
#[serial]
fn poll_empty_field_returns() -> Result<()> {
    if let Some(mut reader) = common::open_and_initialize_reader()? {
        // a tag may or may not be present; only the round trip matters
        let _ = reader.poll(ms(500))?;
    }
    Ok(())
}
