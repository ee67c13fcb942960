#![cfg(feature = "serial")]

//! 共通: 実機テスト用ヘルパー
//!
//! `--features serial` でコンパイルされる実機テストに共通で使える関数。
//! ポートが環境変数で指定されていない環境（CI 等）では `Ok(None)` を返す。

use tagtune::config::LinkConfig;
use tagtune::reader::Pn532;
use tagtune::reader::pn532::Initialized;
use tagtune::transport::SerialTransport;
use tagtune::Result;

/// PN532 が繋がっているポート
pub const READER_PORT_VAR: &str = "TAGTUNE_READER_PORT";
/// プレイヤーが繋がっているポート
pub const PLAYER_PORT_VAR: &str = "TAGTUNE_PLAYER_PORT";

/// PN532 を開いて初期化する。
///
/// - Ok(Some(reader)) : ポートが指定され、初期化に成功
/// - Ok(None) : ポート未指定
/// - Err(e) : その他のエラー
pub fn open_and_initialize_reader() -> Result<Option<Pn532<SerialTransport, Initialized>>> {
    let Ok(path) = std::env::var(READER_PORT_VAR) else {
        return Ok(None);
    };
    let transport = SerialTransport::open(&LinkConfig::pn532(path))?;
    Ok(Some(Pn532::new(transport).initialize()?))
}

/// プレイヤー用のポートを開く。未指定なら `Ok(None)`。
pub fn open_player_port() -> Result<Option<SerialTransport>> {
    match std::env::var(PLAYER_PORT_VAR) {
        Ok(path) => SerialTransport::open(&LinkConfig::player(path)).map(Some),
        Err(_) => Ok(None),
    }
}
