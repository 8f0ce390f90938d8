pub mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// 未検証のクライアント設定
///
/// ファイルやコードから与えられたままの形。必須項目の検証と
/// デフォルト値の補完は cloudlink クレート側で行う。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// クラウドプロバイダ名 ("aws" など)
    #[serde(default)]
    pub cloud: Option<String>,

    /// 接続先の Cloudlink サービス
    #[serde(default)]
    pub server: Option<RawServerConfig>,

    /// プロバイダ固有の認証情報 (中身は検証しない)
    #[serde(default)]
    pub auth: Option<Value>,
}

/// 未検証のサーバ設定
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawServerConfig {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub secure: Option<bool>,
}

/// Cloudlinkの設定ファイルパスを取得
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("cloudlink");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

/// プロジェクトのcloudlink.jsonファイルを探す
///
/// 以下の優先順位で設定ファイルを検索:
/// 1. 環境変数 CLOUDLINK_CONFIG_PATH (直接パス指定)
/// 2. カレントディレクトリ: cloudlink.local.json, .cloudlink.local.json, cloudlink.json, .cloudlink.json
/// 3. ./.cloudlink/ ディレクトリ内: 同様の順序
/// 4. ~/.config/cloudlink/cloudlink.json (グローバル設定)
pub fn find_config_file() -> Result<PathBuf> {
    // 1. 環境変数で直接指定
    if let Ok(config_path) = std::env::var("CLOUDLINK_CONFIG_PATH") {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
    }

    let current_dir = std::env::current_dir()?;
    let candidates = [
        "cloudlink.local.json",
        ".cloudlink.local.json",
        "cloudlink.json",
        ".cloudlink.json",
    ];

    // 2. カレントディレクトリで検索
    for filename in &candidates {
        let path = current_dir.join(filename);
        if path.exists() {
            return Ok(path);
        }
    }

    // 3. ./.cloudlink/ ディレクトリで検索
    let cloudlink_dir = current_dir.join(".cloudlink");
    if cloudlink_dir.is_dir() {
        for filename in &candidates {
            let path = cloudlink_dir.join(filename);
            if path.exists() {
                return Ok(path);
            }
        }
    }

    // 4. グローバル設定ファイル (~/.config/cloudlink/cloudlink.json)
    if let Some(config_dir) = dirs::config_dir() {
        let global_config = config_dir.join("cloudlink").join("cloudlink.json");
        if global_config.exists() {
            return Ok(global_config);
        }
    }

    // どの設定ファイルも見つからなかった
    Err(ConfigError::ConfigFileNotFound)
}

/// 設定ファイルを読み込み、未検証の [`RawConfig`] としてパース
pub fn load_config(path: &Path) -> Result<RawConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config: RawConfig = serde_json::from_str(&contents)?;
    Ok(config)
}
