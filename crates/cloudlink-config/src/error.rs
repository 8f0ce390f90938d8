use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ディレクトリが見つかりません")]
    ConfigDirNotFound,

    #[error(
        "設定ファイルが見つかりません。以下の場所を確認してください:\n\
        - カレントディレクトリ: cloudlink.json, cloudlink.local.json, .cloudlink.json, .cloudlink.local.json\n\
        - ./.cloudlink/ ディレクトリ\n\
        - ~/.config/cloudlink/cloudlink.json\n\
        または CLOUDLINK_CONFIG_PATH 環境変数で直接指定できます"
    )]
    ConfigFileNotFound,

    #[error("設定ファイルのパースに失敗しました: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
