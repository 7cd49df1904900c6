use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("APIキーが設定されていません。環境変数 'YOUTUBE_API_KEY' をセットしてください。")]
    ApiKeyMissing,

    #[error("使用方法: yt-search <検索キーワード>")]
    Usage,

    #[error("YouTube API エラー: {0}")]
    Api(String),

    #[error("API クライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("エラーが発生しました: {0}")]
    Io(#[from] std::io::Error),

    #[error("エラーが発生しました: {0}")]
    Json(#[from] serde_json::Error),

    #[error("エラーが発生しました: invalid duration '{0}'")]
    Duration(String),

    #[error("エラーが発生しました: {0}")]
    Parse(String),
}

impl Error {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, Error>;
