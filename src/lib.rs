pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod report;
pub mod youtube;

use std::io::Write;
use std::process::ExitCode;

use config::Config;
use error::Error;

/// Print an error as a single line and return its exit status
pub fn report_error<E: Write>(err: &mut E, error: &Error) -> u8 {
    let _ = writeln!(err, "エラー: {}", error);
    error.exit_code()
}

/// Run one search, writing the report to `out` and any failure to `err`
pub async fn execute<W: Write, E: Write>(config: &Config, out: &mut W, err: &mut E) -> u8 {
    match commands::search::run(config, out).await {
        Ok(()) => 0,
        Err(e) => report_error(err, &e),
    }
}

/// Run one search against stdout and stderr
pub async fn run(config: Config) -> ExitCode {
    ExitCode::from(execute(&config, &mut std::io::stdout(), &mut std::io::stderr()).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_error_writes_prefixed_line() {
        let mut err = Vec::new();
        let code = report_error(&mut err, &Error::ApiKeyMissing);

        assert_eq!(code, 1);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "エラー: APIキーが設定されていません。環境変数 'YOUTUBE_API_KEY' をセットしてください。\n"
        );
    }

    #[test]
    fn usage_error_line() {
        let mut err = Vec::new();
        assert_eq!(report_error(&mut err, &Error::Usage), 1);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "エラー: 使用方法: yt-search <検索キーワード>\n"
        );
    }
}
