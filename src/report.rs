use std::io::Write;

use crate::duration::format_duration;
use crate::error::Result;
use crate::youtube::{SearchResult, VideoDetails};

const SEPARATOR: &str = "------------------------------------";

pub const NO_RESULTS: &str = "検索結果が見つかりませんでした。";

/// Format a count with `,` thousands separators
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

fn format_optional_count(n: Option<u64>) -> String {
    n.map(format_count).unwrap_or_else(|| "N/A".to_string())
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Write the report block for one video
pub fn write_video<W: Write>(
    out: &mut W,
    video: &SearchResult,
    details: &VideoDetails,
) -> Result<()> {
    let duration = format_duration(&details.duration)?;

    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "タイトル: {}", video.title)?;
    writeln!(out, "チャンネル名: {}", video.channel_title)?;
    writeln!(out, "視聴回数: {} 回", format_count(details.view_count))?;
    writeln!(out, "いいね数: {}", format_optional_count(details.like_count))?;
    writeln!(out, "コメント数: {}", format_optional_count(details.comment_count))?;
    writeln!(out, "動画の長さ: {}", duration)?;
    writeln!(out, "URL: {}", watch_url(&video.video_id))?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(12_345_678_901), "12,345,678,901");
    }

    #[test]
    fn block_layout() {
        let video = SearchResult {
            video_id: "dQw4w9WgXcQ".into(),
            title: "Never Gonna Give You Up".into(),
            channel_title: "Rick Astley".into(),
        };
        let details = VideoDetails {
            view_count: 1_234_567,
            like_count: None,
            comment_count: Some(4321),
            duration: "PT3M33S".into(),
        };

        let mut out = Vec::new();
        write_video(&mut out, &video, &details).unwrap();

        let expected = "\
------------------------------------
タイトル: Never Gonna Give You Up
チャンネル名: Rick Astley
視聴回数: 1,234,567 回
いいね数: N/A
コメント数: 4,321
動画の長さ: 3分33秒
URL: https://www.youtube.com/watch?v=dQw4w9WgXcQ
------------------------------------

";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn bad_duration_writes_nothing() {
        let video = SearchResult {
            video_id: "x".into(),
            title: "t".into(),
            channel_title: "c".into(),
        };
        let details = VideoDetails {
            view_count: 1,
            like_count: Some(1),
            comment_count: Some(1),
            duration: "P1Y".into(),
        };

        let mut out = Vec::new();
        assert!(write_video(&mut out, &video, &details).is_err());
        assert!(out.is_empty());
    }
}
