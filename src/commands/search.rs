use std::io::Write;

use log::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::report::{NO_RESULTS, write_video};
use crate::youtube::YouTube;

/// Search, then fetch and print details for each result in order.
///
/// Each block is flushed before the next request, so a failure part way
/// through leaves earlier blocks in `out`.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let youtube = YouTube::new(&config.api_key, &config.api_base)?;

    let results = youtube.search(&config.keyword).await?;

    if results.is_empty() {
        writeln!(out, "{}", NO_RESULTS)?;
        out.flush()?;
        return Ok(());
    }

    for video in &results {
        let Some(details) = youtube.video_details(&video.video_id).await? else {
            warn!("video {} is no longer available, skipping", video.video_id);
            continue;
        };

        write_video(out, video, &details)?;
        out.flush()?;
    }

    debug!("printed {} result(s)", results.len());
    Ok(())
}
