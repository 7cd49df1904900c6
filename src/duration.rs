use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

static ISO_DURATION: OnceLock<Regex> = OnceLock::new();

/// Hour, minute and second components of a video length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

fn iso_duration() -> &'static Regex {
    ISO_DURATION.get_or_init(|| {
        Regex::new(r"^P(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$")
            .expect("duration pattern is valid")
    })
}

/// Parse an ISO-8601 duration such as `PT1H2M3S`.
///
/// Components are kept as given (`PT90M` stays 90 minutes). Weeks and days
/// are folded into hours; years and months are not accepted.
pub fn parse(duration: &str) -> Result<DurationParts> {
    let caps = iso_duration()
        .captures(duration)
        .filter(|_| duration != "P" && !duration.ends_with('T'))
        .ok_or_else(|| Error::Duration(duration.to_string()))?;

    let field = |i: usize| -> Result<u64> {
        caps.get(i)
            .map(|m| m.as_str().parse::<u64>())
            .transpose()
            .map(|v| v.unwrap_or(0))
            .map_err(|_| Error::Duration(duration.to_string()))
    };

    let days = field(1)?.saturating_mul(7).saturating_add(field(2)?);

    Ok(DurationParts {
        hours: days.saturating_mul(24).saturating_add(field(3)?),
        minutes: field(4)?,
        seconds: field(5)?,
    })
}

/// Render an ISO-8601 duration as e.g. `1時間02分03秒`, `5分09秒` or `7秒`.
pub fn format_duration(duration: &str) -> Result<String> {
    let DurationParts {
        hours,
        minutes,
        seconds,
    } = parse(duration)?;

    let formatted = if hours > 0 {
        format!("{}時間{:02}分{:02}秒", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}分{:02}秒", minutes, seconds)
    } else {
        format!("{}秒", seconds)
    };

    Ok(formatted)
}
