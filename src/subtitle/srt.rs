//! SRT subtitle format: cue type, composition, and parsing.
//!
//! A cue renders as an index line, a `HH:MM:SS,mmm --> HH:MM:SS,mmm`
//! timecode line, one or more text lines, and a blank separator. Cue bounds
//! are held at millisecond precision so composing and re-parsing a file
//! reproduces the original cue sequence exactly.

use crate::error::{Result, SubcueError};
use std::time::Duration;

/// One timed subtitle entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    /// 1-based, contiguous across a subtitle file
    pub index: u32,
    pub start: Duration,
    pub end: Duration,
    pub text: String,
}

impl Cue {
    /// Build a cue from second-based timestamps, rounding to the
    /// millisecond the SRT format can carry.
    pub fn from_seconds(index: u32, start_secs: f64, end_secs: f64, text: impl Into<String>) -> Self {
        Self {
            index,
            start: duration_from_seconds(start_secs),
            end: duration_from_seconds(end_secs),
            text: text.into(),
        }
    }
}

fn duration_from_seconds(seconds: f64) -> Duration {
    let millis = (seconds.max(0.0) * 1000.0).round() as u64;
    Duration::from_millis(millis)
}

/// Format a duration as an SRT timecode (`HH:MM:SS,mmm`).
pub fn format_timecode(duration: Duration) -> String {
    let total_millis = duration.as_millis();
    let millis = total_millis % 1000;
    let total_secs = total_millis / 1000;
    let secs = total_secs % 60;
    let minutes = (total_secs / 60) % 60;
    let hours = total_secs / 3600;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Parse an SRT timecode (`HH:MM:SS,mmm`) into a duration.
pub fn parse_timecode(text: &str) -> Option<Duration> {
    let (clock, millis) = text.trim().split_once(',')?;
    let mut clock_parts = clock.split(':');
    let hours: u64 = clock_parts.next()?.parse().ok()?;
    let minutes: u64 = clock_parts.next()?.parse().ok()?;
    let secs: u64 = clock_parts.next()?.parse().ok()?;
    if clock_parts.next().is_some() || minutes >= 60 || secs >= 60 || millis.len() != 3 {
        return None;
    }
    let millis: u64 = millis.parse().ok()?;
    Some(Duration::from_millis(
        ((hours * 60 + minutes) * 60 + secs) * 1000 + millis,
    ))
}

/// Render a cue sequence as SRT text.
pub fn compose(cues: &[Cue]) -> String {
    let mut out = String::new();
    for cue in cues {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            cue.index,
            format_timecode(cue.start),
            format_timecode(cue.end),
            cue.text
        ));
    }
    out
}

/// Parse SRT text back into a cue sequence.
///
/// Accepts the output of [`compose`] as well as files with multi-line cue
/// text and surrounding blank lines.
pub fn parse(input: &str) -> Result<Vec<Cue>> {
    let mut cues = Vec::new();
    let mut lines = input.lines().enumerate().peekable();

    while let Some((line_no, line)) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }

        let index: u32 = line.trim().parse().map_err(|_| SubcueError::SrtParse {
            line: line_no + 1,
            message: format!("expected cue index, got {:?}", line),
        })?;

        let (time_line_no, time_line) = lines.next().ok_or(SubcueError::SrtParse {
            line: line_no + 1,
            message: "cue ends before its timecode line".to_string(),
        })?;
        let (start_text, end_text) =
            time_line
                .split_once("-->")
                .ok_or_else(|| SubcueError::SrtParse {
                    line: time_line_no + 1,
                    message: "missing --> separator".to_string(),
                })?;
        let start = parse_timecode(start_text).ok_or_else(|| SubcueError::SrtParse {
            line: time_line_no + 1,
            message: format!("bad timecode {:?}", start_text.trim()),
        })?;
        let end = parse_timecode(end_text).ok_or_else(|| SubcueError::SrtParse {
            line: time_line_no + 1,
            message: format!("bad timecode {:?}", end_text.trim()),
        })?;

        let mut text_lines = Vec::new();
        while let Some((_, line)) = lines.peek() {
            if line.trim().is_empty() {
                break;
            }
            text_lines.push(lines.next().map(|(_, l)| l).unwrap_or_default());
        }
        if text_lines.is_empty() {
            return Err(SubcueError::SrtParse {
                line: time_line_no + 2,
                message: "cue has no text".to_string(),
            });
        }

        cues.push(Cue {
            index,
            start,
            end,
            text: text_lines.join("\n"),
        });
    }

    Ok(cues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timecode_format_zero() {
        assert_eq!(format_timecode(Duration::ZERO), "00:00:00,000");
    }

    #[test]
    fn timecode_format_full_fields() {
        // 1h 2m 3s 456ms
        let d = Duration::from_millis(3_723_456);
        assert_eq!(format_timecode(d), "01:02:03,456");
    }

    #[test]
    fn timecode_parse_inverts_format() {
        for millis in [0u64, 999, 1000, 61_000, 3_599_999, 3_600_000, 86_399_999] {
            let d = Duration::from_millis(millis);
            assert_eq!(parse_timecode(&format_timecode(d)), Some(d));
        }
    }

    #[test]
    fn timecode_parse_rejects_malformed() {
        assert_eq!(parse_timecode("00:00:00.000"), None);
        assert_eq!(parse_timecode("00:61:00,000"), None);
        assert_eq!(parse_timecode("00:00:00,00"), None);
        assert_eq!(parse_timecode("garbage"), None);
    }

    #[test]
    fn cue_from_seconds_rounds_to_millisecond() {
        let cue = Cue::from_seconds(1, 0.0001, 1.9996, "x");
        assert_eq!(cue.start, Duration::ZERO);
        assert_eq!(cue.end, Duration::from_millis(2000));
    }

    #[test]
    fn compose_renders_expected_layout() {
        let cues = vec![
            Cue::from_seconds(1, 0.0, 0.6, "Hola mundo"),
            Cue::from_seconds(2, 1.3, 2.1, "increíble"),
        ];
        let text = compose(&cues);
        assert_eq!(
            text,
            "1\n00:00:00,000 --> 00:00:00,600\nHola mundo\n\n\
             2\n00:00:01,300 --> 00:00:02,100\nincreíble\n\n"
        );
    }

    #[test]
    fn parse_inverts_compose() {
        let cues = vec![
            Cue::from_seconds(1, 0.0, 0.6, "Hola mundo"),
            Cue::from_seconds(2, 1.3, 2.1, "increíble"),
            Cue::from_seconds(3, 2.5, 4.0, "dos líneas\nde texto"),
        ];
        let parsed = parse(&compose(&cues)).expect("parse composed SRT");
        assert_eq!(parsed, cues);
    }

    #[test]
    fn parse_tolerates_leading_and_trailing_blank_lines() {
        let text = "\n\n1\n00:00:00,000 --> 00:00:01,000\nhola\n\n\n";
        let cues = parse(text).expect("parse");
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "hola");
    }

    #[test]
    fn parse_empty_input_yields_no_cues() {
        assert_eq!(parse("").expect("parse"), Vec::new());
    }

    #[test]
    fn parse_rejects_missing_arrow() {
        let text = "1\n00:00:00,000 00:00:01,000\nhola\n";
        assert!(matches!(
            parse(text),
            Err(SubcueError::SrtParse { line: 2, .. })
        ));
    }

    #[test]
    fn parse_rejects_non_numeric_index() {
        let text = "uno\n00:00:00,000 --> 00:00:01,000\nhola\n";
        assert!(matches!(
            parse(text),
            Err(SubcueError::SrtParse { line: 1, .. })
        ));
    }

    #[test]
    fn parse_rejects_cue_without_text() {
        let text = "1\n00:00:00,000 --> 00:00:01,000\n\n";
        assert!(matches!(parse(text), Err(SubcueError::SrtParse { .. })));
    }
}
