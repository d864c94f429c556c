use crate::progress::draw_progress;
use crate::protocol::{FormattedDisplay, OutputRecord, PlaybackStatus, RenderOptions};

const ICON_PLAYING: char = '▶';
const ICON_PAUSED: char = '⏸';
const ICON_STOPPED: char = '⏹';

/// Pick icon, text and tooltip for `status`.
pub fn select_presentation(
    status: PlaybackStatus,
    formatted: &FormattedDisplay,
    opts: &RenderOptions,
) -> OutputRecord {
    let (text, tooltip) = match status {
        PlaybackStatus::Playing => active(ICON_PLAYING, formatted, opts),
        PlaybackStatus::Paused => active(ICON_PAUSED, formatted, opts),
        PlaybackStatus::Stopped => (format!("[{}]", ICON_STOPPED), String::new()),
        PlaybackStatus::Unknown => (String::new(), String::new()),
    };

    OutputRecord {
        status,
        text,
        tooltip,
    }
}

/// Shared layout for a loaded track, playing or paused.
fn active(icon: char, formatted: &FormattedDisplay, opts: &RenderOptions) -> (String, String) {
    let mut text = format!("[{}] {}", icon, formatted.song);
    if opts.progress_bar {
        text.push_str(&draw_progress(formatted.percent, opts.bar_width));
    }
    let tooltip = format!(
        "{} ({:.2}%)\n{}",
        formatted.time, formatted.percent, formatted.album
    );
    (text, tooltip)
}
