use serde::Serialize;

/// Playback status as reported by `cmus-remote -Q`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
    /// cmus not running, or the query produced nothing usable.
    #[default]
    Unknown,
}

impl PlaybackStatus {
    /// Map the status token from a `status <token>` line.
    pub fn from_token(token: &str) -> Self {
        match token {
            "playing" => Self::Playing,
            "paused" => Self::Paused,
            "stopped" => Self::Stopped,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields scraped from the player query, before any formatting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawMetadata {
    pub status: PlaybackStatus,
    pub artist: String,
    pub title: String,
    pub date: String,
    pub album: String,
    /// Track length in seconds.
    pub duration: u64,
    /// Elapsed seconds.
    pub position: u64,
}

/// Presentation-ready pieces derived from [`RawMetadata`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormattedDisplay {
    /// `"{artist} - {title}"`
    pub song: String,
    /// `"10m41s/13m49s"`
    pub time: String,
    /// `"[{date}] {album}"`
    pub album: String,
    /// 0.0..=100.0
    pub percent: f64,
}

/// The JSON object handed to the status bar. Serialises to exactly
/// `{"status":..,"text":..,"tooltip":..}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct OutputRecord {
    pub status: PlaybackStatus,
    pub text: String,
    pub tooltip: String,
}

impl OutputRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub const DEFAULT_BAR_WIDTH: usize = 20;

/// Rendering switches threaded through the formatting stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub progress_bar: bool,
    /// Number of glyph cells in the bar.
    pub bar_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            progress_bar: false,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}
