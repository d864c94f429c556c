//! Turns `cmus-remote -Q` output into a status-bar JSON record.
//!
//! ```text
//!   raw text ─► collect_metadata ─► format_metadata ─► select_presentation ─► OutputRecord
//!                                                          └─ draw_progress (when enabled)
//! ```
//!
//! Every stage is a pure function of its input. Spawning `cmus-remote`
//! and printing the record belong to the `cmus-waybar` binary.

pub mod extract;
pub mod format;
pub mod metadata;
pub mod presentation;
pub mod progress;
pub mod protocol;

pub use protocol::{
    FormattedDisplay, OutputRecord, PlaybackStatus, RawMetadata, RenderOptions, DEFAULT_BAR_WIDTH,
};

/// Run the whole pipeline over raw query output.
pub fn render(output: &str, opts: &RenderOptions) -> OutputRecord {
    let meta = metadata::collect_metadata(output);
    let formatted = format::format_metadata(&meta);
    presentation::select_presentation(meta.status, &formatted, opts)
}
