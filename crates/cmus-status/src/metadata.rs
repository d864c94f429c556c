//! Collects [`RawMetadata`] from the full query output in one pass.

use tracing::{debug, warn};

use crate::extract::{extract_number, extract_tag, extract_token};
use crate::protocol::{PlaybackStatus, RawMetadata};

/// Per-field slots; a slot is frozen once it holds a value.
#[derive(Default)]
struct Slots {
    status: Option<PlaybackStatus>,
    duration: Option<u64>,
    position: Option<u64>,
    artist: Option<String>,
    album: Option<String>,
    title: Option<String>,
    date: Option<String>,
}

impl Slots {
    fn into_metadata(self) -> RawMetadata {
        RawMetadata {
            status: self.status.unwrap_or_default(),
            artist: self.artist.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            album: self.album.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
        }
    }
}

fn fill_tag(slot: &mut Option<String>, line: &str, prefix: &str, name: &str) {
    if slot.is_some() {
        return;
    }
    if let Some(value) = extract_tag(line, prefix) {
        debug!(field = name, value = %value, "found match");
        *slot = Some(value);
    }
}

fn fill_number(slot: &mut Option<u64>, line: &str, prefix: &str, name: &str) {
    if slot.is_some() {
        return;
    }
    if let Some(value) = extract_number(line, prefix) {
        debug!(field = name, value, "found match");
        *slot = Some(value);
    }
}

/// Scan `output` once. The first line matching a field's prefix wins;
/// later lines for the same field are ignored. Never fails: unknown or
/// malformed lines leave the field at its default.
pub fn collect_metadata(output: &str) -> RawMetadata {
    let mut slots = Slots::default();

    for raw_line in output.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if slots.status.is_none() {
            if let Some(token) = extract_token(line, "status ") {
                let status = PlaybackStatus::from_token(token);
                if status == PlaybackStatus::Unknown {
                    warn!(token, "unrecognised playback status");
                }
                debug!(field = "status", value = %status, "found match");
                slots.status = Some(status);
            }
        }
        fill_number(&mut slots.duration, line, "duration ", "duration");
        fill_number(&mut slots.position, line, "position ", "position");
        fill_tag(&mut slots.artist, line, "tag artist ", "artist");
        fill_tag(&mut slots.album, line, "tag album ", "album");
        fill_tag(&mut slots.title, line, "tag title ", "title");
        fill_tag(&mut slots.date, line, "tag date ", "date");
    }

    slots.into_metadata()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_unknown() {
        assert_eq!(collect_metadata(""), RawMetadata::default());
        assert_eq!(collect_metadata("  \n\t\n"), RawMetadata::default());
        assert_eq!(collect_metadata("").status, PlaybackStatus::Unknown);
    }

    #[test]
    fn test_first_match_wins() {
        let meta = collect_metadata(
            "status paused\nduration 100\ntag artist First\nstatus playing\nduration 200\ntag artist Second\n",
        );
        assert_eq!(meta.status, PlaybackStatus::Paused);
        assert_eq!(meta.duration, 100);
        assert_eq!(meta.artist, "First");
    }

    #[test]
    fn test_order_independent() {
        let a = collect_metadata("status playing\nduration 300\nposition 10\ntag title T\ntag artist A\n");
        let b = collect_metadata("tag artist A\nposition 10\ntag title T\nduration 300\nstatus playing\n");
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_number_does_not_freeze_slot() {
        let meta = collect_metadata("duration soon\nduration 42\n");
        assert_eq!(meta.duration, 42);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let meta = collect_metadata("   status stopped   \r\n\ttag date 1999\t\n");
        assert_eq!(meta.status, PlaybackStatus::Stopped);
        assert_eq!(meta.date, "1999");
    }

    #[test]
    fn test_similar_prefixes_ignored() {
        let meta = collect_metadata("tag albumartist Someone\ntag artistsort Else\nset status_display_program\n");
        assert_eq!(meta.album, "");
        assert_eq!(meta.artist, "");
        assert_eq!(meta.status, PlaybackStatus::Unknown);
    }

    #[test]
    fn test_unrecognised_status_still_populates_slot() {
        let meta = collect_metadata("status buffering\nstatus playing\n");
        assert_eq!(meta.status, PlaybackStatus::Unknown);
    }
}
