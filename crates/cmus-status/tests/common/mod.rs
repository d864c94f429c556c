//! Captured `cmus-remote -Q` outputs shared by the integration tests.

#![allow(dead_code)]

pub const PLAYING: &str = include_str!("../fixtures/cmus_playing");
pub const PAUSED: &str = include_str!("../fixtures/cmus_paused");
pub const STOPPED: &str = include_str!("../fixtures/cmus_stopped");
pub const NOT_RUNNING: &str = include_str!("../fixtures/cmus_notrunning");

/// Every fixture, labelled for assertion messages.
pub fn all() -> [(&'static str, &'static str); 4] {
    [
        ("playing", PLAYING),
        ("paused", PAUSED),
        ("stopped", STOPPED),
        ("notrunning", NOT_RUNNING),
    ]
}
