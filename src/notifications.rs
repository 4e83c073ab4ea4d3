//! Top-line status message with auto-clear.
//!
//! One message is shown at a time; a newer message replaces the current one
//! and restarts the timeout. When the timeout runs out the banner returns.

pub const DEFAULT_BANNER: &str = "LAKESIDE - a quiet place to fish";

#[derive(Debug, Clone, PartialEq)]
struct Notice {
    text: String,
    remaining_ms: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notifications {
    current: Option<Notice>,
}

impl Notifications {
    /// Shows `text` for `timeout_ms`. A zero timeout keeps it until replaced.
    pub fn push(&mut self, text: impl Into<String>, timeout_ms: f64) {
        self.current = Some(Notice {
            text: text.into(),
            remaining_ms: if timeout_ms > 0.0 {
                timeout_ms
            } else {
                f64::INFINITY
            },
        });
    }

    pub fn tick(&mut self, dt_ms: f64) {
        if let Some(notice) = &mut self.current {
            notice.remaining_ms -= dt_ms;
            if notice.remaining_ms <= 0.0 {
                self.current = None;
            }
        }
    }

    /// The message to display: the active notice or the banner.
    pub fn text(&self) -> &str {
        self.current
            .as_ref()
            .map(|n| n.text.as_str())
            .unwrap_or(DEFAULT_BANNER)
    }

    pub fn is_showing_notice(&self) -> bool {
        self.current.is_some()
    }
}
