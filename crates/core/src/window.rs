//! Time windows
//!
//! A [`Window`] is the interval an asset's costs are attributed to. Assets
//! store their start and end only here, so the record's own start/end and its
//! window can never disagree.

use chrono::{DateTime, Duration, Utc};

/// Interval `[start, end)` of UTC instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Window {
    /// Create a window from its two endpoints
    ///
    /// No ordering is enforced; a window whose end precedes its start has a
    /// negative duration.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Start instant
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// End instant
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// `end - start`
    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }

    /// Duration in fractional minutes
    pub fn minutes(&self) -> f64 {
        let d = self.duration();
        match d.num_microseconds() {
            Some(us) => us as f64 / 60_000_000.0,
            None => d.num_seconds() as f64 / 60.0,
        }
    }

    /// Duration in fractional hours
    pub fn hours(&self) -> f64 {
        self.minutes() / 60.0
    }

    /// Divide `total` by the window length in hours
    ///
    /// Turns accumulated quantities (byte-hours, core-hours) into average
    /// rates. Returns 0 for empty or inverted windows.
    pub fn per_hour(&self, total: f64) -> f64 {
        let hours = self.hours();
        if hours <= 0.0 {
            0.0
        } else {
            total / hours
        }
    }
}
