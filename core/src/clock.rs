use chrono::{DateTime, TimeDelta, Utc};

/// Countdown anchored at the moment the board was dealt.
///
/// Nothing is ticked down, every query derives the elapsed time from the `now` supplied by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameClock {
    started_at: DateTime<Utc>,
    duration: TimeDelta,
}

impl GameClock {
    pub const fn start(started_at: DateTime<Utc>, duration: TimeDelta) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time since start, never negative.
    pub fn elapsed(&self, now: DateTime<Utc>) -> TimeDelta {
        (now - self.started_at).max(TimeDelta::zero())
    }

    /// Time left, never negative.
    pub fn remaining(&self, now: DateTime<Utc>) -> TimeDelta {
        (self.duration - self.elapsed(now)).max(TimeDelta::zero())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.elapsed(now) >= self.duration
    }

    /// Whole seconds shown to the player, rounded up.
    pub fn countdown_secs(&self, now: DateTime<Utc>) -> u32 {
        let secs = (self.remaining(now).num_milliseconds() + 999) / 1000;
        u32::try_from(secs).unwrap_or(u32::MAX)
    }
}
