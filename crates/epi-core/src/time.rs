//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Every tick also has a
//! position in the daily cycle, held in `SimClock`:
//!
//!   time_of_day = PHASES[tick % 4]   (morning → afternoon → evening → night)
//!
//! All durations in the model (latency period, infection duration,
//! enforcement window) are counted in ticks, so schedule arithmetic is exact
//! integer arithmetic.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// Phase of the simulated day.  One phase elapses per tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// All phases in cycle order.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Number of ticks in one simulated day.
    pub const PHASES_PER_DAY: u64 = 4;

    /// The phase that follows `self`; night wraps to morning.
    #[inline]
    pub fn next(self) -> TimeOfDay {
        match self {
            TimeOfDay::Morning   => TimeOfDay::Afternoon,
            TimeOfDay::Afternoon => TimeOfDay::Evening,
            TimeOfDay::Evening   => TimeOfDay::Night,
            TimeOfDay::Night     => TimeOfDay::Morning,
        }
    }

    /// Phase of `tick` for a clock that started in the morning.
    #[inline]
    pub fn of_tick(tick: Tick) -> TimeOfDay {
        Self::ALL[(tick.0 % Self::PHASES_PER_DAY) as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning   => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening   => "evening",
            TimeOfDay::Night     => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Current tick plus its phase of day.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
    /// Phase of day for `current_tick`.
    pub time_of_day: TimeOfDay,
}

impl SimClock {
    /// A clock at tick 0, morning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick and one phase of day.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.time_of_day = self.time_of_day.next();
    }

    /// Whole simulated days elapsed since tick 0.
    #[inline]
    pub fn day(&self) -> u64 {
        self.current_tick.0 / TimeOfDay::PHASES_PER_DAY
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (day {} {})", self.current_tick, self.day(), self.time_of_day)
    }
}
