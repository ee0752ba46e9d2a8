//! Wall-clock time budget for iterative search.

use std::time::{Duration, Instant};

use crate::error::{Result, TourError};

/// An optional wall-clock limit on heuristic work.
///
/// `TimeBudget::UNLIMITED` never expires. A budget is turned into a
/// [`Deadline`] when a search phase starts; the search polls it before each
/// unit of work and stops with its best-so-far result once it has expired.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tour::models::TimeBudget;
///
/// let budget = TimeBudget::from_secs_f64(Some(0.25)).unwrap();
/// assert_eq!(budget.limit(), Some(Duration::from_millis(250)));
/// assert!(!TimeBudget::UNLIMITED.start().expired());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBudget(Option<Duration>);

impl TimeBudget {
    /// A budget that never expires.
    pub const UNLIMITED: TimeBudget = TimeBudget(None);

    /// Creates a budget bounded by `limit`.
    pub const fn new(limit: Duration) -> Self {
        Self(Some(limit))
    }

    /// Creates a budget from optional fractional seconds.
    ///
    /// Fails with [`TourError::InvalidArgument`] on negative or non-finite
    /// values, and on values too large to represent as a [`Duration`].
    pub fn from_secs_f64(secs: Option<f64>) -> Result<Self> {
        let Some(s) = secs else {
            return Ok(Self::UNLIMITED);
        };
        Duration::try_from_secs_f64(s).map(Self::new).map_err(|_| {
            TourError::invalid_argument(format!(
                "time budget must be a non-negative number of seconds, got {s}"
            ))
        })
    }

    /// The configured limit, if any.
    pub fn limit(&self) -> Option<Duration> {
        self.0
    }

    /// Starts the clock.
    pub fn start(self) -> Deadline {
        Deadline {
            started: Instant::now(),
            limit: self.0,
        }
    }
}

impl From<Option<Duration>> for TimeBudget {
    fn from(limit: Option<Duration>) -> Self {
        Self(limit)
    }
}

impl From<Duration> for TimeBudget {
    fn from(limit: Duration) -> Self {
        Self::new(limit)
    }
}

/// A started [`TimeBudget`].
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    /// Returns `true` once strictly more than the limit has elapsed.
    pub fn expired(&self) -> bool {
        match self.limit {
            Some(limit) => self.started.elapsed() > limit,
            None => false,
        }
    }

    /// Time since the deadline was started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
