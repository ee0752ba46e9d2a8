//! Solve options.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, TourError};
use crate::models::{Strategy, TimeBudget};

/// Options for a single route search call.
///
/// Defaults to [`Strategy::Auto`], a closed tour, and no time budget. Can be
/// deserialized from front-end JSON of the form
/// `{"strategy": "nearest", "closed": false, "time_budget_s": 0.05}`, with
/// every field optional.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tour::models::Strategy;
/// use u_tour::solver::SolveOptions;
///
/// let options = SolveOptions::default()
///     .with_strategy_name("nearest_two_opt").unwrap()
///     .with_closed(false)
///     .with_time_budget(Duration::from_millis(50));
/// assert_eq!(options.strategy, Strategy::NearestTwoOpt);
/// assert!(!options.closed);
/// assert!(SolveOptions::default().with_strategy_name("genetic").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSolveOptions")]
pub struct SolveOptions {
    /// Algorithm to use; `Auto` is resolved per call from the point count.
    pub strategy: Strategy,
    /// Treat the route as a cycle (last point connects back to the first).
    pub closed: bool,
    /// Wall-clock limit for each heuristic phase.
    pub time_budget: TimeBudget,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            closed: true,
            time_budget: TimeBudget::UNLIMITED,
        }
    }
}

impl SolveOptions {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the strategy by name, failing with
    /// [`TourError::InvalidArgument`] if the name is unknown.
    pub fn with_strategy_name(self, name: &str) -> Result<Self> {
        Ok(self.with_strategy(name.parse()?))
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_time_budget(mut self, limit: Duration) -> Self {
        self.time_budget = TimeBudget::new(limit);
        self
    }

    pub fn without_time_budget(mut self) -> Self {
        self.time_budget = TimeBudget::UNLIMITED;
        self
    }

    /// Builds options from loosely typed front-end fields.
    ///
    /// Missing fields take their defaults. Fails with
    /// [`TourError::InvalidArgument`] on an unknown strategy name or a
    /// negative or non-finite budget.
    pub fn from_parts(
        strategy: Option<&str>,
        closed: Option<bool>,
        time_budget_s: Option<f64>,
    ) -> Result<Self> {
        let strategy = match strategy {
            Some(name) => name.parse()?,
            None => Strategy::Auto,
        };
        Ok(Self {
            strategy,
            closed: closed.unwrap_or(true),
            time_budget: TimeBudget::from_secs_f64(time_budget_s)?,
        })
    }
}

#[derive(Deserialize)]
struct RawSolveOptions {
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    closed: Option<bool>,
    #[serde(default)]
    time_budget_s: Option<f64>,
}

impl TryFrom<RawSolveOptions> for SolveOptions {
    type Error = TourError;

    fn try_from(raw: RawSolveOptions) -> Result<Self> {
        Self::from_parts(raw.strategy.as_deref(), raw.closed, raw.time_budget_s)
    }
}
