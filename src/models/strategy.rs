//! Search strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TourError;

/// Largest point count for which [`Strategy::Auto`] picks exact search.
pub const AUTO_BRUTEFORCE_LIMIT: usize = 10;

/// The algorithm used to order points.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Algorithm, Strategy};
///
/// let s: Strategy = "nearest_two_opt".parse().unwrap();
/// assert_eq!(s, Strategy::NearestTwoOpt);
/// assert_eq!(Strategy::Auto.resolve(8), Algorithm::Bruteforce);
/// assert_eq!(Strategy::Auto.resolve(11), Algorithm::NearestTwoOpt);
/// assert!("simulated_annealing".parse::<Strategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Exact search for small inputs, nearest-neighbor + 2-opt otherwise.
    #[default]
    Auto,
    /// Exhaustive permutation search. Optimal, factorial time.
    Bruteforce,
    /// Multi-start nearest-neighbor construction.
    Nearest,
    /// 2-opt local search from the identity order.
    TwoOpt,
    /// Nearest-neighbor construction refined by 2-opt.
    NearestTwoOpt,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Auto,
        Strategy::Bruteforce,
        Strategy::Nearest,
        Strategy::TwoOpt,
        Strategy::NearestTwoOpt,
    ];

    /// The canonical name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Auto => "auto",
            Strategy::Bruteforce => "bruteforce",
            Strategy::Nearest => "nearest",
            Strategy::TwoOpt => "two_opt",
            Strategy::NearestTwoOpt => "nearest_two_opt",
        }
    }

    /// The concrete algorithm this strategy runs for `n` points.
    ///
    /// [`Strategy::Auto`] picks exact search up to [`AUTO_BRUTEFORCE_LIMIT`]
    /// points; every other strategy maps to its own algorithm.
    pub fn resolve(self, n: usize) -> Algorithm {
        match self {
            Strategy::Auto if n <= AUTO_BRUTEFORCE_LIMIT => Algorithm::Bruteforce,
            Strategy::Auto => Algorithm::NearestTwoOpt,
            Strategy::Bruteforce => Algorithm::Bruteforce,
            Strategy::Nearest => Algorithm::Nearest,
            Strategy::TwoOpt => Algorithm::TwoOpt,
            Strategy::NearestTwoOpt => Algorithm::NearestTwoOpt,
        }
    }
}

/// A [`Strategy`] with `Auto` resolved away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bruteforce,
    Nearest,
    TwoOpt,
    NearestTwoOpt,
}

impl From<Algorithm> for Strategy {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bruteforce => Strategy::Bruteforce,
            Algorithm::Nearest => Strategy::Nearest,
            Algorithm::TwoOpt => Strategy::TwoOpt,
            Algorithm::NearestTwoOpt => Strategy::NearestTwoOpt,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Strategy::from(*self).name())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.name() == s)
            .ok_or_else(|| TourError::invalid_argument(format!("unknown strategy {s:?}")))
    }
}
