use std::str::FromStr;

use super::value_objects::SolveMethod;

/// Default instance shown before the user picks one.
pub const DEFAULT_INSTANCE: &str = "att48.tsp";
/// Default solve time limit in seconds.
pub const DEFAULT_TIME_LIMIT: i64 = 100;
/// Default random seed handed to the backend.
pub const DEFAULT_SEED: i64 = 123;

/// The parameters of the next solve request.
///
/// One instance per controller, created with the defaults at startup and
/// overwritten only by a successfully validated submission (plus the instance
/// field, which the instance-selection handler updates directly).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveParameters {
    pub instance: String,
    pub method: SolveMethod,
    pub time_limit_seconds: i64,
    pub seed: i64,
}

impl Default for SolveParameters {
    fn default() -> Self {
        Self {
            instance: DEFAULT_INSTANCE.to_string(),
            method: SolveMethod::Greedy,
            time_limit_seconds: DEFAULT_TIME_LIMIT,
            seed: DEFAULT_SEED,
        }
    }
}

/// Validation failure for a submitted form.
///
/// The time-limit and seed fields arrive as free text; anything that does not
/// parse as an integer is rejected, and so is a parsed zero: the backend form
/// check has always treated a zero value the same as a parse failure, and
/// submissions keep that contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("time limit {0:?} is not a usable integer")]
    TimeLimit(String),

    #[error("seed {0:?} is not a usable integer")]
    Seed(String),
}

/// Raw values read from the form controls at submit time, before validation.
#[derive(Debug, Clone)]
pub struct SolveInput {
    pub instance: String,
    pub method: SolveMethod,
    pub time_limit: String,
    pub seed: String,
}

impl SolveInput {
    /// Parse the free-text fields, rejecting non-integers and zeros.
    ///
    /// Returns `(time_limit_seconds, seed)` on success. A failure must leave
    /// the caller's parameters untouched; this method therefore mutates
    /// nothing.
    pub fn validate(&self) -> Result<(i64, i64), ValidationError> {
        let time_limit = parse_non_zero(&self.time_limit)
            .ok_or_else(|| ValidationError::TimeLimit(self.time_limit.clone()))?;
        let seed =
            parse_non_zero(&self.seed).ok_or_else(|| ValidationError::Seed(self.seed.clone()))?;
        Ok((time_limit, seed))
    }
}

fn parse_non_zero(text: &str) -> Option<i64> {
    match i64::from_str(text.trim()) {
        Ok(0) => None,
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// Immutable snapshot of one solve request, taken at dispatch time.
///
/// The completion path reads this snapshot rather than the live parameters, so
/// an instance change arriving while the request is in flight cannot redirect
/// the refreshed solution plot to the wrong instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub user_id: String,
    pub instance: String,
    pub method: SolveMethod,
    pub time_limit_seconds: i64,
    pub seed: i64,
}

impl SolveRequest {
    pub fn snapshot(user_id: impl Into<String>, parameters: &SolveParameters) -> Self {
        Self {
            user_id: user_id.into(),
            instance: parameters.instance.clone(),
            method: parameters.method,
            time_limit_seconds: parameters.time_limit_seconds,
            seed: parameters.seed,
        }
    }
}
