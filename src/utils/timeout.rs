use crate::domain::model::Value;
use crate::utils::coerce::to_str;
use crate::utils::error::{MaliceError, Result};
use std::future::Future;
use std::time::{Duration, Instant};

/// A deadline threaded explicitly through work that must not overrun.
///
/// Timeouts are whole seconds; a zero timeout means no deadline at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    seconds: u64,
    expires_at: Option<Instant>,
}

impl Deadline {
    pub fn unbounded() -> Self {
        Self {
            seconds: 0,
            expires_at: None,
        }
    }

    pub fn after_secs(seconds: u64) -> Self {
        if seconds == 0 {
            return Self::unbounded();
        }
        Self {
            seconds,
            expires_at: Some(Instant::now() + Duration::from_secs(seconds)),
        }
    }

    /// Sub-second parts of the duration are dropped.
    pub fn after(timeout: Duration) -> Self {
        Self::after_secs(timeout.as_secs())
    }

    /// Builds a deadline from a numeric-looking value, truncated to seconds.
    pub fn from_value(value: &Value) -> Result<Self> {
        let invalid = |reason: String| MaliceError::InvalidArgumentError {
            name: "timeout".to_string(),
            reason,
        };
        let seconds = match value {
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            Value::Str(_) | Value::Bytes(_) => {
                let text = to_str(value)?;
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| invalid(format!("{:?} is not a number of seconds", text)))?
            }
            other => return Err(invalid(format!("{} is not a number of seconds", other))),
        };
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(invalid(format!("{} is not a valid number of seconds", seconds)));
        }
        Ok(Self::after_secs(seconds.trunc() as u64))
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Time left before expiry, `None` for an unbounded deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_some_and(|left| left.is_zero())
    }

    /// Fails with a timeout error once the deadline has passed.
    pub fn check(&self) -> Result<()> {
        if self.is_expired() {
            return Err(MaliceError::TimeoutError {
                seconds: self.seconds,
            });
        }
        Ok(())
    }
}

impl From<Duration> for Deadline {
    fn from(timeout: Duration) -> Self {
        Deadline::after(timeout)
    }
}

/// Runs `work` inside a timeout scope, failing with a timeout error if the
/// deadline passes first. The pending work is dropped on expiry, and an
/// already expired deadline fails without polling `work` at all.
pub async fn using_timeout<F, T>(deadline: Deadline, work: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    deadline.check()?;
    match deadline.remaining() {
        None => work.await,
        Some(left) => match tokio::time::timeout(left, work).await {
            Ok(result) => result,
            Err(_) => {
                tracing::debug!("Timeout scope of {}s expired", deadline.seconds);
                Err(MaliceError::TimeoutError {
                    seconds: deadline.seconds,
                })
            }
        },
    }
}
