//! Game-specific error types.
//!
//! The domain has no I/O failure modes of its own, so the taxonomy is
//! narrow: precondition failures (a collaborator resource not ready yet)
//! and out-of-range tuning constants rejected at config load.  Everything
//! else degrades to a guarded no-op at the call site rather than an error.

// This module provides infrastructure types for error propagation.
// Items are public API; dead_code lint is suppressed to avoid forcing premature wiring.
#![allow(dead_code)]
use std::fmt;

/// Top-level error enum for the derby game.
#[derive(Debug)]
pub enum GameError {
    /// The bat rig was not present in the world when a match start was
    /// requested.  The start is refused; this is a precondition check,
    /// not a runtime fault.
    BatNotReady {
        /// Human-readable description of where the lookup occurred.
        context: &'static str,
    },

    /// A gameplay constant is outside its safe operating range.
    /// Returned by the validation helpers run against loaded configs.
    UnsafeConstant {
        /// Name of the constant (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BatNotReady { context } => {
                write!(f, "bat rig not available during '{}'", context)
            }
            GameError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if the home-run line is not strictly positive.
pub fn validate_homerun_line(value: f32) -> GameResult<()> {
    if value <= 0.0 {
        Err(GameError::UnsafeConstant {
            name: "HOMERUN_LINE_Z",
            value,
            safe_range: "(0.0, ∞)",
        })
    } else {
        Ok(())
    }
}

/// Returns an error unless both pitch windows are strictly positive.
///
/// A positive arm delay and a positive evaluation window are what guarantee
/// that any bat contact lands strictly before final-position sampling: both
/// are measured on the same per-ball clock, so `arm < arm + eval` holds by
/// construction.  A zero or negative window would collapse that ordering.
pub fn validate_pitch_windows(arm_delay: f32, eval_window: f32) -> GameResult<()> {
    if arm_delay <= 0.0 {
        return Err(GameError::UnsafeConstant {
            name: "PITCH_ARM_DELAY_SECS",
            value: arm_delay,
            safe_range: "(0.0, ∞)",
        });
    }
    if eval_window <= 0.0 {
        return Err(GameError::UnsafeConstant {
            name: "PITCH_EVAL_WINDOW_SECS",
            value: eval_window,
            safe_range: "(0.0, ∞)",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_windows_validate() {
        assert!(validate_pitch_windows(
            crate::constants::PITCH_ARM_DELAY_SECS,
            crate::constants::PITCH_EVAL_WINDOW_SECS
        )
        .is_ok());
    }

    #[test]
    fn degenerate_windows_are_rejected() {
        assert!(validate_pitch_windows(0.0, 5.0).is_err());
        assert!(validate_pitch_windows(2.0, 0.0).is_err());
        assert!(validate_pitch_windows(2.0, -1.0).is_err());
    }

    #[test]
    fn homerun_line_must_be_positive() {
        assert!(validate_homerun_line(200.0).is_ok());
        assert!(validate_homerun_line(0.0).is_err());
    }
}
