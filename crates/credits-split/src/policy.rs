//! Validation timing.

use serde::{Deserialize, Serialize};

use credits_types::FULL_ALLOCATION;

use crate::{Result, SplitError};

/// When per-entry checks run during editing.
///
/// The 100-sum rule is enforced only at submission under either policy:
/// redistributing by hand necessarily passes through unbalanced states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Store raw percentages; check everything at submit.
    Lazy,
    /// Reject percentages outside `[0, 100]` as they are entered.
    #[default]
    Eager,
}

impl ValidationPolicy {
    /// Gate a percentage about to be stored.
    ///
    /// # Errors
    ///
    /// - [`SplitError::PercentageOutOfRange`] under [`ValidationPolicy::Eager`]
    ///   when `value` is outside `[0, 100]`
    pub fn check_percentage(self, value: i64) -> Result<()> {
        match self {
            ValidationPolicy::Lazy => Ok(()),
            ValidationPolicy::Eager if (0..=FULL_ALLOCATION).contains(&value) => Ok(()),
            ValidationPolicy::Eager => Err(SplitError::PercentageOutOfRange { value }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_eager() {
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::Eager);
    }

    #[test]
    fn test_eager_bounds() {
        let policy = ValidationPolicy::Eager;
        assert!(policy.check_percentage(0).is_ok());
        assert!(policy.check_percentage(100).is_ok());
        assert!(policy.check_percentage(-1).is_err());
        assert!(policy.check_percentage(101).is_err());
    }

    #[test]
    fn test_lazy_accepts_anything() {
        assert!(ValidationPolicy::Lazy.check_percentage(-40).is_ok());
        assert!(ValidationPolicy::Lazy.check_percentage(900).is_ok());
    }

    #[test]
    fn test_policy_wire_names() {
        let policy: ValidationPolicy = serde_json::from_str("\"lazy\"").expect("deserialize");
        assert_eq!(policy, ValidationPolicy::Lazy);
    }
}
