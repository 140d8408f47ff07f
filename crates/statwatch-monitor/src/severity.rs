//! Four-level monitoring status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a probe or of a whole report.
///
/// OK, WARNING and CRITICAL are ordered by code. UNKNOWN marks a failed
/// evaluation rather than a worse state, so there is no `Ord`; compare
/// through [`Severity::code`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Numeric status code (0..=3).
    pub fn code(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    /// Status name as printed in report headers.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Severity::Ok),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Critical),
            3 => Some(Severity::Unknown),
            _ => None,
        }
    }

    /// WARNING or CRITICAL.
    pub fn is_alert(self) -> bool {
        matches!(self, Severity::Warning | Severity::Critical)
    }

    /// Monotonic max by code, used for the worst-of-many within one probe.
    pub fn escalate(self, other: Severity) -> Severity {
        if other.code() > self.code() {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Severity::Ok.code(), 0);
        assert_eq!(Severity::Warning.code(), 1);
        assert_eq!(Severity::Critical.code(), 2);
        assert_eq!(Severity::Unknown.code(), 3);
    }

    #[test]
    fn test_from_code() {
        for severity in [
            Severity::Ok,
            Severity::Warning,
            Severity::Critical,
            Severity::Unknown,
        ] {
            assert_eq!(Severity::from_code(severity.code()), Some(severity));
        }
        assert_eq!(Severity::from_code(4), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Severity::Ok.to_string(), "OK");
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
        assert_eq!(Severity::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_escalate_only_goes_up() {
        assert_eq!(Severity::Ok.escalate(Severity::Warning), Severity::Warning);
        assert_eq!(Severity::Warning.escalate(Severity::Critical), Severity::Critical);
        assert_eq!(Severity::Critical.escalate(Severity::Warning), Severity::Critical);
        assert_eq!(Severity::Warning.escalate(Severity::Ok), Severity::Warning);
    }

    #[test]
    fn test_is_alert() {
        assert!(!Severity::Ok.is_alert());
        assert!(Severity::Warning.is_alert());
        assert!(Severity::Critical.is_alert());
        assert!(!Severity::Unknown.is_alert());
    }

    #[test]
    fn test_default_is_ok() {
        assert_eq!(Severity::default(), Severity::Ok);
    }

    #[test]
    fn test_serialize_uppercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
    }
}
