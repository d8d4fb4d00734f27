//! Closed status and priority sets for tickets.
//!
//! The wire representation uses the human-readable labels shown in the UI
//! (`"In Progress"`, not `"in_progress"`), which are also the values stored
//! in the `tickets.status` / `tickets.priority` columns. Anything outside
//! these sets is rejected at the service boundary as a validation failure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Ticket lifecycle status.
///
/// The UI allows any transition at any time; there is no workflow
/// enforcement beyond membership in this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl TicketStatus {
    /// The wire/database label for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
        }
    }

    /// Interpret an optional query parameter as a status filter.
    ///
    /// `None`, the empty string, and the literal `"All"` all mean
    /// "no filter". Any other value must be a member of the closed set.
    pub fn parse_filter(value: Option<&str>) -> Result<Option<Self>, CoreError> {
        parse_filter_value(value)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in progress" | "in-progress" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            _ => Err(CoreError::Validation(format!(
                "Unknown status '{s}', expected one of: Open, In Progress, Resolved"
            ))),
        }
    }
}

/// Ticket priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

impl TicketPriority {
    /// The wire/database label for this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
        }
    }

    /// Interpret an optional query parameter as a priority filter.
    ///
    /// Same contract as [`TicketStatus::parse_filter`].
    pub fn parse_filter(value: Option<&str>) -> Result<Option<Self>, CoreError> {
        parse_filter_value(value)
    }
}

impl Default for TicketPriority {
    fn default() -> Self {
        TicketPriority::Low
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            _ => Err(CoreError::Validation(format!(
                "Unknown priority '{s}', expected one of: Low, Medium, High"
            ))),
        }
    }
}

fn parse_filter_value<T: FromStr<Err = CoreError>>(
    value: Option<&str>,
) -> Result<Option<T>, CoreError> {
    match value.map(str::trim) {
        None => Ok(None),
        Some("") | Some("All") => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_labels() {
        for status in [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
        ] {
            assert_eq!(status.as_str().parse::<TicketStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(
            "in progress".parse::<TicketStatus>().unwrap(),
            TicketStatus::InProgress
        );
        assert_eq!("OPEN".parse::<TicketStatus>().unwrap(), TicketStatus::Open);
    }

    #[test]
    fn status_rejects_closed() {
        // "Closed" appeared in one of the original forms but is not part of
        // the unified set.
        assert!("Closed".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn status_serde_uses_ui_labels() {
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let back: TicketStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TicketStatus::InProgress);
    }

    #[test]
    fn priority_defaults_to_low() {
        assert_eq!(TicketPriority::default(), TicketPriority::Low);
    }

    #[test]
    fn filter_treats_all_and_blank_as_no_filter() {
        assert_eq!(TicketStatus::parse_filter(None).unwrap(), None);
        assert_eq!(TicketStatus::parse_filter(Some("All")).unwrap(), None);
        assert_eq!(TicketStatus::parse_filter(Some("  ")).unwrap(), None);
        assert_eq!(
            TicketPriority::parse_filter(Some("High")).unwrap(),
            Some(TicketPriority::High)
        );
    }

    #[test]
    fn filter_rejects_out_of_set_values() {
        assert!(TicketStatus::parse_filter(Some("Reticulating")).is_err());
        assert!(TicketPriority::parse_filter(Some("Urgent")).is_err());
    }
}
