//! Notification type definitions

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    TaskAssigned,       // A task was assigned to you
    TaskReviewed,       // Your submission was approved or rejected
    WarningIssued,      // A warning was issued against you
    SystemAnnouncement, // Platform-wide announcement
    Other,              // Free-form mentor message
}

impl NotificationType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::TaskAssigned => "TASK_ASSIGNED",
            Self::TaskReviewed => "TASK_REVIEWED",
            Self::WarningIssued => "WARNING_ISSUED",
            Self::SystemAnnouncement => "SYSTEM_ANNOUNCEMENT",
            Self::Other => "OTHER",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "TASK_ASSIGNED" => Some(Self::TaskAssigned),
            "TASK_REVIEWED" => Some(Self::TaskReviewed),
            "WARNING_ISSUED" => Some(Self::WarningIssued),
            "SYSTEM_ANNOUNCEMENT" => Some(Self::SystemAnnouncement),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_strings_round_trip() {
        for t in [
            NotificationType::TaskAssigned,
            NotificationType::TaskReviewed,
            NotificationType::WarningIssued,
            NotificationType::SystemAnnouncement,
            NotificationType::Other,
        ] {
            assert_eq!(NotificationType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(NotificationType::from_str("BOGUS"), None);
    }
}
