//! Candidate application domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an application.
///
/// Identifiers are minted by the backend and treated as opaque strings on
/// this side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    /// Wrap a backend-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Truncated form used in compact table cells.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Examination a candidate is applying for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamType {
    Upsc,
    Bpsc,
}

impl ExamType {
    pub const ALL: [ExamType; 2] = [ExamType::Upsc, ExamType::Bpsc];

    /// Wire form used in query parameters and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Upsc => "upsc",
            ExamType::Bpsc => "bpsc",
        }
    }

    /// Uppercase display form.
    pub fn label(&self) -> &'static str {
        match self {
            ExamType::Upsc => "UPSC",
            ExamType::Bpsc => "BPSC",
        }
    }
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an exam type string is not one of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown exam type: {0}")]
pub struct ParseExamTypeError(pub String);

impl std::str::FromStr for ExamType {
    type Err = ParseExamTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upsc" => Ok(ExamType::Upsc),
            "bpsc" => Ok(ExamType::Bpsc),
            other => Err(ParseExamTypeError(other.to_string())),
        }
    }
}

/// Review status of an application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Freshly submitted, nobody has looked at it yet.
    #[default]
    Pending,
    /// An admin has reviewed the candidate's details.
    Reviewed,
    /// An interview slot has been scheduled.
    Scheduled,
    /// The mock interview took place.
    Completed,
    /// The application was turned down.
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Scheduled,
        ApplicationStatus::Completed,
        ApplicationStatus::Rejected,
    ];

    /// Wire form used in query parameters and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Scheduled => "scheduled",
            ApplicationStatus::Completed => "completed",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Capitalized display form.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Reviewed => "Reviewed",
            ApplicationStatus::Scheduled => "Scheduled",
            ApplicationStatus::Completed => "Completed",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not one of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

impl std::str::FromStr for ApplicationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "reviewed" => Ok(ApplicationStatus::Reviewed),
            "scheduled" => Ok(ApplicationStatus::Scheduled),
            "completed" => Ok(ApplicationStatus::Completed),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A candidate's mock-interview registration record.
///
/// Owned by the backend; the client only ever holds the copy from its most
/// recent fetch. Marks travel as free-form text because the backend stores
/// whatever the candidate typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: ApplicationId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub exam_type: ExamType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelims_marks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mains_marks: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_wire_strings_round_trip() {
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::from_str(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn exam_wire_strings_round_trip() {
        for exam in ExamType::ALL {
            assert_eq!(ExamType::from_str(exam.as_str()), Ok(exam));
        }
    }

    #[test]
    fn unknown_enum_strings_are_rejected() {
        assert!(ApplicationStatus::from_str("archived").is_err());
        assert!(ApplicationStatus::from_str("Pending").is_err());
        assert!(ExamType::from_str("ssc").is_err());
        assert!(ExamType::from_str("").is_err());
    }

    #[test]
    fn decodes_backend_shaped_json() {
        let json = r#"{
            "_id": "66f2a1b3c4d5e6f708192a3b",
            "name": "Asha Verma",
            "email": "asha@example.com",
            "phone": "9876543210",
            "examType": "upsc",
            "prelimsMarks": "98",
            "status": "scheduled",
            "photoUrl": "http://localhost:5000/uploads/asha.jpg",
            "createdAt": "2026-01-15T09:30:00Z"
        }"#;

        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.id.as_str(), "66f2a1b3c4d5e6f708192a3b");
        assert_eq!(app.id.short(), "66f2a1b3");
        assert_eq!(app.exam_type, ExamType::Upsc);
        assert_eq!(app.status, ApplicationStatus::Scheduled);
        assert_eq!(app.prelims_marks.as_deref(), Some("98"));
        assert_eq!(app.mains_marks, None);
        assert_eq!(app.notes, None);
    }

    #[test]
    fn absent_status_defaults_to_pending() {
        let json = r#"{
            "_id": "abc123",
            "name": "Ravi",
            "email": "ravi@example.com",
            "phone": "9123456780",
            "examType": "bpsc",
            "createdAt": "2026-02-01T12:00:00Z"
        }"#;

        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.photo_url, None);
    }

    #[test]
    fn short_id_handles_short_strings() {
        assert_eq!(ApplicationId::new("ab").short(), "ab");
    }

    #[test]
    fn full_record_serializes_with_backend_field_names() {
        let json = r#"{
            "_id": "abc123",
            "name": "Ravi",
            "email": "ravi@example.com",
            "phone": "9123456780",
            "examType": "bpsc",
            "createdAt": "2026-02-01T12:00:00Z"
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();

        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["_id"], "abc123");
        assert_eq!(value["examType"], "bpsc");
        assert_eq!(value["status"], "pending");
        // Unset optionals stay off the wire for the full-record update.
        assert!(value.get("notes").is_none());
    }
}
