//! Task record and priority scale.
//!
//! # Responsibility
//! - Define the single work-item shape owned by exactly one column.
//! - Parse priority tokens arriving from untyped UI input.
//!
//! # Invariants
//! - `id` is stable, globally unique, and never reused after deletion.
//! - `created` is set once at construction and never updated.

use crate::model::ValidationError;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Three-step urgency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Canonical lowercase token, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ValidationError::InvalidPriority(other.to_string())),
        }
    }
}

/// A single work item.
///
/// Serialized field names stay camelCase (`dueDate`) so snapshots written by
/// earlier versions of the app load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global id, immutable once created.
    pub id: TaskId,
    /// Display title; must not be blank after trim.
    pub title: String,
    /// Free-form description; may be empty.
    pub description: String,
    pub priority: Priority,
    /// Optional deadline, date precision only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Creation date, set once and immutable thereafter.
    pub created: NaiveDate,
}

impl Task {
    /// Creates a task dated today (UTC).
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            priority,
            due_date,
            created: Utc::now().date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Priority, Task};
    use crate::model::ValidationError;
    use chrono::NaiveDate;

    #[test]
    fn priority_parses_known_tokens_and_rejects_others() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" medium ".parse::<Priority>().unwrap(), Priority::Medium);
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err, ValidationError::InvalidPriority("urgent".to_string()));
    }

    #[test]
    fn task_serializes_with_camel_case_and_plain_dates() {
        let mut task = Task::new("Write spec", "first draft", Priority::High, None);
        task.due_date = NaiveDate::from_ymd_opt(2026, 9, 15);

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["title"], "Write spec");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["dueDate"], "2026-09-15");
        assert!(json["created"].as_str().is_some());
    }

    #[test]
    fn task_without_due_date_omits_the_field() {
        let task = Task::new("t", "", Priority::Low, None);
        let json = serde_json::to_string(&task).unwrap();
        assert!(!json.contains("dueDate"));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
