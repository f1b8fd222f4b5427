use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};
use tracing::warn;

/// Backend-assigned task identifier.
///
/// The client treats it as opaque: whatever the server sent is echoed back
/// into request paths unchanged.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(untagged)]
pub enum TaskId {
  Number(u64),
  Text(String)
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | TaskId::Number(id) => {
        write!(f, "{id}")
      }
      | TaskId::Text(id) => {
        f.write_str(id)
      }
    }
  }
}

impl From<u64> for TaskId {
  fn from(id: u64) -> Self {
    TaskId::Number(id)
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
  Low,
  #[default]
  Medium,
  High
}

impl TaskPriority {
  pub const ALL: [TaskPriority; 3] = [
    TaskPriority::Low,
    TaskPriority::Medium,
    TaskPriority::High
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | TaskPriority::Low => "low",
      | TaskPriority::Medium => "medium",
      | TaskPriority::High => "high"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key.trim() {
      | "low" => Some(TaskPriority::Low),
      | "medium" => {
        Some(TaskPriority::Medium)
      }
      | "high" => {
        Some(TaskPriority::High)
      }
      | _ => None
    }
  }
}

/// A task exactly as the backend reports it.
///
/// Fields the client does not interpret (`created_at`, `updated_at`, ...)
/// are kept in `extra` so the cached copy stays faithful to the response.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TaskDto {
  pub id:          TaskId,
  #[serde(
    default,
    deserialize_with = "lenient::title"
  )]
  pub title:       String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient::priority"
  )]
  pub priority:    TaskPriority,
  #[serde(
    default,
    deserialize_with = "lenient::due_date"
  )]
  pub due_date:    Option<NaiveDate>,
  #[serde(default)]
  pub completed:   bool,
  #[serde(flatten)]
  pub extra:
    BTreeMap<String, serde_json::Value>
}

/// Body of `POST /api/tasks` and `PUT /api/tasks/{id}`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskPayload {
  pub title:       String,
  pub description: String,
  pub priority:    TaskPriority,
  pub due_date:    Option<NaiveDate>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct HealthDto {
  pub status:  String,
  #[serde(default)]
  pub message: String
}

impl TaskDto {
  /// Decodes a task listing record by record. Records that still fail
  /// (missing or malformed `id`, non-object entries) are skipped.
  pub fn decode_list(
    items: Vec<serde_json::Value>
  ) -> Vec<TaskDto> {
    items
      .into_iter()
      .enumerate()
      .filter_map(|(index, item)| {
        serde_json::from_value(item)
          .map_err(|err| {
            warn!(
              index,
              error = %err,
              "skipping undecodable task record"
            );
          })
          .ok()
      })
      .collect()
  }
}

/// Field decoders that never fail a record over one bad value. The
/// backend stores these fields unvalidated.
pub mod lenient {
  use chrono::NaiveDate;
  use serde::{
    Deserialize,
    Deserializer
  };
  use serde_json::Value;
  use tracing::warn;

  use super::TaskPriority;

  const DATE_FORMAT: &str = "%Y-%m-%d";

  /// `null` and non-string titles become `""`.
  pub fn title<'de, D>(
    deserializer: D
  ) -> Result<String, D::Error>
  where
    D: Deserializer<'de>
  {
    Ok(match Value::deserialize(deserializer)? {
      | Value::String(title) => title,
      | Value::Null => String::new(),
      | other => {
        warn!(value = %other, "non-string task title");
        other.to_string()
      }
    })
  }

  /// Unknown keys fall back to the default priority.
  pub fn priority<'de, D>(
    deserializer: D
  ) -> Result<TaskPriority, D::Error>
  where
    D: Deserializer<'de>
  {
    let value = Value::deserialize(deserializer)?;
    let parsed = value
      .as_str()
      .and_then(TaskPriority::from_key);
    Ok(match parsed {
      | Some(priority) => priority,
      | None => {
        if !value.is_null() {
          warn!(value = %value, "unknown task priority");
        }
        TaskPriority::default()
      }
    })
  }

  /// Accepts `null`, `""`, `"YYYY-MM-DD"` and timestamps that start with a
  /// date (`"YYYY-MM-DDTHH:MM:SS"`). Anything else is treated as no due
  /// date.
  pub fn due_date<'de, D>(
    deserializer: D
  ) -> Result<Option<NaiveDate>, D::Error>
  where
    D: Deserializer<'de>
  {
    let value = Value::deserialize(deserializer)?;
    let text = match &value {
      | Value::Null => return Ok(None),
      | Value::String(text) => text.trim(),
      | other => {
        warn!(value = %other, "non-string due_date ignored");
        return Ok(None);
      }
    };
    if text.is_empty() {
      return Ok(None);
    }

    let date_part =
      text.get(..10).unwrap_or(text);
    match NaiveDate::parse_from_str(
      date_part,
      DATE_FORMAT
    ) {
      | Ok(date) => Ok(Some(date)),
      | Err(err) => {
        warn!(
          value = text,
          error = %err,
          "unparsable due_date ignored"
        );
        Ok(None)
      }
    }
  }
}
