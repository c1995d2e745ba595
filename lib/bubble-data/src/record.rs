use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Server-assigned attributes shared by every record in the Bubble data store.
///
/// Bubble returns these on every object read, using its own wire names
/// (`_id`, `Created Date`, ...). The timestamps are RFC 3339 strings; the
/// client never interprets them, so they are kept as plain strings.
///
/// Concrete record types embed this struct with `#[serde(flatten)]` so the
/// base attributes and the type's own fields live in the same JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordBase {
    /// Unique identifier assigned by the server on creation.
    #[serde(rename = "_id")]
    pub id: String,

    /// Creation timestamp.
    #[serde(rename = "Created Date")]
    pub created_date: String,

    /// Identifier of the user that created the record.
    #[serde(rename = "Created By")]
    pub created_by: String,

    /// Last-modification timestamp.
    #[serde(rename = "Modified Date")]
    pub modified_date: String,
}

/// A typed record stored in a Bubble application's data store.
///
/// Each implementation declares the "thing type" name used as the URL path
/// segment of its collection, and the struct of caller-writable fields used
/// on creation. The base attributes ([`RecordBase`]) are server-assigned and
/// excluded from [`DataRecord::Fields`].
///
/// # Example
///
/// ```rust
/// use bubble_data::{DataRecord, RecordBase};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct Task {
///     #[serde(flatten)]
///     base: RecordBase,
///     title: String,
///     #[serde(default)]
///     done: bool,
/// }
///
/// #[derive(Debug, Serialize)]
/// struct TaskFields {
///     title: String,
///     done: bool,
/// }
///
/// impl DataRecord for Task {
///     const TYPE_NAME: &'static str = "task";
///     type Fields = TaskFields;
///
///     fn base(&self) -> &RecordBase {
///         &self.base
///     }
/// }
/// ```
pub trait DataRecord: DeserializeOwned {
    /// URL path segment of the type's collection. Fixed per type, never empty.
    const TYPE_NAME: &'static str;

    /// Caller-writable fields, excluding all [`RecordBase`] attributes.
    type Fields: Serialize;

    /// The server-assigned base attributes of this record.
    fn base(&self) -> &RecordBase;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Ticket {
        #[serde(flatten)]
        base: RecordBase,
        subject: String,
        priority: u32,
    }

    #[derive(Debug, Serialize)]
    struct TicketFields {
        subject: String,
        priority: u32,
    }

    impl DataRecord for Ticket {
        const TYPE_NAME: &'static str = "ticket";
        type Fields = TicketFields;

        fn base(&self) -> &RecordBase {
            &self.base
        }
    }

    #[test]
    fn record_decodes_from_wire_field_names() {
        let json = r#"{
            "_id": "1662x100",
            "Created Date": "2024-01-15T10:00:00.000Z",
            "Created By": "admin_user_1",
            "Modified Date": "2024-01-16T08:30:00.000Z",
            "subject": "Broken login",
            "priority": 2
        }"#;

        let ticket: Ticket = serde_json::from_str(json).expect("valid record json");
        assert_eq!(ticket.base().id, "1662x100");
        assert_eq!(ticket.base().created_by, "admin_user_1");
        assert_eq!(ticket.subject, "Broken login");
        assert_eq!(ticket.priority, 2);
    }

    #[test]
    fn record_tolerates_missing_base_attributes() {
        // Some Bubble apps omit `Created By` on records created by workflows.
        let json = r#"{"_id": "1662x101", "subject": "No author", "priority": 1}"#;

        let ticket: Ticket = serde_json::from_str(json).expect("valid record json");
        assert_eq!(ticket.base().id, "1662x101");
        assert_eq!(ticket.base().created_by, "");
    }

    #[test]
    fn record_serializes_base_attributes_inline() {
        let ticket = Ticket {
            base: RecordBase {
                id: "1662x100".to_string(),
                created_date: "2024-01-15T10:00:00.000Z".to_string(),
                created_by: "admin_user_1".to_string(),
                modified_date: "2024-01-16T08:30:00.000Z".to_string(),
            },
            subject: "Broken login".to_string(),
            priority: 2,
        };

        let value = serde_json::to_value(&ticket).expect("serializable record");
        assert_eq!(value["_id"], "1662x100");
        assert_eq!(value["Created Date"], "2024-01-15T10:00:00.000Z");
        assert_eq!(value["Created By"], "admin_user_1");
        assert_eq!(value["Modified Date"], "2024-01-16T08:30:00.000Z");
        assert_eq!(value["subject"], "Broken login");
        assert_eq!(value["priority"], 2);
    }
}
