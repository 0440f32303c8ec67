/// Entity model
///
/// Each entity comes in three shapes:
/// - `*Create`: the JSON body accepted by the create endpoint
/// - `New*`: a candidate row with declared defaults applied
/// - the bare type (`Client`, `Project`, ...): a persisted row, serialized as the response

pub mod client;
pub mod event;
pub mod project;
pub mod task;
pub mod timestamp;

pub use client::{Client, ClientCreate, NewClient};
pub use event::{Event, EventCreate, NewEvent};
pub use project::{NewProject, Project, ProjectCreate};
pub use task::{NewTask, Task, TaskCreate};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_defaults_apply_when_absent_or_null() {
        let input: ProjectCreate =
            serde_json::from_value(json!({ "name": "Launch", "status": null })).unwrap();
        let new = NewProject::from(input);
        assert_eq!(new.status, "ACTIVE");
        assert_eq!(new.kind, None);
        assert_eq!(new.client_id, None);
    }

    #[test]
    fn project_type_field_is_renamed() {
        let input: ProjectCreate =
            serde_json::from_value(json!({ "name": "Site", "type": "web" })).unwrap();
        assert_eq!(input.kind.as_deref(), Some("web"));
    }

    #[test]
    fn task_defaults_and_explicit_values() {
        let defaulted: TaskCreate =
            serde_json::from_value(json!({ "title": "Draft brief", "project_id": 1 })).unwrap();
        let new = NewTask::from(defaulted);
        assert_eq!(new.status, "BACKLOG");
        assert_eq!(new.priority, "MEDIUM");

        let explicit: TaskCreate = serde_json::from_value(json!({
            "title": "Ship",
            "project_id": 1,
            "status": "IN_PROGRESS",
            "priority": "HIGH",
            "due_date": "2025-06-01T12:00:00"
        }))
        .unwrap();
        let new = NewTask::from(explicit);
        assert_eq!(new.status, "IN_PROGRESS");
        assert_eq!(new.priority, "HIGH");
        assert!(new.due_date.is_some());
    }

    #[test]
    fn task_requires_title_and_project() {
        assert!(serde_json::from_value::<TaskCreate>(json!({ "title": "x" })).is_err());
        assert!(serde_json::from_value::<TaskCreate>(json!({ "project_id": 1 })).is_err());
        assert!(
            serde_json::from_value::<TaskCreate>(json!({ "title": "x", "project_id": "1" }))
                .is_err()
        );
    }

    #[test]
    fn client_rejects_wrong_types() {
        assert!(serde_json::from_value::<ClientCreate>(json!({})).is_err());
        assert!(serde_json::from_value::<ClientCreate>(json!({ "name": 7 })).is_err());
    }

    #[test]
    fn event_date_defaults_to_supplied_clock() {
        let now = chrono::NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let input: EventCreate = serde_json::from_value(json!({ "title": "Kickoff" })).unwrap();
        let new = input.into_new_at(now);
        assert_eq!(new.date, now);
        assert_eq!(new.status, "SCHEDULED");
    }

    #[test]
    fn bad_timestamp_is_a_decode_error() {
        let err = serde_json::from_value::<EventCreate>(json!({
            "title": "Kickoff",
            "date": "soon"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"));
    }

    #[test]
    fn project_output_uses_type_key() {
        let project = Project {
            id: 1,
            name: "Launch".into(),
            kind: None,
            status: "ACTIVE".into(),
            deadline: None,
            client_id: Some(1),
        };
        assert_eq!(
            serde_json::to_value(&project).unwrap(),
            json!({
                "id": 1,
                "name": "Launch",
                "type": null,
                "status": "ACTIVE",
                "deadline": null,
                "client_id": 1
            })
        );
    }
}
