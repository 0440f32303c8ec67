/// Request-scoped storage session
///
/// Wraps a single pooled connection. Each operation is one statement: a
/// single-row insert returning the stored row, or a full-table read.

use crate::model::{
    Client, Event, NewClient, NewEvent, NewProject, NewTask, Project, Task,
};
use crate::store::error::StoreResult;
use sqlx::{pool::PoolConnection, Sqlite};

const CLIENT_COLUMNS: &str = "id, name, contact, notes";
const PROJECT_COLUMNS: &str = r#"id, name, "type", status, deadline, client_id"#;
const TASK_COLUMNS: &str =
    "id, title, description, status, priority, assignee, due_date, project_id";
const EVENT_COLUMNS: &str = "id, title, date, location, link, status, project_id";

/// One borrowed connection; returned to the pool when dropped
#[derive(Debug)]
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub(crate) fn new(conn: PoolConnection<Sqlite>) -> Self {
        Self { conn }
    }

    pub async fn insert_client(&mut self, client: &NewClient) -> StoreResult<Client> {
        let sql = format!(
            "INSERT INTO clients (name, contact, notes) VALUES (?, ?, ?) RETURNING {CLIENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Client>(&sql)
            .bind(&client.name)
            .bind(&client.contact)
            .bind(&client.notes)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(row)
    }

    pub async fn list_clients(&mut self) -> StoreResult<Vec<Client>> {
        let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients ORDER BY id");
        let rows = sqlx::query_as::<_, Client>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn insert_project(&mut self, project: &NewProject) -> StoreResult<Project> {
        let sql = format!(
            r#"INSERT INTO projects (name, "type", status, deadline, client_id)
               VALUES (?, ?, ?, ?, ?) RETURNING {PROJECT_COLUMNS}"#
        );
        let row = sqlx::query_as::<_, Project>(&sql)
            .bind(&project.name)
            .bind(&project.kind)
            .bind(&project.status)
            .bind(project.deadline)
            .bind(project.client_id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(row)
    }

    pub async fn list_projects(&mut self) -> StoreResult<Vec<Project>> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY id");
        let rows = sqlx::query_as::<_, Project>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows)
    }

    /// Projects whose `client_id` points at the given client
    pub async fn projects_for_client(&mut self, client_id: i64) -> StoreResult<Vec<Project>> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE client_id = ? ORDER BY id");
        let rows = sqlx::query_as::<_, Project>(&sql)
            .bind(client_id)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn insert_task(&mut self, task: &NewTask) -> StoreResult<Task> {
        let sql = format!(
            r#"INSERT INTO tasks (title, description, status, priority, assignee, due_date, project_id)
               VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {TASK_COLUMNS}"#
        );
        let row = sqlx::query_as::<_, Task>(&sql)
            .bind(&task.title)
            .bind(&task.description)
            .bind(&task.status)
            .bind(&task.priority)
            .bind(&task.assignee)
            .bind(task.due_date)
            .bind(task.project_id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(row)
    }

    pub async fn list_tasks(&mut self) -> StoreResult<Vec<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id");
        let rows = sqlx::query_as::<_, Task>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn tasks_for_project(&mut self, project_id: i64) -> StoreResult<Vec<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE project_id = ? ORDER BY id");
        let rows = sqlx::query_as::<_, Task>(&sql)
            .bind(project_id)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn insert_event(&mut self, event: &NewEvent) -> StoreResult<Event> {
        let sql = format!(
            r#"INSERT INTO events (title, date, location, link, status, project_id)
               VALUES (?, ?, ?, ?, ?, ?) RETURNING {EVENT_COLUMNS}"#
        );
        let row = sqlx::query_as::<_, Event>(&sql)
            .bind(&event.title)
            .bind(event.date)
            .bind(&event.location)
            .bind(&event.link)
            .bind(&event.status)
            .bind(event.project_id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(row)
    }

    pub async fn list_events(&mut self) -> StoreResult<Vec<Event>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY id");
        let rows = sqlx::query_as::<_, Event>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn events_for_project(&mut self, project_id: i64) -> StoreResult<Vec<Event>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE project_id = ? ORDER BY id");
        let rows = sqlx::query_as::<_, Event>(&sql)
            .bind(project_id)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows)
    }
}
