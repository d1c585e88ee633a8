use crate::codec::{
    timeline_from_sql, timeline_to_sql, timestamp_from_sql, timestamp_to_sql, variant_from_sql,
    variant_to_sql,
};
use campus_core::error::RequestError;
use campus_core::requests::RequestRepository;
use campus_core::types::enums::{AssigneeType, RequestCategory, RequestStatus};
use campus_core::types::ids::RequestId;
use campus_core::types::io::{CreateRequestInput, RequestFilter};
use campus_core::types::request::{HelpdeskRequest, TimelineEntry};
use rusqlite::{Connection, ToSql};

const COLUMNS: &str = "id, created_by, assignee_type, assignee_id, institution_id, institution_slug, category, title, description, status, timeline, created_at, updated_at";

pub struct RequestRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> RequestRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn db_err(err: impl std::fmt::Display) -> RequestError {
    RequestError::Storage {
        message: err.to_string(),
    }
}

impl<'a> RequestRepository for RequestRepo<'a> {
    fn create(&self, input: CreateRequestInput) -> Result<HelpdeskRequest, RequestError> {
        let now = chrono::Utc::now();
        let request = HelpdeskRequest {
            id: RequestId::generate(),
            created_by: input.created_by,
            assignee_type: input.assignee_type,
            assignee_id: input.assignee_id,
            institution_id: input.institution_id,
            institution_slug: input.institution_slug,
            category: input.category,
            title: input.title,
            description: input.description,
            status: RequestStatus::Pending,
            timeline: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        let sql = format!("INSERT INTO helpdesk_requests ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)");
        self.conn
            .execute(
                &sql,
                (
                    request.id.as_str(),
                    request.created_by.as_str(),
                    variant_to_sql(&request.assignee_type).map_err(db_err)?,
                    request.assignee_id.as_deref(),
                    request.institution_id.as_deref(),
                    request.institution_slug.as_deref(),
                    variant_to_sql(&request.category).map_err(db_err)?,
                    request.title.as_str(),
                    request.description.as_deref(),
                    variant_to_sql(&request.status).map_err(db_err)?,
                    timeline_to_sql(&request.timeline).map_err(db_err)?,
                    timestamp_to_sql(&request.created_at),
                    timestamp_to_sql(&request.updated_at),
                ),
            )
            .map_err(db_err)?;
        Ok(request)
    }

    fn get(&self, id: &RequestId) -> Result<Option<HelpdeskRequest>, RequestError> {
        let sql = format!("SELECT {COLUMNS} FROM helpdesk_requests WHERE id = ?1");
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([id.as_str()]).map_err(db_err)?;
        let Some(row) = rows.next().map_err(db_err)? else {
            return Ok(None);
        };
        map_request_row(row).map(Some)
    }

    fn list(&self, filter: &RequestFilter) -> Result<Vec<HelpdeskRequest>, RequestError> {
        let mut sql = format!("SELECT {COLUMNS} FROM helpdesk_requests");
        let mut clauses: Vec<String> = Vec::new();
        let mut params: Vec<&dyn ToSql> = Vec::new();
        if let Some(slug) = &filter.institution_slug {
            params.push(slug);
            clauses.push(format!("institution_slug = ?{}", params.len()));
        }
        if let Some(created_by) = &filter.created_by {
            params.push(created_by);
            clauses.push(format!("created_by = ?{}", params.len()));
        }
        let instructor_type;
        if let Some(instructor) = &filter.assigned_instructor {
            instructor_type = variant_to_sql(&AssigneeType::Instructor).map_err(db_err)?;
            params.push(&instructor_type);
            let type_pos = params.len();
            params.push(instructor);
            clauses.push(format!(
                "assignee_type = ?{type_pos} AND (assignee_id IS NULL OR assignee_id = ?{})",
                params.len()
            ));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query(params.as_slice()).map_err(db_err)?;
        let mut requests = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            requests.push(map_request_row(row)?);
        }
        Ok(requests)
    }

    fn update_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
        entry: TimelineEntry,
    ) -> Result<HelpdeskRequest, RequestError> {
        let mut request = self.get(id)?.ok_or(RequestError::NotFound)?;
        request.status = status;
        request.timeline.push(entry);
        request.updated_at = chrono::Utc::now();
        self.conn
            .execute(
                "UPDATE helpdesk_requests SET status = ?1, timeline = ?2, updated_at = ?3 WHERE id = ?4",
                (
                    variant_to_sql(&request.status).map_err(db_err)?,
                    timeline_to_sql(&request.timeline).map_err(db_err)?,
                    timestamp_to_sql(&request.updated_at),
                    request.id.as_str(),
                ),
            )
            .map_err(db_err)?;
        Ok(request)
    }

    fn delete(&self, id: &RequestId) -> Result<(), RequestError> {
        let changed = self
            .conn
            .execute(
                "DELETE FROM helpdesk_requests WHERE id = ?1",
                [id.as_str()],
            )
            .map_err(db_err)?;
        if changed == 0 {
            return Err(RequestError::NotFound);
        }
        Ok(())
    }
}

fn map_request_row(row: &rusqlite::Row<'_>) -> Result<HelpdeskRequest, RequestError> {
    let id: String = row.get(0).map_err(db_err)?;
    let created_by: String = row.get(1).map_err(db_err)?;
    let assignee_type: String = row.get(2).map_err(db_err)?;
    let assignee_id: Option<String> = row.get(3).map_err(db_err)?;
    let institution_id: Option<String> = row.get(4).map_err(db_err)?;
    let institution_slug: Option<String> = row.get(5).map_err(db_err)?;
    let category: String = row.get(6).map_err(db_err)?;
    let title: String = row.get(7).map_err(db_err)?;
    let description: Option<String> = row.get(8).map_err(db_err)?;
    let status: String = row.get(9).map_err(db_err)?;
    let timeline: String = row.get(10).map_err(db_err)?;
    let created_at: String = row.get(11).map_err(db_err)?;
    let updated_at: String = row.get(12).map_err(db_err)?;

    let assignee_type: AssigneeType = variant_from_sql(&assignee_type).map_err(db_err)?;
    let category: RequestCategory = variant_from_sql(&category).map_err(db_err)?;
    let status: RequestStatus = variant_from_sql(&status).map_err(db_err)?;
    let timeline = timeline_from_sql(&timeline).map_err(db_err)?;

    Ok(HelpdeskRequest {
        id: RequestId::new(id).map_err(db_err)?,
        created_by,
        assignee_type,
        assignee_id,
        institution_id,
        institution_slug,
        category,
        title,
        description,
        status,
        timeline,
        created_at: timestamp_from_sql(&created_at).map_err(db_err)?,
        updated_at: timestamp_from_sql(&updated_at).map_err(db_err)?,
    })
}
