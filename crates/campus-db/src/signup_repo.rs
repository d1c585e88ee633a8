use crate::codec::{timestamp_from_sql, timestamp_to_sql, variant_from_sql, variant_to_sql};
use campus_core::error::SignupError;
use campus_core::signups::SignupRepository;
use campus_core::types::enums::{SignupRole, SignupStatus};
use campus_core::types::ids::SignupId;
use campus_core::types::io::SubmitSignupInput;
use campus_core::types::signup::SignupRequest;
use rusqlite::Connection;

const COLUMNS: &str = "id, role, name, email, institution_slug, status, note, created_at, updated_at";

pub struct SignupRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> SignupRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn db_err(err: impl std::fmt::Display) -> SignupError {
    SignupError::Storage {
        message: err.to_string(),
    }
}

impl<'a> SignupRepository for SignupRepo<'a> {
    fn create(&self, input: SubmitSignupInput) -> Result<SignupRequest, SignupError> {
        let now = chrono::Utc::now();
        let request = SignupRequest {
            id: SignupId::generate(),
            role: input.role,
            name: input.name,
            email: input.email,
            institution_slug: input.institution_slug,
            status: SignupStatus::Pending,
            note: None,
            created_at: now,
            updated_at: now,
        };
        let sql = format!(
            "INSERT INTO signup_requests ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
        );
        self.conn
            .execute(
                &sql,
                (
                    request.id.as_str(),
                    variant_to_sql(&request.role).map_err(db_err)?,
                    request.name.as_str(),
                    request.email.as_str(),
                    request.institution_slug.as_str(),
                    variant_to_sql(&request.status).map_err(db_err)?,
                    request.note.as_deref(),
                    timestamp_to_sql(&request.created_at),
                    timestamp_to_sql(&request.updated_at),
                ),
            )
            .map_err(db_err)?;
        Ok(request)
    }

    fn get(&self, id: &SignupId) -> Result<Option<SignupRequest>, SignupError> {
        let sql = format!("SELECT {COLUMNS} FROM signup_requests WHERE id = ?1");
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([id.as_str()]).map_err(db_err)?;
        let Some(row) = rows.next().map_err(db_err)? else {
            return Ok(None);
        };
        map_signup_row(row).map(Some)
    }

    fn list(&self, institution_slug: &str) -> Result<Vec<SignupRequest>, SignupError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM signup_requests WHERE institution_slug = ?1 ORDER BY created_at DESC"
        );
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([institution_slug]).map_err(db_err)?;
        let mut requests = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            requests.push(map_signup_row(row)?);
        }
        Ok(requests)
    }

    fn set_status(
        &self,
        id: &SignupId,
        status: SignupStatus,
        note: Option<String>,
    ) -> Result<SignupRequest, SignupError> {
        let mut request = self.get(id)?.ok_or(SignupError::NotFound)?;
        request.status = status;
        if note.is_some() {
            request.note = note;
        }
        request.updated_at = chrono::Utc::now();
        self.conn
            .execute(
                "UPDATE signup_requests SET status = ?1, note = ?2, updated_at = ?3 WHERE id = ?4",
                (
                    variant_to_sql(&request.status).map_err(db_err)?,
                    request.note.as_deref(),
                    timestamp_to_sql(&request.updated_at),
                    request.id.as_str(),
                ),
            )
            .map_err(db_err)?;
        Ok(request)
    }
}

fn map_signup_row(row: &rusqlite::Row<'_>) -> Result<SignupRequest, SignupError> {
    let id: String = row.get(0).map_err(db_err)?;
    let role: String = row.get(1).map_err(db_err)?;
    let name: String = row.get(2).map_err(db_err)?;
    let email: String = row.get(3).map_err(db_err)?;
    let institution_slug: String = row.get(4).map_err(db_err)?;
    let status: String = row.get(5).map_err(db_err)?;
    let note: Option<String> = row.get(6).map_err(db_err)?;
    let created_at: String = row.get(7).map_err(db_err)?;
    let updated_at: String = row.get(8).map_err(db_err)?;

    Ok(SignupRequest {
        id: SignupId::new(id).map_err(db_err)?,
        role: variant_from_sql::<SignupRole>(&role).map_err(db_err)?,
        name,
        email,
        institution_slug,
        status: variant_from_sql::<SignupStatus>(&status).map_err(db_err)?,
        note,
        created_at: timestamp_from_sql(&created_at).map_err(db_err)?,
        updated_at: timestamp_from_sql(&updated_at).map_err(db_err)?,
    })
}
