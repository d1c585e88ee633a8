use crate::codec::{
    options_from_sql, options_to_sql, timestamp_from_sql, timestamp_to_sql, variant_from_sql,
    variant_to_sql,
};
use campus_core::error::PollError;
use campus_core::polls::PollRepository;
use campus_core::types::enums::{PollKind, PollScope};
use campus_core::types::ids::{PollId, PollResponseId};
use campus_core::types::io::{CreatePollInput, VoteInput};
use campus_core::types::poll::{Poll, PollResponse};
use rusqlite::Connection;

const POLL_COLUMNS: &str = "id, title, description, kind, options, target_instructor_id, target_instructor_name, created_for, target_room_id, created_by, is_active, created_at, updated_at";
const RESPONSE_COLUMNS: &str = "id, poll_id, student_id, student_name, option_id, text_answer, target_instructor_id, satisfaction_level, content_delivery_rating, recommendations, created_at";

pub struct PollRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> PollRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn db_err(err: impl std::fmt::Display) -> PollError {
    PollError::Storage {
        message: err.to_string(),
    }
}

impl<'a> PollRepository for PollRepo<'a> {
    fn create(&self, input: CreatePollInput) -> Result<Poll, PollError> {
        let now = chrono::Utc::now();
        let poll = Poll {
            id: PollId::generate(),
            title: input.title,
            description: input.description,
            kind: input.kind.unwrap_or(PollKind::Poll),
            options: input.options,
            target_instructor_id: input.target_instructor_id,
            target_instructor_name: input.target_instructor_name,
            created_for: input.created_for.unwrap_or(PollScope::Institution),
            target_room_id: input.target_room_id,
            created_by: input.created_by,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let sql = format!("INSERT INTO polls ({POLL_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)");
        self.conn
            .execute(
                &sql,
                (
                    poll.id.as_str(),
                    poll.title.as_str(),
                    poll.description.as_deref(),
                    variant_to_sql(&poll.kind).map_err(db_err)?,
                    options_to_sql(&poll.options).map_err(db_err)?,
                    poll.target_instructor_id.as_deref(),
                    poll.target_instructor_name.as_deref(),
                    variant_to_sql(&poll.created_for).map_err(db_err)?,
                    poll.target_room_id.as_deref(),
                    poll.created_by.as_deref(),
                    poll.is_active,
                    timestamp_to_sql(&poll.created_at),
                    timestamp_to_sql(&poll.updated_at),
                ),
            )
            .map_err(db_err)?;
        Ok(poll)
    }

    fn get(&self, id: &PollId) -> Result<Option<Poll>, PollError> {
        let sql = format!("SELECT {POLL_COLUMNS} FROM polls WHERE id = ?1");
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([id.as_str()]).map_err(db_err)?;
        let Some(row) = rows.next().map_err(db_err)? else {
            return Ok(None);
        };
        map_poll_row(row).map(Some)
    }

    fn list(&self) -> Result<Vec<Poll>, PollError> {
        let sql = format!("SELECT {POLL_COLUMNS} FROM polls ORDER BY created_at DESC");
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([]).map_err(db_err)?;
        let mut polls = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            polls.push(map_poll_row(row)?);
        }
        Ok(polls)
    }

    fn responses(&self, poll_id: &PollId) -> Result<Vec<PollResponse>, PollError> {
        let sql = format!(
            "SELECT {RESPONSE_COLUMNS} FROM poll_responses WHERE poll_id = ?1 ORDER BY created_at ASC"
        );
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([poll_id.as_str()]).map_err(db_err)?;
        let mut responses = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            responses.push(map_response_row(row)?);
        }
        Ok(responses)
    }

    fn response_by_student(
        &self,
        poll_id: &PollId,
        student_id: &str,
    ) -> Result<Option<PollResponse>, PollError> {
        let sql = format!(
            "SELECT {RESPONSE_COLUMNS} FROM poll_responses WHERE poll_id = ?1 AND student_id = ?2"
        );
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([poll_id.as_str(), student_id]).map_err(db_err)?;
        let Some(row) = rows.next().map_err(db_err)? else {
            return Ok(None);
        };
        map_response_row(row).map(Some)
    }

    fn add_response(&self, poll_id: &PollId, input: VoteInput) -> Result<PollResponse, PollError> {
        let response = PollResponse {
            id: PollResponseId::generate(),
            poll_id: poll_id.clone(),
            student_id: input.student_id,
            student_name: input.student_name,
            option_id: input.option_id,
            text_answer: input.text_answer,
            target_instructor_id: input.target_instructor_id,
            satisfaction_level: input.satisfaction_level,
            content_delivery_rating: input.content_delivery_rating,
            recommendations: input.recommendations,
            created_at: chrono::Utc::now(),
        };
        let sql = format!("INSERT INTO poll_responses ({RESPONSE_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)");
        self.conn
            .execute(
                &sql,
                (
                    response.id.as_str(),
                    response.poll_id.as_str(),
                    response.student_id.as_str(),
                    response.student_name.as_deref(),
                    response.option_id.as_deref(),
                    response.text_answer.as_deref(),
                    response.target_instructor_id.as_deref(),
                    response.satisfaction_level.map(i64::from),
                    response.content_delivery_rating.map(i64::from),
                    response.recommendations.as_deref(),
                    timestamp_to_sql(&response.created_at),
                ),
            )
            .map_err(db_err)?;
        Ok(response)
    }
}

fn map_poll_row(row: &rusqlite::Row<'_>) -> Result<Poll, PollError> {
    let id: String = row.get(0).map_err(db_err)?;
    let title: String = row.get(1).map_err(db_err)?;
    let description: Option<String> = row.get(2).map_err(db_err)?;
    let kind: String = row.get(3).map_err(db_err)?;
    let options: String = row.get(4).map_err(db_err)?;
    let target_instructor_id: Option<String> = row.get(5).map_err(db_err)?;
    let target_instructor_name: Option<String> = row.get(6).map_err(db_err)?;
    let created_for: String = row.get(7).map_err(db_err)?;
    let target_room_id: Option<String> = row.get(8).map_err(db_err)?;
    let created_by: Option<String> = row.get(9).map_err(db_err)?;
    let is_active: bool = row.get(10).map_err(db_err)?;
    let created_at: String = row.get(11).map_err(db_err)?;
    let updated_at: String = row.get(12).map_err(db_err)?;

    Ok(Poll {
        id: PollId::new(id).map_err(db_err)?,
        title,
        description,
        kind: variant_from_sql::<PollKind>(&kind).map_err(db_err)?,
        options: options_from_sql(&options).map_err(db_err)?,
        target_instructor_id,
        target_instructor_name,
        created_for: variant_from_sql::<PollScope>(&created_for).map_err(db_err)?,
        target_room_id,
        created_by,
        is_active,
        created_at: timestamp_from_sql(&created_at).map_err(db_err)?,
        updated_at: timestamp_from_sql(&updated_at).map_err(db_err)?,
    })
}

fn map_response_row(row: &rusqlite::Row<'_>) -> Result<PollResponse, PollError> {
    let id: String = row.get(0).map_err(db_err)?;
    let poll_id: String = row.get(1).map_err(db_err)?;
    let student_id: String = row.get(2).map_err(db_err)?;
    let student_name: Option<String> = row.get(3).map_err(db_err)?;
    let option_id: Option<String> = row.get(4).map_err(db_err)?;
    let text_answer: Option<String> = row.get(5).map_err(db_err)?;
    let target_instructor_id: Option<String> = row.get(6).map_err(db_err)?;
    let satisfaction_level: Option<i64> = row.get(7).map_err(db_err)?;
    let content_delivery_rating: Option<i64> = row.get(8).map_err(db_err)?;
    let recommendations: Option<String> = row.get(9).map_err(db_err)?;
    let created_at: String = row.get(10).map_err(db_err)?;

    let satisfaction_level = satisfaction_level
        .map(u8::try_from)
        .transpose()
        .map_err(db_err)?;
    let content_delivery_rating = content_delivery_rating
        .map(u8::try_from)
        .transpose()
        .map_err(db_err)?;

    Ok(PollResponse {
        id: PollResponseId::new(id).map_err(db_err)?,
        poll_id: PollId::new(poll_id).map_err(db_err)?,
        student_id,
        student_name,
        option_id,
        text_answer,
        target_instructor_id,
        satisfaction_level,
        content_delivery_rating,
        recommendations,
        created_at: timestamp_from_sql(&created_at).map_err(db_err)?,
    })
}
