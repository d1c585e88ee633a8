use crate::codec::{timestamp_from_sql, timestamp_to_sql};
use campus_core::error::SlotError;
use campus_core::slots::SlotRepository;
use campus_core::types::ids::SlotId;
use campus_core::types::io::CreateSlotInput;
use campus_core::types::slot::ConsultationSlot;
use rusqlite::Connection;

pub struct SlotRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> SlotRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn db_err(err: impl std::fmt::Display) -> SlotError {
    SlotError::Storage {
        message: err.to_string(),
    }
}

impl<'a> SlotRepository for SlotRepo<'a> {
    fn create(&self, input: CreateSlotInput) -> Result<ConsultationSlot, SlotError> {
        let now = chrono::Utc::now();
        let slot = ConsultationSlot {
            id: SlotId::generate(),
            instructor_id: input.instructor_id,
            weekday: input.weekday,
            start_minutes: input.start_minutes,
            end_minutes: input.end_minutes,
            created_at: now,
            updated_at: now,
        };
        self.conn
            .execute(
                "INSERT INTO consultation_slots (id, instructor_id, weekday, start_minutes, end_minutes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                (
                    slot.id.as_str(),
                    slot.instructor_id.as_str(),
                    i64::from(slot.weekday),
                    i64::from(slot.start_minutes),
                    i64::from(slot.end_minutes),
                    timestamp_to_sql(&slot.created_at),
                    timestamp_to_sql(&slot.updated_at),
                ),
            )
            .map_err(db_err)?;
        Ok(slot)
    }

    fn list(&self) -> Result<Vec<ConsultationSlot>, SlotError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, instructor_id, weekday, start_minutes, end_minutes, created_at, updated_at FROM consultation_slots ORDER BY weekday ASC, start_minutes ASC")
            .map_err(db_err)?;
        let mut rows = stmt.query([]).map_err(db_err)?;
        let mut slots = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            let id: String = row.get(0).map_err(db_err)?;
            let instructor_id: String = row.get(1).map_err(db_err)?;
            let weekday: i64 = row.get(2).map_err(db_err)?;
            let start_minutes: i64 = row.get(3).map_err(db_err)?;
            let end_minutes: i64 = row.get(4).map_err(db_err)?;
            let created_at: String = row.get(5).map_err(db_err)?;
            let updated_at: String = row.get(6).map_err(db_err)?;
            slots.push(ConsultationSlot {
                id: SlotId::new(id).map_err(db_err)?,
                instructor_id,
                weekday: u8::try_from(weekday).map_err(db_err)?,
                start_minutes: u16::try_from(start_minutes).map_err(db_err)?,
                end_minutes: u16::try_from(end_minutes).map_err(db_err)?,
                created_at: timestamp_from_sql(&created_at).map_err(db_err)?,
                updated_at: timestamp_from_sql(&updated_at).map_err(db_err)?,
            });
        }
        Ok(slots)
    }
}
