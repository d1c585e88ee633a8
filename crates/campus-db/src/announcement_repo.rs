use crate::codec::{timestamp_from_sql, timestamp_to_sql, variant_from_sql, variant_to_sql};
use campus_core::announcements::AnnouncementRepository;
use campus_core::error::AnnouncementError;
use campus_core::types::announcement::Announcement;
use campus_core::types::enums::AnnouncementType;
use campus_core::types::ids::AnnouncementId;
use campus_core::types::io::{CreateAnnouncementInput, UpdateAnnouncementInput};
use rusqlite::Connection;

const COLUMNS: &str = "id, title, content, author, pinned, announcement_type, institution_id, institution_slug, created_at, updated_at";

pub struct AnnouncementRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> AnnouncementRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn db_err(err: impl std::fmt::Display) -> AnnouncementError {
    AnnouncementError::Storage {
        message: err.to_string(),
    }
}

impl<'a> AnnouncementRepository for AnnouncementRepo<'a> {
    fn create(&self, input: CreateAnnouncementInput) -> Result<Announcement, AnnouncementError> {
        let now = chrono::Utc::now();
        let announcement = Announcement {
            id: AnnouncementId::generate(),
            title: input.title,
            content: input.content,
            author: input.author.unwrap_or_else(|| "Admin".to_string()),
            pinned: input.pinned,
            announcement_type: input.announcement_type.unwrap_or(AnnouncementType::General),
            institution_id: input.institution_id,
            institution_slug: input.institution_slug,
            created_at: now,
            updated_at: now,
        };
        let sql = format!(
            "INSERT INTO announcements ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
        );
        self.conn
            .execute(
                &sql,
                (
                    announcement.id.as_str(),
                    announcement.title.as_str(),
                    announcement.content.as_str(),
                    announcement.author.as_str(),
                    announcement.pinned,
                    variant_to_sql(&announcement.announcement_type).map_err(db_err)?,
                    announcement.institution_id.as_str(),
                    announcement.institution_slug.as_str(),
                    timestamp_to_sql(&announcement.created_at),
                    timestamp_to_sql(&announcement.updated_at),
                ),
            )
            .map_err(db_err)?;
        Ok(announcement)
    }

    fn get(&self, id: &AnnouncementId) -> Result<Option<Announcement>, AnnouncementError> {
        let sql = format!("SELECT {COLUMNS} FROM announcements WHERE id = ?1");
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([id.as_str()]).map_err(db_err)?;
        let Some(row) = rows.next().map_err(db_err)? else {
            return Ok(None);
        };
        map_announcement_row(row).map(Some)
    }

    fn list(
        &self,
        institution_slug: Option<&str>,
    ) -> Result<Vec<Announcement>, AnnouncementError> {
        let mut announcements = Vec::new();
        let order = "ORDER BY pinned DESC, created_at DESC";
        match institution_slug {
            Some(slug) => {
                let sql = format!(
                    "SELECT {COLUMNS} FROM announcements WHERE institution_slug = ?1 {order}"
                );
                let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
                let mut rows = stmt.query([slug]).map_err(db_err)?;
                while let Some(row) = rows.next().map_err(db_err)? {
                    announcements.push(map_announcement_row(row)?);
                }
            }
            None => {
                let sql = format!("SELECT {COLUMNS} FROM announcements {order}");
                let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
                let mut rows = stmt.query([]).map_err(db_err)?;
                while let Some(row) = rows.next().map_err(db_err)? {
                    announcements.push(map_announcement_row(row)?);
                }
            }
        }
        Ok(announcements)
    }

    fn update(
        &self,
        id: &AnnouncementId,
        input: UpdateAnnouncementInput,
    ) -> Result<Announcement, AnnouncementError> {
        let mut announcement = self.get(id)?.ok_or(AnnouncementError::NotFound)?;
        if let Some(title) = input.title {
            announcement.title = title;
        }
        if let Some(content) = input.content {
            announcement.content = content;
        }
        if let Some(pinned) = input.pinned {
            announcement.pinned = pinned;
        }
        if let Some(kind) = input.announcement_type {
            announcement.announcement_type = kind;
        }
        announcement.updated_at = chrono::Utc::now();
        self.conn
            .execute(
                "UPDATE announcements SET title = ?1, content = ?2, pinned = ?3, announcement_type = ?4, updated_at = ?5 WHERE id = ?6",
                (
                    announcement.title.as_str(),
                    announcement.content.as_str(),
                    announcement.pinned,
                    variant_to_sql(&announcement.announcement_type).map_err(db_err)?,
                    timestamp_to_sql(&announcement.updated_at),
                    announcement.id.as_str(),
                ),
            )
            .map_err(db_err)?;
        Ok(announcement)
    }

    fn delete(&self, id: &AnnouncementId) -> Result<(), AnnouncementError> {
        let changed = self
            .conn
            .execute("DELETE FROM announcements WHERE id = ?1", [id.as_str()])
            .map_err(db_err)?;
        if changed == 0 {
            return Err(AnnouncementError::NotFound);
        }
        Ok(())
    }
}

fn map_announcement_row(row: &rusqlite::Row<'_>) -> Result<Announcement, AnnouncementError> {
    let id: String = row.get(0).map_err(db_err)?;
    let title: String = row.get(1).map_err(db_err)?;
    let content: String = row.get(2).map_err(db_err)?;
    let author: String = row.get(3).map_err(db_err)?;
    let pinned: bool = row.get(4).map_err(db_err)?;
    let announcement_type: String = row.get(5).map_err(db_err)?;
    let institution_id: String = row.get(6).map_err(db_err)?;
    let institution_slug: String = row.get(7).map_err(db_err)?;
    let created_at: String = row.get(8).map_err(db_err)?;
    let updated_at: String = row.get(9).map_err(db_err)?;

    Ok(Announcement {
        id: AnnouncementId::new(id).map_err(db_err)?,
        title,
        content,
        author,
        pinned,
        announcement_type: variant_from_sql::<AnnouncementType>(&announcement_type).map_err(db_err)?,
        institution_id,
        institution_slug,
        created_at: timestamp_from_sql(&created_at).map_err(db_err)?,
        updated_at: timestamp_from_sql(&updated_at).map_err(db_err)?,
    })
}
