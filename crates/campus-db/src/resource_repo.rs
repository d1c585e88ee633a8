use crate::codec::{timestamp_from_sql, timestamp_to_sql, variant_from_sql, variant_to_sql};
use campus_core::error::ResourceError;
use campus_core::resources::ResourceRepository;
use campus_core::types::enums::ResourceKind;
use campus_core::types::ids::{CourseId, ItemId};
use campus_core::types::io::{
    CreateCourseInput, CreateItemInput, UpdateCourseInput, UpdateItemInput,
};
use campus_core::types::resource::{ResourceCourse, ResourceItem};
use rusqlite::Connection;

const COURSE_COLUMNS: &str = "id, name, code, description, created_at, updated_at";
const ITEM_COLUMNS: &str = "id, course_id, title, kind, url, content, item_order, created_at, updated_at";

pub struct ResourceRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> ResourceRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn get_item(&self, id: &ItemId) -> Result<Option<ResourceItem>, ResourceError> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM resource_items WHERE id = ?1");
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([id.as_str()]).map_err(db_err)?;
        let Some(row) = rows.next().map_err(db_err)? else {
            return Ok(None);
        };
        map_item_row(row).map(Some)
    }
}

fn db_err(err: impl std::fmt::Display) -> ResourceError {
    ResourceError::Storage {
        message: err.to_string(),
    }
}

impl<'a> ResourceRepository for ResourceRepo<'a> {
    fn create_course(&self, input: CreateCourseInput) -> Result<ResourceCourse, ResourceError> {
        let now = chrono::Utc::now();
        let course = ResourceCourse {
            id: CourseId::generate(),
            name: input.name,
            code: input.code,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        let sql =
            format!("INSERT INTO resource_courses ({COURSE_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)");
        self.conn
            .execute(
                &sql,
                (
                    course.id.as_str(),
                    course.name.as_str(),
                    course.code.as_deref(),
                    course.description.as_deref(),
                    timestamp_to_sql(&course.created_at),
                    timestamp_to_sql(&course.updated_at),
                ),
            )
            .map_err(db_err)?;
        Ok(course)
    }

    fn list_courses(&self) -> Result<Vec<ResourceCourse>, ResourceError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM resource_courses ORDER BY created_at DESC");
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([]).map_err(db_err)?;
        let mut courses = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            courses.push(map_course_row(row)?);
        }
        Ok(courses)
    }

    fn get_course(&self, id: &CourseId) -> Result<Option<ResourceCourse>, ResourceError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM resource_courses WHERE id = ?1");
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([id.as_str()]).map_err(db_err)?;
        let Some(row) = rows.next().map_err(db_err)? else {
            return Ok(None);
        };
        map_course_row(row).map(Some)
    }

    fn update_course(
        &self,
        id: &CourseId,
        input: UpdateCourseInput,
    ) -> Result<ResourceCourse, ResourceError> {
        let mut course = self.get_course(id)?.ok_or(ResourceError::CourseNotFound)?;
        if let Some(name) = input.name {
            course.name = name;
        }
        if input.code.is_some() {
            course.code = input.code;
        }
        if input.description.is_some() {
            course.description = input.description;
        }
        course.updated_at = chrono::Utc::now();
        self.conn
            .execute(
                "UPDATE resource_courses SET name = ?1, code = ?2, description = ?3, updated_at = ?4 WHERE id = ?5",
                (
                    course.name.as_str(),
                    course.code.as_deref(),
                    course.description.as_deref(),
                    timestamp_to_sql(&course.updated_at),
                    course.id.as_str(),
                ),
            )
            .map_err(db_err)?;
        Ok(course)
    }

    fn delete_course(&self, id: &CourseId) -> Result<(), ResourceError> {
        self.conn
            .execute(
                "DELETE FROM resource_items WHERE course_id = ?1",
                [id.as_str()],
            )
            .map_err(db_err)?;
        let changed = self
            .conn
            .execute("DELETE FROM resource_courses WHERE id = ?1", [id.as_str()])
            .map_err(db_err)?;
        if changed == 0 {
            return Err(ResourceError::CourseNotFound);
        }
        Ok(())
    }

    fn create_item(
        &self,
        course_id: &CourseId,
        input: CreateItemInput,
    ) -> Result<ResourceItem, ResourceError> {
        let now = chrono::Utc::now();
        let item = ResourceItem {
            id: ItemId::generate(),
            course_id: course_id.clone(),
            title: input.title,
            kind: input.kind,
            url: input.url,
            content: input.content,
            order: input.order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };
        let sql = format!(
            "INSERT INTO resource_items ({ITEM_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
        );
        self.conn
            .execute(
                &sql,
                (
                    item.id.as_str(),
                    item.course_id.as_str(),
                    item.title.as_str(),
                    variant_to_sql(&item.kind).map_err(db_err)?,
                    item.url.as_deref(),
                    item.content.as_deref(),
                    item.order,
                    timestamp_to_sql(&item.created_at),
                    timestamp_to_sql(&item.updated_at),
                ),
            )
            .map_err(db_err)?;
        Ok(item)
    }

    fn list_items(&self, course_id: &CourseId) -> Result<Vec<ResourceItem>, ResourceError> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM resource_items WHERE course_id = ?1 ORDER BY item_order ASC, created_at DESC"
        );
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let mut rows = stmt.query([course_id.as_str()]).map_err(db_err)?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            items.push(map_item_row(row)?);
        }
        Ok(items)
    }

    fn update_item(
        &self,
        id: &ItemId,
        input: UpdateItemInput,
    ) -> Result<ResourceItem, ResourceError> {
        let mut item = self.get_item(id)?.ok_or(ResourceError::ItemNotFound)?;
        if let Some(title) = input.title {
            item.title = title;
        }
        if let Some(kind) = input.kind {
            item.kind = kind;
        }
        if input.url.is_some() {
            item.url = input.url;
        }
        if input.content.is_some() {
            item.content = input.content;
        }
        if let Some(order) = input.order {
            item.order = order;
        }
        item.updated_at = chrono::Utc::now();
        self.conn
            .execute(
                "UPDATE resource_items SET title = ?1, kind = ?2, url = ?3, content = ?4, item_order = ?5, updated_at = ?6 WHERE id = ?7",
                (
                    item.title.as_str(),
                    variant_to_sql(&item.kind).map_err(db_err)?,
                    item.url.as_deref(),
                    item.content.as_deref(),
                    item.order,
                    timestamp_to_sql(&item.updated_at),
                    item.id.as_str(),
                ),
            )
            .map_err(db_err)?;
        Ok(item)
    }

    fn delete_item(&self, id: &ItemId) -> Result<(), ResourceError> {
        // Tolerates unknown ids, like the original endpoint.
        self.conn
            .execute("DELETE FROM resource_items WHERE id = ?1", [id.as_str()])
            .map_err(db_err)?;
        Ok(())
    }
}

fn map_course_row(row: &rusqlite::Row<'_>) -> Result<ResourceCourse, ResourceError> {
    let id: String = row.get(0).map_err(db_err)?;
    let name: String = row.get(1).map_err(db_err)?;
    let code: Option<String> = row.get(2).map_err(db_err)?;
    let description: Option<String> = row.get(3).map_err(db_err)?;
    let created_at: String = row.get(4).map_err(db_err)?;
    let updated_at: String = row.get(5).map_err(db_err)?;

    Ok(ResourceCourse {
        id: CourseId::new(id).map_err(db_err)?,
        name,
        code,
        description,
        created_at: timestamp_from_sql(&created_at).map_err(db_err)?,
        updated_at: timestamp_from_sql(&updated_at).map_err(db_err)?,
    })
}

fn map_item_row(row: &rusqlite::Row<'_>) -> Result<ResourceItem, ResourceError> {
    let id: String = row.get(0).map_err(db_err)?;
    let course_id: String = row.get(1).map_err(db_err)?;
    let title: String = row.get(2).map_err(db_err)?;
    let kind: String = row.get(3).map_err(db_err)?;
    let url: Option<String> = row.get(4).map_err(db_err)?;
    let content: Option<String> = row.get(5).map_err(db_err)?;
    let order: i64 = row.get(6).map_err(db_err)?;
    let created_at: String = row.get(7).map_err(db_err)?;
    let updated_at: String = row.get(8).map_err(db_err)?;

    Ok(ResourceItem {
        id: ItemId::new(id).map_err(db_err)?,
        course_id: CourseId::new(course_id).map_err(db_err)?,
        title,
        kind: variant_from_sql::<ResourceKind>(&kind).map_err(db_err)?,
        url,
        content,
        order,
        created_at: timestamp_from_sql(&created_at).map_err(db_err)?,
        updated_at: timestamp_from_sql(&updated_at).map_err(db_err)?,
    })
}
