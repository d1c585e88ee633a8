use crate::error::AnnouncementError;
use crate::types::io::{CreateAnnouncementInput, UpdateAnnouncementInput};
use crate::types::{Announcement, AnnouncementId};

pub trait AnnouncementRepository {
    fn create(&self, input: CreateAnnouncementInput) -> Result<Announcement, AnnouncementError>;
    fn get(&self, id: &AnnouncementId) -> Result<Option<Announcement>, AnnouncementError>;
    /// Pinned first, then newest. Optionally scoped to one institution slug.
    fn list(&self, institution_slug: Option<&str>) -> Result<Vec<Announcement>, AnnouncementError>;
    fn update(
        &self,
        id: &AnnouncementId,
        input: UpdateAnnouncementInput,
    ) -> Result<Announcement, AnnouncementError>;
    fn delete(&self, id: &AnnouncementId) -> Result<(), AnnouncementError>;
}
