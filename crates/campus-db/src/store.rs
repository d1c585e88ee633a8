use campus_core::error::CampusError;
use campus_core::store::Store;
use rusqlite::Connection;

use crate::announcement_repo::AnnouncementRepo;
use crate::poll_repo::PollRepo;
use crate::request_repo::RequestRepo;
use crate::resource_repo::ResourceRepo;
use crate::signup_repo::SignupRepo;
use crate::slot_repo::SlotRepo;

pub struct DbStore {
    conn: Connection,
}

impl DbStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Store for DbStore {
    type Requests<'a>
        = RequestRepo<'a>
    where
        Self: 'a;
    type Slots<'a>
        = SlotRepo<'a>
    where
        Self: 'a;
    type Announcements<'a>
        = AnnouncementRepo<'a>
    where
        Self: 'a;
    type Polls<'a>
        = PollRepo<'a>
    where
        Self: 'a;
    type Resources<'a>
        = ResourceRepo<'a>
    where
        Self: 'a;
    type Signups<'a>
        = SignupRepo<'a>
    where
        Self: 'a;

    fn requests(&self) -> Self::Requests<'_> {
        RequestRepo::new(&self.conn)
    }

    fn slots(&self) -> Self::Slots<'_> {
        SlotRepo::new(&self.conn)
    }

    fn announcements(&self) -> Self::Announcements<'_> {
        AnnouncementRepo::new(&self.conn)
    }

    fn polls(&self) -> Self::Polls<'_> {
        PollRepo::new(&self.conn)
    }

    fn resources(&self) -> Self::Resources<'_> {
        ResourceRepo::new(&self.conn)
    }

    fn signups(&self) -> Self::Signups<'_> {
        SignupRepo::new(&self.conn)
    }

    fn with_tx<F, T>(&self, f: F) -> Result<T, CampusError>
    where
        F: FnOnce(&Self) -> Result<T, CampusError>,
    {
        self.conn
            .execute_batch("BEGIN IMMEDIATE")
            .map_err(|err| CampusError::Internal {
                message: err.to_string(),
            })?;
        let result = f(self);
        match result {
            Ok(value) => {
                self.conn
                    .execute_batch("COMMIT")
                    .map_err(|err| CampusError::Internal {
                        message: err.to_string(),
                    })?;
                Ok(value)
            }
            Err(err) => {
                self.conn
                    .execute_batch("ROLLBACK")
                    .map_err(|rollback_err| CampusError::Internal {
                        message: rollback_err.to_string(),
                    })?;
                Err(err)
            }
        }
    }
}
