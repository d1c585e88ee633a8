use crate::announcements::AnnouncementRepository;
use crate::polls::PollRepository;
use crate::requests::RequestRepository;
use crate::resources::ResourceRepository;
use crate::signups::SignupRepository;
use crate::slots::SlotRepository;
use crate::CampusError;

pub trait Store {
    type Requests<'a>: RequestRepository
    where
        Self: 'a;
    type Slots<'a>: SlotRepository
    where
        Self: 'a;
    type Announcements<'a>: AnnouncementRepository
    where
        Self: 'a;
    type Polls<'a>: PollRepository
    where
        Self: 'a;
    type Resources<'a>: ResourceRepository
    where
        Self: 'a;
    type Signups<'a>: SignupRepository
    where
        Self: 'a;

    fn requests(&self) -> Self::Requests<'_>;
    fn slots(&self) -> Self::Slots<'_>;
    fn announcements(&self) -> Self::Announcements<'_>;
    fn polls(&self) -> Self::Polls<'_>;
    fn resources(&self) -> Self::Resources<'_>;
    fn signups(&self) -> Self::Signups<'_>;

    fn with_tx<F, T>(&self, f: F) -> Result<T, CampusError>
    where
        F: FnOnce(&Self) -> Result<T, CampusError>;
}
