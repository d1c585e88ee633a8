//! Demo-mode backend: the whole dataset lives in one mutex-guarded struct
//! shared across requests. Selected at startup instead of the file-backed
//! store; writes apply immediately and are lost on shutdown.

use campus_core::announcements::AnnouncementRepository;
use campus_core::error::{
    AnnouncementError, CampusError, PollError, RequestError, ResourceError, SignupError, SlotError,
};
use campus_core::polls::PollRepository;
use campus_core::requests::RequestRepository;
use campus_core::resources::ResourceRepository;
use campus_core::signups::SignupRepository;
use campus_core::slots::SlotRepository;
use campus_core::store::Store;
use campus_core::types::enums::{
    AnnouncementType, AssigneeType, PollKind, PollScope, RequestStatus, SignupStatus,
};
use campus_core::types::ids::{
    AnnouncementId, CourseId, ItemId, PollId, PollResponseId, RequestId, SignupId, SlotId,
};
use campus_core::types::io::{
    CreateAnnouncementInput, CreateCourseInput, CreateItemInput, CreatePollInput,
    CreateRequestInput, CreateSlotInput, RequestFilter, SubmitSignupInput, UpdateAnnouncementInput,
    UpdateCourseInput, UpdateItemInput, VoteInput,
};
use campus_core::types::{
    Announcement, ConsultationSlot, HelpdeskRequest, Poll, PollResponse, ResourceCourse,
    ResourceItem, SignupRequest, TimelineEntry,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct MemData {
    requests: Vec<HelpdeskRequest>,
    slots: Vec<ConsultationSlot>,
    announcements: Vec<Announcement>,
    polls: Vec<Poll>,
    poll_responses: Vec<PollResponse>,
    courses: Vec<ResourceCourse>,
    items: Vec<ResourceItem>,
    signups: Vec<SignupRequest>,
}

#[derive(Debug, Clone, Default)]
pub struct MemStore {
    inner: Arc<Mutex<MemData>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn data(&self) -> MutexGuard<'_, MemData> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn matches_filter(request: &HelpdeskRequest, filter: &RequestFilter) -> bool {
    if let Some(slug) = &filter.institution_slug {
        if request.institution_slug.as_deref() != Some(slug.as_str()) {
            return false;
        }
    }
    if let Some(created_by) = &filter.created_by {
        if &request.created_by != created_by {
            return false;
        }
    }
    if let Some(instructor) = &filter.assigned_instructor {
        if request.assignee_type != AssigneeType::Instructor {
            return false;
        }
        if let Some(assignee) = &request.assignee_id {
            if assignee != instructor {
                return false;
            }
        }
    }
    true
}

pub struct MemRequests<'a> {
    store: &'a MemStore,
}

impl<'a> RequestRepository for MemRequests<'a> {
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
        self.store.data().requests.push(request.clone());
        Ok(request)
    }

    fn get(&self, id: &RequestId) -> Result<Option<HelpdeskRequest>, RequestError> {
        Ok(self
            .store
            .data()
            .requests
            .iter()
            .find(|request| &request.id == id)
            .cloned())
    }

    fn list(&self, filter: &RequestFilter) -> Result<Vec<HelpdeskRequest>, RequestError> {
        // Insertion order is creation order, so reverse gives newest first.
        Ok(self
            .store
            .data()
            .requests
            .iter()
            .rev()
            .filter(|request| matches_filter(request, filter))
            .cloned()
            .collect())
    }

    fn update_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
        entry: TimelineEntry,
    ) -> Result<HelpdeskRequest, RequestError> {
        let mut data = self.store.data();
        let request = data
            .requests
            .iter_mut()
            .find(|request| &request.id == id)
            .ok_or(RequestError::NotFound)?;
        request.status = status;
        request.timeline.push(entry);
        request.updated_at = chrono::Utc::now();
        Ok(request.clone())
    }

    fn delete(&self, id: &RequestId) -> Result<(), RequestError> {
        let mut data = self.store.data();
        let before = data.requests.len();
        data.requests.retain(|request| &request.id != id);
        if data.requests.len() == before {
            return Err(RequestError::NotFound);
        }
        Ok(())
    }
}

pub struct MemSlots<'a> {
    store: &'a MemStore,
}

impl<'a> SlotRepository for MemSlots<'a> {
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
        self.store.data().slots.push(slot.clone());
        Ok(slot)
    }

    fn list(&self) -> Result<Vec<ConsultationSlot>, SlotError> {
        let mut slots: Vec<ConsultationSlot> = self.store.data().slots.clone();
        slots.sort_by_key(|slot| (slot.weekday, slot.start_minutes));
        Ok(slots)
    }
}

pub struct MemAnnouncements<'a> {
    store: &'a MemStore,
}

impl<'a> AnnouncementRepository for MemAnnouncements<'a> {
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
        self.store.data().announcements.push(announcement.clone());
        Ok(announcement)
    }

    fn get(&self, id: &AnnouncementId) -> Result<Option<Announcement>, AnnouncementError> {
        Ok(self
            .store
            .data()
            .announcements
            .iter()
            .find(|announcement| &announcement.id == id)
            .cloned())
    }

    fn list(
        &self,
        institution_slug: Option<&str>,
    ) -> Result<Vec<Announcement>, AnnouncementError> {
        let mut announcements: Vec<Announcement> = self
            .store
            .data()
            .announcements
            .iter()
            .rev()
            .filter(|announcement| {
                institution_slug
                    .is_none_or(|slug| announcement.institution_slug == slug)
            })
            .cloned()
            .collect();
        // Stable sort keeps newest-first within each pinned group.
        announcements.sort_by_key(|announcement| !announcement.pinned);
        Ok(announcements)
    }

    fn update(
        &self,
        id: &AnnouncementId,
        input: UpdateAnnouncementInput,
    ) -> Result<Announcement, AnnouncementError> {
        let mut data = self.store.data();
        let announcement = data
            .announcements
            .iter_mut()
            .find(|announcement| &announcement.id == id)
            .ok_or(AnnouncementError::NotFound)?;
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
        Ok(announcement.clone())
    }

    fn delete(&self, id: &AnnouncementId) -> Result<(), AnnouncementError> {
        let mut data = self.store.data();
        let before = data.announcements.len();
        data.announcements
            .retain(|announcement| &announcement.id != id);
        if data.announcements.len() == before {
            return Err(AnnouncementError::NotFound);
        }
        Ok(())
    }
}

pub struct MemPolls<'a> {
    store: &'a MemStore,
}

impl<'a> PollRepository for MemPolls<'a> {
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
        self.store.data().polls.push(poll.clone());
        Ok(poll)
    }

    fn get(&self, id: &PollId) -> Result<Option<Poll>, PollError> {
        Ok(self
            .store
            .data()
            .polls
            .iter()
            .find(|poll| &poll.id == id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Poll>, PollError> {
        Ok(self.store.data().polls.iter().rev().cloned().collect())
    }

    fn responses(&self, poll_id: &PollId) -> Result<Vec<PollResponse>, PollError> {
        Ok(self
            .store
            .data()
            .poll_responses
            .iter()
            .filter(|response| &response.poll_id == poll_id)
            .cloned()
            .collect())
    }

    fn response_by_student(
        &self,
        poll_id: &PollId,
        student_id: &str,
    ) -> Result<Option<PollResponse>, PollError> {
        Ok(self
            .store
            .data()
            .poll_responses
            .iter()
            .find(|response| &response.poll_id == poll_id && response.student_id == student_id)
            .cloned())
    }

    fn add_response(&self, poll_id: &PollId, input: VoteInput) -> Result<PollResponse, PollError> {
        let mut data = self.store.data();
        // One guard spans the duplicate check and the insert, standing in for
        // the unique (poll_id, student_id) index on the file-backed side.
        let already_voted = data
            .poll_responses
            .iter()
            .any(|response| &response.poll_id == poll_id && response.student_id == input.student_id);
        if already_voted {
            return Err(PollError::DuplicateVote);
        }
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
        data.poll_responses.push(response.clone());
        Ok(response)
    }
}

pub struct MemResources<'a> {
    store: &'a MemStore,
}

impl<'a> ResourceRepository for MemResources<'a> {
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
        self.store.data().courses.push(course.clone());
        Ok(course)
    }

    fn list_courses(&self) -> Result<Vec<ResourceCourse>, ResourceError> {
        Ok(self.store.data().courses.iter().rev().cloned().collect())
    }

    fn get_course(&self, id: &CourseId) -> Result<Option<ResourceCourse>, ResourceError> {
        Ok(self
            .store
            .data()
            .courses
            .iter()
            .find(|course| &course.id == id)
            .cloned())
    }

    fn update_course(
        &self,
        id: &CourseId,
        input: UpdateCourseInput,
    ) -> Result<ResourceCourse, ResourceError> {
        let mut data = self.store.data();
        let course = data
            .courses
            .iter_mut()
            .find(|course| &course.id == id)
            .ok_or(ResourceError::CourseNotFound)?;
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
        Ok(course.clone())
    }

    fn delete_course(&self, id: &CourseId) -> Result<(), ResourceError> {
        let mut data = self.store.data();
        let before = data.courses.len();
        data.courses.retain(|course| &course.id != id);
        if data.courses.len() == before {
            return Err(ResourceError::CourseNotFound);
        }
        data.items.retain(|item| &item.course_id != id);
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
        self.store.data().items.push(item.clone());
        Ok(item)
    }

    fn list_items(&self, course_id: &CourseId) -> Result<Vec<ResourceItem>, ResourceError> {
        let mut items: Vec<ResourceItem> = self
            .store
            .data()
            .items
            .iter()
            .rev()
            .filter(|item| &item.course_id == course_id)
            .cloned()
            .collect();
        items.sort_by_key(|item| item.order);
        Ok(items)
    }

    fn update_item(
        &self,
        id: &ItemId,
        input: UpdateItemInput,
    ) -> Result<ResourceItem, ResourceError> {
        let mut data = self.store.data();
        let item = data
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or(ResourceError::ItemNotFound)?;
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
        Ok(item.clone())
    }

    fn delete_item(&self, id: &ItemId) -> Result<(), ResourceError> {
        self.store.data().items.retain(|item| &item.id != id);
        Ok(())
    }
}

pub struct MemSignups<'a> {
    store: &'a MemStore,
}

impl<'a> SignupRepository for MemSignups<'a> {
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
        self.store.data().signups.push(request.clone());
        Ok(request)
    }

    fn get(&self, id: &SignupId) -> Result<Option<SignupRequest>, SignupError> {
        Ok(self
            .store
            .data()
            .signups
            .iter()
            .find(|request| &request.id == id)
            .cloned())
    }

    fn list(&self, institution_slug: &str) -> Result<Vec<SignupRequest>, SignupError> {
        Ok(self
            .store
            .data()
            .signups
            .iter()
            .rev()
            .filter(|request| request.institution_slug == institution_slug)
            .cloned()
            .collect())
    }

    fn set_status(
        &self,
        id: &SignupId,
        status: SignupStatus,
        note: Option<String>,
    ) -> Result<SignupRequest, SignupError> {
        let mut data = self.store.data();
        let request = data
            .signups
            .iter_mut()
            .find(|request| &request.id == id)
            .ok_or(SignupError::NotFound)?;
        request.status = status;
        if note.is_some() {
            request.note = note;
        }
        request.updated_at = chrono::Utc::now();
        Ok(request.clone())
    }
}

impl Store for MemStore {
    type Requests<'a>
        = MemRequests<'a>
    where
        Self: 'a;
    type Slots<'a>
        = MemSlots<'a>
    where
        Self: 'a;
    type Announcements<'a>
        = MemAnnouncements<'a>
    where
        Self: 'a;
    type Polls<'a>
        = MemPolls<'a>
    where
        Self: 'a;
    type Resources<'a>
        = MemResources<'a>
    where
        Self: 'a;
    type Signups<'a>
        = MemSignups<'a>
    where
        Self: 'a;

    fn requests(&self) -> Self::Requests<'_> {
        MemRequests { store: self }
    }

    fn slots(&self) -> Self::Slots<'_> {
        MemSlots { store: self }
    }

    fn announcements(&self) -> Self::Announcements<'_> {
        MemAnnouncements { store: self }
    }

    fn polls(&self) -> Self::Polls<'_> {
        MemPolls { store: self }
    }

    fn resources(&self) -> Self::Resources<'_> {
        MemResources { store: self }
    }

    fn signups(&self) -> Self::Signups<'_> {
        MemSignups { store: self }
    }

    // Demo mode has no transactions: writes land as they happen and a failed
    // closure leaves earlier writes in place.
    fn with_tx<F, T>(&self, f: F) -> Result<T, CampusError>
    where
        F: FnOnce(&Self) -> Result<T, CampusError>,
    {
        f(self)
    }
}
