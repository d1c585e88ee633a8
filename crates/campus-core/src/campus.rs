use crate::announcements::AnnouncementRepository;
use crate::error::{AnnouncementError, CampusError, PollError, RequestError, ResourceError};
use crate::polls::PollRepository;
use crate::requests::RequestRepository;
use crate::resources::ResourceRepository;
use crate::signups::SignupRepository;
use crate::slots::SlotRepository;
use crate::store::Store;
use crate::types::io::{
    CreateAnnouncementInput, CreateCourseInput, CreateItemInput, CreatePollInput,
    CreateRequestInput, CreateSlotInput, RequestFilter, RespondInput, SubmitSignupInput,
    UpdateAnnouncementInput, UpdateCourseInput, UpdateItemInput, VoteInput,
};
use crate::types::{
    Announcement, AnnouncementId, ConsultationSlot, CourseId, HelpdeskRequest, ItemId, Poll,
    PollId, PollResponse, PollWithResponses, RequestId, ResourceCourse, ResourceItem, SignupId,
    SignupRequest, SignupStatus, TimelineEntry,
};
use crate::validation::{
    validate_request_input, validate_signup_input, validate_slot_input, validate_vote_input,
};
use chrono::Utc;

/// Service facade over a [`Store`]. All behavior that is more than plain
/// persistence lives here; the HTTP layer and the CLI only ever talk to this.
pub struct Campus<S: Store> {
    store: S,
}

impl<S: Store> Campus<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn helpdesk(&self) -> HelpdeskApi<'_, S> {
        HelpdeskApi { core: self }
    }

    pub fn slots(&self) -> SlotsApi<'_, S> {
        SlotsApi { core: self }
    }

    pub fn announcements(&self) -> AnnouncementsApi<'_, S> {
        AnnouncementsApi { core: self }
    }

    pub fn polls(&self) -> PollsApi<'_, S> {
        PollsApi { core: self }
    }

    pub fn resources(&self) -> ResourcesApi<'_, S> {
        ResourcesApi { core: self }
    }

    pub fn signups(&self) -> SignupsApi<'_, S> {
        SignupsApi { core: self }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub struct HelpdeskApi<'a, S: Store> {
    core: &'a Campus<S>,
}

impl<'a, S: Store> HelpdeskApi<'a, S> {
    /// Files a new ticket: status starts at `pending` with an empty timeline.
    /// An instructor-typed ticket without an `assignee_id` stays unassigned
    /// ("any available instructor").
    pub fn file_request(
        &self,
        input: CreateRequestInput,
    ) -> Result<HelpdeskRequest, CampusError> {
        validate_request_input(&input)?;
        self.core
            .store
            .with_tx(|store| Ok(store.requests().create(input)?))
    }

    /// Records a response: sets `status` and appends one timeline entry in a
    /// single transaction. Any status may follow any other, including
    /// reopening a resolved or rejected ticket; that is deliberate policy,
    /// not missing validation. The operation is not idempotent: a retried
    /// call appends a second, identical entry.
    ///
    /// Note: no server-side role check guards this call. The original system
    /// kept the "only instructors and institutions respond" rule in its
    /// client, and that gap is preserved rather than papered over.
    pub fn respond(
        &self,
        id: &RequestId,
        input: RespondInput,
    ) -> Result<HelpdeskRequest, CampusError> {
        let entry = TimelineEntry {
            status: input.status,
            note: input.note,
            at: Utc::now(),
            by: input.responded_by,
        };
        self.core
            .store
            .with_tx(|store| Ok(store.requests().update_status(id, input.status, entry)?))
    }

    pub fn get(&self, id: &RequestId) -> Result<HelpdeskRequest, CampusError> {
        self.core
            .store
            .requests()
            .get(id)?
            .ok_or(CampusError::Request(RequestError::NotFound))
    }

    pub fn list(&self, filter: &RequestFilter) -> Result<Vec<HelpdeskRequest>, CampusError> {
        Ok(self.core.store.requests().list(filter)?)
    }

    /// Administrative hard delete, outside the normal lifecycle.
    pub fn delete(&self, id: &RequestId) -> Result<(), CampusError> {
        self.core
            .store
            .with_tx(|store| Ok(store.requests().delete(id)?))
    }
}

pub struct SlotsApi<'a, S: Store> {
    core: &'a Campus<S>,
}

impl<'a, S: Store> SlotsApi<'a, S> {
    pub fn publish(&self, input: CreateSlotInput) -> Result<ConsultationSlot, CampusError> {
        validate_slot_input(&input)?;
        self.core
            .store
            .with_tx(|store| Ok(store.slots().create(input)?))
    }

    pub fn list(&self) -> Result<Vec<ConsultationSlot>, CampusError> {
        Ok(self.core.store.slots().list()?)
    }
}

pub struct AnnouncementsApi<'a, S: Store> {
    core: &'a Campus<S>,
}

impl<'a, S: Store> AnnouncementsApi<'a, S> {
    pub fn create(&self, input: CreateAnnouncementInput) -> Result<Announcement, CampusError> {
        if input.title.trim().is_empty() {
            return Err(CampusError::Announcement(AnnouncementError::InvalidInput {
                message: "title is required".to_string(),
            }));
        }
        if input.institution_slug.trim().is_empty() {
            return Err(CampusError::Announcement(AnnouncementError::InvalidInput {
                message: "institutionSlug is required".to_string(),
            }));
        }
        self.core
            .store
            .with_tx(|store| Ok(store.announcements().create(input)?))
    }

    pub fn get(&self, id: &AnnouncementId) -> Result<Announcement, CampusError> {
        self.core
            .store
            .announcements()
            .get(id)?
            .ok_or(CampusError::Announcement(AnnouncementError::NotFound))
    }

    pub fn list(&self, institution_slug: Option<&str>) -> Result<Vec<Announcement>, CampusError> {
        Ok(self.core.store.announcements().list(institution_slug)?)
    }

    pub fn update(
        &self,
        id: &AnnouncementId,
        input: UpdateAnnouncementInput,
    ) -> Result<Announcement, CampusError> {
        self.core
            .store
            .with_tx(|store| Ok(store.announcements().update(id, input)?))
    }

    pub fn delete(&self, id: &AnnouncementId) -> Result<(), CampusError> {
        self.core
            .store
            .with_tx(|store| Ok(store.announcements().delete(id)?))
    }
}

pub struct PollsApi<'a, S: Store> {
    core: &'a Campus<S>,
}

impl<'a, S: Store> PollsApi<'a, S> {
    pub fn create(&self, input: CreatePollInput) -> Result<Poll, CampusError> {
        if input.title.trim().is_empty() {
            return Err(CampusError::Poll(PollError::InvalidInput {
                message: "title is required".to_string(),
            }));
        }
        self.core
            .store
            .with_tx(|store| Ok(store.polls().create(input)?))
    }

    pub fn list(&self) -> Result<Vec<Poll>, CampusError> {
        Ok(self.core.store.polls().list()?)
    }

    pub fn get_with_responses(&self, id: &PollId) -> Result<PollWithResponses, CampusError> {
        let polls = self.core.store.polls();
        let poll = polls
            .get(id)?
            .ok_or(CampusError::Poll(PollError::PollNotFound))?;
        let responses = polls.responses(id)?;
        Ok(PollWithResponses { poll, responses })
    }

    /// One response per student per poll; a second submission is rejected.
    pub fn vote(&self, id: &PollId, input: VoteInput) -> Result<PollResponse, CampusError> {
        validate_vote_input(&input)?;
        self.core.store.with_tx(|store| {
            let polls = store.polls();
            if polls.get(id)?.is_none() {
                return Err(CampusError::Poll(PollError::PollNotFound));
            }
            if polls.response_by_student(id, &input.student_id)?.is_some() {
                return Err(CampusError::Poll(PollError::DuplicateVote));
            }
            Ok(polls.add_response(id, input)?)
        })
    }
}

pub struct ResourcesApi<'a, S: Store> {
    core: &'a Campus<S>,
}

impl<'a, S: Store> ResourcesApi<'a, S> {
    pub fn create_course(&self, input: CreateCourseInput) -> Result<ResourceCourse, CampusError> {
        if input.name.trim().is_empty() {
            return Err(CampusError::Resource(ResourceError::InvalidInput {
                message: "name is required".to_string(),
            }));
        }
        self.core
            .store
            .with_tx(|store| Ok(store.resources().create_course(input)?))
    }

    pub fn list_courses(&self) -> Result<Vec<ResourceCourse>, CampusError> {
        Ok(self.core.store.resources().list_courses()?)
    }

    pub fn update_course(
        &self,
        id: &CourseId,
        input: UpdateCourseInput,
    ) -> Result<ResourceCourse, CampusError> {
        self.core
            .store
            .with_tx(|store| Ok(store.resources().update_course(id, input)?))
    }

    /// Removes the course and all of its items in one transaction.
    pub fn delete_course(&self, id: &CourseId) -> Result<(), CampusError> {
        self.core
            .store
            .with_tx(|store| Ok(store.resources().delete_course(id)?))
    }

    pub fn list_items(&self, course_id: &CourseId) -> Result<Vec<ResourceItem>, CampusError> {
        let resources = self.core.store.resources();
        if resources.get_course(course_id)?.is_none() {
            return Err(CampusError::Resource(ResourceError::CourseNotFound));
        }
        Ok(resources.list_items(course_id)?)
    }

    pub fn create_item(
        &self,
        course_id: &CourseId,
        input: CreateItemInput,
    ) -> Result<ResourceItem, CampusError> {
        if input.title.trim().is_empty() {
            return Err(CampusError::Resource(ResourceError::InvalidInput {
                message: "title is required".to_string(),
            }));
        }
        self.core.store.with_tx(|store| {
            let resources = store.resources();
            if resources.get_course(course_id)?.is_none() {
                return Err(CampusError::Resource(ResourceError::CourseNotFound));
            }
            Ok(resources.create_item(course_id, input)?)
        })
    }

    pub fn update_item(
        &self,
        id: &ItemId,
        input: UpdateItemInput,
    ) -> Result<ResourceItem, CampusError> {
        self.core
            .store
            .with_tx(|store| Ok(store.resources().update_item(id, input)?))
    }

    pub fn delete_item(&self, id: &ItemId) -> Result<(), CampusError> {
        self.core
            .store
            .with_tx(|store| Ok(store.resources().delete_item(id)?))
    }
}

pub struct SignupsApi<'a, S: Store> {
    core: &'a Campus<S>,
}

impl<'a, S: Store> SignupsApi<'a, S> {
    pub fn submit(&self, input: SubmitSignupInput) -> Result<SignupRequest, CampusError> {
        validate_signup_input(&input)?;
        self.core
            .store
            .with_tx(|store| Ok(store.signups().create(input)?))
    }

    pub fn list(&self, institution_slug: &str) -> Result<Vec<SignupRequest>, CampusError> {
        Ok(self.core.store.signups().list(institution_slug)?)
    }

    /// Approving only records the decision; the actual account lives in the
    /// external user directory and is provisioned there.
    pub fn decide(
        &self,
        id: &SignupId,
        status: SignupStatus,
        note: Option<String>,
    ) -> Result<SignupRequest, CampusError> {
        self.core
            .store
            .with_tx(|store| Ok(store.signups().set_status(id, status, note)?))
    }
}
