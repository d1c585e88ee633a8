pub mod announcement;
pub mod enums;
pub mod ids;
pub mod io;
pub mod poll;
pub mod request;
pub mod resource;
pub mod signup;
pub mod slot;

pub use announcement::Announcement;
pub use enums::{
    AnnouncementType, AssigneeType, PollKind, PollScope, RequestCategory, RequestStatus,
    ResourceKind, SignupRole, SignupStatus,
};
pub use ids::{
    AnnouncementId, CourseId, ItemId, PollId, PollResponseId, RequestId, SignupId, SlotId,
};
pub use poll::{Poll, PollOption, PollResponse, PollWithResponses};
pub use request::{HelpdeskRequest, TimelineEntry};
pub use resource::{ResourceCourse, ResourceItem};
pub use signup::SignupRequest;
pub use slot::ConsultationSlot;
