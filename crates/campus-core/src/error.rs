use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("helpdesk request not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum AnnouncementError {
    #[error("announcement not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum PollError {
    #[error("poll not found")]
    PollNotFound,
    #[error("already submitted")]
    DuplicateVote,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("resource course not found")]
    CourseNotFound,
    #[error("resource item not found")]
    ItemNotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("signup request not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum CampusError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error(transparent)]
    Announcement(#[from] AnnouncementError),
    #[error(transparent)]
    Poll(#[from] PollError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Signup(#[from] SignupError),
    #[error("internal error: {message}")]
    Internal { message: String },
}
