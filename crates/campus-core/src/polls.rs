use crate::error::PollError;
use crate::types::io::{CreatePollInput, VoteInput};
use crate::types::{Poll, PollId, PollResponse};

pub trait PollRepository {
    fn create(&self, input: CreatePollInput) -> Result<Poll, PollError>;
    fn get(&self, id: &PollId) -> Result<Option<Poll>, PollError>;
    /// Newest first.
    fn list(&self) -> Result<Vec<Poll>, PollError>;
    fn responses(&self, poll_id: &PollId) -> Result<Vec<PollResponse>, PollError>;
    /// Returns the existing response for this student, if any.
    fn response_by_student(
        &self,
        poll_id: &PollId,
        student_id: &str,
    ) -> Result<Option<PollResponse>, PollError>;
    fn add_response(&self, poll_id: &PollId, input: VoteInput) -> Result<PollResponse, PollError>;
}
