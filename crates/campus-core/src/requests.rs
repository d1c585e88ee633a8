use crate::error::RequestError;
use crate::types::io::{CreateRequestInput, RequestFilter};
use crate::types::{HelpdeskRequest, RequestId, RequestStatus, TimelineEntry};

pub trait RequestRepository {
    /// Assigns an id, `pending` status, an empty timeline and timestamps.
    fn create(&self, input: CreateRequestInput) -> Result<HelpdeskRequest, RequestError>;
    fn get(&self, id: &RequestId) -> Result<Option<HelpdeskRequest>, RequestError>;
    /// Newest first. Unbounded; there is no pagination.
    fn list(&self, filter: &RequestFilter) -> Result<Vec<HelpdeskRequest>, RequestError>;
    /// Sets `status`, appends `entry` to the timeline and bumps `updated_at`
    /// in one write. Fails with NotFound before any mutation.
    fn update_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
        entry: TimelineEntry,
    ) -> Result<HelpdeskRequest, RequestError>;
    /// Administrative hard delete; not part of the lifecycle.
    fn delete(&self, id: &RequestId) -> Result<(), RequestError>;
}
