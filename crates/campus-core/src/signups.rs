use crate::error::SignupError;
use crate::types::io::SubmitSignupInput;
use crate::types::{SignupId, SignupRequest, SignupStatus};

pub trait SignupRepository {
    fn create(&self, input: SubmitSignupInput) -> Result<SignupRequest, SignupError>;
    fn get(&self, id: &SignupId) -> Result<Option<SignupRequest>, SignupError>;
    /// Newest first, scoped to one institution slug.
    fn list(&self, institution_slug: &str) -> Result<Vec<SignupRequest>, SignupError>;
    fn set_status(
        &self,
        id: &SignupId,
        status: SignupStatus,
        note: Option<String>,
    ) -> Result<SignupRequest, SignupError>;
}
