pub mod announcements;
pub mod campus;
pub mod error;
pub mod polls;
pub mod requests;
pub mod resources;
pub mod signups;
pub mod slots;
pub mod store;
pub mod validation;

pub mod types;

pub use crate::campus::Campus;
pub use crate::error::CampusError;
pub use crate::store::Store;
