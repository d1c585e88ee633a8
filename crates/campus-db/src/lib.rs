pub mod announcement_repo;
pub mod codec;
pub mod memory;
pub mod poll_repo;
pub mod request_repo;
pub mod resource_repo;
pub mod schema;
pub mod signup_repo;
pub mod slot_repo;
pub mod store;

pub use crate::memory::MemStore;
pub use crate::store::DbStore;
