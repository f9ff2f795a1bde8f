mod memory_contact_repository;
mod memory_user_repository;
mod traits;

pub use memory_contact_repository::MemoryContactRepository;
pub use memory_user_repository::MemoryUserRepository;
pub use traits::{ContactRepository, UserRepository};
