mod dto;
pub mod file_store;
pub mod memory;

pub use file_store::FileTaskStorage;
pub use memory::InMemoryTaskStorage;
