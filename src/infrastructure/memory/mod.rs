//! In-memory storage backends.

mod in_memory_entry_repository;

pub use in_memory_entry_repository::InMemoryEntryRepository;
