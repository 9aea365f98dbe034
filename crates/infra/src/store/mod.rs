//! Credential store adapters.

mod in_memory;
mod records;

pub use in_memory::InMemoryCredentialStore;
pub use records::UserRecord;
