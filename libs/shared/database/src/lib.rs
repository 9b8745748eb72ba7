pub mod error;
pub mod memory;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use store::{ClinicSnapshot, ClinicStore, SharedStore};
