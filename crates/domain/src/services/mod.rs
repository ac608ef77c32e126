//! Domain services for the Contact Book.
//!
//! Services hold the business rules and reach storage only through the
//! store traits.

pub mod contacts;
pub mod store;
pub mod users;

pub use contacts::{ContactError, ContactService, ContactStore, InMemoryContactStore};
pub use store::StoreError;
pub use users::{InMemoryUserStore, UserError, UserService, UserStore};
