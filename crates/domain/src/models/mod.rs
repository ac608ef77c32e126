//! Domain models for the Contact Book.

pub mod contact;
pub mod user;

pub use contact::{Contact, ContactChanges, CreateContactRequest, NewContact, UpdateContactRequest};
pub use user::{CredentialsRequest, NewUser, User};
