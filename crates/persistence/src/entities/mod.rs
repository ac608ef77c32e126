//! Entity definitions (database row mappings).

pub mod contact;
pub mod user;

pub use contact::ContactEntity;
pub use user::UserEntity;
