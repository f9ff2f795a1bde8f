//! Data structures for users and contact aggregates, plus the request and
//! response payloads exchanged over the API.

mod contact;
mod user;

pub use contact::{Contact, ContactInput, EmailAddress, EmailEntry, PhoneEntry, PhoneNumber};
pub use user::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, UpdateProfileRequest,
    User,
};
