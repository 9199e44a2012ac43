//! Routed pages.

pub mod about;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod signin;
pub mod signup;
pub mod student;
