//! HTTP routes

pub mod home;
