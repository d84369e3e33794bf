//! HTTP handlers for the jobs domain

pub mod admin;
pub mod jobs;
