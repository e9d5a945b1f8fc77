//! Business logic for the exam service.
//!
//! Operates on the pure data structures in `models`: building exam
//! configurations, looking up exams through the repository seam, and
//! probing downstream service health.

pub mod config;
pub mod configuration;
pub mod error;
pub mod health;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;
