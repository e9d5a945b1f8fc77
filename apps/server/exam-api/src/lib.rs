//! HTTP application for the exam service.
//!
//! Wires the business logic in `exam-core` behind two endpoints:
//! `GET /exam/{id}` and `GET /health`.

pub mod error;
pub mod logger;
pub mod resources;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;
