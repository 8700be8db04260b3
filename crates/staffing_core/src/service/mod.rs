//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into record-level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod assignment;
pub mod initiative_service;
pub mod location_service;
pub mod worker_service;
