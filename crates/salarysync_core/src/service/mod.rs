//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the menu/presentation layer decoupled from storage details.

pub mod payroll_service;
