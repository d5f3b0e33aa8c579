//! Sakar Whizzo Lead Intake API Library
//!
//! Lead-capture pipeline for the Sakar Whizzo marketing site: a relay
//! endpoint that validates, enriches, and forwards visitor submissions to an
//! external lead-management webhook, plus the form controller that drives
//! submissions from the presentation layer.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `enrichment`: Request-metadata enrichment of submissions.
//! - `errors`: Error handling types.
//! - `form`: Intake form controller and gateway seam.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Data models and fixed messages.
//! - `validation`: Field constraints and budget formatting.
//! - `webhook_client`: Outbound webhook client.

pub mod config;
pub mod enrichment;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod validation;
pub mod webhook_client;
