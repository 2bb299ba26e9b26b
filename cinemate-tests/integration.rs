//! Integration tests for CineMate
//!
//! These tests drive the full pipeline through the public API: catalog
//! provider -> snapshot fetch -> normalize -> filter -> group, via the
//! release calendar service.

#[path = "integration/support.rs"]
mod support;

#[path = "integration/calendar_pipeline.rs"]
mod calendar_pipeline;

#[path = "integration/service_lifecycle.rs"]
mod service_lifecycle;
