//! Sublease agreement document rendering
//!
//! This crate turns a validated set of lease details into a paginated,
//! downloadable PDF: templated clause prose, selective bold-facing of the
//! party names, optional letterhead branding, and deterministic output
//! for identical inputs.

pub mod assets;
pub mod clauses;
pub mod dates;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod record;
pub mod renderer;
pub mod writer;

pub use error::{RenderError, ValidationError};
pub use record::AgreementRecord;
pub use renderer::{AgreementRenderer, RenderOptions, RenderedAgreement};
