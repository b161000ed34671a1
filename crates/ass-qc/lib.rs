//! # ASS-QC
//!
//! Quality-check rule engine for ASS subtitle event lists. Scans the
//! dialogue lines of a script for typesetting and typography mistakes that a
//! parser accepts but a viewer notices: lines flashing by too quickly,
//! flickering gaps, broken punctuation, misused override tags, repeated words
//! and sentences split badly across lines.
//!
//! ## Features
//!
//! - **Fixed rule set**: five built-in checks dispatched through [`checks::CheckKind`]
//! - **Deterministic reports**: check-major, event-minor ordering
//! - **Strict tag grammar**: override blocks parsed by [`tags::parse_ass`]
//! - **Configurable**: per-check toggles, timing thresholds, exempt actors
//! - **Parallel scans**: optional `rayon` fan-out with identical output
//!
//! ## Quick Start
//!
//! ```rust
//! use ass_qc::{lint_events, Event, EventList, LintConfig};
//!
//! let mut events = EventList::new();
//! events.push(Event::new(0, 1500, "W-what?"));
//! events.push(Event::new(1600, 3000, r"{\an8}{\fs40}Look!"));
//!
//! let report = lint_events(&events, &LintConfig::default())?;
//! for violation in &report {
//!     println!("{violation}");
//! }
//! assert_eq!(report.len(), 3);
//! # Ok::<(), ass_qc::QcError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod checks;
pub mod config;
pub mod errors;
pub mod event;
pub mod lint;
pub mod navigation;
pub mod report;
pub mod tags;
pub mod text;
pub mod violation;

pub use config::{LintConfig, TimingThresholds};
pub use errors::{QcError, Result};
pub use event::{Event, EventList};
pub use lint::{check_event, lint_events};
pub use report::Report;
pub use violation::Violation;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
