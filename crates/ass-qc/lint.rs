//! Scan driver
//!
//! Runs every enabled check over every event and collects the violations
//! into a [`Report`]. Checks run check-major, event-minor: all `durations`
//! findings come first, in event order, then all `punctuation` findings, and
//! so on in registry order.
//!
//! # Example
//!
//! ```rust
//! use ass_qc::{lint_events, Event, EventList, LintConfig};
//!
//! let events: EventList = vec![
//!     Event::new(0, 2000, "What youve done..."),
//!     Event::new(2000, 4000, "Nothing."),
//! ]
//! .into();
//!
//! let report = lint_events(&events, &LintConfig::default())?;
//! assert_eq!(
//!     report.to_string(),
//!     "#1: bad ellipsis (expected …)\n#1: missing apostrophe\n"
//! );
//! # Ok::<(), ass_qc::QcError>(())
//! ```

use log::{debug, trace};

use crate::{
    checks::{BuiltinChecks, CheckContext, CheckKind},
    config::LintConfig,
    errors::{QcError, Result},
    event::EventList,
    report::Report,
    violation::Violation,
};

/// Lint a whole event list.
///
/// # Errors
///
/// Returns an error if `config` fails [`LintConfig::validate`]. Content
/// problems never fail the scan.
pub fn lint_events(events: &EventList, config: &LintConfig) -> Result<Report> {
    config.validate()?;

    let mut violations = Vec::new();
    for check in BuiltinChecks::enabled_checks(config) {
        let found = run_check(check, events, config);
        debug!(
            "check {} found {} violation(s) in {} event(s)",
            check.id(),
            found.len(),
            events.len()
        );
        for violation in &found {
            trace!("{}: {violation}", check.id());
        }
        violations.extend(found);

        if config.max_violations > 0 && violations.len() >= config.max_violations {
            violations.truncate(config.max_violations);
            debug!("violation limit {} reached", config.max_violations);
            break;
        }
    }

    Ok(Report::new(violations))
}

/// Run every enabled check on one event.
///
/// # Errors
///
/// Returns [`QcError::EventOutOfRange`] if `index` is not in `events`, or a
/// configuration error if `config` is invalid.
pub fn check_event(events: &EventList, index: usize, config: &LintConfig) -> Result<Vec<Violation>> {
    if index >= events.len() {
        return Err(QcError::EventOutOfRange {
            index,
            len: events.len(),
        });
    }
    config.validate()?;

    let context = CheckContext::new(events, index, config);
    Ok(BuiltinChecks::enabled_checks(config)
        .into_iter()
        .flat_map(|check| check.run(&context))
        .collect())
}

#[cfg(not(feature = "parallel"))]
fn run_check(check: CheckKind, events: &EventList, config: &LintConfig) -> Vec<Violation> {
    (0..events.len())
        .flat_map(|index| check.run(&CheckContext::new(events, index, config)))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_check(check: CheckKind, events: &EventList, config: &LintConfig) -> Vec<Violation> {
    use rayon::prelude::*;

    // indexed collect keeps event order
    let per_event: Vec<Vec<Violation>> = (0..events.len())
        .into_par_iter()
        .map(|index| check.run(&CheckContext::new(events, index, config)))
        .collect();
    per_event.into_iter().flatten().collect()
}
