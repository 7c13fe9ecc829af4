//! Command implementations

pub mod audit;
pub mod check;
pub mod profile;
pub mod simple;

pub use audit::{AuditReport, Violation, run_audit};
pub use check::check_guess;
pub use profile::{Credentials, reset_profile, show_stats, sign_in};
pub use simple::run_simple;
