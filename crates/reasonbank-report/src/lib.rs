//! reasonbank-report — Machine-readable output for validation runs.

pub mod sarif;
