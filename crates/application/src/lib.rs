//! Ferrous NS Check Application Layer
//!
//! Use cases that discover the authoritative nameservers of a name, query
//! each of them directly and collect the answers into a [`Report`].
//!
//! [`Report`]: ferrous_nscheck_domain::Report
pub mod ports;
pub mod use_cases;
