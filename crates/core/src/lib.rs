//! Core library for numclass
//!
//! This crate implements the **Functional Core** of the numclass service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The numclass project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`numclass_core`** (this crate): Pure classification and response shaping with zero I/O
//! - **`numclass`**: HTTP server, fact-service client and CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No network calls, no clock reads, no logging
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! The only inputs that vary between requests, the current time and the text
//! returned by the fact service, are passed in by the shell.
//!
//! # Module Organization
//!
//! - [`classify`]: Primality, perfection, Armstrong, parity and digit sum
//! - [`fact`]: Fact-service wire type and the locally synthesized fallback fact
//! - [`response`]: Number parsing and the classify endpoint's response bodies
//! - [`info`]: Operator identity payload and timestamp formatting
//!
//! # Example Usage
//!
//! ```rust
//! use numclass_core::classify::classify;
//! use numclass_core::fact::fact_or_fallback;
//! use numclass_core::response::{build_classification_response, parse_number};
//!
//! let number = parse_number("371").unwrap();
//! let classification = classify(number);
//!
//! // The fact service was unreachable
//! let fun_fact = fact_or_fallback(None, &classification);
//! let response = build_classification_response(classification, fun_fact);
//!
//! assert_eq!(response.digit_sum, 11);
//! assert_eq!(
//!     response.fun_fact,
//!     "371 is an Armstrong number because 3^3 + 7^3 + 1^3 = 371"
//! );
//! ```

pub mod classify;
pub mod fact;
pub mod info;
pub mod response;
