//! # valuation_models: Contracts and Closed-Form Analytics
//!
//! Domain layer of the valuation workspace.
//!
//! This crate provides:
//! - The option contract entity (`instruments::VanillaOption`) with its
//!   time and payoff primitives
//! - The closed-form pricing model (`analytical::BlackScholes`) and the
//!   standard-normal distribution helpers it is built on
//! - Analytic Greeks, the engine-wide source of sensitivities
//!
//! ## Design Principles
//!
//! - **Tagged contracts**: call/put is an enumerated `OptionRight`, not a
//!   subclass hierarchy, so construction logic exists exactly once
//! - **Explicit time**: the valuation date is always a parameter; nothing
//!   reads the ambient clock
//! - **Fail fast**: degenerate inputs are rejected with typed errors before
//!   any arithmetic can produce NaN

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
