//! # dewguard-domain
//!
//! Pure domain model for the dewguard humidity trigger.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Switch handles** (externally-owned devices accepting a numeric value)
//! - Define the **Switch list** (live device list vs synthetic placeholder)
//! - Define **Trigger settings** (clamped, quantized, host-persisted fields)
//! - Define **Validation issues** (soft, human-readable failure reports)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod issue;
pub mod metadata;
pub mod settings;
pub mod switch;
pub mod switch_list;
