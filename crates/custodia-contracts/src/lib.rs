//! # custodia-contracts
//!
//! Shared types and error contracts for the Custodia case-audit core.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod action;
pub mod case;
pub mod custody;
pub mod error;
pub mod evidence;
pub mod ledger;
pub mod verify;
