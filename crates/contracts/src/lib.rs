//! Shared types and pure logic for the admin page enhancements.
//!
//! Everything here is free of DOM access so it can be unit-tested natively;
//! the `frontend` crate wires these types to the browser.

pub mod domain;
pub mod shared;
pub mod usecases;
