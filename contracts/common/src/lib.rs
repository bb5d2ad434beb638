//! Shared utilities for the GameFactory contract suite.
//!
//! This crate provides the role registry used to gate every mutating entry
//! point: [`roles::Role`] plus persistent-storage helpers for granting,
//! revoking, and checking role membership.

#![no_std]

pub mod roles;

pub use roles::*;
