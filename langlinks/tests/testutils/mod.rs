//! Test utilities for langlinks integration tests
//!
//! - ScriptedStore: returns canned store responses in call order and records
//!   every call it receives
//! - RecordingCache: a working in-memory cache that records every call
//! - Fixture helpers for building annotated pages

#![allow(dead_code)]

pub mod doubles;
pub mod fixtures;
