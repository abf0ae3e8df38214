// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Semantic store contract and in-memory implementation
//!
//! This module provides:
//! - Typed store values (`Value`)
//! - Condition queries and their results
//! - The `SemanticStore` trait the lookup layer reads through
//! - `SemanticData` containers, the unit the annotator writes
//! - `MemoryStore`, a reference store for embedding and tests

pub mod error;
pub mod memory;
pub mod query;
pub mod semantic_data;
pub mod traits;
pub mod value;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use query::{parse_conditions, Condition, Query, QueryResult, ResultRow};
pub use semantic_data::SemanticData;
pub use traits::SemanticStore;
pub use value::Value;
