// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Semantic store trait
//!
//! The lookup layer depends only on this read contract. Any store that can
//! answer property-value reads and condition queries can back it.

use super::error::StoreResult;
use super::query::{Query, QueryResult};
use super::value::Value;
use crate::types::{PageIdentity, Property};
use std::sync::Arc;

pub trait SemanticStore: Send + Sync {
    /// Values recorded for `subject`, in store order
    ///
    /// With `property` set only that property's values are returned,
    /// otherwise every value the subject holds.
    fn property_values(
        &self,
        subject: &PageIdentity,
        property: Option<&Property>,
    ) -> StoreResult<Vec<Value>>;

    /// Execute a condition query
    fn query_result(&self, query: &Query) -> StoreResult<QueryResult>;
}

impl<S: SemanticStore + ?Sized> SemanticStore for Arc<S> {
    fn property_values(
        &self,
        subject: &PageIdentity,
        property: Option<&Property>,
    ) -> StoreResult<Vec<Value>> {
        (**self).property_values(subject, property)
    }

    fn query_result(&self, query: &Query) -> StoreResult<QueryResult> {
        (**self).query_result(query)
    }
}
