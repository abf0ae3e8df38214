// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory semantic store
//!
//! Holds committed [`SemanticData`] and answers property reads and condition
//! queries against it. Subjects are kept in a sorted map, so query results are
//! ordered by subject.

use super::error::{StoreError, StoreResult};
use super::query::{Query, QueryResult, ResultRow};
use super::semantic_data::SemanticData;
use super::traits::SemanticStore;
use super::value::Value;
use crate::types::{PageIdentity, Property};
use parking_lot::RwLock;
use std::collections::BTreeMap;

type Facts = Vec<(&'static Property, Value)>;

pub struct MemoryStore {
    subjects: RwLock<BTreeMap<PageIdentity, Facts>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            subjects: RwLock::new(BTreeMap::new()),
        }
    }

    /// Replace everything recorded for the page owning `data`
    pub fn update_data(&self, data: &SemanticData) {
        let page = data.subject().page();
        let mut subjects = self.subjects.write();

        subjects.retain(|subject, _| subject.page() != page);
        insert_flattened(&mut subjects, data);

        log::debug!(
            "MemoryStore: committed {} fact(s) and {} container(s) for {}",
            data.facts().len(),
            data.subobjects().len(),
            page
        );
    }

    /// Drop a page and all of its subobjects
    pub fn delete_subject(&self, page: &PageIdentity) {
        let page = page.page();
        self.subjects.write().retain(|subject, _| subject.page() != page);
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.read().len()
    }

    pub fn clear(&self) {
        self.subjects.write().clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_flattened(subjects: &mut BTreeMap<PageIdentity, Facts>, data: &SemanticData) {
    if !data.facts().is_empty() {
        subjects.insert(data.subject().clone(), data.facts().to_vec());
    }
    for subobject in data.subobjects() {
        insert_flattened(subjects, subobject);
    }
}

impl SemanticStore for MemoryStore {
    fn property_values(
        &self,
        subject: &PageIdentity,
        property: Option<&Property>,
    ) -> StoreResult<Vec<Value>> {
        let subjects = self.subjects.read();
        let values = match subjects.get(subject) {
            Some(facts) => facts
                .iter()
                .filter(|(p, _)| property.map_or(true, |wanted| p.key() == wanted.key()))
                .map(|(_, v)| v.clone())
                .collect(),
            None => Vec::new(),
        };
        Ok(values)
    }

    fn query_result(&self, query: &Query) -> StoreResult<QueryResult> {
        let conditions = query
            .conditions()?
            .into_iter()
            .map(|condition| {
                Property::lookup(&condition.property)
                    .map(|property| (property, condition.value))
                    .ok_or_else(|| {
                        StoreError::InvalidQuery(format!(
                            "unknown property '{}'",
                            condition.property
                        ))
                    })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        let subjects = self.subjects.read();
        let mut rows = Vec::new();

        for (subject, facts) in subjects.iter() {
            let matches = conditions.iter().all(|(property, expected)| {
                facts
                    .iter()
                    .any(|(p, v)| p.key() == property.key() && v.matches_condition(expected))
            });
            if !matches {
                continue;
            }

            let values = query
                .printouts()
                .iter()
                .flat_map(|printout| {
                    facts
                        .iter()
                        .filter(move |(p, _)| p.key() == printout.key())
                        .map(|(_, v)| v.clone())
                })
                .collect();
            rows.push(ResultRow::new(subject.clone(), values));

            if query.limit().is_some_and(|limit| rows.len() >= limit) {
                break;
            }
        }

        log::debug!(
            "MemoryStore: query '{}' matched {} row(s)",
            query.query_string(),
            rows.len()
        );

        Ok(QueryResult::new(rows))
    }
}
