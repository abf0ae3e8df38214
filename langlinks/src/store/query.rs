// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Store queries and query results
//!
//! The lookup layer only ever issues conjunctions of property-value
//! conditions: `[[Interlanguage reference::Foo]]`, optionally followed by
//! further `[[Property::Value]]` blocks. Print requests select which property
//! values are returned per result row.

use super::error::{StoreError, StoreResult};
use super::value::Value;
use crate::types::{PageIdentity, Property};
use nom::{
    bytes::complete::{tag, take_until},
    character::complete::multispace0,
    combinator::{all_consuming, map},
    multi::many1,
    sequence::{delimited, preceded, separated_pair, terminated},
    IResult,
};

/// A query against the semantic store
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    condition: String,
    printouts: Vec<&'static Property>,
    limit: Option<usize>,
}

impl Query {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            printouts: Vec::new(),
            limit: None,
        }
    }

    /// Request the values of `property` for every result row
    pub fn with_printout(mut self, property: &'static Property) -> Self {
        self.printouts.push(property);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The condition string, e.g. `[[Interlanguage reference::Foo]]`
    pub fn query_string(&self) -> &str {
        &self.condition
    }

    pub fn printouts(&self) -> &[&'static Property] {
        &self.printouts
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Parse the condition string into its property-value conditions
    pub fn conditions(&self) -> StoreResult<Vec<Condition>> {
        parse_conditions(&self.condition)
    }
}

/// One `[[Property::Value]]` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub property: String,
    pub value: String,
}

/// One row of a query result
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// The matching subject, usually a container subobject
    pub subject: PageIdentity,
    /// Print request values, in printout order
    pub values: Vec<Value>,
}

impl ResultRow {
    pub fn new(subject: PageIdentity, values: Vec<Value>) -> Self {
        Self { subject, values }
    }

    pub fn first_value(&self) -> Option<&Value> {
        self.values.first()
    }
}

/// Rows returned by a store query, in store order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub rows: Vec<ResultRow>,
}

impl QueryResult {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl IntoIterator for QueryResult {
    type Item = ResultRow;
    type IntoIter = std::vec::IntoIter<ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

fn condition(input: &str) -> IResult<&str, Condition> {
    map(
        preceded(
            multispace0,
            delimited(
                tag("[["),
                separated_pair(take_until("::"), tag("::"), take_until("]]")),
                tag("]]"),
            ),
        ),
        |(property, value): (&str, &str)| Condition {
            property: property.trim().to_string(),
            value: value.trim().to_string(),
        },
    )(input)
}

/// Parse a conjunction of `[[Property::Value]]` conditions
pub fn parse_conditions(input: &str) -> StoreResult<Vec<Condition>> {
    let (_, conditions) = all_consuming(terminated(many1(condition), multispace0))(input)
        .map_err(|e| StoreError::InvalidQuery(format!("'{}': {}", input, e)))?;

    if let Some(bad) = conditions.iter().find(|c| {
        c.property.is_empty() || c.value.is_empty() || c.property.contains(['[', ']'])
    }) {
        return Err(StoreError::InvalidQuery(format!(
            "'{}': malformed condition [[{}::{}]]",
            input, bad.property, bad.value
        )));
    }

    Ok(conditions)
}
