// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Language link annotation
//!
//! The write side of the subsystem: turns resolved [`LinkDescriptor`]s into
//! semantic facts on the page being rendered. Facts accumulate in a
//! [`PageOutput`]; once committed they can be handed to a store with
//! [`MemoryStore::update_data`](crate::store::MemoryStore::update_data).

use crate::store::{SemanticData, Value};
use crate::types::{LinkDescriptor, PageIdentity, TypeResult};

/// Semantic data of one page render
#[derive(Debug, Clone)]
pub struct PageOutput {
    page: PageIdentity,
    working: SemanticData,
    committed: Option<SemanticData>,
}

impl PageOutput {
    pub fn new(page: PageIdentity) -> Self {
        let page = page.page();
        Self {
            working: SemanticData::new(page.clone()),
            page,
            committed: None,
        }
    }

    pub fn page(&self) -> &PageIdentity {
        &self.page
    }

    /// Data accumulated so far, committed or not
    pub fn semantic_data(&self) -> &SemanticData {
        &self.working
    }

    fn semantic_data_mut(&mut self) -> &mut SemanticData {
        &mut self.working
    }

    /// Snapshot the accumulated data as this render's output
    pub fn commit(&mut self) {
        self.committed = Some(self.working.clone());
    }

    /// Data of the last commit
    pub fn committed(&self) -> Option<&SemanticData> {
        self.committed.as_ref()
    }

    pub fn is_committed(&self) -> bool {
        self.committed.is_some()
    }
}

/// Writes language-link facts into a page's output
pub struct LanguageLinkAnnotator<'a> {
    output: &'a mut PageOutput,
}

impl<'a> LanguageLinkAnnotator<'a> {
    pub fn new(output: &'a mut PageOutput) -> Self {
        Self { output }
    }

    /// Record `descriptor` on the page and commit the page's data
    ///
    /// The link becomes a container subobject holding the language and the
    /// target reference. Annotating the same language twice replaces the
    /// earlier container.
    pub fn add_annotation_for_link(&mut self, descriptor: &LinkDescriptor) -> TypeResult<()> {
        let mut container =
            SemanticData::new_container(self.output.page(), &descriptor.container_id())?;

        container.add_property_value(
            descriptor.kind.language_property(),
            Value::text(descriptor.language.as_str()),
        );
        container.add_property_value(
            descriptor.kind.reference_property(),
            Value::PageRef(descriptor.target.clone()),
        );

        log::debug!(
            "Annotating {} with {} as {}",
            self.output.page(),
            descriptor,
            container.subject()
        );

        self.output
            .semantic_data_mut()
            .add_subobject(descriptor.kind.container_property(), container);
        self.output.commit();
        Ok(())
    }
}
