// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Cache-then-store resolution of language links
//!
//! [`InterlanguageLinksLookup`] answers four questions about a page:
//! - which language it was last annotated with
//! - which targets its language links reference
//! - which pages, per language, reference a given target
//! - which cache entries to drop when the page is saved again

pub mod links_lookup;

pub use links_lookup::InterlanguageLinksLookup;
