// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Value types shared by the store, cache and lookup layers

pub mod descriptor;
pub mod error;
pub mod language;
pub mod page;
pub mod property;

pub use descriptor::{LinkDescriptor, LinkKind, TargetLinkMap};
pub use error::{TypeError, TypeResult};
pub use language::LanguageCode;
pub use page::{Namespace, PageIdentity};
pub use property::{Property, PropertyType};
