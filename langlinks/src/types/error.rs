// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for value construction

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Page title must not be empty")]
    EmptyTitle,

    #[error("Language code must not be empty")]
    EmptyLanguageCode,

    #[error("Invalid page: {0}")]
    InvalidPage(String),
}

pub type TypeResult<T> = Result<T, TypeError>;
