// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for cache construction

use thiserror::Error;

/// Errors raised while configuring or opening a cache backend
///
/// Cache reads and writes themselves never fail: a backend that cannot serve
/// a request reports a miss or drops the write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Invalid cache configuration: {0}")]
    InvalidConfig(String),

    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Cache serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

#[cfg(feature = "sled-backend")]
impl From<sled::Error> for CacheError {
    fn from(err: sled::Error) -> Self {
        CacheError::Backend(err.to_string())
    }
}

#[cfg(feature = "sled-backend")]
impl From<bincode::Error> for CacheError {
    fn from(err: bincode::Error) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

pub type CacheResult<T> = Result<T, CacheError>;
