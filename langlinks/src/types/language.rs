// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Language codes

use super::error::{TypeError, TypeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Short language tag such as `en` or `zh-hans`
///
/// Only emptiness is checked; the store decides which codes are legal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: &str) -> TypeResult<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Err(TypeError::EmptyLanguageCode);
        }
        Ok(Self(code.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_is_case_insensitive() {
        assert_eq!(LanguageCode::new(" EN ").unwrap().as_str(), "en");
        assert_eq!(
            LanguageCode::new("zh-Hans").unwrap(),
            "zh-hans".parse::<LanguageCode>().unwrap()
        );
    }

    #[test]
    fn test_empty_language_code_rejected() {
        assert_eq!(LanguageCode::new(""), Err(TypeError::EmptyLanguageCode));
        assert!(serde_json::from_str::<LanguageCode>("\"  \"").is_err());
    }
}
