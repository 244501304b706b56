//! Generation request value object

use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::HashSet;

/// Minimum number of candidate countries per request.
pub const MIN_COUNTRIES: usize = 3;

/// Maximum number of candidate countries per request.
pub const MAX_COUNTRIES: usize = 5;

/// A category plus candidate countries for one quiz (Value Object)
///
/// Category and country names are trimmed. Countries keep the caller's order
/// and are distinct (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    category: String,
    countries: Vec<String>,
}

impl GenerationRequest {
    /// Validate and build a request.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRequest`] when the category is blank, the
    /// country count is outside `MIN_COUNTRIES..=MAX_COUNTRIES`, or a country
    /// name is blank or repeated.
    pub fn try_new<I, S>(category: impl Into<String>, countries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(DomainError::InvalidRequest(
                "category must not be empty".to_string(),
            ));
        }

        let countries: Vec<String> = countries
            .into_iter()
            .map(|c| c.into().trim().to_string())
            .collect();

        if !(MIN_COUNTRIES..=MAX_COUNTRIES).contains(&countries.len()) {
            return Err(DomainError::InvalidRequest(format!(
                "expected between {} and {} countries, got {}",
                MIN_COUNTRIES,
                MAX_COUNTRIES,
                countries.len()
            )));
        }

        let mut seen = HashSet::new();
        for country in &countries {
            if country.is_empty() {
                return Err(DomainError::InvalidRequest(
                    "country names must not be empty".to_string(),
                ));
            }
            if !seen.insert(country.to_lowercase()) {
                return Err(DomainError::InvalidRequest(format!(
                    "duplicate country: {}",
                    country
                )));
            }
        }

        Ok(Self {
            category,
            countries,
        })
    }

    /// Get the quiz category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the candidate countries in caller order
    pub fn countries(&self) -> &[String] {
        &self.countries
    }
}
