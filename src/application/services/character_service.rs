//! Character aggregation: raw records to fully resolved characters.

use std::sync::Arc;

use super::age_service::AgeEstimator;
use super::reference_resolver::ReferenceResolver;
use super::request_client::RequestClient;
use crate::domain::entities::{Character, RawCharacter};
use crate::domain::error::{ApiError, ApiResult};
use futures::future::join_all;
use serde_json::Value;
use tracing::warn;

/// Maps raw character records into [`Character`]s.
///
/// Each record fans out into seven independent lookups (three single references,
/// three reference lists and the age estimate), and a whole page fans out across all
/// of its records at once.
pub struct CharacterAggregator {
    resolver: ReferenceResolver,
    age_estimator: AgeEstimator,
}

impl CharacterAggregator {
    pub fn new(resolver: ReferenceResolver, age_estimator: AgeEstimator) -> Self {
        Self {
            resolver,
            age_estimator,
        }
    }

    /// Wires a resolver and an age estimator onto one shared request client.
    pub fn from_client(client: Arc<RequestClient>, age_api_url: impl Into<String>) -> Self {
        Self::new(
            ReferenceResolver::new(client.clone()),
            AgeEstimator::new(client, age_api_url),
        )
    }

    /// Builds one resolved character from a raw record.
    ///
    /// Completes only after every lookup has settled; a partially resolved character
    /// is never returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ElementParse`] if the record (or a referenced entity) does
    /// not match the expected schema. Propagates network failures.
    pub async fn to_character(&self, raw: &Value) -> ApiResult<Character> {
        let record =
            RawCharacter::from_value(raw).map_err(|e| ApiError::element_parse(raw.clone(), e))?;

        let (father, mother, spouse, allegiances, books, pov_books, age) = tokio::join!(
            self.resolver.resolve_name(&record.father),
            self.resolver.resolve_name(&record.mother),
            self.resolver.resolve_name(&record.spouse),
            self.resolver.resolve_names(&record.allegiances),
            self.resolver.resolve_names(&record.books),
            self.resolver.resolve_names(&record.pov_books),
            self.age_estimator.estimate_age(&record.name),
        );

        Ok(Character {
            father: father?,
            mother: mother?,
            spouse: spouse?,
            allegiances: allegiances?,
            books: books?,
            pov_books: pov_books?,
            age: age?,
            name: record.name,
            gender: record.gender,
            culture: record.culture,
            born: record.born,
            died: record.died,
            titles: record.titles,
            aliases: record.aliases,
            tv_series: record.tv_series,
            played_by: record.played_by,
        })
    }

    /// Builds resolved characters for every record of a page body.
    ///
    /// All records are aggregated concurrently and independently. Records failing
    /// with [`ApiError::ElementParse`] are logged and dropped; the survivors keep
    /// their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MalformedResponse`] carrying `raw_list` if it is not a JSON
    /// array. Any non-recoverable element failure (e.g. a network error) is returned
    /// once all siblings have settled.
    pub async fn to_characters(&self, raw_list: &Value) -> ApiResult<Vec<Character>> {
        let Some(records) = raw_list.as_array() else {
            return Err(ApiError::MalformedResponse {
                value: raw_list.clone(),
            });
        };

        let outcomes = join_all(records.iter().map(|raw| self.to_character(raw))).await;

        let mut characters = Vec::with_capacity(outcomes.len());
        let mut fatal = None;

        for (raw, outcome) in records.iter().zip(outcomes) {
            match outcome {
                Ok(character) => characters.push(character),
                Err(e) if e.is_recoverable() => {
                    warn!("Couldn't parse character object: {} ({})", raw, e);
                }
                Err(e) => {
                    if fatal.is_none() {
                        fatal = Some(e);
                    }
                }
            }
        }

        match fatal {
            Some(e) => Err(e),
            None => Ok(characters),
        }
    }
}
