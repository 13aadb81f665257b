// ABOUTME: Tag catalog service composing tag lookup and question counts
// ABOUTME: Translates storage outcomes into typed lookup and aggregation errors

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{AggregationError, StorageError, StorageResult, TagError};
use crate::question_counts::QuestionCountSource;
use crate::repository::TagRepository;
use crate::types::{Tag, TagCount, TagCountMap};

pub struct TagCatalogService {
    repository: Arc<dyn TagRepository>,
    question_counts: Arc<dyn QuestionCountSource>,
    query_timeout: Option<Duration>,
}

impl TagCatalogService {
    pub fn new(
        repository: Arc<dyn TagRepository>,
        question_counts: Arc<dyn QuestionCountSource>,
    ) -> Self {
        Self {
            repository,
            question_counts,
            query_timeout: None,
        }
    }

    /// Bound every storage call by `timeout`. A zero duration disables the bound.
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    async fn bounded<T>(&self, query: impl Future<Output = StorageResult<T>>) -> StorageResult<T> {
        match self.query_timeout {
            Some(limit) => tokio::time::timeout(limit, query)
                .await
                .map_err(|_| StorageError::Timeout(limit))?,
            None => query.await,
        }
    }

    /// Counts questions per referenced tag.
    ///
    /// Fails with `AggregationError::Malformed` if the count source reports a
    /// duplicate name, a negative count, or a tag that was never asked for.
    pub async fn get_tag_count_map(&self) -> Result<TagCountMap, AggregationError> {
        let names = self.bounded(self.repository.list_names()).await?;
        if names.is_empty() {
            return Ok(TagCountMap::new());
        }

        let rows = self
            .bounded(self.question_counts.count_questions(&names))
            .await?;

        let requested: HashSet<&str> = names.iter().map(String::as_str).collect();
        let mut map = TagCountMap::new();

        for (name, qcnt) in rows {
            if !requested.contains(name.as_str()) {
                return Err(AggregationError::Malformed(format!(
                    "count reported for unknown tag \"{}\"",
                    name
                )));
            }
            let qcnt = u64::try_from(qcnt).map_err(|_| {
                AggregationError::Malformed(format!(
                    "negative question count {} for tag \"{}\"",
                    qcnt, name
                ))
            })?;
            map.try_insert(TagCount { name, qcnt }).map_err(|dup| {
                AggregationError::Malformed(format!("duplicate tag \"{}\"", dup.name))
            })?;
        }

        debug!("Built tag count map with {} entries", map.len());
        Ok(map)
    }

    pub async fn get_tag_by_name(&self, name: &str) -> Result<Tag, TagError> {
        if name.is_empty() {
            return Err(TagError::InvalidInput);
        }

        let found = self
            .bounded(self.repository.find_by_name(name))
            .await
            .map_err(|e| {
                warn!("Tag lookup for {:?} failed: {}", name, e);
                TagError::from(e)
            })?;

        match found {
            None => Err(TagError::NotFound),
            // A stored record without a name is corrupt, not absent
            Some(tag) if tag.name.is_empty() => {
                warn!("Tag record for {:?} has an empty name", name);
                Err(TagError::Lookup(format!(
                    "tag record for \"{}\" has an empty name",
                    name
                )))
            }
            Some(tag) => Ok(tag),
        }
    }
}
