//! Authors, sources and topics

use crate::consensus::ExpertRoster;
use crate::core::error::DomainError;
use crate::core::ids::{EntityId, SourceId, TopicId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person or organisation that authored a source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Entity {
    pub const MAX_NAME_LEN: usize = 100;

    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name", "must not be empty"));
        }
        if crate::core::string::char_len(name) > Self::MAX_NAME_LEN {
            return Err(DomainError::validation(
                "name",
                format!("must be at most {} characters", Self::MAX_NAME_LEN),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity: {}", self.name)
    }
}

/// A cited document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub authors: Vec<EntityId>,
    pub date_retrieved: DateTime<Utc>,
}

impl Source {
    /// Materialize a draft under a freshly allocated id
    pub fn from_draft(id: SourceId, draft: NewSource, date_retrieved: DateTime<Utc>) -> Self {
        Self {
            id,
            url: draft.url,
            title: draft.title,
            description: draft.description,
            authors: draft.authors,
            date_retrieved,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::core::string::prefix;
        write!(
            f,
            "Source: {} ({})",
            prefix(&self.description, 30),
            prefix(&self.url, 30)
        )
    }
}

/// Source fields supplied by a submitter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSource {
    pub url: String,
    pub title: String,
    pub description: String,
    pub authors: Vec<EntityId>,
}

impl NewSource {
    pub const MAX_URL_LEN: usize = 200;

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_authors(mut self, authors: impl IntoIterator<Item = EntityId>) -> Self {
        self.authors = authors.into_iter().collect();
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if crate::core::string::char_len(&self.url) > Self::MAX_URL_LEN {
            return Err(DomainError::validation(
                "url",
                format!("must be at most {} characters", Self::MAX_URL_LEN),
            ));
        }
        if self.url.trim().is_empty() && self.description.trim().is_empty() {
            return Err(DomainError::validation(
                "source",
                "needs a url or a description",
            ));
        }
        Ok(())
    }
}

/// A subject area; its roster decides who counts as an expert reviewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    #[serde(default)]
    pub experts: ExpertRoster,
}

impl Topic {
    pub fn new(id: TopicId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            experts: ExpertRoster::new(),
        }
    }

    pub fn with_experts(mut self, experts: ExpertRoster) -> Self {
        self.experts = experts;
        self
    }
}
