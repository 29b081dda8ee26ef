//! Fired-alert input model.
//!
//! These are the shapes the evaluation engine hands to the translation
//! pipeline: the trigger that fired, the alert event with its tags, and the
//! ordered condition-evaluation sets that caused it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::eval::EvalSet;

/// The named rule conditions are attached to.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Trigger {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single tag entry. The value may be absent.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagEntry {
    pub key: String,
    pub value: Option<String>,
}

/// Ordered multimap of event tags.
///
/// A key may appear more than once; entries keep insertion order.
///
/// # Examples
///
/// ```
/// use alertwire::TagMultimap;
///
/// let mut tags = TagMultimap::new();
/// tags.insert("display_name", "host-1");
/// tags.insert("env", "prod");
/// tags.insert("env", "staging");
///
/// assert_eq!(tags.first("env"), Some(Some("prod")));
/// assert_eq!(tags.get_all("env").count(), 2);
/// assert_eq!(tags.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagMultimap(Vec<TagEntry>);

impl TagMultimap {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a tag with a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert_entry(key, Some(value.into()));
    }

    /// Appends a tag whose value may be absent.
    pub fn insert_entry(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.push(TagEntry {
            key: key.into(),
            value,
        });
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &TagEntry> {
        self.0.iter()
    }

    /// Values stored under `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = Option<&'a str>> + 'a {
        self.0
            .iter()
            .filter(move |entry| entry.key == key)
            .map(|entry| entry.value.as_deref())
    }

    /// First value stored under `key`.
    ///
    /// `None` means the key is absent; `Some(None)` means the key is present
    /// with no value.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<Option<&str>> {
        self.0
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_deref())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|entry| entry.key == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagMultimap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = Self::new();
        for (key, value) in iter {
            tags.insert(key, value);
        }
        tags
    }
}

/// An incoming event matched by an event condition.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedEvent {
    pub id: String,
    pub data_id: String,
    /// Creation time, epoch milliseconds.
    pub ctime: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub tags: TagMultimap,
}

impl MatchedEvent {
    /// Creates an event with a random id.
    #[must_use]
    pub fn new(data_id: impl Into<String>, ctime: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            data_id: data_id.into(),
            ctime,
            text: None,
            tags: TagMultimap::new(),
        }
    }

    #[must_use]
    pub fn with_tags(mut self, tags: TagMultimap) -> Self {
        self.tags = tags;
        self
    }
}

/// The alert event produced when a trigger fires.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub tenant_id: String,
    pub ctime: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
    #[serde(default)]
    pub tags: TagMultimap,
    /// Ordered evaluation sets that caused the trigger to fire.
    #[serde(default)]
    pub eval_sets: Vec<EvalSet>,
}

impl Alert {
    /// Creates an alert for `trigger` with a random id.
    #[must_use]
    pub fn new(tenant_id: impl Into<String>, trigger: Trigger, ctime: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id: tenant_id.into(),
            ctime,
            trigger: Some(trigger),
            tags: TagMultimap::new(),
            eval_sets: Vec::new(),
        }
    }
}

/// Action request handed over by the evaluation engine for one fired alert.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiredAlert {
    pub tenant_id: String,
    pub event_id: String,
    /// Creation time of the action, epoch milliseconds.
    pub ctime: i64,
    pub event: Alert,
}

impl FiredAlert {
    /// Wraps an alert, taking tenant, id and creation time from it.
    #[must_use]
    pub fn from_alert(event: Alert) -> Self {
        Self {
            tenant_id: event.tenant_id.clone(),
            event_id: event.id.clone(),
            ctime: event.ctime,
            event,
        }
    }
}
