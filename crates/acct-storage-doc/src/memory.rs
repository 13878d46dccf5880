//! In-memory document collection.
//!
//! Backs the conformance tests and small single-process deployments.
//! Documents are held as serialized JSON values behind a `parking_lot`
//! lock, so filter and update semantics match what a real document
//! backend would apply, unique indexes included.

use std::collections::BTreeSet;
use std::marker::PhantomData;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::collection::{
    DocResult, DocumentCollection, DocumentError, Filter, FindOptions, Update, UpdateOp,
};

/// Thread-safe in-memory implementation of [`DocumentCollection`].
#[derive(Debug, Default)]
pub struct MemoryCollection<T> {
    documents: RwLock<Vec<Value>>,
    unique_fields: RwLock<BTreeSet<String>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MemoryCollection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            unique_fields: RwLock::new(BTreeSet::new()),
            _marker: PhantomData,
        }
    }

    /// Number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    /// Checks a candidate document against every registered unique
    /// field, ignoring the document at `skip` (the one being replaced
    /// or updated).
    fn check_unique(
        documents: &[Value],
        unique_fields: &BTreeSet<String>,
        candidate: &Value,
        skip: Option<usize>,
    ) -> DocResult<()> {
        for field in unique_fields {
            let Some(value) = candidate.get(field) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            let conflict = documents
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != skip)
                .any(|(_, doc)| doc.get(field) == Some(value));
            if conflict {
                return Err(DocumentError::DuplicateKey {
                    field: field.clone(),
                    value: value_text(value),
                });
            }
        }
        Ok(())
    }
}

/// Renders a JSON value for error messages, unquoting plain strings.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether a document matches a filter.
fn matches(filter: &Filter, document: &Value) -> bool {
    match filter {
        Filter::All => true,
        Filter::Eq(field, value) => document.get(field).unwrap_or(&Value::Null) == value,
        Filter::Ne(field, value) => document.get(field).unwrap_or(&Value::Null) != value,
        Filter::And(parts) => parts.iter().all(|part| matches(part, document)),
    }
}

/// Applies update operations in order against a document.
fn apply(update: &Update, document: &mut Value) {
    for op in update.ops() {
        match op {
            UpdateOp::Set { field, value } => {
                if let Some(object) = document.as_object_mut() {
                    object.insert(field.clone(), value.clone());
                }
            }
            UpdateOp::Push { field, value } => {
                if let Some(array) = array_mut(document, field) {
                    array.push(value.clone());
                }
            }
            UpdateOp::PushEach { field, values } => {
                if let Some(array) = array_mut(document, field) {
                    array.extend(values.iter().cloned());
                }
            }
            UpdateOp::Pull { field, value } => {
                if let Some(array) = array_mut(document, field) {
                    array.retain(|element| element != value);
                }
            }
            UpdateOp::PullAll { field, values } => {
                if let Some(array) = array_mut(document, field) {
                    array.retain(|element| !values.contains(element));
                }
            }
        }
    }
}

/// Mutable access to an array field, creating it when absent.
fn array_mut<'a>(document: &'a mut Value, field: &str) -> Option<&'a mut Vec<Value>> {
    let object = document.as_object_mut()?;
    object
        .entry(field.to_string())
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
}

#[async_trait]
impl<T> DocumentCollection<T> for MemoryCollection<T>
where
    T: Send + Sync + Serialize + DeserializeOwned,
{
    async fn find(&self, filter: &Filter, _options: FindOptions) -> DocResult<Vec<T>> {
        let documents = self.documents.read();
        documents
            .iter()
            .filter(|doc| matches(filter, doc))
            .map(|doc| serde_json::from_value(doc.clone()).map_err(DocumentError::from))
            .collect()
    }

    async fn find_one(&self, filter: &Filter) -> DocResult<Option<T>> {
        let documents = self.documents.read();
        documents
            .iter()
            .find(|doc| matches(filter, doc))
            .map(|doc| serde_json::from_value(doc.clone()).map_err(DocumentError::from))
            .transpose()
    }

    async fn insert_one(&self, document: &T) -> DocResult<()> {
        let value = serde_json::to_value(document)?;
        let mut documents = self.documents.write();
        let unique_fields = self.unique_fields.read();
        Self::check_unique(&documents, &unique_fields, &value, None)?;
        documents.push(value);
        Ok(())
    }

    async fn replace_one(&self, filter: &Filter, document: &T, upsert: bool) -> DocResult<()> {
        let value = serde_json::to_value(document)?;
        let mut documents = self.documents.write();
        let unique_fields = self.unique_fields.read();
        match documents.iter().position(|doc| matches(filter, doc)) {
            Some(index) => {
                Self::check_unique(&documents, &unique_fields, &value, Some(index))?;
                documents[index] = value;
            }
            None if upsert => {
                Self::check_unique(&documents, &unique_fields, &value, None)?;
                documents.push(value);
            }
            None => {}
        }
        Ok(())
    }

    async fn delete_one(&self, filter: &Filter) -> DocResult<u64> {
        let mut documents = self.documents.write();
        match documents.iter().position(|doc| matches(filter, doc)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_one(&self, filter: &Filter, update: &Update) -> DocResult<u64> {
        let mut documents = self.documents.write();
        let unique_fields = self.unique_fields.read();
        let Some(index) = documents.iter().position(|doc| matches(filter, doc)) else {
            return Ok(0);
        };
        let mut updated = documents[index].clone();
        apply(update, &mut updated);
        Self::check_unique(&documents, &unique_fields, &updated, Some(index))?;
        documents[index] = updated;
        Ok(1)
    }

    async fn ensure_unique_index(&self, field: &str) -> DocResult<()> {
        let documents = self.documents.read();
        let mut seen = BTreeSet::new();
        for doc in documents.iter() {
            let Some(value) = doc.get(field) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            if !seen.insert(value.to_string()) {
                return Err(DocumentError::DuplicateKey {
                    field: field.to_string(),
                    value: value_text(value),
                });
            }
        }
        self.unique_fields.write().insert(field.to_string());
        Ok(())
    }
}
