//! Document-store collaborator — generic CRUD by collection name and
//! document id.
//!
//! The core pipeline never writes here; only the bulk-import workflow and
//! the auth provider do. Two implementations: [`HttpDocumentStore`] for a
//! hosted REST document API, and [`MemoryStore`] for tests and dry runs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use hyper::Method;
use serde_json::Value;

use crate::client::{HttpClient, Payload};
use crate::SourceError;

/// One stored document: an opaque JSON object addressed by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

/// Generic key-value CRUD over named collections (`cars`, `users`).
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    /// Insert a document, returning its assigned id.
    async fn create(&self, collection: &str, data: Value) -> Result<String, SourceError>;
    async fn read_all(&self, collection: &str) -> Result<Vec<Document>, SourceError>;
    /// Merge the top-level fields of `patch` into an existing document.
    async fn update(&self, collection: &str, id: &str, patch: Value) -> Result<(), SourceError>;
    async fn delete(&self, collection: &str, id: &str) -> Result<(), SourceError>;
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// In-memory document store for tests and offline runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .expect("memory store lock poisoned")
            .get(collection)
            .map_or(0, Vec::len)
    }
}

impl DocumentStore for MemoryStore {
    async fn create(&self, collection: &str, data: Value) -> Result<String, SourceError> {
        let id = format!("doc-{}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let mut collections = self.collections.lock().expect("memory store lock poisoned");
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                data,
            });
        Ok(id)
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<Document>, SourceError> {
        let collections = self.collections.lock().expect("memory store lock poisoned");
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn update(&self, collection: &str, id: &str, patch: Value) -> Result<(), SourceError> {
        let mut collections = self.collections.lock().expect("memory store lock poisoned");
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
            .ok_or_else(|| SourceError::Store(format!("no document {collection}/{id}")))?;
        merge_fields(&mut doc.data, patch);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), SourceError> {
        let mut collections = self.collections.lock().expect("memory store lock poisoned");
        if let Some(docs) = collections.get_mut(collection) {
            docs.retain(|d| d.id != id);
        }
        Ok(())
    }
}

/// Overwrite only the top-level fields present in `patch`.
fn merge_fields(data: &mut Value, patch: Value) {
    if let (Value::Object(target), Value::Object(fields)) = (data, patch) {
        for (key, value) in fields {
            target.insert(key, value);
        }
    }
}

// ---------------------------------------------------------------------------
// Hosted store
// ---------------------------------------------------------------------------

/// REST document API client: `POST /{collection}`, `GET /{collection}`,
/// `PATCH /{collection}/{id}`, `DELETE /{collection}/{id}`.
#[derive(Clone)]
pub struct HttpDocumentStore {
    http: HttpClient,
    base_url: String,
}

impl HttpDocumentStore {
    pub fn new(base_url: String) -> Self {
        Self {
            http: HttpClient::new(),
            base_url,
        }
    }

    fn url(&self, collection: &str, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", self.base_url, collection, id),
            None => format!("{}/{}", self.base_url, collection),
        }
    }
}

impl DocumentStore for HttpDocumentStore {
    async fn create(&self, collection: &str, data: Value) -> Result<String, SourceError> {
        let payload = self
            .http
            .send(Method::POST, &self.url(collection, None), &[], Some(&data))
            .await?;
        match payload {
            Payload::Json(value) => value
                .pointer("/id")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or_else(|| {
                    SourceError::Store(format!("create response for {collection} carried no id"))
                }),
            Payload::Text(_) => Err(SourceError::Store(format!(
                "create response for {collection} was not JSON"
            ))),
        }
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<Document>, SourceError> {
        let payload = self.http.get(&self.url(collection, None), &[]).await?;
        let Payload::Json(Value::Array(items)) = payload else {
            return Err(SourceError::Store(format!(
                "listing {collection} did not return a JSON array"
            )));
        };
        Ok(items.into_iter().filter_map(document_from_item).collect())
    }

    async fn update(&self, collection: &str, id: &str, patch: Value) -> Result<(), SourceError> {
        self.http
            .send(
                Method::PATCH,
                &self.url(collection, Some(id)),
                &[],
                Some(&patch),
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), SourceError> {
        self.http
            .send(Method::DELETE, &self.url(collection, Some(id)), &[], None)
            .await?;
        Ok(())
    }
}

/// Split a listed item into its id and remaining fields. Items without a
/// string id are dropped rather than failing the whole listing.
fn document_from_item(item: Value) -> Option<Document> {
    let Value::Object(mut fields) = item else {
        return None;
    };
    let id = fields.get("id")?.as_str()?.to_string();
    fields.remove("id");
    Some(Document {
        id,
        data: Value::Object(fields),
    })
}
