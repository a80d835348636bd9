//! Cached access to the settings records.
//!
//! [`SettingsService::load`] fills the cache at startup and
//! [`SettingsService::refresh`] reloads it on demand. Reads never touch the
//! store; writes go to the store first and then to the cache.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use summit_core::error::CoreError;
use summit_db::models::setting::{
    HeaderSettings, LandingPageSettings, SettingsRecord, SummitHomeContent, ViewSettings,
    VotingSettings,
};
use summit_db::store::Store;
use tokio::sync::{Mutex, RwLock};

use crate::error::AppResult;

pub struct SettingsService {
    store: Arc<dyn Store>,
    /// Normalized documents keyed by [`SettingsRecord::KEY`].
    cache: RwLock<HashMap<&'static str, Value>>,
    /// Serializes read-merge-write cycles.
    write_lock: Mutex<()>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            cache: RwLock::new(HashMap::new()),
            write_lock: Mutex::new(()),
        }
    }

    /// Load every record from the store into the cache.
    pub async fn load(&self) -> AppResult<()> {
        let mut loaded = HashMap::new();
        self.load_record::<VotingSettings>(&mut loaded).await?;
        self.load_record::<HeaderSettings>(&mut loaded).await?;
        self.load_record::<ViewSettings>(&mut loaded).await?;
        self.load_record::<LandingPageSettings>(&mut loaded).await?;
        self.load_record::<SummitHomeContent>(&mut loaded).await?;

        *self.cache.write().await = loaded;
        tracing::debug!("Settings cache loaded");
        Ok(())
    }

    /// Discard the cache and load again.
    pub async fn refresh(&self) -> AppResult<()> {
        self.load().await?;
        tracing::info!("Settings cache refreshed");
        Ok(())
    }

    async fn load_record<T: SettingsRecord>(
        &self,
        into: &mut HashMap<&'static str, Value>,
    ) -> AppResult<()> {
        let record = match self.store.get_setting(T::KEY).await? {
            Some(doc) => match serde_json::from_value::<T>(doc) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(key = T::KEY, error = %e, "Stored settings unreadable, using defaults");
                    T::default()
                }
            },
            None => T::default(),
        };
        into.insert(T::KEY, to_document(&record)?);
        Ok(())
    }

    /// Current value of a record; defaults when never loaded or stored.
    pub async fn get<T: SettingsRecord>(&self) -> T {
        let cache = self.cache.read().await;
        cache
            .get(T::KEY)
            .and_then(|doc| serde_json::from_value(doc.clone()).ok())
            .unwrap_or_default()
    }

    /// Apply a partial update.
    ///
    /// Top-level keys of `patch` replace the current values; keys the record
    /// does not have are rejected. The merged record must pass
    /// [`SettingsRecord::validate`] before anything is written.
    pub async fn update<T: SettingsRecord>(&self, patch: &Value) -> AppResult<T> {
        let Value::Object(patch) = patch else {
            return Err(CoreError::Validation("Settings update must be a JSON object".into()).into());
        };

        let _guard = self.write_lock.lock().await;

        let current = to_document(&self.get::<T>().await)?;
        let merged = merge(current, patch)?;
        let next: T = serde_json::from_value(merged)
            .map_err(|e| CoreError::Validation(format!("Invalid {} settings: {e}", T::KEY)))?;
        next.validate()?;

        let doc = to_document(&next)?;
        self.store.put_setting(T::KEY, &doc).await?;
        self.cache.write().await.insert(T::KEY, doc);

        tracing::info!(key = T::KEY, fields = patch.len(), "Settings updated");
        Ok(next)
    }
}

fn to_document<T: SettingsRecord>(record: &T) -> AppResult<Value> {
    serde_json::to_value(record)
        .map_err(|e| CoreError::Internal(format!("Failed to encode {} settings: {e}", T::KEY)).into())
}

fn merge(current: Value, patch: &Map<String, Value>) -> Result<Value, CoreError> {
    let Value::Object(mut doc) = current else {
        return Err(CoreError::Internal("Settings document is not an object".into()));
    };
    for (key, value) in patch {
        match doc.get_mut(key) {
            Some(slot) => *slot = value.clone(),
            None => {
                return Err(CoreError::Validation(format!("Unknown settings field '{key}'")));
            }
        }
    }
    Ok(Value::Object(doc))
}
