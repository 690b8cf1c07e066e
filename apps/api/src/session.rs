//! In-memory resume sessions keyed by holder id.
//!
//! This is the only shared mutable state in the service. The occupation engine
//! never sees it; handlers copy what they need out before calling the engine.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::coach::profile::ResumeProfile;

#[derive(Debug, Clone, Serialize)]
pub struct ResumeSession {
    pub user_id: Uuid,
    #[serde(skip_serializing)]
    pub resume_text: String,
    pub profile: ResumeProfile,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, ResumeSession>>>,
}

impl SessionStore {
    /// Stores a session, replacing any earlier upload for the same holder.
    pub async fn upsert(&self, session: ResumeSession) {
        self.inner.write().await.insert(session.user_id, session);
    }

    pub async fn get(&self, user_id: Uuid) -> Option<ResumeSession> {
        self.inner.read().await.get(&user_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(user_id: Uuid, text: &str) -> ResumeSession {
        ResumeSession {
            user_id,
            resume_text: text.to_string(),
            profile: ResumeProfile::default(),
            uploaded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_upsert_and_get() {
        let store = SessionStore::default();
        let id = Uuid::new_v4();
        store.upsert(session(id, "first")).await;
        store.upsert(session(id, "second")).await;

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(id).await.unwrap().resume_text, "second");
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let store = SessionStore::default();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let store = SessionStore::default();
        let clone = store.clone();
        let id = Uuid::new_v4();
        clone.upsert(session(id, "shared")).await;
        assert!(store.get(id).await.is_some());
    }
}
