//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};
use tokio::sync::oneshot;

use crate::domain::entities::{DigestResult, Keywords};
use crate::domain::ports::{ArticleSource, KeyValueStore, SettingsRepository};
use crate::error::{FetchError, PersistenceError, SourceError};

// ============================================================================
// Scripted Article Source
// ============================================================================

enum Step {
    Respond(DigestResult),
    RespondAfter(oneshot::Receiver<()>, DigestResult),
    Fail(u16),
}

/// Answers fetches from a script, one step per call.
///
/// Once the script runs out every fetch returns an empty result.
#[derive(Default)]
pub struct MockArticleSource {
    script: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl MockArticleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_respond(self, result: DigestResult) -> Self {
        self.push(Step::Respond(result))
    }

    /// Respond once `gate` fires (or its sender is dropped)
    pub fn then_respond_after(self, gate: oneshot::Receiver<()>, result: DigestResult) -> Self {
        self.push(Step::RespondAfter(gate, result))
    }

    /// Fail with an HTTP status error
    pub fn then_fail(self, status: u16) -> Self {
        self.push(Step::Fail(status))
    }

    /// Number of fetches started so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(self, step: Step) -> Self {
        self.script.lock().unwrap().push_back(step);
        self
    }
}

#[async_trait]
impl ArticleSource for MockArticleSource {
    async fn fetch(&self) -> Result<DigestResult, SourceError> {
        let step = self.script.lock().unwrap().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);

        match step {
            Some(Step::Respond(result)) => Ok(result),
            Some(Step::RespondAfter(gate, result)) => {
                let _ = gate.await;
                Ok(result)
            }
            Some(Step::Fail(status)) => Err(FetchError::Status {
                status,
                message: "scripted failure".to_string(),
            }
            .into()),
            None => Ok(DigestResult::empty()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

// ============================================================================
// Failing Key-Value Store
// ============================================================================

/// Every operation fails with an I/O error
pub struct FailingKeyValueStore;

impl FailingKeyValueStore {
    fn error() -> PersistenceError {
        io::Error::new(io::ErrorKind::PermissionDenied, "storage unavailable").into()
    }
}

impl KeyValueStore for FailingKeyValueStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Err(Self::error())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
        Err(Self::error())
    }

    fn remove(&self, _key: &str) -> Result<(), PersistenceError> {
        Err(Self::error())
    }
}

// ============================================================================
// In-Memory Settings Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySettingsRepository {
    keywords: RwLock<Vec<String>>,
    fail: bool,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the remote keyword list
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: RwLock::new(keywords.into_iter().map(Into::into).collect()),
            fail: false,
        }
    }

    /// Every call fails as if the backend were unreachable
    pub fn failing() -> Self {
        Self {
            keywords: RwLock::default(),
            fail: true,
        }
    }

    pub fn stored(&self) -> Vec<String> {
        self.keywords.read().unwrap().clone()
    }

    fn check(&self) -> Result<(), SourceError> {
        if self.fail {
            return Err(FetchError::Database("connection refused".to_string()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn load_keywords(&self) -> Result<Vec<String>, SourceError> {
        self.check()?;
        Ok(self.stored())
    }

    async fn save_keywords(&self, keywords: &Keywords) -> Result<(), SourceError> {
        self.check()?;
        *self.keywords.write().unwrap() = keywords.as_slice().to_vec();
        Ok(())
    }
}
