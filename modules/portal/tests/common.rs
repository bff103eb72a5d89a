//! Shared helpers for the portal integration suites.
#![allow(dead_code)] // not every suite uses every helper

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use portal_store::{KvStore, MemoryStore};

use portal::domain::ports::ConfirmPrompt;

/// Scripted confirmation capability that records how often it was asked.
pub struct StubPrompt {
    pub answer: bool,
    calls: AtomicUsize,
}

impl StubPrompt {
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn times_asked(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ConfirmPrompt for StubPrompt {
    fn confirm(&self, _prompt: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

pub fn memory_store() -> Arc<dyn KvStore> {
    Arc::new(MemoryStore::new())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
