#![allow(dead_code)]

use async_trait::async_trait;
use peptidehub_gateway::errors::AppError;
use peptidehub_gateway::recovery::RecoveryMailer;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecovery {
    pub email: String,
    pub redirect_to: String,
}

/// Records every recovery call instead of talking to the auth backend.
#[derive(Default)]
pub struct MockMailer {
    sent: Mutex<Vec<SentRecovery>>,
    failing: AtomicBool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent calls fail like an unreachable backend.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentRecovery> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, email: &str) -> usize {
        self.sent().iter().filter(|s| s.email == email).count()
    }
}

#[async_trait]
impl RecoveryMailer for MockMailer {
    async fn send_recovery(&self, email: &str, redirect_to: &str) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Upstream("mock backend down".to_string()));
        }
        self.sent.lock().unwrap().push(SentRecovery {
            email: email.to_string(),
            redirect_to: redirect_to.to_string(),
        });
        Ok(())
    }
}
