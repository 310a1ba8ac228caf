//! Mock SMS provider for development and testing
//!
//! Logs messages instead of sending them and records what it was asked to
//! deliver so tests can inspect it.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use dr_core::services::alert::{DispatchMode, SmsProvider};
use dr_shared::utils::phone::mask_phone_number;

/// A message the mock accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub to: String,
    pub body: String,
}

/// Mock SMS provider
#[derive(Clone)]
pub struct MockSmsProvider {
    message_count: Arc<AtomicU64>,
    simulate_failure: Arc<AtomicBool>,
    failing_numbers: Arc<Mutex<HashSet<String>>>,
    sent: Arc<Mutex<Vec<SentMessage>>>,
    configured: bool,
    mode: DispatchMode,
}

impl MockSmsProvider {
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: Arc::new(AtomicBool::new(false)),
            failing_numbers: Arc::new(Mutex::new(HashSet::new())),
            sent: Arc::new(Mutex::new(Vec::new())),
            configured: true,
            mode: DispatchMode::PerRecipient,
        }
    }

    /// A mock that accepts everyone in one bulk call
    pub fn bulk() -> Self {
        Self {
            mode: DispatchMode::Bulk,
            ..Self::new()
        }
    }

    /// A mock without credentials, skipped by the gateway
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Enable or disable failure simulation for every send
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Fail sends to one canonical number
    pub fn fail_number(&self, number: &str) {
        self.lock_failing().insert(number.to_string());
    }

    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.lock_sent().clone()
    }

    fn lock_sent(&self) -> std::sync::MutexGuard<'_, Vec<SentMessage>> {
        self.sent.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_failing(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        self.failing_numbers.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, to: &str, message: &str) -> Result<String, String> {
        if self.simulate_failure.load(Ordering::SeqCst) || self.lock_failing().contains(to) {
            warn!(
                provider = "mock",
                to = %mask_phone_number(to),
                "Mock SMS provider simulating failure"
            );
            return Err("Simulated SMS sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        self.message_count.fetch_add(1, Ordering::SeqCst);
        self.lock_sent().push(SentMessage {
            to: to.to_string(),
            body: message.to_string(),
        });

        info!(
            provider = "mock",
            to = %mask_phone_number(to),
            message_id = %message_id,
            message_length = message.chars().count(),
            "SMS sent (mock)"
        );
        Ok(message_id)
    }
}

impl Default for MockSmsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsProvider for MockSmsProvider {
    fn provider_name(&self) -> &str {
        "Mock"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn dispatch_mode(&self) -> DispatchMode {
        self.mode
    }

    async fn send_sms(&self, to: &str, message: &str) -> Result<String, String> {
        self.record(to, message)
    }

    async fn send_bulk(&self, numbers: &[String], message: &str) -> Result<String, String> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err("Simulated SMS sending failure".to_string());
        }
        for number in numbers {
            self.record(number, message)?;
        }
        Ok(format!("mock_bulk_{}", Uuid::new_v4()))
    }
}
