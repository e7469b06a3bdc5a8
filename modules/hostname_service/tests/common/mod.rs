//! Common test utilities and mock engine collaborators

#![allow(dead_code)]

use hostname_service::contract::{AccountState, AccountTransaction, AccountType};
use hostname_service::domain::ports::{AccountSubsystem, ConfigStore, DeviceInfo};
use hostname_service::domain::{
    EventPublisher, HostnameEvent, NoOpEventPublisher, Service, Utf8TextSanitizer,
};
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Ordered log of collaborator calls shared between mocks
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

// ===== Config store =====

pub struct MockConfigStore {
    data: RwLock<HashMap<String, Value>>,
    commits: AtomicUsize,
    writes: AtomicUsize,
    fail_commit: AtomicBool,
    journal: Journal,
}

impl MockConfigStore {
    pub fn new(journal: Journal) -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            commits: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
            fail_commit: AtomicBool::new(false),
            journal,
        }
    }

    pub fn with_value(self, key: &str, value: Value) -> Self {
        self.data.write().insert(key.to_string(), value);
        self
    }

    pub fn fail_commits(&self) {
        self.fail_commit.store(true, Ordering::SeqCst);
    }

    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn raw(&self, key: &str) -> Option<Value> {
        self.data.read().get(key).cloned()
    }
}

impl ConfigStore for MockConfigStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.data.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.journal.lock().push(format!("config.set({})", key));
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.data.write().insert(key.to_string(), value);
    }

    fn commit(&self) -> anyhow::Result<()> {
        self.journal.lock().push("config.commit".to_string());
        if self.fail_commit.load(Ordering::SeqCst) {
            anyhow::bail!("disk full");
        }
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ===== Account subsystem =====

pub struct MockAccount {
    state: RwLock<AccountState>,
    account_type: AccountType,
    name: RwLock<String>,
    submitted: Mutex<Vec<AccountTransaction>>,
    sign_in_calls: Mutex<Vec<(bool, String)>>,
    runs: AtomicUsize,
    fail_run: AtomicBool,
    /// Simulates an engine that signs the account out while renaming it
    sign_out_on_update: AtomicBool,
    journal: Journal,
}

impl MockAccount {
    pub fn new(state: AccountState, name: &str, journal: Journal) -> Self {
        Self {
            state: RwLock::new(state),
            account_type: AccountType::Local,
            name: RwLock::new(name.to_string()),
            submitted: Mutex::new(Vec::new()),
            sign_in_calls: Mutex::new(Vec::new()),
            runs: AtomicUsize::new(0),
            fail_run: AtomicBool::new(false),
            sign_out_on_update: AtomicBool::new(false),
            journal,
        }
    }

    pub fn fail_runs(&self) {
        self.fail_run.store(true, Ordering::SeqCst);
    }

    pub fn sign_out_on_update(&self) {
        self.sign_out_on_update.store(true, Ordering::SeqCst);
    }

    pub fn submitted(&self) -> Vec<AccountTransaction> {
        self.submitted.lock().clone()
    }

    pub fn sign_in_calls(&self) -> Vec<(bool, String)> {
        self.sign_in_calls.lock().clone()
    }

    pub fn run_count(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

impl AccountSubsystem for MockAccount {
    fn state(&self) -> AccountState {
        *self.state.read()
    }

    fn account_type(&self) -> AccountType {
        self.account_type.clone()
    }

    fn name(&self) -> String {
        self.name.read().clone()
    }

    fn set_sign_in_state(&self, signed_in: bool, name: &str) {
        self.journal
            .lock()
            .push(format!("account.set_sign_in_state({})", signed_in));
        self.sign_in_calls
            .lock()
            .push((signed_in, name.to_string()));
        *self.name.write() = name.to_string();
        if self.sign_out_on_update.load(Ordering::SeqCst) {
            *self.state.write() = AccountState::SignedOut;
        }
    }

    fn submit_transaction(&self, transaction: AccountTransaction) {
        self.journal
            .lock()
            .push(format!("account.submit({})", transaction.kind()));
        self.submitted.lock().push(transaction);
    }

    fn run_pending_transactions(&self) -> anyhow::Result<()> {
        self.journal.lock().push("account.run".to_string());
        self.runs.fetch_add(1, Ordering::SeqCst);
        if self.fail_run.load(Ordering::SeqCst) {
            anyhow::bail!("account server unreachable");
        }
        Ok(())
    }
}

// ===== Device / events =====

pub struct FixedDevice(pub String);

impl DeviceInfo for FixedDevice {
    fn device_name(&self) -> String {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<HostnameEvent>>,
    fail: AtomicBool,
}

impl RecordingPublisher {
    pub fn failing() -> Self {
        let publisher = Self::default();
        publisher.fail.store(true, Ordering::SeqCst);
        publisher
    }

    pub fn events(&self) -> Vec<HostnameEvent> {
        self.events.lock().clone()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event: HostnameEvent) -> anyhow::Result<()> {
        self.events.lock().push(event);
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("event bus down");
        }
        Ok(())
    }
}

// ===== Fixture =====

pub const DEVICE_NAME: &str = "den-pc";

pub struct Fixture {
    pub service: Service,
    pub config: Arc<MockConfigStore>,
    pub account: Arc<MockAccount>,
    pub events: Arc<RecordingPublisher>,
    pub journal: Journal,
}

impl Fixture {
    pub fn new(state: AccountState) -> Self {
        let journal = journal();
        Self::with_config(state, MockConfigStore::new(journal.clone()), journal)
    }

    pub fn with_config(state: AccountState, config: MockConfigStore, journal: Journal) -> Self {
        let config = Arc::new(config);
        let account = Arc::new(MockAccount::new(state, "AccountName", journal.clone()));
        let events = Arc::new(RecordingPublisher::default());
        let service = Service::new(
            config.clone(),
            Some(account.clone() as Arc<dyn AccountSubsystem>),
            Arc::new(Utf8TextSanitizer),
            Arc::new(FixedDevice(DEVICE_NAME.to_string())),
            events.clone(),
        );
        Self {
            service,
            config,
            account,
            events,
            journal,
        }
    }
}

/// Service with no account subsystem attached
pub fn service_without_account(config: Arc<MockConfigStore>) -> Service {
    Service::new(
        config,
        None,
        Arc::new(Utf8TextSanitizer),
        Arc::new(FixedDevice(DEVICE_NAME.to_string())),
        Arc::new(NoOpEventPublisher),
    )
}
