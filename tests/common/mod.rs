// Shared test helpers: a scripted in-memory device

#![allow(dead_code)]

use async_trait::async_trait;
use routerdash::error::TransportError;
use routerdash::models::RawRecord;
use routerdash::transport::{CollectionFetcher, ProcedureInvoker};
use std::collections::HashMap;
use std::sync::Mutex;

/// Device that answers from fixed per-path replies and records every call.
/// Paths without a scripted reply return an empty collection.
#[derive(Default)]
pub struct FakeDevice {
    replies: HashMap<String, Result<Vec<RawRecord>, TransportError>>,
    script_failures: HashMap<String, TransportError>,
    pub fetched: Mutex<Vec<String>>,
    pub invoked: Mutex<Vec<String>>,
}

impl FakeDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, path: &str, records: Vec<RawRecord>) -> Self {
        self.replies.insert(path.to_string(), Ok(records));
        self
    }

    pub fn with_error(mut self, path: &str, error: TransportError) -> Self {
        self.replies.insert(path.to_string(), Err(error));
        self
    }

    pub fn with_script_failure(mut self, name: &str, error: TransportError) -> Self {
        self.script_failures.insert(name.to_string(), error);
        self
    }

    pub fn fetched_paths(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn invoked_names(&self) -> Vec<String> {
        self.invoked.lock().unwrap().clone()
    }
}

#[async_trait]
impl CollectionFetcher for FakeDevice {
    async fn fetch(&self, path: &str) -> Result<Vec<RawRecord>, TransportError> {
        self.fetched.lock().unwrap().push(path.to_string());
        self.replies.get(path).cloned().unwrap_or(Ok(Vec::new()))
    }
}

#[async_trait]
impl ProcedureInvoker for FakeDevice {
    async fn invoke(&self, name: &str) -> Result<(), TransportError> {
        self.invoked.lock().unwrap().push(name.to_string());
        match self.script_failures.get(name) {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

/// Build a record from ordered (key, value) text pairs.
pub fn record(fields: &[(&str, &str)]) -> RawRecord {
    fields.iter().copied().collect()
}

/// A system-resource record in the shape a RouterOS 6.x device returns.
pub fn system_resource() -> RawRecord {
    record(&[
        ("uptime", "63d02:31:30"),
        ("version", "6.49.7 (stable)"),
        ("free-memory", "2097152"),
        ("total-memory", "268435456"),
        ("cpu", "MIPS 1004Kc V2.15"),
        ("cpu-count", "4"),
        ("cpu-frequency", "880"),
        ("cpu-load", "5"),
        ("free-hdd-space", "4194304"),
        ("total-hdd-space", "16777216"),
        ("architecture-name", "mmips"),
        ("board-name", "hEX"),
        ("platform", "MikroTik"),
    ])
}
