use std::collections::HashMap;

/// Well-known keys in the device store.
pub mod keys {
    pub const LANGUAGE: &str = "language";
    pub const USER_PROFILE: &str = "userProfile";
}

/// Blocking key-value persistence seam.
///
/// Backed by device-local storage in the app shell; `MemoryStore` stands in
/// for it in-process. One active session at a time, so no locking.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()>;
}

/// In-process store used by tests and headless sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
