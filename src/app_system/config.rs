use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Runtime knobs for [`InventorySystem`](super::InventorySystem).
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Number of independently locked shards in the product store.
    pub shard_count: usize,
    /// Mailbox size of the supplier directory actor.
    pub supplier_buffer_size: usize,
    /// Deadline for a single supplier lookup. `None` waits indefinitely.
    pub directory_timeout: Option<Duration>,
    /// Preload the sample suppliers and products.
    pub seed_sample_data: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            shard_count: 16,
            supplier_buffer_size: 32,
            directory_timeout: None,
            seed_sample_data: true,
        }
    }
}

impl SystemConfig {
    /// Reads `CATALOG_SHARDS`, `CATALOG_SUPPLIER_BUFFER`,
    /// `CATALOG_DIRECTORY_TIMEOUT_MS` and `CATALOG_SEED` from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SystemConfig::from_env`] with a custom variable source.
    /// Unparseable values fall back to the default and log a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let timeout_ms: Option<u64> = parse_var(&lookup, "CATALOG_DIRECTORY_TIMEOUT_MS");
        Self {
            shard_count: parse_count(&lookup, "CATALOG_SHARDS").unwrap_or(defaults.shard_count),
            supplier_buffer_size: parse_count(&lookup, "CATALOG_SUPPLIER_BUFFER")
                .unwrap_or(defaults.supplier_buffer_size),
            directory_timeout: timeout_ms
                .map(Duration::from_millis)
                .or(defaults.directory_timeout),
            seed_sample_data: parse_var(&lookup, "CATALOG_SEED")
                .unwrap_or(defaults.seed_sample_data),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparseable setting; using default");
            None
        }
    }
}

// Shard and mailbox sizes must be positive; a zero-capacity channel panics.
fn parse_count(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    match parse_var(lookup, key)? {
        0 => {
            warn!(key, "Ignoring zero setting; using default");
            None
        }
        count => Some(count),
    }
}
