use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A hash map split across independently locked shards.
///
/// Each key lives in exactly one shard, so every per-key operation runs under
/// that shard's lock alone and keys in other shards are never blocked. Guards
/// never escape a method, which keeps callers free to `.await` afterwards.
pub struct ShardedMap<K, V> {
    shards: Box<[RwLock<HashMap<K, V>>]>,
    hasher: RandomState,
}

impl<K, V> ShardedMap<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Creates a map with `shard_count` shards (at least one).
    pub fn new(shard_count: usize) -> Self {
        let shards = (0..shard_count.max(1))
            .map(|_| RwLock::new(HashMap::new()))
            .collect();
        Self {
            shards,
            hasher: RandomState::new(),
        }
    }

    /// Inserts `value` only when `key` is vacant. Returns whether it was inserted.
    pub fn insert_if_absent(&self, key: K, value: V) -> bool {
        let mut shard = self.write(&key);
        if shard.contains_key(&key) {
            return false;
        }
        shard.insert(key, value);
        true
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.read(key).get(key).cloned()
    }

    /// Runs `f` on the entry for `key` while holding its shard's write lock.
    /// Returns `None` without calling `f` when the key is vacant.
    pub fn update<R>(&self, key: &K, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        self.write(key).get_mut(key).map(f)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.write(key).remove(key)
    }

    /// Snapshot of every value. Each shard is read consistently, the map as a
    /// whole is not.
    pub fn values(&self) -> Vec<V> {
        let mut values = Vec::new();
        for shard in self.shards.iter() {
            let shard = shard.read().unwrap_or_else(PoisonError::into_inner);
            values.extend(shard.values().cloned());
        }
        values
    }

    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| shard.read().unwrap_or_else(PoisonError::into_inner).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn shard_for(&self, key: &K) -> &RwLock<HashMap<K, V>> {
        let index = (self.hasher.hash_one(key) % self.shards.len() as u64) as usize;
        &self.shards[index]
    }

    // Shards hold plain values, so a panic mid-write cannot leave a torn
    // entry behind. Poisoning is ignored.
    fn read(&self, key: &K) -> RwLockReadGuard<'_, HashMap<K, V>> {
        self.shard_for(key).read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, key: &K) -> RwLockWriteGuard<'_, HashMap<K, V>> {
        self.shard_for(key).write().unwrap_or_else(PoisonError::into_inner)
    }
}
