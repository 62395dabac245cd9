//! Key-value access to the ledger: get, put and range-scan by key.
//!
//! Records live in persistent storage under `(STATE, key)`. Soroban storage
//! cannot be iterated, so every kind also keeps a sorted index of its keys
//! under `(INDEX, kind)`; range scans walk those indexes.

use crate::types::{LedgerEntry, LedgerRecord, RecordKind};
use soroban_sdk::{symbol_short, Env, String, Symbol, Vec};

const STATE: Symbol = symbol_short!("STATE");
const INDEX: Symbol = symbol_short!("INDEX");

/// TTL constants for persistent storage (in ledgers)
const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

fn state_key(key: &String) -> (Symbol, String) {
    (STATE, key.clone())
}

fn index_key(kind: RecordKind) -> (Symbol, RecordKind) {
    (INDEX, kind)
}

pub fn get_state(env: &Env, key: &String) -> Option<LedgerRecord> {
    env.storage().persistent().get(&state_key(key))
}

pub fn has_state(env: &Env, key: &String) -> bool {
    env.storage().persistent().has(&state_key(key))
}

/// Writes `record` under its own key, indexing the key on first write.
pub fn put_state(env: &Env, record: &LedgerRecord) {
    let key = record.key();
    let storage_key = state_key(&key);
    let is_new = !env.storage().persistent().has(&storage_key);

    env.storage().persistent().set(&storage_key, record);
    env.storage()
        .persistent()
        .extend_ttl(&storage_key, TTL_THRESHOLD, TTL_EXTEND_TO);

    if is_new {
        index_insert(env, record.kind(), key);
    }
}

/// Sorted keys of one kind.
pub fn keys_of_kind(env: &Env, kind: RecordKind) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&index_key(kind))
        .unwrap_or(Vec::new(env))
}

fn index_insert(env: &Env, kind: RecordKind, key: String) {
    let mut keys = keys_of_kind(env, kind);
    let mut pos = keys.len();
    for (i, existing) in keys.iter().enumerate() {
        if key < existing {
            pos = i as u32;
            break;
        }
    }
    keys.insert(pos, key);

    let storage_key = index_key(kind);
    env.storage().persistent().set(&storage_key, &keys);
    env.storage()
        .persistent()
        .extend_ttl(&storage_key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// All entries of one kind in ascending key order.
pub fn state_by_kind(env: &Env, kind: RecordKind) -> Vec<LedgerEntry> {
    let mut entries = Vec::new(env);
    for key in keys_of_kind(env, kind).iter() {
        if let Some(record) = get_state(env, &key) {
            entries.push_back(LedgerEntry { key, record });
        }
    }
    entries
}

/// All entries with `start <= key < end`, ascending.
///
/// An empty `start` or `end` leaves that side of the range open, so
/// `state_by_range("", "")` returns the whole ledger.
pub fn state_by_range(env: &Env, start: &String, end: &String) -> Vec<LedgerEntry> {
    let mut entries = Vec::new(env);
    for kind in RecordKind::ALL {
        for key in keys_of_kind(env, kind).iter() {
            if start.len() > 0 && key < *start {
                continue;
            }
            if end.len() > 0 && key >= *end {
                break;
            }
            if let Some(record) = get_state(env, &key) {
                entries.push_back(LedgerEntry { key, record });
            }
        }
    }
    entries
}
