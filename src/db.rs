// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::config;
use crate::error::{ParseError, StoreError};

pub const TRANSACTIONS_KEY: &str = "finance-transactions";
pub const META_KEY: &str = "finance-meta";
pub const HABITS_KEY: &str = "finance-habits";

pub fn db_path() -> Result<PathBuf> {
    let data_dir = config::data_dir()?;
    fs::create_dir_all(&data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("finpilot.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    -- one self-contained JSON document per key
    CREATE TABLE IF NOT EXISTS storage(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )?;
    Ok(())
}

pub fn get_raw(conn: &Connection, key: &str) -> Result<Option<String>, StoreError> {
    let raw = conn
        .query_row(
            "SELECT value FROM storage WHERE key=?1",
            params![key],
            |r| r.get::<_, String>(0),
        )
        .optional()?;
    Ok(raw)
}

pub fn set_raw(conn: &Connection, key: &str, value: &str) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO storage(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

/// Reads and decodes the document stored under `key`. A missing key is
/// `Ok(None)`; a document that does not decode is `StoreError::Parse`.
pub fn load_doc<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>, StoreError> {
    let Some(raw) = get_raw(conn, key)? else {
        return Ok(None);
    };
    let doc = serde_json::from_str(&raw).map_err(|source| ParseError {
        key: key.to_string(),
        source,
    })?;
    Ok(Some(doc))
}

pub fn save_doc<T: Serialize + ?Sized>(
    conn: &Connection,
    key: &str,
    doc: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(doc).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    set_raw(conn, key, &raw)?;
    debug!(key, bytes = raw.len(), "document saved");
    Ok(())
}
