use std::path::Path;

use log::info;
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::{parse_json_value, to_json_value};

/// Key-value store of JSON documents backed by sqlite.
pub struct Storage {
    connection: Connection,
}

#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    Json(serde_json::Error),
}

impl From<rusqlite::Error> for StorageError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sqlite(error)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        info!("Open storage {}", path.as_ref().display());
        let connection = Connection::open(path.as_ref())?;
        Self::setup(connection)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let connection = Connection::open_in_memory()?;
        Self::setup(connection)
    }

    fn setup(connection: Connection) -> Result<Self, StorageError> {
        connection.execute_batch(
            "create table if not exists preferences (
                key text primary key,
                value text not null
            );",
        )?;
        Ok(Storage { connection })
    }

    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let mut statement = self
            .connection
            .prepare("select value from preferences where key = ?")?;
        let mut rows = statement.query([key])?;
        let value: Option<Value> = match rows.next()? {
            Some(row) => Some(row.get("value")?),
            None => None,
        };
        match value {
            Some(value) => Ok(Some(parse_json_value(value)?)),
            None => Ok(None),
        }
    }

    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, StorageError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    pub fn set<T: Serialize>(&self, key: &str, value: T) -> Result<(), StorageError> {
        let value = to_json_value(value)?;
        self.connection.execute(
            "insert or replace into preferences (key, value) values (?, ?)",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.connection
            .execute("delete from preferences where key = ?", [key])?;
        Ok(())
    }

    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut statement = self
            .connection
            .prepare("select key from preferences order by key")?;
        let mut rows = statement.query([])?;
        let mut keys = vec![];
        while let Some(row) = rows.next()? {
            keys.push(row.get("key")?);
        }
        Ok(keys)
    }
}
