use rusqlite::OptionalExtension;

use crate::Database;
use crate::error::Result;
use crate::kv::{KeyValueStore, Namespace};

impl KeyValueStore for Database {
    fn put(&self, ns: Namespace, key: &str, value: &str) -> Result<()> {
        self.with_conn(|conn| {
            // Upsert keeps the row, and with it the original insertion seq.
            conn.execute(
                "INSERT INTO entries (namespace, key, value) VALUES (?1, ?2, ?3)
                 ON CONFLICT(namespace, key)
                 DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
                (ns.as_str(), key, value),
            )?;
            Ok(())
        })
    }

    fn insert(&self, ns: Namespace, key: &str, value: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let inserted = conn.execute(
                "INSERT INTO entries (namespace, key, value) VALUES (?1, ?2, ?3)
                 ON CONFLICT(namespace, key) DO NOTHING",
                (ns.as_str(), key, value),
            )?;
            Ok(inserted > 0)
        })
    }

    fn get(&self, ns: Namespace, key: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            let value = conn
                .query_row(
                    "SELECT value FROM entries WHERE namespace = ?1 AND key = ?2",
                    (ns.as_str(), key),
                    |row| row.get(0),
                )
                .optional()?;
            Ok(value)
        })
    }

    fn list(&self, ns: Namespace) -> Result<Vec<(String, String)>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT key, value FROM entries WHERE namespace = ?1 ORDER BY seq",
            )?;
            let rows = stmt
                .query_map([ns.as_str()], |row| Ok((row.get(0)?, row.get(1)?)))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    fn remove(&self, ns: Namespace, key: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let removed = conn.execute(
                "DELETE FROM entries WHERE namespace = ?1 AND key = ?2",
                (ns.as_str(), key),
            )?;
            Ok(removed > 0)
        })
    }
}
