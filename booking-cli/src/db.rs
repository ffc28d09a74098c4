pub mod reservations;
pub mod rooms;

use std::{path::Path, sync::Arc};

use redb::{
    Database,
    ReadTransaction,
    ReadableDatabase,
    ReadableTable,
    TableDefinition,
    WriteTransaction,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::{core::room::Room, db::reservations::RoomReservations, prelude::*};

type JsonTable<'a> = TableDefinition<'a, &'static str, &'static [u8]>;

/// Anything stored as JSON under a string key.
pub trait Document: Serialize + DeserializeOwned {
    const TABLE_NAME: &str;

    #[must_use]
    fn table() -> JsonTable<'static> {
        TableDefinition::new(Self::TABLE_NAME)
    }
}

/// Embedded transactional key-value store.
///
/// Write transactions are serialized by the store, so a read-check-write sequence
/// inside [`Db::write`] cannot interleave with another writer.
#[must_use]
#[derive(Clone)]
pub struct Db(Arc<Database>);

impl Db {
    #[instrument(skip_all)]
    pub fn open(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "opening the database…");
        let database = Database::create(path)
            .with_context(|| format!("failed to open `{}`", path.display()))?;
        Self::initialize(database)
    }

    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        let database = Database::builder()
            .create_with_backend(redb::backends::InMemoryBackend::new())
            .context("failed to create the in-memory database")?;
        Self::initialize(database)
    }

    /// Create the tables upfront so that read transactions always find them.
    fn initialize(database: Database) -> Result<Self> {
        let transaction = database.begin_write()?;
        transaction.open_table(RoomReservations::table())?;
        transaction.open_table(Room::table())?;
        transaction.commit().context("failed to initialize the tables")?;
        Ok(Self(Arc::new(database)))
    }

    /// Run the closure on a consistent snapshot.
    pub fn read<T>(&self, f: impl FnOnce(&Reader) -> Result<T>) -> Result<T> {
        let transaction = self.0.begin_read().context("failed to begin a read transaction")?;
        f(&Reader(transaction))
    }

    /// Run the closure in a write transaction and commit only if it succeeds.
    pub fn write<T>(&self, f: impl FnOnce(&Writer) -> Result<T>) -> Result<T> {
        let writer = Writer(self.0.begin_write().context("failed to begin a write transaction")?);
        match f(&writer) {
            Ok(value) => {
                writer.0.commit().context("failed to commit")?;
                Ok(value)
            }
            Err(error) => {
                writer.0.abort().context("failed to abort")?;
                Err(error)
            }
        }
    }
}

#[must_use]
pub struct Reader(ReadTransaction);

impl Reader {
    pub fn get<D: Document>(&self, key: &str) -> Result<Option<D>> {
        let table = self.0.open_table(D::table())?;
        get(&table, key)
    }

    /// All the documents in key order.
    pub fn all<D: Document>(&self) -> Result<Vec<D>> {
        let table = self.0.open_table(D::table())?;
        table
            .iter()?
            .map(|entry| {
                let (key, value) = entry?;
                decode(key.value(), value.value())
            })
            .collect()
    }
}

#[must_use]
pub struct Writer(WriteTransaction);

impl Writer {
    pub fn get<D: Document>(&self, key: &str) -> Result<Option<D>> {
        let table = self.0.open_table(D::table())?;
        get(&table, key)
    }

    #[instrument(skip_all, fields(table = D::TABLE_NAME, key = key))]
    pub fn insert<D: Document>(&self, key: &str, document: &D) -> Result {
        let value = serde_json::to_vec(document)
            .with_context(|| format!("failed to serialize `{}/{key}`", D::TABLE_NAME))?;
        self.0.open_table(D::table())?.insert(key, value.as_slice())?;
        debug!(n_bytes = value.len(), "stored");
        Ok(())
    }
}

fn get<D: Document>(
    table: &impl ReadableTable<&'static str, &'static [u8]>,
    key: &str,
) -> Result<Option<D>> {
    table.get(key)?.map(|value| decode(key, value.value())).transpose()
}

fn decode<D: Document>(key: &str, value: &[u8]) -> Result<D> {
    serde_json::from_slice(value)
        .with_context(|| format!("failed to deserialize `{}/{key}`", D::TABLE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::room::{Room, RoomRef};

    fn room(reference: &str) -> Room {
        Room { reference: RoomRef::new(reference).unwrap() }
    }

    #[test]
    fn write_then_read_ok() -> Result {
        let db = Db::in_memory()?;
        db.write(|writer| writer.insert("C02", &room("C02")))?;
        db.write(|writer| writer.insert("C01", &room("C01")))?;
        let rooms = db.read(|reader| reader.all::<Room>())?;
        assert_eq!(rooms, [room("C01"), room("C02")]);
        assert!(db.read(|reader| reader.get::<Room>("C03"))?.is_none());
        Ok(())
    }

    #[test]
    fn failed_write_is_rolled_back() -> Result {
        let db = Db::in_memory()?;
        let result: Result = db.write(|writer| {
            writer.insert("C01", &room("C01"))?;
            bail!("nope")
        });
        assert!(result.is_err());
        assert!(db.read(|reader| reader.get::<Room>("C01"))?.is_none());
        Ok(())
    }
}
