use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::io::{read_if_exists, write_atomically};
use crate::model::style::Style;

/// A stored snowflake row.
///
/// `pattern` is opaque text produced by the generator and never changes once
/// stored; only `melted` can flip, and only from `false` to `true`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Snowflake {
	pub id: u64,
	pub seed: String,
	pub size: usize,
	pub style: Style,
	pub pattern: String,
	pub created_at: DateTime<Utc>,
	pub melted: bool,
}

/// Column values for a row about to be inserted. The table assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSnowflake {
	pub seed: String,
	pub size: usize,
	pub style: Style,
	pub pattern: String,
	pub created_at: DateTime<Utc>,
}

/// Serialized form of the table.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
struct Table {
	next_id: u64,
	rows: BTreeMap<u64, Snowflake>,
}

/// Single-table snowflake store.
///
/// # Responsibilities
/// - Assign ascending ids, starting at 1 and never reused
/// - Keep rows ordered by id
/// - Persist the whole table with `postcard` after every mutation when a
///   backing file is configured
///
/// # Invariants
/// - `table.next_id` is greater than every id in `table.rows`
/// - A mutation that fails to persist leaves the in-memory table unchanged
///
/// The store takes `&mut self` for writes; callers sharing it across threads
/// wrap it in a lock.
#[derive(Debug, Default)]
pub struct SnowflakeStore {
	table: Table,
	path: Option<PathBuf>,
}

impl SnowflakeStore {
	/// Creates an empty store that lives only in memory.
	pub fn in_memory() -> Self {
		Self::default()
	}

	/// Opens a store backed by `path`.
	///
	/// Loads the table if the file exists, otherwise starts empty. The file
	/// is only created on the first mutation.
	///
	/// # Errors
	/// - [`Error::Io`] if the file exists but cannot be read
	/// - [`Error::Codec`] if its contents are not a valid table
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
		let path = path.as_ref().to_path_buf();
		let table = match read_if_exists(&path)? {
			Some(bytes) => postcard::from_bytes(&bytes)?,
			None => Table::default(),
		};
		info!("Opened snowflake table {} with {} rows", path.display(), table.rows.len());
		Ok(Self { table, path: Some(path) })
	}

	/// Returns the backing file, if any.
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// Inserts a row and returns it with its assigned id.
	///
	/// # Errors
	/// Returns an error if the table cannot be persisted; nothing is inserted.
	pub fn insert(&mut self, new: NewSnowflake) -> Result<Snowflake, Error> {
		let id = self.table.next_id.max(1);
		let row = Snowflake {
			id,
			seed: new.seed,
			size: new.size,
			style: new.style,
			pattern: new.pattern,
			created_at: new.created_at,
			melted: false,
		};

		self.apply(|table| {
			table.next_id = id + 1;
			table.rows.insert(id, row.clone());
		})?;

		Ok(row)
	}

	/// Returns every row, ordered by id.
	pub fn list(&self) -> Vec<Snowflake> {
		self.table.rows.values().cloned().collect()
	}

	/// Returns the row with the given id.
	pub fn get(&self, id: u64) -> Option<Snowflake> {
		self.table.rows.get(&id).cloned()
	}

	/// Marks a row as melted and returns it. Melting twice is a no-op.
	///
	/// # Returns
	/// - `Ok(None)` if no row has this id
	///
	/// # Errors
	/// Returns an error if the table cannot be persisted; the row stays as it was.
	pub fn melt(&mut self, id: u64) -> Result<Option<Snowflake>, Error> {
		let Some(existing) = self.table.rows.get(&id) else {
			return Ok(None);
		};
		if existing.melted {
			return Ok(Some(existing.clone()));
		}

		self.apply(|table| {
			table.rows.get_mut(&id).map(|row| {
				row.melted = true;
				row.clone()
			})
		})
	}

	/// Removes a row and returns it.
	///
	/// # Returns
	/// - `Ok(None)` if no row has this id
	///
	/// # Errors
	/// Returns an error if the table cannot be persisted; the row is kept.
	pub fn delete(&mut self, id: u64) -> Result<Option<Snowflake>, Error> {
		if !self.table.rows.contains_key(&id) {
			return Ok(None);
		}

		self.apply(|table| table.rows.remove(&id))
	}

	/// Applies `change` to the table.
	///
	/// In memory the change is made in place. With a backing file it is made
	/// on a copy that replaces the table only once it has been flushed.
	fn apply<R>(&mut self, change: impl FnOnce(&mut Table) -> R) -> Result<R, Error> {
		let Some(path) = &self.path else {
			return Ok(change(&mut self.table));
		};

		let mut next = self.table.clone();
		let result = change(&mut next);
		let bytes = postcard::to_stdvec(&next)?;
		write_atomically(path, &bytes)?;
		debug!("Flushed {} rows to {}", next.rows.len(), path.display());

		self.table = next;
		Ok(result)
	}
}
