//! Generic persisted list manager
//!
//! [`ListManager`] owns an ordered collection of entities and rewrites its
//! backing file after every mutation. The GPA calculator, the reminder list
//! and the Pomodoro task list are all built on top of it.

use crate::entity::{Entity, Entry, EntryId};
use crate::error::{AssistantError, Result};
use crate::storage::Storage;
use std::cmp::Ordering;
use std::path::Path;
use tracing::{debug, error, warn};

pub struct ListManager<E: Entity> {
    entries: Vec<Entry<E>>,
    storage: Storage,
    next_id: EntryId,
    /// Last failed write, kept until the caller takes it
    storage_error: Option<AssistantError>,
}

impl<E: Entity> ListManager<E> {
    /// Open a manager backed by `file_path` and load its contents
    ///
    /// The data directory is created when it does not exist. Load problems
    /// are logged and leave the manager empty.
    pub fn open(file_path: impl AsRef<Path>) -> Self {
        let storage = Storage::new(file_path);
        if let Err(e) = storage.ensure_parent_dir() {
            warn!("Could not create data directory: {}", e);
        }

        let mut manager = Self {
            entries: Vec::new(),
            storage,
            next_id: 1,
            storage_error: None,
        };
        manager.load();
        manager
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    /// Replace the in-memory collection with the contents of the data file
    ///
    /// Loading is all-or-nothing: malformed JSON or a single invalid record
    /// resets the collection to empty.
    pub fn load(&mut self) {
        self.entries.clear();

        let entities = match self.read_all() {
            Ok(entities) => entities,
            Err(e) => {
                error!("Error loading {} data, starting empty: {}", E::KIND, e);
                return;
            }
        };

        for entity in entities {
            let id = self.allocate_id();
            self.entries.push(Entry { id, entity });
        }
        self.entries.sort_by(|a, b| a.entity.ordering(&b.entity));
        debug!(
            "Loaded {} {} record(s) from {}",
            self.entries.len(),
            E::KIND,
            self.path().display()
        );
    }

    fn read_all(&self) -> Result<Vec<E>> {
        self.storage
            .load::<E::Mapping>()?
            .into_iter()
            .map(E::from_mapping)
            .collect()
    }

    /// Write the full collection to the data file
    ///
    /// A failed write is logged and remembered for [`take_storage_error`];
    /// the in-memory collection is kept as is.
    ///
    /// [`take_storage_error`]: ListManager::take_storage_error
    pub fn save(&mut self) {
        let records: Vec<E::Mapping> = self
            .entries
            .iter()
            .map(|e| e.entity.to_mapping())
            .collect();
        if let Err(e) = self.storage.save(&records) {
            error!("Error saving {} data: {}", E::KIND, e);
            self.storage_error = Some(e);
        }
    }

    /// Insert an entity and persist the collection
    ///
    /// Entities with an ordering are placed after every entry that does not
    /// sort after them, so equal keys keep their insertion order.
    pub fn add(&mut self, entity: E) -> EntryId {
        let id = self.allocate_id();
        let position = self
            .entries
            .partition_point(|e| e.entity.ordering(&entity) != Ordering::Greater);
        self.entries.insert(position, Entry { id, entity });
        self.save();
        id
    }

    /// Remove the entry with the given id and persist the collection
    pub fn remove(&mut self, id: EntryId) -> Result<E> {
        let position = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AssistantError::not_found(format!("No {} with id {}", E::KIND, id)))?;
        let entry = self.entries.remove(position);
        self.save();
        Ok(entry.entity)
    }

    /// Remove every entry matching `predicate` with a single write
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&E) -> bool) -> Vec<Entry<E>> {
        let (removed, kept): (Vec<_>, Vec<_>) = self
            .entries
            .drain(..)
            .partition(|e| predicate(&e.entity));
        self.entries = kept;
        if !removed.is_empty() {
            self.save();
        }
        removed
    }

    /// Empty the collection and delete the data file
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.storage.remove() {
            error!("Error deleting {} data file: {}", E::KIND, e);
            self.storage_error = Some(e);
        }
    }

    pub fn entries(&self) -> &[Entry<E>] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&E> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().map(|e| &e.entity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take the last storage failure, if any, so it can be reported once
    pub fn take_storage_error(&mut self) -> Option<AssistantError> {
        self.storage_error.take()
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
