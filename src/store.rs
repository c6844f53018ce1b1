use crate::file::{FileId, FileRecord};
use crate::id_generator;
use crate::language::Language;

/// Ordered collection of files plus the active selection.
///
/// Order is insertion order. At most one file is active and the active id
/// always refers to a record in the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileStore {
    files: Vec<FileRecord>,
    active: Option<FileId>,
    version: u64,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from restored records, activating the first one.
    pub fn from_records(files: Vec<FileRecord>) -> Self {
        let mut store = Self::new();
        store.replace(files);
        store
    }

    /// Appends a new empty file and makes it active.
    pub fn create(&mut self, name: &str, language: Language) -> FileId {
        let record = FileRecord::new(name, language);
        let id = record.id;
        self.files.push(record);
        self.active = Some(id);
        self.mark_modified();
        id
    }

    /// Replaces the content of `id`. Returns false if no such file exists.
    pub fn update(&mut self, id: FileId, content: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(file) => {
                file.content = content.into();
                self.mark_modified();
                true
            }
            None => false,
        }
    }

    /// Removes `id`. If it was active the first remaining file becomes active.
    pub fn delete(&mut self, id: FileId) -> Option<FileRecord> {
        let index = self.files.iter().position(|file| file.id == id)?;
        let removed = self.files.remove(index);
        if self.active == Some(id) {
            self.active = self.files.first().map(|file| file.id);
        }
        self.mark_modified();
        Some(removed)
    }

    /// Makes `id` the active file. Unknown ids leave the selection unchanged.
    pub fn activate(&mut self, id: FileId) -> bool {
        if self.contains(id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Replaces every record, e.g. after loading persisted state.
    pub fn replace(&mut self, files: Vec<FileRecord>) {
        for file in &files {
            id_generator::observe_id(file.id.0);
        }
        self.active = files.first().map(|file| file.id);
        self.files = files;
        self.mark_modified();
    }

    pub fn list(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn get(&self, id: FileId) -> Option<&FileRecord> {
        self.files.iter().find(|file| file.id == id)
    }

    fn get_mut(&mut self, id: FileId) -> Option<&mut FileRecord> {
        self.files.iter_mut().find(|file| file.id == id)
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.get(id).is_some()
    }

    pub fn active_id(&self) -> Option<FileId> {
        self.active
    }

    pub fn active(&self) -> Option<&FileRecord> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Bumped on every mutation of the records.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn mark_modified(&mut self) {
        self.version += 1;
    }
}
