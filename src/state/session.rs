//! The single owner of all playground state.
//!
//! Every mutation goes through a [`Session`] method, which updates the
//! [`FileStore`] and then broadcasts a [`PlaygroundEvent`] together with a
//! read-only [`SessionView`]. Persistence and the preview are subscribers and
//! know nothing about each other.

use super::PersistenceBridge;
use crate::error::{PersistenceResult, SelectionError};
use crate::event::{EventBus, EventHandler, PersistenceHandler, PlaygroundEvent, SessionView};
use crate::file::{FileId, FileRecord};
use crate::language::Language;
use crate::store::FileStore;
use crate::theme::Theme;

/// Name of the file created when nothing was restored.
pub const DEFAULT_FILE_NAME: &str = "index";

/// Result of reading persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Restored { files: usize },
    NothingSaved,
}

#[derive(Debug)]
pub struct Session {
    store: FileStore,
    theme: Theme,
    auto_run: bool,
    bridge: PersistenceBridge,
    bus: EventBus,
}

impl Session {
    /// Creates an empty session whose mutations are written through `bridge`.
    pub fn new(bridge: PersistenceBridge) -> Self {
        let bus = EventBus::new();
        bus.subscribe(Box::new(PersistenceHandler::new(bridge.clone())));
        Self {
            store: FileStore::new(),
            theme: Theme::default(),
            auto_run: true,
            bridge,
            bus,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_auto_run(mut self, auto_run: bool) -> Self {
        self.auto_run = auto_run;
        self
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.bus.subscribe(handler);
    }

    /// Restores persisted state, then guarantees at least one file exists.
    ///
    /// A load error is returned after the default file has been created, so
    /// the session is usable either way. In that case the default file is not
    /// written through, and storage keeps whatever it held until the first
    /// user mutation.
    pub fn initialize(&mut self) -> PersistenceResult<LoadOutcome> {
        let outcome = self.load();
        if self.store.is_empty() {
            if outcome.is_ok() {
                log::info!("Starting with a default {} file", Language::Html);
                self.create_file(DEFAULT_FILE_NAME, Language::Html);
            } else {
                log::warn!("Saved state unreadable, starting with an unsaved default file");
                let id = self.store.create(DEFAULT_FILE_NAME, Language::Html);
                self.emit(PlaygroundEvent::FallbackCreated { id });
            }
        }
        outcome
    }

    pub fn create_file(&mut self, name: &str, language: Language) -> FileId {
        let id = self.store.create(name, language);
        log::info!("Created file {} ({})", self.store.get(id).map_or("", |f| f.name.as_str()), id);
        self.emit(PlaygroundEvent::FileCreated { id });
        id
    }

    /// Replaces the content of `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: FileId, content: impl Into<String>) -> bool {
        let updated = self.store.update(id, content);
        if updated {
            self.emit(PlaygroundEvent::ContentChanged { id });
        }
        updated
    }

    /// Empties the active file.
    pub fn clear_active(&mut self) -> Result<FileId, SelectionError> {
        let id = self.active_for("clear")?;
        self.store.update(id, String::new());
        self.emit(PlaygroundEvent::ContentCleared { id });
        Ok(id)
    }

    pub fn delete(&mut self, id: FileId) -> Option<FileRecord> {
        let removed = self.store.delete(id)?;
        log::info!("Deleted file {} ({})", removed.name, id);
        self.emit(PlaygroundEvent::FileDeleted { id });
        Some(removed)
    }

    pub fn activate(&mut self, id: FileId) -> bool {
        let old = self.store.active_id();
        if !self.store.activate(id) {
            return false;
        }
        self.emit(PlaygroundEvent::ActiveChanged { old, new: Some(id) });
        true
    }

    /// Asks subscribers to recompose the preview.
    pub fn run(&self) {
        self.emit(PlaygroundEvent::RunRequested);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.emit(PlaygroundEvent::ThemeChanged(theme));
        }
    }

    pub fn set_auto_run(&mut self, auto_run: bool) {
        if self.auto_run != auto_run {
            self.auto_run = auto_run;
            self.emit(PlaygroundEvent::AutoRunChanged(auto_run));
        }
    }

    /// Writes files and theme to storage.
    pub fn save(&self) -> PersistenceResult<()> {
        self.bridge.save(self.store.list(), self.theme)?;
        self.emit(PlaygroundEvent::Saved);
        Ok(())
    }

    /// Replaces the whole session with persisted state, if any.
    pub fn load(&mut self) -> PersistenceResult<LoadOutcome> {
        let Some(state) = self.bridge.load()? else {
            return Ok(LoadOutcome::NothingSaved);
        };

        let files = state.files.len();
        self.store.replace(state.files);
        self.theme = state.theme;
        log::info!("Restored {} files with theme {}", files, self.theme.name());
        self.emit(PlaygroundEvent::Restored);
        Ok(LoadOutcome::Restored { files })
    }

    /// The active file id, checked against the store.
    pub fn active_for(&self, action: &'static str) -> Result<FileId, SelectionError> {
        let id = self
            .store
            .active_id()
            .ok_or(SelectionError::NoActiveFile { action })?;
        if !self.store.contains(id) {
            return Err(SelectionError::MissingRecord(id));
        }
        Ok(id)
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn auto_run(&self) -> bool {
        self.auto_run
    }

    pub fn bridge(&self) -> &PersistenceBridge {
        &self.bridge
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            files: self.store.list(),
            active: self.store.active_id(),
            theme: self.theme,
            auto_run: self.auto_run,
        }
    }

    fn emit(&self, event: PlaygroundEvent) {
        self.bus.emit(&event, &self.view());
    }
}
