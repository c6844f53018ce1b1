use crate::error::{CommandError, SelectionError};
use crate::file::FileId;
use crate::language::Language;
use crate::state::{LoadOutcome, Session};
use crate::store::FileStore;
use crate::theme::Theme;

/// User-facing actions. The UI turns clicks and edits into commands and the
/// app executes them against the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Recompose the preview now.
    Run,
    /// Empty the active file. Needs confirmation.
    ClearActive,
    /// Create a file from the new-file dialog.
    CreateFile { name: String, language: Language },
    Save,
    Load,
    /// Delete a file. Needs confirmation.
    DeleteFile(FileId),
    Activate(FileId),
    Edit { id: FileId, content: String },
    SetTheme(Theme),
    SetAutoRun(bool),
}

impl Command {
    /// The question to ask before running a destructive command, if any.
    ///
    /// Fails when the command cannot run at all, so the user is told before
    /// being asked to confirm.
    pub fn confirmation(&self, store: &FileStore) -> Result<Option<String>, CommandError> {
        match self {
            Command::ClearActive => {
                let id = store
                    .active_id()
                    .ok_or(SelectionError::NoActiveFile { action: "clear" })?;
                let file = store.get(id).ok_or(SelectionError::MissingRecord(id))?;
                Ok(Some(format!(
                    "Are you sure you want to clear the content of {}?",
                    file.name
                )))
            }
            Command::DeleteFile(id) => Ok(store
                .get(*id)
                .map(|file| format!("Are you sure you want to delete {}?", file.name))),
            _ => Ok(None),
        }
    }

    /// Runs the command. Returns a notice for the user, if there is one.
    pub fn execute(self, session: &mut Session) -> Result<Option<String>, CommandError> {
        match self {
            Command::Run => session.run(),
            Command::ClearActive => {
                session.clear_active()?;
            }
            Command::CreateFile { name, language } => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(CommandError::EmptyFileName);
                }
                session.create_file(name, language);
            }
            Command::Save => session.save()?,
            Command::Load => {
                return Ok(Some(match session.load()? {
                    LoadOutcome::Restored { .. } => {
                        "Loaded code and theme from LocalStorage!".to_owned()
                    }
                    LoadOutcome::NothingSaved => "No saved data found in LocalStorage.".to_owned(),
                }));
            }
            Command::DeleteFile(id) => {
                session.delete(id);
            }
            Command::Activate(id) => {
                session.activate(id);
            }
            Command::Edit { id, content } => {
                session.update(id, content);
            }
            Command::SetTheme(theme) => session.set_theme(theme),
            Command::SetAutoRun(auto_run) => session.set_auto_run(auto_run),
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PersistenceBridge;

    fn session() -> Session {
        Session::new(PersistenceBridge::in_memory("test"))
    }

    #[test]
    fn test_clear_prompt_names_the_file() {
        let mut session = session();
        session.create_file("index", Language::Html);
        let prompt = Command::ClearActive.confirmation(session.store()).unwrap();
        assert_eq!(
            prompt.as_deref(),
            Some("Are you sure you want to clear the content of index.html?")
        );
    }

    #[test]
    fn test_clear_without_active_file_fails_before_prompt() {
        let session = session();
        let err = Command::ClearActive.confirmation(session.store()).unwrap_err();
        assert_eq!(err.to_string(), "No active file to clear.");
    }

    #[test]
    fn test_create_requires_name() {
        let mut session = session();
        let err = Command::CreateFile {
            name: "   ".to_owned(),
            language: Language::Html,
        }
        .execute(&mut session)
        .unwrap_err();
        assert_eq!(err.to_string(), "Please enter a file name.");
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_create_does_not_duplicate_extension() {
        let mut session = session();
        Command::CreateFile {
            name: "app.PY".to_owned(),
            language: Language::Python,
        }
        .execute(&mut session)
        .unwrap();
        assert_eq!(session.store().active().unwrap().name, "app.PY");
    }

    #[test]
    fn test_load_with_nothing_saved() {
        let mut session = session();
        let notice = Command::Load.execute(&mut session).unwrap();
        assert_eq!(notice.as_deref(), Some("No saved data found in LocalStorage."));
    }

    #[test]
    fn test_delete_unknown_file_has_no_prompt() {
        let session = session();
        assert_eq!(Command::DeleteFile(FileId(9)).confirmation(session.store()).unwrap(), None);
    }
}
