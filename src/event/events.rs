use crate::file::FileId;
use crate::theme::Theme;

/// Change notifications emitted by the session after each mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaygroundEvent {
    FileCreated { id: FileId },
    /// Placeholder file created because saved state could not be read.
    /// Storage keeps the unreadable blob.
    FallbackCreated { id: FileId },
    ContentChanged { id: FileId },
    ContentCleared { id: FileId },
    FileDeleted { id: FileId },
    ActiveChanged {
        old: Option<FileId>,
        new: Option<FileId>,
    },
    ThemeChanged(Theme),
    AutoRunChanged(bool),
    /// Explicit "run" from the user.
    RunRequested,
    /// The session was saved explicitly.
    Saved,
    /// The whole store was replaced from persisted state.
    Restored,
}

impl PlaygroundEvent {
    /// Whether the persisted blob must be rewritten after this event.
    pub fn is_persisted(&self) -> bool {
        matches!(
            self,
            PlaygroundEvent::FileCreated { .. }
                | PlaygroundEvent::ContentChanged { .. }
                | PlaygroundEvent::ContentCleared { .. }
                | PlaygroundEvent::FileDeleted { .. }
                | PlaygroundEvent::ThemeChanged(_)
        )
    }

    /// Whether the preview must be recomposed. Plain edits only recompose
    /// when auto-run is on.
    pub fn needs_preview(&self, auto_run: bool) -> bool {
        match self {
            PlaygroundEvent::ContentChanged { .. } => auto_run,
            PlaygroundEvent::RunRequested
            | PlaygroundEvent::ContentCleared { .. }
            | PlaygroundEvent::FileCreated { .. }
            | PlaygroundEvent::FallbackCreated { .. }
            | PlaygroundEvent::FileDeleted { .. }
            | PlaygroundEvent::ActiveChanged { .. }
            | PlaygroundEvent::Restored => true,
            PlaygroundEvent::ThemeChanged(_)
            | PlaygroundEvent::AutoRunChanged(_)
            | PlaygroundEvent::Saved => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_file_is_previewed_but_not_saved() {
        let event = PlaygroundEvent::FallbackCreated { id: FileId(1) };
        assert!(!event.is_persisted());
        assert!(event.needs_preview(false));
        assert!(PlaygroundEvent::FileCreated { id: FileId(1) }.is_persisted());
    }
}
