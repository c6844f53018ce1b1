mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::PlaygroundEvent;
pub use handlers::{PersistenceHandler, RecordingHandler};

use crate::file::{FileId, FileRecord};
use crate::theme::Theme;

/// Read-only view of the session handed to subscribers with every event.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub files: &'a [FileRecord],
    pub active: Option<FileId>,
    pub theme: Theme,
    pub auto_run: bool,
}

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &PlaygroundEvent, view: &SessionView<'_>);
}
