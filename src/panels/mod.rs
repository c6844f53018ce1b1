mod central_panel;
mod dialogs;
mod preview_panel;
mod status_bar;
mod tabs_panel;
mod toolbar;

pub use central_panel::central_panel;
pub use dialogs::dialogs;
pub use preview_panel::preview_panel;
pub use status_bar::status_bar;
pub use tabs_panel::tabs_panel;
pub use toolbar::toolbar;
