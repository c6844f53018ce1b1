#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod file;
pub mod id_generator;
pub mod language;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod state;
pub mod store;
pub mod theme;
pub mod util;

pub use app::PlaygroundApp;
pub use command::Command;
pub use config::PlaygroundConfig;
pub use file::{FileId, FileRecord};
pub use language::Language;
pub use renderer::{RenderTree, TabPanelRenderer};
pub use state::{PersistenceBridge, Session};
pub use store::FileStore;
pub use theme::Theme;
