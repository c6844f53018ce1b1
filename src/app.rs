use std::collections::VecDeque;

use crate::command::Command;
use crate::config::PlaygroundConfig;
use crate::event::RecordingHandler;
use crate::export::{self, Downloader};
use crate::language::Language;
use crate::preview::{PreviewHandler, SharedFrame};
use crate::renderer::TabPanelRenderer;
use crate::state::{LoadOutcome, PersistenceBridge, Session};
use crate::theme::Theme;
use crate::util::FpsCounter;

/// UI preferences. We derive Deserialize/Serialize so eframe can persist them on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct UiPrefs {
    pub auto_run: bool,
    pub show_preview_source: bool,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            auto_run: true,
            show_preview_source: false,
        }
    }
}

impl UiPrefs {
    /// Preferences for a first start, before eframe has stored any.
    pub fn from_config(config: &PlaygroundConfig) -> Self {
        Self {
            auto_run: config.auto_run,
            ..Self::default()
        }
    }
}

/// State of the new-file form.
#[derive(Debug, Clone, Default)]
pub struct NewFileDialog {
    pub open: bool,
    pub name: String,
    pub language: Language,
}

impl NewFileDialog {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A destructive command waiting for the user to confirm.
#[derive(Debug, Clone)]
pub struct PendingConfirmation {
    pub command: Command,
    pub prompt: String,
}

pub struct PlaygroundApp {
    pub(crate) session: Session,
    pub(crate) renderer: TabPanelRenderer,
    pub(crate) frame: SharedFrame,
    pub(crate) prefs: UiPrefs,
    pub(crate) dialog: NewFileDialog,
    pub(crate) pending: Option<PendingConfirmation>,
    pub(crate) notices: VecDeque<String>,
    pub(crate) fps: FpsCounter,
    pub(crate) recorder: RecordingHandler,
    downloader: Box<dyn Downloader>,
    applied_theme: Option<Theme>,
    #[cfg(target_arch = "wasm32")]
    pub(crate) iframe: crate::preview::IframeSurface,
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) preview_path: std::path::PathBuf,
}

impl PlaygroundApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = PlaygroundConfig::from_env();
        let prefs: UiPrefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_else(|| UiPrefs::from_config(&config));
        log::info!("Starting playground with storage key {:?}", config.storage_key);

        Self::with_config(&config, prefs)
    }

    /// Builds the app from explicit settings, without an eframe context.
    pub fn with_config(config: &PlaygroundConfig, prefs: UiPrefs) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let bridge = PersistenceBridge::new(
            crate::state::DirectoryStore::new(&config.data_dir),
            config.storage_key.clone(),
        );
        #[cfg(target_arch = "wasm32")]
        let bridge = PersistenceBridge::new(crate::state::LocalStorage, config.storage_key.clone());

        let session = Session::new(bridge)
            .with_theme(config.default_theme)
            .with_auto_run(prefs.auto_run);

        let frame = SharedFrame::default();
        #[cfg(not(target_arch = "wasm32"))]
        let handler = PreviewHandler::new(frame.clone())
            .with_surface(crate::preview::HtmlFileSurface::new(config.preview_path()));
        #[cfg(target_arch = "wasm32")]
        let iframe = crate::preview::IframeSurface::new(crate::preview::IframeSurface::DEFAULT_ID);
        #[cfg(target_arch = "wasm32")]
        let handler = PreviewHandler::new(frame.clone()).with_surface(iframe.clone());

        #[cfg(not(target_arch = "wasm32"))]
        let downloader: Box<dyn Downloader> =
            Box::new(export::DirectoryDownloader::new(&config.downloads_dir));
        #[cfg(target_arch = "wasm32")]
        let downloader: Box<dyn Downloader> = Box::new(export::BrowserDownloader);

        #[cfg(not(target_arch = "wasm32"))]
        let surface = config.preview_path();
        #[cfg(target_arch = "wasm32")]
        let surface = iframe;

        Self::from_parts(session, handler, frame, downloader, prefs, surface)
    }

    fn from_parts(
        mut session: Session,
        preview: PreviewHandler,
        frame: SharedFrame,
        downloader: Box<dyn Downloader>,
        prefs: UiPrefs,
        #[cfg(not(target_arch = "wasm32"))] preview_path: std::path::PathBuf,
        #[cfg(target_arch = "wasm32")] iframe: crate::preview::IframeSurface,
    ) -> Self {
        let recorder = RecordingHandler::new();
        session.subscribe(Box::new(preview));
        session.subscribe(Box::new(recorder.clone()));

        let mut notices = VecDeque::new();
        match session.initialize() {
            Ok(LoadOutcome::Restored { files }) => {
                log::info!("Restored {} files from storage", files);
                notices.push_back("Loaded code and theme from LocalStorage!".to_owned());
            }
            Ok(LoadOutcome::NothingSaved) => {}
            Err(err) => {
                log::error!("Could not restore saved playground: {}", err);
                notices.push_back(err.to_string());
            }
        }

        let mut renderer = TabPanelRenderer::new();
        renderer.rebuild(session.store());

        Self {
            session,
            renderer,
            frame,
            prefs,
            dialog: NewFileDialog::default(),
            pending: None,
            notices,
            fps: FpsCounter::new(),
            recorder,
            downloader,
            applied_theme: None,
            #[cfg(target_arch = "wasm32")]
            iframe,
            #[cfg(not(target_arch = "wasm32"))]
            preview_path,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn renderer(&self) -> &TabPanelRenderer {
        &self.renderer
    }

    /// Runs `command`, or parks it until the user confirms if it is destructive.
    pub fn submit(&mut self, command: Command) {
        match command.confirmation(self.session.store()) {
            Ok(Some(prompt)) => self.pending = Some(PendingConfirmation { command, prompt }),
            Ok(None) => self.execute(command),
            Err(err) => self.notify(err.to_string()),
        }
    }

    /// Resolves the pending confirmation. Declining leaves everything untouched.
    pub fn confirm(&mut self, accepted: bool) {
        if let Some(pending) = self.pending.take() {
            if accepted {
                self.execute(pending.command);
            } else {
                log::debug!("Declined {:?}", pending.command);
            }
        }
    }

    fn execute(&mut self, command: Command) {
        let reload = matches!(command, Command::Load);
        if let Command::SetAutoRun(auto_run) = command {
            self.prefs.auto_run = auto_run;
        }

        match command.execute(&mut self.session) {
            Ok(Some(notice)) => self.notify(notice),
            Ok(None) => {}
            Err(err) => {
                log::warn!("Command failed: {}", err);
                self.notify(err.to_string());
            }
        }

        if reload {
            self.renderer.rebuild(self.session.store());
        } else {
            self.renderer.sync(self.session.store());
        }
    }

    /// Exports the active file through the platform downloader.
    pub fn download(&mut self) {
        let result = export::prepare(self.session.store())
            .and_then(|download| self.downloader.deliver(&download));
        match result {
            #[cfg(not(target_arch = "wasm32"))]
            Ok(location) => self.notify(format!("Downloaded to {}", location)),
            #[cfg(target_arch = "wasm32")]
            Ok(_) => {}
            Err(err) => self.notify(err.to_string()),
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notices.push_back(message.into());
    }

    pub fn notices(&self) -> impl Iterator<Item = &str> {
        self.notices.iter().map(String::as_str)
    }

    pub fn pending(&self) -> Option<&PendingConfirmation> {
        self.pending.as_ref()
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.session.theme();
        if self.applied_theme != Some(theme) {
            ctx.set_visuals(theme.visuals());
            self.applied_theme = Some(theme);
        }
    }
}

impl eframe::App for PlaygroundApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.prefs);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);
        self.fps.tick(ctx.input(|i| i.time));

        crate::panels::toolbar(self, ctx);
        crate::panels::status_bar(self, ctx);
        crate::panels::tabs_panel(self, ctx);
        crate::panels::preview_panel(self, ctx);
        crate::panels::central_panel(self, ctx);
        crate::panels::dialogs(self, ctx);

        // Request continuous rendering for the FPS readout
        ctx.request_repaint();
    }
}
