use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::SurfaceError;
use crate::event::{EventHandler, PlaygroundEvent, SessionView};

/// Something that can display a composed preview document.
///
/// Every write replaces whatever the surface showed before.
pub trait PreviewSurface: Send {
    fn write_document(&mut self, html: &str) -> Result<(), SurfaceError>;
}

/// In-memory copy of the latest document, read by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewFrame {
    document: String,
    generation: u64,
}

impl PreviewFrame {
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Number of compositions written so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub type SharedFrame = Arc<Mutex<PreviewFrame>>;

impl PreviewSurface for SharedFrame {
    fn write_document(&mut self, html: &str) -> Result<(), SurfaceError> {
        let mut frame = self.lock();
        frame.document.clear();
        frame.document.push_str(html);
        frame.generation += 1;
        Ok(())
    }
}

/// CSS pixels per egui point: egui's scale relative to the browser's own
/// device pixel ratio, i.e. the egui zoom factor.
pub fn css_per_point(ctx: &egui::Context) -> f32 {
    let native = ctx
        .input(|i| i.viewport().native_pixels_per_point)
        .filter(|ppp| *ppp > 0.0)
        .unwrap_or(1.0);
    ctx.pixels_per_point() / native
}

/// Inline style pinning the preview frame over `rect`, converting points to
/// CSS pixels. Assumes the egui canvas fills the page from its top-left corner.
pub fn frame_style(rect: egui::Rect, css_per_point: f32) -> String {
    format!(
        "position:fixed;left:{}px;top:{}px;width:{}px;height:{}px;border:none;background:white;",
        rect.min.x * css_per_point,
        rect.min.y * css_per_point,
        rect.width() * css_per_point,
        rect.height() * css_per_point
    )
}

/// Writes the preview to an HTML file that a browser can open.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct HtmlFileSurface {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl HtmlFileSurface {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreviewSurface for HtmlFileSurface {
    fn write_document(&mut self, html: &str) -> Result<(), SurfaceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, html)?;
        Ok(())
    }
}

/// An `<iframe>` laid over the preview panel of the web build.
///
/// The frame is looked up by element id on every call so the surface holds
/// no browser handles.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct IframeSurface {
    element_id: String,
}

#[cfg(target_arch = "wasm32")]
impl IframeSurface {
    pub const DEFAULT_ID: &'static str = "preview";

    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }

    fn frame(element_id: &str) -> Result<web_sys::HtmlIFrameElement, SurfaceError> {
        use eframe::wasm_bindgen::JsCast as _;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| SurfaceError::Unavailable("no document".to_owned()))?;

        let element = match document.get_element_by_id(element_id) {
            Some(element) => element,
            None => {
                let element = document
                    .create_element("iframe")
                    .map_err(|err| SurfaceError::Unavailable(format!("{:?}", err)))?;
                element.set_id(element_id);
                let body = document
                    .body()
                    .ok_or_else(|| SurfaceError::Unavailable("no body".to_owned()))?;
                body.append_child(&element)
                    .map_err(|err| SurfaceError::Unavailable(format!("{:?}", err)))?;
                element
            }
        };

        element
            .dyn_into::<web_sys::HtmlIFrameElement>()
            .map_err(|_| SurfaceError::Unavailable(format!("#{} is not an iframe", element_id)))
    }

    /// Positions the frame over `rect`, given in egui points.
    pub fn place(&self, rect: egui::Rect, css_per_point: f32) -> Result<(), SurfaceError> {
        self.set_style(&frame_style(rect, css_per_point))
    }

    pub fn hide(&self) -> Result<(), SurfaceError> {
        self.set_style("display:none;")
    }

    fn set_style(&self, style: &str) -> Result<(), SurfaceError> {
        Self::frame(&self.element_id)?
            .set_attribute("style", style)
            .map_err(|err| SurfaceError::Unavailable(format!("{:?}", err)))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreviewSurface for IframeSurface {
    fn write_document(&mut self, html: &str) -> Result<(), SurfaceError> {
        Self::frame(&self.element_id)?.set_srcdoc(html);
        Ok(())
    }
}

/// Recomposes the preview whenever an event calls for it.
pub struct PreviewHandler {
    surfaces: Vec<Box<dyn PreviewSurface>>,
}

impl std::fmt::Debug for PreviewHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewHandler")
            .field("surfaces", &format!("<{} surfaces>", self.surfaces.len()))
            .finish()
    }
}

impl PreviewHandler {
    pub fn new(surface: impl PreviewSurface + 'static) -> Self {
        Self {
            surfaces: vec![Box::new(surface)],
        }
    }

    pub fn with_surface(mut self, surface: impl PreviewSurface + 'static) -> Self {
        self.surfaces.push(Box::new(surface));
        self
    }

    /// Writes the document for `view` to every surface.
    pub fn render(&mut self, view: &SessionView<'_>) {
        let document = super::document_for(view.files);
        log::debug!("Composed preview from {} files ({} bytes)", view.files.len(), document.len());
        for surface in &mut self.surfaces {
            if let Err(err) = surface.write_document(&document) {
                log::warn!("Preview surface rejected document: {}", err);
            }
        }
    }
}

impl EventHandler for PreviewHandler {
    fn handle_event(&mut self, event: &PlaygroundEvent, view: &SessionView<'_>) {
        if event.needs_preview(view.auto_run) {
            self.render(view);
        }
    }
}
