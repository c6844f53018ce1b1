//! Builds the preview document from the file store.

mod surface;

pub use surface::{
    PreviewFrame, PreviewHandler, PreviewSurface, SharedFrame, css_per_point, frame_style,
};
#[cfg(not(target_arch = "wasm32"))]
pub use surface::HtmlFileSurface;
#[cfg(target_arch = "wasm32")]
pub use surface::IframeSurface;

use crate::file::FileRecord;
use crate::language::Language;

/// Shown instead of a composed document when there are no files at all.
pub const EMPTY_PREVIEW: &str = "<h2>No File Selected</h2>";

const DOCUMENT_HEAD: &str =
    "<!DOCTYPE html><html lang='en'><head><meta charset='UTF-8'><title>Preview</title>";

/// Composes one self-contained HTML document from every file, in store order:
/// CSS files become `<style>` blocks in the head, HTML files are pasted into
/// the body, and JavaScript files become `<script>` blocks after the markup.
/// Other languages are ignored.
pub fn compose(files: &[FileRecord]) -> String {
    let mut html = String::from(DOCUMENT_HEAD);

    for file in files.iter().filter(|f| f.language == Language::Css) {
        html.push_str("<style>");
        html.push_str(&file.content);
        html.push_str("</style>");
    }

    html.push_str("</head><body>");

    for file in files.iter().filter(|f| f.language == Language::Html) {
        html.push_str(&file.content);
    }

    for file in files.iter().filter(|f| f.language == Language::JavaScript) {
        html.push_str("<script>");
        html.push_str(&file.content);
        html.push_str("</script>");
    }

    html.push_str("</body></html>");
    html
}

/// The document a surface should show for `files`.
pub fn document_for(files: &[FileRecord]) -> String {
    if files.is_empty() {
        EMPTY_PREVIEW.to_owned()
    } else {
        compose(files)
    }
}
