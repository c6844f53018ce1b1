use crate::error::{ExportError, SelectionError};
use crate::store::FileStore;

/// A file ready to be handed to the platform as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Builds a download from the active file.
pub fn prepare(store: &FileStore) -> Result<Download, ExportError> {
    let id = store
        .active_id()
        .ok_or(SelectionError::NoActiveFile { action: "download" })?;
    let file = store.get(id).ok_or(SelectionError::MissingRecord(id))?;

    Ok(Download {
        file_name: file.name.clone(),
        mime_type: file.language.mime_type(),
        bytes: file.content.as_bytes().to_vec(),
    })
}

/// Delivers a prepared download to the user.
pub trait Downloader {
    /// Returns a short description of where the file went.
    fn deliver(&mut self, download: &Download) -> Result<String, ExportError>;
}

/// Native downloads land in a directory on disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirectoryDownloader {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Downloader for DirectoryDownloader {
    fn deliver(&mut self, download: &Download) -> Result<String, ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        // Keep only the final component so a name can't escape the directory
        let file_name = std::path::Path::new(&download.file_name)
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "download.txt".into());
        let path = self.dir.join(file_name);
        std::fs::write(&path, &download.bytes)?;
        log::info!("Downloaded {} ({}) to {}", download.file_name, download.mime_type, path.display());
        Ok(path.display().to_string())
    }
}

/// Web downloads go through a `Blob` URL and a clicked anchor.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownloader;

#[cfg(target_arch = "wasm32")]
impl Downloader for BrowserDownloader {
    fn deliver(&mut self, download: &Download) -> Result<String, ExportError> {
        use eframe::wasm_bindgen::{JsCast as _, JsValue};
        use web_sys::js_sys;

        let browser = |err: JsValue| ExportError::Browser(format!("{:?}", err));

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ExportError::Browser("no document".to_owned()))?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(download.bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(download.mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(browser)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser)?;
        let link = document
            .create_element("a")
            .map_err(browser)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ExportError::Browser("anchor is not an HtmlAnchorElement".to_owned()))?;
        link.set_href(&url);
        link.set_download(&download.file_name);
        link.click();
        web_sys::Url::revoke_object_url(&url).map_err(browser)?;

        Ok(download.file_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileRecord;
    use crate::language::Language;

    #[test]
    fn test_no_active_file() {
        let store = FileStore::new();
        let err = prepare(&store).unwrap_err();
        assert_eq!(err.to_string(), "No active file to download.");
    }

    #[test]
    fn test_active_file_is_exported() {
        let mut store = FileStore::new();
        let id = store.create("main", Language::Rust);
        store.update(id, "fn main() {}");
        store.create("style", Language::Css);
        store.activate(id);

        let download = prepare(&store).unwrap();
        assert_eq!(download.file_name, "main.rs");
        assert_eq!(download.mime_type, "text/plain");
        assert_eq!(download.bytes, b"fn main() {}");
    }

    #[test]
    fn test_unknown_language_exports_plain_text() {
        let store = FileStore::from_records(vec![
            FileRecord::new("notes", Language::from_tag("org")).with_content("* todo"),
        ]);
        let download = prepare(&store).unwrap();
        assert_eq!(download.file_name, "notes.txt");
        assert_eq!(download.mime_type, "text/plain");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_directory_downloader_writes_file() {
        let dir = std::env::temp_dir().join(format!("eframe_playground_dl_{}", std::process::id()));
        let mut downloader = DirectoryDownloader::new(&dir);
        let download = Download {
            file_name: "app.py".to_owned(),
            mime_type: "text/x-python",
            bytes: b"print(1)".to_vec(),
        };
        downloader.deliver(&download).unwrap();
        assert_eq!(std::fs::read(dir.join("app.py")).unwrap(), b"print(1)");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
