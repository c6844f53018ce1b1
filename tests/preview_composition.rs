use eframe_playground::preview::{self, EMPTY_PREVIEW, PreviewHandler, SharedFrame};
use eframe_playground::{FileRecord, FileStore, Language, PersistenceBridge, Session};

fn record(name: &str, language: Language, content: &str) -> FileRecord {
    FileRecord::new(name, language).with_content(content)
}

#[test]
fn test_styles_then_markup_then_scripts() {
    let files = vec![
        record("index", Language::Html, "<p>Hi</p>"),
        record("style", Language::Css, "p{color:red}"),
        record("app", Language::JavaScript, "console.log(1)"),
    ];
    let document = preview::compose(&files);

    let style = document.find("<style>p{color:red}</style>").unwrap();
    let markup = document.find("<p>Hi</p>").unwrap();
    let script = document.find("<script>console.log(1)</script>").unwrap();
    assert!(style < markup);
    assert!(markup < script);
    assert!(style < document.find("</head><body>").unwrap());
    assert!(document.starts_with("<!DOCTYPE html><html lang='en'><head><meta charset='UTF-8'><title>Preview</title>"));
    assert!(document.ends_with("</body></html>"));
}

#[test]
fn test_same_language_keeps_store_order() {
    let files = vec![
        record("b", Language::Css, "b{}"),
        record("second", Language::Html, "<i>2</i>"),
        record("a", Language::Css, "a{}"),
        record("first", Language::Html, "<i>1</i>"),
    ];
    let document = preview::compose(&files);
    assert!(document.contains("<style>b{}</style><style>a{}</style>"));
    assert!(document.contains("<i>2</i><i>1</i>"));
}

#[test]
fn test_composition_is_idempotent() {
    let files = vec![
        record("index", Language::Html, "<h1>x</h1>"),
        record("app", Language::JavaScript, "let a = 1;"),
        record("main", Language::Python, "print('ignored')"),
    ];
    assert_eq!(preview::compose(&files), preview::compose(&files));
}

#[test]
fn test_preview_reflects_every_file_not_just_the_active_one() {
    let frame = SharedFrame::default();
    let mut session = Session::new(PersistenceBridge::in_memory("preview"));
    session.subscribe(Box::new(PreviewHandler::new(frame.clone())));

    let html = session.create_file("index", Language::Html);
    session.update(html, "<p>one</p>");
    let css = session.create_file("style", Language::Css);
    session.update(css, "p{}");

    assert_eq!(session.store().active_id(), Some(css));
    let document = frame.lock().document().to_owned();
    assert!(document.contains("<p>one</p>"));
    assert!(document.contains("<style>p{}</style>"));
}

#[test]
fn test_deleting_everything_shows_placeholder() {
    let frame = SharedFrame::default();
    let mut session = Session::new(PersistenceBridge::in_memory("preview"));
    session.subscribe(Box::new(PreviewHandler::new(frame.clone())));

    let id = session.create_file("index", Language::Html);
    session.delete(id);
    assert_eq!(frame.lock().document(), EMPTY_PREVIEW);
    assert_eq!(preview::document_for(FileStore::new().list()), EMPTY_PREVIEW);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_html_file_surface_receives_document() {
    use eframe_playground::preview::HtmlFileSurface;

    let path = std::env::temp_dir()
        .join(format!("eframe_playground_preview_{}", std::process::id()))
        .join("preview.html");
    let frame = SharedFrame::default();
    let session = Session::new(PersistenceBridge::in_memory("preview"));
    session.subscribe(Box::new(
        PreviewHandler::new(frame.clone()).with_surface(HtmlFileSurface::new(&path)),
    ));

    session.run();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), EMPTY_PREVIEW);
    assert_eq!(frame.lock().generation(), 1);
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_frame_style_scales_points_to_css_pixels() {
    let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 200.0));
    let style = preview::frame_style(rect, 1.5);
    assert!(style.contains("left:15px;top:30px;width:450px;height:300px;"));

    let ctx = egui::Context::default();
    assert_eq!(preview::css_per_point(&ctx), 1.0);
    assert!(preview::frame_style(rect, preview::css_per_point(&ctx)).contains("left:10px;"));
}
