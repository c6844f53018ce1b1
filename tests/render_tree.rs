use eframe_playground::renderer::{self, RenderPatch, TabPanelRenderer};
use eframe_playground::{FileRecord, FileStore, Language};

#[test]
fn test_projection_marks_only_the_active_file() {
    let mut store = FileStore::new();
    store.create("a", Language::Html);
    let b = store.create("b", Language::Css);
    store.create("c", Language::JavaScript);
    store.activate(b);

    let tree = renderer::project(&store);
    let active: Vec<_> = tree.tabs.iter().filter(|t| t.active).map(|t| t.id).collect();
    assert_eq!(active, vec![b]);
    assert_eq!(tree.active_panel().unwrap().id, b);
}

#[test]
fn test_diff_reports_insert_and_remove() {
    let mut store = FileStore::new();
    let a = store.create("a", Language::Html);
    let before = renderer::project(&store);

    store.delete(a);
    let b = store.create("b", Language::Css);
    let patches = renderer::diff(&before, &renderer::project(&store));

    assert_eq!(patches.len(), 2);
    assert_eq!(patches[0], RenderPatch::Remove { id: a });
    assert!(matches!(&patches[1], RenderPatch::Insert { index: 0, tab, .. } if tab.id == b));
}

#[test]
fn test_edits_flow_into_buffers() {
    let mut store = FileStore::new();
    let id = store.create("a", Language::Html);
    let mut renderer = TabPanelRenderer::new();
    renderer.sync(&store);

    store.update(id, "<b>new</b>");
    let patches = renderer.sync(&store);
    assert_eq!(
        patches,
        vec![RenderPatch::SetContent { id, content: "<b>new</b>".to_owned() }]
    );
    assert_eq!(renderer.tree().panel(id).unwrap().content, "<b>new</b>");
}

#[test]
fn test_rebuild_after_restore() {
    let mut store = FileStore::new();
    store.create("old", Language::Html);
    let mut renderer = TabPanelRenderer::new();
    renderer.sync(&store);

    let restored = vec![
        FileRecord::new("x", Language::Css).with_content("x{}"),
        FileRecord::new("y", Language::Html),
    ];
    store.replace(restored.clone());
    renderer.rebuild(&store);

    let tree = renderer.tree();
    assert_eq!(tree.tabs.len(), 2);
    assert_eq!(tree.tabs[0].label, "x.css");
    assert!(tree.tabs[0].active);
    assert_eq!(tree.panels[0].content, "x{}");
}
