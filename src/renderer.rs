//! Tabs and editor panels as a pure projection of the file store.
//!
//! [`project`] turns the store into a [`RenderTree`], [`diff`] compares two
//! trees, and [`TabPanelRenderer`] applies the patches to the editor buffers
//! the UI draws from. Nothing here touches egui, so the 1:1 correspondence
//! between records, tabs and panels can be checked in plain tests.

use std::collections::HashMap;

use crate::file::FileId;
use crate::store::FileStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabNode {
    pub id: FileId,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelNode {
    pub id: FileId,
    pub header: String,
    pub placeholder: String,
    pub content: String,
    pub active: bool,
}

/// Everything the UI shows for the file store, in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderTree {
    pub tabs: Vec<TabNode>,
    pub panels: Vec<PanelNode>,
}

impl RenderTree {
    pub fn active_panel(&self) -> Option<&PanelNode> {
        self.panels.iter().find(|panel| panel.active)
    }

    pub fn panel(&self, id: FileId) -> Option<&PanelNode> {
        self.panels.iter().find(|panel| panel.id == id)
    }
}

pub fn project(store: &FileStore) -> RenderTree {
    let active = store.active_id();
    let mut tree = RenderTree::default();

    for file in store.list() {
        let is_active = active == Some(file.id);
        tree.tabs.push(TabNode {
            id: file.id,
            label: file.name.clone(),
            active: is_active,
        });
        tree.panels.push(PanelNode {
            id: file.id,
            header: file.name.clone(),
            placeholder: format!("Write your {} code here...", file.language.tag().to_uppercase()),
            content: file.content.clone(),
            active: is_active,
        });
    }
    tree
}

/// A single change between two render trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPatch {
    /// A new tab and panel at `index`.
    Insert { index: usize, tab: TabNode, panel: PanelNode },
    Remove { id: FileId },
    SetActive { id: FileId, active: bool },
    SetContent { id: FileId, content: String },
    /// Records were reordered; the whole tree is replaced.
    Reset(RenderTree),
}

/// Patches that turn `prev` into `next`.
pub fn diff(prev: &RenderTree, next: &RenderTree) -> Vec<RenderPatch> {
    let mut patches = Vec::new();

    let next_ids: HashMap<FileId, usize> =
        next.panels.iter().enumerate().map(|(i, p)| (p.id, i)).collect();
    let prev_panels: HashMap<FileId, &PanelNode> =
        prev.panels.iter().map(|p| (p.id, p)).collect();

    for panel in &prev.panels {
        if !next_ids.contains_key(&panel.id) {
            patches.push(RenderPatch::Remove { id: panel.id });
        }
    }

    // Surviving records must keep their relative order
    let survivors: Vec<FileId> = prev
        .panels
        .iter()
        .filter(|p| next_ids.contains_key(&p.id))
        .map(|p| p.id)
        .collect();
    let next_survivors: Vec<FileId> = next
        .panels
        .iter()
        .filter(|p| prev_panels.contains_key(&p.id))
        .map(|p| p.id)
        .collect();
    if survivors != next_survivors {
        return vec![RenderPatch::Reset(next.clone())];
    }

    for (index, (tab, panel)) in next.tabs.iter().zip(&next.panels).enumerate() {
        match prev_panels.get(&panel.id) {
            None => patches.push(RenderPatch::Insert {
                index,
                tab: tab.clone(),
                panel: panel.clone(),
            }),
            Some(old) => {
                if old.active != panel.active {
                    patches.push(RenderPatch::SetActive {
                        id: panel.id,
                        active: panel.active,
                    });
                }
                if old.content != panel.content {
                    patches.push(RenderPatch::SetContent {
                        id: panel.id,
                        content: panel.content.clone(),
                    });
                }
            }
        }
    }
    patches
}

/// Holds the applied render tree and the text buffers edited by the UI.
#[derive(Debug, Default)]
pub struct TabPanelRenderer {
    tree: RenderTree,
    store_version: Option<u64>,
}

impl TabPanelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &RenderTree {
        &self.tree
    }

    /// Brings the tree up to date with `store`. Returns the applied patches.
    pub fn sync(&mut self, store: &FileStore) -> Vec<RenderPatch> {
        let next = project(store);
        if self.store_version == Some(store.version()) && next == self.tree {
            return Vec::new();
        }
        let patches = diff(&self.tree, &next);
        for patch in &patches {
            self.apply(patch);
        }
        self.store_version = Some(store.version());
        debug_assert_eq!(self.tree, next);
        patches
    }

    /// Drops everything and rebuilds from `store`, as after a load.
    pub fn rebuild(&mut self, store: &FileStore) {
        self.tree = RenderTree::default();
        self.store_version = None;
        self.sync(store);
    }

    /// Mutable text of the panel for `id`, edited in place by the UI.
    pub fn buffer_mut(&mut self, id: FileId) -> Option<&mut String> {
        self.tree
            .panels
            .iter_mut()
            .find(|panel| panel.id == id)
            .map(|panel| &mut panel.content)
    }

    fn apply(&mut self, patch: &RenderPatch) {
        match patch {
            RenderPatch::Insert { index, tab, panel } => {
                let index = (*index).min(self.tree.tabs.len());
                self.tree.tabs.insert(index, tab.clone());
                self.tree.panels.insert(index, panel.clone());
            }
            RenderPatch::Remove { id } => {
                self.tree.tabs.retain(|tab| tab.id != *id);
                self.tree.panels.retain(|panel| panel.id != *id);
            }
            RenderPatch::SetActive { id, active } => {
                if let Some(tab) = self.tree.tabs.iter_mut().find(|tab| tab.id == *id) {
                    tab.active = *active;
                }
                if let Some(panel) = self.tree.panels.iter_mut().find(|panel| panel.id == *id) {
                    panel.active = *active;
                }
            }
            RenderPatch::SetContent { id, content } => {
                if let Some(buffer) = self.buffer_mut(*id) {
                    buffer.clone_from(content);
                }
            }
            RenderPatch::Reset(tree) => self.tree = tree.clone(),
        }
    }
}
