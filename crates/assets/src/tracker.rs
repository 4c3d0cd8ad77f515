use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::AssetError;
use crate::manifest::{SourceKind, SourceManifest};

/// A named animation clip carried by a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    /// Clip length in seconds.
    pub duration: f32,
}

/// What the loader handed back for a source. Payloads stay opaque to the core.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedItem {
    Texture,
    EnvMap,
    Model { animations: Vec<AnimationClip> },
    Audio { duration: f32 },
}

impl LoadedItem {
    /// Placeholder item matching a source kind, for headless runs.
    pub fn placeholder(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Texture | SourceKind::CubeTexture => Self::Texture,
            SourceKind::EnvMap => Self::EnvMap,
            SourceKind::GltfModel => Self::Model {
                animations: Vec::new(),
            },
            SourceKind::Audio => Self::Audio { duration: 0.0 },
        }
    }
}

/// Successfully loaded items, keyed by source name.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    items: BTreeMap<String, LoadedItem>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, item: LoadedItem) {
        self.items.insert(name.into(), item);
    }

    pub fn get(&self, name: &str) -> Option<&LoadedItem> {
        self.items.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// First animation clip of a model, if the model loaded and has one.
    pub fn first_clip(&self, model: &str) -> Option<&AnimationClip> {
        match self.items.get(model) {
            Some(LoadedItem::Model { animations }) => animations.first(),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Loading progress as reported to the loading overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub loaded: usize,
    pub total: usize,
}

impl Progress {
    /// Completion ratio in [0, 1]; an empty manifest counts as complete.
    pub fn ratio(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.loaded as f32 / self.total as f32
        }
    }

    pub fn percent(&self) -> u32 {
        (self.ratio() * 100.0).round() as u32
    }
}

/// Events emitted to the core. `Ready` is emitted exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceEvent {
    Progress { loaded: usize, total: usize },
    Ready,
}

/// Tracks the loader's completion callbacks against the declared manifest.
///
/// Failed items count as finished so the ready signal still fires; the
/// experience then runs without them.
#[derive(Debug)]
pub struct ResourceTracker {
    manifest: SourceManifest,
    finished: BTreeSet<String>,
    failed: BTreeMap<String, String>,
    catalog: ResourceCatalog,
    ready_emitted: bool,
    pending: Vec<ResourceEvent>,
}

impl ResourceTracker {
    pub fn new(manifest: SourceManifest) -> Self {
        let mut tracker = Self {
            manifest,
            finished: BTreeSet::new(),
            failed: BTreeMap::new(),
            catalog: ResourceCatalog::new(),
            ready_emitted: false,
            pending: Vec::new(),
        };
        tracker.emit_ready_if_done();
        tracker
    }

    pub fn manifest(&self) -> &SourceManifest {
        &self.manifest
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    pub fn progress(&self) -> Progress {
        Progress {
            loaded: self.finished.len(),
            total: self.manifest.len(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.finished.len() == self.manifest.len()
    }

    /// Sources that failed to load, with the loader's reason.
    pub fn failures(&self) -> &BTreeMap<String, String> {
        &self.failed
    }

    /// Record a successful load.
    pub fn mark_loaded(&mut self, name: &str, item: LoadedItem) -> Result<(), AssetError> {
        self.finish(name)?;
        tracing::debug!(source = name, "resource loaded");
        self.catalog.insert(name, item);
        self.after_finish();
        Ok(())
    }

    /// Record a failed load. Logged, then treated as finished.
    pub fn mark_failed(&mut self, name: &str, reason: impl Into<String>) -> Result<(), AssetError> {
        self.finish(name)?;
        let reason = reason.into();
        tracing::warn!(source = name, %reason, "resource failed to load; continuing without it");
        self.failed.insert(name.to_string(), reason);
        self.after_finish();
        Ok(())
    }

    /// Mark every remaining source as loaded with a placeholder item.
    pub fn load_all_placeholders(&mut self) {
        let pending: Vec<(String, SourceKind)> = self
            .manifest
            .sources()
            .iter()
            .filter(|s| !self.finished.contains(&s.name))
            .map(|s| (s.name.clone(), s.kind))
            .collect();
        for (name, kind) in pending {
            if let Err(e) = self.mark_loaded(&name, LoadedItem::placeholder(kind)) {
                tracing::warn!("placeholder load failed: {e}");
            }
        }
    }

    /// Drain events emitted since the previous call.
    pub fn drain_events(&mut self) -> Vec<ResourceEvent> {
        std::mem::take(&mut self.pending)
    }

    fn finish(&mut self, name: &str) -> Result<(), AssetError> {
        if self.manifest.get(name).is_none() {
            return Err(AssetError::UnknownSource(name.to_string()));
        }
        if !self.finished.insert(name.to_string()) {
            return Err(AssetError::AlreadyFinished(name.to_string()));
        }
        Ok(())
    }

    fn after_finish(&mut self) {
        let progress = self.progress();
        self.pending.push(ResourceEvent::Progress {
            loaded: progress.loaded,
            total: progress.total,
        });
        self.emit_ready_if_done();
    }

    fn emit_ready_if_done(&mut self) {
        if self.ready_emitted || !self.is_ready() {
            return;
        }
        self.ready_emitted = true;
        tracing::info!(
            loaded = self.catalog.len(),
            failed = self.failed.len(),
            "all declared resources finished"
        );
        self.pending.push(ResourceEvent::Ready);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Source;

    fn two_sources() -> SourceManifest {
        SourceManifest::new(vec![
            Source::new("model", SourceKind::GltfModel, "m.glb"),
            Source::new("hum", SourceKind::Audio, "hum.mp3"),
        ])
        .unwrap()
    }

    #[test]
    fn progress_then_ready() {
        let mut tracker = ResourceTracker::new(two_sources());
        assert!(tracker.drain_events().is_empty());

        tracker
            .mark_loaded(
                "model",
                LoadedItem::Model {
                    animations: vec![AnimationClip {
                        name: "fall".into(),
                        duration: 4.0,
                    }],
                },
            )
            .unwrap();
        assert_eq!(
            tracker.drain_events(),
            vec![ResourceEvent::Progress {
                loaded: 1,
                total: 2
            }]
        );
        assert!(!tracker.is_ready());

        tracker
            .mark_loaded("hum", LoadedItem::Audio { duration: 12.0 })
            .unwrap();
        let events = tracker.drain_events();
        assert_eq!(events.last(), Some(&ResourceEvent::Ready));
        assert!(tracker.is_ready());
        assert_eq!(tracker.catalog().first_clip("model").map(|c| c.duration), Some(4.0));
    }

    #[test]
    fn failure_still_reaches_ready() {
        let mut tracker = ResourceTracker::new(two_sources());
        tracker.mark_failed("model", "404").unwrap();
        tracker
            .mark_loaded("hum", LoadedItem::Audio { duration: 1.0 })
            .unwrap();
        assert!(tracker.is_ready());
        assert!(tracker.drain_events().contains(&ResourceEvent::Ready));
        assert!(!tracker.catalog().contains("model"));
        assert_eq!(tracker.failures().get("model").map(String::as_str), Some("404"));
    }

    #[test]
    fn ready_is_emitted_once() {
        let mut tracker = ResourceTracker::new(two_sources());
        tracker.load_all_placeholders();
        tracker.load_all_placeholders();
        let readies = tracker
            .drain_events()
            .into_iter()
            .filter(|e| *e == ResourceEvent::Ready)
            .count();
        assert_eq!(readies, 1);
    }

    #[test]
    fn empty_manifest_is_ready_immediately() {
        let mut tracker = ResourceTracker::new(SourceManifest::default());
        assert!(tracker.is_ready());
        assert_eq!(tracker.drain_events(), vec![ResourceEvent::Ready]);
        assert_eq!(tracker.progress().percent(), 100);
    }

    #[test]
    fn unknown_and_repeated_sources_error() {
        let mut tracker = ResourceTracker::new(two_sources());
        assert!(matches!(
            tracker.mark_loaded("nope", LoadedItem::Texture),
            Err(AssetError::UnknownSource(_))
        ));
        tracker.mark_loaded("hum", LoadedItem::Audio { duration: 1.0 }).unwrap();
        assert!(matches!(
            tracker.mark_failed("hum", "late"),
            Err(AssetError::AlreadyFinished(_))
        ));
    }

    #[test]
    fn progress_percent_rounds() {
        let p = Progress { loaded: 1, total: 3 };
        assert_eq!(p.percent(), 33);
    }
}
