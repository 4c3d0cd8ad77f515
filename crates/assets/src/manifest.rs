use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::AssetError;

/// Kind of a declared source, mirroring what the loader knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    Texture,
    CubeTexture,
    EnvMap,
    GltfModel,
    Audio,
}

/// One declared asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub path: String,
}

impl Source {
    pub fn new(name: impl Into<String>, kind: SourceKind, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            path: path.into(),
        }
    }
}

/// The full list of assets the experience declares up front.
///
/// Serialized as a bare JSON array of `{ name, type, path }` objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceManifest {
    sources: Vec<Source>,
}

impl SourceManifest {
    pub fn new(sources: Vec<Source>) -> Result<Self, AssetError> {
        let manifest = Self { sources };
        manifest.validate()?;
        Ok(manifest)
    }

    /// Built-in manifest for the shipped scenes.
    pub fn builtin() -> Self {
        Self {
            sources: vec![
                Source::new(
                    "waterNormalTexture",
                    SourceKind::Texture,
                    "textures/water/waternormals.jpg",
                ),
                Source::new("skyEnvMap", SourceKind::EnvMap, "env_maps/cloudy.hdr"),
                Source::new(
                    "plankton1Model",
                    SourceKind::GltfModel,
                    "models/plankton1.glb",
                ),
                Source::new(
                    "FallingLeaves",
                    SourceKind::GltfModel,
                    "models/falling_leaves.glb",
                ),
                Source::new("chestModel", SourceKind::GltfModel, "models/chest.glb"),
                Source::new("ambientHum", SourceKind::Audio, "audio/ambient_hum.mp3"),
                Source::new("footsteps", SourceKind::Audio, "audio/footsteps.mp3"),
            ],
        }
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn get(&self, name: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Source names must be unique.
    pub fn validate(&self) -> Result<(), AssetError> {
        let mut seen = BTreeSet::new();
        for source in &self.sources {
            if !seen.insert(source.name.as_str()) {
                return Err(AssetError::DuplicateSource(source.name.clone()));
            }
        }
        Ok(())
    }

    /// Load a manifest from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let file = std::fs::File::open(path)?;
        let manifest: Self = serde_json::from_reader(file)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Save the manifest to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AssetError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_valid() {
        let manifest = SourceManifest::builtin();
        assert!(manifest.validate().is_ok());
        assert!(manifest.get("plankton1Model").is_some());
        assert_eq!(
            manifest.get("skyEnvMap").map(|s| s.kind),
            Some(SourceKind::EnvMap)
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = SourceManifest::new(vec![
            Source::new("a", SourceKind::Texture, "a.png"),
            Source::new("a", SourceKind::Audio, "a.mp3"),
        ]);
        assert!(matches!(result, Err(AssetError::DuplicateSource(name)) if name == "a"));
    }

    #[test]
    fn parses_loader_style_json() {
        let json = r#"[
            { "name": "skyEnvMap", "type": "envMap", "path": "env_maps/cloudy.hdr" },
            { "name": "plankton1Model", "type": "gltfModel", "path": "models/plankton1.glb" }
        ]"#;
        let manifest: SourceManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.sources()[1].kind, SourceKind::GltfModel);
    }

    #[test]
    fn save_and_load() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let manifest = SourceManifest::builtin();
        manifest.save(tmp.path()).unwrap();

        let loaded = SourceManifest::load(tmp.path()).unwrap();
        assert_eq!(loaded, manifest);
    }
}
