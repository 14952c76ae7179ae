//! Tileset references and the external-tileset catalog.
//!
//! A map's tileset list keeps declaration order. Each entry is either fully
//! inline (image and geometry on the entry itself) or a reference to an
//! external tileset file. The map never embeds the external definition; it
//! stores the source path and resolution goes through a [`TilesetCatalog`]
//! keyed by that path.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A tileset reference as declared by a map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tileset {
    pub name: Option<String>,

    /// First global tile id covered by this tileset.
    #[serde(rename = "firstgid")]
    pub first_gid: u32,

    #[serde(rename = "tilewidth")]
    pub tile_width: u32,

    #[serde(rename = "tileheight")]
    pub tile_height: u32,

    #[serde(rename = "tilecount")]
    pub tile_count: u32,

    pub columns: u32,

    /// Path to an external tileset definition, relative to the map's base
    /// path. `None` for inline tilesets.
    pub source: Option<String>,

    /// Atlas image for inline tilesets, relative to the map's base path.
    pub image: Option<String>,

    /// Containing directory of the map file, fanned out by
    /// [`Map::set_base_path`](crate::Map::set_base_path).
    #[serde(skip)]
    base_path: Option<String>,
}

impl Tileset {
    /// Create an inline tileset entry.
    pub fn inline(name: impl Into<String>, first_gid: u32, image: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            first_gid,
            image: Some(image.into()),
            ..Self::default()
        }
    }

    /// Create a reference to an external tileset definition.
    pub fn external(first_gid: u32, source: impl Into<String>) -> Self {
        Self {
            first_gid,
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// Whether this entry points at an externally defined tileset.
    pub fn is_external(&self) -> bool {
        self.source.is_some()
    }

    /// Store the containing directory used to resolve `source` and `image`.
    pub fn set_base_path(&mut self, path: impl Into<String>) {
        self.base_path = Some(path.into());
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// External source resolved against the base path (plain concatenation).
    pub fn source_path(&self) -> Option<String> {
        let source = self.source.as_deref()?;
        match self.base_path.as_deref() {
            Some(base) => Some(format!("{}{}", base, source)),
            None => Some(source.to_string()),
        }
    }

    /// Atlas image resolved against the base path.
    pub fn image_path(&self) -> Option<String> {
        let image = self.image.as_deref()?;
        match self.base_path.as_deref() {
            Some(base) => Some(format!("{}{}", base, image)),
            None => Some(image.to_string()),
        }
    }
}

/// Path-keyed storage for externally defined tilesets.
///
/// The loader parses each external tileset file once and registers the
/// definition here; maps resolve their external entries against the catalog
/// instead of holding live references.
#[derive(Debug, Clone, Default)]
pub struct TilesetCatalog {
    definitions: HashMap<String, Tileset>,
}

impl TilesetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under the path maps use to reference it.
    pub fn insert(&mut self, path: impl Into<String>, definition: Tileset) {
        self.definitions.insert(path.into(), definition);
    }

    /// Look up a definition by path.
    pub fn get(&self, path: &str) -> Option<&Tileset> {
        self.definitions.get(path)
    }

    /// Resolve a map's tileset entry. Inline entries and unregistered paths
    /// yield `None`.
    pub fn resolve(&self, entry: &Tileset) -> Option<&Tileset> {
        self.definitions.get(&entry.source_path()?)
    }

    /// All registered paths.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
