//! Two-phase map construction.
//!
//! An external deserializer populates a [`MapBuilder`]'s raw fields in any
//! order (the fields carry the map format's attribute spellings so a serde
//! deserializer can do it directly), then [`MapBuilder::finalize`] validates
//! everything and produces an immutable [`Map`]. The builder is consumed, so
//! finalize runs exactly once per instance and no query can observe a
//! partially initialized map.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::types::{Colour, ImageLayer, ObjectLayer, TileLayer, Tileset};
use crate::version::check_version;

use super::Map;

/// Raw map description, one record per map file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapBuilder {
    pub version: f64,

    /// Dotted format-version string, e.g. `"1.1.5"`.
    #[serde(rename = "tiledversion")]
    pub format_version: String,

    pub orientation: Option<String>,

    #[serde(rename = "renderorder")]
    pub render_order: Option<String>,

    pub width: u32,
    pub height: u32,

    #[serde(rename = "tilewidth")]
    pub tile_width: u32,

    #[serde(rename = "tileheight")]
    pub tile_height: u32,

    #[serde(rename = "hexsidelength")]
    pub hex_side_length: u32,

    #[serde(rename = "staggeraxis")]
    pub stagger_axis: Option<String>,

    #[serde(rename = "staggerindex")]
    pub stagger_index: Option<String>,

    #[serde(rename = "backgroundcolor")]
    pub background_colour: Option<String>,

    #[serde(rename = "nextobjectid")]
    pub next_object_id: u32,

    pub name: Option<String>,

    pub tilesets: Vec<Tileset>,

    #[serde(rename = "layers")]
    pub tile_layers: Vec<TileLayer>,

    #[serde(rename = "imagelayers")]
    pub image_layers: Vec<ImageLayer>,

    #[serde(rename = "objectgroups")]
    pub object_layers: Vec<ObjectLayer>,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the raw fields and produce the finalized map.
    ///
    /// Performs, in order: the format-version gate, eager parsing of the
    /// orientation and stagger attributes, background-colour decoding, and
    /// composition of the unified render-layer ordering.
    pub fn finalize(self) -> Result<Map> {
        check_version(&self.format_version)?;

        let orientation = parse_attribute(self.orientation.as_deref())?;
        let stagger_axis = parse_attribute(self.stagger_axis.as_deref())?;
        let stagger_index = parse_attribute(self.stagger_index.as_deref())?;

        let background_colour = match self.background_colour.as_deref() {
            Some(raw) if !raw.is_empty() => Some(Colour::from_hex(raw)?),
            _ => None,
        };

        let mut map = Map {
            version: self.version,
            format_version: self.format_version,
            orientation,
            render_order: self.render_order,
            width: self.width,
            height: self.height,
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            hex_side_length: self.hex_side_length,
            stagger_axis,
            stagger_index,
            background_colour,
            next_object_id: self.next_object_id,
            name: self.name,
            base_path: None,
            tilesets: self.tilesets,
            tile_layers: self.tile_layers,
            image_layers: self.image_layers,
            object_layers: self.object_layers,
            render_order_cache: Vec::new(),
        };

        map.rebuild_render_order();
        Ok(map)
    }
}

/// Parse an optional raw attribute into its enum; a missing or empty string
/// falls back to the enum's `Undefined` default, an unrecognized one fails.
fn parse_attribute<T>(raw: Option<&str>) -> Result<T>
where
    T: FromStr<Err = MapError> + Default,
{
    match raw {
        Some(s) if !s.is_empty() => s.parse(),
        _ => Ok(T::default()),
    }
}
