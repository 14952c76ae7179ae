//! Layer types: tile grids, image overlays, and object collections.
//!
//! Tile and image layers share the `order` key used to merge them into one
//! render sequence; object layers sit outside that sequence and are walked
//! through the map's object query API instead.

use serde::{Deserialize, Serialize};

use super::MapObject;

fn default_visible() -> bool {
    true
}

fn default_opacity() -> f32 {
    1.0
}

/// A renderable grid of tile references covering the full map extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayer {
    pub name: String,

    /// Composition key within the unified render-layer sequence.
    pub order: i32,

    pub visible: bool,
    pub opacity: f32,

    /// Layer extent in tiles.
    pub width: u32,
    pub height: u32,

    /// Row-major global tile ids, `width * height` entries. Zero means an
    /// empty cell.
    pub tiles: Vec<u32>,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            name: String::new(),
            order: 0,
            visible: default_visible(),
            opacity: default_opacity(),
            width: 0,
            height: 0,
            tiles: Vec::new(),
        }
    }
}

impl TileLayer {
    /// Create an empty layer of the given extent.
    pub fn new(name: impl Into<String>, order: i32, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            order,
            width,
            height,
            tiles: vec![0; (width * height) as usize],
            ..Self::default()
        }
    }

    /// Global tile id at cell `(x, y)`, or `None` outside the layer extent.
    pub fn tile_at(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get((y * self.width + x) as usize).copied()
    }
}

/// A renderable single-image overlay with its own ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageLayer {
    pub name: String,

    /// Composition key within the unified render-layer sequence.
    pub order: i32,

    pub visible: bool,
    pub opacity: f32,

    /// Image source, relative to the map's base path.
    pub image: String,

    /// Hex colour treated as transparent when drawing the image.
    #[serde(rename = "trans")]
    pub transparent_colour: Option<String>,

    /// Containing directory of the map file, fanned out by
    /// [`Map::set_base_path`](crate::Map::set_base_path).
    #[serde(skip)]
    base_path: Option<String>,
}

impl Default for ImageLayer {
    fn default() -> Self {
        Self {
            name: String::new(),
            order: 0,
            visible: default_visible(),
            opacity: default_opacity(),
            image: String::new(),
            transparent_colour: None,
            base_path: None,
        }
    }
}

impl ImageLayer {
    pub fn new(name: impl Into<String>, order: i32, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order,
            image: image.into(),
            ..Self::default()
        }
    }

    /// Store the containing directory used to resolve the image source.
    pub fn set_base_path(&mut self, path: impl Into<String>) {
        self.base_path = Some(path.into());
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// Image source resolved against the base path (plain concatenation;
    /// `None` until a base path has been set).
    pub fn image_path(&self) -> Option<String> {
        self.base_path
            .as_ref()
            .map(|base| format!("{}{}", base, self.image))
    }
}

/// A named collection of free-form map objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectLayer {
    pub name: String,

    pub visible: bool,
    pub opacity: f32,

    pub objects: Vec<MapObject>,
}

impl Default for ObjectLayer {
    fn default() -> Self {
        Self {
            name: String::new(),
            visible: default_visible(),
            opacity: default_opacity(),
            objects: Vec::new(),
        }
    }
}

impl ObjectLayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The layer's objects in declaration order.
    pub fn objects(&self) -> &[MapObject] {
        &self.objects
    }

    /// Objects whose type tag matches any of the given tags, in declaration
    /// order. Each object appears at most once however many tags it matches.
    pub fn objects_with_type<'a>(&'a self, types: &[&str]) -> Vec<&'a MapObject> {
        self.objects.iter().filter(|o| o.has_type(types)).collect()
    }

    /// Append an object to the layer.
    pub fn add_object(&mut self, object: MapObject) {
        self.objects.push(object);
    }

    /// Remove the first object with the given id, returning it if found.
    pub fn remove_object(&mut self, id: u32) -> Option<MapObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_layer_tile_at() {
        let mut layer = TileLayer::new("ground", 0, 3, 2);
        layer.tiles = vec![1, 2, 3, 4, 5, 6];

        assert_eq!(layer.tile_at(0, 0), Some(1));
        assert_eq!(layer.tile_at(2, 0), Some(3));
        assert_eq!(layer.tile_at(0, 1), Some(4));
        assert_eq!(layer.tile_at(2, 1), Some(6));
        assert_eq!(layer.tile_at(3, 0), None);
        assert_eq!(layer.tile_at(0, 2), None);
    }

    #[test]
    fn test_tile_layer_defaults() {
        let layer = TileLayer::new("ground", 1, 2, 2);
        assert!(layer.visible);
        assert_eq!(layer.opacity, 1.0);
        assert_eq!(layer.tiles, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_image_layer_path_resolution() {
        let mut layer = ImageLayer::new("backdrop", -1, "sky.png");
        assert_eq!(layer.image_path(), None);

        layer.set_base_path("maps/");
        assert_eq!(layer.base_path(), Some("maps/"));
        assert_eq!(layer.image_path(), Some("maps/sky.png".to_string()));
    }

    #[test]
    fn test_object_layer_queries() {
        let mut layer = ObjectLayer::new("actors");
        layer.add_object(MapObject::new(1, "npc"));
        layer.add_object(MapObject::new(2, "item"));
        layer.add_object(MapObject::new(3, "npc"));

        let npcs = layer.objects_with_type(&["npc"]);
        assert_eq!(npcs.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1, 3]);

        // matching several tags still yields each object once
        let both = layer.objects_with_type(&["npc", "item"]);
        assert_eq!(both.len(), 3);

        assert!(layer.objects_with_type(&[]).is_empty());
    }

    #[test]
    fn test_object_layer_remove() {
        let mut layer = ObjectLayer::new("actors");
        layer.add_object(MapObject::new(1, "npc"));
        layer.add_object(MapObject::new(2, "npc"));

        let removed = layer.remove_object(1).unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(layer.objects().len(), 1);
        assert!(layer.remove_object(99).is_none());
    }
}
