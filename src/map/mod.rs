//! The map aggregate.
//!
//! A [`Map`] owns the validated attributes and layer collections produced by
//! [`MapBuilder::finalize`]. Reads borrow directly from the owned
//! collections; the one genuinely derived view - the unified tile+image
//! render ordering - is cached and rebuilt whenever tile or image layer
//! membership changes.

mod builder;
mod grid;
mod objects;

pub use builder::MapBuilder;
pub use grid::TileGrid;

use std::cmp::Ordering;

use crate::error::{MapError, Result};
use crate::types::{
    Colour, ImageLayer, MapOrientation, ObjectLayer, Rect, StaggerAxis, StaggerIndex, TileLayer,
    Tileset,
};

/// A fully finalized 2D tile map.
#[derive(Debug, Clone)]
pub struct Map {
    pub(crate) version: f64,
    pub(crate) format_version: String,
    pub(crate) orientation: MapOrientation,
    pub(crate) render_order: Option<String>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) tile_width: u32,
    pub(crate) tile_height: u32,
    pub(crate) hex_side_length: u32,
    pub(crate) stagger_axis: StaggerAxis,
    pub(crate) stagger_index: StaggerIndex,
    pub(crate) background_colour: Option<Colour>,
    pub(crate) next_object_id: u32,
    pub(crate) name: Option<String>,
    pub(crate) base_path: Option<String>,
    pub(crate) tilesets: Vec<Tileset>,
    pub(crate) tile_layers: Vec<TileLayer>,
    pub(crate) image_layers: Vec<ImageLayer>,
    pub(crate) object_layers: Vec<ObjectLayer>,

    /// Composed tile+image ordering, kept in sync by the layer mutators.
    pub(crate) render_order_cache: Vec<RenderLayerId>,
}

/// Index into one of the map's two renderable layer lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderLayerId {
    Tile(usize),
    Image(usize),
}

/// A borrowed entry of the unified render-layer sequence.
#[derive(Debug, Clone, Copy)]
pub enum RenderLayer<'a> {
    Tile(&'a TileLayer),
    Image(&'a ImageLayer),
}

impl<'a> RenderLayer<'a> {
    /// Composition key the sequence is sorted by.
    pub fn order(&self) -> i32 {
        match self {
            Self::Tile(l) => l.order,
            Self::Image(l) => l.order,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Self::Tile(l) => &l.name,
            Self::Image(l) => &l.name,
        }
    }

    pub fn visible(&self) -> bool {
        match self {
            Self::Tile(l) => l.visible,
            Self::Image(l) => l.visible,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Self::Tile(l) => l.opacity,
            Self::Image(l) => l.opacity,
        }
    }
}

impl Map {
    /// Numeric format version from the map file.
    pub fn version(&self) -> f64 {
        self.version
    }

    /// Dotted format-version string validated at finalize time.
    pub fn format_version(&self) -> &str {
        &self.format_version
    }

    pub fn orientation(&self) -> MapOrientation {
        self.orientation
    }

    /// Tile draw-order hint, passed through untouched.
    pub fn render_order(&self) -> Option<&str> {
        self.render_order.as_deref()
    }

    /// Map width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Grid dimensions as (width, height) in tiles.
    pub fn size_in_tiles(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Per-tile pixel dimensions as (width, height).
    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Hex side length in pixels; meaningful only for hexagonal and
    /// staggered orientations.
    pub fn hex_side_length(&self) -> u32 {
        self.hex_side_length
    }

    pub fn stagger_axis(&self) -> StaggerAxis {
        self.stagger_axis
    }

    pub fn stagger_index(&self) -> StaggerIndex {
        self.stagger_index
    }

    /// Background colour decoded once at finalize time.
    pub fn background_colour(&self) -> Option<Colour> {
        self.background_colour
    }

    /// Counter a loader should mint new object ids from.
    pub fn next_object_id(&self) -> u32 {
        self.next_object_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Order two maps by name. Fails with [`MapError::NameMissing`] when
    /// either side has no name, rather than treating unnamed maps as equal.
    pub fn compare_by_name(&self, other: &Map) -> Result<Ordering> {
        let a = self.name.as_deref().ok_or(MapError::NameMissing)?;
        let b = other.name.as_deref().ok_or(MapError::NameMissing)?;
        Ok(a.cmp(b))
    }

    /// Pixel-space bounding box of the whole map.
    pub fn bounds(&self) -> Rect {
        let (w, h) = self.size_in_pixels();
        Rect::new(0, 0, w, h)
    }

    // -- tilesets --

    /// Tileset references in declaration order.
    pub fn tilesets(&self) -> &[Tileset] {
        &self.tilesets
    }

    /// Mutable access to the tileset list.
    pub fn tilesets_mut(&mut self) -> &mut Vec<Tileset> {
        &mut self.tilesets
    }

    /// The subset of tileset entries that reference an external definition.
    pub fn external_tilesets(&self) -> impl Iterator<Item = &Tileset> {
        self.tilesets.iter().filter(|t| t.is_external())
    }

    // -- layer views --

    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }

    pub fn image_layers(&self) -> &[ImageLayer] {
        &self.image_layers
    }

    pub fn object_layers(&self) -> &[ObjectLayer] {
        &self.object_layers
    }

    /// Tile and image layers merged into one sequence, ascending by `order`.
    /// Layers with equal order keep their relative declaration order (tile
    /// layers before image layers). Object layers are never part of this
    /// sequence.
    pub fn render_layers(&self) -> impl Iterator<Item = RenderLayer<'_>> {
        self.render_order_cache.iter().map(move |id| match *id {
            RenderLayerId::Tile(i) => RenderLayer::Tile(&self.tile_layers[i]),
            RenderLayerId::Image(i) => RenderLayer::Image(&self.image_layers[i]),
        })
    }

    // -- renderable layer mutation --

    /// Append a tile layer and recompose the render ordering.
    pub fn add_tile_layer(&mut self, layer: TileLayer) {
        self.tile_layers.push(layer);
        self.rebuild_render_order();
    }

    /// Remove the tile layer at `index`, or `None` if out of range.
    pub fn remove_tile_layer(&mut self, index: usize) -> Option<TileLayer> {
        if index >= self.tile_layers.len() {
            return None;
        }
        let layer = self.tile_layers.remove(index);
        self.rebuild_render_order();
        Some(layer)
    }

    /// Append an image layer and recompose the render ordering.
    pub fn add_image_layer(&mut self, layer: ImageLayer) {
        self.image_layers.push(layer);
        self.rebuild_render_order();
    }

    /// Remove the image layer at `index`, or `None` if out of range.
    pub fn remove_image_layer(&mut self, index: usize) -> Option<ImageLayer> {
        if index >= self.image_layers.len() {
            return None;
        }
        let layer = self.image_layers.remove(index);
        self.rebuild_render_order();
        Some(layer)
    }

    // -- path propagation --

    /// Base path of the map file.
    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// Store the map file's path and fan the containing directory out to
    /// every image layer and tileset so each can resolve its own relative
    /// asset reference. Repeated calls overwrite.
    pub fn set_base_path(&mut self, path: impl Into<String>) {
        let path = path.into();
        let dir = containing_dir(&path);

        for layer in &mut self.image_layers {
            layer.set_base_path(dir.clone());
        }

        for tileset in &mut self.tilesets {
            tileset.set_base_path(dir.clone());
        }

        self.base_path = Some(path);
    }

    /// Rebuild the composed tile+image ordering. Stable sort, so equal-order
    /// layers keep their relative declaration order.
    pub(crate) fn rebuild_render_order(&mut self) {
        let mut entries: Vec<RenderLayerId> = (0..self.tile_layers.len())
            .map(RenderLayerId::Tile)
            .chain((0..self.image_layers.len()).map(RenderLayerId::Image))
            .collect();

        entries.sort_by_key(|id| match *id {
            RenderLayerId::Tile(i) => self.tile_layers[i].order,
            RenderLayerId::Image(i) => self.image_layers[i].order,
        });

        self.render_order_cache = entries;
    }
}

/// Containing directory of a path, including the trailing separator.
/// A path without separators has no containing directory.
fn containing_dir(path: &str) -> String {
    match path.rfind(['/', '\\']) {
        Some(i) => path[..=i].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MapObject;

    fn orthogonal_map() -> Map {
        let mut builder = MapBuilder::new();
        builder.format_version = "1.1.5".to_string();
        builder.orientation = Some("orthogonal".to_string());
        builder.width = 4;
        builder.height = 3;
        builder.tile_width = 32;
        builder.tile_height = 32;
        builder.finalize().unwrap()
    }

    #[test]
    fn test_basic_accessors() {
        let map = orthogonal_map();
        assert_eq!(map.orientation(), MapOrientation::Orthogonal);
        assert_eq!(map.size_in_tiles(), (4, 3));
        assert_eq!(map.tile_size(), (32, 32));
        assert_eq!(map.bounds(), Rect::new(0, 0, 128, 96));
    }

    #[test]
    fn test_render_layers_sorted_and_stable() {
        let mut map = orthogonal_map();
        map.add_tile_layer(TileLayer::new("ground", 0, 4, 3));
        map.add_tile_layer(TileLayer::new("walls", 2, 4, 3));
        map.add_image_layer(ImageLayer::new("backdrop", -1, "sky.png"));
        map.add_image_layer(ImageLayer::new("fog", 2, "fog.png"));

        let names: Vec<&str> = map.render_layers().map(|l| l.name()).collect();
        // equal order (walls/fog at 2): tile layer declared first stays first
        assert_eq!(names, vec!["backdrop", "ground", "walls", "fog"]);

        let orders: Vec<i32> = map.render_layers().map(|l| l.order()).collect();
        assert!(orders.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_render_layers_exclude_object_layers() {
        let mut map = orthogonal_map();
        map.add_tile_layer(TileLayer::new("ground", 0, 4, 3));
        map.add_object_layer(ObjectLayer::new("actors"));

        assert_eq!(map.render_layers().count(), 1);
    }

    #[test]
    fn test_render_order_tracks_membership() {
        let mut map = orthogonal_map();
        map.add_tile_layer(TileLayer::new("ground", 1, 4, 3));
        map.add_image_layer(ImageLayer::new("backdrop", 0, "sky.png"));
        assert_eq!(map.render_layers().count(), 2);

        let removed = map.remove_image_layer(0).unwrap();
        assert_eq!(removed.name, "backdrop");
        let names: Vec<&str> = map.render_layers().map(|l| l.name()).collect();
        assert_eq!(names, vec!["ground"]);

        assert!(map.remove_image_layer(5).is_none());
        assert!(map.remove_tile_layer(5).is_none());
    }

    #[test]
    fn test_compare_by_name() {
        let mut a = orthogonal_map();
        let mut b = orthogonal_map();

        assert!(matches!(a.compare_by_name(&b), Err(MapError::NameMissing)));

        a.set_name("alpha");
        assert!(matches!(a.compare_by_name(&b), Err(MapError::NameMissing)));

        b.set_name("beta");
        assert_eq!(a.compare_by_name(&b).unwrap(), Ordering::Less);
        assert_eq!(b.compare_by_name(&a).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_set_base_path_fans_out() {
        let mut map = orthogonal_map();
        map.add_image_layer(ImageLayer::new("backdrop", 0, "sky.png"));
        map.tilesets_mut().push(Tileset::external(1, "props.tsx"));

        map.set_base_path("assets/maps/overworld.tmx");

        assert_eq!(map.base_path(), Some("assets/maps/overworld.tmx"));
        assert_eq!(
            map.image_layers()[0].image_path(),
            Some("assets/maps/sky.png".to_string())
        );
        assert_eq!(
            map.tilesets()[0].source_path(),
            Some("assets/maps/props.tsx".to_string())
        );

        // idempotent overwrite
        map.set_base_path("elsewhere/overworld.tmx");
        assert_eq!(
            map.tilesets()[0].source_path(),
            Some("elsewhere/props.tsx".to_string())
        );
    }

    #[test]
    fn test_external_tilesets_filter() {
        let mut map = orthogonal_map();
        map.tilesets_mut()
            .push(Tileset::inline("terrain", 1, "terrain.png"));
        map.tilesets_mut().push(Tileset::external(65, "props.tsx"));
        map.tilesets_mut().push(Tileset::external(129, "npcs.tsx"));

        let external: Vec<_> = map.external_tilesets().collect();
        assert_eq!(external.len(), 2);
        assert!(external.iter().all(|t| t.is_external()));
        // declaration order preserved
        assert_eq!(external[0].source.as_deref(), Some("props.tsx"));
        assert_eq!(external[1].source.as_deref(), Some("npcs.tsx"));
    }

    #[test]
    fn test_containing_dir() {
        assert_eq!(containing_dir("a/b/map.tmx"), "a/b/");
        assert_eq!(containing_dir("map.tmx"), "");
        assert_eq!(containing_dir("a\\b\\map.tmx"), "a\\b\\");
        assert_eq!(containing_dir("a/"), "a/");
    }

    #[test]
    fn test_object_layer_mutation_keeps_render_order_intact() {
        let mut map = orthogonal_map();
        map.add_tile_layer(TileLayer::new("ground", 0, 4, 3));

        let mut actors = ObjectLayer::new("actors");
        actors.add_object(MapObject::new(1, "npc"));
        map.add_object_layer(actors);
        map.remove_object_layer(0);

        assert_eq!(map.render_layers().count(), 1);
    }
}
