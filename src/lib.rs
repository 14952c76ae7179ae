//! tmxmap - in-memory model for versioned 2D tile maps
//!
//! A library for holding a loaded tile map: attributes, tile/image/object
//! layers, tileset references, and per-tile geometry across orientations.
//! An external deserializer populates a [`MapBuilder`] and calls
//! [`MapBuilder::finalize`]; everything after that is queries and targeted
//! mutation on the resulting [`Map`].

pub mod error;
pub mod map;
pub mod types;
pub mod version;

pub use error::{MapError, Result};
pub use map::{Map, MapBuilder, RenderLayer, TileGrid};
pub use types::{
    Colour, ImageLayer, MapObject, MapOrientation, ObjectLayer, Point, Polygon, Rect, StaggerAxis,
    StaggerIndex, TileLayer, Tileset, TilesetCatalog,
};
pub use version::{check_version, FILE_EXTENSION, MAX_SUPPORTED_VERSION};
