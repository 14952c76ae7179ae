//! Core domain types for tmxmap.
//!
//! This module contains the leaf types the map aggregate is built from:
//! - `Colour` - RGBA colour values decoded from hex strings
//! - `MapOrientation` / `StaggerAxis` / `StaggerIndex` - layout parameters
//! - `Point` / `Rect` / `Polygon` - per-tile pixel geometry
//! - `TileLayer` / `ImageLayer` / `ObjectLayer` - the three layer kinds
//! - `MapObject` - free-form objects owned by object layers
//! - `Tileset` / `TilesetCatalog` - tileset references and external lookup

mod colour;
mod geometry;
mod layer;
mod object;
mod orientation;
mod tileset;

pub use colour::Colour;
pub use geometry::{Point, Polygon, Rect};
pub use layer::{ImageLayer, ObjectLayer, TileLayer};
pub use object::MapObject;
pub use orientation::{MapOrientation, StaggerAxis, StaggerIndex};
pub use tileset::{Tileset, TilesetCatalog};
