//! Free-form map objects placed on object layers.

use serde::{Deserialize, Serialize};

/// A free-form object placed on an object layer: spawn point, trigger,
/// collision box, and so on.
///
/// Ids are expected to be unique across the whole map (the loader mints them
/// from the map's next-object-id counter); lookups tolerate duplicates by
/// returning the first match in layer order. An object does not point back
/// at its layer - ownership is resolved through
/// [`Map::object_layer_containing`](crate::Map::object_layer_containing).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapObject {
    pub id: u32,

    pub name: Option<String>,

    /// Free-form type tag used by [`Map::objects_with_type`](crate::Map::objects_with_type).
    #[serde(rename = "type")]
    pub object_type: String,

    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl MapObject {
    /// Create an object with an id and type tag, positioned at the origin.
    pub fn new(id: u32, object_type: impl Into<String>) -> Self {
        Self {
            id,
            object_type: object_type.into(),
            ..Self::default()
        }
    }

    /// Whether this object's type tag equals any of the given tags.
    pub fn has_type(&self, types: &[&str]) -> bool {
        types.iter().any(|t| self.object_type == *t)
    }
}
