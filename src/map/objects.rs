//! Cross-layer object query and mutation.
//!
//! All queries walk the object layers in declaration order and, within a
//! layer, the objects in declaration order. Ids are expected to be unique
//! map-wide; when they are not, the first match wins.

use crate::types::{MapObject, ObjectLayer};

use super::Map;

impl Map {
    /// The first object layer containing an object with the given id.
    pub fn object_layer_containing(&self, id: u32) -> Option<&ObjectLayer> {
        self.object_layers
            .iter()
            .find(|layer| layer.objects().iter().any(|o| o.id == id))
    }

    /// The first object with the given id across all layers.
    pub fn object(&self, id: u32) -> Option<&MapObject> {
        self.object_layers
            .iter()
            .flat_map(|layer| layer.objects())
            .find(|o| o.id == id)
    }

    /// All objects whose type tag matches any of the given tags, in layer
    /// order then intra-layer order. No tags means no filter is applied and
    /// the result is empty - not "all objects".
    pub fn objects_with_type<'a>(&'a self, types: &[&str]) -> Vec<&'a MapObject> {
        if types.is_empty() {
            return Vec::new();
        }

        self.object_layers
            .iter()
            .flat_map(|layer| layer.objects_with_type(types))
            .collect()
    }

    /// Every object across every layer, in layer order then intra-layer
    /// order.
    pub fn objects(&self) -> Vec<&MapObject> {
        self.object_layers
            .iter()
            .flat_map(|layer| layer.objects())
            .collect()
    }

    /// Remove the first object with the given id. Scanning stops at the
    /// first layer containing a match, even if other layers hold duplicates.
    /// Returns `None` without touching anything when no layer matches.
    pub fn remove_object(&mut self, id: u32) -> Option<MapObject> {
        self.object_layers
            .iter_mut()
            .find_map(|layer| layer.remove_object(id))
    }

    /// Append an object layer.
    pub fn add_object_layer(&mut self, layer: ObjectLayer) {
        self.object_layers.push(layer);
    }

    /// Insert an object layer at `index`. An index past the end appends,
    /// so the insertion always succeeds.
    pub fn insert_object_layer(&mut self, index: usize, layer: ObjectLayer) {
        let index = index.min(self.object_layers.len());
        self.object_layers.insert(index, layer);
    }

    /// Remove the object layer at `index`, or `None` if out of range.
    pub fn remove_object_layer(&mut self, index: usize) -> Option<ObjectLayer> {
        if index >= self.object_layers.len() {
            return None;
        }
        Some(self.object_layers.remove(index))
    }
}
