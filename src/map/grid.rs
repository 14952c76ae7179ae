//! Per-tile geometry and pixel-space extents.
//!
//! Orthogonal maps get plain rectangles; hexagonal maps get stagger-aware
//! hexagons. Isometric, staggered, and shifted orientations have no
//! implemented geometry yet and yield empty cells - see DESIGN.md.

use crate::types::{MapOrientation, Polygon, StaggerAxis};

use super::Map;

/// Per-tile shapes for a whole map, indexed `[x][y]`.
///
/// Cells are `None` for orientations without implemented geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    cells: Vec<Vec<Option<Polygon>>>,
}

impl TileGrid {
    fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![None; height as usize]; width as usize],
        }
    }

    /// Grid width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Shape of the tile at `(x, y)`, or `None` outside the grid or where
    /// no geometry exists.
    pub fn get(&self, x: u32, y: u32) -> Option<&Polygon> {
        self.cells
            .get(x as usize)?
            .get(y as usize)?
            .as_ref()
    }

    fn set(&mut self, x: u32, y: u32, polygon: Polygon) {
        self.cells[x as usize][y as usize] = Some(polygon);
    }
}

impl Map {
    /// Compute the per-tile shape grid for this map's orientation.
    pub fn tile_grid(&self) -> TileGrid {
        match self.orientation {
            MapOrientation::Orthogonal => self.orthogonal_grid(),
            MapOrientation::Hexagonal => self.hexagonal_grid(),
            // no geometry for these orientations yet
            MapOrientation::Isometric
            | MapOrientation::Staggered
            | MapOrientation::Shifted
            | MapOrientation::Undefined => TileGrid::empty(self.width, self.height),
        }
    }

    /// Pixel dimensions of the map as (width, height).
    ///
    /// The base case is the tile-count product. Hexagonal maps recompute the
    /// extents from the last column and last row of the tile grid, since the
    /// stagger offset pushes the bounding box past the naive product. The
    /// other orientations use the base case unmodified.
    pub fn size_in_pixels(&self) -> (i32, i32) {
        let base_w = (self.width * self.tile_width) as i32;
        let base_h = (self.height * self.tile_height) as i32;

        if self.orientation != MapOrientation::Hexagonal || self.width == 0 || self.height == 0 {
            return (base_w, base_h);
        }

        let grid = self.tile_grid();

        // every stagger parity occurs within the last column / last row, so
        // scanning them whole covers 1-wide and 1-tall maps too
        let max_x = (0..self.height)
            .filter_map(|y| grid.get(self.width - 1, y))
            .filter_map(|p| p.bounds())
            .map(|b| b.max_x())
            .max()
            .unwrap_or(base_w);

        let max_y = (0..self.width)
            .filter_map(|x| grid.get(x, self.height - 1))
            .filter_map(|p| p.bounds())
            .map(|b| b.max_y())
            .max()
            .unwrap_or(base_h);

        (max_x, max_y)
    }

    fn orthogonal_grid(&self) -> TileGrid {
        let mut grid = TileGrid::empty(self.width, self.height);
        let (tw, th) = (self.tile_width as i32, self.tile_height as i32);

        for x in 0..self.width {
            for y in 0..self.height {
                grid.set(x, y, Polygon::rect(x as i32 * tw, y as i32 * th, tw, th));
            }
        }

        grid
    }

    fn hexagonal_grid(&self) -> TileGrid {
        let mut grid = TileGrid::empty(self.width, self.height);
        let side = self.hex_side_length as i32;

        for x in 0..self.width {
            for y in 0..self.height {
                match self.stagger_axis {
                    StaggerAxis::X => {
                        // columns matching the stagger parity shift down by r
                        let h = self.tile_height as i32;
                        let r = h / 2;
                        let t = (self.tile_width as i32 - side) / 2;
                        let y_offset = if self.stagger_index.matches(x) { r } else { 0 };
                        grid.set(
                            x,
                            y,
                            Polygon::hex(
                                x as i32 * (t + side),
                                y as i32 * h + y_offset,
                                StaggerAxis::X,
                                side,
                                r,
                                t,
                            ),
                        );
                    }
                    StaggerAxis::Y => {
                        // rows matching the stagger parity shift right by r
                        let h = self.tile_width as i32;
                        let r = h / 2;
                        let t = (self.tile_height as i32 - side) / 2;
                        let x_offset = if self.stagger_index.matches(y) { r } else { 0 };
                        grid.set(
                            x,
                            y,
                            Polygon::hex(
                                x as i32 * h + x_offset,
                                y as i32 * (t + side),
                                StaggerAxis::Y,
                                side,
                                r,
                                t,
                            ),
                        );
                    }
                    // hexagonal map without a stagger axis has no layout
                    StaggerAxis::Undefined => {}
                }
            }
        }

        grid
    }
}
