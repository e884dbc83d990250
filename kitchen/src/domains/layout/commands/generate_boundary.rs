use log::info;
use rand::Rng;

use crate::layout::Layout::BoundaryGenerated;
use crate::layout::{generate_polygon, generate_rectangle, Layout, LayoutDomain, Shape};

impl LayoutDomain {
    /// Replaces current boundary with freshly generated one.
    pub fn generate_boundary(&mut self, catalog_size: usize, random: &mut impl Rng) -> Vec<Layout> {
        let settings = &self.settings;
        let boundary = match settings.shape {
            Shape::Rectangle => {
                generate_rectangle(settings.grid, &settings.rectangle, catalog_size, random)
            }
            Shape::Polygon => {
                generate_polygon(settings.grid, &settings.polygon, catalog_size, random)
            }
        };
        let event = BoundaryGenerated {
            cells: boundary.cells.len(),
            corners: boundary.corners().count(),
            non_interactive: boundary.non_interactive().count(),
            center: boundary.center,
            spawn: boundary.spawn,
        };
        info!(
            "Generate {:?} boundary of {} cells, spawn at {:?}",
            settings.shape,
            boundary.cells.len(),
            boundary.spawn
        );
        self.boundary = Some(boundary);
        vec![event]
    }
}
