use super::quad::{TexturedQuad, VERTICES_PER_QUAD};
use serde::{Deserialize, Serialize};

/// Which texture a quad is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Floor,
    Wall,
}

/// A run of consecutive triangles that share one texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawBatch {
    pub surface: SurfaceKind,
    pub first_index: u32,
    pub index_count: u32,
}

/// Flattened buffers ready for a two-triangles-per-quad draw call.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Tessellation {
    pub vertices: Vec<f32>,   // Flattened x, y, z
    pub tex_coords: Vec<f32>, // Flattened s, t
    pub indices: Vec<u32>,    // Triangle indices
    pub batches: Vec<DrawBatch>,
}

impl Tessellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn add_quad(&mut self, quad: &TexturedQuad, surface: SurfaceKind) {
        let idx = self.vertex_count() as u32;

        for (p, t) in quad.vertices() {
            self.vertices.push(p.x as f32); self.vertices.push(p.y as f32); self.vertices.push(p.z as f32);
            self.tex_coords.push(t.x as f32); self.tex_coords.push(t.y as f32);
        }

        // Split along the p1-p3 diagonal, keeping the quad's winding
        let first_index = self.indices.len() as u32;
        self.indices.extend_from_slice(&[idx, idx + 1, idx + 2, idx, idx + 2, idx + 3]);

        match self.batches.last_mut() {
            Some(batch) if batch.surface == surface => batch.index_count += 6,
            _ => self.batches.push(DrawBatch {
                surface,
                first_index,
                index_count: 6,
            }),
        }
        debug_assert_eq!(self.vertex_count() as u32, idx + VERTICES_PER_QUAD as u32);
    }
}
