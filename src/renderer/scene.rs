//! Collects the pond's sprites into one triangle list per frame

use super::shapes;
use super::vertex::Vertex;
use crate::settings::Settings;
use crate::sim::{LureSprite, MoverSprite, Pond, PondCanvas};

/// A `PondCanvas` that tessellates sprites into canvas-space vertices
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    pub vertices: Vec<Vertex>,
    /// Segments per full ellipse
    segments: u32,
    animate_tail: bool,
}

impl SceneBuilder {
    pub fn new(segments: u32, animate_tail: bool) -> Self {
        Self {
            vertices: Vec::new(),
            segments,
            animate_tail,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.ellipse_segments(), settings.effective_tail_animation())
    }

    /// Rebuild the vertex list for the pond's current state
    pub fn build(&mut self, pond: &Pond) -> &[Vertex] {
        self.vertices.clear();
        pond.draw(self);
        &self.vertices
    }
}

impl PondCanvas for SceneBuilder {
    fn draw_mover(&mut self, sprite: &MoverSprite) {
        self.vertices
            .extend(shapes::duck(sprite, self.segments, self.animate_tail));
    }

    fn draw_lure(&mut self, sprite: &LureSprite) {
        self.vertices.extend(shapes::breadcrumb(sprite, self.segments));
    }
}
