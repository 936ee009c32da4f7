//! Shape generation for 2D primitives and the pond sprites

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::local_to_world;
use crate::sim::{LureSprite, MoverSprite};

/// Stroke width of the curly tail (pixels)
const TAIL_WIDTH: f32 = 3.0;
/// Line segments used to flatten the tail curve
const TAIL_STEPS: u32 = 12;

/// Filled ellipse in sprite-local space: centered at `local_center`, rotated
/// with the sprite by `heading` and placed at `origin`
pub fn ellipse_local(
    origin: Vec2,
    heading: f32,
    local_center: Vec2,
    radii: Vec2,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    let center = local_to_world(origin, heading, local_center);
    let rim = |i: u32| {
        let theta = (i as f32 / segments as f32) * TAU;
        let local = local_center + Vec2::new(radii.x * theta.cos(), radii.y * theta.sin());
        local_to_world(origin, heading, local)
    };

    for i in 0..segments {
        let a = rim(i);
        let b = rim(i + 1);
        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Axis-aligned filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse_local(center, 0.0, Vec2::ZERO, radii, color, segments)
}

/// Sample a quadratic Bézier from `p0` through control `c` to `p1`
pub fn quadratic_curve(p0: Vec2, c: Vec2, p1: Vec2, steps: u32) -> Vec<Vec2> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            let u = 1.0 - t;
            p0 * (u * u) + c * (2.0 * u * t) + p1 * (t * t)
        })
        .collect()
}

/// Stroke a polyline as a band of quads of constant `width`
pub fn polyline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity((points.len() - 1) * 6);

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        // Perpendicular for width
        let dir = (p2 - p1).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x) * half;

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

/// Sprite-local control points of the curly tail: start, control, end
pub fn tail_points(size: f32, tail_phase: f32) -> [Vec2; 3] {
    let curl_x = -size * 1.2 + tail_phase.cos() * size * 0.3;
    let curl_y = tail_phase.sin() * size * 0.4;
    [
        Vec2::new(-size * 0.8, 0.0),
        Vec2::new(-size, curl_y),
        Vec2::new(curl_x, curl_y * 0.5),
    ]
}

/// Duck facing along its heading: body, head, beak, eye, then the tail.
/// With `animate_tail` off the tail is drawn at rest.
pub fn duck(sprite: &MoverSprite, segments: u32, animate_tail: bool) -> Vec<Vertex> {
    let s = sprite.size;
    let (origin, heading, color) = (sprite.pos, sprite.heading, sprite.color);
    let small = (segments / 2).max(6);

    let mut vertices = Vec::new();
    // Body
    vertices.extend(ellipse_local(origin, heading, Vec2::ZERO, Vec2::new(s, s * 0.8), color, segments));
    // Head
    vertices.extend(ellipse_local(
        origin,
        heading,
        Vec2::new(s * 0.6, 0.0),
        Vec2::splat(s * 0.6),
        color,
        segments,
    ));
    // Beak
    vertices.extend(ellipse_local(
        origin,
        heading,
        Vec2::new(s * 1.1, 0.0),
        Vec2::new(s * 0.3, s * 0.15),
        colors::BEAK,
        small,
    ));
    // Eye
    vertices.extend(ellipse_local(
        origin,
        heading,
        Vec2::new(s * 0.8, -s * 0.2),
        Vec2::splat(s * 0.1),
        colors::EYE,
        small,
    ));

    let phase = if animate_tail { sprite.tail_phase } else { 0.0 };
    let [start, control, end] = tail_points(s, phase);
    let curve: Vec<Vec2> = quadratic_curve(start, control, end, TAIL_STEPS)
        .into_iter()
        .map(|p| local_to_world(origin, heading, p))
        .collect();
    vertices.extend(polyline(&curve, TAIL_WIDTH, color));

    vertices
}

/// Breadcrumb that fades out over its lifetime
pub fn breadcrumb(sprite: &LureSprite, segments: u32) -> Vec<Vertex> {
    let mut color = colors::BREADCRUMB;
    color[3] = (1.0 - sprite.age_fraction).clamp(0.0, 1.0);
    ellipse(
        sprite.pos,
        Vec2::new(sprite.size, sprite.size * 0.8),
        color,
        segments,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipse_vertex_count_and_extent() {
        let verts = ellipse(Vec2::new(10.0, 20.0), Vec2::new(4.0, 2.0), colors::EYE, 16);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            assert!(v.position[0] >= 6.0 - 1e-4 && v.position[0] <= 14.0 + 1e-4);
            assert!(v.position[1] >= 18.0 - 1e-4 && v.position[1] <= 22.0 + 1e-4);
        }
    }

    #[test]
    fn test_quadratic_curve_endpoints() {
        let pts = quadratic_curve(Vec2::ZERO, Vec2::new(5.0, 10.0), Vec2::new(10.0, 0.0), 4);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], Vec2::ZERO);
        assert_eq!(pts[4], Vec2::new(10.0, 0.0));
        assert!((pts[2] - Vec2::new(5.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn test_polyline_needs_two_points() {
        assert!(polyline(&[Vec2::ZERO], 3.0, colors::EYE).is_empty());
        assert_eq!(polyline(&[Vec2::ZERO, Vec2::X, Vec2::ONE], 3.0, colors::EYE).len(), 12);
    }

    #[test]
    fn test_tail_points_at_rest() {
        let [start, control, end] = tail_points(20.0, 0.0);
        assert_eq!(start, Vec2::new(-16.0, 0.0));
        assert_eq!(control, Vec2::new(-20.0, 0.0));
        assert!((end - Vec2::new(-18.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_duck_faces_heading() {
        let sprite = MoverSprite {
            pos: Vec2::new(100.0, 100.0),
            heading: std::f32::consts::PI,
            size: 20.0,
            color: [1.0, 0.843, 0.0, 1.0],
            tail_phase: 0.0,
        };
        let verts = duck(&sprite, 24, true);
        // Beak tip sits at local x = 1.4 * size, flipped to the left by the heading
        let leftmost = verts.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        assert!((leftmost - 72.0).abs() < 1e-3);
        assert!(verts.iter().any(|v| v.color == colors::BEAK));
    }

    #[test]
    fn test_breadcrumb_alpha_fades() {
        let fresh = LureSprite {
            pos: Vec2::ZERO,
            size: 5.0,
            age_fraction: 0.0,
        };
        let stale = LureSprite {
            age_fraction: 0.75,
            ..fresh
        };
        assert_eq!(breadcrumb(&fresh, 12)[0].color[3], 1.0);
        assert!((breadcrumb(&stale, 12)[0].color[3] - 0.25).abs() < 1e-6);
    }
}
