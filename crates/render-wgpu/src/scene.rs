use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl ColorVertex {
    fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// The RGB reference triangle, facing +Z, base at y = -0.5.
const BASE_TRIANGLE: [(Vec3, [f32; 4]); 3] = [
    (Vec3::new(-0.5, -0.5, -0.5), [1.0, 0.0, 0.0, 1.0]),
    (Vec3::new(0.5, -0.5, -0.5), [0.0, 1.0, 0.0, 1.0]),
    (Vec3::new(0.0, 0.5, -0.5), [0.0, 0.0, 1.0, 1.0]),
];

/// Placement (translation, yaw in degrees) of each triangle in the scene.
const PLACEMENTS: [(Vec3, f32); 5] = [
    (Vec3::ZERO, 0.0),
    (Vec3::new(-2.5, 0.0, -2.0), 35.0),
    (Vec3::new(2.5, 0.0, -2.0), -35.0),
    (Vec3::new(-1.5, 0.0, -5.0), 90.0),
    (Vec3::new(1.5, 0.0, -5.0), -90.0),
];

/// A handful of static coloured triangles, three vertices each.
pub fn scene_triangles() -> Vec<ColorVertex> {
    let mut verts = Vec::with_capacity(PLACEMENTS.len() * 3);
    for (offset, yaw) in PLACEMENTS {
        let rotation = Quat::from_rotation_y(yaw.to_radians());
        for (position, color) in BASE_TRIANGLE {
            verts.push(ColorVertex::new(rotation * position + offset, color));
        }
    }
    verts
}

/// Two-triangle quad spanning `[-half_extent, half_extent]` in X and Z.
pub fn ground_plane(half_extent: f32, height: f32) -> Vec<ColorVertex> {
    let color = [0.18, 0.2, 0.22, 1.0];
    let e = half_extent;
    let corners = [
        Vec3::new(-e, height, -e),
        Vec3::new(e, height, -e),
        Vec3::new(e, height, e),
        Vec3::new(-e, height, e),
    ];
    [0, 2, 1, 0, 3, 2]
        .into_iter()
        .map(|i| ColorVertex::new(corners[i], color))
        .collect()
}

/// Generate grid line vertices (pairs) over the ground plane.
pub fn grid_lines(half_extent: i32, spacing: f32, height: f32) -> Vec<ColorVertex> {
    let mut verts = Vec::new();
    let color = [0.4, 0.4, 0.4, 1.0];
    let extent = half_extent as f32 * spacing;

    for i in -half_extent..=half_extent {
        let offset = i as f32 * spacing;
        // Lines along X
        verts.push(ColorVertex::new(Vec3::new(-extent, height, offset), color));
        verts.push(ColorVertex::new(Vec3::new(extent, height, offset), color));
        // Lines along Z
        verts.push(ColorVertex::new(Vec3::new(offset, height, -extent), color));
        verts.push(ColorVertex::new(Vec3::new(offset, height, extent), color));
    }
    verts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangles_come_in_threes() {
        let verts = scene_triangles();
        assert_eq!(verts.len(), PLACEMENTS.len() * 3);
    }

    #[test]
    fn first_triangle_is_the_reference() {
        let verts = scene_triangles();
        assert_eq!(verts[0].position, [-0.5, -0.5, -0.5]);
        assert_eq!(verts[1].color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(verts[2].position, [0.0, 0.5, -0.5]);
    }

    #[test]
    fn triangles_rest_on_the_ground() {
        let min_y = scene_triangles()
            .iter()
            .map(|v| v.position[1])
            .fold(f32::INFINITY, f32::min);
        assert!((min_y + 0.5).abs() < 1e-6);
    }

    #[test]
    fn ground_plane_faces_up() {
        let verts = ground_plane(10.0, -0.5);
        assert_eq!(verts.len(), 6);
        for tri in verts.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|v| Vec3::from_array(v.position));
            let normal = (b - a).cross(c - a);
            assert!(normal.y > 0.0);
        }
        assert!(verts.iter().all(|v| v.position[1] == -0.5));
    }

    #[test]
    fn grid_line_count() {
        let verts = grid_lines(5, 1.0, 0.0);
        // 11 lines each way, 2 vertices per line
        assert_eq!(verts.len(), 11 * 2 * 2);
        assert!(verts.iter().all(|v| v.position[0].abs() <= 5.0));
    }
}
