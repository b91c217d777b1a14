use egui::epaint::{Mesh, Vertex};
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, TextureId, Vec2};

use crate::layout::BaseLayout;
use crate::transform::TransformState;
use crate::widgets::{Handle, paint_handle};

const SELECTION_COLOR: Color32 = Color32::from_rgb(59, 130, 246);
const PLACEHOLDER_FILL: Color32 = Color32::from_gray(200);

pub type Matrix3 = [[f32; 3]; 3];

/// Where and how an object is drawn: base anchor plus its transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenPlacement {
    pub left_percent: f32,
    pub top_percent: f32,
    pub translation: Vec2,
    pub scale: f32,
    pub rotation: f32,
    /// translate -> scale -> rotate, acting on offsets from the box centre
    pub matrix: Matrix3,
    /// The same composition in CSS transform syntax
    pub css: String,
}

/// Maps a base layout and transform to the final placement. Pure.
pub fn project(base: &BaseLayout, transform: &TransformState) -> ScreenPlacement {
    let t = transform.translation;
    let (sin, cos) = transform.rotation.to_radians().sin_cos();

    let translate = [[1.0, 0.0, t.x], [0.0, 1.0, t.y], [0.0, 0.0, 1.0]];
    let scale = [
        [transform.scale, 0.0, 0.0],
        [0.0, transform.scale, 0.0],
        [0.0, 0.0, 1.0],
    ];
    // y points down, so positive degrees turn clockwise on screen
    let rotate = [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]];

    let matrix = multiply_matrices(&translate, &multiply_matrices(&scale, &rotate));

    ScreenPlacement {
        left_percent: base.left_percent,
        top_percent: base.top_percent,
        translation: t,
        scale: transform.scale,
        rotation: transform.rotation,
        matrix,
        css: format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            t.x, t.y, transform.scale, transform.rotation
        ),
    }
}

pub fn multiply_matrices(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut result = [[0.0; 3]; 3];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    result
}

pub fn apply_matrix(m: &Matrix3, v: Vec2) -> Vec2 {
    Vec2::new(
        m[0][0] * v.x + m[0][1] * v.y + m[0][2],
        m[1][0] * v.x + m[1][1] * v.y + m[1][2],
    )
}

impl ScreenPlacement {
    /// Pins the placement to a concrete surface rectangle.
    pub fn resolve(&self, surface: Rect, object_size: f32) -> ResolvedPlacement {
        let base = BaseLayout {
            left_percent: self.left_percent,
            top_percent: self.top_percent,
        };
        let base_rect = Rect::from_min_size(base.anchor_in(surface), Vec2::splat(object_size));
        ResolvedPlacement {
            base_rect,
            matrix: self.matrix,
        }
    }

    pub fn scale_percent(&self) -> i32 {
        (self.scale * 100.0).round() as i32
    }

    pub fn rotation_degrees(&self) -> i32 {
        (self.rotation.round() as i32).rem_euclid(360)
    }
}

/// A placement resolved to screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPlacement {
    /// The untransformed box
    pub base_rect: Rect,
    pub matrix: Matrix3,
}

impl ResolvedPlacement {
    pub fn half_size(&self) -> Vec2 {
        self.base_rect.size() / 2.0
    }

    /// Maps an offset from the untransformed centre to screen space
    pub fn to_screen(&self, local: Vec2) -> Pos2 {
        self.base_rect.center() + apply_matrix(&self.matrix, local)
    }

    pub fn center(&self) -> Pos2 {
        self.to_screen(Vec2::ZERO)
    }

    /// Corners in nw, ne, se, sw order
    pub fn corners(&self) -> [Pos2; 4] {
        let h = self.half_size();
        [
            self.to_screen(Vec2::new(-h.x, -h.y)),
            self.to_screen(Vec2::new(h.x, -h.y)),
            self.to_screen(Vec2::new(h.x, h.y)),
            self.to_screen(Vec2::new(-h.x, h.y)),
        ]
    }

    pub fn handle_position(&self, handle: Handle) -> Pos2 {
        let offset = handle.unit_offset() * self.half_size();
        self.to_screen(offset)
    }
}

/// Draws an object as a textured (or placeholder) quad.
pub fn paint_object(painter: &Painter, placement: &ResolvedPlacement, texture: Option<TextureId>) {
    let corners = placement.corners();
    match texture {
        Some(texture_id) => {
            let uvs = [
                Pos2::new(0.0, 0.0),
                Pos2::new(1.0, 0.0),
                Pos2::new(1.0, 1.0),
                Pos2::new(0.0, 1.0),
            ];
            let mut mesh = Mesh::with_texture(texture_id);
            for (pos, uv) in corners.iter().zip(uvs) {
                mesh.vertices.push(Vertex {
                    pos: *pos,
                    uv,
                    color: Color32::WHITE,
                });
            }
            mesh.add_triangle(0, 1, 2);
            mesh.add_triangle(0, 2, 3);
            painter.add(Shape::mesh(mesh));
        }
        None => {
            painter.add(Shape::convex_polygon(
                corners.to_vec(),
                PLACEHOLDER_FILL,
                Stroke::new(1.0, Color32::from_gray(100)),
            ));
        }
    }
}

/// Outline plus the eight handles around the selected object.
pub fn paint_selection(
    painter: &Painter,
    placement: &ResolvedPlacement,
    handle_radius: f32,
    active_handle: Option<Handle>,
) {
    painter.add(Shape::closed_line(
        placement.corners().to_vec(),
        Stroke::new(2.0, SELECTION_COLOR),
    ));
    for handle in Handle::ALL {
        paint_handle(
            painter,
            placement.handle_position(handle),
            handle_radius,
            active_handle == Some(handle),
        );
    }
}
