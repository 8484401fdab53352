//! Built-in starting shapes, normalized to the unit square.

use crate::model::{Shape, Vertex, VertexKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Rectangle,
    RoundedRect,
    Notch,
    Hexagon,
    Star,
    Circle,
    Arrow,
    Pill,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Rectangle,
        Preset::RoundedRect,
        Preset::Notch,
        Preset::Hexagon,
        Preset::Star,
        Preset::Circle,
        Preset::Arrow,
        Preset::Pill,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Rectangle => "rectangle",
            Preset::RoundedRect => "rounded_rect",
            Preset::Notch => "notch",
            Preset::Hexagon => "hexagon",
            Preset::Star => "star",
            Preset::Circle => "circle",
            Preset::Arrow => "arrow",
            Preset::Pill => "pill",
        }
    }

    pub fn by_name(name: &str) -> Option<Preset> {
        Preset::ALL.iter().copied().find(|p| p.name() == name)
    }

    pub fn shape(&self) -> Shape {
        match self {
            Preset::Rectangle => corners(&[(0.1, 0.1), (0.9, 0.1), (0.9, 0.9), (0.1, 0.9)]),
            Preset::RoundedRect => build(&[
                (0.1, 0.1, VertexKind::Corner, 0.08),
                (0.9, 0.1, VertexKind::Corner, 0.08),
                (0.9, 0.9, VertexKind::Corner, 0.08),
                (0.1, 0.9, VertexKind::Corner, 0.08),
            ]),
            Preset::Notch => build(&[
                (0.05, 0.02, VertexKind::Corner, 0.03),
                (0.32, 0.02, VertexKind::Corner, 0.02),
                (0.38, 0.11, VertexKind::Smooth, 0.02),
                (0.62, 0.11, VertexKind::Smooth, 0.02),
                (0.68, 0.02, VertexKind::Corner, 0.02),
                (0.95, 0.02, VertexKind::Corner, 0.03),
                (0.95, 0.98, VertexKind::Corner, 0.03),
                (0.05, 0.98, VertexKind::Corner, 0.03),
            ]),
            Preset::Hexagon => corners(&[
                (0.5, 0.05),
                (0.93, 0.27),
                (0.93, 0.73),
                (0.5, 0.95),
                (0.07, 0.73),
                (0.07, 0.27),
            ]),
            Preset::Star => corners(&[
                (0.5, 0.05),
                (0.62, 0.35),
                (0.95, 0.39),
                (0.7, 0.6),
                (0.79, 0.95),
                (0.5, 0.75),
                (0.21, 0.95),
                (0.3, 0.6),
                (0.05, 0.39),
                (0.38, 0.35),
            ]),
            Preset::Circle => build(&[
                (0.5, 0.1, VertexKind::Smooth, 0.25),
                (0.9, 0.5, VertexKind::Smooth, 0.25),
                (0.5, 0.9, VertexKind::Smooth, 0.25),
                (0.1, 0.5, VertexKind::Smooth, 0.25),
            ]),
            Preset::Arrow => corners(&[
                (0.5, 0.1),
                (0.9, 0.5),
                (0.65, 0.5),
                (0.65, 0.9),
                (0.35, 0.9),
                (0.35, 0.5),
                (0.1, 0.5),
            ]),
            Preset::Pill => build(&[
                (0.3, 0.3, VertexKind::Smooth, 0.2),
                (0.7, 0.3, VertexKind::Smooth, 0.2),
                (0.7, 0.7, VertexKind::Smooth, 0.2),
                (0.3, 0.7, VertexKind::Smooth, 0.2),
            ]),
        }
    }
}

fn corners(points: &[(f32, f32)]) -> Shape {
    Shape::new(
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Vertex::corner(i as u32 + 1, x, y))
            .collect(),
    )
}

fn build(points: &[(f32, f32, VertexKind, f32)]) -> Shape {
    Shape::new(
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y, kind, radius))| Vertex {
                id: i as u32 + 1,
                x,
                y,
                kind,
                radius,
            })
            .collect(),
    )
}
