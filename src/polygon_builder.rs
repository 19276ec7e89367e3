use core::f64;

use crate::{
    CornerRounding, RoundedPolygon,
    geometry::{Point, Size},
    util::radial_to_cartesian,
};

pub trait HaveRounding {}

pub trait HaveSize {
    fn size(&mut self) -> &mut Size;
}

pub trait HaveRadius {
    fn radius(&mut self) -> &mut f64;
}

pub struct Rectangle {
    pub(crate) size: Size,
}

impl HaveSize for Rectangle {
    fn size(&mut self) -> &mut Size {
        &mut self.size
    }
}

pub struct Circle {
    pub(crate) vertices: usize,
    pub(crate) radius: f64,
}

impl HaveRadius for Circle {
    fn radius(&mut self) -> &mut f64 {
        &mut self.radius
    }
}

pub struct Star {
    pub(crate) vertices_per_radius: usize,
    pub(crate) radius: f64,
    pub(crate) inner_radius: f64,
    pub(crate) inner_rounding: Option<CornerRounding>,
}

impl HaveRadius for Star {
    fn radius(&mut self) -> &mut f64 {
        &mut self.radius
    }
}

impl HaveRounding for Star {}

pub struct RoundedPolygonBuilder<T> {
    pub(crate) data: T,
    pub(crate) center: Point,
    pub(crate) rounding: CornerRounding,
    pub(crate) per_vertex_rounding: Vec<CornerRounding>,
}

impl<T> RoundedPolygonBuilder<T> {
    #[must_use]
    pub const fn with_center(mut self, center: Point) -> Self {
        self.center = center;

        self
    }
}

impl<T: HaveRounding> RoundedPolygonBuilder<T> {
    #[must_use]
    pub const fn with_rounding(mut self, rounding: CornerRounding) -> Self {
        self.rounding = rounding;

        self
    }

    #[must_use]
    pub fn with_rounding_per_vertex<I: IntoIterator<Item = CornerRounding>>(mut self, iter: I) -> Self {
        self.per_vertex_rounding = iter.into_iter().collect();

        self
    }
}

impl<T: HaveSize> RoundedPolygonBuilder<T> {
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        *self.data.size() = size;

        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.data.size().width = width;

        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.data.size().height = height;

        self
    }
}

impl<T: HaveRadius> RoundedPolygonBuilder<T> {
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        *self.data.radius() = radius;

        self
    }
}

impl RoundedPolygonBuilder<Circle> {
    #[must_use]
    pub const fn with_vertices(mut self, vertices: usize) -> Self {
        self.data.vertices = vertices;

        self
    }

    pub fn build(self) -> RoundedPolygon {
        let theta = f64::consts::PI / self.data.vertices as f64;
        let polygon_radius = self.data.radius / theta.cos();

        RoundedPolygon::from_vertices_count_at(self.data.vertices, polygon_radius, self.center, Some(CornerRounding::new(self.data.radius)), &[
        ])
    }
}

impl RoundedPolygonBuilder<Rectangle> {
    #[must_use]
    pub const fn with_rounding(mut self, rounding: CornerRounding) -> Self {
        self.rounding = rounding;

        self
    }

    #[must_use]
    pub fn with_rounding_per_vertex(mut self, corners: [CornerRounding; 4]) -> Self {
        self.per_vertex_rounding = corners.into();

        self
    }

    pub fn build(self) -> RoundedPolygon {
        let [left, top] = (self.center - self.data.size / 2.0).to_array();
        let [right, bottom] = (self.center + self.data.size / 2.0).to_array();

        let vertices = [
            Point::new(right, bottom),
            Point::new(left, bottom),
            Point::new(left, top),
            Point::new(right, top),
        ];

        RoundedPolygon::from_vertices(&vertices, self.rounding, &self.per_vertex_rounding, self.center)
    }
}

impl RoundedPolygonBuilder<Star> {
    #[must_use]
    pub const fn with_inner_radius(mut self, radius: f64) -> Self {
        self.data.inner_radius = radius;

        self
    }

    #[must_use]
    pub const fn with_inner_rounding(mut self, rounding: CornerRounding) -> Self {
        self.data.inner_rounding.replace(rounding);

        self
    }

    pub fn build(self) -> RoundedPolygon {
        let vertices = star_vertices_from_num_verts(self.data.vertices_per_radius, self.data.radius, self.data.inner_radius, self.center);

        // Star polygon is just a polygon with all vertices supplied (where we generate
        // those vertices to be on the inner/outer radii)
        if !self.per_vertex_rounding.is_empty() {
            RoundedPolygon::from_vertices(&vertices, self.rounding, &self.per_vertex_rounding, self.center)
        } else if let Some(inner_rounding) = self.data.inner_rounding {
            // If no per-vertex rounding supplied and caller asked for inner
            // rounding, create per-vertex rounding list based on
            // supplied outer/inner rounding parameters
            RoundedPolygon::from_vertices(
                &vertices,
                self.rounding,
                &(0..self.data.vertices_per_radius)
                    .flat_map(|_| [self.rounding, inner_rounding])
                    .collect::<Vec<_>>(),
                self.center,
            )
        } else {
            RoundedPolygon::from_vertices(&vertices, self.rounding, &[], self.center)
        }
    }
}

fn star_vertices_from_num_verts(num_vertices_per_radius: usize, radius: f64, inner_radius: f64, center: Point) -> Vec<Point> {
    (0..num_vertices_per_radius * 2)
        .map(|i| {
            center
                + radial_to_cartesian(
                    if i % 2 == 0 { radius } else { inner_radius },
                    f64::consts::PI / num_vertices_per_radius as f64 * i as f64,
                )
        })
        .collect()
}
