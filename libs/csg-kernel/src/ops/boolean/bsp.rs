//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG clipping, based on the csg.js
//! algorithm by Evan Wallace.
//!
//! Each node holds a dividing plane, the polygons coplanar with it, and
//! front/back subtrees. `clip_to` removes the parts of this tree's polygons
//! that lie inside another tree; `invert` flips solid and empty space.

use super::plane::Plane;
use crate::geometry::Polygon;

/// A node in the BSP tree.
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    plane: Option<Plane>,
    polygons: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Builds a BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Inserts polygons into the tree, extending it where needed.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }

        let plane = match self.plane {
            Some(plane) => plane,
            // First polygon with a valid plane becomes the splitter;
            // a batch of only degenerate polygons is dropped.
            None => match polygons.iter().find_map(Plane::from_polygon) {
                Some(plane) => {
                    self.plane = Some(plane);
                    plane
                }
                None => return,
            },
        };

        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();
        for polygon in &polygons {
            plane.split_polygon(
                polygon,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }
        self.polygons.extend(coplanar_front);
        self.polygons.extend(coplanar_back);

        if !front.is_empty() {
            self.front
                .get_or_insert_with(Default::default)
                .build(front);
        }
        if !back.is_empty() {
            self.back.get_or_insert_with(Default::default).build(back);
        }
    }

    /// Converts solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        for polygon in &mut self.polygons {
            *polygon = polygon.flipped();
        }
        self.plane = self.plane.map(|p| p.flipped());
        if let Some(front) = &mut self.front {
            front.invert();
        }
        if let Some(back) = &mut self.back {
            back.invert();
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Returns `polygons` with everything inside this tree's solid removed.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let plane = match self.plane {
            Some(plane) => plane,
            None => return polygons,
        };

        let mut front = Vec::new();
        let mut back = Vec::new();
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        for polygon in &polygons {
            plane.split_polygon(
                polygon,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }
        // Coplanar polygons follow the side their face points toward
        front.extend(coplanar_front);
        back.extend(coplanar_back);

        let mut front = match &self.front {
            Some(node) => node.clip_polygons(front),
            None => front,
        };
        let back = match &self.back {
            Some(node) => node.clip_polygons(back),
            // No back subtree: back space is solid, polygons there vanish
            None => Vec::new(),
        };

        front.extend(back);
        front
    }

    /// Removes the parts of this tree's polygons that are inside `bsp`.
    pub fn clip_to(&mut self, bsp: &BspNode) {
        self.polygons = bsp.clip_polygons(std::mem::take(&mut self.polygons));
        if let Some(front) = &mut self.front {
            front.clip_to(bsp);
        }
        if let Some(back) = &mut self.back {
            back.clip_to(bsp);
        }
    }

    /// Collects every polygon in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut out = self.polygons.clone();
        if let Some(front) = &self.front {
            out.extend(front.all_polygons());
        }
        if let Some(back) = &self.back {
            out.extend(back.all_polygons());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::cube;

    #[test]
    fn tree_roundtrips_polygons() {
        let polygons = cube(2.0, true).unwrap().baked_polygons();
        let tree = BspNode::new(polygons.clone());
        // The tree keeps every input facet (possibly split)
        assert!(tree.all_polygons().len() >= polygons.len());
    }

    #[test]
    fn clip_drops_polygons_inside_solid() {
        let big = BspNode::new(cube(4.0, true).unwrap().baked_polygons());
        let small = cube(1.0, true).unwrap().baked_polygons();
        // Every facet of the small cube is inside the big one
        assert!(big.clip_polygons(small).is_empty());
    }

    #[test]
    fn clip_keeps_polygons_outside_solid() {
        let small = BspNode::new(cube(1.0, true).unwrap().baked_polygons());
        let far = cube(1.0, false)
            .unwrap()
            .transformed(glam::DMat4::from_translation(glam::DVec3::splat(10.0)))
            .baked_polygons();
        assert_eq!(small.clip_polygons(far.clone()).len(), far.len());
    }

    #[test]
    fn double_invert_is_identity_on_polygons() {
        let polygons = cube(2.0, true).unwrap().baked_polygons();
        let mut tree = BspNode::new(polygons);
        let before = tree.all_polygons();
        tree.invert();
        tree.invert();
        assert_eq!(tree.all_polygons(), before);
    }
}
