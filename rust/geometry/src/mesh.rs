// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangle meshes and mesh3d face columns

use nalgebra::Point3;

/// Indexed triangle mesh read from a model file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Point3<f64>>,
    pub faces: FaceIndices,
}

/// Triangle indices split into three parallel columns, one entry per
/// triangle. This is the face layout mesh traces expect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceIndices {
    pub i: Vec<u32>,
    pub j: Vec<u32>,
    pub k: Vec<u32>,
}

impl FaceIndices {
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            i: Vec::with_capacity(triangles),
            j: Vec::with_capacity(triangles),
            k: Vec::with_capacity(triangles),
        }
    }

    #[inline]
    pub fn push(&mut self, a: u32, b: u32, c: u32) {
        self.i.push(a);
        self.j.push(b);
        self.k.push(c);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.i.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.i.is_empty()
    }

    /// Iterate triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.i
            .iter()
            .zip(&self.j)
            .zip(&self.k)
            .map(|((&a, &b), &c)| [a, b, c])
    }
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>) {
        self.vertices.push(position);
    }

    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.faces.push(i0, i1, i2);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Split vertices into X, Y and Z columns
    pub fn coordinate_columns(&self) -> [Vec<f64>; 3] {
        let mut columns: [Vec<f64>; 3] = Default::default();
        for column in &mut columns {
            column.reserve_exact(self.vertices.len());
        }
        for p in &self.vertices {
            columns[0].push(p.x);
            columns[1].push(p.y);
            columns[2].push(p.z);
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_coordinate_columns() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(-1.0, 2.0, 3.0));
        mesh.add_vertex(Point3::new(4.0, -5.0, 6.0));

        let [x, y, z] = mesh.coordinate_columns();
        assert_eq!(x, vec![-1.0, 4.0]);
        assert_eq!(y, vec![2.0, -5.0]);
        assert_eq!(z, vec![3.0, 6.0]);
    }

    #[test]
    fn test_face_columns() {
        let mut mesh = Mesh::new();
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(2, 3, 0);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.faces.i, vec![0, 2]);
        assert_eq!(mesh.faces.j, vec![1, 3]);
        assert_eq!(mesh.faces.k, vec![2, 0]);
        assert_eq!(mesh.faces.triangles().collect::<Vec<_>>(), vec![[0, 1, 2], [2, 3, 0]]);
    }
}
