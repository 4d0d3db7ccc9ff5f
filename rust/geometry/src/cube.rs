// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cuboid meshes from voxel corner rows.
//!
//! Each cuboid is stored as eight corner rows sharing a [`CubeId`], in the
//! order
//!
//! ```text
//! 0: (x,      y,      z     )    4: (x,      y,      z + dz)
//! 1: (x + dx, y,      z     )    5: (x + dx, y,      z + dz)
//! 2: (x,      y + dy, z     )    6: (x,      y + dy, z + dz)
//! 3: (x + dx, y + dy, z     )    7: (x + dx, y + dy, z + dz)
//! ```
//!
//! and is rendered with the fixed twelve-triangle pattern [`CUBE_TRIANGLES`].

use crate::error::{Error, Result};
use crate::mesh::FaceIndices;
use rustc_hash::FxHashMap;
use volmap_core::{layer_bounds, CategorySelection, CubeId, LayerSelection, MeasurementRow, QuantityIndex};

/// Corners per cuboid.
pub const CORNERS: usize = 8;

/// Local-vertex triangles of one cuboid, two per face.
pub const CUBE_TRIANGLES: [[u32; 3]; 12] = [
    [0, 1, 2],
    [0, 1, 4],
    [0, 2, 4],
    [4, 5, 1],
    [4, 2, 6],
    [4, 5, 6],
    [3, 2, 6],
    [3, 5, 1],
    [3, 2, 1],
    [7, 6, 5],
    [7, 6, 3],
    [7, 3, 5],
];

/// The eight corner rows of one cuboid.
#[derive(Debug, Clone, Copy)]
pub struct Cuboid<'a> {
    pub id: CubeId,
    pub corners: [&'a MeasurementRow; CORNERS],
}

impl<'a> Cuboid<'a> {
    /// Corner 0, the minimum corner. Filters are evaluated against it.
    #[inline]
    pub fn anchor(&self) -> &'a MeasurementRow {
        self.corners[0]
    }
}

/// Group corner rows into cuboids by [`CubeId`], in order of first
/// appearance. Corners keep their row order inside a cuboid.
pub fn group_cuboids<'a, I>(rows: I) -> Result<Vec<Cuboid<'a>>>
where
    I: IntoIterator<Item = &'a MeasurementRow>,
{
    let mut slots: FxHashMap<CubeId, usize> = FxHashMap::default();
    let mut groups: Vec<(CubeId, Vec<&'a MeasurementRow>)> = Vec::new();

    for row in rows {
        let slot = *slots.entry(row.cube_id).or_insert_with(|| {
            groups.push((row.cube_id, Vec::with_capacity(CORNERS)));
            groups.len() - 1
        });
        groups[slot].1.push(row);
    }

    groups
        .into_iter()
        .map(|(id, corners)| {
            let vertex_count = corners.len();
            let corners: [&MeasurementRow; CORNERS] = corners
                .try_into()
                .map_err(|_| Error::IncompleteCube { cube_id: id, vertex_count })?;
            Ok(Cuboid { id, corners })
        })
        .collect()
}

/// Keep cuboids whose anchor corner lies in the selected layer and matches
/// the category. Whole cuboids are kept or dropped.
pub fn select_cuboids<'a>(
    cuboids: &[Cuboid<'a>],
    layer: LayerSelection,
    category: CategorySelection,
    z_axis: &[f64],
) -> Result<Vec<Cuboid<'a>>> {
    let bounds = match layer {
        LayerSelection::All => None,
        LayerSelection::Layer(n) => Some(layer_bounds(n, z_axis)?),
    };

    Ok(cuboids
        .iter()
        .filter(|cube| {
            let anchor = cube.anchor();
            let in_layer = bounds.map_or(true, |(lower, upper)| anchor.z >= lower && anchor.z < upper);
            in_layer && category.matches(anchor)
        })
        .copied()
        .collect())
}

/// Faces for `cube_count` cuboids laid out consecutively, eight vertices
/// each. Cuboid `c` uses vertices `8c..8c+8`.
pub fn cube_faces(cube_count: usize) -> FaceIndices {
    let mut faces = FaceIndices::with_capacity(cube_count * CUBE_TRIANGLES.len());
    for c in 0..cube_count {
        let m = (c * CORNERS) as u32;
        for [a, b, t] in CUBE_TRIANGLES {
            faces.push(m + a, m + b, m + t);
        }
    }
    faces
}

/// Triangles for a corner table. Rows are grouped by cube id; the returned
/// indices address vertices in grouped order, which equals row order when
/// each cuboid's corners are contiguous.
pub fn generate_cube_triangles<'a, I>(rows: I) -> Result<FaceIndices>
where
    I: IntoIterator<Item = &'a MeasurementRow>,
{
    let cuboids = group_cuboids(rows)?;
    Ok(cube_faces(cuboids.len()))
}

/// Vertex columns, per-vertex intensity and faces of a set of cuboids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CubeMesh {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub intensity: Vec<f64>,
    pub faces: FaceIndices,
}

impl CubeMesh {
    pub fn from_cuboids(cuboids: &[Cuboid<'_>], quantity: QuantityIndex) -> Self {
        let vertex_count = cuboids.len() * CORNERS;
        let mut mesh = CubeMesh {
            x: Vec::with_capacity(vertex_count),
            y: Vec::with_capacity(vertex_count),
            z: Vec::with_capacity(vertex_count),
            intensity: Vec::with_capacity(vertex_count),
            faces: cube_faces(cuboids.len()),
        };
        for corner in cuboids.iter().flat_map(|c| c.corners.iter()) {
            mesh.x.push(corner.x);
            mesh.y.push(corner.y);
            mesh.z.push(corner.z);
            mesh.intensity.push(corner.value(quantity));
        }
        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.x.len()
    }

    pub fn cube_count(&self) -> usize {
        self.x.len() / CORNERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volmap_core::{MeasurementTable, Table};

    /// Corners of a unit cube at `origin` following the stored corner order.
    fn cube_rows(id: u32, origin: [f64; 3], category: bool, value: f64) -> Vec<MeasurementRow> {
        let offsets = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
        ];
        offsets
            .iter()
            .map(|o| {
                MeasurementRow::new(
                    CubeId(id),
                    [origin[0] + o[0], origin[1] + o[1], origin[2] + o[2]],
                    category,
                    vec![value],
                )
            })
            .collect()
    }

    #[test]
    fn test_single_cube_triangles() {
        let rows = cube_rows(0, [0.0, 0.0, 0.0], true, 1.0);
        let faces = generate_cube_triangles(&rows).unwrap();
        assert_eq!(faces.len(), 12);
        assert!(faces.triangles().flatten().all(|i| i < 8));
        assert_eq!(faces.triangles().next(), Some([0, 1, 2]));
    }

    #[test]
    fn test_two_cubes_offset_by_eight() {
        let mut rows = cube_rows(0, [0.0, 0.0, 0.0], true, 1.0);
        rows.extend(cube_rows(1, [1.0, 0.0, 0.0], true, 2.0));
        let faces = generate_cube_triangles(&rows).unwrap();
        assert_eq!(faces.len(), 24);

        let triangles: Vec<[u32; 3]> = faces.triangles().collect();
        for (first, second) in triangles[..12].iter().zip(&triangles[12..]) {
            assert_eq!(second[0], first[0] + 8);
            assert_eq!(second[1], first[1] + 8);
            assert_eq!(second[2], first[2] + 8);
        }
    }

    #[test]
    fn test_every_face_uses_six_distinct_corners() {
        // Each triangle stays on one face of the box: its corners share one coordinate.
        let rows = cube_rows(0, [0.0, 0.0, 0.0], true, 1.0);
        for [a, b, c] in CUBE_TRIANGLES {
            let (pa, pb, pc) = (rows[a as usize].center(), rows[b as usize].center(), rows[c as usize].center());
            let shared = (0..3).any(|axis| pa[axis] == pb[axis] && pb[axis] == pc[axis]);
            assert!(shared, "triangle {:?} crosses the box interior", [a, b, c]);
        }
    }

    #[test]
    fn test_interleaved_rows_are_grouped_by_id() {
        let a = cube_rows(7, [0.0, 0.0, 0.0], true, 1.0);
        let b = cube_rows(3, [5.0, 0.0, 0.0], true, 2.0);
        let rows: Vec<MeasurementRow> = a
            .iter()
            .zip(&b)
            .flat_map(|(x, y)| [x.clone(), y.clone()])
            .collect();

        let cuboids = group_cuboids(&rows).unwrap();
        assert_eq!(cuboids.len(), 2);
        assert_eq!(cuboids[0].id, CubeId(7));
        assert_eq!(cuboids[1].id, CubeId(3));
        assert_eq!(cuboids[1].anchor().x, 5.0);
    }

    #[test]
    fn test_incomplete_cube_is_an_error() {
        let mut rows = cube_rows(0, [0.0, 0.0, 0.0], true, 1.0);
        rows.pop();
        match generate_cube_triangles(&rows) {
            Err(Error::IncompleteCube { cube_id, vertex_count }) => {
                assert_eq!(cube_id, CubeId(0));
                assert_eq!(vertex_count, 7);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_select_cuboids_by_anchor() {
        let mut rows = cube_rows(0, [0.0, 0.0, 0.0], true, 1.0);
        rows.extend(cube_rows(1, [0.0, 0.0, 1.0], false, 2.0));
        let cuboids = group_cuboids(&rows).unwrap();
        let z_axis = [0.0, 1.0, 2.0];

        let layer1 = select_cuboids(&cuboids, LayerSelection::Layer(1), CategorySelection::All, &z_axis).unwrap();
        assert_eq!(layer1.len(), 1);
        assert_eq!(layer1[0].id, CubeId(0));

        let without = select_cuboids(&cuboids, LayerSelection::All, CategorySelection::Only(false), &z_axis).unwrap();
        assert_eq!(without.len(), 1);
        assert_eq!(without[0].id, CubeId(1));

        assert!(select_cuboids(&cuboids, LayerSelection::Layer(3), CategorySelection::All, &z_axis).is_err());
    }

    #[test]
    fn test_cube_mesh_from_table() {
        let mut csv = String::from("X Center,Y Center,Z Center,Category,CYB5A\n");
        for row in cube_rows(0, [0.0, 0.0, 0.0], true, 0.25) {
            csv.push_str(&format!("{},{},{},True,0.25\n", row.x, row.y, row.z));
        }
        let table = MeasurementTable::from_reader(csv.as_bytes()).unwrap();
        let quantity = table.quantity("CYB5A").unwrap();
        let cuboids = group_cuboids(table.rows()).unwrap();
        let mesh = CubeMesh::from_cuboids(&cuboids, quantity);

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.cube_count(), 1);
        assert_eq!(mesh.faces.len(), 12);
        assert!(mesh.intensity.iter().all(|&v| v == 0.25));
        assert_eq!(mesh.x[1], 1.0);
        assert_eq!(mesh.z[7], 1.0);
    }
}
