// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use volmap_core::{CategorySelection, CubeId, LayerSelection, MeasurementTable, Table};
use volmap_geometry::{generate_cube_triangles, group_cuboids, select_cuboids, CubeMesh, Error, CUBE_TRIANGLES};

/// Corner rows of a cuboid at `(x, y, z)` with edge `d`, in stored order.
fn corners(id: Option<u32>, origin: [f64; 3], d: f64, category: &str, value: f64) -> String {
    let mut out = String::new();
    for dz in [0.0, d] {
        for dy in [0.0, d] {
            for dx in [0.0, d] {
                if let Some(id) = id {
                    out.push_str(&format!("{},", id));
                }
                out.push_str(&format!(
                    "{},{},{},{},{}\n",
                    origin[0] + dx,
                    origin[1] + dy,
                    origin[2] + dz,
                    category,
                    value
                ));
            }
        }
    }
    out
}

#[test]
fn positional_ids_group_every_eight_rows() {
    let mut csv = String::from("X Center,Y Center,Z Center,Category,CYB5A\n");
    csv.push_str(&corners(None, [0.0, 0.0, 0.0], 10.0, "True", 0.1));
    csv.push_str(&corners(None, [10.0, 0.0, 0.0], 10.0, "False", 0.2));
    csv.push_str(&corners(None, [0.0, 0.0, 10.0], 10.0, "True", 0.3));
    let table = MeasurementTable::from_reader(csv.as_bytes()).unwrap();

    let faces = generate_cube_triangles(table.rows()).unwrap();
    assert_eq!(faces.len(), 3 * CUBE_TRIANGLES.len());
    assert_eq!(faces.triangles().last(), Some([23, 19, 21]));

    let cuboids = group_cuboids(table.rows()).unwrap();
    let ids: Vec<CubeId> = cuboids.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![CubeId(0), CubeId(1), CubeId(2)]);
}

#[test]
fn explicit_ids_survive_reordering() {
    let mut csv = String::from("Cube ID,X Center,Y Center,Z Center,Category,CYB5A\n");
    let a = corners(Some(40), [0.0, 0.0, 0.0], 10.0, "True", 0.5);
    let b = corners(Some(41), [0.0, 0.0, 10.0], 10.0, "False", 0.7);
    // Interleave the two cuboids line by line
    for (la, lb) in a.lines().zip(b.lines()) {
        csv.push_str(la);
        csv.push('\n');
        csv.push_str(lb);
        csv.push('\n');
    }
    let table = MeasurementTable::from_reader(csv.as_bytes()).unwrap();
    let quantity = table.quantity("CYB5A").unwrap();
    let cuboids = group_cuboids(table.rows()).unwrap();
    assert_eq!(cuboids.len(), 2);

    let z_axis = [0.0, 10.0, 20.0];
    let upper = select_cuboids(&cuboids, LayerSelection::Layer(2), CategorySelection::All, &z_axis).unwrap();
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].id, CubeId(41));

    let mesh = CubeMesh::from_cuboids(&upper, quantity);
    assert_eq!(mesh.vertex_count(), 8);
    assert!(mesh.intensity.iter().all(|&v| v == 0.7));
    // Whole cuboid is kept even though its top corners sit on the next slab
    assert_eq!(mesh.z.iter().cloned().fold(f64::MIN, f64::max), 20.0);
}

#[test]
fn truncated_table_names_the_cube() {
    let mut csv = String::from("X Center,Y Center,Z Center,Category,CYB5A\n");
    csv.push_str(&corners(None, [0.0, 0.0, 0.0], 10.0, "True", 0.1));
    csv.push_str("10,0,0,True,0.2\n");
    let table = MeasurementTable::from_reader(csv.as_bytes()).unwrap();

    let err = generate_cube_triangles(table.rows()).unwrap_err();
    assert!(matches!(err, Error::IncompleteCube { cube_id: CubeId(1), vertex_count: 1 }));
    assert_eq!(err.to_string(), "Cube 1 has 1 corners, expected 8");
}
