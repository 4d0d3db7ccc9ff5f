// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wavefront OBJ reader for organ models.
//!
//! Only geometry is read: `v` records become vertices and `f` records become
//! triangles. Polygons with more than three corners are fan-triangulated.
//! Texture coordinates, normals, groups and materials are ignored.

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use nalgebra::Point3;
use nom::{
    bytes::complete::{take_till, take_till1},
    character::complete::{char, i64, space0, space1},
    combinator::{map, opt, recognize},
    multi::separated_list1,
    number::complete::double,
    sequence::{preceded, terminated, tuple},
    IResult,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read an OBJ file from disk.
pub fn read_obj(path: &Path) -> Result<Mesh> {
    let file = File::open(path)?;
    let mesh = parse_obj(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Read OBJ model"
    );
    Ok(mesh)
}

/// Record keyword: `v`, `f`, `vn`, `#`, ...
fn keyword(input: &str) -> IResult<&str, &str> {
    terminated(take_till1(|c: char| c.is_whitespace()), space0)(input)
}

/// Vertex position: `x y z`, an optional `w` is ignored
fn position(input: &str) -> IResult<&str, [f64; 3]> {
    map(
        tuple((double, preceded(space1, double), preceded(space1, double))),
        |(x, y, z)| [x, y, z],
    )(input)
}

/// Face corner: `7`, `7/1`, `7//3` or `7/1/3`; only the vertex index is kept
fn corner(input: &str) -> IResult<&str, i64> {
    terminated(
        i64,
        opt(recognize(preceded(char('/'), take_till(|c: char| c.is_whitespace())))),
    )(input)
}

fn corners(input: &str) -> IResult<&str, Vec<i64>> {
    separated_list1(space1, corner)(input)
}

/// Parse OBJ text.
pub fn parse_obj<R: BufRead>(reader: R) -> Result<Mesh> {
    let mut mesh = Mesh::new();
    let mut face: Vec<u32> = Vec::with_capacity(4);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let Ok((rest, key)) = keyword(line.trim()) else {
            continue;
        };

        match key {
            "v" => {
                let (_, coords) = position(rest).map_err(|_| Error::InvalidObj {
                    line: line_no,
                    message: format!("bad vertex '{}'", rest),
                })?;
                mesh.add_vertex(Point3::from(coords));
            }
            "f" => {
                let indices = match corners(rest) {
                    Ok((tail, indices)) if tail.trim().is_empty() => indices,
                    _ => {
                        return Err(Error::InvalidObj {
                            line: line_no,
                            message: format!("bad face '{}'", rest),
                        })
                    }
                };
                if indices.len() < 3 {
                    return Err(Error::InvalidObj {
                        line: line_no,
                        message: "face needs at least three vertices".to_string(),
                    });
                }

                face.clear();
                let vertex_count = mesh.vertex_count();
                for raw in indices {
                    face.push(resolve_index(raw, vertex_count, line_no)?);
                }
                for w in 1..face.len() - 1 {
                    mesh.add_triangle(face[0], face[w], face[w + 1]);
                }
            }
            _ => {}
        }
    }

    if mesh.triangle_count() == 0 {
        return Err(Error::EmptyMesh("OBJ data has no faces".to_string()));
    }

    Ok(mesh)
}

/// Resolve a 1-based (or negative, relative) OBJ index to a zero-based one.
fn resolve_index(raw: i64, vertex_count: usize, line: usize) -> Result<u32> {
    let index = match raw {
        0 => None,
        n if n > 0 => Some(n - 1),
        n => Some(vertex_count as i64 + n),
    };

    match index {
        Some(i) if i >= 0 && (i as usize) < vertex_count => Ok(i as u32),
        _ => Err(Error::InvalidObj {
            line,
            message: format!("face index {} out of range", raw),
        }),
    }
}
