// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parametric sphere markers

use nalgebra::Point3;
use std::f64::consts::PI;

/// Marker radius in volume units.
pub const SPHERE_RADIUS: f64 = 14.0;
/// Samples along the polar angle; the azimuth uses twice as many.
pub const SPHERE_RESOLUTION: usize = 5;

/// Surface grids of one sphere, `2 * resolution` rows by `resolution` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereGrid {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
}

impl SphereGrid {
    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.x.len(), self.x.first().map_or(0, Vec::len))
    }

    /// A grid of the same shape filled with `value`, used as surface color.
    pub fn uniform(&self, value: f64) -> Vec<Vec<f64>> {
        let (rows, cols) = self.shape();
        vec![vec![value; cols]; rows]
    }
}

/// `n` evenly spaced samples over `[start, end]`, both ends included.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Tessellate a sphere around `center`.
///
/// Row `i` follows azimuth `u_i` over `[0, 2π]`, column `j` follows polar
/// angle `v_j` over `[0, π]`.
pub fn sphere_grid(center: Point3<f64>, radius: f64, resolution: usize) -> SphereGrid {
    let u = linspace(0.0, 2.0 * PI, resolution * 2);
    let v = linspace(0.0, PI, resolution);

    let mut grid = SphereGrid {
        x: Vec::with_capacity(u.len()),
        y: Vec::with_capacity(u.len()),
        z: Vec::with_capacity(u.len()),
    };

    for &ui in &u {
        let (sin_u, cos_u) = ui.sin_cos();
        let mut xs = Vec::with_capacity(v.len());
        let mut ys = Vec::with_capacity(v.len());
        let mut zs = Vec::with_capacity(v.len());
        for &vj in &v {
            let (sin_v, cos_v) = vj.sin_cos();
            xs.push(radius * cos_u * sin_v + center.x);
            ys.push(radius * sin_u * sin_v + center.y);
            zs.push(radius * cos_v + center.z);
        }
        grid.x.push(xs);
        grid.y.push(ys);
        grid.z.push(zs);
    }

    grid
}

/// Sphere marker with the default radius and resolution.
#[inline]
pub fn marker(center: Point3<f64>) -> SphereGrid {
    sphere_grid(center, SPHERE_RADIUS, SPHERE_RESOLUTION)
}
