//! Volmap Geometry
//!
//! Geometry behind the volumetric map views: cuboid connectivity for voxel
//! corner tables, flat layer grids, parametric sphere markers, and OBJ
//! organ models. Uses nalgebra for points.

pub mod cube;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod obj;
pub mod sphere;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;

pub use cube::{
    cube_faces, generate_cube_triangles, group_cuboids, select_cuboids, CubeMesh, Cuboid, CORNERS, CUBE_TRIANGLES,
};
pub use error::{Error, Result};
pub use grid::{band_colors, layer_grid, unique_in_order, LayerGrid};
pub use mesh::{FaceIndices, Mesh};
pub use obj::{parse_obj, read_obj};
pub use sphere::{marker, sphere_grid, SphereGrid, SPHERE_RADIUS, SPHERE_RESOLUTION};
