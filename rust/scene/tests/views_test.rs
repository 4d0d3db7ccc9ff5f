// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use volmap_core::{
    build_axes, CategoryLabels, ColorscaleCatalog, ImageLayerIndex, MeasurementTable, Settings, SettingsUpdate, Table,
    ValueRanges, VolumeBounds,
};
use volmap_scene::{
    load_image_layers, render_view, Colorscale, ImageLayerSet, Result, Trace, ViewContext, ViewSource, ViewTab,
};

const BLOCK: &str = "S1-12";

/// A block laid out on disk the way the dashboard publishes it.
struct Fixture {
    _dir: TempDir,
    block_dir: PathBuf,
    image_dir: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let block_dir = dir.path().join("volumetric-map").join(BLOCK);
        let image_dir = dir.path().join("image-layers");
        fs::create_dir_all(&block_dir).unwrap();
        fs::create_dir_all(image_dir.join(BLOCK).join("layers")).unwrap();

        write(
            &block_dir,
            "vol_measurements.csv",
            "X Min,X Max,X Size,Y Min,Y Max,Y Size,Z Min,Z Max,Z Size\n0,20,10,0,20,10,0,20,10\n",
        );
        write(
            &block_dir,
            "value_ranges.csv",
            "Row Label,CYB5A,ALB\nMin,0,0\nMax,1,2\nDefault,True,False\n",
        );
        write(
            &block_dir,
            "category_labels.csv",
            "Category,Label (Only True),Label (Only False)\nTissue,Tumor,Normal\n",
        );
        write(
            &block_dir,
            "points_data.csv",
            "X Center,Y Center,Z Center,Category,CYB5A,ALB\n\
             5,5,5,True,0.2,1.0\n\
             15,5,5,False,,1.5\n\
             5,15,15,True,0.9,0.1\n",
        );

        write(
            &image_dir,
            "images.csv",
            "Name,Block,Z Center,Colorscale\n\
             upper.tif,S1-12,15,channel_split\n\
             lower.tif,S1-12,5,channel_split\n\
             other.tif,S2-01,5,greys\n",
        );
        write(
            &image_dir,
            "colorscales.csv",
            "Scale Name,Entry,Scale Marker,R,G,B\n\
             channel_split,2,1.0,255,255,255\n\
             channel_split,1,0.0,0,0,0\n",
        );
        write(&image_dir.join(BLOCK).join("layers"), "lower.txt", "0\t1\n2\t3\n4\t5\n");
        write(&image_dir.join(BLOCK).join("layers"), "upper.txt", "9\t9\n9\t9\n9\t9\n");

        Fixture {
            _dir: dir,
            block_dir,
            image_dir,
        }
    }
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

impl ViewSource for Fixture {
    fn cube_table(&self) -> Result<MeasurementTable> {
        Ok(MeasurementTable::from_path(&self.block_dir.join("cube_data.csv"))?)
    }

    fn point_table(&self) -> Result<MeasurementTable> {
        Ok(MeasurementTable::from_path(&self.block_dir.join("points_data.csv"))?)
    }

    fn image_layers(&self) -> Result<ImageLayerSet> {
        let index = ImageLayerIndex::from_path(&self.image_dir.join("images.csv"))?;
        load_image_layers(&self.image_dir, &index, BLOCK)
    }

    fn colorscales(&self) -> Result<ColorscaleCatalog> {
        Ok(ColorscaleCatalog::from_path(&self.image_dir.join("colorscales.csv"))?)
    }
}

struct Block {
    axes: volmap_core::Axes,
    ranges: ValueRanges,
    labels: CategoryLabels,
}

impl Block {
    fn load(fixture: &Fixture) -> Self {
        let bounds = VolumeBounds::from_path(&fixture.block_dir.join("vol_measurements.csv")).unwrap();
        Block {
            axes: build_axes(&bounds).unwrap(),
            ranges: ValueRanges::from_path(&fixture.block_dir.join("value_ranges.csv")).unwrap(),
            labels: CategoryLabels::from_path(&fixture.block_dir.join("category_labels.csv")).unwrap(),
        }
    }

    fn ctx<'a>(&'a self, settings: &'a Settings) -> ViewContext<'a> {
        ViewContext {
            axes: &self.axes,
            ranges: &self.ranges,
            labels: &self.labels,
            settings,
        }
    }
}

#[test]
fn image_layers_sorted_by_z() {
    let fixture = Fixture::new();
    let set = fixture.image_layers().unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.layers()[0].entry.name, "lower.tif");
    assert_eq!(set.layers()[0].data.dim(), (3, 2));
    assert_eq!(set.layers()[1].entry.z_center, 15.0);
}

#[test]
fn image_layer_view_from_disk() {
    let fixture = Fixture::new();
    let block = Block::load(&fixture);
    let settings = Settings::for_block(&block.ranges)
        .unwrap()
        .reconcile(SettingsUpdate {
            image_layer: Some("Image 1".into()),
            image_opacity: Some(0.5),
            ..Default::default()
        })
        .unwrap();

    let fig = render_view(ViewTab::ImageLayer, &block.ctx(&settings), &fixture).unwrap();
    assert_eq!(fig.data.len(), 1);
    let Trace::Surface(surface) = &fig.data[0] else {
        panic!("expected surface");
    };
    assert_eq!(surface.z, vec![vec![5.0, 5.0]; 3]);
    assert_eq!(surface.opacity, 0.5);
    let Colorscale::Stops(stops) = &surface.colorscale else {
        panic!("expected catalog stops");
    };
    assert_eq!(stops[0].1, "rgb(0,0,0)");
    assert_eq!(stops[1].1, "rgb(255,255,255)");
}

#[test]
fn sphere_view_from_disk() {
    let fixture = Fixture::new();
    let block = Block::load(&fixture);
    let settings = Settings::for_block(&block.ranges).unwrap();
    assert_eq!(settings.quantity, "CYB5A");

    let fig = render_view(ViewTab::Sphere, &block.ctx(&settings), &fixture).unwrap();
    // The blank CYB5A cell reads as NaN and is skipped
    assert_eq!(fig.data.len(), 2);

    let json = serde_json::to_value(&fig).unwrap();
    assert_eq!(json["data"][0]["type"], "surface");
    assert_eq!(json["data"][0]["cmax"], 1.0);
    assert_eq!(json["layout"]["scene"]["xaxis"]["range"], serde_json::json!([0.0, 20.0]));
}

#[test]
fn missing_cube_table_is_configuration_missing() {
    let fixture = Fixture::new();
    let block = Block::load(&fixture);
    let settings = Settings::for_block(&block.ranges).unwrap();
    let err = render_view(ViewTab::Cube, &block.ctx(&settings), &fixture).unwrap_err();
    assert!(err.is_configuration_missing());
    assert!(!err.is_validation());
}

#[test]
fn missing_image_array_is_configuration_missing() {
    let fixture = Fixture::new();
    fs::remove_file(fixture.image_dir.join(BLOCK).join("layers").join("upper.txt")).unwrap();
    let err = fixture.image_layers().unwrap_err();
    assert!(err.is_configuration_missing());
}
