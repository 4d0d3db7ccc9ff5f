// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Render settings and their reconciliation with UI updates.
//!
//! The UI delivers each control as an independent, possibly missing value.
//! [`Settings::reconcile`] folds a [`SettingsUpdate`] over the block's
//! defaults and validates the result before any figure is assembled.

use crate::error::{Error, Result};
use crate::tables::ValueRanges;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in color schemes offered by the color dropdown.
pub const COLOR_SCHEMES: [&str; 15] = [
    "bluered", "deep", "delta", "greys", "haline", "ice", "inferno", "jet", "magma", "plasma",
    "spectral", "thermal", "viridis", "ylgnbu", "ylorrd",
];

pub const DEFAULT_COLOR_SCHEME: &str = "haline";
pub const DEFAULT_CUBE_OPACITY: f64 = 0.4;
pub const DEFAULT_POINT_OPACITY: f64 = 0.1;
pub const DEFAULT_IMAGE_OPACITY: f64 = 1.0;

/// An opacity validated to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Opacity(f64);

impl Opacity {
    pub const OPAQUE: Opacity = Opacity(1.0);

    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidOpacity(value))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Opacity {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Opacity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Opacity::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Every recognized render option with its typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub color_scheme: String,
    pub quantity: String,
    pub cube_opacity: Opacity,
    pub point_opacity: Opacity,
    pub layer: String,
    pub image_layer: String,
    pub image_opacity: Opacity,
    pub category: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_scheme: DEFAULT_COLOR_SCHEME.to_string(),
            quantity: String::new(),
            cube_opacity: Opacity(DEFAULT_CUBE_OPACITY),
            point_opacity: Opacity(DEFAULT_POINT_OPACITY),
            layer: crate::ALL.to_string(),
            image_layer: crate::ALL.to_string(),
            image_opacity: Opacity(DEFAULT_IMAGE_OPACITY),
            category: crate::ALL.to_string(),
        }
    }
}

/// Latest value of each UI control; `None` for controls not yet initialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsUpdate {
    pub color_scheme: Option<String>,
    pub quantity: Option<String>,
    pub cube_opacity: Option<f64>,
    pub point_opacity: Option<f64>,
    pub layer: Option<String>,
    pub image_layer: Option<String>,
    pub image_opacity: Option<f64>,
    pub category: Option<String>,
}

impl Settings {
    /// Defaults for a block: the built-in defaults with the block's default
    /// quantity selected.
    pub fn for_block(ranges: &ValueRanges) -> Result<Self> {
        Ok(Self {
            quantity: ranges.default_quantity()?.to_string(),
            ..Self::default()
        })
    }

    /// Apply every present field of `update` over `self`.
    pub fn reconcile(mut self, update: SettingsUpdate) -> Result<Self> {
        if let Some(color_scheme) = update.color_scheme {
            if !COLOR_SCHEMES.contains(&color_scheme.as_str()) {
                return Err(Error::UnknownColorScheme(color_scheme));
            }
            self.color_scheme = color_scheme;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(value) = update.cube_opacity {
            self.cube_opacity = Opacity::new(value)?;
        }
        if let Some(value) = update.point_opacity {
            self.point_opacity = Opacity::new(value)?;
        }
        if let Some(layer) = update.layer {
            self.layer = layer;
        }
        if let Some(image_layer) = update.image_layer {
            self.image_layer = image_layer;
        }
        if let Some(value) = update.image_opacity {
            self.image_opacity = Opacity::new(value)?;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        Ok(self)
    }
}

/// Initial dropdown values shown when the page loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub d_scheme: String,
    pub d_layer: String,
    pub i_layer: String,
    pub d_category: String,
    pub d_value: String,
}

impl Defaults {
    pub fn for_block(ranges: &ValueRanges) -> Result<Self> {
        Ok(Self {
            d_scheme: DEFAULT_COLOR_SCHEME.to_string(),
            d_layer: crate::ALL.to_string(),
            i_layer: crate::ALL.to_string(),
            d_category: crate::ALL.to_string(),
            d_value: ranges.default_quantity()?.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{QuantityRange, ValueRange};

    fn ranges() -> ValueRanges {
        ValueRanges::new(vec![
            QuantityRange {
                quantity: "CYB5A".into(),
                range: ValueRange::new(0.0, 1.0),
                default: true,
            },
            QuantityRange {
                quantity: "ALB".into(),
                range: ValueRange::new(0.0, 1.0),
                default: false,
            },
        ])
    }

    #[test]
    fn test_defaults_for_block() {
        let defaults = Defaults::for_block(&ranges()).unwrap();
        assert_eq!(
            defaults,
            Defaults {
                d_scheme: "haline".into(),
                d_layer: "All".into(),
                i_layer: "All".into(),
                d_category: "All".into(),
                d_value: "CYB5A".into(),
            }
        );
    }

    #[test]
    fn test_missing_values_keep_defaults() {
        let settings = Settings::for_block(&ranges())
            .unwrap()
            .reconcile(SettingsUpdate::default())
            .unwrap();
        assert_eq!(settings.quantity, "CYB5A");
        assert_eq!(settings.color_scheme, "haline");
        assert_eq!(settings.cube_opacity.get(), 0.4);
        assert_eq!(settings.point_opacity.get(), 0.1);
        assert_eq!(settings.image_opacity.get(), 1.0);
        assert_eq!(settings.layer, "All");
    }

    #[test]
    fn test_present_values_override() {
        let update = SettingsUpdate {
            color_scheme: Some("jet".into()),
            quantity: Some("ALB".into()),
            cube_opacity: Some(0.5),
            layer: Some("Layer 2".into()),
            ..Default::default()
        };
        let settings = Settings::default().reconcile(update).unwrap();
        assert_eq!(settings.color_scheme, "jet");
        assert_eq!(settings.quantity, "ALB");
        assert_eq!(settings.cube_opacity.get(), 0.5);
        assert_eq!(settings.layer, "Layer 2");
        assert_eq!(settings.category, "All");
    }

    #[test]
    fn test_zero_opacity_is_kept() {
        let update = SettingsUpdate {
            cube_opacity: Some(0.0),
            ..Default::default()
        };
        let settings = Settings::default().reconcile(update).unwrap();
        assert_eq!(settings.cube_opacity.get(), 0.0);
    }

    #[test]
    fn test_out_of_range_opacity_fails() {
        let update = SettingsUpdate {
            cube_opacity: Some(11.0),
            ..Default::default()
        };
        let err = Settings::default().reconcile(update).unwrap_err();
        assert!(matches!(err, Error::InvalidOpacity(v) if v == 11.0));
        assert!(Opacity::new(f64::NAN).is_err());
        assert!(Opacity::new(-0.1).is_err());
    }

    #[test]
    fn test_unknown_color_scheme_fails() {
        let update = SettingsUpdate {
            color_scheme: Some("rainbow-ish".into()),
            ..Default::default()
        };
        assert!(matches!(
            Settings::default().reconcile(update),
            Err(Error::UnknownColorScheme(_))
        ));
    }

    #[test]
    fn test_update_from_json_with_nulls() {
        let update: SettingsUpdate =
            serde_json::from_str(r#"{"color_scheme": null, "cube_opacity": 0.5}"#).unwrap();
        assert_eq!(update.color_scheme, None);
        assert_eq!(update.cube_opacity, Some(0.5));
        assert!(serde_json::from_str::<SettingsUpdate>(r#"{"opacity": 1}"#).is_err());
    }

    #[test]
    fn test_opacity_deserialize_validates() {
        assert!(serde_json::from_str::<Opacity>("0.25").is_ok());
        assert!(serde_json::from_str::<Opacity>("11").is_err());
    }
}
