// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas configuration and drawing properties.

use kurbo::Size;
use peniko::Color;
use spritefield_pack::PackerConfig;
use spritefield_view2d::DEFAULT_MAX_SCALE;

use crate::error::CanvasError;

/// Engine configuration supplied by the host.
///
/// Times are in milliseconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default)
)]
pub struct CanvasConfig {
    /// Size of the bounded world plane, centered on the origin.
    pub plane: Size,
    /// Minimum clearance between placed sprites, in world units.
    pub gap: f64,
    /// Largest camera scale.
    pub max_scale: f64,
    /// Scale a focused sprite is shown at.
    pub focus_zoom: f64,
    /// Duration of a focus transition.
    pub transition_duration: u64,
    /// Duration of a sprite's fade in.
    pub fade_duration: u64,
    /// Multiplier applied to wheel deltas.
    pub wheel_zoom_speed: f64,
    /// Quiet period before a wheel zoom is committed to [`UiState`](crate::UiState).
    pub wheel_debounce: u64,
    /// Prefix for sprite paths that are not absolute URLs.
    pub base_url: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            plane: Size::new(4000.0, 4000.0),
            gap: 5.0,
            max_scale: DEFAULT_MAX_SCALE,
            focus_zoom: 2.0,
            transition_duration: 1500,
            fade_duration: 500,
            wheel_zoom_speed: 1.0,
            wheel_debounce: 100,
            base_url: String::new(),
        }
    }
}

impl CanvasConfig {
    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), CanvasError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.plane.width) || !positive(self.plane.height) {
            return Err(invalid("plane", "must have a positive finite size"));
        }
        if !positive(self.gap) {
            return Err(invalid("gap", "must be positive and finite"));
        }
        if self.packer_config().spiral_steps().is_none() {
            return Err(invalid("gap", "is too small for the plane"));
        }
        if !self.max_scale.is_finite() || self.max_scale < 1.0 {
            return Err(invalid("max_scale", "must be at least 1"));
        }
        if !positive(self.focus_zoom) {
            return Err(invalid("focus_zoom", "must be positive and finite"));
        }
        if !self.wheel_zoom_speed.is_finite() {
            return Err(invalid("wheel_zoom_speed", "must be finite"));
        }
        Ok(())
    }

    /// Packing parameters derived from this configuration.
    pub fn packer_config(&self) -> PackerConfig {
        PackerConfig::new(self.plane, self.gap)
    }
}

/// Sprite border settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Borders {
    /// Whether borders are drawn.
    pub enabled: bool,
    /// Border color.
    pub color: Color,
}

/// How the canvas is painted. Replaced wholesale; every change forces a redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasProperties {
    /// Checkerboard cell size in world units.
    pub cell_size: f64,
    /// Color of cells whose index sum is even.
    pub first: Color,
    /// Color of the other cells.
    pub second: Color,
    /// Sprite borders.
    pub borders: Borders,
}

impl Default for CanvasProperties {
    fn default() -> Self {
        Self {
            cell_size: 32.0,
            first: Color::from_rgb8(0x25, 0x25, 0x25),
            second: Color::from_rgb8(0x30, 0x30, 0x30),
            borders: Borders {
                enabled: true,
                color: Color::from_rgb8(0x39, 0x57, 0xff),
            },
        }
    }
}

impl CanvasProperties {
    /// Checks that the grid can be drawn.
    pub fn validate(&self) -> Result<(), CanvasError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(invalid("cell_size", "must be positive and finite"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> CanvasError {
    CanvasError::InvalidConfig { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        CanvasConfig::default().validate().unwrap();
        CanvasProperties::default().validate().unwrap();
        let packer = CanvasConfig::default().packer_config();
        assert_eq!(packer, PackerConfig::default());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let cases: [(&str, CanvasConfig); 6] = [
            (
                "plane",
                CanvasConfig {
                    plane: Size::new(0.0, 10.0),
                    ..CanvasConfig::default()
                },
            ),
            (
                "gap",
                CanvasConfig {
                    gap: f64::NAN,
                    ..CanvasConfig::default()
                },
            ),
            (
                "gap",
                CanvasConfig {
                    gap: 0.01,
                    ..CanvasConfig::default()
                },
            ),
            (
                "max_scale",
                CanvasConfig {
                    max_scale: 0.5,
                    ..CanvasConfig::default()
                },
            ),
            (
                "focus_zoom",
                CanvasConfig {
                    focus_zoom: -2.0,
                    ..CanvasConfig::default()
                },
            ),
            (
                "wheel_zoom_speed",
                CanvasConfig {
                    wheel_zoom_speed: f64::INFINITY,
                    ..CanvasConfig::default()
                },
            ),
        ];
        for (field, config) in cases {
            match config.validate() {
                Err(CanvasError::InvalidConfig { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected {field} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_degenerate_cells() {
        let props = CanvasProperties {
            cell_size: 0.0,
            ..CanvasProperties::default()
        };
        assert!(matches!(
            props.validate(),
            Err(CanvasError::InvalidConfig {
                field: "cell_size",
                ..
            })
        ));
    }
}
