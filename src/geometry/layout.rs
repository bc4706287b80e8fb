use super::angle::normalize;
use super::{TWO_PI, hit};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

/// Immutable geometry inputs for one layout build.
///
/// `sector_count` is derived from the caller's button list; the angles are in
/// radians and `rotation` is reduced into `[0, 2π)` during the build.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct MenuConfig {
    pub sector_count: usize,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub rotation: f64,
    pub gap: f64,
    pub font_size: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("menu needs at least one sector")]
    NoSectors,
    #[error("inner radius can't be larger than outer radius ({inner} > {outer})")]
    InvertedRadii { inner: f64, outer: f64 },
    #[error("inner radius can't be negative ({0})")]
    NegativeInnerRadius(f64),
    #[error("gap can't be negative ({0})")]
    NegativeGap(f64),
    #[error("gap {gap} leaves no sector width (limit {limit} for this sector count)")]
    DegenerateGap { gap: f64, limit: f64 },
    #[error("font size must be positive ({0})")]
    NonPositiveFontSize(f64),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

/// Derived geometry for one sector of the ring.
///
/// Angles are in `[0, 2π)`; `outer_end < outer_start` iff the sector straddles
/// angle zero (the wrap sector). The label anchor is center-relative and
/// already carries the glyph-baseline offsets, so text is drawn at
/// `(label_x, label_y)` without further centering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorSpan {
    pub outer_start: f64,
    pub outer_end: f64,
    pub inner_start: f64,
    pub inner_end: f64,
    pub label_x: f64,
    pub label_y: f64,
}

impl SectorSpan {
    /// Half-open containment test: `outer_start <= angle < outer_end`.
    ///
    /// Shared boundaries belong to the sector that starts there. Vacuously
    /// false for the wrap sector, which is handled by [`contains_wrapped`].
    ///
    /// [`contains_wrapped`]: SectorSpan::contains_wrapped
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.outer_start && angle < self.outer_end
    }

    /// Containment for the wrap sector: angles below `outer_start` are lifted
    /// by a full turn, then tested against `[outer_start, outer_end + 2π)`.
    pub fn contains_wrapped(&self, angle: f64) -> bool {
        let a = if angle < self.outer_start {
            angle + TWO_PI
        } else {
            angle
        };
        a >= self.outer_start && a < self.outer_end + TWO_PI
    }

    /// Angular width of the outer span, wrap-safe.
    pub fn outer_width(&self) -> f64 {
        normalize(self.outer_end - self.outer_start)
    }
}

/// One immutable layout snapshot: the ordered sector spans plus the radii the
/// hit tester needs. Rebuilt wholesale on any configuration change, never
/// patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    spans: Vec<SectorSpan>,
    wrap_index: Option<usize>,
    inner_radius: f64,
    outer_radius: f64,
}

impl Layout {
    /// Partition a full turn into `sector_count` sectors and derive each
    /// sector's render geometry.
    ///
    /// The gap is trimmed from both sides of every sector at the outer
    /// radius. At the inner radius it is scaled down by
    /// `π * inner_radius / outer_radius` so the cut between neighbours looks
    /// near-parallel; the π factor is a coarse arc-length proxy rather than
    /// exact angular equivalence and is part of the visual contract, so it
    /// stays as-is.
    pub fn compute(config: &MenuConfig) -> Result<Self, LayoutError> {
        let checks = [
            ("inner radius", config.inner_radius),
            ("outer radius", config.outer_radius),
            ("rotation", config.rotation),
            ("gap", config.gap),
            ("font size", config.font_size),
        ];
        for (name, value) in checks {
            if !value.is_finite() {
                return Err(LayoutError::NonFinite(name));
            }
        }
        if config.sector_count == 0 {
            return Err(LayoutError::NoSectors);
        }
        if config.inner_radius < 0.0 {
            return Err(LayoutError::NegativeInnerRadius(config.inner_radius));
        }
        if config.inner_radius > config.outer_radius {
            return Err(LayoutError::InvertedRadii {
                inner: config.inner_radius,
                outer: config.outer_radius,
            });
        }
        if config.font_size <= 0.0 {
            return Err(LayoutError::NonPositiveFontSize(config.font_size));
        }

        let step = TWO_PI / config.sector_count as f64;
        if config.gap < 0.0 {
            return Err(LayoutError::NegativeGap(config.gap));
        }
        if config.gap >= step / 2.0 {
            return Err(LayoutError::DegenerateGap {
                gap: config.gap,
                limit: step / 2.0,
            });
        }

        let rotation = normalize(config.rotation);
        let gap = config.gap;
        let inner_gap = if config.outer_radius > 0.0 {
            gap * PI * config.inner_radius / config.outer_radius
        } else {
            // zero-size ring, nothing to scale
            0.0
        };
        let mid_radius = config.inner_radius + (config.outer_radius - config.inner_radius) / 2.0;

        // A lone gapless sector spans the whole turn; normalizing its end
        // would leave the outcome to rounding (landing a hair above or below
        // the start depending on the rotation), so it is collapsed to the
        // empty half-open span up front and never matches a pointer.
        let full_turn = step - 2.0 * gap >= TWO_PI;

        let mut wrap_index = None;
        let mut spans = Vec::with_capacity(config.sector_count);
        for i in 0..config.sector_count {
            let base = i as f64 * step + rotation;
            let outer_start = normalize(base + gap);
            let inner_start = normalize(base + inner_gap);
            let (outer_end, inner_end) = if full_turn {
                (outer_start, inner_start)
            } else {
                (
                    normalize(outer_start + step - 2.0 * gap),
                    normalize(inner_start + step - 2.0 * inner_gap),
                )
            };

            if outer_start > outer_end {
                wrap_index = Some(i);
            }

            // Label anchor at the sector midpoint (pre-normalization, so the
            // wrap sector gets the right quadrant) and mid radius. The half
            // font-size x shift and quarter font-size y shift center the glyph
            // on its anchor rather than the geometric centroid.
            let label_angle = outer_start + step / 2.0 - gap;
            spans.push(SectorSpan {
                outer_start,
                outer_end,
                inner_start,
                inner_end,
                label_x: label_angle.cos() * mid_radius - config.font_size / 2.0,
                label_y: label_angle.sin() * mid_radius + config.font_size / 4.0,
            });
        }

        log::debug!(
            "layout rebuilt: {} sectors, wrap sector {:?}",
            config.sector_count,
            wrap_index
        );

        Ok(Self {
            spans,
            wrap_index,
            inner_radius: config.inner_radius,
            outer_radius: config.outer_radius,
        })
    }

    pub fn spans(&self) -> &[SectorSpan] {
        &self.spans
    }

    /// Index of the single sector straddling angle zero, if any.
    pub fn wrap_index(&self) -> Option<usize> {
        self.wrap_index
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Resolve a center-relative pointer position into a sector index.
    pub fn locate(&self, dx: f64, dy: f64) -> Option<usize> {
        hit::locate(
            dx,
            dy,
            &self.spans,
            self.wrap_index,
            self.inner_radius,
            self.outer_radius,
        )
    }
}
