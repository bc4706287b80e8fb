use palette::Srgba;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("unknown color '{0}'")]
    UnknownColor(String),
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
    #[error("gradient needs at least one color stop")]
    EmptyGradient,
    #[error("gradient stop offset {0} is outside [0, 1]")]
    InvalidStopOffset(f64),
}

/// An sRGBA color, parsed from `"transparent"`, 3/4/6/8-digit hex (with or
/// without a leading `#`) or a CSS color name.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub struct Color(pub Srgba<f64>);

impl Color {
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self(Srgba::new(red, green, blue, alpha))
    }

    pub fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    pub fn is_transparent(&self) -> bool {
        self.0.alpha == 0.0
    }
}

impl From<Srgba<f64>> for Color {
    fn from(color: Srgba<f64>) -> Self {
        Self(color)
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::transparent());
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| StyleError::InvalidHex(s.to_string()));
        }
        if let Some(named) = palette::named::from_str(&s.to_ascii_lowercase()) {
            let c = named.into_format::<f64>();
            return Ok(Self(Srgba::new(c.red, c.green, c.blue, 1.0)));
        }
        parse_hex(s).ok_or_else(|| StyleError::UnknownColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0.into_format::<u8, u8>();
        if c.alpha == u8::MAX {
            write!(f, "#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                c.red, c.green, c.blue, c.alpha
            )
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b, a) = match hex.len() {
        3 => (digit(0)?, digit(1)?, digit(2)?, u8::MAX),
        4 => (digit(0)?, digit(1)?, digit(2)?, digit(3)?),
        6 => (pair(0)?, pair(2)?, pair(4)?, u8::MAX),
        8 => (pair(0)?, pair(2)?, pair(4)?, pair(6)?),
        _ => return None,
    };
    let f = |v: u8| v as f64 / 255.0;
    Some(Color::rgba(f(r), f(g), f(b), f(a)))
}

/// The geometry a gradient is spread across. `linear1`..`linear4` are kept as
/// aliases for the four straight directions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    DeserializeFromStr,
    SerializeDisplay,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum GradientKind {
    #[strum(to_string = "radial")]
    Radial,
    #[strum(serialize = "linear1", to_string = "top-to-bottom")]
    TopToBottom,
    #[strum(serialize = "linear2", to_string = "left-to-right")]
    LeftToRight,
    #[strum(serialize = "linear3", to_string = "diagonal-down")]
    DiagonalDown,
    #[strum(serialize = "linear4", to_string = "diagonal-up")]
    DiagonalUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// A gradient descriptor. The renderer decides the concrete geometry: radial
/// gradients run from the inner to the outer radius, linear ones across the
/// surface in the direction the kind names.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Gradient {
    pub kind: GradientKind,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.stops.is_empty() {
            return Err(StyleError::EmptyGradient);
        }
        for stop in &self.stops {
            if !stop.offset.is_finite() || !(0.0..=1.0).contains(&stop.offset) {
                return Err(StyleError::InvalidStopOffset(stop.offset));
            }
        }
        Ok(())
    }
}

/// Anything a region can be filled or stroked with.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(Color),
    Gradient(Gradient),
}

impl Paint {
    pub fn validate(&self) -> Result<(), StyleError> {
        match self {
            Self::Solid(_) => Ok(()),
            Self::Gradient(g) => g.validate(),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Shadow {
    pub color: Paint,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Shadow {
    pub fn none() -> Self {
        Self {
            color: Color::transparent().into(),
            blur: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Menu-level paints, used wherever a button doesn't override them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuStyle {
    pub background: Paint,
    pub hover_background: Option<Paint>,
    pub border: Paint,
    pub text_color: Paint,
    pub hover_text_color: Option<Paint>,
    pub text_border: Paint,
    pub text_shadow: Shadow,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba(14.0 / 15.0, 14.0 / 15.0, 14.0 / 15.0, 1.0).into(),
            hover_background: None,
            border: Color::rgba(1.0, 1.0, 1.0, 1.0).into(),
            text_color: Color::rgba(0.0, 0.0, 0.0, 1.0).into(),
            hover_text_color: None,
            text_border: Color::transparent().into(),
            text_shadow: Shadow {
                color: Color::transparent().into(),
                blur: 10.0,
                offset_x: 3.0,
                offset_y: 3.0,
            },
        }
    }
}

/// Per-button overrides. Every field is optional; an absent field falls back
/// to the menu-level value.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ButtonStyle {
    pub background: Option<Paint>,
    pub border: Option<Paint>,
    pub text_color: Option<Paint>,
    pub text_border: Option<Paint>,
    pub text_shadow: Option<Shadow>,
}

impl ButtonStyle {
    pub fn validate(&self) -> Result<(), StyleError> {
        [
            &self.background,
            &self.border,
            &self.text_color,
            &self.text_border,
        ]
        .into_iter()
        .flatten()
        .chain(self.text_shadow.as_ref().map(|s| &s.color))
        .try_for_each(Paint::validate)
    }
}

/// The paints actually used to draw one button, after override resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle<'a> {
    pub fill: &'a Paint,
    pub stroke: &'a Paint,
    pub text_fill: &'a Paint,
    pub text_stroke: &'a Paint,
    pub text_shadow: &'a Shadow,
}

impl MenuStyle {
    pub fn validate(&self) -> Result<(), StyleError> {
        [
            Some(&self.background),
            self.hover_background.as_ref(),
            Some(&self.border),
            Some(&self.text_color),
            self.hover_text_color.as_ref(),
            Some(&self.text_border),
            Some(&self.text_shadow.color),
        ]
        .into_iter()
        .flatten()
        .try_for_each(Paint::validate)
    }

    /// Resolve the paints for one button. Hover colors are menu-level only
    /// and win while the button is hovered; otherwise the button override
    /// wins over the menu default.
    pub fn resolve<'a>(&'a self, overrides: &'a ButtonStyle, hovered: bool) -> ResolvedStyle<'a> {
        let fill = if hovered && let Some(hover) = &self.hover_background {
            hover
        } else {
            overrides.background.as_ref().unwrap_or(&self.background)
        };
        let text_fill = if hovered && let Some(hover) = &self.hover_text_color {
            hover
        } else {
            overrides.text_color.as_ref().unwrap_or(&self.text_color)
        };
        ResolvedStyle {
            fill,
            stroke: overrides.border.as_ref().unwrap_or(&self.border),
            text_fill,
            text_stroke: overrides.text_border.as_ref().unwrap_or(&self.text_border),
            text_shadow: overrides.text_shadow.as_ref().unwrap_or(&self.text_shadow),
        }
    }
}
