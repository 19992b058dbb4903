//! Core value types for padding, size conditions, and geometry.

use std::fmt;

/// A single padding side.
///
/// A side is either a literal number of units, or the fit-offset sentinel
/// (written `x` in the shorthand), meaning "derive this side from the
/// artifact's current offset inside its container". The sentinel stays
/// symbolic until geometry application resolves it against a concrete
/// container rectangle and current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideValue {
    /// A literal side value in layout units.
    Numeric(f64),
    /// Derive the side from the artifact's current offset at apply time.
    FitOffset,
}

impl SideValue {
    /// The shorthand token that marks the fit-offset sentinel.
    pub const FIT_TOKEN: &'static str = "x";

    pub const ZERO: Self = SideValue::Numeric(0.0);

    /// Read a side from a shorthand token.
    ///
    /// `x` is the fit-offset sentinel; any other token is parsed as a
    /// number, falling back to 0 when it does not parse.
    pub fn from_token(token: &str) -> Self {
        if token == Self::FIT_TOKEN {
            SideValue::FitOffset
        } else {
            SideValue::Numeric(token.parse().unwrap_or(0.0))
        }
    }

    pub fn is_fit(&self) -> bool {
        matches!(self, SideValue::FitOffset)
    }
}

impl Default for SideValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for SideValue {
    fn from(value: f64) -> Self {
        SideValue::Numeric(value)
    }
}

impl fmt::Display for SideValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideValue::Numeric(value) => write!(f, "{value}"),
            SideValue::FitOffset => f.write_str(Self::FIT_TOKEN),
        }
    }
}

/// Four-sided padding, plus an optional size condition.
///
/// A decoded padding always has all four sides populated; sides that the
/// shorthand omitted default to 0.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub top: SideValue,
    pub right: SideValue,
    pub bottom: SideValue,
    pub left: SideValue,
    /// Bounds on the resulting width/height, if the shorthand carried a
    /// condition expression.
    pub condition: Option<Condition>,
}

impl Padding {
    pub fn new(top: SideValue, right: SideValue, bottom: SideValue, left: SideValue) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            condition: None,
        }
    }

    /// The same value on all four sides.
    pub fn uniform(value: f64) -> Self {
        Self::new(value.into(), value.into(), value.into(), value.into())
    }

    /// One value for top/bottom, another for left/right.
    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(
            vertical.into(),
            horizontal.into(),
            vertical.into(),
            horizontal.into(),
        )
    }

    /// Starting padding offered when an artifact has none configured yet.
    pub fn suggested() -> Self {
        Self::symmetric(10.0, 20.0)
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// Which axis of a rectangle a bound applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    Width,
    Height,
}

/// An inclusive min/max pair for one dimension.
///
/// A bound is absent (not zero) when nothing constrained that direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Size constraints decoded from a condition expression.
///
/// Holds the normalized source expression (whitespace stripped,
/// lower-cased) for round-trip re-encoding, plus up to four inclusive
/// bounds on the resulting width/height.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    /// The normalized source expression, kept verbatim for re-encoding.
    pub expression: String,
    pub min_width: Option<f64>,
    pub max_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
}

impl Condition {
    /// A condition with no bounds, holding only its source expression.
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
        }
    }

    /// The bound pair for one dimension.
    pub fn bounds(&self, dimension: Dimension) -> SizeBounds {
        match dimension {
            Dimension::Width => SizeBounds {
                min: self.min_width,
                max: self.max_width,
            },
            Dimension::Height => SizeBounds {
                min: self.min_height,
                max: self.max_height,
            },
        }
    }
}

/// An axis-aligned rectangle.
///
/// Used both for container rectangles (the reference frame padding is
/// computed against) and for an artifact's current frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
