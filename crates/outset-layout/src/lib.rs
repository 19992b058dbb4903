//! Geometry application: padding + container rectangle -> resized frame.
//!
//! The container rectangle is outset by the padding amounts (negative
//! padding contracts it), fit-offset sides are resolved from the
//! artifact's current frame, and the resulting width/height are clamped
//! against the padding's size condition. The whole pipeline is total:
//! malformed or missing inputs degrade to 0 or an unclamped dimension.

use outset_core::{Dimension, Padding, Rect, SideValue};

/// Padding with every side resolved to a concrete number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Resolve fit-offset sides against the artifact's current frame.
///
/// A fit-offset side becomes the artifact's current distance from the
/// matching container edge, truncated toward zero and negated: an inward
/// offset, so that applying it leaves that edge where it currently is.
pub fn resolve_sides(padding: &Padding, container: &Rect, current: &Rect) -> ResolvedSides {
    let x_offset = current.x - container.x;
    let y_offset = current.y - container.y;

    ResolvedSides {
        top: resolve(padding.top, y_offset),
        right: resolve(
            padding.right,
            container.width - current.width - x_offset,
        ),
        bottom: resolve(
            padding.bottom,
            container.height - current.height - y_offset,
        ),
        left: resolve(padding.left, x_offset),
    }
}

fn resolve(side: SideValue, fit_offset: f64) -> f64 {
    match side {
        SideValue::Numeric(value) => value,
        SideValue::FitOffset => -fit_offset.trunc(),
    }
}

/// Compute the frame that results from applying a padding to a container
/// rectangle.
///
/// `current` is only consulted to resolve fit-offset sides.
pub fn compute_frame(padding: &Padding, container: &Rect, current: &Rect) -> Rect {
    let sides = resolve_sides(padding, container, current);

    let mut width = container.width + sides.left + sides.right;
    let mut height = container.height + sides.top + sides.bottom;

    if let Some(condition) = &padding.condition {
        width = outset_constraint::clamp_dimension(width, condition, Dimension::Width);
        height = outset_constraint::clamp_dimension(height, condition, Dimension::Height);
    }

    Rect {
        x: container.x - sides.left,
        y: container.y - sides.top,
        width,
        height,
    }
}
