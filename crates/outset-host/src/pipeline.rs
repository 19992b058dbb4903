//! Operations over the host ports.
//!
//! These glue the pure codec and geometry crates to a host document
//! model: read a padding off an artifact's label, write one back, and
//! apply one to resize an artifact to its container.

use outset_core::{Padding, Rect};

use crate::label;
use crate::ports::{Artifact, Container};

/// Decode the padding stored in an artifact's label.
///
/// `None` when the artifact is not padding-capable, has no bracketed
/// segment, or the segment is empty.
pub fn padding_of(artifact: &impl Artifact) -> Option<Padding> {
    if !artifact.is_padding_capable() {
        return None;
    }
    let label = artifact.label();
    outset_parser::decode(label::padding_segment(&label)?)
}

/// Whether an artifact carries a padding segment in its label.
pub fn has_padding(artifact: &impl Artifact) -> bool {
    artifact.is_padding_capable() && label::padding_segment(&artifact.label()).is_some()
}

/// Write a padding into an artifact's label, preserving its name.
///
/// `None` removes the bracketed segment. Not-capable artifacts are left
/// untouched.
pub fn save_padding(artifact: &mut impl Artifact, padding: Option<&Padding>) {
    if !artifact.is_padding_capable() {
        return;
    }
    let label = artifact.label();
    artifact.set_label(&label::splice_padding(&label, padding));
}

/// Resize an artifact by applying a padding against its container.
///
/// Reads the container rectangle and the artifact's current frame,
/// computes the outset frame, writes it back, and fires the post-resize
/// hook.
pub fn apply_padding(
    artifact: &mut impl Artifact,
    container: &impl Container,
    padding: &Padding,
) {
    let container_rect = container.rect();
    let current = artifact.frame();

    log::debug!(
        target: "outset",
        "applying padding {:?} to frame {:?} within {:?}",
        padding,
        current,
        container_rect
    );

    let resized: Rect = outset_layout::compute_frame(padding, &container_rect, &current);
    artifact.set_frame(resized);
    artifact.frame_did_change();
}
