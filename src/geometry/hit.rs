use super::angle::normalize;
use super::layout::SectorSpan;

/// Resolve a pointer position into the sector it falls within.
///
/// `dx`/`dy` are relative to the menu center, in the same coordinate space the
/// spans were built in. Returns `None` inside the hole, outside the ring
/// (both radius boundaries excluded) or when the angle lands in a gap.
///
/// Ordinary sectors are tested with the half-open rule, so a pointer exactly
/// on a shared boundary belongs to the sector that starts there. The wrap
/// sector fails that test by construction and gets a second pass with the
/// angle lifted past a full turn.
pub fn locate(
    dx: f64,
    dy: f64,
    spans: &[SectorSpan],
    wrap_index: Option<usize>,
    inner_radius: f64,
    outer_radius: f64,
) -> Option<usize> {
    let d = dx.hypot(dy);
    if d <= inner_radius || d >= outer_radius {
        return None;
    }

    let a = normalize(dy.atan2(dx));
    if let Some(i) = spans.iter().position(|s| s.contains(a)) {
        return Some(i);
    }

    let w = wrap_index?;
    spans.get(w).filter(|s| s.contains_wrapped(a)).map(|_| w)
}
