//! Ribbon geometry
//!
//! Turns a centerline plus a per-point half-width into a closed filled
//! polygon by offsetting each point along its local normal. Seaweed stalks
//! and ribbon-style coral stems are both drawn this way.

use glam::Vec2;

/// Build a closed ribbon outline around `centerline`.
///
/// The tangent at point `i` is estimated from its clamped neighbors
/// (`i-1` to `i+1`), and the point is offset by `half_width(i)` along the
/// left and right normals. The returned polygon walks the left edge
/// base to tip, then the right edge tip back to base, so a single
/// closed-path fill produces the ribbon.
///
/// The tangent length is floored at 1.0, which keeps the normal finite
/// when adjacent points coincide. The result has exactly `2 * N` vertices
/// for `N` input points. Callers wanting a pointed tip must taper
/// `half_width` to (or toward) zero at the last index.
pub fn ribbon_outline(centerline: &[Vec2], half_width: impl Fn(usize) -> f32) -> Vec<Vec2> {
    let n = centerline.len();
    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);

    for (i, &p) in centerline.iter().enumerate() {
        let prev = centerline[i.saturating_sub(1)];
        let next = centerline[(i + 1).min(n - 1)];
        let d = next - prev;
        let len = d.length().max(1.0);
        let normal = Vec2::new(-d.y, d.x) / len;

        let half = half_width(i);
        left.push(p + normal * half);
        right.push(p - normal * half);
    }

    left.extend(right.into_iter().rev());
    left
}
