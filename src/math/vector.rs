use glam::Vec3;

/// Removes the component of `v` along `up` and renormalises.
/// Returns zero when nothing is left (looking straight up or down).
pub fn horizontal(v: Vec3, up: Vec3) -> Vec3 {
    let up = unit_or_zero(up);
    unit_or_zero(v - up * v.dot(up))
}

/// Strafe axis for `forward`: `-(forward × up)`, renormalised.
/// Zero when `forward` is parallel to `up`.
pub fn right_of(forward: Vec3, up: Vec3) -> Vec3 {
    unit_or_zero(-forward.cross(up))
}

/// Normalises `v`, mapping zero-length (or non-finite) input to zero.
pub fn unit_or_zero(v: Vec3) -> Vec3 {
    let len_sq = v.length_squared();
    if len_sq > 0.0 && len_sq.is_finite() {
        v / len_sq.sqrt()
    } else {
        Vec3::ZERO
    }
}
