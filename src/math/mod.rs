mod aabb;
mod vector;

pub use aabb::AABB;
pub use vector::{horizontal, right_of, unit_or_zero};
