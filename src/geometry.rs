use num_traits::Float;

use crate::Vector3;

impl Vector3 {
  /// Returns a unit-length vector pointing the same way as `v`.
  ///
  /// The zero vector has no direction, so it normalizes to the zero vector instead of to NaNs.
  /// The same holds for any input whose squared magnitude is not strictly positive, which includes
  /// vectors with a NaN component. Use [`try_normalize`](Self::try_normalize) to tell those cases
  /// apart from a real result.
  pub fn normalize(v: Vector3) -> Vector3 {
    Self::try_normalize(v).unwrap_or(Vector3::ZERO)
  }

  /// Like [`normalize`](Self::normalize), but returns `None` when `v` has no direction.
  pub fn try_normalize(v: Vector3) -> Option<Vector3> {
    let sq = Self::magnitude_squared(v);
    if sq > 0.0 {
      let inv = 1.0 / Float::sqrt(sq);
      Some(Vector3::new(v.x * inv, v.y * inv, v.z * inv))
    } else {
      None
    }
  }

  /// The Euclidean length of `v`.
  pub fn magnitude(v: Vector3) -> f32 {
    Float::sqrt(Self::magnitude_squared(v))
  }

  /// The squared length of `v`, without the square root.
  pub fn magnitude_squared(v: Vector3) -> f32 {
    Self::dot(v, v)
  }

  pub fn dot(u: Vector3, v: Vector3) -> f32 {
    u.x * v.x + u.y * v.y + u.z * v.z
  }

  /// The right-handed cross product `u × v`.
  ///
  /// `cross(u, v) == -cross(v, u)`, and the result is the zero vector when `u` and `v` are
  /// parallel.
  pub fn cross(u: Vector3, v: Vector3) -> Vector3 {
    Vector3::new(
      u.y * v.z - u.z * v.y,
      u.z * v.x - u.x * v.z,
      u.x * v.y - u.y * v.x,
    )
  }

  /// The Euclidean distance between the points `u` and `v`. Same as `magnitude(u - v)`.
  pub fn distance(u: Vector3, v: Vector3) -> f32 {
    Float::sqrt(Self::distance_squared(u, v))
  }

  pub fn distance_squared(u: Vector3, v: Vector3) -> f32 {
    Self::magnitude_squared(u - v)
  }

  /// Linear interpolation from `u` at `t = 0` to `v` at `t = 1`. `t` is not clamped.
  pub fn lerp(u: Vector3, v: Vector3, t: f32) -> Vector3 {
    u + (v - u) * t
  }
}
