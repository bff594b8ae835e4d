/// A point or direction in 3D space.
///
/// Any triple of `f32` values is a valid `Vector3`, including non-finite ones; nothing is checked
/// on construction. Equality is exact per component, with no epsilon, so two vectors that differ
/// only by rounding compare unequal and a vector holding a NaN is never equal to itself.
///
/// The default value is the zero vector.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[repr(C)]
pub struct Vector3 {
  /// The x component.
  pub x: f32,
  /// The y component.
  pub y: f32,
  /// The z component.
  pub z: f32,
}
impl Vector3 {
  /// The zero vector, `(0, 0, 0)`.
  pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
  /// All components set to one.
  pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);
  /// The unit vector along the x axis.
  pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
  /// The unit vector along the y axis.
  pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
  /// The unit vector along the z axis.
  pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

  /// Constructs a vector from its components, stored as given.
  pub const fn new(x: f32, y: f32, z: f32) -> Self {
    Vector3 { x, y, z }
  }

  /// Returns the components as `[x, y, z]`.
  pub const fn to_array(self) -> [f32; 3] {
    [self.x, self.y, self.z]
  }
}

impl core::ops::Add for Vector3 {
  type Output = Self;

  fn add(self, rhs: Self) -> Self::Output {
    Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
  }
}
impl core::ops::Sub for Vector3 {
  type Output = Self;

  fn sub(self, rhs: Self) -> Self::Output {
    Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
  }
}
impl core::ops::Neg for Vector3 {
  type Output = Self;

  fn neg(self) -> Self::Output {
    Vector3::new(-self.x, -self.y, -self.z)
  }
}

impl core::ops::Mul<f32> for Vector3 {
  type Output = Self;

  fn mul(self, k: f32) -> Self::Output {
    Vector3::new(self.x * k, self.y * k, self.z * k)
  }
}
impl core::ops::Mul<Vector3> for f32 {
  type Output = Vector3;

  fn mul(self, v: Vector3) -> Self::Output {
    Vector3::new(self * v.x, self * v.y, self * v.z)
  }
}
/// Multiplies each component by `1.0 / k`.
///
/// There is no check for `k == 0.0`. Dividing by zero gives infinite components where the vector
/// is nonzero and NaN where it is zero, exactly as `f32` arithmetic does.
impl core::ops::Div<f32> for Vector3 {
  type Output = Self;

  #[allow(clippy::suspicious_arithmetic_impl)]
  fn div(self, k: f32) -> Self::Output {
    let inv = 1.0 / k;
    Vector3::new(self.x * inv, self.y * inv, self.z * inv)
  }
}

impl core::ops::AddAssign for Vector3 {
  fn add_assign(&mut self, rhs: Self) {
    *self = *self + rhs;
  }
}
impl core::ops::SubAssign for Vector3 {
  fn sub_assign(&mut self, rhs: Self) {
    *self = *self - rhs;
  }
}
impl core::ops::MulAssign<f32> for Vector3 {
  fn mul_assign(&mut self, k: f32) {
    *self = *self * k;
  }
}
impl core::ops::DivAssign<f32> for Vector3 {
  fn div_assign(&mut self, k: f32) {
    *self = *self / k;
  }
}

impl core::fmt::Display for Vector3 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "(")?;
    core::fmt::Display::fmt(&self.x, f)?;
    write!(f, ", ")?;
    core::fmt::Display::fmt(&self.y, f)?;
    write!(f, ", ")?;
    core::fmt::Display::fmt(&self.z, f)?;
    write!(f, ")")
  }
}
