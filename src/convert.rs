use crate::Vector3;

impl From<[f32; 3]> for Vector3 {
  fn from(a: [f32; 3]) -> Self {
    Vector3::new(a[0], a[1], a[2])
  }
}
impl From<Vector3> for [f32; 3] {
  fn from(v: Vector3) -> Self {
    v.to_array()
  }
}

impl From<(f32, f32, f32)> for Vector3 {
  fn from((x, y, z): (f32, f32, f32)) -> Self {
    Vector3::new(x, y, z)
  }
}
impl From<Vector3> for (f32, f32, f32) {
  fn from(v: Vector3) -> Self {
    (v.x, v.y, v.z)
  }
}

/// Drops the unit tag; `Vector3` carries no coordinate space.
impl<U> From<euclid::Vector3D<f32, U>> for Vector3 {
  fn from(e: euclid::Vector3D<f32, U>) -> Self {
    Vector3::new(e.x, e.y, e.z)
  }
}
impl<U> From<Vector3> for euclid::Vector3D<f32, U> {
  fn from(v: Vector3) -> Self {
    euclid::Vector3D::new(v.x, v.y, v.z)
  }
}

impl<U> From<euclid::Point3D<f32, U>> for Vector3 {
  fn from(e: euclid::Point3D<f32, U>) -> Self {
    Vector3::new(e.x, e.y, e.z)
  }
}
impl<U> From<Vector3> for euclid::Point3D<f32, U> {
  fn from(v: Vector3) -> Self {
    euclid::Point3D::new(v.x, v.y, v.z)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct WorldSpace;

  #[test]
  fn arrays_and_tuples() {
    let v = Vector3::from([1.0, 2.0, 3.0]);
    assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);

    let t: (f32, f32, f32) = v.into();
    assert_eq!(t, (1.0, 2.0, 3.0));
    assert_eq!(Vector3::from((4.0, 5.0, 6.0)), Vector3::new(4.0, 5.0, 6.0));
  }

  #[test]
  fn euclid_vectors() {
    let e = euclid::default::Vector3D::new(1.0f32, -2.0, 3.5);
    let v = Vector3::from(e);
    assert_eq!(v, Vector3::new(1.0, -2.0, 3.5));

    let back: euclid::Vector3D<f32, WorldSpace> = v.into();
    assert_eq!((back.x, back.y, back.z), (1.0, -2.0, 3.5));

    // Both sides agree on the geometry.
    let a = euclid::default::Vector3D::new(1.0f32, 2.0, 3.0);
    let b = euclid::default::Vector3D::new(4.0f32, 5.0, 6.0);
    assert_eq!(Vector3::from(a.cross(b)), Vector3::cross(a.into(), b.into()));
    assert_eq!(a.dot(b), Vector3::dot(a.into(), b.into()));
  }

  #[test]
  fn euclid_points() {
    let p = euclid::Point3D::<f32, WorldSpace>::new(7.0, 8.0, 9.0);
    let v = Vector3::from(p);
    assert_eq!(v, Vector3::new(7.0, 8.0, 9.0));

    let q: euclid::default::Point3D<f32> = (v * 2.0).into();
    assert_eq!(q, euclid::default::Point3D::new(14.0, 16.0, 18.0));
  }
}
