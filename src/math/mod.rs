use crate::error::TransformError;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Transforms a point by a 4x4 matrix (homogeneous coordinates).
///
/// The matrix is assumed to be affine, so the resulting `w` is ignored.
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}

/// Inverts an affine transform.
///
/// # Errors
///
/// Returns [`TransformError::NonInvertible`] if the determinant is within
/// [`TOLERANCE`] of zero (e.g. a zero scale on any axis).
pub fn invert_affine(matrix: &Matrix4) -> Result<Matrix4, TransformError> {
    if matrix.determinant().abs() < TOLERANCE {
        return Err(TransformError::NonInvertible);
    }
    matrix.try_inverse().ok_or(TransformError::NonInvertible)
}
