use crate::vec3::Vec3;

/// Determinant of a 3x3 matrix given as rows, by cofactor expansion along the first row.
///
/// Anything that is not exactly three rows of three values has no determinant here and yields
/// `0.0`, which callers treat the same as a singular system.
pub fn determinant3x3<R: AsRef<[f64]>>(rows: &[R]) -> f64 {
    if rows.len() != 3 || rows.iter().any(|row| row.as_ref().len() != 3) {
        return 0.0;
    }

    let (r0, r1, r2) = (rows[0].as_ref(), rows[1].as_ref(), rows[2].as_ref());
    let (a, b, c) = (r0[0], r0[1], r0[2]);
    let (d, e, f) = (r1[0], r1[1], r1[2]);
    let (g, h, i) = (r2[0], r2[1], r2[2]);

    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

///
/// Index notation is: i, j - row, column.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix3x3([[f64; 3]; 3]);

impl Matrix3x3 {
    pub fn new(rows: [[f64; 3]; 3]) -> Self {
        Matrix3x3(rows)
    }

    pub fn identity() -> Self {
        Matrix3x3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Builds the matrix whose columns are `c0`, `c1` and `c2`.
    pub fn from_columns(c0: Vec3<f64>, c1: Vec3<f64>, c2: Vec3<f64>) -> Self {
        Matrix3x3::new([[c0.x, c1.x, c2.x], [c0.y, c1.y, c2.y], [c0.z, c1.z, c2.z]])
    }

    /// Copy of this matrix with column `j` replaced by `v`, as used by Cramer's rule.
    pub fn with_column(&self, j: usize, v: Vec3<f64>) -> Self {
        let mut m = self.0;
        m[0][j] = v.x;
        m[1][j] = v.y;
        m[2][j] = v.z;
        Matrix3x3(m)
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        determinant3x3(&self.0)
    }
}
