use core::fmt;

/// The ways a curve point can be represented.
///
/// Binary curves in general can be worked with in any of these systems but
/// [sect113r2] only supports [`LambdaProjective`]: an affine `x`, a `λ`
/// coordinate in place of `y` (`λ = x + y/x` once normalized) and a single
/// projective `z`.
///
/// [sect113r2]: crate::SECT113R2
/// [`LambdaProjective`]: CoordinateSystem::LambdaProjective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum CoordinateSystem {
    /// `(x, y)`
    Affine,
    /// `(X, Y, Z)` with `x = X/Z`, `y = Y/Z`
    Homogeneous,
    /// `(X, Y, Z)` with `x = X/Z²`, `y = Y/Z³`
    Jacobian,
    /// Jacobian with cached `Z²` and `Z³`
    JacobianChudnovsky,
    /// Jacobian with cached `aZ⁴`
    JacobianModified,
    /// `(x, λ)`
    LambdaAffine,
    /// `(X, L, Z)` with `x = X/Z`, `λ = L/Z`
    LambdaProjective,
    /// Skewed projective coordinates
    Skewed,
}

impl CoordinateSystem {
    /// Number of auxiliary z-coordinates a point carries in this system.
    pub const fn z_count(self) -> usize {
        use CoordinateSystem::*;
        match self {
            Affine | LambdaAffine => 0,
            Homogeneous | Jacobian | LambdaProjective | Skewed => 1,
            JacobianModified => 2,
            JacobianChudnovsky => 3,
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use CoordinateSystem::*;
        let name = match self {
            Affine => "affine",
            Homogeneous => "homogeneous",
            Jacobian => "jacobian",
            JacobianChudnovsky => "jacobian-chudnovsky",
            JacobianModified => "jacobian-modified",
            LambdaAffine => "lambda-affine",
            LambdaProjective => "lambda-projective",
            Skewed => "skewed",
        };
        write!(f, "{}", name)
    }
}
