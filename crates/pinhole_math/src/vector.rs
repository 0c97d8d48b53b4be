// Vector utilities for Vec3
//
// Extends glam::Vec3 with the small set of helpers the ray caster leans on.
// Dot product, arithmetic and indexing come straight from glam.

use glam::Vec3;

/// Extension trait for Vec3 to provide ray casting utilities
pub trait Vec3Ext {
    /// Normalize to unit length.
    ///
    /// A zero-length (or non-finite) vector has no direction, so it maps to
    /// `Vec3::ZERO` instead of producing NaNs.
    fn unit(self) -> Vec3;

    /// Clamp every component into [0, 1].
    fn saturate(self) -> Vec3;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn unit(self) -> Vec3 {
        self.normalize_or_zero()
    }

    #[inline]
    fn saturate(self) -> Vec3 {
        self.clamp(Vec3::ZERO, Vec3::ONE)
    }
}
