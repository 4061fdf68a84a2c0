use std::num::NonZeroUsize;

/// Parameters of the LiDAR to splat conversion. Every point gets the same
/// synthetic Gaussian attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformConfig {
    /// Keep every `density_step`-th point. 1 keeps the full cloud.
    pub density_step: NonZeroUsize,
    /// Added to the vertical (Y-up) axis after recentering.
    pub y_offset: f32,
    /// Log-space splat scale, applied to all three axes.
    pub gaussian_scale: f32,
    /// Pre-sigmoid splat opacity.
    pub gaussian_opacity: f32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            density_step: NonZeroUsize::MIN,
            y_offset: 200.0,
            gaussian_scale: -3.0,
            gaussian_opacity: 20.0,
        }
    }
}
