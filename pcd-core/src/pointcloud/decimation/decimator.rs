use std::num::NonZeroUsize;

use crate::pointcloud::point::Point;

pub trait PointCloudDecimator {
    fn decimate(&self, points: &[Point]) -> Vec<Point>;
}

/// Keeps every `step`-th point, starting with the first one.
pub struct StrideDecimator {
    pub step: NonZeroUsize,
}

impl StrideDecimator {
    pub fn new(step: NonZeroUsize) -> Self {
        Self { step }
    }

    pub fn decimated_len(&self, len: usize) -> usize {
        len.div_ceil(self.step.get())
    }
}

impl PointCloudDecimator for StrideDecimator {
    fn decimate(&self, points: &[Point]) -> Vec<Point> {
        if self.step.get() == 1 {
            return points.to_vec();
        }

        let mut decimated_points = Vec::with_capacity(self.decimated_len(points.len()));
        decimated_points.extend(points.iter().step_by(self.step.get()).cloned());
        decimated_points
    }
}
