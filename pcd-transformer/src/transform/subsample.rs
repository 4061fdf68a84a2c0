use std::num::NonZeroUsize;

use pcd_core::pointcloud::{
    decimation::decimator::{PointCloudDecimator as _, StrideDecimator},
    point::PointCloud,
};

use super::Transform;

pub struct SubsampleTransform {
    decimator: StrideDecimator,
}

impl SubsampleTransform {
    pub fn new(density_step: NonZeroUsize) -> Self {
        Self {
            decimator: StrideDecimator::new(density_step),
        }
    }
}

impl Transform for SubsampleTransform {
    fn transform(&self, point_cloud: PointCloud) -> PointCloud {
        if self.decimator.step.get() == 1 {
            return point_cloud;
        }

        let before = point_cloud.len();
        let decimated = PointCloud::new(self.decimator.decimate(&point_cloud.points));
        log::debug!(
            "subsampled {} -> {} points (step {})",
            before,
            decimated.len(),
            self.decimator.step
        );
        decimated
    }
}
