use pcd_core::pointcloud::{point::PointCloud, splat::SplatCloud};

use crate::{
    builder::{SplatTransformBuilder, TransformBuilder as _},
    config::TransformConfig,
    encoder::SplatEncoder,
    transform::Transform,
};

pub trait Transformer {
    fn execute(&self, point_cloud: PointCloud) -> SplatCloud;
}

pub struct PointCloudTransformer {
    transform: Box<dyn Transform>,
    encoder: SplatEncoder,
}

impl PointCloudTransformer {
    pub fn new(config: TransformConfig) -> Self {
        Self {
            transform: SplatTransformBuilder::new(config).build(),
            encoder: SplatEncoder {
                y_offset: config.y_offset,
                scale: config.gaussian_scale,
                opacity: config.gaussian_opacity,
            },
        }
    }
}

impl Transformer for PointCloudTransformer {
    fn execute(&self, point_cloud: PointCloud) -> SplatCloud {
        let transformed = self.transform.transform(point_cloud);
        log::info!("--- Processing {} points with High Precision ---", transformed.len());
        self.encoder.encode(&transformed)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use pcd_core::pointcloud::point::{Color, Point};

    use super::*;
    use crate::encoder::color_to_sh_dc;

    fn sample_cloud() -> PointCloud {
        PointCloud::new(vec![
            Point::new(1000.0, 2000.0, 10.0, Color { r: 255, g: 0, b: 0 }),
            Point::new(1002.0, 2000.0, 12.0, Color { r: 0, g: 255, b: 0 }),
            Point::new(1000.0, 2004.0, 14.0, Color { r: 0, g: 0, b: 255 }),
            Point::new(1002.0, 2004.0, 16.0, Color { r: 128, g: 128, b: 128 }),
        ])
    }

    fn config() -> TransformConfig {
        TransformConfig {
            density_step: NonZeroUsize::MIN,
            y_offset: 200.0,
            gaussian_scale: -3.0,
            gaussian_opacity: 20.0,
        }
    }

    #[test]
    fn four_point_scenario() {
        let splats = PointCloudTransformer::new(config()).execute(sample_cloud());

        // mean = (1001, 2002, 13)
        let expected_positions = [
            [-1.0, 203.0, -2.0],
            [1.0, 201.0, -2.0],
            [-1.0, 199.0, 2.0],
            [1.0, 197.0, 2.0],
        ];

        assert_eq!(splats.len(), 4);
        for (splat, expected) in splats.iter().zip(expected_positions) {
            assert_eq!(splat.position, expected);
            assert_eq!(splat.scale, [-3.0, -3.0, -3.0]);
            assert_eq!(splat.opacity, 20.0);
            assert_eq!(splat.rotation, [1.0, 0.0, 0.0, 0.0]);
        }
        assert_eq!(
            splats.splats[0].f_dc,
            [color_to_sh_dc(255), color_to_sh_dc(0), color_to_sh_dc(0)]
        );
        assert_eq!(splats.splats[3].f_dc, [color_to_sh_dc(128); 3]);
    }

    #[test]
    fn axis_remap_matches_centered_input() {
        let cloud = sample_cloud();
        let [mx, my, mz] = cloud.centroid().unwrap();
        let splats = PointCloudTransformer::new(TransformConfig {
            y_offset: 0.0,
            ..config()
        })
        .execute(cloud.clone());

        for (splat, point) in splats.iter().zip(&cloud.points) {
            assert_eq!(splat.position[0], (point.x - mx) as f32);
            assert_eq!(splat.position[1], (-(point.z - mz)) as f32);
            assert_eq!(splat.position[2], (point.y - my) as f32);
        }
    }

    #[test]
    fn stride_selects_every_kth_point_before_centering() {
        let splats = PointCloudTransformer::new(TransformConfig {
            density_step: NonZeroUsize::new(3).unwrap(),
            y_offset: 0.0,
            ..config()
        })
        .execute(sample_cloud());

        // points 0 and 3 are kept; their mean is (1001, 2002, 13)
        assert_eq!(splats.len(), 2);
        assert_eq!(splats.splats[0].position, [-1.0, 3.0, -2.0]);
        assert_eq!(splats.splats[1].position, [1.0, -3.0, 2.0]);
    }

    #[test]
    fn empty_cloud_yields_no_splats() {
        let splats = PointCloudTransformer::new(config()).execute(PointCloud::new(vec![]));
        assert!(splats.is_empty());
    }
}
