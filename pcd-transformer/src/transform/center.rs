use pcd_core::pointcloud::point::PointCloud;

use super::Transform;

/// Moves the centroid of the cloud to the origin. Works in f64 so that
/// georeferenced coordinates keep their precision.
pub struct CenterTransform;

impl CenterTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CenterTransform {
    fn default() -> Self {
        Self
    }
}

impl Transform for CenterTransform {
    fn transform(&self, mut point_cloud: PointCloud) -> PointCloud {
        let Some([mean_x, mean_y, mean_z]) = point_cloud.centroid() else {
            return point_cloud;
        };
        log::debug!("centroid: ({mean_x}, {mean_y}, {mean_z})");

        for point in point_cloud.iter_mut() {
            point.set(point.x - mean_x, point.y - mean_y, point.z - mean_z);
        }

        point_cloud
    }
}

#[cfg(test)]
mod tests {
    use pcd_core::pointcloud::point::{Color, Point};

    use super::*;

    #[test]
    fn centered_cloud_has_zero_mean() {
        let points = vec![
            Point::new(612_345.101, 5_432_100.25, 87.5, Color::default()),
            Point::new(612_346.303, 5_432_101.75, 88.0, Color::default()),
            Point::new(612_344.707, 5_432_099.5, 86.25, Color::default()),
        ];
        let centered = CenterTransform::new().transform(PointCloud::new(points));

        let mean = centered.centroid().unwrap();
        for m in mean {
            assert!(m.abs() < 1e-6, "{mean:?}");
        }
        assert_eq!(centered.len(), 3);
    }

    #[test]
    fn empty_cloud_is_unchanged() {
        let centered = CenterTransform::new().transform(PointCloud::new(vec![]));
        assert!(centered.is_empty());
    }
}
