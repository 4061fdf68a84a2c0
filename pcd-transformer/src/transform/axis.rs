use pcd_core::pointcloud::point::PointCloud;

use super::Transform;

/// LiDAR Z-up to WebGL Y-up, with the vertical axis flipped:
/// x' = x, y' = -z, z' = y
pub struct AxisRemapTransform;

impl AxisRemapTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AxisRemapTransform {
    fn default() -> Self {
        Self
    }
}

impl Transform for AxisRemapTransform {
    fn transform(&self, mut point_cloud: PointCloud) -> PointCloud {
        for point in point_cloud.iter_mut() {
            point.set(point.x, -point.z, point.y);
        }

        point_cloud
    }
}

#[cfg(test)]
mod tests {
    use pcd_core::pointcloud::point::{Color, Point};

    use super::*;

    #[test]
    fn z_up_becomes_negative_y() {
        let color = Color { r: 1, g: 2, b: 3 };
        let remapped = AxisRemapTransform::new()
            .transform(PointCloud::new(vec![Point::new(1.0, 2.0, 3.0, color)]));

        let p = &remapped.points[0];
        assert_eq!((p.x, p.y, p.z), (1.0, -3.0, 2.0));
        assert_eq!(p.color, color);
    }
}
