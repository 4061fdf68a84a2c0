#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// Coordinates stay in f64 until the splat encoding step.
// LiDAR captures are often georeferenced, so raw values can be in the millions
// and lose sub-millimeter detail if truncated to f32 before centering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub color: Color,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64, color: Color) -> Self {
        Self { x, y, z, color }
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn to_rgb8(&self) -> [u8; 3] {
        [self.color.r, self.color.g, self.color.b]
    }
}

#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    pub points: Vec<Point>,
}

impl PointCloud {
    pub fn new(points: Vec<Point>) -> Self {
        PointCloud { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64, &Point)> {
        self.points
            .iter()
            .map(|point| (point.x, point.y, point.z, point))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        self.points.iter_mut()
    }

    /// Arithmetic mean of the coordinates, accumulated in f64.
    /// Returns `None` for an empty cloud.
    pub fn centroid(&self) -> Option<[f64; 3]> {
        if self.points.is_empty() {
            return None;
        }

        let mut sum = [0.0_f64; 3];
        for (x, y, z, _) in self.iter() {
            sum[0] += x;
            sum[1] += y;
            sum[2] += z;
        }

        let n = self.points.len() as f64;
        Some([sum[0] / n, sum[1] / n, sum[2] / n])
    }

    /// Axis-aligned bounds of the coordinates. Returns `None` for an empty cloud.
    pub fn bounding_volume(&self) -> Option<BoundingVolume> {
        let first = self.points.first()?;
        let mut bounding_volume = BoundingVolume {
            min: [first.x, first.y, first.z],
            max: [first.x, first.y, first.z],
        };

        for point in &self.points[1..] {
            bounding_volume.max[0] = bounding_volume.max[0].max(point.x);
            bounding_volume.max[1] = bounding_volume.max[1].max(point.y);
            bounding_volume.max[2] = bounding_volume.max[2].max(point.z);
            bounding_volume.min[0] = bounding_volume.min[0].min(point.x);
            bounding_volume.min[1] = bounding_volume.min[1].min(point.y);
            bounding_volume.min[2] = bounding_volume.min[2].min(point.z);
        }

        Some(bounding_volume)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundingVolume {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl BoundingVolume {
    pub fn extent(&self) -> [f64; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_point(x: f64, y: f64, z: f64) -> Point {
        Point::new(x, y, z, Color::default())
    }

    #[test]
    fn bounding_volume_covers_all_points() {
        let pc = PointCloud::new(vec![
            make_point(1.0, -2.0, 3.0),
            make_point(-4.0, 5.0, 0.5),
        ]);
        let bounds = pc.bounding_volume().unwrap();
        assert_eq!(bounds.min, [-4.0, -2.0, 0.5]);
        assert_eq!(bounds.max, [1.0, 5.0, 3.0]);
        assert_eq!(bounds.extent(), [5.0, 7.0, 2.5]);
    }

    #[test]
    fn empty_cloud_has_no_bounds() {
        assert!(PointCloud::new(vec![]).bounding_volume().is_none());
    }

    #[test]
    fn centroid_keeps_precision_on_large_coordinates() {
        let pc = PointCloud::new(vec![
            make_point(500_000.125, 4_200_000.5, 100.0),
            make_point(500_000.375, 4_200_001.5, 102.0),
        ]);
        let c = pc.centroid().unwrap();
        assert_eq!(c, [500_000.25, 4_200_001.0, 101.0]);
    }

    #[test]
    fn centroid_of_empty_cloud_is_none() {
        assert!(PointCloud::new(vec![]).centroid().is_none());
    }
}
