use pcd_core::pointcloud::point::PointCloud;

pub mod axis;
pub mod center;
pub mod subsample;

pub trait Transform {
    fn transform(&self, point_cloud: PointCloud) -> PointCloud;
}

pub struct CompositeTransform {
    transforms: Vec<Box<dyn Transform>>,
}

impl CompositeTransform {
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Self {
        Self { transforms }
    }
}

impl Transform for CompositeTransform {
    fn transform(&self, point_cloud: PointCloud) -> PointCloud {
        let mut intermediate = point_cloud;

        for transform in &self.transforms {
            intermediate = transform.transform(intermediate);
        }

        intermediate
    }
}
