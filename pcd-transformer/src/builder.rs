use crate::{
    config::TransformConfig,
    transform::{
        axis::AxisRemapTransform, center::CenterTransform, subsample::SubsampleTransform,
        CompositeTransform, Transform,
    },
};

pub trait TransformBuilder {
    fn build(&self) -> Box<dyn Transform>;
}

/// Subsample, center, then remap to Y-up. All stages run in f64.
pub struct SplatTransformBuilder {
    config: TransformConfig,
}

impl SplatTransformBuilder {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }
}

impl TransformBuilder for SplatTransformBuilder {
    fn build(&self) -> Box<dyn Transform> {
        let subsample = Box::new(SubsampleTransform::new(self.config.density_step));
        let center = Box::new(CenterTransform::new());
        let axis_remap = Box::new(AxisRemapTransform::new());

        let composite = CompositeTransform::new(vec![subsample, center, axis_remap]);

        Box::new(composite)
    }
}
