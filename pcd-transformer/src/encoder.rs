use pcd_core::pointcloud::{
    point::{Color, PointCloud},
    splat::{SplatCloud, SplatPoint, IDENTITY_ROTATION},
};

/// Zeroth-order real spherical harmonic, Y_0^0 = 1 / (2 * sqrt(pi)).
pub const SH_C0: f32 = 0.28209;

/// Maps an 8-bit channel to its DC spherical-harmonic coefficient.
pub fn color_to_sh_dc(channel: u8) -> f32 {
    (channel as f32 / 255.0 - 0.5) / SH_C0
}

/// Turns an already centered and remapped cloud into uniform, isotropic splats.
#[derive(Debug, Clone, Copy)]
pub struct SplatEncoder {
    pub y_offset: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl SplatEncoder {
    pub fn encode(&self, point_cloud: &PointCloud) -> SplatCloud {
        let splats = point_cloud
            .iter()
            .map(|(x, y, z, point)| SplatPoint {
                // Truncate first, then offset in f32.
                position: [x as f32, y as f32 + self.y_offset, z as f32],
                f_dc: encode_color(point.color),
                opacity: self.opacity,
                scale: [self.scale; 3],
                rotation: IDENTITY_ROTATION,
            })
            .collect();

        SplatCloud::new(splats)
    }
}

fn encode_color(color: Color) -> [f32; 3] {
    [
        color_to_sh_dc(color.r),
        color_to_sh_dc(color.g),
        color_to_sh_dc(color.b),
    ]
}
