/// Vertex property names of a Gaussian splat PLY, in file order.
pub const SPLAT_PROPERTY_NAMES: [&str; 14] = [
    "x", "y", "z", "f_dc_0", "f_dc_1", "f_dc_2", "opacity", "scale_0", "scale_1", "scale_2",
    "rot_0", "rot_1", "rot_2", "rot_3",
];

/// Identity rotation, real part first.
pub const IDENTITY_ROTATION: [f32; 4] = [1.0, 0.0, 0.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplatPoint {
    pub position: [f32; 3],
    pub f_dc: [f32; 3],
    pub opacity: f32,
    pub scale: [f32; 3],
    pub rotation: [f32; 4],
}

impl SplatPoint {
    pub const PROPERTY_COUNT: usize = SPLAT_PROPERTY_NAMES.len();

    /// Values in the order of `SPLAT_PROPERTY_NAMES`.
    pub fn to_array(&self) -> [f32; SplatPoint::PROPERTY_COUNT] {
        let [x, y, z] = self.position;
        let [r, g, b] = self.f_dc;
        let [s0, s1, s2] = self.scale;
        let [q0, q1, q2, q3] = self.rotation;
        [x, y, z, r, g, b, self.opacity, s0, s1, s2, q0, q1, q2, q3]
    }
}

#[derive(Debug, Clone, Default)]
pub struct SplatCloud {
    pub splats: Vec<SplatPoint>,
}

impl SplatCloud {
    pub fn new(splats: Vec<SplatPoint>) -> Self {
        Self { splats }
    }

    pub fn len(&self) -> usize {
        self.splats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.splats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SplatPoint> {
        self.splats.iter()
    }
}
