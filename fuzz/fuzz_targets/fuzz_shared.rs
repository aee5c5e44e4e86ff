use cavity_mesh::Point2;

#[derive(Clone, Copy, arbitrary::Arbitrary)]
pub struct FuzzPoint {
    pub x: f64,
    pub y: f64,
}

impl FuzzPoint {
    pub fn is_usable(&self, max_value: f64) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.x.abs() <= max_value
            && self.y.abs() <= max_value
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

impl core::fmt::Debug for FuzzPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("Point2::new({:?}, {:?})", self.x, self.y))
    }
}
