use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MandelbrotColourMapKinds {
    #[default]
    HsvRamp,
    RgbRamp,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::HsvRamp, Self::RgbRamp];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HsvRamp => "HSV ramp",
            Self::RgbRamp => "RGB ramp",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
