use palette::{IntoColor, Oklch, Srgb};

/// A color as authored by widgets and themes.
///
/// Themes are written in oklch so lightness adjustments stay perceptually even;
/// everything is resolved to [`Rgb`] before it reaches the cell buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Raise lightness by `amount` (0.0..=1.0). Rgb colors are converted first.
    pub fn lighten(self, amount: f32) -> Self {
        let (l, c, h) = self.to_lch();
        Self::oklch((l + amount).clamp(0.0, 1.0), c, h)
    }

    /// Lower lightness by `amount` (0.0..=1.0). Rgb colors are converted first.
    pub fn darken(self, amount: f32) -> Self {
        let (l, c, h) = self.to_lch();
        Self::oklch((l - amount).clamp(0.0, 1.0), c, h)
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
            Self::Oklch { l, c, h } => {
                let oklch = Oklch::new(l, c, h);
                let srgb: Srgb = oklch.into_color();
                let (r, g, b) = srgb.into_format::<u8>().into_components();
                Rgb::new(r, g, b)
            }
        }
    }

    fn to_lch(self) -> (f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h } => (l, c, h),
            Self::Rgb { r, g, b } => {
                let srgb = Srgb::new(r, g, b).into_format::<f32>();
                let oklch: Oklch = srgb.into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
            }
        }
    }
}
