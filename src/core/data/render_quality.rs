/// How densely a frame is sampled. Reduced frames compute only even-indexed
/// rows and columns and leave the rest at the background value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderQuality {
    Full,
    Reduced,
}

impl RenderQuality {
    #[must_use]
    pub const fn stride(self) -> usize {
        match self {
            Self::Full => 1,
            Self::Reduced => 2,
        }
    }
}
