#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionSize {
    Fixed(usize),
    /// Grows as records are appended. At most one per file.
    Unlimited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub name: String,
    pub size: DimensionSize,
}

impl Dimension {
    pub fn fixed(name: &str, len: usize) -> Self {
        Self {
            name: name.to_owned(),
            size: DimensionSize::Fixed(len),
        }
    }

    pub fn unlimited(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            size: DimensionSize::Unlimited,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.size == DimensionSize::Unlimited
    }

    /// Current length, 0 for an unlimited dimension without records.
    pub fn len(&self) -> usize {
        match self.size {
            DimensionSize::Fixed(len) => len,
            DimensionSize::Unlimited => 0,
        }
    }
}
