use std::fmt;

/// A two-state classical bit, written by measurements and read by
/// classically-controlled gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ClassicBit {
    #[default]
    Zero,
    One,
}

impl ClassicBit {
    pub fn is_one(self) -> bool {
        self == ClassicBit::One
    }

    pub fn is_zero(self) -> bool {
        self == ClassicBit::Zero
    }
}

impl From<bool> for ClassicBit {
    fn from(value: bool) -> Self {
        if value { ClassicBit::One } else { ClassicBit::Zero }
    }
}

impl From<ClassicBit> for u8 {
    fn from(bit: ClassicBit) -> Self {
        match bit {
            ClassicBit::Zero => 0,
            ClassicBit::One => 1,
        }
    }
}

impl fmt::Display for ClassicBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassicBit::Zero => write!(f, "0"),
            ClassicBit::One => write!(f, "1"),
        }
    }
}
