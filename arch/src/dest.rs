use std::fmt;

/// Destination field of a C-instruction: where the ALU output is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dest {
    pub a: bool,
    pub d: bool,
    pub m: bool,
}

impl Dest {
    /// Collect destination letters in any order. Repeated letters are
    /// harmless. Characters other than `A` `D` `M` are returned so the
    /// caller can report them.
    pub fn parse(s: &str) -> (Self, Vec<char>) {
        let mut dest = Dest::default();
        let mut unknown = vec![];
        for c in s.chars() {
            match c {
                'A' => dest.a = true,
                'D' => dest.d = true,
                'M' => dest.m = true,
                _ => unknown.push(c),
            }
        }
        (dest, unknown)
    }

    /// `d1 d2 d3` = `A D M`
    pub fn bits(&self) -> u8 {
        (self.a as u8) << 2 | (self.d as u8) << 1 | self.m as u8
    }

    pub fn from_bits(bits: u8) -> Self {
        Dest {
            a: bits & 0b100 != 0,
            d: bits & 0b010 != 0,
            m: bits & 0b001 != 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits() == 0
    }
}

impl fmt::Display for Dest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a {
            write!(f, "A")?;
        }
        if self.m {
            write!(f, "M")?;
        }
        if self.d {
            write!(f, "D")?;
        }
        Ok(())
    }
}
