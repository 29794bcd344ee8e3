use bimap::BiMap;
use once_cell::sync::Lazy;

/// Computation field of a C-instruction.
///
/// Holds the raw 7-bit code (`a c1 c2 c3 c4 c5 c6`). Any code can be held so
/// that decoding never fails, but only the 28 entries of [`COMP`] have a
/// mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comp(u8);

/// Mnemonic <-> code table. Codes are unique, so the same table decodes.
pub static COMP: Lazy<BiMap<&'static str, u8>> = Lazy::new(|| {
    let mut map = BiMap::new();
    // a = 0
    map.insert("0", 0b0101010);
    map.insert("1", 0b0111111);
    map.insert("-1", 0b0111010);
    map.insert("D", 0b0001100);
    map.insert("A", 0b0110000);
    map.insert("!D", 0b0001101);
    map.insert("!A", 0b0110001);
    map.insert("-D", 0b0001111);
    map.insert("-A", 0b0110011);
    map.insert("D+1", 0b0011111);
    map.insert("A+1", 0b0110111);
    map.insert("D-1", 0b0001110);
    map.insert("A-1", 0b0110010);
    map.insert("D+A", 0b0000010);
    map.insert("D-A", 0b0010011);
    map.insert("A-D", 0b0000111);
    map.insert("D&A", 0b0000000);
    map.insert("D|A", 0b0010101);
    // a = 1
    map.insert("M", 0b1110000);
    map.insert("!M", 0b1110001);
    map.insert("-M", 0b1110011);
    map.insert("M+1", 0b1110111);
    map.insert("M-1", 0b1110010);
    map.insert("D+M", 0b1000010);
    map.insert("D-M", 0b1010011);
    map.insert("M-D", 0b1000111);
    map.insert("D&M", 0b1000000);
    map.insert("D|M", 0b1010101);
    map
});

impl Comp {
    /// Used when the mnemonic is not in the table.
    pub const FALLBACK: Comp = Comp(0b1010101);

    pub fn parse(s: &str) -> Option<Self> {
        COMP.get_by_left(s).map(|&code| Comp(code))
    }

    pub fn from_code(code: u8) -> Self {
        Comp(code & 0x7F)
    }

    pub fn code(&self) -> u8 {
        self.0
    }

    pub fn mnemonic(&self) -> Option<&'static str> {
        COMP.get_by_right(&self.0).copied()
    }
}
