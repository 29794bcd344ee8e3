use std::fmt;

use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump};

use crate::{error::Error, parser::Fields};

/// A field that could not be encoded as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    Comp(String),
    Jump(String),
    Dest(Vec<char>),
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Comp(s) => write!(
                f,
                "Unknown computation `{}`, encoded as {:07b}",
                s,
                Comp::FALLBACK.code()
            ),
            Fallback::Jump(s) => write!(
                f,
                "Unknown jump `{}`, encoded as {}",
                s,
                Jump::FALLBACK
            ),
            Fallback::Dest(chars) => write!(
                f,
                "Ignored characters in destination: `{}`",
                chars.iter().collect::<String>()
            ),
        }
    }
}

pub fn address(value: u32) -> Result<Inst, Error> {
    Inst::address(value).ok_or_else(|| Error::OperandRange(value.to_string()))
}

/// Build the C-instruction for `fields`, substituting the fixed fallback
/// codes for anything unrecognized.
pub fn compute(fields: &Fields) -> (Inst, Vec<Fallback>) {
    let mut fallbacks = vec![];

    let comp = match Comp::parse(fields.comp()) {
        Some(comp) => comp,
        None => {
            fallbacks.push(Fallback::Comp(fields.comp().to_string()));
            Comp::FALLBACK
        }
    };

    let (dest, stray) = Dest::parse(fields.dest());
    if !stray.is_empty() {
        fallbacks.push(Fallback::Dest(stray));
    }

    let jump = match Jump::parse(fields.jump()) {
        Some(jump) => jump,
        None => {
            fallbacks.push(Fallback::Jump(fields.jump().to_string()));
            Jump::FALLBACK
        }
    };

    (Inst::C(comp, dest, jump), fallbacks)
}

/// `0` followed by the 15-bit address.
pub fn encode_address(value: u32) -> Result<String, Error> {
    address(value).map(|inst| inst.to_text())
}

/// `111` + comp + dest + jump for a raw `dest=comp;jump` line.
pub fn encode_compute(raw: &str) -> String {
    compute(&Fields::split(raw)).0.to_text()
}
