use arch::{inst::Inst, reg::ROM_SIZE};

use crate::{
    encode,
    error::Error,
    line,
    msg::Msg,
    parser::{Stmt, Target},
    symbol::{Origin, SymbolTable},
};

/// One emitted instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    /// 0-based source line
    pub line_idx: usize,
    pub pc: usize,
    pub inst: Inst,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Program {
    /// In program order: `emitted[pc].pc == pc`
    pub emitted: Vec<Emitted>,
    pub symbols: SymbolTable,
    pub msgs: Vec<Msg>,
}

impl Program {
    /// 16-character binary strings in program order.
    pub fn texts(&self) -> impl Iterator<Item = String> + '_ {
        self.emitted.iter().map(|e| e.inst.to_text())
    }

    /// Output file contents, one instruction per line.
    pub fn render(&self) -> String {
        self.texts().map(|text| text + "\n").collect()
    }
}

/// Two-pass translation. Owns the symbol table, so every run starts from a
/// fresh one.
pub struct Translator {
    symbols: SymbolTable,
    msgs: Vec<Msg>,
}

impl Translator {
    pub fn new() -> Self {
        Translator {
            symbols: SymbolTable::new(),
            msgs: vec![],
        }
    }

    pub fn run<S: AsRef<str>>(mut self, lines: &[S]) -> Result<Program, Error> {
        let stmts = self.collect_labels(lines)?;
        let emitted = self.resolve(stmts)?;
        Ok(Program {
            emitted,
            symbols: self.symbols,
            msgs: self.msgs,
        })
    }

    /// Pass 1: bind every label to the pc of the instruction that follows it
    /// and keep the remaining statements in order.
    fn collect_labels<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<Vec<(usize, Stmt)>, Error> {
        let mut stmts = vec![];
        let mut pc: usize = 0;

        for (line_idx, raw) in lines.iter().enumerate() {
            let Some(code) = line::clean(raw.as_ref()) else {
                continue;
            };
            let stmt = Stmt::parse(code).map_err(|e| e.at(line_idx))?;
            match stmt {
                // pc is at most ROM_SIZE here, so it fits in u16. A label
                // past the last instruction only fails where it is used.
                Stmt::Label(name) => {
                    if let Some((prev, _)) = self.symbols.bind_label(&name, pc as u16, line_idx) {
                        self.redefined(&name, prev, line_idx);
                    }
                }
                stmt => {
                    if pc == ROM_SIZE {
                        return Err(Error::RomOverflow(ROM_SIZE).at(line_idx));
                    }
                    stmts.push((line_idx, stmt));
                    pc += 1;
                }
            }
        }
        Ok(stmts)
    }

    fn redefined(&mut self, name: &str, prev: Origin, line_idx: usize) {
        match prev {
            Origin::Label(prev_idx) => {
                self.msgs
                    .push(Msg::warn(format!("Re-defined label: `{}`", name), line_idx));
                self.msgs.push(Msg::note(
                    "Already defined here. The value has been overridden.".to_string(),
                    prev_idx,
                ));
            }
            Origin::Predefined => {
                self.msgs.push(Msg::warn(
                    format!("Label `{}` overrides a predefined symbol", name),
                    line_idx,
                ));
            }
            Origin::Variable(_) => {}
        }
    }

    /// Pass 2: resolve symbols, allocating variables on first use, and encode.
    fn resolve(&mut self, stmts: Vec<(usize, Stmt)>) -> Result<Vec<Emitted>, Error> {
        let mut emitted = Vec::with_capacity(stmts.len());

        for (pc, (line_idx, stmt)) in stmts.into_iter().enumerate() {
            let inst = match stmt {
                Stmt::Address(Target::Literal(value)) => {
                    encode::address(value).map_err(|e| e.at(line_idx))?
                }
                Stmt::Address(Target::Symbol(name)) => {
                    let addr = self
                        .symbols
                        .resolve_or_allocate(&name, line_idx)
                        .map_err(|e| e.at(line_idx))?;
                    encode::address(addr as u32).map_err(|e| e.at(line_idx))?
                }
                Stmt::Compute(fields) => {
                    let (inst, fallbacks) = encode::compute(&fields);
                    for fallback in fallbacks {
                        self.msgs.push(Msg::warn(fallback.to_string(), line_idx));
                    }
                    inst
                }
                // Labels never survive pass 1
                Stmt::Label(_) => continue,
            };
            emitted.push(Emitted { line_idx, pc, inst });
        }
        Ok(emitted)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate a whole source with a fresh symbol table.
pub fn assemble<S: AsRef<str>>(lines: &[S]) -> Result<Program, Error> {
    Translator::new().run(lines)
}
