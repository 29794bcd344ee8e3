use arch::inst::Inst;
use color_print::cformat;

use crate::{
    line,
    symbol::Origin,
    translate::{Emitted, Program},
};

const INST_COL: usize = 24;

/// Colored instruction padded by the width of its visible text.
fn inst_column(inst: &Inst) -> String {
    let visible = inst.to_string().len();
    format!(
        "{}{}",
        inst.cformat(),
        " ".repeat(INST_COL.saturating_sub(visible))
    )
}

/// Annotated listing: pc and binary beside every source line, then the
/// symbol table.
pub fn print_dump(program: &Program, path: &str, lines: &[String]) {
    let mut emitted = program.emitted.iter().peekable();

    println!(
        "{}+------[{}]{}",
        "-".repeat(23),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );
    for (idx, raw) in lines.iter().enumerate() {
        let line_num = idx + 1;
        let here: Option<&Emitted> = emitted.next_if(|e| e.line_idx == idx);
        let body = match here {
            Some(e) => cformat!(
                "[{:04X}] {} | {:>4}:   {} <dim>{}</>",
                e.pc,
                e.inst.to_text(),
                line_num,
                inst_column(&e.inst),
                raw.trim()
            ),
            None => match line::clean(raw) {
                Some(code) if code.starts_with('(') => {
                    cformat!("{:23}| {:>4}: <g>{}</>", "", line_num, code)
                }
                _ => cformat!("{:23}| {:>4}: <dim>{}</>", "", line_num, raw.trim()),
            },
        };
        println!("{}", body);
    }
    println!("{}+{}", "-".repeat(23), "-".repeat(57));

    for (name, origin, addr) in program.symbols.iter() {
        let kind = match origin {
            Origin::Predefined => continue,
            Origin::Label(idx) => cformat!("<g>label</> (line {})", idx + 1),
            Origin::Variable(idx) => cformat!("<c>var</>   (line {})", idx + 1),
        };
        println!("  0x{:04X} {:<24} {}", addr, name, kind);
    }
}
