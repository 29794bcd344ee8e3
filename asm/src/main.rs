use hackasm::{msg, util, Error, Program};

use color_print::cprintln;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file (.asm)
    input: String,

    /// Output file (.hack)
    output: String,

    /// Dump annotated listing and symbols
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    println!("1. Read File");
    println!("  < {}", args.input);
    let lines = match read_lines(&args.input) {
        Ok(lines) => lines,
        Err(err) => fail(&err, &args.input, &[]),
    };

    println!("2. Collect Labels & Resolve Symbols");
    let program = match hackasm::assemble(&lines) {
        Ok(program) => program,
        Err(err) => fail(&err, &args.input, &lines),
    };
    msg::dump(&program.msgs, &args.input, &lines);

    println!("3. Generate Binary");
    println!("  > {}", args.output);
    if let Err(err) = write_program(&args.output, &program) {
        fail(&err, &args.output, &[]);
    }

    if args.dump {
        util::print_dump(&program, &args.input, &lines);
    }

    let warns = msg::count_warn(&program.msgs);
    if warns > 0 {
        cprintln!(
            "<yellow,bold>Finished</> {} instructions with {} warning(s)",
            program.emitted.len(),
            warns
        );
    } else {
        cprintln!("<green,bold>Finished</> {} instructions", program.emitted.len());
    }
}

fn fail(err: &Error, file: &str, lines: &[String]) -> ! {
    err.print_diag(file, lines);
    std::process::exit(1);
}

fn read_lines(path: &str) -> Result<Vec<String>, Error> {
    use std::io::BufRead;

    let file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    std::io::BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::FileRead)
}

/// Written in one go, and only once the whole program assembled.
fn write_program(path: &str, program: &Program) -> Result<(), Error> {
    use std::io::Write;

    let text = program.render();
    let mut file =
        std::fs::File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| Error::FileWrite(path.to_string(), e))
}
