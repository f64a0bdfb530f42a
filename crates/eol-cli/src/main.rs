// crates/eol-cli/src/main.rs
//
// eol: read stdin, rewrite every line terminator (CR, LF, CRLF, LFCR, NUL)
// as the user-specified sequence, write stdout.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;

const LONG_ABOUT: &str = "\
eol reads bytes from the standard input stream and writes them to the
standard output stream with every line terminator rewritten as the given
EOL sequence. The pattern may be any combination of:

    c       the character 'c'
    \\a      alert (bell)
    \\b      backspace
    \\f      formfeed
    \\n      newline (line feed)
    \\r      carriage return
    \\t      horizontal tab
    \\v      vertical tab
    \\0      zero byte
    \\xhh    hexadecimal byte (one or two digits)
    \\\\      back-slash

For example, on Unix you'd use `eol '\\n'`; for DOS-style files,
`eol '\\r\\n'`. `eol '\\n\\0'` makes a file easy to read into a C program,
and `eol '\\r\\n\\r\\n'` double-spaces a DOS file (any number of
terminators is allowed).";

#[derive(Parser)]
#[command(name = "eol")]
#[command(version)]
#[command(about = "Convert a byte stream to the specified end-of-line style")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// EOL pattern; multiple arguments are concatenated in order.
    #[arg(required = true, num_args = 1..)]
    pattern: Vec<String>,
}

// Historical DOS-style flag spellings, accepted alongside clap's own and
// rewritten before parsing.
fn canonical_flag(arg: &str) -> Option<&'static str> {
    match arg.to_ascii_lowercase().as_str() {
        "-?" | "/?" | "-h" | "/h" | "-help" | "/help" | "--help" => Some("--help"),
        "--version" | "/version" => Some("--version"),
        _ => None,
    }
}

fn parse_cli() -> Result<Cli, ExitCode> {
    // args_os, not args: a non-UTF-8 argument must surface as an ordinary
    // parse error, not a panic. clap rejects it with the other usage errors.
    let args = std::env::args_os().enumerate().map(|(i, a)| {
        if i == 0 {
            return a;
        }
        match a.to_str().and_then(canonical_flag) {
            Some(flag) => OsString::from(flag),
            None => a,
        }
    });

    Cli::try_parse_from(args).map_err(|e| {
        // Help and version requests exit 0; every usage problem exits 1.
        let _ = e.print();
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    })
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let eol = eol_core::compile_args(&cli.pattern)
        .context("run `eol --help` for the EOL pattern syntax")?;

    eol_core::normalize(io::stdin().lock(), io::stdout().lock(), &eol)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
