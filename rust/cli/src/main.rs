use std::io::{self, Write};

fn main() {
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = twentyone_cli::run(std::env::args(), &mut out, &mut err);
    let _ = out.flush();
    std::process::exit(code);
}
