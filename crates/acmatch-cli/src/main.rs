mod cli;
mod commands;

use cli::{CompileParams, DumpParams, MatchParams, TraceParams, build_cli};
use commands::CliError;

fn main() {
    let matches = build_cli().try_get_matches().unwrap_or_else(|e| {
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        std::process::exit(code);
    });

    let result = match matches.subcommand() {
        Some(("match", m)) => {
            let params = MatchParams::from_matches(m);
            commands::find::run(params.into())
        }
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            commands::compile::run(params.into())
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into())
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into())
        }
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(e) = result {
        fail(e);
    }
}

fn fail(e: CliError) -> ! {
    eprintln!("error: {}", e);
    std::process::exit(e.exit_code());
}
