use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::Parser;
use log::{debug, info};
use microc::{
    ast::ast::AstNode, compile, display_error, errors::errors::Error, CompilerOptions, LabelPolicy,
};

/// Micro compiler backend: turns a JSON-serialized AST into LLVM IR.
#[derive(Parser)]
#[command(name = "microc")]
#[command(version)]
struct Cli {
    /// AST produced by the parser, as JSON (`-` for stdin)
    input: PathBuf,

    /// Output `.ll` file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use `_1` for every read/write scaffolding label
    #[arg(long)]
    fixed_labels: bool,

    /// Exit with an error if the tree produced any diagnostic
    #[arg(long)]
    deny_diagnostics: bool,

    /// Check the emitted IR with the LLVM verifier
    #[cfg(feature = "verify")]
    #[arg(long)]
    verify: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(clean) => {
            if !clean && cli.deny_diagnostics {
                process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("{}", display_error(&error));
            process::exit(1);
        }
    }
}

/// Returns whether the run finished without diagnostics.
fn run(cli: &Cli) -> Result<bool, Error> {
    let start = Instant::now();

    let source = read_input(&cli.input)?;
    let ast: Option<AstNode> = serde_json::from_str(&source)?;
    debug!("Read AST in {:?}", start.elapsed());

    let label_policy = if cli.fixed_labels {
        LabelPolicy::Fixed
    } else {
        LabelPolicy::PerStatement
    };
    let options = CompilerOptions::new().with_label_policy(label_policy);

    let compile_start = Instant::now();
    let compiled = compile(ast.as_ref(), options);
    info!("Generated IR in {:?}", compile_start.elapsed());

    for diagnostic in &compiled.diagnostics {
        eprintln!("{}", display_error(diagnostic));
    }

    #[cfg(feature = "verify")]
    {
        if cli.verify {
            microc::compiler::verify::verify_ir(&compiled.ir)?;
            info!("IR verified");
        }
    }

    match &cli.output {
        Some(path) => fs::write(path, &compiled.ir)?,
        None => io::stdout().write_all(compiled.ir.as_bytes())?,
    }

    info!("Total time: {:?}", start.elapsed());
    Ok(compiled.is_clean())
}

fn read_input(path: &Path) -> Result<String, Error> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
