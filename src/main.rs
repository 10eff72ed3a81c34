mod args;
mod canvas;
mod decode;
mod error;
mod font;
mod input;
mod operation;
mod output;
mod qr;
mod resize;

use anyhow::Result;
use args::Args;
use env_logger::Env;
use operation::Operation;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse_or_exit();
    let operation = Operation::from(args);

    let png = operation.run()?;
    output::write_stdout(&png)?;

    Ok(())
}
