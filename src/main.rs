mod app;
mod data;
mod filters;
mod prompt;
mod stats;
mod view;

use std::io;
use std::path::Path;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    // City files are resolved relative to the working directory.
    app::run(&mut input, &mut out, Path::new("."))
}
