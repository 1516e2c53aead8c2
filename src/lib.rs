pub mod cli;
pub mod model;
pub mod panel;
pub mod runtime;
pub mod session;
pub mod ui;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
