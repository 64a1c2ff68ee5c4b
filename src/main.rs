mod app;
mod chart;
mod cli;
mod constants;
mod domain;
mod format;
mod geometry;
mod reducer;
mod ring;
mod storage;

fn main() {
    if std::env::args().len() > 1 {
        cli::run_cli();
    } else if let Err(e) = app::run_ui() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
