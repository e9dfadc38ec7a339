use clap::{ArgAction, Parser, ValueHint};
use schedule_data::logging::init_tracing;
use schedule_data::sheet::{DEFAULT_PREVIEW_ROWS, load_html_table, render_preview};
use std::path::PathBuf;
use std::process::ExitCode;

/// Prints the shape and first rows of an HTML table saved as a spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "sheet-preview", version)]
struct Args {
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath, default_value = "10A.xls")]
    path: PathBuf,
    /// Number of rows to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    rows: usize,
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match load_html_table(&args.path) {
        Ok(df) => {
            print!("{}", render_preview(&df, args.rows));
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
