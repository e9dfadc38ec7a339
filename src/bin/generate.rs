use clap::{ArgAction, Parser, ValueHint};
use schedule_data::logging::init_tracing;
use schedule_data::{GeneratorConfig, generate_schedule_data};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Regenerates the schedule data file used by the class pages.
#[derive(Parser, Debug)]
#[command(name = "generate-schedule-data", version)]
struct Args {
    /// Directory the input and output paths are relative to
    #[arg(long, env = "SCHEDULE_DATA_ROOT", value_hint = ValueHint::DirPath)]
    root: Option<PathBuf>,
    /// Schedule CSV [default: teacher/authoring/schedule.csv]
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,
    /// Generated file [default: teacher/assets/js/schedule-data.js]
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,
    /// Binding the data array is assigned to
    #[arg(long)]
    global_name: Option<String>,
    /// Text for the "Generated from" comment
    #[arg(long)]
    source_description: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn into_config(self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        if let Some(root) = self.root {
            config.project_root = root;
        }
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(global_name) = self.global_name {
            config.global_name = global_name;
        }
        config.source_description = self.source_description;
        config
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.into_config();
    match generate_schedule_data(&config) {
        Ok(_) => {
            println!("{} successfully generated.", config.output_file_name());
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {err}");
            if err.is_validation() {
                ExitCode::from(1)
            } else {
                error!(error = ?err, "schedule data generation failed");
                ExitCode::from(2)
            }
        }
    }
}
