use clap::Parser;
use xcstrings_enum_cli::{CliOptions, FileConfig, Settings, load_config, run_generate_command};

fn main() {
    let args = CliOptions::parse();

    let file_config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    let settings = match Settings::resolve(args, file_config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    std::process::exit(run_generate_command(&settings));
}
