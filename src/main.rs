use clap::Parser;
use gnss_distance::{process_files, Cli};
use log::LevelFilter;
use std::process;

fn init_logging(cli: &Cli) {
    let level = cli.verbose.log_level_filter();
    if level == LevelFilter::Info {
        // no verbosity flag: RUST_LOG decides, info otherwise
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::new().filter_level(level).init();
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are reported on stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(gnss_distance::validation::exit_code::USAGE);
        }
    };

    init_logging(&cli);
    log::info!("gnss-distance v{}", env!("CARGO_PKG_VERSION"));

    let options = match cli.pipeline_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{}", e);
            process::exit(e.exit_code());
        }
    };
    log::debug!("Pipeline options: {:?}", options);

    if let Err(e) = process_files(&cli.input, &cli.reference, &cli.output, &options) {
        log::error!("{}", e);
        process::exit(e.exit_code());
    }
}
