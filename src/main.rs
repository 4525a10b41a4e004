use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::io::{self, Write};
use std::path::Path;
use subnetta::cli::{run_once, Args, Session};
use subnetta::config::{apply_color, Settings};
use subnetta::output::write_banner;

/// Use the YAML config when present, otherwise warnings to stderr.
fn init_logging(log_config: &Path) -> Result<(), Box<dyn Error>> {
    if log_config.exists() {
        log4rs::init_file(log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", log_config.display()))?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    let settings = Settings::from_env().with_args(&args);
    init_logging(&settings.log_config)?;
    settings.log_warnings();
    log::info!("#Start main() {:?}", settings);
    apply_color(&settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if settings.banner {
        write_banner(&mut out)?;
    }

    match args.one_shot() {
        Some(job) => {
            if let Err(e) = run_once(&mut out, &job, settings.preview_rows) {
                log::error!("run_once failed: {e}");
                out.flush()?;
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        None => {
            let stdin = io::stdin();
            Session::new(stdin.lock(), out, settings.preview_rows).run()?;
        }
    }

    log::info!("#End main()");
    Ok(())
}
