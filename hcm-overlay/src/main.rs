use clap::Parser;
use hcm_common::frame::Frame;
use hcm_overlay::{config::AppConfig, render_frame};
use log::{LevelFilter, debug, error, info, warn};
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            RollingFileAppender,
            policy::compound::{
                CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
            },
        },
    },
    config::{Appender, Config as LogConfig, Logger, Root},
    encode::pattern::PatternEncoder,
};
use std::{error::Error, fs, io::Write, path::PathBuf};

const APP_NAME: &str = "hcm-overlay";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(long, short)]
    /// Frame file to render, the configured `frame_path` is used if not given
    input: Option<PathBuf>,

    #[clap(long, short)]
    /// File to write the table rows to, falls back to the configured `output_path` or stdout
    output: Option<PathBuf>,

    #[clap(long, short, action(clap::ArgAction::Count))]
    /// Increase the log verbosity
    verbose: u8,

    #[clap(long)]
    /// Directory within which log files will be placed, default is platform dependent
    log_location: Option<PathBuf>,

    #[clap(long, default_value = "5000000")]
    /// Max size in bytes that a log file is allowed to reach before being rolled over
    log_max_file_size: u64,

    #[clap(long, default_value = "3")]
    /// Number of archived logs to keep
    num_old_logs: u32,
}

fn init_logging(args: &Cli) -> Result<(), Box<dyn Error>> {
    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // stdout carries the rendered rows
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{d} {h({l:5})} {M}] {m}{n}")))
        .build();

    let mut log_config = LogConfig::builder()
        .appender(Appender::builder().build("console", Box::new(console)));
    let mut root = Root::builder().appender("console");

    let log_base_path = args.log_location.clone().or_else(|| {
        directories::BaseDirs::new().map(|dirs| {
            let mut path = dirs.data_local_dir().to_path_buf();
            path.push("hcm-overlay-logs");
            path
        })
    });

    if let Some(log_base_path) = log_base_path {
        let mut log_path = log_base_path.clone();
        let mut archived_log_path = log_base_path;
        log_path.push(format!("{APP_NAME}-log.txt"));
        archived_log_path.push(format!("{APP_NAME}-log-{{}}.txt.gz"));

        // Setup the file log roller
        let archive_pattern = archived_log_path
            .to_str()
            .ok_or("Log location is not valid unicode")?;
        let roller = FixedWindowRoller::builder().build(archive_pattern, args.num_old_logs)?;
        let file_policy = CompoundPolicy::new(
            Box::new(SizeTrigger::new(args.log_max_file_size)),
            Box::new(roller),
        );
        let file_appender = RollingFileAppender::builder()
            .append(true)
            .encoder(Box::new(PatternEncoder::new("[{d} {l:5} {M}] {m}{n}")))
            .build(log_path, Box::new(file_policy))?;

        log_config = log_config
            .appender(Appender::builder().build("file_appender", Box::new(file_appender)));
        root = root.appender("file_appender");
    }

    // Everything outside of this workspace only logs errors
    let log_config = log_config
        .logger(Logger::builder().build("hcm_overlay", log_level))
        .logger(Logger::builder().build("hcm_common", log_level))
        .build(root.build(LevelFilter::Error))?;

    log4rs::init_config(log_config)?;
    log_panics::init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();
    init_logging(&args)?;

    let config: AppConfig = match confy::load(APP_NAME, None) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to read config file, overwriting with default. Error: {e}");
            let config = AppConfig::default();
            if let Err(e) = confy::store(APP_NAME, None, &config) {
                warn!("Failed to store the default config: {e}");
            }
            config
        }
    };
    debug!("Config: {config:?}");

    let input = args.input.unwrap_or(config.frame_path);
    info!("Rendering frame from {}", input.display());
    let frame = Frame::from_file(&input)?;
    let rows = render_frame(&frame);

    match args.output.or(config.output_path) {
        Some(path) => {
            fs::write(&path, &rows)
                .inspect_err(|e| error!("Failed to write rows to {}: {e}", path.display()))?;
            info!("Wrote {} bytes to {}", rows.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rows.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
