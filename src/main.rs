pub mod audio_mixer;
pub mod bitrate_reader;
pub mod codec_factory;
pub mod codecs;
pub mod converter;
pub mod error;
pub mod formats;
pub mod video_file;

use std::process::ExitCode;

use converter::VideoConverter;
use error::VideoFileError;
use formats::VideoFormat;
use human_repr::HumanCount;
use kdam::{term, tqdm, BarExt};
use rustop::opts;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use video_file::VideoFile;

const DEMO_INPUT: &str = "funny-cat-video.ogg=[OGG]funny cat";

fn main() -> ExitCode {
    let (args, _rest) = opts! {
        synopsis "Convert tagged video buffers between ogg and mp4.";
        opt to:String=String::from("mp4"), desc:"Destination format. [ogg, mp4]";
        opt json:bool=false, desc:"Print converted files as JSON.";
        opt progress:bool=false, desc:"Show a progress bar over the inputs.";
        opt verbose:bool=false, desc:"Log every pipeline stage.";
        param inputs:Vec<String>, desc:"Input files as FILENAME or FILENAME=BUFFER. Converts a demo file when empty.";
    }.parse_or_exit();

    init_logging(args.verbose);

    let destination = VideoFormat::from_name(&args.to);
    let inputs = if args.inputs.is_empty() {
        vec![String::from(DEMO_INPUT)]
    } else {
        args.inputs
    };

    let converter = VideoConverter::new();
    let mut pbar = if args.progress {
        term::init(false);
        Some(tqdm!(total = inputs.len(), desc = "converting", position = 0))
    } else {
        None
    };

    let mut converted = 0;
    let mut converted_bytes: usize = 0;
    let mut failed = false;
    for input in &inputs {
        match parse_input(input) {
            Ok(file) => {
                let output = converter.convert_video(&file, destination);
                if args.json {
                    match serde_json::to_string(&output) {
                        Ok(json) => println!("{}", json),
                        Err(err) => {
                            error!("Unable to serialize {}: {}", output.filename(), err);
                            failed = true;
                        },
                    }
                } else {
                    println!("{} -> {}", file, output);
                }
                converted += 1;
                converted_bytes += output.buffer().len();
            },
            Err(err) => {
                error!("Skipping {:?}: {}", input, err);
                failed = true;
            },
        }

        if let Some(bar) = pbar.as_mut() {
            let _ = bar.update(1);
        }
    }

    if pbar.is_some() {
        eprintln!();
    }
    info!("converted {} of {} file(s) to {}, {} written", converted, inputs.len(), destination, converted_bytes.human_count_bytes());

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "video_converter=debug" } else { "video_converter=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Splits `FILENAME=BUFFER` at the first `=`. A bare filename gets an empty
/// buffer.
fn parse_input(input: &str) -> Result<VideoFile, VideoFileError> {
    match input.split_once('=') {
        Some((filename, buffer)) => VideoFile::new(filename, buffer),
        None => VideoFile::new(input, ""),
    }
}
