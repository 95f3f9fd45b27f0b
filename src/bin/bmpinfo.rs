//! Print the headers of a 24-bit BMP and run it through the transform
//! pipeline (greyscale, downsample by 3, contrast stretch).

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use bmploader::{Unstoppable, decode_reader, transform};
use clap::{Arg, Command};
use log::{LevelFilter, error, info};
use simple_logger::SimpleLogger;

const SAMPLE_RATE: u32 = 3;

fn command() -> Command {
    Command::new("bmpinfo")
        .about("Decode a 24-bit BMP and print its headers")
        .arg(
            Arg::new("file")
                .help("BMP file to open")
                .required(true)
                .num_args(1),
        )
}

fn main() -> ExitCode {
    let matches = match command().try_get_matches() {
        Ok(m) => m,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("could not install logger: {e}");
    }

    let Some(path) = matches.get_one::<String>("file") else {
        return ExitCode::FAILURE;
    };

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            error!("could not open {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let image = match decode_reader(BufReader::new(file), Unstoppable) {
        Ok(image) => image,
        Err(e) => {
            error!("could not decode {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", image.header_report());

    let grey = transform::greyscale(image);
    let small = match transform::downsample(grey, SAMPLE_RATE) {
        Ok(small) => small,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let result = transform::maximize_contrast(small);
    info!(
        "processed image: {}x{} ({} pixels)",
        result.width(),
        result.height(),
        result.len()
    );

    ExitCode::SUCCESS
}
