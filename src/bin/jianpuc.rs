// jianpu -- compiling numbered musical notation into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `jianpuc` - the compiler for numbered musical notation to wav files.

use std::path::PathBuf;
use std::process;

use log::error;
use structopt::StructOpt;

use jianpu::compile::{self, Options};
use jianpu::synth::envelope::EdgeFade;
use jianpu::synth::Timbre;
use jianpu::wave::{SampleWidth, SamplerInfo};

#[derive(Debug, StructOpt)]
#[structopt(name = "jianpuc", about = "Compiling numbered musical notation into audio")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// The score. Read from standard input if not given.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Output wav file.
    #[structopt(short, long, parse(from_os_str), default_value = "a.wav")]
    output: PathBuf,

    /// Timbre: 0 sine, 1 beat, 2 triangle, 3 sawtooth, 4 square, 5 pluck (or its name).
    #[structopt(short, long, default_value = "sine")]
    timbre: Timbre,

    /// Samples per second.
    #[structopt(short, long, default_value = "44100", validator = positive)]
    rate: u32,

    /// Bits per sample, 8 or 16.
    #[structopt(short, long, default_value = "16")]
    width: SampleWidth,

    /// Length of the fade in and out of every tone, in seconds.
    #[structopt(long, default_value = "0.02", validator = non_negative)]
    fade: f64,

    /// Scale of the output, between 0 and 1.
    #[structopt(long, default_value = "1.0", validator = unit_interval)]
    volume: f64,

    /// Seed for the noise of the plucked string.
    #[structopt(long, default_value = "0")]
    seed: u64,

    /// Refuse to render more than this many seconds of audio.
    #[structopt(long, default_value = "3600", validator = non_negative)]
    max_duration: f64,

    /// Dump the parsed score, to the given file or to standard output.
    #[structopt(long)]
    #[allow(clippy::option_option)]
    dump_description: Option<Option<PathBuf>>,
}

fn positive(value: String) -> Result<(), String> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(()),
        _ => Err(format!("expected a positive integer, got `{}`", value)),
    }
}

fn non_negative(value: String) -> Result<(), String> {
    match value.parse::<f64>() {
        Ok(x) if x >= 0.0 && x.is_finite() => Ok(()),
        _ => Err(format!("expected a non-negative number, got `{}`", value)),
    }
}

fn unit_interval(value: String) -> Result<(), String> {
    match value.parse::<f64>() {
        Ok(x) if (0.0..=1.0).contains(&x) => Ok(()),
        _ => Err(format!("expected a number between 0 and 1, got `{}`", value)),
    }
}

fn run(opt: Opt) -> compile::Result<()> {
    let options = Options {
        timbre: opt.timbre,
        info: SamplerInfo {
            sample_rate: opt.rate,
            width: opt.width,
        },
        envelope: EdgeFade { fade: opt.fade },
        volume: opt.volume,
        seed: opt.seed,
        max_duration: opt.max_duration,
        ..Options::default()
    };

    let source = compile::read_source(opt.input.as_deref())?;
    let music = compile::parse(&source)?;
    let dump_out = opt
        .dump_description
        .map(|path| path.unwrap_or_else(|| "/dev/stdout".into()));
    if let Some(dump_out_path) = dump_out {
        compile::dump_description(&music, &dump_out_path)?;
    }
    let samples = compile::render(&music, &options)?;
    compile::write_output(&opt.output, &options.info, &samples)
}

fn main() {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    if let Err(err) = simple_logger::init_with_level(level) {
        eprintln!("could not set up logging: {}", err);
    }

    if let Err(err) = run(opt) {
        error!("{}", err);
        process::exit(1);
    }
}
