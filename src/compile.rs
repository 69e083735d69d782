// jianpu -- compiling numbered musical notation into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The whole pipeline, from score text to samples on disk.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use snafu::{ResultExt, Snafu};

use crate::notation::{ordinal, parse_music, Music, ParseError};
use crate::output;
use crate::resolve::Tuning;
use crate::sequence::Sequence;
use crate::synth::envelope::EdgeFade;
use crate::synth::{SynthError, Synthesizer, Timbre};
use crate::wave::SamplerInfo;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not read {}: {}", path.display(), source))]
    ReadInput { path: PathBuf, source: io::Error },
    #[snafu(display("{}", source))]
    Parse { source: ParseError },
    #[snafu(display("Could not render the score: {}", source))]
    Synthesis { source: SynthError },
    #[snafu(display("Could not write {}: {}", path.display(), source))]
    WriteOutput { path: PathBuf, source: hound::Error },
    #[snafu(display("Could not create {}: {}", path.display(), source))]
    CreateOutput { path: PathBuf, source: io::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything about the rendering that is not part of the score.
#[derive(Debug, Clone)]
pub struct Options {
    pub timbre: Timbre,
    pub info: SamplerInfo,
    pub envelope: EdgeFade,
    /// Scale of all samples, in `[0, 1]`.
    pub volume: f64,
    /// Seed of the noise used by the plucked string.
    pub seed: u64,
    pub tuning: Tuning,
    /// Longest output in seconds that will be rendered.
    pub max_duration: f64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            timbre: Timbre::default(),
            info: SamplerInfo::default(),
            envelope: EdgeFade::default(),
            volume: 1.0,
            seed: 0,
            tuning: Tuning::default(),
            max_duration: 3600.0,
        }
    }
}

/// Read the score from `path`, or from standard input if there is none.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).context(ReadInput { path }),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context(ReadInput { path: "<stdin>" })?;
            Ok(source)
        }
    }
}

/// Parse a score and log what was found in it.
pub fn parse(source: &str) -> Result<Music> {
    let music = parse_music(source).context(Parse)?;
    report(&music);
    Ok(music)
}

/// Log a summary of every passage and the warnings found while parsing.
pub fn report(music: &Music) {
    for (index, passage) in music.passages.iter().enumerate() {
        let number = index + 1;
        info!(
            "Passage {}: {}, {} notes in {} measures.",
            number,
            passage.header,
            passage.notes.len(),
            passage.measures
        );
        for measure in &passage.irregular {
            warn!(
                "passage {}: the {} measure is irregular ({} instead of {})",
                number,
                ordinal(measure.index),
                measure.total,
                passage.header.metre.measure_length()
            );
        }
        if !passage.closed {
            warn!("passage {} is not closed by a barline", number);
        }
    }

    if music.order.is_empty() {
        warn!("the passage order is empty, the output will be silent");
    } else {
        let order: Vec<String> = music.order.iter().map(|i| (i + 1).to_string()).collect();
        info!("Playing passages {}.", order.join(" "));
    }
}

/// Synthesize the passages of `music` in playback order.
pub fn render(music: &Music, options: &Options) -> Result<Vec<i32>> {
    let sequence = Sequence::new(music, &options.tuning);
    info!(
        "Rendering {:.2} seconds with the {} timbre.",
        sequence.duration(),
        options.timbre
    );
    let mut synth = Synthesizer::new(
        options.info,
        options.timbre,
        options.envelope,
        options.volume,
        options.seed,
    )
    .with_limit(options.info.sample_count(options.max_duration));
    synth.render_all(sequence.tones()).context(Synthesis)
}

/// Turn score text into samples.
pub fn compile(source: &str, options: &Options) -> Result<Vec<i32>> {
    let music = parse(source)?;
    render(&music, options)
}

pub fn write_output(path: &Path, info: &SamplerInfo, samples: &[i32]) -> Result<()> {
    output::write_wav_file(path, info, samples).context(WriteOutput { path })
}

/// Write the debug representation of the parsed score to `path`.
pub fn dump_description(music: &Music, path: &Path) -> Result<()> {
    let mut f = File::create(path).context(CreateOutput { path })?;
    writeln!(f, "{:#?}", music).context(CreateOutput { path })
}
