// jianpu -- compiling numbered musical notation into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Putting the passages of a score into playback order.

use log::debug;

use crate::notation::Music;
use crate::resolve::{resolve_passage, Tone, Tuning};

/// The tones of a whole score, one track per passage.
#[derive(Debug, Clone)]
pub struct Sequence {
    tracks: Vec<Vec<Tone>>,
    order: Vec<usize>,
}

impl Sequence {
    /// Resolve every passage once. Passages repeated in the order are not resolved again.
    pub fn new(music: &Music, tuning: &Tuning) -> Self {
        let tracks = music
            .passages
            .iter()
            .map(|passage| resolve_passage(passage, tuning))
            .collect();
        Sequence {
            tracks,
            order: music.order.clone(),
        }
    }

    pub fn track(&self, passage: usize) -> &[Tone] {
        &self.tracks[passage]
    }

    /// Iterate over all tones in the order they are played.
    pub fn tones(&self) -> impl Iterator<Item = &Tone> + '_ {
        self.order.iter().flat_map(move |&index| {
            debug!("playing passage {}", index + 1);
            self.tracks[index].iter()
        })
    }

    /// Total playing time in seconds.
    pub fn duration(&self) -> f64 {
        self.order
            .iter()
            .flat_map(|&index| self.tracks[index].iter())
            .map(|tone| tone.duration)
            .sum()
    }
}
