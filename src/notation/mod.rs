// jianpu -- compiling numbered musical notation into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The numbered notation: what a parsed score looks like.

pub mod parser;
pub mod scan;
pub mod span;

pub use parser::{parse_music, ParseError, ParseErrorKind};

use std::fmt;

use crate::rational::Rational;
use crate::resolve;

/// Which scale degree a note sounds, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degree {
    /// Silence for the duration of the note (`0`).
    Rest,
    /// Extends the previous sounding tone (`,`).
    Tie,
    /// Movable-do scale degree, 1 to 7.
    Pitch(u8),
}

impl Degree {
    pub fn is_pitched(self) -> bool {
        matches!(self, Degree::Pitch(_))
    }
}

/// One symbol of the score after all of its modifiers have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub degree: Degree,
    /// -1 for flat, 0 for natural, +1 for sharp.
    pub accidental: i8,
    /// Octaves above (positive) or below (negative) the reference octave.
    pub octave: i32,
    /// Length as a fraction of a whole note.
    pub duration: Rational,
}

impl Note {
    pub fn new(degree: Degree, accidental: i8, duration: Rational) -> Self {
        Note {
            degree,
            accidental,
            octave: 0,
            duration,
        }
    }
}

/// The key of a passage, e.g. `C`, `Eb`, `F#^` or `a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    name: String,
    /// Semitones of the tonic above A4.
    reference: i32,
}

impl Mode {
    /// Validate a key descriptor.
    ///
    /// ```
    /// # use jianpu::notation::Mode;
    /// assert_eq!(Mode::parse("C").unwrap().reference(), 3);
    /// assert_eq!(Mode::parse("Bb").unwrap().reference(), 1);
    /// assert!(Mode::parse("H").is_none());
    /// ```
    pub fn parse(name: &str) -> Option<Mode> {
        resolve::mode_reference(name).map(|reference| Mode {
            name: name.to_string(),
            reference,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reference(&self) -> i32 {
        self.reference
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode {
            name: "C".to_string(),
            reference: 3,
        }
    }
}

/// A time signature such as 3/4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metre {
    pub beats: i64,
    pub unit: i64,
}

impl Metre {
    /// Expected total of one measure, as a fraction of a whole note.
    pub fn measure_length(self) -> Rational {
        Rational::new(self.beats, self.unit)
    }
}

/// Key, time signature and tempo shared by all notes of a passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub mode: Mode,
    pub metre: Metre,
    /// Beats (of length `1 / metre.unit`) per minute.
    pub bpm: i64,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            mode: Mode::default(),
            metre: Metre { beats: 4, unit: 4 },
            bpm: 88,
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mode = {}, metre = {}/{}, speed = {} bpm",
            self.mode.name, self.metre.beats, self.metre.unit, self.bpm
        )
    }
}

/// A measure whose notes do not add up to the time signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrregularMeasure {
    /// 1-based index of the measure within its passage.
    pub index: usize,
    /// The actual sum of the note durations.
    pub total: Rational,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub header: Header,
    pub notes: Vec<Note>,
    /// Number of measures closed by a barline.
    pub measures: usize,
    pub irregular: Vec<IrregularMeasure>,
    /// False if the input ended before the passage saw any barline.
    pub closed: bool,
}

impl Passage {
    pub fn new(header: Header) -> Self {
        Passage {
            header,
            notes: Vec::new(),
            measures: 0,
            irregular: Vec::new(),
            closed: false,
        }
    }
}

/// A whole score: the passages and the order in which they are played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Music {
    pub passages: Vec<Passage>,
    /// 0-based passage indices.
    pub order: Vec<usize>,
}

/// English ordinal of a positive number, as used in diagnostics.
///
/// ```
/// # use jianpu::notation::ordinal;
/// assert_eq!(ordinal(1), "1st");
/// assert_eq!(ordinal(12), "12th");
/// assert_eq!(ordinal(23), "23rd");
/// assert_eq!(ordinal(111), "111th");
/// ```
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
