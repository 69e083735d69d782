// jianpu -- compiling numbered musical notation into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Turning notes into tones: pitches into frequencies, note lengths into seconds.

use log::warn;

use crate::notation::{Degree, Passage};

/// Semitone offsets of the diatonic scale, for degrees 1 to 7 and for the note names C to B.
pub const DIATONIC: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Compute the tonic of a key descriptor in semitones above A4.
///
/// An uppercase letter puts the tonic between A4 and G♯5, a lowercase letter
/// between C4 and B4. Each following `#`/`b` raises/lowers it by a semitone,
/// each `^`/`v` by an octave.
///
/// # Examples
///
/// ```
/// # use jianpu::resolve::mode_reference;
/// assert_eq!(mode_reference("C"), Some(3));
/// assert_eq!(mode_reference("A"), Some(0));
/// assert_eq!(mode_reference("G"), Some(10));
/// assert_eq!(mode_reference("F#"), Some(9));
/// assert_eq!(mode_reference("Eb^"), Some(18));
/// assert_eq!(mode_reference("c"), Some(-9));
/// assert_eq!(mode_reference("a"), Some(0));
/// assert_eq!(mode_reference("bb"), Some(1));
/// assert_eq!(mode_reference("X"), None);
/// assert_eq!(mode_reference("C+"), None);
/// assert_eq!(mode_reference(""), None);
/// ```
pub fn mode_reference(mode: &str) -> Option<i32> {
    let mut chars = mode.chars();
    let tonic = chars.next()?;
    let mut reference = match tonic {
        'A'..='G' => (DIATONIC[name_index(tonic, 'C')] + 3) % 12,
        'a'..='g' => DIATONIC[name_index(tonic, 'c')] + 3 - 12,
        _ => return None,
    };
    for ch in chars {
        reference += match ch {
            '#' => 1,
            'b' => -1,
            '^' => 12,
            'v' => -12,
            _ => return None,
        };
    }
    Some(reference)
}

/// Position of a note name in the C-based scale.
fn name_index(name: char, c: char) -> usize {
    ((name as i32 - c as i32 + 7) % 7) as usize
}

/// A resolved note, ready to be synthesized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Zero for silence.
    pub frequency: f64,
    pub duration: f64,
}

/// Defines the frequency of all semitones relative to a reference pitch.
///
/// # Examples
///
/// ```
/// use jianpu::resolve::*;
/// assert_eq!(Tuning::default().frequency(0, 0), 440.0);
/// assert_eq!(Tuning::default().frequency(12, 0), 880.0);
/// assert_eq!(Tuning::default().frequency(0, -1), 220.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    /// Frequency of the semitone at offset zero (A4 in concert pitch).
    pub reference_frequency: f64,
}

impl Tuning {
    /// Return the frequency of a note `semitones` and `octaves` away from the reference.
    pub fn frequency(&self, semitones: i32, octaves: i32) -> f64 {
        let octaves = f64::from(semitones) / 12.0 + f64::from(octaves);
        self.reference_frequency * 2.0f64.powf(octaves)
    }
}

/// Default concert tuning, where A4 corresponds to 440 Hz.
impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            reference_frequency: 440.0,
        }
    }
}

/// Resolve the notes of a passage into tones.
///
/// Ties extend the tone before them instead of starting a new one.
pub fn resolve_passage(passage: &Passage, tuning: &Tuning) -> Vec<Tone> {
    let header = &passage.header;
    let reference = header.mode.reference();
    let seconds_per_whole = 60.0 * header.metre.unit as f64 / header.bpm as f64;

    let mut tones: Vec<Tone> = Vec::with_capacity(passage.notes.len());
    for note in &passage.notes {
        let duration = note.duration.value() * seconds_per_whole;
        let frequency = match note.degree {
            Degree::Tie => {
                if let Some(open) = tones.last_mut() {
                    open.duration += duration;
                    continue;
                }
                warn!("tie without a preceding tone, playing a rest instead");
                0.0
            }
            Degree::Rest => 0.0,
            Degree::Pitch(degree) => {
                let semitones = reference
                    + DIATONIC[usize::from(degree - 1)]
                    + i32::from(note.accidental);
                tuning.frequency(semitones, note.octave)
            }
        };
        tones.push(Tone {
            frequency,
            duration,
        });
    }
    tones
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::notation::parse_music;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn scale_in_c() {
        let music = parse_music("1234567|").unwrap();
        let tones = resolve_passage(&music.passages[0], &Tuning::default());
        assert_eq!(tones.len(), 7);
        for (tone, offset) in tones.iter().zip(DIATONIC.iter()) {
            let expected = 440.0 * 2.0f64.powf(f64::from(3 + offset) / 12.0);
            assert!(close(tone.frequency, expected));
            assert!(close(tone.duration, 60.0 * 4.0 / 88.0 / 4.0));
        }
    }

    #[test]
    fn ties_extend_the_open_tone() {
        let music = parse_music("1,,0|").unwrap();
        let tones = resolve_passage(&music.passages[0], &Tuning::default());
        assert_eq!(tones.len(), 2);
        let beat = 60.0 / 88.0;
        assert!(close(tones[0].duration, 3.0 * beat));
        assert_eq!(tones[1].frequency, 0.0);
        assert!(close(tones[1].duration, beat));
    }

    #[test]
    fn key_accidental_and_octave() {
        let music = parse_music("&D 2: 4 120 1#^ 5v|").unwrap();
        let tones = resolve_passage(&music.passages[0], &Tuning::default());
        // D5 is 5 semitones above A4, plus a sharp and an octave
        assert!(close(tones[0].frequency, 440.0 * 2.0f64.powf(6.0 / 12.0 + 1.0)));
        // the dominant one octave down is A4
        assert!(close(tones[1].frequency, 440.0));
        assert!(close(tones[0].duration, 0.5));
    }

    #[test]
    fn beat_unit_scales_seconds() {
        // an eighth-note beat at 120 bpm makes a quarter last one second
        let music = parse_music("&C 6: 8 120 1 1 1|").unwrap();
        let tones = resolve_passage(&music.passages[0], &Tuning::default());
        assert!(close(tones[0].duration, 1.0));
    }
}
