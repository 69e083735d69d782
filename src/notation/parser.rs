// jianpu -- compiling numbered musical notation into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Single pass parser turning score text into passages of notes.
//!
//! A score is a sequence of passages, each introduced by a header
//! (`&mode beats: unit bpm`, or `~` to repeat the previous header), followed by
//! an optional `:` and the order in which the passages are played.
//! The very first passage may omit its header and then uses `C 4: 4 88`.

use std::fmt;

use log::warn;

use super::scan::Scan;
use super::span::{LineMap, Pos};
use super::{Degree, Header, IrregularMeasure, Metre, Mode, Music, Note, Passage};
use crate::rational::{Rational, RationalError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pos: Pos,
    kind: ParseErrorKind,
}

impl ParseError {
    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.pos)
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A modifier appeared before any note of the passage.
    MissingNote(char),
    /// An accidental or octave mark was applied to a rest or a tie.
    PitchOnUnpitched(char),
    /// The first note of a passage is a tie, which has nothing to extend.
    LeadingTie,
    UnmatchedTupletClose(char),
    /// `[` was not followed by a positive count.
    MalformedTuplet,
    MalformedHeader { expected: &'static str },
    UnexpectedChar(char),
    /// The input ended in the middle of a measure.
    UnexpectedEndOfInput,
    MalformedOrder,
    OrderIndexOutOfRange { index: i64, passages: usize },
    Arithmetic(RationalError),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingNote(ch) => write!(f, "'{}' must follow a note", ch),
            ParseErrorKind::PitchOnUnpitched(ch) => {
                write!(f, "'{}' cannot modify a rest or a tie", ch)
            }
            ParseErrorKind::LeadingTie => write!(f, "a passage cannot start with a tie"),
            ParseErrorKind::UnmatchedTupletClose(ch) => {
                write!(f, "'{}' closes a tuplet that hasn't been opened", ch)
            }
            ParseErrorKind::MalformedTuplet => {
                write!(f, "expected a positive tuplet count after '['")
            }
            ParseErrorKind::MalformedHeader { expected } => {
                write!(f, "malformed passage header, expected {}", expected)
            }
            ParseErrorKind::UnexpectedChar(ch) => write!(f, "unexpected character {:?}", ch),
            ParseErrorKind::UnexpectedEndOfInput => {
                write!(f, "unexpected end of input inside a measure")
            }
            ParseErrorKind::MalformedOrder => {
                write!(f, "expected a passage number in the order list")
            }
            ParseErrorKind::OrderIndexOutOfRange { index, passages } => write!(
                f,
                "passage index {} out of range (1 to {})",
                index, passages
            ),
            ParseErrorKind::Arithmetic(err) => write!(f, "{}", err),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parse a complete score.
///
/// # Examples
///
/// ```
/// # use jianpu::notation::parse_music;
/// let music = parse_music("1234|5671|&G 3: 4 120 1-2|3--|: 1 2 1").unwrap();
/// assert_eq!(music.passages.len(), 2);
/// assert_eq!(music.passages[1].notes.len(), 3);
/// assert_eq!(music.order, vec![0, 1, 0]);
/// ```
pub fn parse_music(input: &str) -> ParseResult<Music> {
    Parser::new(input).parse_music()
}

/// State that lives for the duration of one passage.
struct PassageContext {
    /// Length of a plain scale degree symbol.
    crotchet: Rational,
    /// Factors of the currently open tuplets, innermost last.
    tuplets: Vec<Rational>,
    /// Accidentals that carry over to later notes of the same degree, reset by barlines.
    persist: [i8; 7],
    /// Index of the first note of the measure in progress.
    measure_start: usize,
}

impl PassageContext {
    fn new() -> Self {
        PassageContext {
            crotchet: Rational::new(1, 4),
            tuplets: Vec::new(),
            persist: [0; 7],
            measure_start: 0,
        }
    }
}

struct Parser<'a> {
    scan: Scan<'a>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            scan: Scan::new(input),
        }
    }

    fn parse_music(&mut self) -> ParseResult<Music> {
        let mut header = Header::default();
        let mut passages = Vec::new();

        self.scan.skip_whitespace();
        if !matches!(self.scan.peek(), Some('&') | Some('~')) {
            passages.push(self.parse_passage(1, header.clone())?);
        }

        let order = loop {
            self.scan.skip_whitespace();
            let at = self.scan.offset();
            match self.scan.advance() {
                Some('&') => {
                    header = self.parse_header()?;
                    passages.push(self.parse_passage(passages.len() + 1, header.clone())?);
                }
                Some('~') => {
                    passages.push(self.parse_passage(passages.len() + 1, header.clone())?);
                }
                Some(':') => break self.parse_order(passages.len())?,
                None => break (0..passages.len()).collect(),
                Some(ch) => return Err(self.error_at(at, ParseErrorKind::UnexpectedChar(ch))),
            }
        };

        Ok(Music { passages, order })
    }

    /// Parse `mode beats: unit bpm`, directly after the `&`.
    fn parse_header(&mut self) -> ParseResult<Header> {
        self.scan.skip_whitespace();
        let at = self.scan.offset();
        let word = self.scan.read_word();
        let mode = Mode::parse(word).ok_or_else(|| {
            self.error_at(
                at,
                ParseErrorKind::MalformedHeader {
                    expected: "a mode such as C, F#, Bb or a^",
                },
            )
        })?;
        let beats = self.header_int("the beats of the time signature")?;
        self.scan.skip_whitespace();
        let at = self.scan.offset();
        if !(self.scan.eat(':') || self.scan.eat('/')) {
            return Err(self.error_at(
                at,
                ParseErrorKind::MalformedHeader {
                    expected: "':' in the time signature",
                },
            ));
        }
        let unit = self.header_int("the beat unit of the time signature")?;
        let bpm = self.header_int("the tempo in beats per minute")?;
        Ok(Header {
            mode,
            metre: Metre { beats, unit },
            bpm,
        })
    }

    fn header_int(&mut self, expected: &'static str) -> ParseResult<i64> {
        self.scan.skip_whitespace();
        let at = self.scan.offset();
        self.scan
            .read_int()
            .filter(|&n| n > 0)
            .ok_or_else(|| self.error_at(at, ParseErrorKind::MalformedHeader { expected }))
    }

    /// Scan the notes of one passage, up to and including its final barline.
    fn parse_passage(&mut self, number: usize, header: Header) -> ParseResult<Passage> {
        let mut passage = Passage::new(header);
        let mut ctx = PassageContext::new();

        // A header directly followed by the next passage or the order has no measures.
        self.scan.skip_whitespace();
        if let Some('&') | Some('~') | Some(':') = self.scan.peek() {
            return Ok(passage);
        }

        loop {
            let at = self.scan.offset();
            let ch = match self.scan.advance() {
                Some(ch) => ch,
                None if passage.measures == 0 && passage.notes.is_empty() => break,
                None => return Err(self.error_at(at, ParseErrorKind::UnexpectedEndOfInput)),
            };
            match ch {
                '1'..='7' => {
                    let degree = ch as u8 - b'0';
                    let accidental = ctx.persist[usize::from(degree - 1)];
                    passage
                        .notes
                        .push(Note::new(Degree::Pitch(degree), accidental, ctx.crotchet));
                }
                '0' => passage.notes.push(Note::new(Degree::Rest, 0, ctx.crotchet)),
                ',' => {
                    if passage.notes.is_empty() {
                        return Err(self.error_at(at, ParseErrorKind::LeadingTie));
                    }
                    passage.notes.push(Note::new(Degree::Tie, 0, ctx.crotchet));
                }
                '#' | 'b' | '=' => {
                    let accidental = match ch {
                        '#' => 1,
                        'b' => -1,
                        _ => 0,
                    };
                    let note = self.last_note(&mut passage, ch, at)?;
                    match note.degree {
                        Degree::Pitch(degree) => {
                            note.accidental = accidental;
                            ctx.persist[usize::from(degree - 1)] = accidental;
                        }
                        _ => return Err(self.error_at(at, ParseErrorKind::PitchOnUnpitched(ch))),
                    }
                }
                '^' | 'v' => {
                    let note = self.last_note(&mut passage, ch, at)?;
                    if !note.degree.is_pitched() {
                        return Err(self.error_at(at, ParseErrorKind::PitchOnUnpitched(ch)));
                    }
                    note.octave += if ch == '^' { 1 } else { -1 };
                }
                '-' => {
                    let crotchet = ctx.crotchet;
                    let note = self.last_note(&mut passage, ch, at)?;
                    let extended = note.duration.checked_add(crotchet);
                    note.duration = self.arith(at, extended)?;
                }
                '/' => {
                    let note = self.last_note(&mut passage, ch, at)?;
                    let halved = note.duration.checked_div(Rational::int(2));
                    note.duration = self.arith(at, halved)?;
                }
                '.' => {
                    let crotchet = ctx.crotchet;
                    let note = self.last_note(&mut passage, ch, at)?;
                    let dotted = dot(note.duration, crotchet);
                    note.duration = self.arith(at, dotted)?;
                }
                '<' => {
                    let halved = ctx.crotchet.checked_div(Rational::int(2));
                    ctx.crotchet = self.arith(at, halved)?;
                }
                '>' => {
                    let doubled = ctx.crotchet.checked_mul(Rational::int(2));
                    ctx.crotchet = self.arith(at, doubled)?;
                }
                '[' => {
                    let factor = self.parse_tuplet(at)?;
                    let scaled = ctx.crotchet.checked_div(factor);
                    ctx.crotchet = self.arith(at, scaled)?;
                    ctx.tuplets.push(factor);
                }
                ']' | '!' => {
                    let factor = ctx.tuplets.pop().ok_or_else(|| {
                        self.error_at(at, ParseErrorKind::UnmatchedTupletClose(ch))
                    })?;
                    let restored = ctx.crotchet.checked_mul(factor);
                    ctx.crotchet = self.arith(at, restored)?;
                }
                '|' => {
                    self.close_measure(&mut passage, &mut ctx, at)?;
                    self.scan.skip_whitespace();
                    match self.scan.peek() {
                        None | Some('&') | Some('~') | Some(':') => {}
                        Some('|') => {
                            self.scan.advance();
                        }
                        Some(_) => continue,
                    }
                    passage.closed = true;
                    break;
                }
                _ if ch.is_whitespace() => {}
                _ => return Err(self.error_at(at, ParseErrorKind::UnexpectedChar(ch))),
            }
        }

        if !ctx.tuplets.is_empty() {
            warn!(
                "passage {} ends with {} unclosed tuplet(s)",
                number,
                ctx.tuplets.len()
            );
        }
        Ok(passage)
    }

    /// Sum up the measure in progress and check it against the time signature.
    fn close_measure(
        &self,
        passage: &mut Passage,
        ctx: &mut PassageContext,
        at: usize,
    ) -> ParseResult<()> {
        let mut total = Rational::ZERO;
        for note in &passage.notes[ctx.measure_start..] {
            let sum = total.checked_add(note.duration);
            total = self.arith(at, sum)?;
        }
        passage.measures += 1;
        if total != passage.header.metre.measure_length() {
            passage.irregular.push(IrregularMeasure {
                index: passage.measures,
                total,
            });
        }
        ctx.persist = [0; 7];
        ctx.measure_start = passage.notes.len();
        Ok(())
    }

    /// Parse the count after `[`, an optional explicit `:q`, and an optional closing `]`.
    fn parse_tuplet(&mut self, at: usize) -> ParseResult<Rational> {
        let count = self.positive_int(at)?;
        let factor = if self.scan.eat(':') {
            let at = self.scan.offset();
            let normal = self.positive_int(at)?;
            Rational::new(count, normal)
        } else {
            let computed = tuplet_factor(count);
            self.arith(at, computed)?
        };
        self.scan.eat(']');
        Ok(factor)
    }

    fn positive_int(&mut self, at: usize) -> ParseResult<i64> {
        self.scan
            .read_int()
            .filter(|&n| n > 0)
            .ok_or_else(|| self.error_at(at, ParseErrorKind::MalformedTuplet))
    }

    fn parse_order(&mut self, passages: usize) -> ParseResult<Vec<usize>> {
        let mut order = Vec::new();
        loop {
            self.scan.skip_whitespace();
            if self.scan.is_eof() {
                break;
            }
            let at = self.scan.offset();
            let index = self
                .scan
                .read_int()
                .ok_or_else(|| self.error_at(at, ParseErrorKind::MalformedOrder))?;
            if index < 1 || index as usize > passages {
                return Err(self.error_at(
                    at,
                    ParseErrorKind::OrderIndexOutOfRange { index, passages },
                ));
            }
            order.push(index as usize - 1);
        }
        Ok(order)
    }

    fn last_note<'p>(
        &self,
        passage: &'p mut Passage,
        modifier: char,
        at: usize,
    ) -> ParseResult<&'p mut Note> {
        match passage.notes.last_mut() {
            Some(note) => Ok(note),
            None => Err(self.error_at(at, ParseErrorKind::MissingNote(modifier))),
        }
    }

    fn arith<T>(&self, at: usize, result: Result<T, RationalError>) -> ParseResult<T> {
        result.map_err(|err| self.error_at(at, ParseErrorKind::Arithmetic(err)))
    }

    fn error_at(&self, offset: usize, kind: ParseErrorKind) -> ParseError {
        let pos = LineMap::new(self.scan.input()).offset_to_pos(offset);
        ParseError { pos, kind }
    }
}

/// Augment `duration` by a dot, proportional to the current base length.
///
/// With `k` the numerator of `duration / crotchet`, the duration is scaled by
/// `1 + 1 / (2k)`. For a plain note this is the classic "add half the value";
/// a note spanning several base lengths gains half a base length.
///
/// ```
/// # use jianpu::notation::parser::dot;
/// # use jianpu::rational::Rational;
/// let quarter = Rational::new(1, 4);
/// assert_eq!(dot(quarter, quarter), Ok(Rational::new(3, 8)));
/// assert_eq!(dot(Rational::new(1, 8), quarter), Ok(Rational::new(3, 16)));
/// assert_eq!(dot(Rational::new(1, 2), quarter), Ok(Rational::new(5, 8)));
/// assert_eq!(dot(Rational::new(3, 4), quarter), Ok(Rational::new(7, 8)));
/// ```
pub fn dot(duration: Rational, crotchet: Rational) -> Result<Rational, RationalError> {
    let k = duration.checked_div(crotchet)?.numerator();
    let augment = Rational::int(k).checked_mul(Rational::int(2))?.recip()?;
    duration.checked_mul(Rational::ONE.checked_add(augment)?)
}

/// Normalize a tuplet count into a factor in `(1, 2]` by repeated halving.
///
/// ```
/// # use jianpu::notation::parser::tuplet_factor;
/// # use jianpu::rational::Rational;
/// assert_eq!(tuplet_factor(3), Ok(Rational::new(3, 2)));
/// assert_eq!(tuplet_factor(5), Ok(Rational::new(5, 4)));
/// assert_eq!(tuplet_factor(7), Ok(Rational::new(7, 4)));
/// assert_eq!(tuplet_factor(4), Ok(Rational::int(2)));
/// ```
pub fn tuplet_factor(count: i64) -> Result<Rational, RationalError> {
    let two = Rational::int(2);
    let mut factor = Rational::int(count);
    while factor.checked_div(two)? > Rational::ONE {
        factor = factor.checked_div(two)?;
    }
    Ok(factor)
}


#[cfg(test)]
mod test {
    use super::*;

    fn durations(passage: &Passage) -> Vec<Rational> {
        passage.notes.iter().map(|n| n.duration).collect()
    }

    #[test]
    fn default_header_and_scale() {
        let music = parse_music("1234567|").unwrap();
        assert_eq!(music.passages.len(), 1);
        let passage = &music.passages[0];
        assert_eq!(passage.header, Header::default());
        assert_eq!(passage.notes.len(), 7);
        for (i, note) in passage.notes.iter().enumerate() {
            assert_eq!(note.degree, Degree::Pitch(i as u8 + 1));
            assert_eq!(note.accidental, 0);
            assert_eq!(note.octave, 0);
            assert_eq!(note.duration, Rational::new(1, 4));
        }
        assert_eq!(
            passage.irregular,
            vec![IrregularMeasure {
                index: 1,
                total: Rational::new(7, 4)
            }]
        );
        assert!(passage.closed);
        assert_eq!(music.order, vec![0]);
    }

    #[test]
    fn triplet() {
        let music = parse_music("[3]123]1 1|").unwrap();
        let passage = &music.passages[0];
        assert_eq!(
            durations(passage),
            vec![
                Rational::new(1, 6),
                Rational::new(1, 6),
                Rational::new(1, 6),
                Rational::new(1, 4),
                Rational::new(1, 4),
            ]
        );
        assert!(passage.irregular.is_empty());
    }

    #[test]
    fn tuplet_forms() {
        // bare count, closed by '!'
        let music = parse_music("[5 11111! 1 1 1|").unwrap();
        assert_eq!(music.passages[0].notes[0].duration, Rational::new(1, 5));
        // explicit ratio
        let music = parse_music("[3:2]111]11|").unwrap();
        assert_eq!(music.passages[0].notes[0].duration, Rational::new(1, 6));
        assert!(music.passages[0].irregular.is_empty());
        // nesting
        let music = parse_music("[3]1[3]111]]1 1|").unwrap();
        let d = durations(&music.passages[0]);
        assert_eq!(d[0], Rational::new(1, 6));
        assert_eq!(d[1], Rational::new(1, 9));
        assert_eq!(d[4], Rational::new(1, 4));
        assert!(music.passages[0].irregular.is_empty());
    }

    #[test]
    fn duration_modifiers() {
        let music = parse_music("1-- 2. 3/ <4 4> 5 |").unwrap();
        assert_eq!(
            durations(&music.passages[0]),
            vec![
                Rational::new(3, 4),
                Rational::new(3, 8),
                Rational::new(1, 8),
                Rational::new(1, 8),
                Rational::new(1, 8),
                Rational::new(1, 4),
            ]
        );
        // 3/4 + 3/8 + 1/8 + 1/8 + 1/8 + 1/4
        assert_eq!(music.passages[0].irregular[0].total, Rational::new(7, 4));
    }

    #[test]
    fn dot_follows_rescaled_unit() {
        // a half note under an eighth note unit counts as k = 4
        let music = parse_music("<1---.|").unwrap();
        assert_eq!(music.passages[0].notes[0].duration, Rational::new(9, 16));
    }

    #[test]
    fn persistent_accidentals() {
        let music = parse_music("4#3 4 4=4|4 4b 4 1|").unwrap();
        let accidentals: Vec<i8> = music.passages[0]
            .notes
            .iter()
            .map(|n| n.accidental)
            .collect();
        assert_eq!(accidentals, vec![1, 0, 1, 0, 0, 0, -1, -1, 0]);
    }

    #[test]
    fn octaves() {
        let music = parse_music("1^^ 2v 3^v 4|").unwrap();
        let octaves: Vec<i32> = music.passages[0].notes.iter().map(|n| n.octave).collect();
        assert_eq!(octaves, vec![2, -1, 0, 0]);
    }

    #[test]
    fn passages_and_order() {
        let music = parse_music(
            "1111|
             &Eb 3: 4 120 123|456||
             ~ 1-- |
             : 2 3 1 2",
        )
        .unwrap();
        assert_eq!(music.passages.len(), 3);
        assert_eq!(music.passages[1].header.mode.name(), "Eb");
        assert_eq!(music.passages[1].header.bpm, 120);
        assert_eq!(music.passages[2].header, music.passages[1].header);
        assert_eq!(music.passages[1].measures, 2);
        assert!(music.passages[2].irregular.is_empty());
        assert_eq!(music.order, vec![1, 2, 0, 1]);
    }

    #[test]
    fn leading_header_replaces_implicit_passage() {
        let music = parse_music("&G 2/4 100 1 2|").unwrap();
        assert_eq!(music.passages.len(), 1);
        assert_eq!(music.passages[0].header.metre.beats, 2);
        assert!(music.passages[0].irregular.is_empty());
    }

    #[test]
    fn unclosed_trailing_passage() {
        let music = parse_music("1111|&D 4: 4 90").unwrap();
        assert_eq!(music.passages.len(), 2);
        assert!(!music.passages[1].closed);
        assert!(music.passages[1].notes.is_empty());
    }

    #[test]
    fn passage_without_measures() {
        let music = parse_music("1111|&C 4: 4 88 &D 4: 4 88 1111|").unwrap();
        assert_eq!(music.passages.len(), 3);
        assert!(music.passages[1].notes.is_empty());
        assert_eq!(music.passages[1].measures, 0);
        assert!(!music.passages[1].closed);
        assert_eq!(music.passages[2].header.mode.name(), "D");
        assert_eq!(music.passages[2].notes.len(), 4);
        assert!(music.passages[2].closed);
        assert_eq!(music.order, vec![0, 1, 2]);

        let music = parse_music("1111|&C 4: 4 88 :1").unwrap();
        assert_eq!(music.passages.len(), 2);
        assert!(!music.passages[1].closed);
        assert_eq!(music.order, vec![0]);

        let music = parse_music("1111|~ ~1|").unwrap();
        assert_eq!(music.passages.len(), 3);
        assert!(music.passages[1].notes.is_empty());
    }

    #[test]
    fn measure_sum_matches_irregularity() {
        let music = parse_music("&C 3: 4 88 123|12|1-2|1---|").unwrap();
        let irregular: Vec<usize> = music.passages[0].irregular.iter().map(|m| m.index).collect();
        assert_eq!(irregular, vec![2, 4]);
    }

    #[test]
    fn errors() {
        let kind = |input: &str| parse_music(input).unwrap_err().kind().clone();
        assert_eq!(kind("#1|"), ParseErrorKind::MissingNote('#'));
        assert_eq!(kind("-"), ParseErrorKind::MissingNote('-'));
        assert_eq!(kind(",1|"), ParseErrorKind::LeadingTie);
        assert_eq!(kind("0#|"), ParseErrorKind::PitchOnUnpitched('#'));
        assert_eq!(kind("1],|"), ParseErrorKind::UnmatchedTupletClose(']'));
        assert_eq!(kind("[x 1|"), ParseErrorKind::MalformedTuplet);
        assert_eq!(kind("[0 1|"), ParseErrorKind::MalformedTuplet);
        assert_eq!(kind("1234"), ParseErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind("12x|"), ParseErrorKind::UnexpectedChar('x'));
        assert_eq!(kind("1111||1111|"), ParseErrorKind::UnexpectedChar('1'));
        assert_eq!(
            kind("1111|:1 2"),
            ParseErrorKind::OrderIndexOutOfRange {
                index: 2,
                passages: 1
            }
        );
        assert_eq!(kind("1111|:1 a"), ParseErrorKind::MalformedOrder);
        assert!(matches!(
            kind("1111|&H 4: 4 88 1|"),
            ParseErrorKind::MalformedHeader { .. }
        ));
        assert!(matches!(
            kind("1111|&C 4 4 88 1|"),
            ParseErrorKind::MalformedHeader { .. }
        ));
        assert!(matches!(
            kind("1111|&C 4: 0 88 1|"),
            ParseErrorKind::MalformedHeader { .. }
        ));
    }

    #[test]
    fn overflow_is_an_error() {
        let input = format!("1{}|", "/".repeat(70));
        assert_eq!(
            parse_music(&input).unwrap_err().kind(),
            &ParseErrorKind::Arithmetic(RationalError::ArithmeticOverflow)
        );
    }

    #[test]
    fn error_positions() {
        let err = parse_music("1111|\n12 x|").unwrap_err();
        assert_eq!(err.pos(), Pos { line: 2, column: 4 });
    }

    #[test]
    fn deterministic() {
        let input = "&F 6: 8 72 [3]123]4-.5|6/7/1^-,|";
        assert_eq!(parse_music(input), parse_music(input));
    }
}
