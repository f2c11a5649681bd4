//! Typewriter effect cycling through a list of phrases.

use std::time::{Duration, Instant};

/// Steps processed in one tick before the schedule is resynchronised to
/// `now` (after a long suspension).
const MAX_STEPS_PER_TICK: usize = 512;

/// Per-character and hold delays of a [`Typewriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay before each typed character.
    pub type_delay: Duration,
    /// Delay before each deleted character.
    pub delete_delay: Duration,
    /// Pause with the phrase fully typed.
    pub hold: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(60),
            delete_delay: Duration::from_millis(40),
            hold: Duration::from_millis(1200),
        }
    }
}

/// Where the typewriter is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Adding characters to the current phrase.
    Typing,
    /// Showing the full phrase.
    Holding,
    /// Removing characters before the next phrase.
    Deleting,
}

/// Types, holds and deletes each phrase in turn, looping forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    shown: usize,
    phase: Phase,
    timing: TypewriterTiming,
    next_step: Option<Instant>,
}

impl Typewriter {
    /// Typewriter starting on the first phrase with nothing shown.
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming, now: Instant) -> Self {
        let next_step = (!phrases.is_empty()).then(|| now + timing.type_delay);
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            timing,
            next_step,
        }
    }

    /// The visible prefix of the current phrase.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    /// Index of the current phrase.
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run every step that fell due. Returns `true` if the text changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for _ in 0..MAX_STEPS_PER_TICK {
            match self.next_step {
                Some(due) if due <= now => {
                    let delay = self.step();
                    changed = true;
                    self.next_step = Some(due + delay);
                }
                _ => return changed,
            }
        }
        self.next_step = self.next_step.map(|_| now + self.timing.type_delay);
        changed
    }

    /// When the next step falls due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_step
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.index)
            .map_or(0, |p| p.chars().count())
    }

    fn step(&mut self) -> Duration {
        match self.phase {
            Phase::Typing => {
                let len = self.phrase_len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                    self.timing.hold
                } else {
                    self.timing.type_delay
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.timing.delete_delay
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len().max(1);
                    self.phase = Phase::Typing;
                    self.timing.type_delay
                } else {
                    self.timing.delete_delay
                }
            }
        }
    }
}
