//! Section variation: the chord timeline of one section.
//!
//! Chords are stored by id and read back ordered by start bar. Every mutating
//! operation leaves the ordered chords pairwise non-overlapping and inside
//! `[0, bars]`; chords that would become empty are deleted instead.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::chord::{Chord, ChordId};
use crate::keyed::{self, Keyed};
use crate::quality::ChordQuality;

/// Identifier of a variation within a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct VariationId(pub u32);

/// Which boundary of a chord is being realigned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

/// Chords touched while resolving a committed drag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Deleted chords, including the dragged chord when it became empty
    pub removed: Vec<ChordId>,
    /// Chords that lost part of their interval
    pub truncated: Vec<ChordId>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.truncated.is_empty()
    }
}

/// The chords of one section, laid out over a whole number of bars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionVariation {
    id: VariationId,
    bars: u32,
    #[serde(with = "keyed")]
    chords: BTreeMap<ChordId, Chord>,
}

impl SectionVariation {
    pub const DEFAULT_BARS: u32 = 4;

    /// Empty variation; a `bars` of zero becomes one bar
    pub fn new(id: VariationId, bars: u32) -> Self {
        Self {
            id,
            bars: bars.max(1),
            chords: BTreeMap::new(),
        }
    }

    /// Four bars of I, IV, V, iii
    pub fn with_default_progression(id: VariationId) -> Self {
        let mut variation = Self::new(id, Self::DEFAULT_BARS);
        variation.add(Chord::new(0, ChordQuality::Major, 0.0, 1.0));
        variation.add(Chord::new(5, ChordQuality::Major, 1.0, 2.0));
        variation.add(Chord::new(7, ChordQuality::Major, 2.0, 3.0));
        variation.add(Chord::new(4, ChordQuality::Minor, 3.0, 4.0));
        variation
    }

    pub fn id(&self) -> VariationId {
        self.id
    }

    pub fn bars(&self) -> u32 {
        self.bars
    }

    /// Change the length of the variation. Chords starting at or past the new
    /// end are deleted and chords running past it are cut short. Zero is ignored.
    pub fn set_bars(&mut self, bars: u32) -> Vec<ChordId> {
        if bars == 0 {
            return Vec::new();
        }
        self.bars = bars;

        let limit = bars as f64;
        let removed: Vec<ChordId> = self
            .chords
            .values()
            .filter(|c| c.start() >= limit)
            .map(|c| c.id())
            .collect();
        for id in &removed {
            self.chords.remove(id);
        }
        for chord in self.chords.values_mut().filter(|c| c.end() > limit) {
            chord.set_end(limit);
        }

        if !removed.is_empty() {
            debug!("Variation {} resized to {} bars, removed {:?}", self.id.0, bars, removed);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Store a chord under the smallest unused id and return that id
    pub fn add(&mut self, mut chord: Chord) -> ChordId {
        let id = self.next_chord_id();
        chord.set_id(id);
        self.chords.insert(id, chord);
        id
    }

    /// Insert a chord the way an edit would: clamp it into `[0, bars]` and
    /// delete or trim the chords it overlaps. An interval that is empty once
    /// clamped is dropped and `None` is returned.
    pub fn place(&mut self, mut chord: Chord) -> Option<(ChordId, Resolution)> {
        let start = self.clamp_to_bars(chord.start())?;
        let end = self.clamp_to_bars(chord.end())?;
        if start >= end {
            debug!("Dropping empty chord [{}, {}) in variation {}", start, end, self.id.0);
            return None;
        }
        chord.set_start(start);
        chord.set_end(end);

        let id = self.add(chord);
        let resolution = self.resolve_conflicts(id, start, end);
        if !resolution.is_empty() {
            debug!(
                "Chord {} placed at [{}, {}): removed {:?}, truncated {:?}",
                id.0, start, end, resolution.removed, resolution.truncated
            );
        }
        Some((id, resolution))
    }

    pub fn remove(&mut self, id: ChordId) -> Option<Chord> {
        self.chords.remove(&id)
    }

    pub fn get(&self, id: ChordId) -> Option<&Chord> {
        self.chords.get(&id)
    }

    pub fn contains(&self, id: ChordId) -> bool {
        self.chords.contains_key(&id)
    }

    pub fn set_chord_key(&mut self, id: ChordId, key: u8) -> bool {
        let Some(chord) = self.chords.get_mut(&id) else {
            return false;
        };
        chord.set_key(key);
        true
    }

    pub fn set_chord_quality(&mut self, id: ChordId, quality: ChordQuality) -> bool {
        let Some(chord) = self.chords.get_mut(&id) else {
            return false;
        };
        chord.set_quality(quality);
        true
    }

    /// Chords in id order
    pub fn chords(&self) -> impl Iterator<Item = &Chord> {
        self.chords.values()
    }

    /// Chords ascending by start bar
    pub fn ordered(&self) -> Vec<&Chord> {
        let mut chords: Vec<&Chord> = self.chords.values().collect();
        chords.sort_by(|a, b| a.start().total_cmp(&b.start()));
        chords
    }

    fn ordered_ids(&self) -> Vec<ChordId> {
        self.ordered().into_iter().map(|c| c.id()).collect()
    }

    /// The chord just before `id` in start order
    pub fn previous_chord(&self, id: ChordId) -> Option<&Chord> {
        let ordered = self.ordered();
        let pos = ordered.iter().position(|c| c.id() == id)?;
        pos.checked_sub(1).map(|prev| ordered[prev])
    }

    fn next_chord_id(&self) -> ChordId {
        let mut id = 0;
        while self.chords.contains_key(&ChordId(id)) {
            id += 1;
        }
        ChordId(id)
    }

    /// Clamp into `[0, bars]`; non-finite positions have no place on the timeline
    fn clamp_to_bars(&self, bar: f64) -> Option<f64> {
        bar.is_finite().then(|| bar.clamp(0.0, self.bars as f64))
    }

    // ------------------------------------------------------------------------
    // Dragging
    // ------------------------------------------------------------------------

    /// Move a chord's end during a drag without touching other chords.
    /// Returns the clamped bar that was applied, or `None` for a missing chord
    /// or a non-finite bar.
    pub fn preview_pull_right(&mut self, id: ChordId, end: f64) -> Option<f64> {
        let bar = self.clamp_to_bars(end)?;
        let chord = self.chords.get_mut(&id)?;
        chord.set_end(bar);
        trace!("Preview chord {} end -> {}", id.0, bar);
        Some(bar)
    }

    /// Move a chord's start during a drag without touching other chords.
    /// Returns the clamped bar that was applied, or `None` for a missing chord
    /// or a non-finite bar.
    pub fn preview_pull_left(&mut self, id: ChordId, start: f64) -> Option<f64> {
        let bar = self.clamp_to_bars(start)?;
        let chord = self.chords.get_mut(&id)?;
        chord.set_start(bar);
        trace!("Preview chord {} start -> {}", id.0, bar);
        Some(bar)
    }

    /// Commit a drag of a chord's end to `end` and resolve conflicts
    pub fn pull_right(&mut self, id: ChordId, end: f64) -> Resolution {
        if self.preview_pull_right(id, end).is_none() {
            return Resolution::default();
        }
        self.commit(id)
    }

    /// Commit a drag of a chord's start to `start` and resolve conflicts
    pub fn pull_left(&mut self, id: ChordId, start: f64) -> Resolution {
        if self.preview_pull_left(id, start).is_none() {
            return Resolution::default();
        }
        self.commit(id)
    }

    fn commit(&mut self, id: ChordId) -> Resolution {
        let Some(chord) = self.chords.get(&id) else {
            return Resolution::default();
        };
        let (start, end) = (chord.start(), chord.end());

        if start >= end {
            self.chords.remove(&id);
            debug!("Chord {} emptied by drag, removed", id.0);
            return Resolution {
                removed: vec![id],
                truncated: Vec::new(),
            };
        }

        let resolution = self.resolve_conflicts(id, start, end);
        if !resolution.is_empty() {
            debug!(
                "Chord {} now [{}, {}): removed {:?}, truncated {:?}",
                id.0, start, end, resolution.removed, resolution.truncated
            );
        }
        resolution
    }

    /// Judge every other chord against the fixed reference interval
    /// `[ref_start, ref_end)` and delete or trim the ones it overlaps.
    fn resolve_conflicts(&mut self, reference: ChordId, ref_start: f64, ref_end: f64) -> Resolution {
        let bars = self.bars as f64;
        let mut resolution = Resolution::default();

        for id in self.ordered_ids() {
            if id == reference {
                continue;
            }
            let Some(other) = self.chords.get_mut(&id) else {
                continue;
            };
            let (start, end) = (other.start(), other.end());

            // Engulfed by the reference
            if start >= ref_start && start < ref_end && end > ref_start && end <= ref_end {
                self.chords.remove(&id);
                resolution.removed.push(id);
                continue;
            }

            // Hanging off the reference's right side
            if start < ref_end && end >= ref_end {
                if ref_end > bars || ref_end == end {
                    self.chords.remove(&id);
                    resolution.removed.push(id);
                } else {
                    other.set_start(ref_end);
                    resolution.truncated.push(id);
                }
                continue;
            }

            // Hanging off the reference's left side
            if end > ref_start && start <= ref_start {
                if ref_start < 0.0 || ref_start == end {
                    self.chords.remove(&id);
                    resolution.removed.push(id);
                } else {
                    other.set_end(ref_start);
                    resolution.truncated.push(id);
                }
            }
        }

        resolution
    }

    // ------------------------------------------------------------------------
    // Time signature
    // ------------------------------------------------------------------------

    /// Snap every chord boundary onto a grid of `segments` steps per bar.
    ///
    /// A single forward sweep in start order: a chord whose boundaries cannot
    /// be placed after the previous kept chord, or whose snapped interval is
    /// empty, is deleted and never retried.
    /// Returns the deleted ids. Zero segments is ignored.
    pub fn update_time_signature(&mut self, segments: u8) -> Vec<ChordId> {
        let mut removed = Vec::new();
        if segments == 0 {
            return removed;
        }

        let mut last = 0.0;
        for id in self.ordered_ids() {
            let Some(chord) = self.chords.get_mut(&id) else {
                continue;
            };

            let realigned = realign_time(chord.start(), segments, last, Boundary::Start).and_then(
                |start| realign_time(chord.end(), segments, start, Boundary::End).map(|end| (start, end)),
            );

            match realigned {
                Some((start, end)) if start < end => {
                    chord.set_start(start);
                    chord.set_end(end);
                    last = end;
                }
                _ => {
                    self.chords.remove(&id);
                    removed.push(id);
                }
            }
        }

        if !removed.is_empty() {
            debug!(
                "Variation {} requantized to {} segments, removed {:?}",
                self.id.0, segments, removed
            );
        }
        removed
    }
}

impl Keyed for SectionVariation {
    type Key = VariationId;

    fn map_key(&self) -> VariationId {
        self.id
    }
}

/// Snap one bar position onto a grid of `segments` steps per bar.
///
/// Whole bars are returned unchanged. Otherwise the in-bar fraction is rounded
/// to the nearest step and compared against `last`; `None` means the boundary
/// cannot be placed. An end that lands exactly on `last` is pushed one step
/// forward, unless that would spill past the bar.
pub fn realign_time(time: f64, segments: u8, last: f64, boundary: Boundary) -> Option<f64> {
    let bar = time.floor();
    let fraction = time - bar;

    if fraction == 0.0 {
        return Some(bar);
    }

    let segments = segments as f64;
    let best = (fraction * segments).round() / segments;

    if boundary == Boundary::End && best == last {
        let step = 1.0 / segments;
        if best + step > 1.0 {
            return None;
        }
        return Some(bar + best + step);
    }

    if best < last {
        return None;
    }

    Some(bar + best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variation(bars: u32, spans: &[(f64, f64)]) -> (SectionVariation, Vec<ChordId>) {
        let mut v = SectionVariation::new(VariationId(0), bars);
        let ids = spans
            .iter()
            .map(|&(s, e)| v.add(Chord::new(0, ChordQuality::Major, s, e)))
            .collect();
        (v, ids)
    }

    fn spans(v: &SectionVariation) -> Vec<(f64, f64)> {
        v.ordered().iter().map(|c| (c.start(), c.end())).collect()
    }

    fn assert_consistent(v: &SectionVariation) {
        let ordered = v.ordered();
        for chord in &ordered {
            assert!(chord.start() < chord.end(), "empty chord {:?}", chord);
            assert!(chord.start() >= 0.0 && chord.end() <= v.bars() as f64, "out of range {:?}", chord);
        }
        for pair in ordered.windows(2) {
            assert!(pair[0].end() <= pair[1].start(), "overlap {:?} {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_default_progression() {
        let v = SectionVariation::with_default_progression(VariationId(0));
        assert_eq!(v.bars(), 4);
        let keys: Vec<u8> = v.ordered().iter().map(|c| c.key(0)).collect();
        assert_eq!(keys, vec![0, 5, 7, 4]);
        assert_eq!(spans(&v), vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0), (3.0, 4.0)]);
        assert_consistent(&v);
    }

    #[test]
    fn test_add_allocates_smallest_unused_id() {
        let (mut v, ids) = variation(4, &[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
        assert_eq!(ids, vec![ChordId(0), ChordId(1), ChordId(2)]);

        v.remove(ChordId(1));
        assert_eq!(v.add(Chord::new(2, ChordQuality::Minor, 1.0, 2.0)), ChordId(1));
        assert_eq!(v.add(Chord::new(2, ChordQuality::Minor, 3.0, 4.0)), ChordId(3));
        assert_eq!(v.get(ChordId(1)).map(|c| c.id()), Some(ChordId(1)));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let (mut v, _) = variation(4, &[(0.0, 1.0)]);
        assert!(v.remove(ChordId(7)).is_none());
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_ordered_by_start() {
        let (v, _) = variation(4, &[(2.0, 3.0), (0.0, 1.0), (1.0, 2.0)]);
        assert_eq!(spans(&v), vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    }

    #[test]
    fn test_previous_chord() {
        let (v, ids) = variation(4, &[(2.0, 3.0), (0.0, 1.0), (1.0, 2.0)]);
        assert_eq!(v.previous_chord(ids[0]).map(|c| c.id()), Some(ids[2]));
        assert_eq!(v.previous_chord(ids[2]).map(|c| c.id()), Some(ids[1]));
        assert!(v.previous_chord(ids[1]).is_none());
        assert!(v.previous_chord(ChordId(42)).is_none());
    }

    #[test]
    fn test_preview_clamps_and_keeps_empty_chord() {
        let (mut v, ids) = variation(4, &[(1.0, 2.0), (2.0, 3.0)]);

        assert_eq!(v.preview_pull_right(ids[0], 9.0), Some(4.0));
        assert_eq!(v.get(ids[0]).unwrap().end(), 4.0);
        // Neighbour untouched during preview
        assert_eq!(v.get(ids[1]).unwrap().start(), 2.0);

        assert_eq!(v.preview_pull_right(ids[0], -3.0), Some(0.0));
        assert!(v.contains(ids[0]));

        assert_eq!(v.preview_pull_left(ids[1], -1.0), Some(0.0));
        assert_eq!(v.preview_pull_left(ChordId(9), 1.0), None);
    }

    #[test]
    fn test_pull_right_engulfs() {
        let (mut v, ids) = variation(4, &[(0.0, 4.0), (1.0, 2.0)]);
        let resolution = v.pull_right(ids[0], 4.0);
        assert_eq!(resolution.removed, vec![ids[1]]);
        assert!(!v.contains(ids[1]));
        assert_eq!(spans(&v), vec![(0.0, 4.0)]);
    }

    #[test]
    fn test_pull_right_truncates_neighbour() {
        let (mut v, ids) = variation(4, &[(0.0, 1.0), (1.0, 3.0)]);
        v.preview_pull_right(ids[0], 1.5);
        v.preview_pull_right(ids[0], 2.0);
        let resolution = v.pull_right(ids[0], 2.0);
        assert_eq!(resolution.truncated, vec![ids[1]]);
        assert_eq!(spans(&v), vec![(0.0, 2.0), (2.0, 3.0)]);
        assert_consistent(&v);
    }

    #[test]
    fn test_pull_right_over_whole_neighbour_removes_it() {
        let (mut v, ids) = variation(4, &[(0.0, 1.0), (1.0, 2.0), (2.0, 4.0)]);
        let resolution = v.pull_right(ids[0], 2.5);
        assert_eq!(resolution.removed, vec![ids[1]]);
        assert_eq!(resolution.truncated, vec![ids[2]]);
        assert_eq!(spans(&v), vec![(0.0, 2.5), (2.5, 4.0)]);
        assert_consistent(&v);
    }

    #[test]
    fn test_pull_right_to_own_start_deletes_only_itself() {
        let (mut v, ids) = variation(4, &[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
        let resolution = v.pull_right(ids[1], 1.0);
        assert_eq!(resolution.removed, vec![ids[1]]);
        assert!(resolution.truncated.is_empty());
        assert_eq!(spans(&v), vec![(0.0, 1.0), (2.0, 3.0)]);

        let resolution = v.pull_right(ids[2], 0.5);
        assert_eq!(resolution.removed, vec![ids[2]]);
        assert_eq!(spans(&v), vec![(0.0, 1.0)]);
    }

    #[test]
    fn test_pull_left_truncates_left_neighbour() {
        let (mut v, ids) = variation(4, &[(0.0, 2.0), (2.0, 3.0)]);
        let resolution = v.pull_left(ids[1], 1.25);
        assert_eq!(resolution.truncated, vec![ids[0]]);
        assert_eq!(spans(&v), vec![(0.0, 1.25), (1.25, 3.0)]);
        assert_consistent(&v);
    }

    #[test]
    fn test_pull_left_to_zero_swallows_earlier_chords() {
        let (mut v, ids) = variation(4, &[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
        let resolution = v.pull_left(ids[2], -2.0);
        assert_eq!(resolution.removed, vec![ids[0], ids[1]]);
        assert_eq!(spans(&v), vec![(0.0, 3.0)]);
    }

    #[test]
    fn test_pull_left_past_end_deletes() {
        let (mut v, ids) = variation(4, &[(0.0, 1.0), (1.0, 2.0)]);
        let resolution = v.pull_left(ids[0], 1.0);
        assert_eq!(resolution.removed, vec![ids[0]]);
        assert_eq!(spans(&v), vec![(1.0, 2.0)]);
    }

    #[test]
    fn test_reference_inside_neighbour_keeps_its_tail() {
        // Neighbour covering the reference keeps the part after it
        let (mut v, ids) = variation(4, &[(0.0, 4.0)]);
        let inner = v.add(Chord::new(0, ChordQuality::Minor, 1.0, 2.0));
        let resolution = v.pull_right(inner, 2.0);
        assert_eq!(resolution.truncated, vec![ids[0]]);
        assert_eq!(spans(&v), vec![(1.0, 2.0), (2.0, 4.0)]);
        assert_consistent(&v);
    }

    #[test]
    fn test_neighbour_sharing_reference_end_is_removed() {
        let (mut v, ids) = variation(4, &[(0.0, 3.0)]);
        let inner = v.add(Chord::new(0, ChordQuality::Minor, 1.0, 2.0));
        let resolution = v.pull_right(inner, 3.0);
        assert_eq!(resolution.removed, vec![ids[0]]);
        assert!(resolution.truncated.is_empty());
        assert_eq!(spans(&v), vec![(1.0, 3.0)]);
    }

    #[test]
    fn test_non_finite_drag_is_ignored() {
        let (mut v, ids) = variation(4, &[(0.0, 1.0), (1.0, 2.0)]);
        for bar in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(v.preview_pull_right(ids[0], bar), None);
            assert_eq!(v.preview_pull_left(ids[1], bar), None);
            assert!(v.pull_right(ids[0], bar).is_empty());
            assert!(v.pull_left(ids[1], bar).is_empty());
        }
        assert_eq!(spans(&v), vec![(0.0, 1.0), (1.0, 2.0)]);
    }

    #[test]
    fn test_place_clamps_and_resolves() {
        let mut v = SectionVariation::with_default_progression(VariationId(0));
        let (id, resolution) = v.place(Chord::new(2, ChordQuality::Minor, 0.5, 9.0)).unwrap();
        assert_eq!(id, ChordId(4));
        assert_eq!(resolution.removed, vec![ChordId(1), ChordId(2), ChordId(3)]);
        assert_eq!(resolution.truncated, vec![ChordId(0)]);
        assert_eq!(spans(&v), vec![(0.0, 0.5), (0.5, 4.0)]);
        assert_consistent(&v);
    }

    #[test]
    fn test_place_drops_empty_or_non_finite() {
        let (mut v, _) = variation(4, &[(0.0, 1.0)]);
        assert!(v.place(Chord::new(0, ChordQuality::Major, 5.0, 7.0)).is_none());
        assert!(v.place(Chord::new(0, ChordQuality::Major, 2.0, 2.0)).is_none());
        assert!(v.place(Chord::new(0, ChordQuality::Major, f64::NAN, 2.0)).is_none());
        assert_eq!(spans(&v), vec![(0.0, 1.0)]);
    }

    #[test]
    fn test_pull_missing_chord() {
        let (mut v, _) = variation(4, &[(0.0, 1.0)]);
        assert!(v.pull_right(ChordId(3), 2.0).is_empty());
        assert!(v.pull_left(ChordId(3), 2.0).is_empty());
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_drag_sequence_keeps_invariant() {
        let (mut v, ids) = variation(8, &[(0.0, 1.0), (1.0, 2.5), (2.5, 3.0), (4.0, 6.0), (6.0, 8.0)]);
        let drags: [(usize, bool, f64); 8] = [
            (0, true, 3.75),
            (3, false, 1.5),
            (4, false, 9.0),
            (4, true, -1.0),
            (2, true, 7.0),
            (1, false, 0.0),
            (3, true, 8.0),
            (0, false, 5.5),
        ];
        for (idx, right, bar) in drags {
            if right {
                v.pull_right(ids[idx], bar);
            } else {
                v.pull_left(ids[idx], bar);
            }
            assert_consistent(&v);
        }
    }

    #[test]
    fn test_set_bars_shrinks() {
        let (mut v, ids) = variation(4, &[(0.0, 1.0), (1.0, 2.5), (3.0, 4.0)]);
        assert_eq!(v.set_bars(2), vec![ids[2]]);
        assert_eq!(v.bars(), 2);
        assert_eq!(spans(&v), vec![(0.0, 1.0), (1.0, 2.0)]);
        assert!(v.set_bars(0).is_empty());
        assert_eq!(v.bars(), 2);
    }

    #[test]
    fn test_realign_time() {
        assert_eq!(realign_time(2.0, 4, 0.0, Boundary::Start), Some(2.0));
        assert_eq!(realign_time(0.3, 4, 0.0, Boundary::Start), Some(0.25));
        assert_eq!(realign_time(0.7, 4, 0.25, Boundary::End), Some(0.75));
        // End landing on the start is pushed one step
        assert_eq!(realign_time(0.2, 2, 0.0, Boundary::End), Some(0.5));
        // ...unless the step would leave the bar
        assert_eq!(realign_time(0.95, 2, 1.0, Boundary::End), None);
        assert_eq!(realign_time(0.2, 2, 0.5, Boundary::Start), None);
    }

    #[test]
    fn test_requantize_sweep() {
        let (mut v, _) = variation(4, &[(0.3, 0.7), (1.0, 2.0)]);
        assert!(v.update_time_signature(4).is_empty());
        assert_eq!(spans(&v), vec![(0.25, 0.75), (1.0, 2.0)]);
    }

    #[test]
    fn test_requantize_collision_deletes_later_chord() {
        let (mut v, ids) = variation(4, &[(0.1, 0.2), (0.2, 0.3)]);
        assert_eq!(v.update_time_signature(2), vec![ids[1]]);
        assert_eq!(spans(&v), vec![(0.0, 0.5)]);
    }

    #[test]
    fn test_requantize_end_overflow_deletes() {
        let (mut v, ids) = variation(4, &[(0.9, 0.95)]);
        assert_eq!(v.update_time_signature(2), vec![ids[0]]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_requantize_never_keeps_empty_chord() {
        // Both starts round up onto the whole-bar end
        let (mut v, ids) = variation(4, &[(1.9, 2.0), (0.9, 1.0)]);
        let mut removed = v.update_time_signature(2);
        removed.sort();
        assert_eq!(removed, ids);
        assert!(v.is_empty());
    }

    #[test]
    fn test_requantize_is_idempotent() {
        let (mut v, _) = variation(4, &[(0.1, 0.2), (0.2, 0.3), (0.3, 0.7), (1.0, 2.0), (2.0, 3.0)]);
        v.update_time_signature(4);
        let first = spans(&v);
        assert!(v.update_time_signature(4).is_empty());
        assert_eq!(spans(&v), first);
        assert_consistent(&v);
    }

    #[test]
    fn test_requantize_zero_segments_ignored() {
        let (mut v, _) = variation(4, &[(0.3, 0.7)]);
        assert!(v.update_time_signature(0).is_empty());
        assert_eq!(spans(&v), vec![(0.3, 0.7)]);
    }
}
