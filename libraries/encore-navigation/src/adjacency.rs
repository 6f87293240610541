//! Adjacency engine
//!
//! The next/previous relation over a resolved sequence, plus the lookahead
//! flags both protocols report. All flag arithmetic lives here; protocol
//! adapters read `has_next` / `has_previous` and never recompute them.

use crate::resolver::{ContextResolver, Sequence};
use encore_core::{PlaybackContext, TrackId};

/// A track position within its context, with lookahead flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub track_id: TrackId,

    /// Queue position (derived, never stored)
    pub index: usize,

    /// Another track follows this one
    pub has_next: bool,

    /// Another track precedes this one
    pub has_previous: bool,
}

impl Neighbor {
    /// The only track of a closed single-track context
    fn lone(track_id: TrackId) -> Self {
        Self {
            track_id,
            index: 0,
            has_next: false,
            has_previous: false,
        }
    }
}

/// Whether a track follows position `index` in a sequence of `len`
pub fn has_next_at(index: usize, len: usize) -> bool {
    index + 1 < len
}

/// Whether a track precedes position `index`
pub fn has_previous_at(index: usize) -> bool {
    index > 0
}

fn neighbor_at(sequence: &Sequence, index: usize) -> Option<Neighbor> {
    let track_id = sequence.get(index)?.clone();
    Some(Neighbor {
        track_id,
        index,
        has_next: has_next_at(index, sequence.len()),
        has_previous: has_previous_at(index),
    })
}

/// Track after `current`; `None` if `current` is absent or last
pub fn next_in(sequence: &Sequence, current: &TrackId) -> Option<Neighbor> {
    let index = sequence.position(current)?;
    neighbor_at(sequence, index + 1)
}

/// Track before `current`; `None` if `current` is absent or first
pub fn previous_in(sequence: &Sequence, current: &TrackId) -> Option<Neighbor> {
    let index = sequence.position(current)?;
    if index == 0 {
        return None;
    }
    neighbor_at(sequence, index - 1)
}

/// First track of a sequence
pub fn first_in(sequence: &Sequence) -> Option<Neighbor> {
    neighbor_at(sequence, 0)
}

/// `current` itself with fresh flags
pub fn locate_in(sequence: &Sequence, current: &TrackId) -> Option<Neighbor> {
    let index = sequence.position(current)?;
    neighbor_at(sequence, index)
}

/// Context-aware adjacency over the live catalog
///
/// Every call resolves the context again, so concurrent requests each see
/// storage as of their own call time.
#[derive(Clone)]
pub struct AdjacencyEngine {
    resolver: ContextResolver,
}

impl AdjacencyEngine {
    pub fn new(resolver: ContextResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &ContextResolver {
        &self.resolver
    }

    /// Next track in `context` after `current`
    ///
    /// Always `None` for `Single`.
    pub async fn next(&self, context: &PlaybackContext, current: &TrackId) -> Option<Neighbor> {
        if context.is_single() {
            return None;
        }
        let sequence = self.resolver.resolve(context).await;
        next_in(&sequence, current)
    }

    /// Previous track in `context` before `current`
    ///
    /// Always `None` for `Single`.
    pub async fn previous(&self, context: &PlaybackContext, current: &TrackId) -> Option<Neighbor> {
        if context.is_single() {
            return None;
        }
        let sequence = self.resolver.resolve(context).await;
        previous_in(&sequence, current)
    }

    /// Starting point of `context`
    ///
    /// For `Single` the anchor track is the whole sequence.
    pub async fn first(&self, context: &PlaybackContext, anchor: Option<&TrackId>) -> Option<Neighbor> {
        if context.is_single() {
            return anchor.cloned().map(Neighbor::lone);
        }
        let sequence = self.resolver.resolve(context).await;
        first_in(&sequence)
    }

    /// Refresh the flags for `current` without moving
    ///
    /// `None` means `current` is no longer part of `context`.
    pub async fn locate(&self, context: &PlaybackContext, current: &TrackId) -> Option<Neighbor> {
        if context.is_single() {
            return Some(Neighbor::lone(current.clone()));
        }
        let sequence = self.resolver.resolve(context).await;
        locate_in(&sequence, current)
    }
}
