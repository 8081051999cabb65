// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprite loading: generations, tickets, and the identifier listing.
//!
//! Every wholesale change of the sprite list starts a new [`Generation`].
//! Each image request carries a [`LoadTicket`] naming its generation and its
//! index in the list, so results that arrive after a reset can be recognized
//! and dropped instead of being placed into the new layout.

use kurbo::Rect;
use spritefield_pack::PlacementError;

use crate::error::SpriteListError;

/// One sprite-set load cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u32);

impl Generation {
    /// The generation after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Identifies one in-flight image load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    /// Generation the load belongs to.
    pub generation: Generation,
    /// Position of the sprite in the sorted identifier list.
    pub index: usize,
}

/// An image the host should resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    /// Ticket to hand back with the result.
    pub ticket: LoadTicket,
    /// Resolved URL.
    pub url: String,
}

/// What happened to a resolved image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadOutcome {
    /// The sprite was placed at this world rectangle.
    Placed(Rect),
    /// The ticket belongs to an older generation or was already settled.
    Stale,
    /// The image could not be placed.
    Rejected(PlacementError),
}

/// Resolves a sprite path against `base`.
///
/// Paths that start with `http` are taken as absolute URLs.
pub fn resolve_url(base: &str, path: &str) -> String {
    if path.starts_with("http") {
        path.to_owned()
    } else {
        format!("{base}{path}")
    }
}

/// Parses the identifier listing: a JSON array of path strings.
///
/// The result is sorted so placement order does not depend on listing order.
pub fn parse_sprite_list(json: &str) -> Result<Vec<String>, SpriteListError> {
    let mut ids: Vec<String> = serde_json::from_str(json).map_err(SpriteListError::Malformed)?;
    if ids.is_empty() {
        return Err(SpriteListError::Empty);
    }
    ids.sort();
    Ok(ids)
}

/// Tracks the current identifier list and which of its loads have settled.
#[derive(Clone, Debug, Default)]
pub struct SpriteLoader {
    generation: Generation,
    ids: Vec<String>,
    urls: Vec<String>,
    settled: Vec<bool>,
}

impl SpriteLoader {
    /// Current generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Identifiers of the current generation.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Whether `ids` differs from the current list.
    pub fn differs(&self, ids: &[String]) -> bool {
        self.ids != ids
    }

    /// Starts a new generation for `ids` and returns one request per
    /// identifier, in list order.
    pub fn reset(&mut self, ids: Vec<String>, base_url: &str) -> Vec<LoadRequest> {
        self.generation = self.generation.next();
        self.urls = ids.iter().map(|id| resolve_url(base_url, id)).collect();
        self.settled = vec![false; ids.len()];
        self.ids = ids;
        self.urls
            .iter()
            .enumerate()
            .map(|(index, url)| LoadRequest {
                ticket: LoadTicket {
                    generation: self.generation,
                    index,
                },
                url: url.clone(),
            })
            .collect()
    }

    /// Settles `ticket` and returns its URL, or `None` if the ticket is stale,
    /// unknown, or already settled.
    pub fn settle(&mut self, ticket: LoadTicket) -> Option<&str> {
        if ticket.generation != self.generation {
            return None;
        }
        let settled = self.settled.get_mut(ticket.index)?;
        if *settled {
            return None;
        }
        *settled = true;
        self.urls.get(ticket.index).map(String::as_str)
    }

    /// Number of loads of the current generation still outstanding.
    pub fn outstanding(&self) -> usize {
        self.settled.iter().filter(|s| !**s).count()
    }
}
