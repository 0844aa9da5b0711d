//! Typed identifiers for board entities.
//!
//! Every id on a board is drawn from a single [`IdGenerator`], so an id is
//! unique across posts, comments and replies for the board's lifetime.
//! The marker type only keeps a post id from being passed where a comment
//! id is expected.

use std::fmt;
use std::marker::PhantomData;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Marker for post ids.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

/// Marker for comment ids.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct CommentMarker;

/// Marker for reply ids.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct ReplyMarker;

/// Identifier of an entity of kind `Marker`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Id<Marker>(u64, PhantomData<Marker>);

/// Post identifier.
pub type PostId = Id<PostMarker>;
/// Comment identifier.
pub type CommentId = Id<CommentMarker>;
/// Reply identifier.
pub type ReplyId = Id<ReplyMarker>;

impl<Marker> Id<Marker> {
    /// Wrap a raw id value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value, PhantomData)
    }

    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl<Marker> fmt::Display for Id<Marker> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<Marker> From<u64> for Id<Marker> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<Marker> From<Id<Marker>> for u64 {
    fn from(value: Id<Marker>) -> Self {
        value.0
    }
}

impl<Marker> FromStr for Id<Marker> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self::new)
    }
}

impl<Marker> Serialize for Id<Marker> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

/// Board-wide id source.
///
/// Ids start at 1 and increase by one per call, regardless of entity kind.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Create a generator whose first id is 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Draw the next id.
    pub fn next_id<Marker>(&mut self) -> Id<Marker> {
        let id = Id::new(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
