//! Value objects for the variant aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use event_core::IdSource;

/// Unique identifier for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(Uuid);

impl VariantId {
    /// Mints a fresh id.
    pub fn mint(ids: &mut dyn IdSource) -> Self {
        Self(ids.next_id())
    }

    /// Creates an id from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for VariantId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<VariantId> for Uuid {
    fn from(id: VariantId) -> Self {
        id.0
    }
}

/// Reference to the product a variant belongs to.
///
/// Products live in their own aggregate; the variant only keeps the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Creates a reference from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// True for the nil UUID, which reference validation treats as absent.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ProductId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<ProductId> for Uuid {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// Reference to the color a variant is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(Uuid);

impl ColorId {
    /// Creates a reference from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// True for the nil UUID, which reference validation treats as absent.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ColorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<ColorId> for Uuid {
    fn from(id: ColorId) -> Self {
        id.0
    }
}

/// Identifier of an attribute owned by a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeId(Uuid);

impl AttributeId {
    /// Mints a fresh id.
    pub fn mint(ids: &mut dyn IdSource) -> Self {
        Self(ids.next_id())
    }

    /// Creates an id from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AttributeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AttributeId> for Uuid {
    fn from(id: AttributeId) -> Self {
        id.0
    }
}

/// Identifier of an image owned by a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(Uuid);

impl ImageId {
    /// Mints a fresh id.
    pub fn mint(ids: &mut dyn IdSource) -> Self {
        Self(ids.next_id())
    }

    /// Creates an id from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ImageId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<ImageId> for Uuid {
    fn from(id: ImageId) -> Self {
        id.0
    }
}

/// Identifier of a variant's detail record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailId(Uuid);

impl DetailId {
    /// Mints a fresh id.
    pub fn mint(ids: &mut dyn IdSource) -> Self {
        Self(ids.next_id())
    }

    /// Creates an id from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for DetailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for DetailId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<DetailId> for Uuid {
    fn from(id: DetailId) -> Self {
        id.0
    }
}

/// Identifier of one entry in a variant's price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceRecordId(Uuid);

impl PriceRecordId {
    /// Mints a fresh id.
    pub fn mint(ids: &mut dyn IdSource) -> Self {
        Self(ids.next_id())
    }

    /// Creates an id from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PriceRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PriceRecordId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<PriceRecordId> for Uuid {
    fn from(id: PriceRecordId) -> Self {
        id.0
    }
}

/// Nine-digit article number printed on labels and packing slips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleNumber(u64);

impl ArticleNumber {
    /// Derives the article number for a variant id.
    ///
    /// Folds the id bytes into nine decimal digits, offset so the leading
    /// digit is never zero. Deterministic, so replaying a history always
    /// reproduces the same article.
    pub fn derive(id: VariantId) -> Self {
        let folded = id.as_uuid().as_bytes().iter().fold(0u64, |acc, byte| {
            (acc.wrapping_mul(31).wrapping_add(u64::from(*byte))) % 900_000_000
        });
        Self(100_000_000 + folded)
    }

    /// Raw value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArticleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A price in minor currency units, to avoid floating point issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    minor_units: i64,
}

impl Price {
    /// Creates a price from minor units (e.g. cents, kopecks).
    pub fn from_minor_units(minor_units: i64) -> Self {
        Self { minor_units }
    }

    /// Raw minor units.
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// True for prices above zero.
    pub fn is_positive(&self) -> bool {
        self.minor_units > 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minor_units < 0 { "-" } else { "" };
        let abs = self.minor_units.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Accumulated buyer rating: a vote count plus the sum of scores.
///
/// Kept as an accumulator rather than a float so folding votes in any
/// order gives the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rating {
    score_sum: u64,
    votes: u64,
}

impl Rating {
    /// Lowest score a buyer can give.
    pub const MIN_SCORE: u8 = 1;
    /// Highest score a buyer can give.
    pub const MAX_SCORE: u8 = 5;

    /// Folds one vote into the accumulator.
    pub fn record(self, score: u8) -> Self {
        Self {
            score_sum: self.score_sum + u64::from(score),
            votes: self.votes + 1,
        }
    }

    /// Number of votes recorded so far.
    pub fn votes(&self) -> u64 {
        self.votes
    }

    /// Sum of all recorded scores.
    pub fn score_sum(&self) -> u64 {
        self.score_sum
    }

    /// Average score, or 0.0 before the first vote.
    pub fn average(&self) -> f64 {
        if self.votes == 0 {
            0.0
        } else {
            self.score_sum as f64 / self.votes as f64
        }
    }
}
