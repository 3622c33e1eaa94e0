use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A content row as fetched from the store, either a place or an
/// itinerary. The
/// payload stays opaque to this crate; only the id matters for merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegularItem {
    pub id: String,
    #[serde(default)]
    pub payload: Value,
}

impl RegularItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            payload: Value::Null,
        }
    }

    pub fn with_payload(id: impl Into<String>, payload: Value) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }
}

/// Promotional sub-type shown on a sponsored card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsoredKind {
    Hotel,
    Restaurant,
}

/// A synthesized promotional card. Never persisted; its id lives in its own
/// `sponsored-` namespace so it cannot collide with store ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredItem {
    pub id: String,
    pub kind: SponsoredKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Display-ready feed entry. Tagged so clients can discriminate the two
/// card types in one list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FeedItem {
    Regular(RegularItem),
    Sponsored(SponsoredItem),
}

impl FeedItem {
    pub fn id(&self) -> &str {
        match self {
            FeedItem::Regular(item) => &item.id,
            FeedItem::Sponsored(item) => &item.id,
        }
    }

    pub fn is_sponsored(&self) -> bool {
        matches!(self, FeedItem::Sponsored(_))
    }

    pub fn as_regular(&self) -> Option<&RegularItem> {
        match self {
            FeedItem::Regular(item) => Some(item),
            FeedItem::Sponsored(_) => None,
        }
    }
}

/// One fetched page of regular items. Immutable input to the merger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub items: Vec<RegularItem>,
    pub page_number: u32,
    pub page_size: u32,
}

impl Page {
    /// A short page means the store ran out of rows.
    pub fn has_more(&self) -> bool {
        self.items.len() as u32 == self.page_size
    }

    pub fn is_last(&self) -> bool {
        !self.has_more()
    }
}
