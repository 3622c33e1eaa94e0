//! Sponsored interleaving
//!
//! Inserts one synthesized sponsored card after every `cadence` regular
//! items. The counter is owned by the merger and carried across pages for
//! the whole feed session: re-deriving placement from the accumulated list
//! on every page load would shift earlier sponsored slots as the list
//! grows. Two states only, Fresh (counter 0) and Accumulating, with reset
//! driven explicitly by the caller on filter change.

use tracing::debug;

use crate::context::DisplayContext;
use crate::error::{FeedError, Result};
use crate::models::{FeedItem, RegularItem, SponsoredItem, SponsoredKind};

/// Chooses the sponsored sub-type from the global regular-item count at the
/// slot being filled.
pub trait VariantSelector {
    fn select(&self, global_count: u64) -> SponsoredKind;
}

impl<F> VariantSelector for F
where
    F: Fn(u64) -> SponsoredKind,
{
    fn select(&self, global_count: u64) -> SponsoredKind {
        self(global_count)
    }
}

/// The app's production policy: every second sponsored slot advertises
/// hotels, the rest restaurants. With the listing screens' cadence of 5
/// this is the familiar "hotel at item 10, 20, ..." rhythm.
#[derive(Debug, Clone, Copy)]
pub struct AlternatingVariant {
    cadence: u32,
}

impl AlternatingVariant {
    /// `cadence` should match the merger's.
    pub fn new(cadence: u32) -> Self {
        Self { cadence }
    }
}

impl VariantSelector for AlternatingVariant {
    fn select(&self, global_count: u64) -> SponsoredKind {
        let period = 2 * u64::from(self.cadence.max(1));
        if global_count % period == 0 {
            SponsoredKind::Hotel
        } else {
            SponsoredKind::Restaurant
        }
    }
}

/// Session-scoped merger. One instance per listing view; dropped or reset
/// when the user changes filters or navigates away.
#[derive(Debug, Clone)]
pub struct FeedMerger {
    cadence: u32,
    counter: u64,
}

impl FeedMerger {
    pub fn new(cadence: u32) -> Result<Self> {
        if cadence == 0 {
            return Err(FeedError::InvalidCadence { cadence });
        }
        Ok(Self {
            cadence,
            counter: 0,
        })
    }

    pub fn cadence(&self) -> u32 {
        self.cadence
    }

    /// Regular items seen so far in this session, carried between
    /// pagination calls.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// True until the first merged item arrives or after a reset.
    pub fn is_fresh(&self) -> bool {
        self.counter == 0
    }

    /// Back to a fresh session. Call on filter change, not between pages.
    pub fn reset(&mut self) {
        if self.counter > 0 {
            debug!(counter = self.counter, "resetting feed session");
        }
        self.counter = 0;
    }

    /// Appends one fetched page to the session, interleaving sponsored
    /// cards. Regular items keep their exact relative order; sponsored ids
    /// derive from the running counter so they are unique for the session
    /// and never collide with store ids.
    pub fn merge<S>(
        &mut self,
        new_items: Vec<RegularItem>,
        context: &DisplayContext,
        selector: &S,
    ) -> Vec<FeedItem>
    where
        S: VariantSelector + ?Sized,
    {
        let batch = new_items.len();
        let mut merged = Vec::with_capacity(batch + batch / self.cadence as usize + 1);

        for item in new_items {
            merged.push(FeedItem::Regular(item));
            self.counter += 1;
            if self.counter % u64::from(self.cadence) == 0 {
                merged.push(FeedItem::Sponsored(SponsoredItem {
                    id: format!("sponsored-{}", self.counter),
                    kind: selector.select(self.counter),
                    region: context.region.clone(),
                    state: context.state.clone(),
                }));
            }
        }

        debug!(batch, counter = self.counter, "merged feed page");
        merged
    }
}
