//! Feed display logic for the Adonde discovery app
//!
//! The explore and itinerary listing screens fetch pages from the hosted
//! store and post-process them in memory before render. This crate is that
//! post-processing, extracted from the per-screen duplicates:
//! - Sponsored interleaving at a fixed cadence, with the counter carried
//!   across pages so earlier slots never shift as more pages load
//! - Pagination window math and per-session page tracking
//! - Page shuffling behind an injectable random source
//!
//! Fetching, auth, and rendering stay with the callers; everything here is
//! pure and synchronous.

mod error;

pub mod context;
pub mod merger;
pub mod models;
pub mod pagination;
pub mod shuffle;

pub use context::{DisplayContext, Language};
pub use error::{FeedError, Result};
pub use merger::{AlternatingVariant, FeedMerger, VariantSelector};
pub use models::{FeedItem, Page, RegularItem, SponsoredItem, SponsoredKind};
pub use pagination::{FeedSession, PageWindow, DEFAULT_PAGE_SIZE};
pub use shuffle::shuffled;
