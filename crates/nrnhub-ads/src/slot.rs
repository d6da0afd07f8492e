//! The ad slot catalog.
//!
//! Placement positions form a closed set. The wire names (`navbar`,
//! `blogsFirst`, `economyAds1`, ...) are shared with the stored document
//! and the management console and must not change.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

/// A named placement position for an advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AdSlot {
    Mobile,
    Right1,
    Right2,
    Right3,
    Right4,
    Right5,
    Left1,
    Left2,
    Left3,
    Left4,
    Left5,
    Bottom,
    Navbar,
    Hero,
    BlogsFirst,
    BlogsSecond,
    BlogsThird,
    BlogsFourth,
    BlogsFifth,
    BlogsHome1,
    BlogsHome2,
    BlogsHome3,
    EconomyAds1,
    EconomyAds2,
    Lifestyle1,
    Lifestyle2,
}

impl AdSlot {
    /// Every slot, in display order.
    pub const ALL: [AdSlot; 26] = [
        AdSlot::Mobile,
        AdSlot::Right1,
        AdSlot::Right2,
        AdSlot::Right3,
        AdSlot::Right4,
        AdSlot::Right5,
        AdSlot::Left1,
        AdSlot::Left2,
        AdSlot::Left3,
        AdSlot::Left4,
        AdSlot::Left5,
        AdSlot::Bottom,
        AdSlot::Navbar,
        AdSlot::Hero,
        AdSlot::BlogsFirst,
        AdSlot::BlogsSecond,
        AdSlot::BlogsThird,
        AdSlot::BlogsFourth,
        AdSlot::BlogsFifth,
        AdSlot::BlogsHome1,
        AdSlot::BlogsHome2,
        AdSlot::BlogsHome3,
        AdSlot::EconomyAds1,
        AdSlot::EconomyAds2,
        AdSlot::Lifestyle1,
        AdSlot::Lifestyle2,
    ];

    /// The left sidebar rail, top to bottom.
    pub const LEFT_RAIL: [AdSlot; 5] = [
        AdSlot::Left1,
        AdSlot::Left2,
        AdSlot::Left3,
        AdSlot::Left4,
        AdSlot::Left5,
    ];

    /// The right sidebar rail, top to bottom.
    pub const RIGHT_RAIL: [AdSlot; 5] = [
        AdSlot::Right1,
        AdSlot::Right2,
        AdSlot::Right3,
        AdSlot::Right4,
        AdSlot::Right5,
    ];

    /// In-feed slots on blog detail pages.
    pub const BLOG_FEED: [AdSlot; 5] = [
        AdSlot::BlogsFirst,
        AdSlot::BlogsSecond,
        AdSlot::BlogsThird,
        AdSlot::BlogsFourth,
        AdSlot::BlogsFifth,
    ];

    /// In-feed slots on the home page blog grid.
    pub const BLOG_HOME: [AdSlot; 3] = [AdSlot::BlogsHome1, AdSlot::BlogsHome2, AdSlot::BlogsHome3];

    /// Get the wire name of this slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdSlot::Mobile => "mobile",
            AdSlot::Right1 => "right1",
            AdSlot::Right2 => "right2",
            AdSlot::Right3 => "right3",
            AdSlot::Right4 => "right4",
            AdSlot::Right5 => "right5",
            AdSlot::Left1 => "left1",
            AdSlot::Left2 => "left2",
            AdSlot::Left3 => "left3",
            AdSlot::Left4 => "left4",
            AdSlot::Left5 => "left5",
            AdSlot::Bottom => "bottom",
            AdSlot::Navbar => "navbar",
            AdSlot::Hero => "hero",
            AdSlot::BlogsFirst => "blogsFirst",
            AdSlot::BlogsSecond => "blogsSecond",
            AdSlot::BlogsThird => "blogsThird",
            AdSlot::BlogsFourth => "blogsFourth",
            AdSlot::BlogsFifth => "blogsFifth",
            AdSlot::BlogsHome1 => "blogsHome1",
            AdSlot::BlogsHome2 => "blogsHome2",
            AdSlot::BlogsHome3 => "blogsHome3",
            AdSlot::EconomyAds1 => "economyAds1",
            AdSlot::EconomyAds2 => "economyAds2",
            AdSlot::Lifestyle1 => "lifestyle1",
            AdSlot::Lifestyle2 => "lifestyle2",
        }
    }

    /// Parse a wire name. Returns `None` for anything outside the catalog.
    pub fn from_str(s: &str) -> Option<Self> {
        AdSlot::ALL.iter().copied().find(|slot| slot.as_str() == s)
    }

    /// Human-readable label for the management console.
    pub fn label(&self) -> &'static str {
        match self {
            AdSlot::Mobile => "Mobile banner",
            AdSlot::Right1 => "Right rail 1",
            AdSlot::Right2 => "Right rail 2",
            AdSlot::Right3 => "Right rail 3",
            AdSlot::Right4 => "Right rail 4",
            AdSlot::Right5 => "Right rail 5",
            AdSlot::Left1 => "Left rail 1",
            AdSlot::Left2 => "Left rail 2",
            AdSlot::Left3 => "Left rail 3",
            AdSlot::Left4 => "Left rail 4",
            AdSlot::Left5 => "Left rail 5",
            AdSlot::Bottom => "Bottom banner",
            AdSlot::Navbar => "Navbar strip",
            AdSlot::Hero => "Hero leaderboard",
            AdSlot::BlogsFirst => "Blog feed 1",
            AdSlot::BlogsSecond => "Blog feed 2",
            AdSlot::BlogsThird => "Blog feed 3",
            AdSlot::BlogsFourth => "Blog feed 4",
            AdSlot::BlogsFifth => "Blog feed 5",
            AdSlot::BlogsHome1 => "Home grid 1",
            AdSlot::BlogsHome2 => "Home grid 2",
            AdSlot::BlogsHome3 => "Home grid 3",
            AdSlot::EconomyAds1 => "Economy section 1",
            AdSlot::EconomyAds2 => "Economy section 2",
            AdSlot::Lifestyle1 => "Lifestyle section 1",
            AdSlot::Lifestyle2 => "Lifestyle section 2",
        }
    }
}

impl fmt::Display for AdSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Slots serialize as their wire names so they can key JSON objects.
impl Serialize for AdSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AdSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SlotVisitor;

        impl<'de> Visitor<'de> for SlotVisitor {
            type Value = AdSlot;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a known ad slot name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<AdSlot, E> {
                AdSlot::from_str(v).ok_or_else(|| E::custom(format!("unknown ad slot: {}", v)))
            }
        }

        deserializer.deserialize_str(SlotVisitor)
    }
}

/// A pair of slots toggled together from the management console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotGroup {
    /// The economy section pair.
    Economy,
    /// The lifestyle section pair.
    Lifestyle,
}

impl SlotGroup {
    /// The slots in this group.
    pub fn slots(&self) -> [AdSlot; 2] {
        match self {
            SlotGroup::Economy => [AdSlot::EconomyAds1, AdSlot::EconomyAds2],
            SlotGroup::Lifestyle => [AdSlot::Lifestyle1, AdSlot::Lifestyle2],
        }
    }

    /// Group name for the console.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotGroup::Economy => "economy",
            SlotGroup::Lifestyle => "lifestyle",
        }
    }
}
