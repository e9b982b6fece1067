//! Entity model: wire payloads, normalized records, links, and merge rules.

pub mod entities;
pub mod links;
pub mod merge;
pub mod raw;
pub mod region;

pub use entities::{
    ArtistInvite, ArtistInviteSubmission, Asset, Category, CategoryPost, Comment, Editorial,
    PageHeader, Post, User,
};
pub use links::{EntityKind, Link};
pub use merge::Merge;
pub use region::{Region, RegionKind};
