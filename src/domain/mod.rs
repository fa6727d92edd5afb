//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Response shapes and query objects for the resource
//! - `client.rs` — Sub-client with one method per endpoint

pub mod ability;
pub mod constants;
pub mod hero;
pub mod item;
pub mod league;
pub mod matches;
pub mod npc;
pub mod player;
pub mod search;
pub mod user;
