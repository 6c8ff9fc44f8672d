//! Special-effect system.
//!
//! - `SpecialEffect`: the closed tag set declared by catalog entries
//! - `ResolutionPoint`: when a tag fires (build time or host time)
//! - `EffectResolver`: pure mapping from tag + context to a side effect
//!
//! The resolver never touches game state. Build-time tags become entries
//! in the player's per-store-type bonus map; host-time tags become a
//! `HostPayout` the player account applies.

mod effect;
mod resolver;

pub use effect::{ResolutionPoint, SpecialEffect};
pub use resolver::{EffectResolver, HostContext, HostPayout, EXTRA_DISH_DRAWS};
