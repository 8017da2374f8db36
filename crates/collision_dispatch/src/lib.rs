//! # Collision Dispatch
//!
//! A double-dispatch collision handler registry for game simulations.
//!
//! Game entity taxonomies grow over time, and the set of meaningful pairwise
//! interactions is large but sparse. This crate answers "what happens when
//! an entity of unknown type touches another entity of unknown type" with a
//! runtime table: handlers are registered against pairs of type descriptors,
//! and dispatch walks each entity's declared ancestry to find the most
//! specific applicable registration.
//!
//! ## Features
//!
//! - **Pairwise Dispatch**: handlers keyed by (collider type, collidee type)
//! - **Symmetric Registration**: one handler serves both argument orders
//! - **Ancestor Fallback**: breadth-first walk over parent and capability
//!   types finds the nearest registered match
//! - **Open Taxonomy**: callers declare their own type descriptors; new
//!   entity types need no changes here
//!
//! ## Quick Start
//!
//! ```
//! use collision_dispatch::prelude::*;
//! use std::any::Any;
//!
//! static PLAYER: TypeInfo = TypeInfo::new("Player");
//! static PELLET: TypeInfo = TypeInfo::new("Pellet");
//!
//! struct Player;
//! struct Pellet;
//!
//! impl Collidable for Player {
//!     fn type_info(&self) -> &'static TypeInfo { &PLAYER }
//!     fn as_any(&self) -> &dyn Any { self }
//! }
//!
//! impl Collidable for Pellet {
//!     fn type_info(&self) -> &'static TypeInfo { &PELLET }
//!     fn as_any(&self) -> &dyn Any { self }
//! }
//!
//! let mut registry = CollisionRegistry::new();
//! registry.register(&PLAYER, &PELLET, |_: &dyn Collidable, _: &dyn Collidable| {
//!     // score the pickup
//! });
//!
//! // Either side may be the one that moved.
//! registry.collide(&Player, &Pellet);
//! registry.collide(&Pellet, &Player);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod ancestry;
pub mod handler;
pub mod registry;
pub mod type_info;

pub use ancestry::ancestry;
pub use handler::{CollisionHandler, HandlerRef, InverseHandler};
pub use registry::CollisionRegistry;
pub use type_info::{Collidable, TypeInfo, TypeKey};

/// Common imports for registry users
pub mod prelude {
    pub use crate::{Collidable, CollisionHandler, CollisionRegistry, TypeInfo, TypeKey};
}
