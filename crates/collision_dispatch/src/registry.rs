//! The collision registry: registration and double dispatch
//!
//! Owns a two-level table from (collider type, collidee type) to a handler
//! and resolves the most specific applicable handler for a pair of live
//! entities. "Most specific" is the first entry of each side's breadth-first
//! ancestry sequence that appears as a key in the relevant table, resolved
//! independently for the collider and the collidee.

use crate::ancestry::AncestryCache;
use crate::handler::{CollisionHandler, HandlerRef, InverseHandler};
use crate::type_info::{Collidable, TypeInfo, TypeKey};
use std::collections::HashMap;
use std::rc::Rc;

/// Registry of collision handlers keyed by pairs of entity types.
///
/// Intended use is register-then-dispatch: wiring code fills the table once
/// during setup, after which the simulation loop calls
/// [`CollisionRegistry::collide`] for every detected overlap. Registration
/// is permissive — re-registering a pair silently replaces the previous
/// handler, and a symmetric registration freely overwrites an existing
/// entry for the mirrored pair.
///
/// The registry is single-threaded; wrap it in external synchronization if
/// it must be shared across threads.
#[derive(Default)]
pub struct CollisionRegistry {
    /// Outer key: collider type. Inner key: collidee type.
    handlers: HashMap<TypeKey, HashMap<TypeKey, HandlerRef>>,

    /// Memoized ancestry sequences for types seen at dispatch.
    ancestry: AncestryCache,
}

impl CollisionRegistry {
    /// Create a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            ancestry: AncestryCache::new(),
        }
    }

    /// Register a two-way interaction.
    ///
    /// `handler` is stored for `(collider, collidee)`, and an
    /// argument-swapping wrapper around it is stored for
    /// `(collidee, collider)`, so one implementation serves the collision
    /// regardless of which side moved.
    pub fn register<H>(&mut self, collider: &'static TypeInfo, collidee: &'static TypeInfo, handler: H)
    where
        H: CollisionHandler + 'static,
    {
        let handler: HandlerRef = Rc::new(handler);
        self.add_handler(collider, collidee, Rc::clone(&handler));
        self.add_handler(collidee, collider, Rc::new(InverseHandler::new(handler)));
    }

    /// Register a one-way interaction for `(collider, collidee)` only.
    ///
    /// The mirrored pair is left untouched; a collision detected with the
    /// sides swapped resolves to no handler unless registered separately.
    pub fn register_directed<H>(
        &mut self,
        collider: &'static TypeInfo,
        collidee: &'static TypeInfo,
        handler: H,
    ) where
        H: CollisionHandler + 'static,
    {
        self.add_handler(collider, collidee, Rc::new(handler));
    }

    fn add_handler(
        &mut self,
        collider: &'static TypeInfo,
        collidee: &'static TypeInfo,
        handler: HandlerRef,
    ) {
        log::debug!(
            "Registering collision handler: {} vs {}",
            collider.name(),
            collidee.name()
        );
        self.handlers
            .entry(TypeKey::new(collider))
            .or_default()
            .insert(TypeKey::new(collidee), handler);
    }

    /// Dispatch a collision between two live entities.
    ///
    /// Resolves the most specific registered handler for the pair's runtime
    /// types and invokes it synchronously with `(collider, collidee)` in
    /// that order. A pair with no applicable registration is a no-op, not an
    /// error: most type pairs in a game have no defined interaction.
    pub fn collide(&self, collider: &dyn Collidable, collidee: &dyn Collidable) {
        match self.find_handler(collider, collidee) {
            Some(handler) => {
                log::trace!(
                    "Dispatching collision: {} vs {}",
                    collider.type_info().name(),
                    collidee.type_info().name()
                );
                handler.handle(collider, collidee);
            }
            None => {
                log::trace!(
                    "No collision handler for {} vs {}",
                    collider.type_info().name(),
                    collidee.type_info().name()
                );
            }
        }
    }

    /// Resolve the most specific handler for two live entities, if any.
    ///
    /// The collider's ancestry is walked first to pick the outer key; the
    /// collidee's ancestry is then walked against that key's inner table.
    /// The two walks are independent, so a near-miss on one side never
    /// shadows an exact match on the other.
    #[must_use]
    pub fn find_handler(
        &self,
        collider: &dyn Collidable,
        collidee: &dyn Collidable,
    ) -> Option<HandlerRef> {
        let collider_key = self.most_specific_key(&self.handlers, collider.type_info())?;
        let inner = &self.handlers[&collider_key];
        let collidee_key = self.most_specific_key(inner, collidee.type_info())?;
        Some(Rc::clone(&inner[&collidee_key]))
    }

    /// First entry of `ty`'s ancestry sequence present as a key in `table`.
    fn most_specific_key<V>(
        &self,
        table: &HashMap<TypeKey, V>,
        ty: &'static TypeInfo,
    ) -> Option<TypeKey> {
        self.ancestry
            .of(ty)
            .iter()
            .copied()
            .find(|key| table.contains_key(key))
    }

    /// Whether any handler is registered with `collider` as the outer key.
    #[must_use]
    pub fn has_collider_type(&self, collider: &'static TypeInfo) -> bool {
        self.handlers.contains_key(&TypeKey::new(collider))
    }

    /// Number of registered (collider, collidee) pairs, counting synthesized
    /// inverse entries.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.handlers.values().map(HashMap::len).sum()
    }

    /// Whether the registry has no registrations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
