//! Breadth-first ancestry walk over the declared type graph
//!
//! Resolution needs, for each side of a collision, the sequence "this type,
//! then everything it is-a or implements, nearest first". The walk here is a
//! queue-based breadth-first traversal over the `parent` and `capabilities`
//! edges of [`TypeInfo`] descriptors, seeded at the concrete runtime type.
//!
//! The sequence is deliberately *not* deduplicated: on diamond-shaped graphs
//! the same ancestor can appear more than once. Lookups short-circuit on the
//! first entry found in a table, so only the first occurrence ever matters,
//! and skipping deduplication keeps the walk a straight queue scan.

use crate::type_info::{TypeInfo, TypeKey};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Compute the ancestry sequence of a type, nearest first.
///
/// Position 0 is always the type itself. Each entry is processed in
/// insertion order, appending its parent (if any) and then its capability
/// types in declaration order. Terminates for any acyclic declaration graph.
#[must_use]
pub fn ancestry(ty: &'static TypeInfo) -> Vec<TypeKey> {
    let mut chain = vec![TypeKey::new(ty)];

    let mut current = 0;
    while current < chain.len() {
        let info = chain[current].info();
        if let Some(parent) = info.parent() {
            chain.push(TypeKey::new(parent));
        }
        for capability in info.capabilities() {
            chain.push(TypeKey::new(capability));
        }
        current += 1;
    }

    chain
}

/// Memoized ancestry sequences, one per concrete type seen at dispatch.
///
/// The declared type graph is immutable for the life of the program, so the
/// walk for a given type is computed once and shared thereafter. Interior
/// mutability keeps lookups usable from `&self` dispatch paths; the cache is
/// single-threaded by design, like the registry that owns it.
#[derive(Default)]
pub(crate) struct AncestryCache {
    cached: RefCell<HashMap<TypeKey, Rc<[TypeKey]>>>,
}

impl AncestryCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The ancestry sequence for `ty`, computing and caching it on first use.
    pub(crate) fn of(&self, ty: &'static TypeInfo) -> Rc<[TypeKey]> {
        let key = TypeKey::new(ty);
        if let Some(chain) = self.cached.borrow().get(&key) {
            return Rc::clone(chain);
        }

        let chain: Rc<[TypeKey]> = ancestry(ty).into();
        self.cached.borrow_mut().insert(key, Rc::clone(&chain));
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static GRANDPARENT: TypeInfo = TypeInfo::new("Grandparent");
    static PARENT: TypeInfo = TypeInfo::new("Parent").with_parent(&GRANDPARENT);
    static TRAIT_A: TypeInfo = TypeInfo::new("TraitA");
    static TRAIT_B: TypeInfo = TypeInfo::new("TraitB");
    static CHILD: TypeInfo = TypeInfo::new("Child")
        .with_parent(&PARENT)
        .with_capabilities(&[&TRAIT_A, &TRAIT_B]);

    // Diamond: both capabilities extend the same base capability.
    static SHARED: TypeInfo = TypeInfo::new("Shared");
    static LEFT: TypeInfo = TypeInfo::new("Left").with_parent(&SHARED);
    static RIGHT: TypeInfo = TypeInfo::new("Right").with_parent(&SHARED);
    static DIAMOND: TypeInfo = TypeInfo::new("Diamond").with_capabilities(&[&LEFT, &RIGHT]);

    fn names(chain: &[TypeKey]) -> Vec<&'static str> {
        chain.iter().map(|k| k.name()).collect()
    }

    #[test]
    fn self_is_always_first() {
        let chain = ancestry(&CHILD);
        assert_eq!(chain[0], TypeKey::new(&CHILD));
    }

    #[test]
    fn breadth_first_parent_before_capabilities() {
        let chain = ancestry(&CHILD);
        assert_eq!(
            names(&chain),
            vec!["Child", "Parent", "TraitA", "TraitB", "Grandparent"]
        );
    }

    #[test]
    fn diamond_ancestors_are_not_deduplicated() {
        let chain = ancestry(&DIAMOND);
        assert_eq!(
            names(&chain),
            vec!["Diamond", "Left", "Right", "Shared", "Shared"]
        );
    }

    #[test]
    fn root_type_is_just_itself() {
        let chain = ancestry(&GRANDPARENT);
        assert_eq!(names(&chain), vec!["Grandparent"]);
    }

    #[test]
    fn cache_returns_the_same_sequence() {
        let cache = AncestryCache::new();
        let first = cache.of(&CHILD);
        let second = cache.of(&CHILD);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(names(&first), names(&ancestry(&CHILD)));
    }
}
