//! Entity type descriptors and the collidable entity trait
//!
//! The registry never inspects concrete Rust types directly. Instead, every
//! entity type in the game's universe is described by a `static` [`TypeInfo`]
//! declaring its name, its parent type, and the capability types it
//! implements. Live entities report which descriptor they belong to through
//! [`Collidable::type_info`], which lets a single Rust struct stand in for
//! several game types (e.g. one `Ghost` struct covering every ghost
//! personality).

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

/// Static descriptor for one entity type in the collision universe.
///
/// Declare one `static` per game type and wire the hierarchy through
/// references:
///
/// ```
/// use collision_dispatch::TypeInfo;
///
/// static ACTOR: TypeInfo = TypeInfo::new("Actor");
/// static EDIBLE: TypeInfo = TypeInfo::new("Edible");
/// static PELLET: TypeInfo = TypeInfo::new("Pellet")
///     .with_parent(&ACTOR)
///     .with_capabilities(&[&EDIBLE]);
/// ```
///
/// Identity is the address of the `static`; two descriptors are the same
/// type if and only if they are the same `static` item. The declared graph
/// (parent and capability edges) must be acyclic.
pub struct TypeInfo {
    name: &'static str,
    parent: Option<&'static TypeInfo>,
    capabilities: &'static [&'static TypeInfo],
}

impl TypeInfo {
    /// Create a root descriptor with no parent and no capabilities.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            parent: None,
            capabilities: &[],
        }
    }

    /// Set the direct parent type.
    #[must_use]
    pub const fn with_parent(mut self, parent: &'static TypeInfo) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the directly implemented capability types, in declaration order.
    ///
    /// Declaration order matters: it is the discovery order of the ancestry
    /// walk, which breaks ties between otherwise unrelated capabilities.
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: &'static [&'static TypeInfo]) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Human-readable type name, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The direct parent type, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&'static TypeInfo> {
        self.parent
    }

    /// The directly implemented capability types.
    #[must_use]
    pub const fn capabilities(&self) -> &'static [&'static TypeInfo] {
        self.capabilities
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("parent", &self.parent.map(TypeInfo::name))
            .field(
                "capabilities",
                &self.capabilities.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Opaque, comparable token for a [`TypeInfo`].
///
/// Equality and hashing are by descriptor address, which is stable for the
/// lifetime of the program since descriptors are `static` items. This is the
/// key type of the registry's lookup tables.
#[derive(Clone, Copy)]
pub struct TypeKey(&'static TypeInfo);

impl TypeKey {
    /// Wrap a descriptor reference.
    #[must_use]
    pub const fn new(info: &'static TypeInfo) -> Self {
        Self(info)
    }

    /// The underlying descriptor.
    #[must_use]
    pub const fn info(self) -> &'static TypeInfo {
        self.0
    }

    /// The descriptor's name, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0.name()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.0, other.0)
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.0, state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.0.name())
    }
}

impl From<&'static TypeInfo> for TypeKey {
    fn from(info: &'static TypeInfo) -> Self {
        Self::new(info)
    }
}

/// A live entity that can take part in collisions.
///
/// Implementations report the descriptor of their runtime type; the
/// descriptor may be chosen per instance (e.g. from an enum field) so one
/// struct can represent several game types. [`Collidable::as_any`] lets
/// handlers recover the concrete struct once the registry has resolved a
/// match.
pub trait Collidable: Any {
    /// The descriptor of this entity's runtime type.
    fn type_info(&self) -> &'static TypeInfo;

    /// Upcast for handler-side downcasting to the concrete entity struct.
    fn as_any(&self) -> &dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    static ROOT: TypeInfo = TypeInfo::new("Root");
    static LEAF: TypeInfo = TypeInfo::new("Leaf").with_parent(&ROOT);

    #[test]
    fn keys_compare_by_descriptor_identity() {
        assert_eq!(TypeKey::new(&ROOT), TypeKey::new(&ROOT));
        assert_ne!(TypeKey::new(&ROOT), TypeKey::new(&LEAF));
    }

    #[test]
    fn keys_are_stable_map_keys() {
        let mut map = HashMap::new();
        map.insert(TypeKey::new(&LEAF), 7);
        assert_eq!(map.get(&TypeKey::new(&LEAF)), Some(&7));
        assert_eq!(map.get(&TypeKey::new(&ROOT)), None);
    }

    #[test]
    fn descriptor_edges_are_visible() {
        assert_eq!(LEAF.parent().map(TypeInfo::name), Some("Root"));
        assert!(LEAF.capabilities().is_empty());
    }
}
