//! Collision handler trait and the synthesized inverse wrapper

use crate::type_info::Collidable;
use std::rc::Rc;

/// Handles the interaction between two colliding entities.
///
/// The registry invokes the handler with the collider (the entity that
/// moved) first and the collidee (the entity that was moved into) second.
/// Handlers recover concrete entity structs through
/// [`Collidable::as_any`] when they need more than the trait surface.
///
/// Plain closures over two `&dyn Collidable` arguments implement this trait
/// directly, so most registrations can be written inline:
///
/// ```
/// use collision_dispatch::{Collidable, CollisionHandler};
///
/// let handler = |collider: &dyn Collidable, collidee: &dyn Collidable| {
///     log::debug!(
///         "{} ran into {}",
///         collider.type_info().name(),
///         collidee.type_info().name()
///     );
/// };
/// fn assert_handler(_: &impl CollisionHandler) {}
/// assert_handler(&handler);
/// ```
pub trait CollisionHandler {
    /// Perform the effect of `collider` colliding with `collidee`.
    fn handle(&self, collider: &dyn Collidable, collidee: &dyn Collidable);
}

impl<F> CollisionHandler for F
where
    F: Fn(&dyn Collidable, &dyn Collidable),
{
    fn handle(&self, collider: &dyn Collidable, collidee: &dyn Collidable) {
        self(collider, collidee);
    }
}

/// Shared handle to a registered handler.
///
/// Symmetric registration lists the same underlying handler under both
/// `(A, B)` and, wrapped in [`InverseHandler`], `(B, A)`; the table entries
/// each hold their own handle to it.
pub type HandlerRef = Rc<dyn CollisionHandler>;

/// Argument-swapping wrapper for the mirrored side of a symmetric
/// registration.
///
/// A handler registered for `(A, B)` and listed under `(B, A)` still expects
/// its arguments in `(A, B)` order; this wrapper restores that order before
/// delegating.
pub struct InverseHandler {
    delegate: HandlerRef,
}

impl InverseHandler {
    /// Wrap `delegate` so its argument order is preserved when invoked from
    /// the mirrored key pair.
    #[must_use]
    pub fn new(delegate: HandlerRef) -> Self {
        Self { delegate }
    }
}

impl CollisionHandler for InverseHandler {
    fn handle(&self, collider: &dyn Collidable, collidee: &dyn Collidable) {
        self.delegate.handle(collidee, collider);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_info::TypeInfo;
    use std::any::Any;
    use std::cell::RefCell;

    static FIRST: TypeInfo = TypeInfo::new("First");
    static SECOND: TypeInfo = TypeInfo::new("Second");

    struct Tagged(&'static TypeInfo);

    impl Collidable for Tagged {
        fn type_info(&self) -> &'static TypeInfo {
            self.0
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn inverse_swaps_arguments_back() {
        let seen: Rc<RefCell<Vec<(&'static str, &'static str)>>> =
            Rc::new(RefCell::new(Vec::new()));
        let inner = Rc::clone(&seen);
        let handler: HandlerRef = Rc::new(move |a: &dyn Collidable, b: &dyn Collidable| {
            inner
                .borrow_mut()
                .push((a.type_info().name(), b.type_info().name()));
        });

        let inverse = InverseHandler::new(Rc::clone(&handler));
        // Invoked as (Second, First), the delegate must still see (First, Second).
        inverse.handle(&Tagged(&SECOND), &Tagged(&FIRST));

        assert_eq!(seen.borrow().as_slice(), &[("First", "Second")]);
    }
}
