//! Entity trait: identity that survives state changes.

/// An object defined by its identity rather than its attributes.
///
/// Repositories are keyed by [`Entity::Id`].
pub trait Entity: Send + Sync {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display + Send + Sync;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Name used in log lines and not-found errors.
    fn entity_name() -> &'static str;
}
