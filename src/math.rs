/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
/// Iteration yields the elements in the order in which they were inserted.
pub type OrderedSet<S> = indexmap::IndexSet<S, fxhash::FxBuildHasher>;
/// Type alias for maps, which are insertion-ordered just like [`OrderedSet`].
pub type OrderedMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;
