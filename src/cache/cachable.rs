use std::borrow::Cow;

/// A value that knows the key it is cached under.
///
/// Implement this for types that carry their own identity, such as a record with an id field, to
/// use [`crate::Cache::add`] and [`crate::Cache::remove_item`] instead of passing keys around.
///
/// The key must be derived from the value alone and must not change while the value is stored,
/// otherwise [`crate::Cache::remove_item`] looks in the wrong place.
///
/// ```rust
/// use keyed_cache::Cachable;
/// use std::borrow::Cow;
///
/// struct Artist {
///     id: String,
///     name: String,
/// }
///
/// impl Cachable for Artist {
///     fn cache_key(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.id)
///     }
/// }
/// ```
pub trait Cachable {
    fn cache_key(&self) -> Cow<'_, str>;
}

impl<T> Cachable for std::sync::Arc<T>
where
    T: Cachable + ?Sized,
{
    fn cache_key(&self) -> Cow<'_, str> {
        (**self).cache_key()
    }
}
