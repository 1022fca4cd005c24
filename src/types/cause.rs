//! Shared handle to the error an enriched error wraps.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Type-erased, shareable error used as the cause of a [`HelpfulError`].
///
/// Cloning is cheap and never copies the underlying error: every clone points
/// at the same instance, which [`Cause::ptr_eq`] can confirm. Redacted copies
/// of an error therefore keep the very same cause.
///
/// [`HelpfulError`]: crate::HelpfulError
#[derive(Clone)]
pub struct Cause(Arc<dyn Error + Send + Sync + 'static>);

impl Cause {
    /// Takes ownership of `error`.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Adopts an already boxed error without re-boxing its contents.
    #[inline]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self(Arc::from(error))
    }

    /// Adopts an error that is already shared.
    #[inline]
    pub fn from_arc(error: Arc<dyn Error + Send + Sync + 'static>) -> Self {
        Self(error)
    }

    /// Borrows the cause as a trait object.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0
    }

    /// Attempts to view the cause as a concrete error type.
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Returns `true` when the cause is of type `E`.
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.0.is::<E>()
    }

    /// Returns `true` when both handles point to the same error instance.
    #[inline]
    pub fn ptr_eq(&self, other: &Cause) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for Cause {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_error()
    }
}
