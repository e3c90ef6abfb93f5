//! # Function-backed slot (`SlotFn`)
//!
//! [`SlotFn`] wraps a closure `F: Fn(A) -> Fut`, producing a fresh future per
//! invocation. This avoids shared mutable state between dispatch passes; if a
//! slot needs state, move an `Arc<...>` into the closure explicitly.
//!
//! ## Example
//! ```rust
//! use signalcast::{SlotError, SlotFn, SlotRef};
//!
//! let double: SlotRef<(i32,), i32> = SlotFn::arc("double", |(x,): (i32,)| async move {
//!     Ok::<_, SlotError>(x * 2)
//! });
//!
//! assert_eq!(double.name(), "double");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SlotError;
use crate::slots::slot::Slot;

/// Shared slot handle (`Arc<dyn Slot>`).
pub type SlotRef<A, R> = Arc<dyn Slot<A, R>>;

/// Function-backed slot implementation.
///
/// Wraps a closure that *creates* a new future per invocation.
#[derive(Debug)]
pub struct SlotFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SlotFn<F> {
    /// Creates a new function-backed slot.
    ///
    /// Prefer [`SlotFn::arc`] when you immediately need a [`SlotRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the slot and returns it as a shared handle (`Arc<Self>`).
    ///
    /// ## Example
    /// ```rust
    /// use signalcast::{SlotError, SlotFn, SlotRef};
    ///
    /// let hello: SlotRef<(), ()> = SlotFn::arc("hello", |_: ()| async {
    ///     Ok::<_, SlotError>(())
    /// });
    /// assert_eq!(hello.name(), "hello");
    /// ```
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<A, R, F, Fut> Slot<A, R> for SlotFn<F>
where
    A: Send + 'static,
    R: Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<R, SlotError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn call(&self, args: A) -> Result<R, SlotError> {
        (self.f)(args).await
    }
}
