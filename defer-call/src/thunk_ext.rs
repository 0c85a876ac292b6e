#[cfg(feature = "alloc")]
use super::boxed::{box_thunk, BoxThunk};
use super::{DeferredFuture, Thunk};
use core::future::Future;

pub trait ThunkExt: Thunk + Sized {
    /// A future that calls the thunk on first poll and resolves to the
    /// output of the future it returned.
    fn into_future(self) -> DeferredFuture<Self>
    where
        Self::Output: Future,
    {
        DeferredFuture::new(self)
    }

    #[cfg(feature = "alloc")]
    fn boxed(self) -> BoxThunk<Self::Output>
    where
        Self: Clone + Sync + Send + 'static,
    {
        box_thunk(self)
    }
}

impl<T> ThunkExt for T where T: Thunk {}

/// Turn a thunk into a plain zero-argument closure.
pub fn into_fn<T>(thunk: T) -> impl Fn() -> T::Output
where
    T: Thunk,
{
    move || thunk.call()
}
