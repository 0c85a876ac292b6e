use core::fmt;

/// A zero-argument computation that can be invoked any number of times.
pub trait Thunk {
    type Output;

    fn call(&self) -> Self::Output;
}

impl<T> Thunk for &T
where
    T: Thunk + ?Sized,
{
    type Output = T::Output;

    #[inline]
    fn call(&self) -> Self::Output {
        (**self).call()
    }
}

#[derive(Clone, Copy)]
pub struct ThunkFn<F> {
    f: F,
}

impl<F, R> ThunkFn<F>
where
    F: Fn() -> R,
{
    pub fn new(f: F) -> ThunkFn<F> {
        ThunkFn { f }
    }
}

impl<F> fmt::Debug for ThunkFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThunkFn").finish()
    }
}

impl<F, R> Thunk for ThunkFn<F>
where
    F: Fn() -> R,
{
    type Output = R;

    #[inline]
    fn call(&self) -> Self::Output {
        (self.f)()
    }
}

pub fn thunk_fn<F, R>(f: F) -> ThunkFn<F>
where
    F: Fn() -> R,
{
    ThunkFn::new(f)
}
