use crate::{Func, Thunk};
use core::fmt;

/// A function bound to a fixed argument tuple, called only when asked.
///
/// Building a `Deferred` never runs the function. Every [`call`](Deferred::call)
/// runs it again with a clone of the captured arguments and hands back whatever
/// it returned: a value, a `Result`, or a future that has not been polled yet.
///
/// ```
/// use defer_call::defer;
///
/// fn sum(a: i32, b: i32) -> i32 {
///     a + b
/// }
///
/// let deferred = defer(sum, (2, 3));
/// assert_eq!(deferred.call(), 5);
/// ```
#[derive(Clone, Copy)]
pub struct Deferred<F, Args> {
    f: F,
    args: Args,
}

impl<F, Args> Deferred<F, Args>
where
    F: Func<Args>,
{
    pub fn new(f: F, args: Args) -> Deferred<F, Args> {
        Deferred { f, args }
    }
}

impl<F, Args> Deferred<F, Args> {
    pub fn args(&self) -> &Args {
        &self.args
    }

    pub fn into_inner(self) -> (F, Args) {
        (self.f, self.args)
    }
}

impl<F, Args> Deferred<F, Args>
where
    F: Func<Args>,
{
    /// Call the function once, moving the captured arguments into it.
    #[inline]
    pub fn call_once(self) -> F::Output {
        self.f.call(self.args)
    }
}

impl<F, Args> Deferred<F, Args>
where
    F: Func<Args>,
    Args: Clone,
{
    #[inline]
    pub fn call(&self) -> F::Output {
        self.f.call(self.args.clone())
    }
}

impl<F, Args> Thunk for Deferred<F, Args>
where
    F: Func<Args>,
    Args: Clone,
{
    type Output = F::Output;

    #[inline]
    fn call(&self) -> Self::Output {
        Deferred::call(self)
    }
}

impl<F, Args> fmt::Debug for Deferred<F, Args>
where
    Args: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("f", &format_args!("{}", core::any::type_name::<F>()))
            .field("args", &self.args)
            .finish()
    }
}

/// Bind `args` to `f` without calling it.
pub fn defer<F, Args>(f: F, args: Args) -> Deferred<F, Args>
where
    F: Func<Args>,
{
    Deferred::new(f, args)
}
