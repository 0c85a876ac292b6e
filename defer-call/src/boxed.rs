use crate::Thunk;
use alloc::boxed::Box;

pub trait DynamicThunk<O>: Thunk<Output = O> + Send + Sync {
    fn box_clone(&self) -> BoxThunk<O>;
}

pub type BoxThunk<O> = Box<dyn DynamicThunk<O>>;

pub fn box_thunk<O, T>(thunk: T) -> BoxThunk<O>
where
    T: Thunk<Output = O> + Clone + Send + Sync + 'static,
{
    Box::new(BoxedThunk(thunk))
}

struct BoxedThunk<T>(T);

impl<T> Thunk for BoxedThunk<T>
where
    T: Thunk,
{
    type Output = T::Output;

    #[inline]
    fn call(&self) -> Self::Output {
        self.0.call()
    }
}

impl<T> DynamicThunk<T::Output> for BoxedThunk<T>
where
    T: Thunk + Clone + Send + Sync + 'static,
{
    fn box_clone(&self) -> BoxThunk<T::Output> {
        box_thunk(self.0.clone())
    }
}

impl<O> Thunk for BoxThunk<O> {
    type Output = O;

    #[inline]
    fn call(&self) -> Self::Output {
        self.as_ref().call()
    }
}

impl<O> Clone for BoxThunk<O> {
    fn clone(&self) -> Self {
        self.as_ref().box_clone()
    }
}
