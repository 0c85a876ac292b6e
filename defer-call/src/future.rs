use crate::Thunk;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures_core::ready;
use pin_project::pin_project;

/// Future for [`ThunkExt::into_future`](crate::ThunkExt::into_future).
///
/// The thunk is called on the first poll, not before. The future it returns
/// is then driven to completion and its output handed back as is.
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct DeferredFuture<T>
where
    T: Thunk,
    T::Output: Future,
{
    #[pin]
    state: State<T, T::Output>,
}

#[pin_project(project = StateProj)]
enum State<T, F> {
    Init(Option<T>),
    Running(#[pin] F),
    Done,
}

impl<T> DeferredFuture<T>
where
    T: Thunk,
    T::Output: Future,
{
    pub fn new(thunk: T) -> DeferredFuture<T> {
        DeferredFuture {
            state: State::Init(Some(thunk)),
        }
    }
}

impl<T> Future for DeferredFuture<T>
where
    T: Thunk,
    T::Output: Future,
{
    type Output = <T::Output as Future>::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        loop {
            match this.state.as_mut().project() {
                StateProj::Init(thunk) => {
                    let thunk = match thunk.take() {
                        Some(thunk) => thunk,
                        None => panic!("DeferredFuture polled while starting"),
                    };
                    log::trace!("starting deferred future");
                    let fut = thunk.call();
                    this.state.set(State::Running(fut));
                }
                StateProj::Running(fut) => {
                    let out = ready!(fut.poll(cx));
                    this.state.set(State::Done);
                    return Poll::Ready(out);
                }
                StateProj::Done => panic!("DeferredFuture polled after completion"),
            }
        }
    }
}
