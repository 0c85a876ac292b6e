//! Bind a function to its arguments now, call it later.
//!
//! [`defer`] captures a function and a tuple of arguments and returns a
//! [`Deferred`]. Nothing runs until [`Deferred::call`], which invokes the
//! function with the captured arguments and returns its result untouched.
//! For async functions that result is the function's own future.
//!
//! ```
//! use defer_call::defer;
//!
//! async fn identity(value: u32) -> u32 {
//!     value
//! }
//!
//! let deferred = defer(identity, (42,));
//! assert_eq!(futures::executor::block_on(deferred.call()), 42);
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::all)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod macros;

#[cfg(feature = "alloc")]
mod boxed;
mod deferred;
mod future;
mod generic;
mod thunk;
mod thunk_ext;

#[cfg(feature = "alloc")]
pub use self::boxed::*;
pub use self::{deferred::*, future::*, generic::*, thunk::*, thunk_ext::*};
