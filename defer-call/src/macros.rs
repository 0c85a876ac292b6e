/// Bind arguments to a function without calling it.
///
/// `defer!(f, a, b)` is `defer(f, (a, b))`.
#[macro_export]
macro_rules! defer {
    ($f: expr) => {
        $crate::defer($f, ())
    };
    ($f: expr, $( $arg: expr ),+ $(,)?) => {
        $crate::defer($f, ( $( $arg, )+ ))
    };
}

#[macro_export]
macro_rules! thunk {
    ($f: expr) => {
        $crate::ThunkFn::new($f)
    };
}
