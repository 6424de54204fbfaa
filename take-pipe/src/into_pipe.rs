use crate::Pipe;

/// Anything a mapper given to [`Pipe::then`] can return.
pub trait IntoPipe {
    type Value;

    fn into_pipe(self) -> Pipe<Self::Value>;
}

impl<T> IntoPipe for Option<T> {
    type Value = T;

    fn into_pipe(self) -> Pipe<T> {
        Pipe::from(self)
    }
}

impl<T> IntoPipe for Pipe<T> {
    type Value = T;

    fn into_pipe(self) -> Pipe<T> {
        self
    }
}
