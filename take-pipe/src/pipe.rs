use std::fmt::Debug;

use take_inspect::{Entry, Sink, Stdout};

use crate::IntoPipe;

/// A value that may not be there, and the transformations applied to it.
///
/// Every step consumes the pipe and produces a new one. Once a pipe holds
/// [`Pipe::Nothing`] no further step runs its mapper.
///
/// ```
/// # use take_pipe::*;
/// let greeting = take("foo")
///     .through(|s| s.to_uppercase())
///     .through(|s| format!("Hello, {s}"))
///     .get();
///
/// assert_eq!(greeting.as_deref(), Some("Hello, FOO"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pipe<T> {
    Something(T),
    #[default]
    Nothing,
}

impl<T> Pipe<T> {
    pub const fn is_something(&self) -> bool {
        matches!(self, Self::Something(_))
    }

    pub const fn is_nothing(&self) -> bool {
        !self.is_something()
    }

    /// Apply a mapper that always produces a value.
    /// The mapper is not called if the pipe holds nothing.
    pub fn through<F, U>(self, mapper: F) -> Pipe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Something(value) => Pipe::Something(mapper(value)),
            Self::Nothing => Pipe::Nothing,
        }
    }

    /// Apply a mapper that may produce nothing, e.g. by returning `None`.
    /// The mapper is not called if the pipe holds nothing.
    ///
    /// ```
    /// # use take_pipe::*;
    /// let first = take(vec![1, 2]).then(|v| v.first().copied());
    /// assert_eq!(first, Pipe::Something(1));
    ///
    /// let first = take(Vec::<u8>::new()).then(|v| v.first().copied());
    /// assert!(first.is_nothing());
    /// ```
    pub fn then<F, R>(self, mapper: F) -> Pipe<R::Value>
    where
        F: FnOnce(T) -> R,
        R: IntoPipe,
    {
        match self {
            Self::Something(value) => mapper(value).into_pipe(),
            Self::Nothing => Pipe::Nothing,
        }
    }

    /// End the pipeline with the value, or `fallback` if it holds nothing.
    ///
    /// The fallback can be of any type the value converts into:
    ///
    /// ```
    /// # use take_pipe::*;
    /// let name: String = take("foo").with_default(String::from("bar"));
    /// assert_eq!(name, "foo");
    /// ```
    pub fn with_default<U>(self, fallback: U) -> U
    where
        T: Into<U>,
    {
        match self {
            Self::Something(value) => value.into(),
            Self::Nothing => fallback,
        }
    }

    /// Same as [`Pipe::with_default`] but the fallback is only produced
    /// if the pipe holds nothing.
    pub fn with_default_else<F, U>(self, fallback: F) -> U
    where
        T: Into<U>,
        F: FnOnce() -> U,
    {
        match self {
            Self::Something(value) => value.into(),
            Self::Nothing => fallback(),
        }
    }

    /// End the pipeline, returning `None` if it holds nothing.
    pub fn get(self) -> Option<T> {
        match self {
            Self::Something(value) => Some(value),
            Self::Nothing => None,
        }
    }

    pub const fn get_ref(&self) -> Option<&T> {
        match self {
            Self::Something(value) => Some(value),
            Self::Nothing => None,
        }
    }

    pub const fn as_ref(&self) -> Pipe<&T> {
        match self {
            Self::Something(value) => Pipe::Something(value),
            Self::Nothing => Pipe::Nothing,
        }
    }
}

impl<T: Debug> Pipe<T> {
    /// Print the value to stdout and pass the pipe on untouched.
    pub fn inspect(self) -> Self {
        self.inspect_into(&mut Stdout::new(), None)
    }

    /// Same as [`Pipe::inspect`] with the value prefixed by `label`.
    pub fn inspect_labeled(self, label: &str) -> Self {
        self.inspect_into(&mut Stdout::new(), Some(label))
    }

    /// Emit the value to `sink` and pass the pipe on untouched.
    /// A failing sink is logged and otherwise ignored.
    pub fn inspect_into<S>(self, sink: &mut S, label: Option<&str>) -> Self
    where
        S: Sink + ?Sized,
    {
        let value = self.get_ref().map(|value| value as &dyn Debug);
        if let Err(err) = sink.emit(Entry::new(label, value)) {
            log::warn!("inspect: {err}");
        }
        self
    }
}

impl<T> From<Option<T>> for Pipe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Something(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Pipe<T>> for Option<T> {
    fn from(pipe: Pipe<T>) -> Self {
        pipe.get()
    }
}
