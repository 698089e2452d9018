use std::fmt;
use std::marker::PhantomData;

/// A builder over `T` whose construction progress is the type parameter `S`.
///
/// `S` is a zero-sized stage marker. Every entity module defines its own
/// markers and implements the legal operations for each stage on
/// `Staged<Entity, Marker>`; an operation consumes the builder and returns it
/// re-tagged with the next marker, so earlier stages' methods are gone.
pub struct Staged<T, S> {
    target: T,
    _stage: PhantomData<fn() -> S>,
}

impl<T, S> Staged<T, S> {
    pub(crate) fn start(target: T) -> Self {
        Self {
            target,
            _stage: PhantomData,
        }
    }

    /// Apply `f` to the object under construction and move to stage `N`.
    pub(crate) fn step<N>(mut self, f: impl FnOnce(&mut T)) -> Staged<T, N> {
        f(&mut self.target);
        Staged {
            target: self.target,
            _stage: PhantomData,
        }
    }

    /// Apply `f` without changing stage. Used by optional setters.
    pub(crate) fn set(mut self, f: impl FnOnce(&mut T)) -> Self {
        f(&mut self.target);
        self
    }

    pub(crate) fn into_target(self) -> T {
        self.target
    }

    /// Read access to the object under construction.
    pub fn peek(&self) -> &T {
        &self.target
    }
}

impl<T: fmt::Debug, S> fmt::Debug for Staged<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Staged")
            .field("stage", &std::any::type_name::<S>())
            .field("target", &self.target)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ready;

    #[derive(Debug, Default)]
    struct Counter {
        hits: u32,
    }

    #[test]
    fn test_step_and_set_mutate_target() {
        let staged: Staged<Counter, ()> = Staged::start(Counter::default());
        let staged: Staged<Counter, Ready> = staged.step(|c| c.hits += 1);
        let staged = staged.set(|c| c.hits += 10);
        assert_eq!(staged.peek().hits, 11);
        assert_eq!(staged.into_target().hits, 11);
    }

    #[test]
    fn test_debug_names_stage() {
        let staged: Staged<Counter, Ready> = Staged::start(Counter::default());
        let text = format!("{:?}", staged);
        assert!(text.contains("Ready"));
        assert!(text.contains("hits: 0"));
    }
}
