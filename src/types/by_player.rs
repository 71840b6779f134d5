use super::game_state::Side;
use std::ops::{Index, IndexMut};

/// A pair of values, one per side, stored as `(White, Black)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByPlayer<T>(pub T, pub T);

impl<T> From<(T, T)> for ByPlayer<T> {
    #[inline]
    fn from((a, b): (T, T)) -> Self {
        Self(a, b)
    }
}

impl<T> From<ByPlayer<T>> for (T, T) {
    #[inline]
    fn from(value: ByPlayer<T>) -> Self {
        (value.0, value.1)
    }
}

impl<T> ByPlayer<T> {
    #[inline]
    pub const fn new(white: T, black: T) -> Self {
        Self(white, black)
    }

    #[inline]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::White => &self.0,
            Side::Black => &self.1,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::White => &mut self.0,
            Side::Black => &mut self.1,
        }
    }

    #[inline]
    pub fn map<A, F: FnMut(T) -> A>(self, mut f: F) -> ByPlayer<A> {
        ByPlayer::<A>::new(f(self.0), f(self.1))
    }

    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.0, &mut self.1);
    }
}

impl<T> Index<Side> for ByPlayer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: Side) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<Side> for ByPlayer<T> {
    #[inline]
    fn index_mut(&mut self, index: Side) -> &mut Self::Output {
        self.get_mut(index)
    }
}
