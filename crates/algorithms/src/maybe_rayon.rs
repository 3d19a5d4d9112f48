/// Compatibility layer for rayon/sequential grid evaluation.
///
/// With the `parallel` feature, grid rows are evaluated on rayon's pool.
/// Without it the same `into_par_iter()` call sites resolve to ordinary
/// sequential iterators, so the interpolator is written once.
#[cfg(feature = "parallel")]
pub use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    /// Sequential stand-in for `rayon::prelude::IntoParallelIterator`.
    ///
    /// `into_par_iter()` forwards to `into_iter()`, so the rest of the chain
    /// (`.map()`, `.flat_map()`, `.collect()`) uses the standard `Iterator`
    /// methods.
    pub trait IntoParallelIterator {
        type Iter;
        type Item;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Iter = I::IntoIter;
        type Item = I::Item;
        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }
}

#[cfg(not(feature = "parallel"))]
pub use sequential::*;
