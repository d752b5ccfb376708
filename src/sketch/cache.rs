//! Incrementally extended curve paths.
//!
//! When a curve is revealed progressively (its upper parameter bound grows
//! frame after frame) resampling it from scratch each time is wasted work.
//! [`CurveCache`] keeps one path per name and only samples the new tail.

use std::collections::HashMap;

use crate::log::debug;
use crate::vector::Vector;

use super::path::{PathBuilder, PathOp};

#[derive(Debug, Clone)]
struct CachedCurve {
    path: PathBuilder,
    last_to: f64,
}

impl CachedCurve {
    fn fresh() -> Self {
        let mut path = PathBuilder::new();
        path.start_path();
        Self { path, last_to: 0.0 }
    }
}

/// Named curve paths that grow as their upper bound grows.
#[derive(Debug, Clone, Default)]
pub struct CurveCache {
    curves: HashMap<String, CachedCurve>,
}

impl CurveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the curve `name` up to parameter `to` and return its path.
    ///
    /// Samples `at + curve(i / scale.x) ⊙ scale` for `i` stepping by 1 from
    /// the previous `to · scale.x` while below `to · scale.x`. The path
    /// restarts when the curve is new or `to` went backwards.
    pub fn extend<F>(
        &mut self,
        name: &str,
        at: Vector,
        scale: Vector,
        to: f64,
        curve: F,
    ) -> &[PathOp]
    where
        F: Fn(f64) -> Vector,
    {
        let cached = self
            .curves
            .entry(name.to_string())
            .or_insert_with(CachedCurve::fresh);
        if to < cached.last_to {
            debug!(name, to, last_to = cached.last_to, "curve cache restart");
            *cached = CachedCurve::fresh();
        }

        let last_to = cached.last_to;
        cached.last_to = to;

        let end = to * scale.x;
        let mut i = last_to * scale.x;
        while i < end {
            cached.path.path_to(at + curve(i / scale.x).multiply_vec(scale));
            i += 1.0;
        }

        cached.path.ops()
    }

    /// The path recorded so far for `name`
    pub fn get(&self, name: &str) -> Option<&[PathOp]> {
        self.curves.get(name).map(|cached| cached.path.ops())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.curves.remove(name).is_some()
    }

    pub fn clear(&mut self) {
        self.curves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::v;

    fn diagonal(t: f64) -> Vector {
        v(t, t)
    }

    #[test]
    fn first_extend_samples_from_zero() {
        let mut cache = CurveCache::new();
        let ops = cache.extend("d", v(0.0, 0.0), v(1.0, 1.0), 3.0, diagonal);
        assert_eq!(
            ops,
            &[
                PathOp::MoveTo(v(0.0, 0.0)),
                PathOp::LineTo(v(1.0, 1.0)),
                PathOp::LineTo(v(2.0, 2.0)),
            ]
        );
    }

    #[test]
    fn growing_bound_appends_only_new_samples() {
        let mut cache = CurveCache::new();
        cache.extend("d", v(10.0, 0.0), v(2.0, 2.0), 1.0, diagonal);
        assert_eq!(cache.get("d").map(<[PathOp]>::len), Some(2));

        let ops = cache.extend("d", v(10.0, 0.0), v(2.0, 2.0), 2.0, diagonal).to_vec();
        assert_eq!(ops.len(), 4);
        assert_eq!(ops[0], PathOp::MoveTo(v(10.0, 0.0)));
        assert_eq!(ops[2], PathOp::LineTo(v(12.0, 2.0)));
        assert_eq!(ops[3], PathOp::LineTo(v(13.0, 3.0)));
    }

    #[test]
    fn shrinking_bound_restarts() {
        let mut cache = CurveCache::new();
        cache.extend("d", Vector::ZERO, Vector::ONE, 5.0, diagonal);
        let ops = cache.extend("d", Vector::ZERO, Vector::ONE, 2.0, diagonal);
        assert_eq!(ops, &[PathOp::MoveTo(v(0.0, 0.0)), PathOp::LineTo(v(1.0, 1.0))]);
    }

    #[test]
    fn same_bound_adds_nothing() {
        let mut cache = CurveCache::new();
        let before = cache.extend("d", Vector::ZERO, Vector::ONE, 4.0, diagonal).len();
        let after = cache.extend("d", Vector::ZERO, Vector::ONE, 4.0, diagonal).len();
        assert_eq!(before, after);
    }

    #[test]
    fn names_are_independent() {
        let mut cache = CurveCache::new();
        cache.extend("a", Vector::ZERO, Vector::ONE, 2.0, diagonal);
        cache.extend("b", Vector::ZERO, Vector::ONE, 4.0, diagonal);
        assert_eq!(cache.get("a").map(<[PathOp]>::len), Some(2));
        assert_eq!(cache.get("b").map(<[PathOp]>::len), Some(4));
        assert!(cache.remove("a"));
        assert!(cache.get("a").is_none());
        cache.clear();
        assert!(cache.get("b").is_none());
    }
}
