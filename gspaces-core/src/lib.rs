//! gspaces core - fundamental types
//!
//! This crate provides the types shared by every sequence kind:
//! - `Space`: finite, randomly indexable, lazily computed sequences
//! - `StepSpace`: spaces with a constant step, accessible as `(value, step)`
//! - `Real`: the floating-point bound sequences are generic over
//! - `SpaceError`: construction and access failures

mod error;
mod real;
mod space;

pub use error::{codes, ErrorReport, Result, SpaceError};
pub use real::{ceil_count, from_f64, from_index, require_count, Real};
pub use space::{Iter, Space, StepIter, StepSpace};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Real, Result, Space, SpaceError, StepSpace};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `0, 1, 2, ...` of a fixed length
    struct Naturals(usize);

    impl Space for Naturals {
        type Value = f64;

        fn len(&self) -> usize {
            self.0
        }

        fn get(&self, index: usize) -> Result<f64> {
            if index >= self.0 {
                return Err(SpaceError::index_out_of_range(index, self.0));
            }
            from_index(index)
        }
    }

    impl StepSpace for Naturals {
        fn step(&self) -> Option<f64> {
            Some(1.0)
        }
    }

    /// Claims elements it cannot produce
    struct Broken;

    impl Space for Broken {
        type Value = f64;

        fn len(&self) -> usize {
            2
        }

        fn get(&self, _index: usize) -> Result<f64> {
            Err(SpaceError::invalid_argument("unrepresentable"))
        }
    }

    mod space_tests {
        use super::*;

        #[test]
        fn test_iter_yields_len_elements() {
            let s = Naturals(4);
            let v: Vec<f64> = s.iter().collect();
            assert_eq!(v, vec![0.0, 1.0, 2.0, 3.0]);
            assert_eq!(s.iter().len(), 4);
        }

        #[test]
        fn test_iter_is_restartable() {
            let s = Naturals(3);
            let a: Vec<f64> = s.iter().collect();
            let b: Vec<f64> = s.iter().collect();
            assert_eq!(a, b);
        }

        #[test]
        fn test_iter_reversed() {
            let s = Naturals(3);
            let v: Vec<f64> = s.iter().rev().collect();
            assert_eq!(v, vec![2.0, 1.0, 0.0]);
        }

        #[test]
        fn test_iter_meets_in_the_middle() {
            let s = Naturals(3);
            let mut it = s.iter();
            assert_eq!(it.next(), Some(0.0));
            assert_eq!(it.next_back(), Some(2.0));
            assert_eq!(it.len(), 1);
            assert_eq!(it.next(), Some(1.0));
            assert_eq!(it.next_back(), None);
            assert_eq!(it.next(), None);
        }

        #[test]
        fn test_iter_nth_skips() {
            let s = Naturals(10);
            let mut it = s.iter();
            assert_eq!(it.nth(4), Some(4.0));
            assert_eq!(it.next(), Some(5.0));
            assert_eq!(it.nth(100), None);
        }

        #[test]
        fn test_empty_space() {
            let s = Naturals(0);
            assert!(s.is_empty());
            assert_eq!(s.iter().next(), None);
            assert_eq!(s.first(), None);
            assert_eq!(s.last(), None);
        }

        #[test]
        fn test_first_last() {
            let s = Naturals(5);
            assert_eq!(s.first(), Some(0.0));
            assert_eq!(s.last(), Some(4.0));
        }

        #[test]
        fn test_get_with_step() {
            let s = Naturals(2);
            assert_eq!(s.get_with_step(1).unwrap(), (1.0, Some(1.0)));
            assert!(s.get_with_step(2).is_err());
        }

        #[test]
        fn test_iter_with_step() {
            let s = Naturals(2);
            let pairs: Vec<_> = s.iter_with_step().collect();
            assert_eq!(pairs, vec![(0.0, Some(1.0)), (1.0, Some(1.0))]);
        }

        #[test]
        fn test_iter_count_matches_len() {
            for n in [0, 1, 2, 17] {
                let s = Naturals(n);
                assert_eq!(s.iter().count(), n);
                assert_eq!(s.iter().rev().count(), n);
                assert_eq!(s.iter_with_step().count(), n);
            }
        }

        #[cfg(debug_assertions)]
        #[test]
        #[should_panic(expected = "in-range index 0 failed")]
        fn test_iter_does_not_silently_stop_short() {
            let _ = Broken.iter().next();
        }

        #[test]
        fn test_space_by_reference() {
            let s = Naturals(3);
            let r = &s;
            assert_eq!(Space::len(&r), 3);
            assert_eq!(StepSpace::step(&r), Some(1.0));
            assert_eq!(r.iter().sum::<f64>(), 3.0);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_codes() {
            assert_eq!(SpaceError::invalid_argument("x").code(), codes::INVALID_ARGUMENT);
            assert_eq!(SpaceError::index_out_of_range(3, 2).code(), codes::INDEX_OUT_OF_RANGE);
            assert_eq!(SpaceError::domain_error("x").code(), codes::DOMAIN_ERROR);
        }

        #[test]
        fn test_error_display() {
            let err = SpaceError::index_out_of_range(5, 3);
            assert_eq!(err.to_string(), "Index 5 out of range for sequence of length 3");
        }

        #[test]
        fn test_report_carries_code_and_suggestion() {
            let report = SpaceError::index_out_of_range(0, 0).report();
            assert_eq!(report.code, codes::INDEX_OUT_OF_RANGE);
            assert_eq!(report.suggestion.as_deref(), Some("Sequence is empty"));
            let display = format!("{}", report);
            assert!(display.contains("INDEX_OUT_OF_RANGE"));
        }

        #[test]
        fn test_report_serializes() {
            let report = ErrorReport::new("X", "boom");
            let json = serde_json::to_value(&report).unwrap();
            assert_eq!(json["code"], "X");
            assert_eq!(json["message"], "boom");
            assert!(json.get("suggestion").is_none());
        }
    }
}
