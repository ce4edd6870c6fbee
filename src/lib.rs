//! Per-category mean and median estimation.
//!
//! A [`GroupEstimator`](estimators::GroupEstimator) learns one summary
//! statistic per category key and predicts by lookup:
//!
//! ```
//! use group_estimate::estimators::{EstimateKind, GroupEstimator, Regressor};
//!
//! let mut est = GroupEstimator::new(EstimateKind::Median);
//! est.fit(
//!     &[Some("a"), Some("a"), Some("a"), Some("b")],
//!     &[Some(2.0), Some(4.0), Some(6.0), Some(1.0)],
//! )
//! .unwrap();
//!
//! let predictions = est.predict(&[Some("a"), Some("z")]).unwrap();
//! assert_eq!(predictions.into_vec(), vec![Some(4.0), None]);
//! ```

pub mod core;
pub mod estimators;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
