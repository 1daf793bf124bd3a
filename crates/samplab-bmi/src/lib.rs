//! BMI by sex and smoking status.
//!
//! Loads a CSV dataset with `sex`, `smoker` and `bmi` columns and summarizes the
//! BMI of each sex/smoking-status subgroup.
//!
//! ```
//! use samplab_bmi::{
//!     groups::{GroupKey, GroupSummary},
//!     record::{self, Sex, Smoker},
//! };
//!
//! let csv = "age,sex,bmi,smoker\n19,female,27.9,yes\n18,male,33.77,no\n28,male,33.0,no\n";
//! let records = record::read_csv(csv.as_bytes()).unwrap();
//! let summary = GroupSummary::from_records(&records, GroupKey::new(Sex::Male, Smoker::No));
//! assert_eq!(summary.count, 2);
//! assert!((summary.mean - 33.385).abs() < 1e-9);
//! ```

pub mod groups;
pub mod record;
