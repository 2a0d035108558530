//! Typed views of the umd.io payloads.
//!
//! All records are lenient: only the identifying field is required and
//! unknown fields are ignored. Decode them from an
//! [`ApiResult`](crate::ApiResult) with [`ApiResult::parse`](crate::ApiResult::parse).

mod course;
pub use self::course::{Course, CourseSummary, Department, Major, Meeting, Section};

mod professor;
pub use self::professor::{Professor, TaughtCourse};

mod campus;
pub use self::campus::{Building, BusRoute, BusStop};
