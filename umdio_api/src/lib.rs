//! Client for the University of Maryland open-data API (<https://api.umd.io/v1/>).

mod client;
mod config;
mod endpoint;
mod errors;
mod query;
mod result;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_PER_PAGE};
pub use self::endpoint::{Endpoint, BASE_URL};
pub use self::errors::Error;
pub use self::query::{
    build_query_string, CourseListQuery, CoursesQuery, ProfessorsQuery, Query, QueryCommon,
    QueryOptions, QueryValue, SectionsQuery,
};
pub use self::result::ApiResult;
