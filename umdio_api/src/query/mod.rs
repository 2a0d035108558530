mod common;
pub use self::common::{
    build_query_string, is_falsy, Query, QueryCommon, QueryOptions, QueryValue,
};
mod course;
pub use self::course::{CourseListQuery, CoursesQuery};

mod section;
pub use self::section::SectionsQuery;

mod professor;
pub use self::professor::ProfessorsQuery;
