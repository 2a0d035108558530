use super::{common::QueryCommon, Query, QueryOptions};

/// Filters for the course section search.
///
/// Seat and waitlist filters are passed through untouched, so the API's
/// comparison syntax (e.g. `"10|gte"`) can be used.
#[derive(Clone, Debug, Default)]
pub struct SectionsQuery {
    pub common: QueryCommon,
    pub course_id: String,
    pub seats: String,
    pub open_seats: String,
    pub waitlist: String,
}

impl Query for SectionsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_options(&self) -> QueryOptions {
        let mut options = QueryOptions::new();
        self.common.add_page(&mut options);
        options
            .push_non_empty("course_id", &self.course_id)
            .push_non_empty("seats", &self.seats)
            .push_non_empty("open_seats", &self.open_seats)
            .push_non_empty("waitlist", &self.waitlist);
        self.common.add_sort(&mut options);
        options
    }
}

impl SectionsQuery {
    pub fn new(
        page: i64,
        course_id: &str,
        seats: &str,
        open_seats: &str,
        waitlist: &str,
        sort: &str,
    ) -> Self {
        Self::default()
            .with_page(page)
            .with_course_id(course_id)
            .with_seats(seats)
            .with_open_seats(open_seats)
            .with_waitlist(waitlist)
            .with_sort(sort)
    }

    pub fn with_course_id(mut self, course_id: &str) -> Self {
        self.course_id = course_id.to_string();
        self
    }

    pub fn with_seats(mut self, seats: &str) -> Self {
        self.seats = seats.to_string();
        self
    }

    pub fn with_open_seats(mut self, open_seats: &str) -> Self {
        self.open_seats = open_seats.to_string();
        self
    }

    pub fn with_waitlist(mut self, waitlist: &str) -> Self {
        self.waitlist = waitlist.to_string();
        self
    }
}
