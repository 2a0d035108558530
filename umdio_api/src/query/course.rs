use super::{common::QueryCommon, Query, QueryOptions};

const GEN_ED_LEN: usize = 4;

/// Filters for the full course search.
#[derive(Clone, Debug, Default)]
pub struct CoursesQuery {
    pub common: QueryCommon,
    /// Credit count, e.g. `"3"`.
    pub credits: String,
    /// Four byte gen-ed code, e.g. `"DSHS"`. Anything else is dropped.
    pub gen_ed: String,
}

impl Query for CoursesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_options(&self) -> QueryOptions {
        let mut options = QueryOptions::new();
        self.common.add_page(&mut options);
        options.push_non_empty("credits", &self.credits);
        if self.gen_ed.len() == GEN_ED_LEN {
            options.push("gen_ed", self.gen_ed.as_str());
        }
        self.common.add_sort(&mut options);
        options
    }
}

impl CoursesQuery {
    pub fn new(page: i64, credits: &str, gen_ed: &str, sort: &str) -> Self {
        Self::default()
            .with_page(page)
            .with_credits(credits)
            .with_gen_ed(gen_ed)
            .with_sort(sort)
    }

    pub fn with_credits(mut self, credits: &str) -> Self {
        self.credits = credits.to_string();
        self
    }

    pub fn with_gen_ed(mut self, gen_ed: &str) -> Self {
        self.gen_ed = gen_ed.to_string();
        self
    }
}

/// Filters for the minified course listing.
#[derive(Clone, Debug, Default)]
pub struct CourseListQuery {
    pub common: QueryCommon,
}

impl Query for CourseListQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_options(&self) -> QueryOptions {
        let mut options = QueryOptions::new();
        self.common.add_page(&mut options);
        self.common.add_sort(&mut options);
        options
    }
}

impl CourseListQuery {
    pub fn new(page: i64, sort: &str) -> Self {
        Self::default().with_page(page).with_sort(sort)
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{CourseListQuery, CoursesQuery, Query, QueryValue};

    #[test]
    fn test_courses_query_defaults() {
        let options = CoursesQuery::default().to_options();
        assert_eq!(options.to_query_string(), "?page=1");
    }

    #[test]
    fn test_courses_query_gen_ed_length() {
        let options = CoursesQuery::new(2, "", "ABCD", "").to_options();
        assert_eq!(options.get("gen_ed"), Some(&QueryValue::from("ABCD")));
        assert_eq!(options.get("page"), Some(&QueryValue::Int(2)));

        let options = CoursesQuery::new(2, "", "AB", "").to_options();
        assert!(!options.contains_key("gen_ed"));
        assert_eq!(options.get("page"), Some(&QueryValue::Int(2)));

        let options = CoursesQuery::default().with_gen_ed("DSHSX").to_options();
        assert!(!options.contains_key("gen_ed"));

        let options = CoursesQuery::default().with_gen_ed("DSé").to_options();
        assert!(options.contains_key("gen_ed"));
    }

    #[test]
    fn test_courses_query_drops_zero_credits() {
        let options = CoursesQuery::new(1, "0", "", "0").to_options();
        assert_eq!(options.to_query_string(), "?page=1");
    }

    #[test]
    fn test_courses_query_order() {
        let options = CoursesQuery::default()
            .with_sort("-credits")
            .with_gen_ed("DSHS")
            .with_credits("3")
            .with_page(4)
            .to_options();
        assert_eq!(
            options.to_query_string(),
            "?page=4&credits=3&gen_ed=DSHS&sort=-credits"
        );
    }

    #[test]
    fn test_course_list_query_drops_non_positive_page() {
        assert!(CourseListQuery::new(0, "").to_options().is_empty());
        assert!(CourseListQuery::new(-3, "").to_options().is_empty());
        assert_eq!(
            CourseListQuery::new(3, "name").to_options().to_query_string(),
            "?page=3&sort=name"
        );
    }
}
