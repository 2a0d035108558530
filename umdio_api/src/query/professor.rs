use url::form_urlencoded;

use super::{is_falsy, QueryOptions};

/// Professor search by name and/or taught course.
#[derive(Clone, Debug, Default)]
pub struct ProfessorsQuery {
    /// Full name, e.g. `"LaRia Rogers"`. Form-encoded before it is sent.
    pub name: String,
    pub course_id: String,
}

impl ProfessorsQuery {
    pub fn new(name: &str, course_id: &str) -> Self {
        Self::default().with_name(name).with_course_id(course_id)
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_course_id(mut self, course_id: &str) -> Self {
        self.course_id = course_id.to_string();
        self
    }

    /// True when neither filter is set; such a search is never sent.
    pub fn is_empty(&self) -> bool {
        is_falsy(&self.name) && is_falsy(&self.course_id)
    }

    pub fn to_options(&self) -> QueryOptions {
        let mut options = QueryOptions::new();
        if !is_falsy(&self.name) {
            // form_urlencoded leaves `*` alone; PHP-style urlencode does not.
            let encoded: String = form_urlencoded::byte_serialize(self.name.as_bytes())
                .collect::<String>()
                .replace('*', "%2A");
            options.push("name", encoded);
        }
        options.push_non_empty("course_id", &self.course_id);
        options
    }
}
