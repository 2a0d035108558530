//! Session-scoped search defaults applied to semester/department scoped requests.

use crate::QueryOptions;

/// Page size used whenever none (or an out-of-range one) is given.
pub const DEFAULT_PER_PAGE: u8 = 30;

const SEMESTER_LEN: usize = 6;
const DEPT_ID_LEN: usize = 4;
const MAX_PER_PAGE: i64 = 100;

/// Default filters layered under the explicit arguments of each request.
///
/// Invalid input is never stored and never reported: a semester code that is
/// not exactly 6 bytes long or a department id that is not exactly 4 clears
/// the filter, and a page size outside `1..=100` falls back to
/// [`DEFAULT_PER_PAGE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    semester: String,
    dept_id: String,
    per_page: u8,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            semester: String::new(),
            dept_id: String::new(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ClientConfig {
    /// Builds a config from optional defaults, normalizing each one the same
    /// way the setters do.
    pub fn new(semester: Option<&str>, dept_id: Option<&str>, per_page: Option<i64>) -> Self {
        let mut config = Self::default();
        config
            .set_semester(semester.unwrap_or_default())
            .set_dept_id(dept_id.unwrap_or_default())
            .set_per_page(per_page.unwrap_or(i64::from(DEFAULT_PER_PAGE)));
        config
    }

    /// Sets the semester filter (e.g. `"202108"`), or clears it if `semester`
    /// is not exactly 6 bytes long.
    pub fn set_semester(&mut self, semester: &str) -> &mut Self {
        self.semester = exact_len(semester, SEMESTER_LEN);
        self
    }

    /// Sets the department filter (e.g. `"INST"`), or clears it if `dept_id`
    /// is not exactly 4 bytes long.
    pub fn set_dept_id(&mut self, dept_id: &str) -> &mut Self {
        self.dept_id = exact_len(dept_id, DEPT_ID_LEN);
        self
    }

    /// Sets the page size, or resets it to [`DEFAULT_PER_PAGE`] if `per_page`
    /// is outside `1..=100`.
    pub fn set_per_page(&mut self, per_page: i64) -> &mut Self {
        self.per_page = match u8::try_from(per_page) {
            Ok(n) if (1..=MAX_PER_PAGE).contains(&per_page) => n,
            _ => DEFAULT_PER_PAGE,
        };
        self
    }

    /// The current semester filter; empty when unset.
    pub fn semester(&self) -> &str {
        &self.semester
    }

    /// The current department filter; empty when unset.
    pub fn dept_id(&self) -> &str {
        &self.dept_id
    }

    pub fn per_page(&self) -> u8 {
        self.per_page
    }
}

/// A default filter that an operation layers under its explicit options.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Filter {
    Semester,
    DeptId,
    PerPage,
}

impl ClientConfig {
    /// Appends the requested defaults after the explicit options. Unset
    /// filters are skipped; a default replaces an explicit option of the same key.
    pub(crate) fn add_to_options(&self, options: &mut QueryOptions, filters: &[Filter]) {
        for filter in filters {
            match filter {
                Filter::Semester => {
                    options.push_non_empty("semester", &self.semester);
                }
                Filter::DeptId => {
                    options.push_non_empty("dept_id", &self.dept_id);
                }
                Filter::PerPage => {
                    if self.per_page > 0 {
                        options.push("per_page", i64::from(self.per_page));
                    }
                }
            }
        }
    }
}

fn exact_len(code: &str, len: usize) -> String {
    if code.len() == len {
        code.to_string()
    } else {
        String::new()
    }
}
