//! Fixed table of umd.io resource paths.

/// Production base URL. Every [`Endpoint`] template is relative to it.
pub const BASE_URL: &str = "https://api.umd.io/v1/";

const ID_PLACEHOLDER: &str = "{id}";

/// One remote resource of the umd.io API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Courses,
    CourseList,
    Sections,
    Section,
    Course,
    Semesters,
    Departments,
    Professors,
    Majors,
    Buildings,
    Building,
    BusRoutes,
    BusRoute,
    BusStops,
    BusStop,
    BusSchedule,
}

impl Endpoint {
    pub const ALL: [Endpoint; 16] = [
        Endpoint::Courses,
        Endpoint::CourseList,
        Endpoint::Sections,
        Endpoint::Section,
        Endpoint::Course,
        Endpoint::Semesters,
        Endpoint::Departments,
        Endpoint::Professors,
        Endpoint::Majors,
        Endpoint::Buildings,
        Endpoint::Building,
        Endpoint::BusRoutes,
        Endpoint::BusRoute,
        Endpoint::BusStops,
        Endpoint::BusStop,
        Endpoint::BusSchedule,
    ];

    /// Path template relative to the base URL. Id-keyed resources contain a
    /// single `{id}` placeholder.
    pub const fn template(self) -> &'static str {
        match self {
            Endpoint::Courses => "courses",
            Endpoint::CourseList => "courses/list",
            Endpoint::Sections => "courses/sections",
            Endpoint::Section => "courses/sections/{id}",
            Endpoint::Course => "courses/{id}",
            Endpoint::Semesters => "courses/semesters",
            Endpoint::Departments => "courses/departments",
            Endpoint::Professors => "professors",
            Endpoint::Majors => "majors/list",
            Endpoint::Buildings => "map/buildings",
            Endpoint::Building => "map/buildings/{id}",
            Endpoint::BusRoutes => "bus/routes",
            Endpoint::BusRoute => "bus/routes/{id}",
            Endpoint::BusStops => "bus/stops",
            Endpoint::BusStop => "bus/stops/{id}",
            Endpoint::BusSchedule => "bus/routes/{id}/schedules",
        }
    }

    /// Symbolic resource name.
    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::Courses => "courses",
            Endpoint::CourseList => "course_list",
            Endpoint::Sections => "sections",
            Endpoint::Section => "section_info",
            Endpoint::Course => "course_info",
            Endpoint::Semesters => "semesters",
            Endpoint::Departments => "departments",
            Endpoint::Professors => "professors",
            Endpoint::Majors => "majors",
            Endpoint::Buildings => "buildings_list",
            Endpoint::Building => "building",
            Endpoint::BusRoutes => "bus_routes",
            Endpoint::BusRoute => "bus_route",
            Endpoint::BusStops => "bus_stops",
            Endpoint::BusStop => "bus_stop",
            Endpoint::BusSchedule => "bus_schedule",
        }
    }

    pub fn requires_id(self) -> bool {
        self.template().contains(ID_PLACEHOLDER)
    }

    /// Joins the template onto `base`, substituting `id` verbatim into the
    /// placeholder. `base` must end with `/`.
    pub fn url(self, base: &str, id: Option<&str>) -> String {
        let path = match id {
            Some(id) => self.template().replacen(ID_PLACEHOLDER, id, 1),
            None => self.template().to_string(),
        };
        format!("{}{}", base, path)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
