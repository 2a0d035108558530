use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
    pub course_id: String,
    pub semester: Option<String>,
    pub name: Option<String>,
    pub dept_id: Option<String>,
    pub department: Option<String>,
    pub credits: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub grading_method: Vec<String>,
    /// Gen-ed requirement groups; the API nests them as lists of codes.
    pub gen_ed: Option<Value>,
    pub core: Option<Value>,
    pub relationships: Option<Value>,
    #[serde(default)]
    pub sections: Vec<String>,
}

/// One entry of the minified course listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CourseSummary {
    pub course_id: String,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Section {
    pub section_id: String,
    /// Course id the section belongs to.
    pub course: Option<String>,
    pub semester: Option<String>,
    #[serde(default)]
    pub instructors: Vec<String>,
    pub seats: Option<String>,
    pub open_seats: Option<String>,
    pub waitlist: Option<String>,
    #[serde(default)]
    pub meetings: Vec<Meeting>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Meeting {
    pub days: Option<String>,
    pub room: Option<String>,
    pub building: Option<String>,
    pub classtype: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Department {
    pub dept_id: String,
    pub department: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Major {
    pub name: String,
    /// Numeric in some responses, textual in others.
    pub major_id: Option<Value>,
    pub college: Option<String>,
    pub url: Option<String>,
}
