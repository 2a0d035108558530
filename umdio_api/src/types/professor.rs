use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Professor {
    pub name: String,
    #[serde(default)]
    pub taught: Vec<TaughtCourse>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaughtCourse {
    pub course_id: String,
    pub semester: Option<String>,
}
