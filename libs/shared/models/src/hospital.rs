use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub kind: HospitalKind,
    pub location: String,
    pub distance: String,
    pub rating: f32,
    pub opening_time: String,
    pub closing_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HospitalKind {
    Private,
    Government,
}
