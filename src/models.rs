use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub added: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub habit: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrackerData {
    pub habits: Vec<Habit>,
    pub completions: Vec<Completion>,
}

#[derive(Debug, Deserialize)]
pub struct IndexParams {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddHabitForm {
    pub habit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompleteForm {
    pub date: Option<String>,
    #[serde(rename = "habitId")]
    pub habit_id: Option<String>,
}
