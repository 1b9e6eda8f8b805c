use crate::models::{Completion, Habit, TrackerData};
use chrono::NaiveDate;
use uuid::Uuid;

impl TrackerData {
    pub fn create_habit(&mut self, name: &str, added: NaiveDate) -> String {
        let id = Uuid::new_v4().simple().to_string();
        self.habits.push(Habit {
            id: id.clone(),
            name: name.to_string(),
            added,
        });
        id
    }

    pub fn habits_added_on_or_before(&self, date: NaiveDate) -> Vec<Habit> {
        self.habits
            .iter()
            .filter(|habit| habit.added <= date)
            .cloned()
            .collect()
    }

    // No check that the id refers to a known habit, and no dedup: calling
    // twice for the same (habit, date) pair stores two records.
    pub fn record_completion(&mut self, habit_id: &str, date: NaiveDate) {
        self.completions.push(Completion {
            habit: habit_id.to_string(),
            date,
        });
    }

    pub fn completions_on_date(&self, date: NaiveDate) -> Vec<String> {
        self.completions
            .iter()
            .filter(|completion| completion.date == date)
            .map(|completion| completion.habit.clone())
            .collect()
    }
}
