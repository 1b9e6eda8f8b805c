use crate::dates::{date_range, today};
use crate::errors::AppError;
use crate::models::{AddHabitForm, CompleteForm, IndexParams};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::{render_add_habit, render_index};
use axum::{
    Form,
    extract::{Query, State},
    response::{Html, Redirect},
};
use chrono::NaiveDate;

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<Html<String>, AppError> {
    // An empty date parameter counts as absent, same as no parameter at all.
    let selected = match params.date.as_deref().filter(|raw| !raw.is_empty()) {
        Some(raw) => parse_date(raw)?,
        None => today(),
    };

    let data = state.data.lock().await;
    let habits = data.habits_added_on_or_before(selected);
    let completions = data.completions_on_date(selected);
    drop(data);

    Ok(Html(render_index(
        selected,
        &date_range(selected),
        &habits,
        &completions,
    )))
}

pub async fn add_habit_form() -> Html<String> {
    Html(render_add_habit(today()))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Form(form): Form<AddHabitForm>,
) -> Result<Html<String>, AppError> {
    let added = today();
    // Blank submissions insert nothing; the form is simply shown again.
    let name = form.habit.as_deref().unwrap_or("").trim();
    if !name.is_empty() {
        let mut data = state.data.lock().await;
        data.create_habit(name, added);
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Html(render_add_habit(added)))
}

pub async fn complete(
    State(state): State<AppState>,
    Form(form): Form<CompleteForm>,
) -> Result<Redirect, AppError> {
    let date_string = form
        .date
        .ok_or_else(|| AppError::parse("missing form field 'date'"))?;
    let date = parse_date(&date_string)?;
    let habit_id = form
        .habit_id
        .ok_or_else(|| AppError::parse("missing form field 'habitId'"))?;

    let mut data = state.data.lock().await;
    data.record_completion(&habit_id, date);
    persist_data(&state.data_path, &data).await?;

    Ok(Redirect::to(&format!("/?date={date_string}")))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    raw.parse()
        .map_err(|_| AppError::parse(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}
