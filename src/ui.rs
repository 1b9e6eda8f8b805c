use crate::models::Habit;
use chrono::NaiveDate;

pub fn render_index(
    selected: NaiveDate,
    days: &[NaiveDate],
    habits: &[Habit],
    completions: &[String],
) -> String {
    let rows = if habits.is_empty() {
        r#"<p class="empty">Nothing is being tracked yet. <a href="/add">Add a habit</a> to get started.</p>"#
            .to_string()
    } else {
        habits
            .iter()
            .map(|habit| habit_row(habit, selected, completions.contains(&habit.id)))
            .collect()
    };

    INDEX_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{TITLE}}", "Habit Tracker - Home")
        .replace("{{STRIP}}", &date_strip(selected, days))
        .replace("{{SELECTED}}", &selected.format("%A, %-d %B %Y").to_string())
        .replace("{{ROWS}}", &rows)
}

pub fn render_add_habit(today: NaiveDate) -> String {
    ADD_HABIT_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{TITLE}}", "Habit Tracker - Add Habit")
        .replace("{{SELECTED}}", &today.format("%A, %-d %B %Y").to_string())
}

fn date_strip(selected: NaiveDate, days: &[NaiveDate]) -> String {
    days.iter()
        .map(|day| {
            let class = if *day == selected { "day active" } else { "day" };
            format!(
                r#"<a class="{class}" href="/?date={date}"><span class="dow">{dow}</span><span class="dom">{dom}</span></a>"#,
                date = day,
                dow = day.format("%a"),
                dom = day.format("%-d"),
            )
        })
        .collect()
}

fn habit_row(habit: &Habit, selected: NaiveDate, completed: bool) -> String {
    let name = escape_html(&habit.name);
    if completed {
        format!(
            r#"<div class="habit done"><span class="name">{name}</span><span class="tick">&#10003;</span></div>"#
        )
    } else {
        format!(
            r#"<div class="habit"><span class="name">{name}</span><form method="post" action="/complete"><input type="hidden" name="date" value="{date}" /><input type="hidden" name="habitId" value="{id}" /><button type="submit">Done</button></form></div>"#,
            date = selected,
            id = escape_html(&habit.id),
        )
    }
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const STYLE: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #d7e8d0;
      --ink: #2b2a28;
      --accent: #3c7a4e;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 88, 58, 0.16);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #eef4e7 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 40px 18px 48px;
    }

    .app {
      width: min(640px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
    }

    header h1 { margin: 0; font-size: 1.5rem; }
    header a { color: var(--accent); text-decoration: none; font-weight: 600; }

    .strip { display: flex; gap: 8px; justify-content: space-between; }

    .day {
      flex: 1;
      display: grid;
      justify-items: center;
      gap: 2px;
      padding: 10px 4px;
      border-radius: 14px;
      text-decoration: none;
      color: var(--ink);
      background: rgba(255, 255, 255, 0.6);
    }

    .day.active { background: var(--accent); color: #fff; }
    .day .dow { font-size: 0.72rem; text-transform: uppercase; }
    .day .dom { font-weight: 600; }

    .selected-date { margin: 0; font-size: 0.95rem; opacity: 0.75; }

    .habit {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 14px 18px;
      border-radius: 16px;
      background: rgba(255, 255, 255, 0.7);
    }

    .habit.done { background: rgba(60, 122, 78, 0.14); }
    .habit .tick { color: var(--accent); font-weight: 600; }

    .habit button, .add-form button {
      border: 0;
      border-radius: 12px;
      padding: 8px 18px;
      background: var(--accent);
      color: #fff;
      font: inherit;
      cursor: pointer;
    }

    .add-form { display: grid; gap: 12px; }

    .add-form input[type="text"] {
      padding: 12px 14px;
      border-radius: 12px;
      border: 1px solid rgba(43, 42, 40, 0.2);
      font: inherit;
    }

    .empty { opacity: 0.7; }
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <a href="/add">+ Add habit</a>
    </header>
    <nav class="strip">{{STRIP}}</nav>
    <p class="selected-date">{{SELECTED}}</p>
    <section class="habits">{{ROWS}}</section>
  </main>
</body>
</html>
"#;

const ADD_HABIT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Add Habit</h1>
      <a href="/">&larr; Back</a>
    </header>
    <p class="selected-date">{{SELECTED}}</p>
    <form class="add-form" method="post" action="/add">
      <input type="text" name="habit" placeholder="What do you want to track?" autofocus />
      <button type="submit">Add</button>
    </form>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(id: &str, name: &str, added: NaiveDate) -> Habit {
        Habit {
            id: id.to_string(),
            name: name.to_string(),
            added,
        }
    }

    #[test]
    fn index_renders_strip_and_completion_form() {
        let selected = date(2024, 1, 15);
        let habits = vec![habit("abc123", "Exercise", date(2024, 1, 10))];
        let html = render_index(
            selected,
            &crate::dates::date_range(selected),
            &habits,
            &[],
        );

        assert!(html.contains("Exercise"));
        assert!(html.contains(r#"href="/?date=2024-01-12""#));
        assert!(html.contains(r#"href="/?date=2024-01-18""#));
        assert!(html.contains(r#"name="habitId" value="abc123""#));
        assert!(html.contains(r#"name="date" value="2024-01-15""#));
    }

    #[test]
    fn completed_habit_has_no_form() {
        let selected = date(2024, 1, 15);
        let habits = vec![habit("abc123", "Exercise", date(2024, 1, 10))];
        let html = render_index(
            selected,
            &crate::dates::date_range(selected),
            &habits,
            &["abc123".to_string()],
        );

        assert!(html.contains("done"));
        assert!(!html.contains(r#"name="habitId""#));
    }

    #[test]
    fn habit_names_are_escaped() {
        let selected = date(2024, 1, 15);
        let habits = vec![habit("abc123", "<script>alert(1)</script>", selected)];
        let html = render_index(
            selected,
            &crate::dates::date_range(selected),
            &habits,
            &[],
        );

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn add_habit_page_shows_today() {
        let html = render_add_habit(date(2024, 1, 15));
        assert!(html.contains("Monday, 15 January 2024"));
        assert!(html.contains(r#"name="habit""#));
    }
}
