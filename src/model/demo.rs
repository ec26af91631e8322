//! Built-in demo data set

use super::record::Record;
use serde_json::{json, Value};

/// Team members shown when no data file is given
pub fn team_members() -> Vec<Record> {
    let rows = json!([
        {
            "name": "Alice Johnson",
            "age": 25,
            "role": "Senior Developer",
            "status": "Active",
            "joined": "2021-04-12T09:00:00+00:00",
            "skills": ["rust", "sql"]
        },
        {
            "name": "Bob Smith",
            "age": 30,
            "role": "UI/UX Designer",
            "status": "Active",
            "joined": "2019-11-02T09:00:00+00:00",
            "skills": ["figma"]
        },
        {
            "name": "Charlie Brown",
            "age": 22,
            "role": "Junior Intern",
            "status": "Active",
            "joined": "2024-06-03T09:00:00+00:00",
            "skills": null
        },
        {
            "name": "Diana Prince",
            "age": 28,
            "role": "Project Manager",
            "status": "Active",
            "joined": "2020-01-20T09:00:00+00:00",
            "skills": ["planning", "budgets"]
        },
        {
            "name": "Ethan Hunt",
            "age": 35,
            "role": "QA Engineer",
            "status": "Inactive",
            "joined": "2018-08-15T09:00:00+00:00",
            "skills": { "automation": "selenium", "manual": true }
        }
    ]);

    match rows {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
