// ABOUTME: Table rendering for the task and label lists
// ABOUTME: Resolves label names and highlights priority and overdue deadlines

use chrono::{Local, NaiveDate};
use comfy_table::{Cell, Color, Table};
use peachy_core::{Label, Priority, Task};

pub fn task_table(tasks: &[&Task], labels: &[Label]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["", "ID", "Title", "Priority", "Deadline", "Labels"]);

    for task in tasks {
        let done = if task.completed { "✓" } else { "" };
        table.add_row(vec![
            Cell::new(done),
            Cell::new(&task.id),
            Cell::new(&task.title),
            priority_cell(task.priority),
            deadline_cell(task),
            Cell::new(label_names(&task.label_ids, labels)),
        ]);
    }

    table
}

pub fn label_table(labels: &[Label]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Color"]);

    for label in labels {
        table.add_row(vec![
            Cell::new(&label.id),
            Cell::new(&label.name),
            Cell::new(label.color.as_deref().unwrap_or("-")),
        ]);
    }

    table
}

fn priority_cell(priority: Priority) -> Cell {
    let color = match priority {
        Priority::Low => Color::Green,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::Red,
    };
    Cell::new(priority.to_string()).fg(color)
}

fn deadline_cell(task: &Task) -> Cell {
    let overdue = NaiveDate::parse_from_str(&task.deadline, "%Y-%m-%d")
        .map(|d| !task.completed && d < Local::now().date_naive())
        .unwrap_or(false);

    let cell = Cell::new(&task.deadline);
    if overdue {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

fn label_names(label_ids: &[String], labels: &[Label]) -> String {
    label_ids
        .iter()
        .filter_map(|id| labels.iter().find(|l| &l.id == id))
        .map(|l| l.name.clone())
        .collect::<Vec<_>>()
        .join(", ")
}
