//! Text rendering for command replies.

use crate::repositories::ContactDirectory;
use crate::services::UpcomingBirthday;

const COLUMN_WIDTH: usize = 20;

/// Render the directory as a fixed-width table framed by dashed lines.
pub fn contacts_table(directory: &ContactDirectory) -> String {
    let header = table_row("Name", "Phones", "Birthday");
    let separator = "-".repeat(header.chars().count());

    let mut lines = vec![separator.clone(), header, separator.clone()];
    lines.extend(directory.list_all().map(|(name, phones, birthday)| {
        let phones = phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = birthday.map(|b| b.format()).unwrap_or_default();
        table_row(name.as_str(), &phones, &birthday)
    }));
    lines.push(separator);

    lines.join("\n")
}

fn table_row(name: &str, phones: &str, birthday: &str) -> String {
    format!(
        "| {:<w$} | {:<w$} | {:<w$} |",
        name,
        phones,
        birthday,
        w = COLUMN_WIDTH
    )
}

/// One `name: YYYY.MM.DD` line per contact to congratulate.
pub fn birthdays_list(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    upcoming
        .iter()
        .map(|u| format!("{}: {}", u.name, u.formatted_date()))
        .collect::<Vec<_>>()
        .join("\n")
}
