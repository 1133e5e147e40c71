//! Full command sessions through the assistant, as a user would type them.

use chrono::NaiveDate;
use contact_assistant::{Assistant, FixedClock, Reply};

fn assistant() -> Assistant<FixedClock> {
    Assistant::new(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()))
}

/// Feed lines until `exit`, collecting printed replies.
fn run_session(assistant: &mut Assistant<FixedClock>, lines: &[&str]) -> Vec<String> {
    let mut replies = Vec::new();
    for line in lines {
        let Some(reply) = assistant.handle_line(line) else {
            continue;
        };
        replies.push(reply.text().to_string());
        if reply.is_exit() {
            break;
        }
    }
    replies
}

#[test]
fn test_typical_session() {
    let mut a = assistant();
    let replies = run_session(
        &mut a,
        &[
            "hello",
            "add Ann 1111111111",
            "add Bob 2222222222",
            "add Cid 3333333333",
            "add-birthday Ann 12.06.1990",
            "add-birthday Bob 15.06.1985",
            "add-birthday Cid 01.01.1990",
            "birthdays",
            "exit",
            "hello",
        ],
    );

    assert_eq!(
        replies,
        vec![
            "How can I help you?",
            "Contact added",
            "Contact added",
            "Contact added",
            "Birthday added for Ann.",
            "Birthday added for Bob.",
            "Birthday added for Cid.",
            "Ann: 2024.06.12\nBob: 2024.06.17",
            "Good bye!",
        ]
    );
}

#[test]
fn test_errors_do_not_end_the_session() {
    let mut a = assistant();
    let replies = run_session(
        &mut a,
        &[
            "add Ann",
            "add Ann 12",
            "phone Ann",
            "",
            "add-birthday Ann 1990-06-12",
            "whatever",
            "add Ann 1111111111",
            "phone ann",
        ],
    );

    assert_eq!(replies.len(), 7);
    assert!(replies[0].starts_with("Please enter the correct arguments."));
    assert!(replies[1].starts_with("Please enter the correct arguments."));
    assert_eq!(replies[2], "Contact 'Ann' not found.");
    assert!(replies[3].starts_with("Please enter the correct arguments."));
    assert_eq!(replies[4], "Invalid command.");
    assert_eq!(replies[5], "Contact added");
    assert_eq!(replies[6], "Contact name: Ann, phones: 1111111111");
}

#[test]
fn test_show_all_table() {
    let mut a = assistant();
    run_session(
        &mut a,
        &[
            "add Bob 2222222222",
            "add Ann 1111111111",
            "add-birthday Ann 12.06.1990",
        ],
    );

    let table = a.handle_line("show-all").unwrap();
    let lines: Vec<&str> = table.text().lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[1],
        "| Name                 | Phones               | Birthday             |"
    );
    assert!(lines[3].starts_with("| Ann "));
    assert!(lines[3].contains("12.06.1990"));
    assert!(lines[4].starts_with("| Bob "));
    assert_eq!(lines[0], lines[5]);
}

#[test]
fn test_dispatch_with_explicit_arguments() {
    let mut a = assistant();
    assert_eq!(
        a.dispatch("ADD", &["Ann", "1111111111"]),
        Reply::Continue("Contact added".to_string())
    );
    assert_eq!(
        a.dispatch("show-birthday", &["Ann".to_string()]),
        Reply::Continue("No birthday set for Ann.".to_string())
    );
    assert_eq!(
        a.dispatch::<&str>("close", &[]),
        Reply::Exit("Good bye!".to_string())
    );
}

#[test]
fn test_extra_arguments_are_ignored() {
    let mut a = assistant();
    let replies = run_session(&mut a, &["add Ann 1111111111 extra tokens", "phone Ann x"]);
    assert_eq!(
        replies,
        vec!["Contact added", "Contact name: Ann, phones: 1111111111"]
    );
}
