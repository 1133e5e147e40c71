//! Directory and value object behavior through the public API.

use contact_assistant::{
    Birthday, ContactDirectory, ContactError, ContactName, ContactRecord, PhoneNumber,
    UpsertOutcome, ValidationError,
};

fn sample_record(name: &str, phones: &[&str]) -> ContactRecord {
    let mut record = ContactRecord::new(ContactName::new(name).unwrap());
    for phone in phones {
        record.add_phone(PhoneNumber::new(*phone).unwrap());
    }
    record
}

#[test]
fn test_any_ten_digit_string_is_a_phone() {
    for raw in ["0000000000", "0123456789", "9999999999", "5550001234"] {
        let phone = PhoneNumber::new(raw).unwrap();
        assert_eq!(phone.to_string(), raw);
    }
}

#[test]
fn test_non_ten_digit_strings_are_rejected() {
    for raw in ["", "1", "123456789", "12345678901", "12345 6789", "(050)12345", "abcdefghij"] {
        assert_eq!(
            PhoneNumber::new(raw),
            Err(ValidationError::InvalidPhone(raw.to_string())),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn test_birthday_round_trips_through_format() {
    for raw in ["01.01.1970", "28.02.2023", "29.02.2020", "30.11.1988", "31.12.2099"] {
        assert_eq!(Birthday::new(raw).unwrap().format(), raw);
    }
}

#[test]
fn test_find_any_case_returns_inserted_record() {
    let mut directory = ContactDirectory::new();
    let record = sample_record("Olena", &["0671112233"]);
    directory.add(record.clone()).unwrap();

    for query in ["Olena", "olena", "OLENA", "oLeNa"] {
        assert_eq!(directory.find(query), Some(&record));
    }
    assert_eq!(directory.find("Petro"), None);
}

#[test]
fn test_names_differing_only_in_case_collide() {
    let mut directory = ContactDirectory::new();
    directory.add(sample_record("Ann", &[])).unwrap();

    assert!(matches!(
        directory.add(sample_record("ANN", &["1111111111"])),
        Err(ContactError::Duplicate(_))
    ));
    assert!(directory.find("ann").unwrap().phones.is_empty());
}

#[test]
fn test_edit_phone_through_directory() {
    let mut directory = ContactDirectory::new();
    directory.add(sample_record("Ann", &["1111111111"])).unwrap();

    directory
        .get_mut("ann")
        .unwrap()
        .edit_phone("1111111111", "2222222222")
        .unwrap();

    let record = directory.find("Ann").unwrap();
    assert!(matches!(
        record.find_phone("1111111111"),
        Err(ContactError::NotFound(_))
    ));
    assert!(record.find_phone("2222222222").is_ok());
}

#[test]
fn test_upsert_preserves_existing_contact() {
    let mut directory = ContactDirectory::new();
    assert_eq!(
        directory.upsert_contact("Ann", "1111111111").unwrap(),
        UpsertOutcome::Added
    );

    // The phone of a repeated add is ignored, even when invalid
    assert_eq!(
        directory.upsert_contact("Ann", "not-a-phone").unwrap(),
        UpsertOutcome::AlreadyExists
    );
    assert_eq!(directory.find("Ann").unwrap().phones_joined(), "1111111111");
}

#[test]
fn test_list_all_exposes_every_entry() {
    let mut directory = ContactDirectory::new();
    directory.upsert_contact("Ann", "1111111111").unwrap();
    directory.upsert_contact("Bob", "2222222222").unwrap();
    directory
        .find_mut("bob")
        .unwrap()
        .set_birthday(Birthday::new("15.06.1985").unwrap());

    let entries: Vec<(String, usize, Option<String>)> = directory
        .list_all()
        .map(|(name, phones, birthday)| {
            (name.to_string(), phones.len(), birthday.map(|b| b.format()))
        })
        .collect();

    assert_eq!(
        entries,
        vec![
            ("Ann".to_string(), 1, None),
            ("Bob".to_string(), 1, Some("15.06.1985".to_string())),
        ]
    );
}

#[test]
fn test_record_serialization() {
    let mut record = sample_record("Ann", &["1111111111", "2222222222"]);
    record.set_birthday(Birthday::new("12.06.1990").unwrap());

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Ann",
            "phones": ["1111111111", "2222222222"],
            "birthday": "12.06.1990"
        })
    );

    let back: ContactRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_record_deserialization_validates_fields() {
    let result: Result<ContactRecord, _> =
        serde_json::from_value(serde_json::json!({"name": "Ann", "phones": ["123"]}));
    assert!(result.is_err());
}
