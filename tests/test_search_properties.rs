//! Property tests for the substring filter.

use contact_book::domain::ContactId;
use contact_book::models::{Contact, ContactDraft};
use contact_book::search::filter;
use proptest::prelude::*;

fn field_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z ]{1,12}",
        "[0-9 ()+-]{6,12}",
        "[a-z]{1,6}@[a-z]{1,6}\\.[a-z]{2,3}",
    ]
}

fn contact_strategy() -> impl Strategy<Value = (String, String, String, String)> {
    (
        "[A-Za-z][A-Za-z ]{0,12}",
        field_strategy(),
        field_strategy(),
        field_strategy(),
    )
}

fn build(rows: Vec<(String, String, String, String)>) -> Vec<Contact> {
    rows.into_iter()
        .enumerate()
        .map(|(i, (name, phone, email, address))| {
            Contact::from_draft(
                ContactId::new(format!("c{i}")).unwrap(),
                &ContactDraft {
                    name,
                    phone,
                    email,
                    address,
                },
            )
        })
        .collect()
}

fn haystack(contact: &Contact) -> String {
    format!(
        "{} {} {} {}",
        contact.name, contact.phone, contact.email, contact.address
    )
    .to_lowercase()
}

proptest! {
    #[test]
    fn empty_query_is_identity(rows in prop::collection::vec(contact_strategy(), 0..20)) {
        let contacts = build(rows);
        let all: Vec<&Contact> = contacts.iter().collect();
        prop_assert_eq!(filter(&contacts, ""), all);
    }

    #[test]
    fn filter_partitions_by_substring(
        rows in prop::collection::vec(contact_strategy(), 0..20),
        query in "[A-Za-z0-9@ ]{1,4}",
    ) {
        let contacts = build(rows);
        let results = filter(&contacts, &query);
        let needle = query.trim().to_lowercase();

        // Order-preserving subsequence
        let mut last = None;
        for contact in &results {
            let index = contacts.iter().position(|c| c.id == contact.id).unwrap();
            prop_assert!(last.map_or(true, |l| index > l));
            last = Some(index);
        }

        // Every record is included exactly when it contains the query
        for contact in &contacts {
            let included = results.iter().any(|r| r.id == contact.id);
            prop_assert_eq!(included, haystack(contact).contains(&needle));
        }
    }
}
