//! Iterator counterparts of the array methods the page demonstrates.

use std::collections::BTreeMap;

use interfacing::User;
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct UserSummary {
    pub id: u32,
    pub name: String,
    pub city: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Contact {
    pub name: String,
    pub city: String,
    pub email: String,
}

/// map
pub fn summaries(users: &[User]) -> Vec<UserSummary> {
    users
        .iter()
        .map(|user| UserSummary {
            id: user.id,
            name: user.name.clone(),
            city: user.address.city.clone(),
        })
        .collect()
}

/// filter, case insensitive on the first letter of the city
pub fn cities_starting_with(users: &[User], letter: char) -> Vec<User> {
    let letter = letter.to_lowercase().collect::<String>();
    users
        .iter()
        .filter(|user| user.address.city.to_lowercase().starts_with(&letter))
        .cloned()
        .collect()
}

/// find
pub fn first_with_email_containing<'a>(users: &'a [User], needle: &str) -> Option<&'a User> {
    users.iter().find(|user| user.email.contains(needle))
}

/// filter, map and sort in one pass over the users
pub fn contacts_in_cities_containing(users: &[User], letter: char) -> Vec<Contact> {
    let letter = letter.to_lowercase().collect::<String>();
    let mut contacts: Vec<Contact> = users
        .iter()
        .filter(|user| user.address.city.to_lowercase().contains(&letter))
        .map(|user| Contact {
            name: user.name.clone(),
            city: user.address.city.clone(),
            email: user.email.clone(),
        })
        .collect();

    contacts.sort_by(|a, b| a.name.cmp(&b.name));
    contacts
}

/// reduce into a count per city
pub fn city_counts(users: &[User]) -> BTreeMap<String, usize> {
    users.iter().fold(BTreeMap::new(), |mut counts, user| {
        *counts.entry(user.address.city.clone()).or_insert(0) += 1;
        counts
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::pretty;
    use claim::{assert_none, assert_ok, assert_some};
    use interfacing::Address;

    fn user(id: u32, name: &str, email: &str, city: &str) -> User {
        User {
            id,
            name: name.into(),
            username: name.to_lowercase().replace(' ', "."),
            email: email.into(),
            address: Address {
                street: "Kulas Light".into(),
                city: city.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn users() -> Vec<User> {
        vec![
            user(1, "Leanne Graham", "Sincere@april.biz", "Gwenborough"),
            user(2, "Ervin Howell", "Shanna@melissa.tv", "Wisokyburgh"),
            user(3, "Clementine Bauch", "Nathan@yesenia.net", "McKenziehaven"),
            user(4, "Patricia Lebsack", "Julianne.OConner@kory.org", "South Elvis"),
            user(5, "Chelsey Dietrich", "Lucio_Hettinger@annie.ca", "Roscoeview"),
            user(6, "Dennis Schulist", "Karley_Dach@jasper.info", "South Christy"),
        ]
    }

    #[test]
    fn summaries_keep_order_and_pick_fields() {
        let summaries = summaries(&users());

        assert_eq!(summaries.len(), 6);
        assert_eq!(
            summaries[0],
            UserSummary {
                id: 1,
                name: "Leanne Graham".into(),
                city: "Gwenborough".into(),
            }
        );
    }

    #[test]
    fn filter_ignores_case_of_the_city() {
        let ids: Vec<u32> = cities_starting_with(&users(), 'S')
            .iter()
            .map(|u| u.id)
            .collect();

        assert_eq!(ids, vec![4, 6]);
        assert!(cities_starting_with(&users(), 'x').is_empty());
    }

    #[test]
    fn filtered_users_print_every_field_the_api_sent() {
        let raw = r#"[{
            "id": 4,
            "name": "Patricia Lebsack",
            "username": "Karianne",
            "email": "Julianne.OConner@kory.org",
            "address": {
                "street": "Hoeger Mall",
                "suite": "Apt. 692",
                "city": "South Elvis",
                "zipcode": "53919-4257",
                "geo": { "lat": "29.4572", "lng": "-164.2990" }
            },
            "phone": "493-170-9623 x156",
            "website": "kale.biz",
            "company": { "name": "Robel-Corkery" }
        }]"#;
        let users: Vec<User> = assert_ok!(serde_json::from_str(raw));

        let printed = pretty(&cities_starting_with(&users, 's'));

        for field in ["\"phone\"", "\"website\"", "\"company\"", "\"zipcode\"", "\"geo\""] {
            assert!(printed.contains(field), "{field} missing from {printed}");
        }
        let reparsed: serde_json::Value = assert_ok!(serde_json::from_str(&printed));
        let original: serde_json::Value = assert_ok!(serde_json::from_str(raw));
        assert_eq!(reparsed, original);
    }

    #[test]
    fn find_returns_the_first_match_only() {
        let users = users();

        assert_eq!(
            assert_some!(first_with_email_containing(&users, ".biz")).id,
            1
        );
        assert_none!(first_with_email_containing(&users, ".gov"));
    }

    #[test]
    fn chained_contacts_are_sorted_by_name() {
        let names: Vec<String> = contacts_in_cities_containing(&users(), 's')
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(
            names,
            vec![
                "Chelsey Dietrich",
                "Dennis Schulist",
                "Ervin Howell",
                "Patricia Lebsack",
            ]
        );
    }

    #[test]
    fn city_counts_group_duplicates() {
        let mut users = users();
        users.push(user(7, "Kurtis Weissnat", "Telly.Hoeger@billy.biz", "Gwenborough"));

        let counts = city_counts(&users);

        assert_eq!(counts["Gwenborough"], 2);
        assert_eq!(counts["South Elvis"], 1);
        assert_eq!(counts.len(), 6);
    }
}
