use crate::domain::Contact;
use std::cmp::Ordering;

/// Client-side list filter: free-text search plus an optional country code.
#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    pub search: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSortKey {
    Name,
    Email,
    Country,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Search matches name, email, and company case-insensitively and the raw
/// phone as a plain substring. The country filter compares the stored code.
pub fn filter_contacts<'a>(contacts: &'a [Contact], filter: &ContactFilter) -> Vec<&'a Contact> {
    let needle = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    contacts
        .iter()
        .filter(|contact| {
            let matches_search = match (&needle, &filter.search) {
                (Some(lower), Some(raw)) => {
                    contact.name.to_lowercase().contains(lower)
                        || contact.email.to_lowercase().contains(lower)
                        || contact.phone.contains(raw.trim())
                        || contact
                            .company
                            .as_deref()
                            .is_some_and(|company| company.to_lowercase().contains(lower))
                }
                _ => true,
            };

            let matches_country = match filter.country.as_deref() {
                Some(code) => contact.country_code.as_deref() == Some(code),
                None => true,
            };

            matches_search && matches_country
        })
        .collect()
}

pub fn sort_contacts(contacts: &mut [&Contact], key: ContactSortKey, order: SortOrder) {
    contacts.sort_by(|a, b| {
        let ordering = match key {
            ContactSortKey::Name => compare_ci(&a.name, &b.name),
            ContactSortKey::Email => compare_ci(&a.email, &b.email),
            ContactSortKey::Country => compare_ci(
                a.country_name.as_deref().unwrap_or(""),
                b.country_name.as_deref().unwrap_or(""),
            ),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{filter_contacts, sort_contacts, ContactFilter, ContactSortKey, SortOrder};
    use crate::domain::{Contact, ContactId, OwnerId};

    fn contact(name: &str, email: &str, phone: &str, country: Option<(&str, &str)>) -> Contact {
        Contact {
            id: ContactId::new(),
            owner_id: OwnerId::new(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            company: None,
            title: None,
            address: None,
            notes: None,
            country_code: country.map(|(code, _)| code.to_string()),
            country_name: country.map(|(_, name)| name.to_string()),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let contacts = vec![
            contact("Jane Doe", "jane@x.com", "+14155551234", None),
            contact("Bob Ray", "bob@x.com", "+442071234567", None),
        ];
        let filter = ContactFilter {
            search: Some("jane".to_string()),
            country: None,
        };
        let found = filter_contacts(&contacts, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Jane Doe");
    }

    #[test]
    fn search_matches_phone_substring() {
        let contacts = vec![
            contact("Jane Doe", "jane@x.com", "+14155551234", None),
            contact("Bob Ray", "bob@x.com", "+442071234567", None),
        ];
        let filter = ContactFilter {
            search: Some("20712".to_string()),
            country: None,
        };
        let found = filter_contacts(&contacts, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bob Ray");
    }

    #[test]
    fn country_filter_uses_stored_code() {
        let contacts = vec![
            contact("Jane Doe", "jane@x.com", "+14155551234", Some(("US", "United States"))),
            contact("Bob Ray", "bob@x.com", "+442071234567", Some(("GB", "United Kingdom"))),
            contact("Imported", "imp@x.com", "+5551234", None),
        ];
        let filter = ContactFilter {
            search: None,
            country: Some("GB".to_string()),
        };
        let found = filter_contacts(&contacts, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bob Ray");
    }

    #[test]
    fn sort_by_country_descending() {
        let a = contact("A", "a@x.com", "+1", Some(("US", "United States")));
        let b = contact("B", "b@x.com", "+44", Some(("GB", "United Kingdom")));
        let mut refs: Vec<&Contact> = vec![&b, &a];
        sort_contacts(&mut refs, ContactSortKey::Country, SortOrder::Desc);
        assert_eq!(refs[0].name, "A");
        assert_eq!(refs[1].name, "B");
    }
}
