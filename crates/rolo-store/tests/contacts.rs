use rolo_store::error::StoreErrorKind;
use rolo_store::repo::{ContactNew, ContactUpdate};
use rolo_store::Store;

fn contact_input(name: &str, email: &str, phone: &str) -> ContactNew {
    ContactNew {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        company: None,
        title: None,
        address: None,
        notes: None,
        country_code: Some("US".to_string()),
        country_name: Some("United States".to_string()),
    }
}

#[test]
fn contact_crud_roundtrip() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let now = 1_700_000_000;
    let owner = store.owners().ensure(now, "ada").expect("owner");

    let contact = store
        .contacts()
        .create(
            now,
            owner.id,
            contact_input("Jane Doe", "jane@x.com", "+14155551234"),
        )
        .expect("create contact");

    let fetched = store
        .contacts()
        .get(owner.id, contact.id)
        .expect("get contact")
        .expect("contact exists");
    assert_eq!(fetched.name, "Jane Doe");
    assert_eq!(fetched.phone, "+14155551234");
    assert_eq!(fetched.country_code.as_deref(), Some("US"));

    let updated = store
        .contacts()
        .update(
            now + 10,
            owner.id,
            contact.id,
            ContactUpdate {
                name: Some("Jane Ray".to_string()),
                company: Some(Some("Acme".to_string())),
                ..Default::default()
            },
        )
        .expect("update contact");
    assert_eq!(updated.name, "Jane Ray");
    assert_eq!(updated.company.as_deref(), Some("Acme"));
    assert_eq!(updated.updated_at, now + 10);
    assert_eq!(updated.created_at, now);

    store
        .contacts()
        .delete(owner.id, contact.id)
        .expect("delete contact");
    let missing = store.contacts().get(owner.id, contact.id).expect("get");
    assert!(missing.is_none());
}

#[test]
fn list_for_owner_is_newest_first() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let now = 1_700_000_000;
    let owner = store.owners().ensure(now, "ada").expect("owner");

    store
        .contacts()
        .create(now, owner.id, contact_input("First", "a@x.com", "+15550001"))
        .expect("create");
    store
        .contacts()
        .create(
            now + 5,
            owner.id,
            contact_input("Second", "b@x.com", "+15550002"),
        )
        .expect("create");

    let contacts = store.contacts().list_for_owner(owner.id).expect("list");
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name, "Second");
    assert_eq!(contacts[1].name, "First");
}

#[test]
fn records_are_invisible_across_owners() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let now = 1_700_000_000;
    let ada = store.owners().ensure(now, "ada").expect("owner");
    let grace = store.owners().ensure(now, "grace").expect("owner");

    let contact = store
        .contacts()
        .create(now, ada.id, contact_input("Jane Doe", "jane@x.com", "+15550001"))
        .expect("create");

    assert!(store
        .contacts()
        .get(grace.id, contact.id)
        .expect("get")
        .is_none());
    assert!(store.contacts().list_for_owner(grace.id).expect("list").is_empty());

    let err = store
        .contacts()
        .update(
            now + 1,
            grace.id,
            contact.id,
            ContactUpdate {
                name: Some("Stolen".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::NotFound);

    let err = store.contacts().delete(grace.id, contact.id).unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::NotFound);

    // Still intact for the real owner.
    let fetched = store
        .contacts()
        .get(ada.id, contact.id)
        .expect("get")
        .expect("exists");
    assert_eq!(fetched.name, "Jane Doe");
}

#[test]
fn create_rejects_missing_required_fields() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let now = 1_700_000_000;
    let owner = store.owners().ensure(now, "ada").expect("owner");

    let err = store
        .contacts()
        .create(now, owner.id, contact_input("", "a@x.com", "+15550001"))
        .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::Core);

    let err = store
        .contacts()
        .create(now, owner.id, contact_input("Jane", "jane@x.com", ""))
        .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::Core);

    assert!(store.contacts().list_for_owner(owner.id).expect("list").is_empty());
}

#[test]
fn owner_ensure_is_idempotent() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let first = store.owners().ensure(1_700_000_000, "ada").expect("owner");
    let second = store.owners().ensure(1_700_000_100, "ada").expect("owner");
    assert_eq!(first.id, second.id);
    assert_eq!(second.created_at, first.created_at);
}
