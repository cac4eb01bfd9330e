use rolo_core::domain::{ContactId, InteractionKind, InteractionStatus};
use rolo_store::repo::{ContactNew, InteractionNew, InteractionUpdate};
use rolo_store::Store;

fn seeded_contact(store: &Store, now: i64, owner: rolo_core::domain::OwnerId) -> ContactId {
    store
        .contacts()
        .create(
            now,
            owner,
            ContactNew {
                name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                phone: "+14155551234".to_string(),
                company: None,
                title: None,
                address: None,
                notes: None,
                country_code: None,
                country_name: None,
            },
        )
        .expect("create contact")
        .id
}

fn interaction_input(contact_id: ContactId, occurred_at: i64) -> InteractionNew {
    InteractionNew {
        contact_id,
        kind: InteractionKind::Meeting,
        occurred_at,
        duration_minutes: Some(30),
        summary: "Quarterly review".to_string(),
        notes: None,
        follow_up_at: None,
        follow_up_notes: None,
        status: InteractionStatus::Completed,
    }
}

#[test]
fn interaction_crud_roundtrip() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let now = 1_700_000_000;
    let owner = store.owners().ensure(now, "ada").expect("owner");
    let contact_id = seeded_contact(&store, now, owner.id);

    let interaction = store
        .interactions()
        .create(now, owner.id, interaction_input(contact_id, now))
        .expect("create interaction");

    let fetched = store
        .interactions()
        .get(owner.id, interaction.id)
        .expect("get")
        .expect("exists");
    assert_eq!(fetched.summary, "Quarterly review");
    assert_eq!(fetched.kind, InteractionKind::Meeting);
    assert_eq!(fetched.duration_minutes, Some(30));

    let updated = store
        .interactions()
        .update(
            now + 10,
            owner.id,
            interaction.id,
            InteractionUpdate {
                status: Some(InteractionStatus::NeedsFollowUp),
                follow_up_at: Some(Some(now + 86_400)),
                ..Default::default()
            },
        )
        .expect("update");
    assert_eq!(updated.status, InteractionStatus::NeedsFollowUp);
    assert_eq!(updated.follow_up_at, Some(now + 86_400));

    store
        .interactions()
        .delete(owner.id, interaction.id)
        .expect("delete");
    assert!(store
        .interactions()
        .get(owner.id, interaction.id)
        .expect("get")
        .is_none());
}

#[test]
fn list_for_contact_orders_by_occurred_at_desc() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let now = 1_700_000_000;
    let owner = store.owners().ensure(now, "ada").expect("owner");
    let contact_id = seeded_contact(&store, now, owner.id);

    store
        .interactions()
        .create(now, owner.id, interaction_input(contact_id, now - 100))
        .expect("create");
    store
        .interactions()
        .create(now, owner.id, interaction_input(contact_id, now))
        .expect("create");

    let interactions = store
        .interactions()
        .list_for_contact(owner.id, contact_id)
        .expect("list");
    assert_eq!(interactions.len(), 2);
    assert_eq!(interactions[0].occurred_at, now);
    assert_eq!(interactions[1].occurred_at, now - 100);
}

#[test]
fn deleting_a_contact_removes_its_interactions() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let now = 1_700_000_000;
    let owner = store.owners().ensure(now, "ada").expect("owner");
    let contact_id = seeded_contact(&store, now, owner.id);

    store
        .interactions()
        .create(now, owner.id, interaction_input(contact_id, now))
        .expect("create");

    store
        .contacts()
        .delete(owner.id, contact_id)
        .expect("delete contact");

    let interactions = store
        .interactions()
        .list_for_owner(owner.id)
        .expect("list");
    assert!(interactions.is_empty());
}
