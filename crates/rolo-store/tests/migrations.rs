use rolo_store::Store;
use tempfile::TempDir;

#[test]
fn migrations_run_and_report_version() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    assert!(store.schema_version().expect("version") >= 1);
}

#[test]
fn migrations_are_idempotent() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("first run");
    store.migrate().expect("second run");
}

#[test]
fn migrated_file_store_reopens() {
    let temp = TempDir::new().expect("tempdir");
    let path = rolo_store::paths::db_path_in(temp.path());

    {
        let store = Store::open(&path).expect("open");
        store.migrate().expect("migrate");
        let owner = store.owners().ensure(1_700_000_000, "ada").expect("owner");
        assert_eq!(owner.handle, "ada");
    }

    let store = Store::open(&path).expect("reopen");
    store.migrate().expect("migrate again");
    let owner = store
        .owners()
        .get_by_handle("ada")
        .expect("lookup")
        .expect("exists");
    assert_eq!(owner.handle, "ada");
}
