mod common;

use common::{spawn_command, stderr_of, stdout_of};

fn schedule(store: &str, rest: &[&str]) -> std::process::Output {
    let mut args = vec!["schedule", "--store", store];
    args.extend_from_slice(rest);
    spawn_command(&args)
}

#[test]
fn schedule_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");
    let store = store.to_str().unwrap();

    // A fresh store lists the seeded day
    let output = schedule(store, &["list"]);
    assert!(output.status.success(), "{}", stderr_of(&output));
    let listing = stdout_of(&output);
    assert!(listing.contains("Morning routine"));
    assert_eq!(listing.lines().count(), 5);

    // Add an item and find its id in the listing
    let output = schedule(store, &["add", "Reading", "--time", "17:00"]);
    assert!(output.status.success());
    let listing = stdout_of(&output);
    let reading_line = listing
        .lines()
        .find(|line| line.contains("Reading"))
        .expect("added item should be listed");
    let id = reading_line
        .rsplit('(')
        .next()
        .unwrap()
        .trim_end_matches(')')
        .trim()
        .to_string();

    // Items are ordered by time of day, so 17:00 lists last
    assert!(listing.lines().last().unwrap().contains("Reading"));

    // Toggle it done
    let output = schedule(store, &["done", &id]);
    assert!(output.status.success());
    let listing = stdout_of(&output);
    assert!(
        listing
            .lines()
            .find(|line| line.contains("Reading"))
            .unwrap()
            .contains("[x]")
    );

    // Remove it
    let output = schedule(store, &["remove", &id]);
    assert!(output.status.success());
    assert!(!stdout_of(&output).contains("Reading"));

    // Reset returns to the seeded day
    let output = schedule(store, &["reset"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Morning routine"));
}

#[test]
fn schedule_blank_title_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");
    let store = store.to_str().unwrap();

    let output = schedule(store, &["add", "   "]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("nothing added"));
}

#[test]
fn schedule_unknown_id_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");
    let store = store.to_str().unwrap();

    let output = schedule(store, &["done", "zzzzzzzz"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("no unique item"));
}

#[test]
fn schedule_survives_corrupt_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");
    std::fs::write(&store, "{{{ not json").unwrap();

    let output = schedule(store.to_str().unwrap(), &["list"]);
    assert!(
        output.status.success(),
        "a corrupt store must fall back, not fail: {}",
        stderr_of(&output)
    );
    assert!(stdout_of(&output).contains("Morning routine"));
}
