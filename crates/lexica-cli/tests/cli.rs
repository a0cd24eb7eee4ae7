//! CLI integration tests, driving the compiled binary against a temporary
//! database.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn lexica(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lexica").unwrap();
    cmd.arg("--db-path").arg(db);
    cmd
}

#[test]
fn add_then_query_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("concepts.db");
    let concepts = dir.path().join("concepts1.txt");
    fs::write(&concepts, "red car\nblue car\ncar\n").unwrap();

    lexica(&db)
        .arg("add_concepts")
        .arg(&concepts)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 3 new concepts"));

    lexica(&db)
        .arg("query_input")
        .arg("the red car and the blue car")
        .assert()
        .success()
        .stdout(predicate::str::contains("Matches: Blue Car, Car, Red Car"));
}

#[test]
fn second_ingestion_adds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("concepts.db");
    let concepts = dir.path().join("concepts1.txt");
    fs::write(&concepts, "red car\n").unwrap();

    lexica(&db).arg("add_concepts").arg(&concepts).assert().success();

    lexica(&db)
        .arg("add_concepts")
        .arg(&concepts)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 0 new concepts"));
}

#[test]
fn add_concepts_dir_sums_matching_files() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("concepts.db");
    fs::write(dir.path().join("animal_concepts.txt"), "brown bear\n").unwrap();
    fs::write(dir.path().join("plant_concepts.txt"), "oak\ntall oak\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "green tractor\n").unwrap();

    lexica(&db)
        .arg("add_concepts_dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 3 new concepts"));
}

#[test]
fn missing_concept_file_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("concepts.db");

    lexica(&db)
        .arg("add_concepts")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn malformed_concept_file_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("concepts.db");
    let concepts = dir.path().join("concepts1.txt");
    fs::write(&concepts, "big red car\n").unwrap();

    lexica(&db)
        .arg("add_concepts")
        .arg(&concepts)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "at most one adjective plus one root",
        ));
}

#[test]
fn query_before_any_ingestion_reports_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("concepts.db");

    lexica(&db)
        .arg("query_input")
        .arg("a red car")
        .assert()
        .success()
        .stdout(predicate::str::contains("No concepts added, cannot query"));
}

#[test]
fn query_input_file_unions_lines() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("concepts.db");
    let concepts = dir.path().join("concepts1.txt");
    fs::write(&concepts, "asian people\npeople\ncatalonia\n").unwrap();
    let questions = dir.path().join("questions.txt");
    fs::write(
        &questions,
        "How many East Asian people live in Catalonia?\nnothing relevant here\n",
    )
    .unwrap();

    lexica(&db).arg("add_concepts").arg(&concepts).assert().success();

    lexica(&db)
        .arg("query_input_file")
        .arg(&questions)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Matches: Asian People, Catalonia, People",
        ));
}

#[test]
fn unmatched_sentence_reports_none() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("concepts.db");
    let concepts = dir.path().join("concepts1.txt");
    fs::write(&concepts, "red car\n").unwrap();

    lexica(&db).arg("add_concepts").arg(&concepts).assert().success();

    lexica(&db)
        .arg("query_input")
        .arg("completely unrelated sentence")
        .assert()
        .success()
        .stdout(predicate::str::contains("Matches: none"));
}

#[test]
fn clean_reports_state_both_times() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("concepts.db");
    let concepts = dir.path().join("concepts1.txt");
    fs::write(&concepts, "red car\n").unwrap();

    lexica(&db).arg("add_concepts").arg(&concepts).assert().success();

    lexica(&db)
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database cleaned"));

    lexica(&db)
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean"));
}
