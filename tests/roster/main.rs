//! Integration tests for the roster repository (CRUD, ranking, undo, search, sort).


use fixtures::{alice, assert_top_is_max, bob, class, empty, ids};
use student_roster::{RosterError, SortMode, Student};

#[test]
fn unique_adds_grow_collection_and_duplicates_do_not() {
    let mut repo = empty();
    let mut successes = 0;

    for (id, grade) in [("A", 1), ("B", 2), ("A", 3), ("C", 4), ("B", 5), ("c", 6)] {
        match repo.add(Student::new(id, "Name", 20, grade)) {
            Ok(()) => successes += 1,
            Err(RosterError::DuplicateId { id: dup }) => assert_eq!(dup, id),
            Err(other) => panic!("unexpected error: {other}"),
        }
        assert_eq!(repo.get_all().len(), successes);
    }

    assert_eq!(successes, 4);
    assert_eq!(ids(&repo), vec!["A", "B", "C", "c"]);
}

#[test]
fn top_student_scenario() {
    let mut repo = empty();
    repo.add(alice()).unwrap();
    repo.add(bob()).unwrap();
    assert_eq!(repo.top_student().unwrap().id, "S2");

    repo.delete("S2");
    assert_eq!(repo.top_student().unwrap().id, "S1");

    repo.undo_delete();
    assert_eq!(repo.top_student().unwrap().id, "S2");
}

#[test]
fn top_student_is_maximum_after_every_mutation() {
    let mut repo = class();
    assert_top_is_max(&repo);

    repo.update("S5", "eve", 23, 100).unwrap();
    assert_top_is_max(&repo);
    assert_eq!(repo.top_student().unwrap().id, "S5");

    repo.delete("S5");
    assert_top_is_max(&repo);

    repo.sort(SortMode::NameAsc);
    assert_top_is_max(&repo);

    repo.update("S2", "Bob", 21, 10).unwrap();
    assert_top_is_max(&repo);
    assert_eq!(repo.top_student().unwrap().id, "S4");

    repo.undo_delete();
    assert_top_is_max(&repo);
    assert_eq!(repo.top_student().unwrap().id, "S5");

    for id in ["S1", "S2", "S3", "S4", "S5", "S6"] {
        repo.delete(id);
        assert_top_is_max(&repo);
    }
    assert!(repo.top_student().is_none());
}

#[test]
fn delete_then_undo_round_trip() {
    let mut repo = class();
    let before_len = repo.get_all().len();
    let original = repo.get_by_id("S3").cloned().unwrap();

    repo.delete("S3");
    let restored = repo.undo_delete().unwrap();

    assert_eq!(restored, original);
    assert_eq!(repo.get_all().len(), before_len);
    assert_eq!(repo.get_by_id("S3"), Some(&original));
}

#[test]
fn undo_on_empty_stack_returns_none() {
    let mut repo = class();
    let before = repo.get_all();

    assert!(repo.undo_delete().is_none());
    assert_eq!(repo.get_all(), before);
}

#[test]
fn undo_never_skips_newer_deletions() {
    let mut repo = class();
    for id in ["S1", "S4", "S2"] {
        repo.delete(id);
    }

    let order: Vec<_> = std::iter::from_fn(|| repo.undo_delete())
        .map(|s| s.id)
        .collect();
    assert_eq!(order, vec!["S2", "S4", "S1"]);
}

#[test]
fn update_keeps_identity_and_reports_missing() {
    let mut repo = class();
    repo.update("S1", "Alicia", 30, 42).unwrap();
    assert_eq!(
        repo.get_by_id("S1"),
        Some(&Student::new("S1", "Alicia", 30, 42))
    );

    let err = repo.update("missing", "X", 1, 1).unwrap_err();
    assert!(matches!(err, RosterError::NotFound { .. }));
}

#[test]
fn search_scenario() {
    let mut repo = empty();
    repo.add(alice()).unwrap();
    repo.add(bob()).unwrap();

    assert_eq!(repo.search("ali"), Some(&alice()));
    assert_eq!(repo.search("ALI"), Some(&alice()));
    assert_eq!(repo.search("s2"), Some(&bob()));
    assert!(repo.search("zz").is_none());
}

#[test]
fn grade_desc_is_non_increasing() {
    let mut repo = class();
    repo.sort(SortMode::GradeDesc);

    let grades: Vec<_> = repo.get_all().iter().map(|s| s.grade).collect();
    assert!(grades.windows(2).all(|w| w[0] >= w[1]), "{grades:?}");
}

#[test]
fn name_asc_is_case_insensitive() {
    let mut repo = class();
    repo.sort(SortMode::NameAsc);

    let names: Vec<_> = repo
        .get_all()
        .into_iter()
        .map(|s| s.name.to_lowercase())
        .collect();
    assert!(names.windows(2).all(|w| w[0] <= w[1]), "{names:?}");
    assert_eq!(ids(&repo), vec!["S1", "S2", "S3", "S4", "S5", "S6"]);
}

#[test]
fn sort_by_textual_mode_names() {
    let mut repo = class();

    assert!(repo.sort_by_name("age_asc"));
    let ages: Vec<_> = repo.get_all().iter().map(|s| s.age).collect();
    assert!(ages.windows(2).all(|w| w[0] <= w[1]));

    let before = repo.get_all();
    assert!(!repo.sort_by_name("favourite_colour"));
    assert_eq!(repo.get_all(), before);
}

#[test]
fn sort_does_not_touch_undo_stack() {
    let mut repo = class();
    repo.delete("S6");
    repo.sort(SortMode::AgeDesc);

    assert_eq!(repo.undo_depth(), 1);
    assert_eq!(repo.undo_delete().unwrap().id, "S6");
}
