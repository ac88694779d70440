use projboard_core::{Project, ProjectState, ProjectStatus};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

fn recorder(state: &mut ProjectState) -> Arc<Mutex<Vec<Vec<Project>>>> {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    state.add_listener(move |projects| sink.lock().expect("recorder lock").push(projects));
    calls
}

#[test]
fn add_project_appends_one_active_project_with_fresh_id() {
    let mut state = ProjectState::new();
    let mut seen = HashSet::new();

    for (index, people) in [1_u32, 2, 5, 3].into_iter().enumerate() {
        let before = state.len();
        let id = state.add_project(format!("project {index}"), "some description", people);
        assert_eq!(state.len(), before + 1);
        assert!(seen.insert(id), "id {id} was reused");

        let project = state.get(id).expect("added project should exist");
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.people, people);
    }
    let order = state
        .projects()
        .iter()
        .map(|project| project.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(order, ["project 0", "project 1", "project 2", "project 3"]);
}

#[test]
fn add_project_notifies_with_full_snapshot() {
    let mut state = ProjectState::new();
    let calls = recorder(&mut state);

    state.add_project("Build API", "Backend work", 3);
    state.add_project("Fix bug", "fixit", 1);

    let calls = calls.lock().expect("recorder lock");
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].len(), 1);
    assert_eq!(calls[1].len(), 2);
    assert_eq!(calls[1], state.snapshot());
}

#[test]
fn move_unknown_id_changes_nothing_and_stays_silent() {
    let mut state = ProjectState::new();
    state.add_project("Build API", "Backend work", 3);
    let calls = recorder(&mut state);
    let before = state.snapshot();

    assert!(!state.move_project(Uuid::new_v4(), ProjectStatus::Finished));
    assert_eq!(state.snapshot(), before);
    assert!(calls.lock().expect("recorder lock").is_empty());
}

#[test]
fn move_to_same_status_is_a_silent_no_op() {
    let mut state = ProjectState::new();
    let id = state.add_project("Build API", "Backend work", 3);
    let calls = recorder(&mut state);

    assert!(!state.move_project(id, ProjectStatus::Active));
    assert!(calls.lock().expect("recorder lock").is_empty());
}

#[test]
fn move_changes_only_the_target_and_notifies_once() {
    let mut state = ProjectState::new();
    let moved = state.add_project("Build API", "Backend work", 3);
    let untouched = state.add_project("Fix bug", "fixit", 1);
    let calls = recorder(&mut state);

    assert!(state.move_project(moved, ProjectStatus::Finished));

    let calls = calls.lock().expect("recorder lock");
    assert_eq!(calls.len(), 1);
    let snapshot = &calls[0];
    assert_eq!(snapshot.len(), 2);
    let status_of = |id: Uuid| {
        snapshot
            .iter()
            .find(|project| project.id == id)
            .map(|project| project.status)
    };
    assert_eq!(status_of(moved), Some(ProjectStatus::Finished));
    assert_eq!(status_of(untouched), Some(ProjectStatus::Active));
}

#[test]
fn listeners_receive_independent_copies() {
    let mut state = ProjectState::new();
    let received = Arc::new(Mutex::new(Vec::new()));

    let vandal = Arc::clone(&received);
    state.add_listener(move |mut projects: Vec<Project>| {
        for project in projects.iter_mut() {
            project.title = "tampered".to_string();
            project.status = ProjectStatus::Finished;
        }
        projects.clear();
        vandal.lock().expect("vandal lock").push(projects.len());
    });
    let observer = recorder(&mut state);

    state.add_project("Build API", "Backend work", 3);
    state.add_project("Fix bug", "fixit", 1);

    let observed = observer.lock().expect("recorder lock");
    assert_eq!(observed[1].len(), 2);
    assert!(observed[1].iter().all(|project| project.title != "tampered"));
    assert!(observed[1]
        .iter()
        .all(|project| project.status == ProjectStatus::Active));
    assert_eq!(state.projects()[0].title, "Build API");
}
