use addup_cafe::clients::{AssignmentClient, RosterClient, SubmissionClient};
use addup_cafe::identity::Identity;
use addup_cafe::lifecycle::{CafeConfig, CafeSystem, Stores};
use addup_cafe::model::{Classroom, SlotId, SlotKey, SubmissionStatus, UserId};
use addup_cafe::progress::{PollState, ProgressPoller, ProgressView, SlotProgress};
use addup_cafe::roster::RosterError;
use cafe_store::mock::MockStore;
use cafe_store::StoreError;
use std::time::Duration;
use tokio::sync::watch;

fn teacher() -> Identity {
    Identity::new("teacher-1", Some("Ms. Rivera"))
}

/// Classroom with slot 1 on `america-cafe` and two joined students.
async fn seeded(system: &CafeSystem) -> Classroom {
    let classroom = system
        .roster
        .create_classroom(&teacher(), "Math 4A")
        .await
        .unwrap();
    system
        .assignments
        .create(
            &teacher(),
            SlotKey::new(classroom.id.clone(), SlotId::Slot1),
            "america-cafe",
        )
        .await
        .unwrap();
    for (uid, name) in [("s1", "Ana"), ("s2", "Ben")] {
        system
            .roster
            .join_classroom(&Identity::new(uid, Some(name)), classroom.code.as_str())
            .await
            .unwrap();
    }
    classroom
}

async fn wait_for(
    updates: &mut watch::Receiver<PollState>,
    done: impl Fn(&PollState) -> bool,
) -> PollState {
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            {
                let state = updates.borrow_and_update();
                if done(&state) {
                    return state.clone();
                }
            }
            updates.changed().await.expect("Poller stopped publishing");
        }
    })
    .await
    .expect("Timed out waiting for the poller")
}

#[tokio::test]
async fn test_snapshot_covers_partial_data() {
    let system = CafeSystem::new(CafeConfig::default());
    let classroom = seeded(&system).await;

    let key = SlotKey::new(classroom.id.clone(), SlotId::Slot1).submission(UserId::new("s1"));
    system.submissions.ensure(key.clone()).await.unwrap();
    system.submissions.record_answer(key, true).await.unwrap();

    let snapshot = system.progress.snapshot(&teacher(), &classroom.id).await.unwrap();
    assert_eq!(snapshot.classroom.id, classroom.id);
    assert!(snapshot.slots.slot2.is_none());

    let names: Vec<_> = snapshot.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["Ana", "Ben"]);

    let ana = snapshot.row(&UserId::new("s1")).unwrap();
    assert_eq!(
        ana.slot1,
        SlotProgress::Progress {
            correct: 1,
            answered: 1,
            status: SubmissionStatus::Submitted
        }
    );
    assert_eq!(ana.slot1.to_string(), "1/1");
    assert_eq!(ana.slot2, SlotProgress::SlotInactive);

    let ben = snapshot.row(&UserId::new("s2")).unwrap();
    assert_eq!(ben.slot1, SlotProgress::NotStarted);
    assert_eq!(ben.slot2, SlotProgress::SlotInactive);

    let err = system
        .progress
        .snapshot(&Identity::new("teacher-2", None), &classroom.id)
        .await
        .unwrap_err();
    assert_eq!(err, RosterError::Permission);

    system.shutdown().await.unwrap();
}

/// A failed submission scan blanks that slot only.
#[tokio::test]
async fn test_unreadable_slot_does_not_fail_snapshot() {
    let config = CafeConfig::default();
    let (stores, handles) = Stores::spawn(&config);
    let submissions = SubmissionClient::new(&stores);
    let assignments = AssignmentClient::new(&stores, submissions.clone());
    let roster = RosterClient::new(&stores, assignments.clone(), submissions, config.roster_policy());

    let classroom = roster.create_classroom(&teacher(), "Math 4A").await.unwrap();
    assignments
        .create(
            &teacher(),
            SlotKey::new(classroom.id.clone(), SlotId::Slot1),
            "america-cafe",
        )
        .await
        .unwrap();
    for uid in ["s1", "s2"] {
        roster
            .join_classroom(&Identity::new(uid, None), classroom.code.as_str())
            .await
            .unwrap();
    }

    let failing = MockStore::new();
    failing
        .expect_list(SlotKey::new(classroom.id.clone(), SlotId::Slot1))
        .return_err(StoreError::Timeout(Duration::from_secs(2)));
    let view = ProgressView::new(&Stores {
        submissions: failing.client(),
        ..stores.clone()
    });

    let snapshot = view.snapshot(&teacher(), &classroom.id).await.unwrap();
    assert_eq!(snapshot.rows.len(), 2);
    for row in &snapshot.rows {
        assert_eq!(row.slot1, SlotProgress::Unavailable);
        assert_eq!(row.slot2, SlotProgress::SlotInactive);
    }
    failing.verify();

    let healthy = ProgressView::new(&stores)
        .snapshot(&teacher(), &classroom.id)
        .await
        .unwrap();
    assert_eq!(healthy.rows[0].slot1, SlotProgress::NotStarted);

    drop((view, roster, assignments, stores));
    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_poller_publishes_and_reconciles_local_edits() {
    let system = CafeSystem::new(CafeConfig {
        poll_interval: Duration::from_millis(300),
        ..CafeConfig::default()
    });
    let classroom = seeded(&system).await;

    let poller = system.watch_classroom(teacher(), classroom.id.clone());
    let mut updates = poller.subscribe();

    let first = wait_for(&mut updates, |state| state.snapshot.is_some()).await;
    assert!(first.error.is_none());
    assert_eq!(first.snapshot.unwrap().rows.len(), 2);

    // Optimistic removal shows immediately...
    poller.apply_local(|snapshot| snapshot.remove_student(&UserId::new("s1")));
    let edited = poller.latest();
    assert!(edited.snapshot.as_ref().unwrap().row(&UserId::new("s1")).is_none());

    // ...and the next poll restores what storage says.
    let polls = edited.polls;
    poller.refresh();
    let reconciled = wait_for(&mut updates, |state| state.polls > polls).await;
    assert!(reconciled
        .snapshot
        .unwrap()
        .row(&UserId::new("s1"))
        .is_some());

    // New progress appears on a later poll.
    let key = SlotKey::new(classroom.id.clone(), SlotId::Slot1).submission(UserId::new("s2"));
    system.submissions.ensure(key.clone()).await.unwrap();
    system.submissions.record_answer(key, false).await.unwrap();
    poller.refresh();
    let updated = wait_for(&mut updates, |state| {
        state
            .snapshot
            .as_ref()
            .and_then(|snapshot| snapshot.row(&UserId::new("s2")))
            .is_some_and(|row| row.slot1.to_string() == "0/1")
    })
    .await;
    assert!(updated.error.is_none());

    poller.cancel().await;
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancelled_poller_stops_publishing() {
    let system = CafeSystem::new(CafeConfig::default());
    let classroom = seeded(&system).await;

    let poller = ProgressPoller::start(
        system.progress.clone(),
        teacher(),
        classroom.id.clone(),
        Duration::from_millis(10),
    );
    let mut updates = poller.subscribe();
    wait_for(&mut updates, |state| state.polls >= 2).await;

    poller.cancel().await;
    let settled = updates.borrow_and_update().polls;
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(updates.borrow().polls, settled);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_poller_reports_errors_without_stopping() {
    let system = CafeSystem::new(CafeConfig::default());
    let classroom = seeded(&system).await;

    let poller = ProgressPoller::start(
        system.progress.clone(),
        Identity::new("teacher-2", None),
        classroom.id.clone(),
        Duration::from_millis(10),
    );
    let mut updates = poller.subscribe();
    let state = wait_for(&mut updates, |state| state.polls >= 2).await;
    assert_eq!(state.error, Some(RosterError::Permission));
    assert!(state.snapshot.is_none());

    drop(poller);
    system.shutdown().await.unwrap();
}
