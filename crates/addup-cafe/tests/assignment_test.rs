use addup_cafe::assignment::AssignmentError;
use addup_cafe::error::ErrorKind;
use addup_cafe::identity::Identity;
use addup_cafe::lifecycle::{CafeConfig, CafeSystem};
use addup_cafe::model::{Classroom, SlotId, SlotKey, SubmissionStatus};
use addup_cafe::submission::SubmissionError;
use cafe_store::StoreBacked;

async fn classroom_with_teacher(system: &CafeSystem) -> (Identity, Classroom) {
    let teacher = Identity::new("teacher-1", Some("Ms. Rivera"));
    let classroom = system
        .roster
        .create_classroom(&teacher, "Math 4A")
        .await
        .expect("Failed to create classroom");
    (teacher, classroom)
}

/// An active slot blocks creation into that slot and keeps its restaurant.
#[tokio::test]
async fn test_active_slot_blocks_creation() {
    let system = CafeSystem::new(CafeConfig::default());
    let (teacher, classroom) = classroom_with_teacher(&system).await;
    let slot1 = SlotKey::new(classroom.id.clone(), SlotId::Slot1);

    system
        .assignments
        .create(&teacher, slot1.clone(), "america-cafe")
        .await
        .expect("First assignment should succeed");

    let err = system
        .assignments
        .create(&teacher, slot1.clone(), "italian-trattoria")
        .await
        .unwrap_err();
    assert_eq!(err, AssignmentError::SlotOccupied(SlotId::Slot1));
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let slots = system.assignments.read(&classroom.id).await.unwrap();
    assert_eq!(slots.slot1.unwrap().restaurant_key, "america-cafe");
    assert!(slots.slot2.is_none());

    // The other slot is independent.
    system
        .assignments
        .create(
            &teacher,
            SlotKey::new(classroom.id.clone(), SlotId::Slot2),
            "italian-trattoria",
        )
        .await
        .expect("Slot 2 should be free");
    let slots = system.assignments.read(&classroom.id).await.unwrap();
    assert!(slots.is_active(SlotId::Slot1));
    assert!(slots.is_active(SlotId::Slot2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_and_legacy_restaurants_are_rejected() {
    let system = CafeSystem::new(CafeConfig::default());
    let (teacher, classroom) = classroom_with_teacher(&system).await;
    let slot1 = SlotKey::new(classroom.id.clone(), SlotId::Slot1);

    for key in ["moon-diner", "asian-fusion"] {
        let err = system
            .assignments
            .create(&teacher, slot1.clone(), key)
            .await
            .unwrap_err();
        assert_eq!(err, AssignmentError::InvalidRestaurant(key.to_string()));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
    assert!(system.assignments.fetch(slot1).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_only_the_owner_manages_assignments() {
    let system = CafeSystem::new(CafeConfig::default());
    let (_, classroom) = classroom_with_teacher(&system).await;
    let intruder = Identity::new("teacher-2", None);

    let err = system
        .assignments
        .create(
            &intruder,
            SlotKey::new(classroom.id.clone(), SlotId::Slot1),
            "america-cafe",
        )
        .await
        .unwrap_err();
    assert_eq!(err, AssignmentError::Permission);
    assert_eq!(err.kind(), ErrorKind::Permission);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ensure_submission_is_idempotent() {
    let system = CafeSystem::new(CafeConfig::default());
    let (teacher, classroom) = classroom_with_teacher(&system).await;
    let slot1 = SlotKey::new(classroom.id.clone(), SlotId::Slot1);
    system
        .assignments
        .create(&teacher, slot1.clone(), "america-cafe")
        .await
        .unwrap();

    let key = slot1.submission(Identity::new("student-1", None).uid);
    let first = system.submissions.ensure(key.clone()).await.unwrap();
    assert_eq!(first.status, SubmissionStatus::InProgress);
    assert_eq!((first.questions_answered, first.correct_count), (0, 0));

    system.submissions.record_answer(key.clone(), false).await.unwrap();
    let again = system.submissions.ensure(key.clone()).await.unwrap();
    assert_eq!(again.questions_answered, 1);
    assert_eq!(again.status, SubmissionStatus::Submitted);

    let all = system.submissions.list_for_slot(slot1).await.unwrap();
    assert_eq!(all.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ensure_requires_an_active_slot() {
    let system = CafeSystem::new(CafeConfig::default());
    let (_, classroom) = classroom_with_teacher(&system).await;

    let key = SlotKey::new(classroom.id.clone(), SlotId::Slot2)
        .submission(Identity::new("student-1", None).uid);
    let err = system.submissions.ensure(key.clone()).await.unwrap_err();
    assert_eq!(err, SubmissionError::AssignmentInactive);
    assert!(system.submissions.fetch(key).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

/// Deleting a slot sweeps its submissions; the slot is then absent and no new
/// submission can be opened against it.
#[tokio::test]
async fn test_delete_assignment_removes_its_submissions() {
    let system = CafeSystem::new(CafeConfig::default());
    let (teacher, classroom) = classroom_with_teacher(&system).await;
    let slot1 = SlotKey::new(classroom.id.clone(), SlotId::Slot1);
    let slot2 = SlotKey::new(classroom.id.clone(), SlotId::Slot2);
    for slot in [&slot1, &slot2] {
        system
            .assignments
            .create(&teacher, slot.clone(), "america-cafe")
            .await
            .unwrap();
    }

    for student in ["s1", "s2", "s3"] {
        let uid = Identity::new(student, None).uid;
        system.submissions.ensure(slot1.submission(uid.clone())).await.unwrap();
        system.submissions.ensure(slot2.submission(uid)).await.unwrap();
    }

    let report = system.assignments.delete(&teacher, slot1.clone()).await.unwrap();
    assert_eq!(report.completed, 3);
    assert!(report.is_clean());

    assert!(system.submissions.list_for_slot(slot1.clone()).await.unwrap().is_empty());
    assert_eq!(system.submissions.list_for_slot(slot2).await.unwrap().len(), 3);
    assert!(system.assignments.read(&classroom.id).await.unwrap().slot1.is_none());

    let err = system
        .submissions
        .ensure(slot1.submission(Identity::new("s1", None).uid))
        .await
        .unwrap_err();
    assert_eq!(err, SubmissionError::AssignmentInactive);
    assert_eq!(err.kind(), ErrorKind::Conflict);

    // The slot can be reused once deleted.
    system
        .assignments
        .create(&teacher, slot1, "italian-trattoria")
        .await
        .expect("Deleted slot should accept a new assignment");

    system.shutdown().await.unwrap();
}
