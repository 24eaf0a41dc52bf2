use addup_cafe::identity::{Identity, IdentityProvider, LocalIdentity};
use addup_cafe::lifecycle::{CafeConfig, CafeSystem};
use addup_cafe::model::{Role, SlotId, SlotKey, SubmissionStatus};
use addup_cafe::order_session::{Phase, Verdict};
use addup_cafe::play::{PlaySession, Recording};
use addup_cafe::progress::SlotProgress;
use cafe_store::StoreBacked;
use std::time::Duration;

/// Classroom → join → assignment → correct answer → `1/1` in the teacher view.
#[tokio::test]
async fn test_classroom_to_teacher_view() {
    let system = CafeSystem::new(CafeConfig {
        poll_interval: Duration::from_millis(50),
        ..CafeConfig::default()
    });
    let session = LocalIdentity::new();

    // Teacher creates the classroom.
    session.sign_in(Identity::new("teacher-1", Some("Ms. Rivera")));
    let teacher = session.require().unwrap();
    system
        .profiles
        .register(&teacher, Role::Teacher, "Ms. Rivera")
        .await
        .unwrap();
    let classroom = system
        .roster
        .create_classroom(&teacher, "Math 4A")
        .await
        .expect("Failed to create classroom");
    assert_eq!(classroom.code.as_str().len(), 6);

    // Student joins with the code.
    session.sign_in(Identity::new("student-1", Some("Sam")));
    let student = session.require().unwrap();
    let membership = system
        .roster
        .join_classroom(&student, classroom.code.as_str())
        .await
        .expect("Failed to join");
    let mirror = system
        .roster
        .my_classrooms(&student)
        .await
        .unwrap()
        .pop()
        .expect("Joined classroom missing")
        .joined;
    assert_eq!(mirror.joined_at, membership.joined_at);
    assert_eq!(mirror.classroom_id, classroom.id);
    let members = system.roster.members(&teacher, &classroom.id).await.unwrap();
    assert_eq!(members, vec![membership]);

    // Teacher assigns slot 1.
    let slot1 = SlotKey::new(classroom.id.clone(), SlotId::Slot1);
    system
        .assignments
        .create(&teacher, slot1.clone(), "america-cafe")
        .await
        .expect("Failed to create assignment");
    let poller = system.watch_classroom(teacher.clone(), classroom.id.clone());

    // Student opens the assignment: an empty submission appears.
    let mut play = PlaySession::open_assignment(
        &student,
        &classroom.id,
        SlotId::Slot1,
        &system.assignments,
        &system.submissions,
    )
    .await
    .expect("Failed to open assignment");
    let key = slot1.submission(student.uid.clone());
    assert_eq!(play.submission_key(), Some(&key));
    let opened = system.submissions.fetch(key.clone()).await.unwrap().unwrap();
    assert_eq!(opened.status, SubmissionStatus::InProgress);
    assert_eq!((opened.questions_answered, opened.correct_count), (0, 0));

    // A $12.50 order answered with "12.50".
    let order = play.order_mut();
    order.dismiss_greeting(true).unwrap();
    order.add_item("america-cafe-4").unwrap();
    order.place_order().unwrap();
    assert_eq!(order.total().to_string(), "12.50");
    order.set_answer("12.50").unwrap();

    let report = play.check_answer().await.unwrap();
    assert_eq!(report.verdict, Verdict::Correct);
    let Recording::Saved(saved) = &report.recording else {
        panic!("Answer was not saved: {:?}", report.recording);
    };
    assert_eq!(saved.status, SubmissionStatus::Submitted);
    assert_eq!((saved.questions_answered, saved.correct_count), (1, 1));
    assert_eq!(play.order().phase(), Phase::Result);
    drop(play);

    // The teacher's next poll shows 1/1.
    let mut updates = poller.subscribe();
    let cell = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            let cell = updates
                .borrow_and_update()
                .snapshot
                .as_ref()
                .and_then(|snapshot| snapshot.row(&student.uid).map(|row| row.slot1));
            if let Some(cell @ SlotProgress::Progress { .. }) = cell {
                return cell;
            }
            updates.changed().await.unwrap();
        }
    })
    .await
    .expect("Progress never reached the teacher view");
    assert_eq!(cell.to_string(), "1/1");

    poller.cancel().await;
    system.shutdown().await.unwrap();
}

/// Wrong answers leave the submission alone; quitting counts as incorrect.
#[tokio::test]
async fn test_wrong_answer_then_reveal() {
    let system = CafeSystem::new(CafeConfig::default());
    let teacher = Identity::new("teacher-1", None);
    let student = Identity::new("student-1", None);
    let classroom = system
        .roster
        .create_classroom(&teacher, "Math 4A")
        .await
        .unwrap();
    let slot2 = SlotKey::new(classroom.id.clone(), SlotId::Slot2);
    system
        .assignments
        .create(&teacher, slot2.clone(), "thai-kitchen")
        .await
        .unwrap();

    let mut play = PlaySession::open_assignment(
        &student,
        &classroom.id,
        SlotId::Slot2,
        &system.assignments,
        &system.submissions,
    )
    .await
    .unwrap();
    let order = play.order_mut();
    order.dismiss_greeting(true).unwrap();
    let first = order.menu().items[0].id;
    order.add_item(first).unwrap();
    order.add_item(first).unwrap();
    order.place_order().unwrap();
    let total = order.total();
    order.set_answer("0.01").unwrap();

    let report = play.check_answer().await.unwrap();
    assert_eq!(report.verdict, Verdict::Incorrect);
    assert_eq!(report.recording, Recording::NotRecorded);
    assert_eq!(play.order().phase(), Phase::Placed);

    let revealed = play.quit_and_reveal().await.unwrap();
    assert_eq!(revealed.total, total);
    let Recording::Saved(saved) = revealed.recording else {
        panic!("Reveal was not saved");
    };
    assert_eq!((saved.questions_answered, saved.correct_count), (1, 0));
    assert_eq!(saved.status, SubmissionStatus::Submitted);

    // Another attempt keeps accumulating on the same record.
    play.order_mut().place_another_order().unwrap();
    assert_eq!(play.order().phase(), Phase::Menu);
    assert_eq!(play.order().visible_items().len(), 1);
    play.order_mut().add_item(first).unwrap();
    play.order_mut().place_order().unwrap();
    let again = play.order().total().to_string();
    play.order_mut().set_answer(again).unwrap();
    let report = play.check_answer().await.unwrap();
    let Recording::Saved(saved) = report.recording else {
        panic!("Second answer was not saved");
    };
    assert_eq!((saved.questions_answered, saved.correct_count), (2, 1));

    drop(play);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_open_assignment_requires_a_slot() {
    let system = CafeSystem::new(CafeConfig::default());
    let teacher = Identity::new("teacher-1", None);
    let classroom = system
        .roster
        .create_classroom(&teacher, "Math 4A")
        .await
        .unwrap();

    let err = PlaySession::open_assignment(
        &Identity::new("student-1", None),
        &classroom.id,
        SlotId::Slot1,
        &system.assignments,
        &system.submissions,
    )
    .await
    .err()
    .expect("Empty slot should not open");
    assert_eq!(err.kind(), addup_cafe::error::ErrorKind::NotFound);

    system.shutdown().await.unwrap();
}
