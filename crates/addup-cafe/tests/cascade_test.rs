use addup_cafe::clients::{AssignmentClient, RosterClient, SubmissionClient};
use addup_cafe::error::ErrorKind;
use addup_cafe::identity::Identity;
use addup_cafe::lifecycle::{CafeConfig, Stores};
use addup_cafe::model::{
    AssignmentSlot, Classroom, ClassroomId, CodeIndexEntry, JoinCode, JoinedKey, MemberKey, Membership,
    SlotId, SlotKey, SlotKind, Submission, UserId,
};
use addup_cafe::roster::{RosterError, RosterPolicy, CODE_ALPHABET};
use cafe_store::mock::MockStore;
use cafe_store::StoreError;
use chrono::Utc;

/// Store failures are injected by swapping one collection for a mock and
/// wiring the clients by hand.
fn clients(stores: &Stores, policy: RosterPolicy) -> (RosterClient, AssignmentClient) {
    let submissions = SubmissionClient::new(stores);
    let assignments = AssignmentClient::new(stores, submissions.clone());
    let roster = RosterClient::new(stores, assignments.clone(), submissions, policy);
    (roster, assignments)
}

fn teacher() -> Identity {
    Identity::new("teacher-1", None)
}

async fn seed_classroom(stores: &Stores, code: &str) -> Classroom {
    let classroom = Classroom {
        id: ClassroomId("room-1".into()),
        name: "Math 4A".into(),
        code: JoinCode::normalize(code).unwrap(),
        created_at: Utc::now(),
        teacher_id: teacher().uid,
    };
    stores
        .classrooms
        .create(classroom.id.clone(), classroom.clone())
        .await
        .unwrap();
    classroom
}

fn active_slot() -> AssignmentSlot {
    AssignmentSlot {
        kind: SlotKind::Assignment,
        restaurant_key: "america-cafe".into(),
        restaurant_name: "America Cafe".into(),
        created_at: Utc::now(),
        is_active: true,
    }
}

async fn shutdown(handles: Vec<tokio::task::JoinHandle<()>>) {
    for handle in handles {
        handle.await.unwrap();
    }
}

/// A failed code-index delete is reported, not returned; the classroom is gone.
#[tokio::test]
async fn test_classroom_delete_survives_failed_code_cleanup() {
    let (mut stores, handles) = Stores::spawn(&CafeConfig::default());
    let classroom = seed_classroom(&stores, "ABC234").await;

    let codes = MockStore::<CodeIndexEntry>::new();
    codes
        .expect_delete(classroom.code.clone())
        .return_err(StoreError::Backend("disk full".into()));
    stores.codes = codes.client();

    let (roster, assignments) = clients(&stores, RosterPolicy::default());
    let report = roster.delete_classroom(&teacher(), &classroom.id).await.unwrap();

    assert_eq!(report.failed, vec!["classroomCodes/ABC234".to_string()]);
    assert!(stores.classrooms.get(classroom.id.clone()).await.unwrap().is_none());
    codes.verify();

    drop((roster, assignments, stores));
    shutdown(handles).await;
}

/// The record delete is the one step that must succeed.
#[tokio::test]
async fn test_classroom_delete_fails_when_record_delete_fails() {
    let (mut stores, handles) = Stores::spawn(&CafeConfig::default());
    let classroom = Classroom {
        id: ClassroomId("room-1".into()),
        name: "Math 4A".into(),
        code: JoinCode::normalize("ABC234").unwrap(),
        created_at: Utc::now(),
        teacher_id: teacher().uid,
    };

    let classrooms = MockStore::<Classroom>::new();
    classrooms
        .expect_get(classroom.id.clone())
        .return_ok(Some(classroom.clone()));
    classrooms
        .expect_delete(classroom.id.clone())
        .return_err(StoreError::Timeout(std::time::Duration::from_secs(2)));
    stores.classrooms = classrooms.client();

    let (roster, assignments) = clients(&stores, RosterPolicy::default());
    let err = roster
        .delete_classroom(&teacher(), &classroom.id)
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::Storage(StoreError::Timeout(_))));
    assert_eq!(err.kind(), ErrorKind::Storage);
    assert!(err.kind().is_retryable());
    classrooms.verify();

    drop((roster, assignments, stores));
    shutdown(handles).await;
}

/// One submission refuses to go; the rest of the slot is still removed.
#[tokio::test]
async fn test_assignment_delete_continues_past_failed_submission() {
    let (mut stores, handles) = Stores::spawn(&CafeConfig::default());
    let classroom = seed_classroom(&stores, "ABC234").await;
    let slot = SlotKey::new(classroom.id.clone(), SlotId::Slot1);
    stores.slots.put(slot.clone(), active_slot()).await.unwrap();

    let ok = slot.submission(UserId::new("s1"));
    let stuck = slot.submission(UserId::new("s2"));
    let submissions = MockStore::<Submission>::new();
    submissions.expect_list(slot.clone()).return_ok(vec![
        (ok.clone(), Submission::started(ok.student.clone(), Utc::now())),
        (stuck.clone(), Submission::started(stuck.student.clone(), Utc::now())),
    ]);
    submissions.expect_delete(ok).return_ok(true);
    submissions
        .expect_delete(stuck)
        .return_err(StoreError::Backend("unavailable".into()));
    stores.submissions = submissions.client();

    let (roster, assignments) = clients(&stores, RosterPolicy::default());
    let report = assignments.delete(&teacher(), slot.clone()).await.unwrap();

    assert_eq!(report.completed, 1);
    assert_eq!(
        report.failed,
        vec![format!("classrooms/{}/sessions/slot1/submissions/s2", classroom.id)]
    );
    assert!(stores.slots.get(slot).await.unwrap().is_none());
    submissions.verify();

    drop((roster, assignments, stores));
    shutdown(handles).await;
}

/// A storage failure on the membership write leaves no mirror behind.
#[tokio::test]
async fn test_join_storage_failure_is_retryable() {
    let (mut stores, handles) = Stores::spawn(&CafeConfig::default());
    let classroom = seed_classroom(&stores, "ABC234").await;
    stores
        .codes
        .create(
            classroom.code.clone(),
            CodeIndexEntry {
                classroom_id: classroom.id.clone(),
                teacher_id: classroom.teacher_id.clone(),
            },
        )
        .await
        .unwrap();

    let student = Identity::new("s1", Some("Sam"));
    let members = MockStore::<Membership>::new();
    members
        .expect_put(MemberKey {
            classroom: classroom.id.clone(),
            student: student.uid.clone(),
        })
        .return_err(StoreError::Timeout(std::time::Duration::from_secs(2)));
    stores.members = members.client();

    let (roster, assignments) = clients(&stores, RosterPolicy::default());
    let err = roster.join_classroom(&student, "abc234").await.unwrap_err();
    assert!(err.kind().is_retryable());
    assert!(stores
        .joined
        .get(JoinedKey {
            student: student.uid.clone(),
            classroom: classroom.id.clone(),
        })
        .await
        .unwrap()
        .is_none());
    members.verify();

    drop((roster, assignments, stores));
    shutdown(handles).await;
}

/// A failed classroom write hands the reserved code back to the index.
#[tokio::test]
async fn test_failed_classroom_write_releases_code() {
    let (mut stores, handles) = Stores::spawn(&CafeConfig::default());

    // The classroom id is generated, so the create cannot be scripted by key;
    // the unscripted create is answered with a backend error.
    let classrooms = MockStore::<Classroom>::new();
    classrooms.expect_list(()).return_ok(Vec::new());
    stores.classrooms = classrooms.client();

    let (roster, assignments) = clients(&stores, RosterPolicy::default());
    let err = roster
        .create_classroom(&teacher(), "Math 4A")
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::Storage(StoreError::Backend(_))));
    assert!(err.kind().is_retryable());
    assert!(stores.codes.list(()).await.unwrap().is_empty());

    drop((roster, assignments, stores, classrooms));
    shutdown(handles).await;
}

/// With every possible code taken, creation gives up without writing anything.
#[tokio::test]
async fn test_code_generation_gives_up_after_bounded_attempts() {
    let (stores, handles) = Stores::spawn(&CafeConfig::default());
    for &c in CODE_ALPHABET {
        let code = JoinCode::normalize(&char::from(c).to_string()).unwrap();
        let entry = CodeIndexEntry {
            classroom_id: ClassroomId(format!("other-{}", char::from(c))),
            teacher_id: UserId::new("teacher-9"),
        };
        stores.codes.create(code, entry).await.unwrap();
    }

    let policy = RosterPolicy {
        code_length: 1,
        code_attempts: 4,
        ..RosterPolicy::default()
    };
    let (roster, assignments) = clients(&stores, policy);
    let err = roster
        .create_classroom(&teacher(), "Math 4A")
        .await
        .unwrap_err();
    assert_eq!(err, RosterError::CodesExhausted);
    assert!(stores.classrooms.list(()).await.unwrap().is_empty());
    assert_eq!(stores.codes.list(()).await.unwrap().len(), CODE_ALPHABET.len());

    drop((roster, assignments, stores));
    shutdown(handles).await;
}
