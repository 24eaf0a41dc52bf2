//! # Add Up Café demo
//!
//! Walks one classroom through its whole life: a teacher creates it, a student
//! joins with the code and answers an assignment, and the teacher's poller picks
//! up the result. The final snapshot is printed as JSON.

use addup_cafe::identity::{Identity, IdentityProvider, LocalIdentity};
use addup_cafe::lifecycle::{setup_tracing, CafeConfig, CafeSystem};
use addup_cafe::model::{Role, SlotId, SlotKey};
use addup_cafe::play::PlaySession;
use addup_cafe::progress::SlotProgress;
use std::time::Duration;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CafeConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting Add Up Café");
    let system = CafeSystem::new(config.clone());
    let session = LocalIdentity::new();

    // Teacher sets up a classroom with one assignment.
    session.sign_in(Identity::new("teacher-1", Some("Ms. Rivera")));
    let teacher = session.require().map_err(|e| e.to_string())?;

    let classroom = async {
        system
            .profiles
            .register(&teacher, Role::Teacher, "Ms. Rivera")
            .await?;
        let classroom = system.roster.create_classroom(&teacher, "Math 4A").await?;
        system
            .assignments
            .create(
                &teacher,
                SlotKey::new(classroom.id.clone(), SlotId::Slot1),
                "america-cafe",
            )
            .await?;
        Ok::<_, addup_cafe::error::CafeError>(classroom)
    }
    .instrument(tracing::info_span!("teacher_setup"))
    .await
    .map_err(|e| e.to_string())?;
    info!(classroom = %classroom.id, code = %classroom.code, "Classroom ready");

    let poller = system.watch_classroom(teacher.clone(), classroom.id.clone());

    // Student joins and plays slot 1.
    session.sign_in(Identity::new("student-1", Some("Sam")));
    let student = session.require().map_err(|e| e.to_string())?;

    let outcome = async {
        system
            .profiles
            .register(&student, Role::Student, "Sam")
            .await?;
        let typed_code = format!("  {}  ", classroom.code.as_str().to_lowercase());
        system.roster.join_classroom(&student, &typed_code).await?;

        let mut play = PlaySession::open_assignment(
            &student,
            &classroom.id,
            SlotId::Slot1,
            &system.assignments,
            &system.submissions,
        )
        .await?;

        play.order_mut().dismiss_greeting(false)?;
        play.reveal_menu(config.reveal_interval).await;
        play.order_mut().add_item("america-cafe-4")?;
        play.order_mut().place_order()?;
        let total = play.order().total();
        play.order_mut().set_answer(total.to_string())?;

        let report = play.check_answer().await?;
        Ok::<_, addup_cafe::error::CafeError>((total, report))
    }
    .instrument(tracing::info_span!("student_play"))
    .await;

    match &outcome {
        Ok((total, report)) => {
            info!(%total, verdict = ?report.verdict, recording = ?report.recording, "Answer checked")
        }
        Err(e) => warn!(error = %e, kind = %e.kind(), "Student flow failed"),
    }

    // Teacher sees the result on the next poll.
    session.sign_in(teacher.clone());
    poller.refresh();
    let mut updates = poller.subscribe();
    let wait = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let answered = updates
                .borrow_and_update()
                .snapshot
                .as_ref()
                .and_then(|snapshot| snapshot.row(&student.uid).map(|row| row.slot1))
                .is_some_and(|cell| matches!(cell, SlotProgress::Progress { .. }));
            if answered || updates.changed().await.is_err() {
                break;
            }
        }
    })
    .await;
    if wait.is_err() {
        warn!("Progress did not show up before the timeout");
    }

    if let Some(snapshot) = poller.latest().snapshot {
        if let Some(row) = snapshot.row(&student.uid) {
            info!(student = %row.name, slot1 = %row.slot1, slot2 = %row.slot2, "Progress");
        }
        let json = serde_json::to_string_pretty(&snapshot).map_err(|e| e.to_string())?;
        println!("{json}");
    }

    poller.cancel().await;
    session.sign_out();
    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
