//! Log setup for binaries.
//!
//! Store actors log with a `collection` field and a logical `path`, so module
//! targets are left out of the output:
//!
//! ```text
//! INFO Created collection="classrooms" path=classrooms/4f0c... size=1
//! INFO join_classroom: Joined classroom classroom=4f0c... student=s1
//! WARN Cascade step failed step=classroomCodes/QX7M2K error=Store call timed out after 2s
//! ```
//!
//! Verbosity comes from `RUST_LOG`, e.g. `RUST_LOG=addup_cafe=debug,cafe_store=info`.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
