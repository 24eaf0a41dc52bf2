use super::CafeConfig;
use crate::model::{
    AssignmentSlot, Classroom, CodeIndexEntry, JoinedClassroom, Membership, Submission,
    UserProfile,
};
use cafe_store::{Document, StoreActor, StoreClient};
use tokio::task::JoinHandle;

/// One store client per document kind.
///
/// Domain clients pick the collections they need from here. Tests build this by
/// hand to swap single collections for [`cafe_store::mock::MockStore`]s.
#[derive(Clone)]
pub struct Stores {
    pub classrooms: StoreClient<Classroom>,
    pub codes: StoreClient<CodeIndexEntry>,
    pub members: StoreClient<Membership>,
    pub joined: StoreClient<JoinedClassroom>,
    pub slots: StoreClient<AssignmentSlot>,
    pub submissions: StoreClient<Submission>,
    pub profiles: StoreClient<UserProfile>,
}

impl Stores {
    /// Spawns a store actor per document kind and returns the clients together
    /// with the actor tasks.
    pub fn spawn(config: &CafeConfig) -> (Self, Vec<JoinHandle<()>>) {
        let mut handles = Vec::with_capacity(7);
        let stores = Self {
            classrooms: spawn_store(config, &mut handles),
            codes: spawn_store(config, &mut handles),
            members: spawn_store(config, &mut handles),
            joined: spawn_store(config, &mut handles),
            slots: spawn_store(config, &mut handles),
            submissions: spawn_store(config, &mut handles),
            profiles: spawn_store(config, &mut handles),
        };
        (stores, handles)
    }
}

fn spawn_store<T: Document>(
    config: &CafeConfig,
    handles: &mut Vec<JoinHandle<()>>,
) -> StoreClient<T> {
    let (actor, client) = StoreActor::<T>::new(config.channel_capacity, config.store_timeout);
    handles.push(tokio::spawn(actor.run()));
    client
}
