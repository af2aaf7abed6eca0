use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::database::seed::seed_activities;
use crate::models::{Activity, ActivityListing};

/// Outcome of a roster mutation, analogous to rows-affected on a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterChange {
    Applied,
    Unchanged,
    ActivityMissing,
}

/// In-memory activity store shared by every request handler.
///
/// Cloning is cheap and every clone sees the same activities. Each mutation
/// holds the write lock for its whole check-then-mutate step.
#[derive(Debug, Clone)]
pub struct ActivityRegistry {
    inner: Arc<RwLock<Vec<Activity>>>,
}

impl ActivityRegistry {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    // Roster edits never leave a half-written Vec, so a poisoned lock is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Activity>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Activity>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> ActivityListing {
        ActivityListing(self.read().clone())
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.read().iter().find(|a| a.name == name).cloned()
    }

    /// Appends `email` to the roster unless it is already there.
    pub fn add_participant(&self, activity_name: &str, email: &str) -> RosterChange {
        let mut activities = self.write();
        let Some(activity) = activities.iter_mut().find(|a| a.name == activity_name) else {
            return RosterChange::ActivityMissing;
        };
        if activity.has_participant(email) {
            return RosterChange::Unchanged;
        }
        activity.participants.push(email.to_string());
        RosterChange::Applied
    }

    /// Removes `email` from the roster if present.
    pub fn remove_participant(&self, activity_name: &str, email: &str) -> RosterChange {
        let mut activities = self.write();
        let Some(activity) = activities.iter_mut().find(|a| a.name == activity_name) else {
            return RosterChange::ActivityMissing;
        };
        match activity.participants.iter().position(|p| p == email) {
            Some(idx) => {
                activity.participants.remove(idx);
                RosterChange::Applied
            }
            None => RosterChange::Unchanged,
        }
    }
}
