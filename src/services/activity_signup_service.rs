use thiserror::Error;
use tracing::debug;

use crate::database::{ActivityRegistry, RosterChange};
use crate::models::ActivityListing;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

pub fn list_activities(registry: &ActivityRegistry) -> ActivityListing {
    registry.list()
}

pub fn sign_up(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    match registry.add_participant(activity_name, email) {
        RosterChange::Applied => {
            debug!(activity = %activity_name, email = %email, "participant added");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        RosterChange::Unchanged => Err(SignupError::AlreadySignedUp),
        RosterChange::ActivityMissing => Err(SignupError::ActivityNotFound),
    }
}

pub fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    match registry.remove_participant(activity_name, email) {
        RosterChange::Applied => {
            debug!(activity = %activity_name, email = %email, "participant removed");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        RosterChange::Unchanged => Err(SignupError::NotSignedUp),
        RosterChange::ActivityMissing => Err(SignupError::ActivityNotFound),
    }
}
