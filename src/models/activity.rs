use serde::ser::{Serialize, SerializeMap, Serializer};

// One activity with its roster. The name is the registry key, so it is not
// repeated inside the serialized record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: &str,
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Snapshot of the whole registry, serialized as `{ name: activity, ... }`
/// in registry order.
#[derive(Debug, Clone, Default)]
pub struct ActivityListing(pub Vec<Activity>);

impl ActivityListing {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_serializes_as_name_keyed_object_in_order() {
        let listing = ActivityListing(vec![
            Activity::new("Zeta", "z", "Mondays", 3, &["a@x.edu"]),
            Activity::new("Alpha", "a", "Tuesdays", 5, &[]),
        ]);

        let json = serde_json::to_string(&listing).unwrap();
        assert_eq!(
            json,
            r#"{"Zeta":{"description":"z","schedule":"Mondays","max_participants":3,"participants":["a@x.edu"]},"Alpha":{"description":"a","schedule":"Tuesdays","max_participants":5,"participants":[]}}"#
        );
    }

    #[test]
    fn has_participant_is_exact_match() {
        let activity = Activity::new("Chess Club", "d", "s", 12, &["michael@mergington.edu"]);
        assert!(activity.has_participant("michael@mergington.edu"));
        assert!(!activity.has_participant("Michael@mergington.edu"));
    }
}
