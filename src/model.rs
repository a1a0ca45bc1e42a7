use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Wire shape of one entry in `GET /activities`. The name is the map key.
#[derive(Debug, Clone, Deserialize)]
struct ActivityRecord {
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    fn from_record(name: String, r: ActivityRecord) -> Self {
        Self {
            name,
            description: r.description,
            schedule: r.schedule,
            max_participants: r.max_participants,
            participants: r.participants,
        }
    }

    /// Signed so an overbooked activity shows a negative count instead of wrapping.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Whole `GET /activities` payload, in the order the server sent it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityCollection {
    activities: Vec<Activity>,
}

impl ActivityCollection {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.activities.iter().map(|a| a.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

struct CollectionVisitor;

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = ActivityCollection;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of activity name to activity details")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let mut activities = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, record)) = map.next_entry::<String, ActivityRecord>()? {
            activities.push(Activity::from_record(name, record));
        }
        Ok(ActivityCollection { activities })
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CollectionVisitor)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub email: String,
    pub display_name: String,
    pub initials: String,
}

impl Participant {
    pub fn from_email(email: &str) -> Self {
        let display_name = display_name(email);
        let initials = initials(&display_name);
        Self {
            email: email.to_string(),
            display_name,
            initials,
        }
    }
}

/// `john.doe@example.com` -> `john doe`
pub fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    local
        .chars()
        .map(|c| if matches!(c, '.' | '_' | '-') { ' ' } else { c })
        .collect()
}

/// First letter of each word, uppercased, at most two characters.
pub fn initials(display_name: &str) -> String {
    display_name
        .split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
