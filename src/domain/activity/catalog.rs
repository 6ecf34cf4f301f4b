//! Seed catalog of activities.
//!
//! The catalog is loaded once at startup, either from the built-in Mergington
//! High School list or from a seed file, and is the only way activities come
//! into existence.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::foundation::{Email, ValidationError};

use super::{Activity, ActivityError};

/// Raw description of one activity, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActivitySeed {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivitySeed {
    fn new(
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
}

/// Errors raised while turning seeds into activities.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Catalog contains no activities")]
    Empty,

    #[error("Duplicate activity name in catalog: {0}")]
    DuplicateActivity(String),

    #[error("Invalid activity '{activity}': {source}")]
    InvalidActivity {
        activity: String,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid participant in '{activity}': {source}")]
    InvalidParticipant {
        activity: String,
        #[source]
        source: ValidationError,
    },

    #[error("Duplicate participant in '{activity}': {email}")]
    DuplicateParticipant { activity: String, email: String },
}

/// Validate seeds and build the activities, preserving seed order.
pub fn build_catalog(seeds: Vec<ActivitySeed>) -> Result<Vec<Activity>, CatalogError> {
    if seeds.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut names = HashSet::new();
    let mut activities = Vec::with_capacity(seeds.len());

    for seed in seeds {
        if !names.insert(seed.name.clone()) {
            return Err(CatalogError::DuplicateActivity(seed.name));
        }

        let mut activity = Activity::new(
            seed.name.clone(),
            seed.description,
            seed.schedule,
            seed.max_participants,
        )
        .map_err(|source| CatalogError::InvalidActivity {
            activity: seed.name.clone(),
            source,
        })?;

        for raw in seed.participants {
            let email = Email::new(raw).map_err(|source| CatalogError::InvalidParticipant {
                activity: seed.name.clone(),
                source,
            })?;
            // Seeded rosters may already exceed capacity.
            activity.sign_up(email, false).map_err(|err| match err {
                ActivityError::AlreadySignedUp { activity, email } => {
                    CatalogError::DuplicateParticipant { activity, email }
                }
                other => CatalogError::InvalidActivity {
                    activity: seed.name.clone(),
                    source: ValidationError::invalid_format("participants", other.message()),
                },
            })?;
        }

        activities.push(activity);
    }

    Ok(activities)
}

/// The built-in Mergington High School activity list.
pub fn default_seeds() -> Vec<ActivitySeed> {
    vec![
        ActivitySeed::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        ActivitySeed::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        ActivitySeed::new(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        ActivitySeed::new(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        ActivitySeed::new(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        ActivitySeed::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ]
}

/// Build the built-in catalog.
pub fn default_catalog() -> Result<Vec<Activity>, CatalogError> {
    build_catalog(default_seeds())
}
