//! Activity aggregate entity.
//!
//! An Activity is an extracurricular offering identified by its name. Its
//! roster is the ordered list of participant emails, in signup order.

use crate::domain::foundation::{Email, ValidationError};

use super::ActivityError;

/// Activity aggregate - one extracurricular offering and its roster.
///
/// # Invariants
///
/// - `name` is non-empty and unique within a catalog
/// - `participants` contains no duplicates
/// - `participants` keeps signup order
///
/// `participants.len() <= max_participants` only holds when signups are
/// made with capacity enforcement on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Vec<Email>,
}

impl Activity {
    /// Create an activity with an empty roster.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            name,
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }

    /// Participants in signup order.
    pub fn participants(&self) -> &[Email] {
        &self.participants
    }

    pub fn is_participant(&self, email: &Email) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// True once the roster has reached `max_participants`.
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Open places left on the roster, zero when over capacity.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    /// Append a student to the roster.
    ///
    /// Capacity is only checked when `enforce_capacity` is set.
    pub fn sign_up(&mut self, email: Email, enforce_capacity: bool) -> Result<(), ActivityError> {
        if self.is_participant(&email) {
            return Err(ActivityError::already_signed_up(&self.name, email.as_str()));
        }
        if enforce_capacity && self.is_full() {
            return Err(ActivityError::activity_full(&self.name, self.max_participants));
        }
        self.participants.push(email);
        Ok(())
    }

    /// Remove a student from the roster, keeping the order of the others.
    pub fn unregister(&mut self, email: &Email) -> Result<(), ActivityError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| ActivityError::not_signed_up(&self.name, email.as_str()))?;
        self.participants.remove(position);
        Ok(())
    }
}
