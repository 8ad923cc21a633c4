//! Goal store for JSON persistence
//!
//! Manages loading and saving savings goals to goals.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketFinError;
use crate::models::{Goal, GoalId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable goal data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    goals: Vec<Goal>,
}

/// Store for goal persistence
pub struct GoalStore {
    path: PathBuf,
    data: RwLock<Vec<Goal>>,
}

impl GoalStore {
    /// Create a new goal store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), PocketFinError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| PocketFinError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.goals;

        Ok(())
    }

    /// Save goals to disk
    pub fn save(&self) -> Result<(), PocketFinError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketFinError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = GoalData { goals: data.clone() };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all goals in insertion order
    pub fn all(&self) -> Result<Vec<Goal>, PocketFinError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketFinError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> Result<Option<Goal>, PocketFinError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketFinError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.iter().find(|g| g.id == id).cloned())
    }

    /// Insert or update a goal
    pub fn upsert(&self, goal: Goal) -> Result<(), PocketFinError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PocketFinError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|g| g.id == goal.id) {
            Some(existing) => *existing = goal,
            None => data.push(goal),
        }
        Ok(())
    }

    /// Remove a goal; returns the removed goal if it existed
    pub fn remove(&self, id: GoalId) -> Result<Option<Goal>, PocketFinError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PocketFinError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter().position(|g| g.id == id) {
            Some(pos) => Ok(Some(data.remove(pos))),
            None => Ok(None),
        }
    }
}
