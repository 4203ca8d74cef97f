//! In-memory project storage for tests and local runs.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::foundation::{AuthenticatedUser, UserId};
use crate::domain::project::ProjectRecord;
use crate::ports::{ProjectStorage, ProjectStorageError};

/// Records every created project with its owner.
#[derive(Debug, Default)]
pub struct InMemoryProjectStorage {
    projects: Mutex<Vec<(UserId, ProjectRecord)>>,
    /// Returned for every creation when set.
    force_error: Mutex<Option<ProjectStorageError>>,
}

impl InMemoryProjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every creation fail with `error`.
    pub fn with_error(self, error: ProjectStorageError) -> Self {
        *lock(&self.force_error) = Some(error);
        self
    }

    /// Created projects, oldest first.
    pub fn projects(&self) -> Vec<(UserId, ProjectRecord)> {
        lock(&self.projects).clone()
    }

    pub fn count(&self) -> usize {
        lock(&self.projects).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl ProjectStorage for InMemoryProjectStorage {
    async fn create_project(
        &self,
        record: &ProjectRecord,
        owner: &AuthenticatedUser,
    ) -> Result<(), ProjectStorageError> {
        if let Some(error) = lock(&self.force_error).clone() {
            return Err(error);
        }
        lock(&self.projects).push((owner.id.clone(), record.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("u-1").unwrap(), None, "tok")
    }

    #[tokio::test]
    async fn stores_projects_with_owner() {
        let storage = InMemoryProjectStorage::new();
        let mut record = ProjectRecord::new();
        record.name = "Apollo".to_string();

        storage.create_project(&record, &owner()).await.unwrap();

        let projects = storage.projects();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].0.as_str(), "u-1");
        assert_eq!(projects[0].1.name, "Apollo");
    }

    #[tokio::test]
    async fn forced_error_is_returned_and_nothing_stored() {
        let storage =
            InMemoryProjectStorage::new().with_error(ProjectStorageError::rejected(500, "boom"));

        let result = storage.create_project(&ProjectRecord::new(), &owner()).await;

        assert!(matches!(result, Err(ProjectStorageError::Rejected { status: 500, .. })));
        assert_eq!(storage.count(), 0);
    }
}
