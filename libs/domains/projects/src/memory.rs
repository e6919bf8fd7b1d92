//! In-process store implementing every repository trait.
//!
//! Enforces the same rules as the relational schema: unique role names,
//! `user.role_id` referencing a role (RESTRICT on role delete), one row per
//! (user, project) pair, and assignments cascading away with either endpoint.
//! Each operation runs under a single lock acquisition, so check-and-write is
//! atomic the way a constraint check inside one statement is.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::projects::{
    CreateProject, Project, ProjectError, ProjectRepository, ProjectResult, UpdateProject,
};
use crate::roles::{CreateRole, Role, RoleError, RoleRepository, RoleResult, UpdateRole};
use crate::user_projects::{
    UserProject, UserProjectError, UserProjectRepository, UserProjectResult,
};
use crate::users::{CreateUser, UpdateUser, User, UserError, UserRepository, UserResult};

#[derive(Debug, Default)]
struct Tables {
    roles: BTreeMap<i32, Role>,
    users: BTreeMap<i32, User>,
    projects: BTreeMap<i32, Project>,
    /// (user_id, project_id)
    user_projects: BTreeSet<(i32, i32)>,
    role_seq: i32,
    user_seq: i32,
    project_seq: i32,
}

impl Tables {
    /// Stored user joined with its role's current name
    fn user_view(&self, user: &User) -> User {
        let mut user = user.clone();
        user.role_name = self.roles.get(&user.role_id).map(|role| role.name.clone());
        user
    }
}

fn next_id(seq: &mut i32) -> i32 {
    *seq += 1;
    *seq
}

fn missing_role(role_id: i32) -> UserError {
    UserError::Database(format!(
        "insert or update on table \"user\" violates foreign key constraint \"fk_user_role_id\": role {} does not exist",
        role_id
    ))
}

/// Shared in-memory store (for development/testing). Clones share state.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleRepository for InMemoryStore {
    async fn create(&self, input: CreateRole) -> RoleResult<Role> {
        let mut tables = self.tables.write().await;

        if tables.roles.values().any(|r| r.name == input.name) {
            return Err(RoleError::DuplicateName(input.name));
        }

        let id = next_id(&mut tables.role_seq);
        let role = Role::new(id, input);
        tables.roles.insert(id, role.clone());

        tracing::info!(role_id = id, "Created role");
        Ok(role)
    }

    async fn get_by_id(&self, id: i32) -> RoleResult<Option<Role>> {
        let tables = self.tables.read().await;
        Ok(tables.roles.get(&id).cloned())
    }

    async fn list(&self) -> RoleResult<Vec<Role>> {
        let tables = self.tables.read().await;
        Ok(tables.roles.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: UpdateRole) -> RoleResult<Role> {
        let mut tables = self.tables.write().await;

        if let Some(ref new_name) = input.name {
            let taken = tables
                .roles
                .values()
                .any(|r| r.id != id && &r.name == new_name);
            if taken {
                return Err(RoleError::DuplicateName(new_name.clone()));
            }
        }

        let role = tables.roles.get_mut(&id).ok_or(RoleError::NotFound(id))?;
        role.apply_update(input);
        let updated = role.clone();

        tracing::info!(role_id = id, "Updated role");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> RoleResult<bool> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.role_id == id) {
            return Err(RoleError::InUse(id));
        }

        let deleted = tables.roles.remove(&id).is_some();
        if deleted {
            tracing::info!(role_id = id, "Deleted role");
        }
        Ok(deleted)
    }

    async fn count_users(&self, role_id: i32) -> RoleResult<u64> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().filter(|u| u.role_id == role_id).count() as u64)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut tables = self.tables.write().await;

        if !tables.roles.contains_key(&input.role_id) {
            return Err(missing_role(input.role_id));
        }

        let id = next_id(&mut tables.user_seq);
        let user = User::new(id, input);
        tracing::info!(user_id = id, role_id = user.role_id, "Created user");

        let view = tables.user_view(&user);
        tables.users.insert(id, user);
        Ok(view)
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).map(|user| tables.user_view(user)))
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().map(|user| tables.user_view(user)).collect())
    }

    async fn update(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        let mut tables = self.tables.write().await;

        if let Some(role_id) = input.role_id {
            if !tables.roles.contains_key(&role_id) {
                return Err(missing_role(role_id));
            }
        }

        let user = tables.users.get_mut(&id).ok_or(UserError::NotFound(id))?;
        user.apply_update(input);
        let updated = user.clone();

        tracing::info!(user_id = id, "Updated user");
        Ok(tables.user_view(&updated))
    }

    async fn delete(&self, id: i32) -> UserResult<bool> {
        let mut tables = self.tables.write().await;

        let deleted = tables.users.remove(&id).is_some();
        if deleted {
            tables.user_projects.retain(|&(user_id, _)| user_id != id);
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(deleted)
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn create(&self, input: CreateProject) -> ProjectResult<Project> {
        let mut tables = self.tables.write().await;

        let id = next_id(&mut tables.project_seq);
        let project = Project::new(id, input);
        tables.projects.insert(id, project.clone());

        tracing::info!(project_id = id, status = %project.status, "Created project");
        Ok(project)
    }

    async fn get_by_id(&self, id: i32) -> ProjectResult<Option<Project>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.get(&id).cloned())
    }

    async fn list(&self) -> ProjectResult<Vec<Project>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: UpdateProject) -> ProjectResult<Project> {
        let mut tables = self.tables.write().await;

        let project = tables
            .projects
            .get_mut(&id)
            .ok_or(ProjectError::NotFound(id))?;
        project.apply_update(input);
        let updated = project.clone();

        tracing::info!(project_id = id, "Updated project");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> ProjectResult<bool> {
        let mut tables = self.tables.write().await;

        let deleted = tables.projects.remove(&id).is_some();
        if deleted {
            tables
                .user_projects
                .retain(|&(_, project_id)| project_id != id);
            tracing::info!(project_id = id, "Deleted project");
        }
        Ok(deleted)
    }
}

#[async_trait]
impl UserProjectRepository for InMemoryStore {
    async fn user_exists(&self, user_id: i32) -> UserProjectResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.users.contains_key(&user_id))
    }

    async fn project_exists(&self, project_id: i32) -> UserProjectResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.projects.contains_key(&project_id))
    }

    async fn exists(&self, user_id: i32, project_id: i32) -> UserProjectResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.user_projects.contains(&(user_id, project_id)))
    }

    async fn add(&self, user_id: i32, project_id: i32) -> UserProjectResult<UserProject> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&user_id) {
            return Err(UserProjectError::UserNotFound(user_id));
        }
        if !tables.projects.contains_key(&project_id) {
            return Err(UserProjectError::ProjectNotFound(project_id));
        }
        if !tables.user_projects.insert((user_id, project_id)) {
            return Err(UserProjectError::AlreadyAssigned {
                user_id,
                project_id,
            });
        }

        tracing::info!(user_id, project_id, "Added user to project");
        Ok(UserProject {
            user_id,
            project_id,
        })
    }

    async fn remove(&self, user_id: i32, project_id: i32) -> UserProjectResult<bool> {
        let mut tables = self.tables.write().await;

        let removed = tables.user_projects.remove(&(user_id, project_id));
        if removed {
            tracing::info!(user_id, project_id, "Removed user from project");
        }
        Ok(removed)
    }

    async fn users_of_project(&self, project_id: i32) -> UserProjectResult<Vec<User>> {
        let tables = self.tables.read().await;

        Ok(tables
            .user_projects
            .iter()
            .filter(|&&(_, p)| p == project_id)
            .filter_map(|(u, _)| tables.users.get(u).map(|user| tables.user_view(user)))
            .collect())
    }

    async fn projects_of_user(&self, user_id: i32) -> UserProjectResult<Vec<Project>> {
        let tables = self.tables.read().await;

        Ok(tables
            .user_projects
            .range((user_id, i32::MIN)..=(user_id, i32::MAX))
            .filter_map(|(_, p)| tables.projects.get(p).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::ProjectStatus;

    async fn role(store: &InMemoryStore, name: &str) -> Role {
        RoleRepository::create(
            store,
            CreateRole {
                name: name.to_string(),
                description: None,
            },
        )
        .await
        .unwrap()
    }

    async fn user(store: &InMemoryStore, role_id: i32) -> User {
        UserRepository::create(
            store,
            CreateUser {
                name: "Max Weber".to_string(),
                position: "Software Engineer".to_string(),
                role_id,
            },
        )
        .await
        .unwrap()
    }

    async fn project(store: &InMemoryStore, name: &str) -> Project {
        ProjectRepository::create(
            store,
            CreateProject {
                name: name.to_string(),
                description: None,
                status: ProjectStatus::Planning,
                begin_date: None,
                end_date: None,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_ids_are_assigned_per_table() {
        let store = InMemoryStore::new();

        let first = role(&store, "Developer").await;
        let second = role(&store, "Analyst").await;
        let p = project(&store, "New Super App").await;

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(p.id, 1);
    }

    #[tokio::test]
    async fn test_role_rename_to_taken_name_is_rejected() {
        let store = InMemoryStore::new();
        role(&store, "Developer").await;
        let analyst = role(&store, "Analyst").await;

        let result = RoleRepository::update(
            &store,
            analyst.id,
            UpdateRole {
                name: Some("Developer".to_string()),
                description: None,
            },
        )
        .await;

        assert!(matches!(result, Err(RoleError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn test_role_delete_is_restricted_by_users() {
        let store = InMemoryStore::new();
        let r = role(&store, "Developer").await;
        user(&store, r.id).await;

        assert!(matches!(
            RoleRepository::delete(&store, r.id).await,
            Err(RoleError::InUse(_))
        ));
        assert_eq!(store.count_users(r.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_user_update_to_missing_role_fails_without_change() {
        let store = InMemoryStore::new();
        let r = role(&store, "Developer").await;
        let u = user(&store, r.id).await;

        let result = UserRepository::update(
            &store,
            u.id,
            UpdateUser {
                role_id: Some(42),
                ..Default::default()
            },
        )
        .await;

        assert!(matches!(result, Err(UserError::Database(_))));
        let stored = UserRepository::get_by_id(&store, u.id).await.unwrap();
        assert_eq!(stored.map(|u| u.role_id), Some(r.id));
    }

    #[tokio::test]
    async fn test_project_delete_cascades_assignments() {
        let store = InMemoryStore::new();
        let r = role(&store, "Developer").await;
        let u = user(&store, r.id).await;
        let kept = project(&store, "Kept").await;
        let dropped = project(&store, "Dropped").await;
        store.add(u.id, kept.id).await.unwrap();
        store.add(u.id, dropped.id).await.unwrap();

        assert!(ProjectRepository::delete(&store, dropped.id).await.unwrap());

        let projects = store.projects_of_user(u.id).await.unwrap();
        assert_eq!(projects, vec![kept]);
        assert!(!store.exists(u.id, dropped.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_add_is_rejected_for_missing_endpoints() {
        let store = InMemoryStore::new();
        let p = project(&store, "New Super App").await;

        assert!(matches!(
            store.add(5, p.id).await,
            Err(UserProjectError::UserNotFound(5))
        ));
        assert!(!store.exists(5, p.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_add_rejects_existing_pair() {
        let store = InMemoryStore::new();
        let r = role(&store, "Developer").await;
        let u = user(&store, r.id).await;
        let p = project(&store, "New Super App").await;
        store.add(u.id, p.id).await.unwrap();

        assert!(matches!(
            store.add(u.id, p.id).await,
            Err(UserProjectError::AlreadyAssigned { user_id, project_id })
                if user_id == u.id && project_id == p.id
        ));
        assert_eq!(store.users_of_project(p.id).await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_keep_a_single_row() {
        let store = InMemoryStore::new();
        let r = role(&store, "Developer").await;
        let u = user(&store, r.id).await;
        let p = project(&store, "New Super App").await;
        let (user_id, project_id) = (u.id, p.id);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.add(user_id, project_id).await })
            })
            .collect();

        let mut inserted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => inserted += 1,
                Err(UserProjectError::AlreadyAssigned { .. }) => {}
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(inserted, 1);
        assert_eq!(store.users_of_project(project_id).await.unwrap(), vec![u]);
    }

    #[tokio::test]
    async fn test_users_carry_current_role_name() {
        let store = InMemoryStore::new();
        let developer = role(&store, "Developer").await;
        let manager = role(&store, "Project Manager").await;
        let u = user(&store, developer.id).await;
        assert_eq!(u.role_name.as_deref(), Some("Developer"));

        let moved = UserRepository::update(
            &store,
            u.id,
            UpdateUser {
                role_id: Some(manager.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(moved.role_name.as_deref(), Some("Project Manager"));

        RoleRepository::update(
            &store,
            manager.id,
            UpdateRole {
                name: Some("Delivery Lead".to_string()),
                description: None,
            },
        )
        .await
        .unwrap();
        let listed = UserRepository::list(&store).await.unwrap();
        assert_eq!(listed[0].role_name.as_deref(), Some("Delivery Lead"));
    }
}
