//! End-to-end flows against the in-memory backend.

#[cfg(test)]
mod tests {
    use crate::api::{ProjectApi, TaskApi, TokenStore};
    use crate::board::{Board, MoveOutcome};
    use crate::dashboard::{append_project, initial_selection, ProjectForm, TaskForm};
    use crate::domain::{NewTask, Priority, Project, TaskStatus};
    use crate::error::{ApiError, BoardError};
    use crate::testing::FakeBackend;

    async fn load_board(backend: &FakeBackend, project: u32) -> Board {
        let mut board = Board::new(project);
        let ticket = board.begin_load();
        let result = backend.list_tasks(project).await;
        board.finish_load(ticket, result);
        board
    }

    #[tokio::test]
    async fn test_create_project_then_task_lands_in_pending() {
        let backend = FakeBackend::signed_in();
        let mut projects: Vec<Project> = backend.list_projects().await.unwrap();
        assert_eq!(initial_selection(&projects, None), None);

        let form = ProjectForm { name: "Website".into(), description: String::new() };
        let created = backend.create_project(&form.validate().unwrap()).await.unwrap();
        append_project(&mut projects, created.clone());

        assert!(created.id > 0);
        assert_eq!(projects.iter().filter(|p| p.name == "Website").count(), 1);

        let selected = initial_selection(&projects, None).unwrap();
        assert_eq!(selected, created.id);

        let task_form = TaskForm { title: "Design mockups".into(), priority: Priority::High, ..Default::default() };
        let task = backend.create_task(&task_form.validate(selected).unwrap()).await.unwrap();
        assert_eq!(task.status, TaskStatus::Pending);

        let board = load_board(&backend, selected).await;
        let columns = board.columns();

        assert!(columns.pending.iter().any(|t| t.id == task.id));
        assert!(!columns.in_progress.iter().any(|t| t.id == task.id));
        assert!(!columns.completed.iter().any(|t| t.id == task.id));
    }

    #[tokio::test]
    async fn test_tasks_of_other_projects_stay_off_the_board() {
        let backend = FakeBackend::signed_in();
        let a = backend.create_project(&ProjectForm { name: "A".into(), ..Default::default() }.validate().unwrap()).await.unwrap();
        let b = backend.create_project(&ProjectForm { name: "B".into(), ..Default::default() }.validate().unwrap()).await.unwrap();
        let form = TaskForm { title: "Only in B".into(), ..Default::default() };
        backend.create_task(&form.validate(b.id).unwrap()).await.unwrap();

        let board = load_board(&backend, a.id).await;
        assert!(board.columns().is_empty());
    }

    #[tokio::test]
    async fn test_failed_move_shows_then_reverts() {
        let backend = FakeBackend::signed_in();
        let project = backend.create_project(&ProjectForm { name: "P".into(), ..Default::default() }.validate().unwrap()).await.unwrap();
        let task = backend
            .create_task(&TaskForm { title: "Write copy".into(), ..Default::default() }.validate(project.id).unwrap())
            .await
            .unwrap();
        let mut board = load_board(&backend, project.id).await;
        backend.fail_status_updates.set(true);

        let pending = board.begin_move(task.id, Some(TaskStatus::InProgress)).unwrap();
        // visible before the backend answers
        assert!(board.columns().in_progress.iter().any(|t| t.id == task.id));

        let result = backend.update_status(pending.task_id, pending.to).await;
        assert_eq!(board.settle_move(pending, result), MoveOutcome::Reverted);

        assert_eq!(board.task(task.id).unwrap().status, TaskStatus::Pending);
        assert_eq!(board.error().map(|e| e.to_string()), Some("Failed to update status".to_string()));
        assert_eq!(board.error(), Some(BoardError::StatusUpdateFailed));
        assert_eq!(backend.stored_status(task.id), Some(TaskStatus::Pending));
    }

    #[tokio::test]
    async fn test_successful_move_matches_backend_at_rest() {
        let backend = FakeBackend::signed_in();
        let project = backend.create_project(&ProjectForm { name: "P".into(), ..Default::default() }.validate().unwrap()).await.unwrap();
        let task = backend
            .create_task(&TaskForm { title: "Ship".into(), ..Default::default() }.validate(project.id).unwrap())
            .await
            .unwrap();
        let mut board = load_board(&backend, project.id).await;

        let pending = board.begin_move(task.id, Some(TaskStatus::Completed)).unwrap();
        let result = backend.update_status(pending.task_id, pending.to).await;
        board.settle_move(pending, result);

        assert_eq!(board.task(task.id).unwrap().status, TaskStatus::Completed);
        assert_eq!(backend.stored_status(task.id), Some(TaskStatus::Completed));
        assert_eq!(board.moves_in_flight(), 0);
    }

    #[tokio::test]
    async fn test_reload_during_move_matches_backend_at_rest() {
        let backend = FakeBackend::signed_in();
        let project = backend.create_project(&ProjectForm { name: "P".into(), ..Default::default() }.validate().unwrap()).await.unwrap();
        let task = backend
            .create_task(&TaskForm { title: "Review".into(), ..Default::default() }.validate(project.id).unwrap())
            .await
            .unwrap();
        let mut board = load_board(&backend, project.id).await;

        let ticket = board.begin_load();
        let pending = board.begin_move(task.id, Some(TaskStatus::InProgress)).unwrap();
        // list is read before the status change lands
        let listed = backend.list_tasks(project.id).await;
        let result = backend.update_status(pending.task_id, pending.to).await;
        board.finish_load(ticket, listed);
        board.settle_move(pending, result);

        assert_eq!(board.task(task.id).unwrap().status, TaskStatus::InProgress);
        assert_eq!(backend.stored_status(task.id), Some(TaskStatus::InProgress));
        assert_eq!(board.moves_in_flight(), 0);
    }

    #[tokio::test]
    async fn test_unauthorized_anywhere_tears_session_down() {
        let new_task = NewTask {
            title: "x".into(),
            description: String::new(),
            priority: Priority::Low,
            status: TaskStatus::Pending,
            project: 1,
        };

        for call in 0..4 {
            let backend = FakeBackend::signed_in();
            backend.unauthorized.set(true);

            let err = match call {
                0 => backend.list_projects().await.map(|_| ()),
                1 => backend.list_tasks(1).await.map(|_| ()),
                2 => backend.create_task(&new_task).await.map(|_| ()),
                _ => backend.update_status(1, TaskStatus::Completed).await.map(|_| ()),
            };

            assert_eq!(err, Err(ApiError::Unauthorized), "call {}", call);
            assert_eq!(backend.tokens.get(), None, "call {}", call);
            assert_eq!(backend.navigator.redirects(), vec!["/login".to_string()], "call {}", call);
        }
    }

    #[tokio::test]
    async fn test_reserved_endpoints_round_trip() {
        let backend = FakeBackend::signed_in();
        let project = backend.create_project(&ProjectForm { name: "Old".into(), ..Default::default() }.validate().unwrap()).await.unwrap();
        let renamed = backend
            .update_project(project.id, &ProjectForm { name: "New".into(), ..Default::default() }.validate().unwrap())
            .await
            .unwrap();
        assert_eq!(renamed.name, "New");

        let task = backend
            .create_task(&TaskForm { title: "t".into(), ..Default::default() }.validate(project.id).unwrap())
            .await
            .unwrap();
        backend.delete_task(task.id).await.unwrap();
        assert!(backend.list_tasks(project.id).await.unwrap().is_empty());

        backend.delete_project(project.id).await.unwrap();
        assert!(backend.list_projects().await.unwrap().is_empty());
    }
}
