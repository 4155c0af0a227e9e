//! Test doubles shared by the use case tests.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;

use crate::{
    domain::{
        Database, Email, Member, MemberId, MemberRepository, NewMember, RepositoryError,
        Timestamp, TodoRepository, UnitOfWork,
        repository::{MockDatabase, MockMemberRepository, MockTodoRepository},
    },
    infrastructure::repository::InMemoryDatabase,
};

use super::join_member::{JoinMember, JoinMemberUseCase};

/// UnitOfWork backed by mockall repositories
pub(crate) struct MockedUnitOfWork {
    pub members: MockMemberRepository,
    pub todos: MockTodoRepository,
    pub commit_result: Result<(), RepositoryError>,
    pub committed: Arc<AtomicBool>,
}

impl MockedUnitOfWork {
    pub fn new() -> Self {
        Self {
            members: MockMemberRepository::new(),
            todos: MockTodoRepository::new(),
            commit_result: Ok(()),
            committed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag set once `commit` succeeded
    pub fn committed_flag(&self) -> Arc<AtomicBool> {
        self.committed.clone()
    }
}

#[async_trait]
impl UnitOfWork for MockedUnitOfWork {
    fn members(&mut self) -> &mut dyn MemberRepository {
        &mut self.members
    }

    fn todos(&mut self) -> &mut dyn TodoRepository {
        &mut self.todos
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        let MockedUnitOfWork {
            commit_result,
            committed,
            ..
        } = *self;
        if commit_result.is_ok() {
            committed.store(true, Ordering::SeqCst);
        }
        commit_result
    }
}

/// Database that hands out exactly one mocked transaction
pub(crate) fn database_with(unit_of_work: MockedUnitOfWork) -> Arc<dyn Database> {
    let mut database = MockDatabase::new();
    database
        .expect_begin()
        .times(1)
        .return_once(move || Ok(Box::new(unit_of_work) as Box<dyn UnitOfWork>));
    Arc::new(database)
}

/// Database whose `begin` fails
pub(crate) fn unavailable_database() -> Arc<dyn Database> {
    let mut database = MockDatabase::new();
    database
        .expect_begin()
        .returning(|| Err(RepositoryError::Unavailable("connection refused".to_string())));
    Arc::new(database)
}

pub(crate) fn email(value: &str) -> Email {
    Email::new(value.to_string()).unwrap()
}

pub(crate) fn member(id: i64, email_value: &str, password: &str) -> Member {
    NewMember::new(
        email(email_value),
        password.to_string(),
        "A".to_string(),
        "111".to_string(),
        Timestamp::new(1000),
    )
    .into_member(MemberId::new(id).unwrap())
}

/// Join a member through the use case and return its id
pub(crate) async fn join(
    database: &InMemoryDatabase,
    email_value: &str,
    password: &str,
) -> MemberId {
    let usecase = JoinMemberUseCase::new(Arc::new(database.clone()));
    let response = usecase
        .execute(JoinMember {
            email: email(email_value),
            password: password.to_string(),
            name: "A".to_string(),
            phone: "111".to_string(),
        })
        .await
        .unwrap();
    MemberId::new(response.id).unwrap()
}
