//! InMemory Database 実装
//!
//! ドメイン層が定義する Database / UnitOfWork / MemberRepository / TodoRepository
//! trait の具体的な実装。BTreeMap と Vec をインメモリ DB として使用します。
//!
//! トランザクションはテーブル全体のスナップショットに対して作業し、
//! `commit` 時に書き戻します。トランザクションはロックを保持したまま
//! 生存するため、全てのトランザクションは直列に実行されます。

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::{
    Database, Email, Member, MemberId, MemberRepository, NewMember, RepositoryError, Todo,
    TodoRepository, UnitOfWork,
};

/// Member テーブル
#[derive(Debug, Clone, Default)]
struct MemberTable {
    rows: BTreeMap<MemberId, Member>,
    /// 最後に払い出した ID
    last_id: i64,
}

/// Todo テーブル
#[derive(Debug, Clone, Default)]
struct TodoTable {
    rows: Vec<Todo>,
    last_id: i64,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    members: MemberTable,
    todos: TodoTable,
}

/// インメモリ Database 実装
///
/// Clone しても同じテーブルを共有します。
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryDatabase {
    /// 空の InMemoryDatabase を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// Todo を1件追加（Todo 自体の CRUD はこのサービスの範囲外のため、seed 用）
    pub async fn add_todo(&self, member_id: MemberId, title: impl Into<String>) -> Todo {
        let mut tables = self.tables.lock().await;
        tables.todos.last_id += 1;
        let todo = Todo::new(tables.todos.last_id, member_id, title.into());
        tables.todos.rows.push(todo.clone());
        todo
    }

    /// 指定した会員が所有する Todo の件数
    pub async fn count_todos_by_member_id(&self, member_id: MemberId) -> usize {
        let tables = self.tables.lock().await;
        tables
            .todos
            .rows
            .iter()
            .filter(|todo| todo.member_id == member_id)
            .count()
    }

    /// 登録済み会員の件数
    pub async fn count_members(&self) -> usize {
        let tables = self.tables.lock().await;
        tables.members.rows.len()
    }
}

#[async_trait]
impl Database for InMemoryDatabase {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepositoryError> {
        let guard = self.tables.clone().lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(InMemoryTransaction { guard, working }))
    }
}

/// インメモリトランザクション
///
/// `guard` がロックを保持し、`working` に対して読み書きします。
struct InMemoryTransaction {
    guard: OwnedMutexGuard<Tables>,
    working: Tables,
}

#[async_trait]
impl UnitOfWork for InMemoryTransaction {
    fn members(&mut self) -> &mut dyn MemberRepository {
        &mut self.working.members
    }

    fn todos(&mut self) -> &mut dyn TodoRepository {
        &mut self.working.todos
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        let InMemoryTransaction { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for MemberTable {
    async fn find_by_id(&mut self, id: MemberId) -> Result<Option<Member>, RepositoryError> {
        Ok(self.rows.get(&id).cloned())
    }

    async fn find_by_email(&mut self, email: &Email) -> Result<Option<Member>, RepositoryError> {
        Ok(self
            .rows
            .values()
            .find(|member| &member.email == email)
            .cloned())
    }

    async fn find_all(&mut self) -> Result<Vec<Member>, RepositoryError> {
        Ok(self.rows.values().cloned().collect())
    }

    async fn save(&mut self, member: NewMember) -> Result<Member, RepositoryError> {
        // email の一意制約
        if self.rows.values().any(|m| m.email == member.email) {
            return Err(RepositoryError::DuplicateEmail(member.email.into_string()));
        }

        let id = MemberId::new(self.last_id + 1)
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;
        self.last_id = id.value();

        let member = member.into_member(id);
        self.rows.insert(id, member.clone());
        Ok(member)
    }

    async fn update(&mut self, member: &Member) -> Result<Member, RepositoryError> {
        if !self.rows.contains_key(&member.id) {
            return Err(RepositoryError::MemberNotFound(member.id));
        }
        self.rows.insert(member.id, member.clone());
        Ok(member.clone())
    }

    async fn delete_by_id(&mut self, id: MemberId) -> Result<(), RepositoryError> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::MemberNotFound(id))
    }
}

#[async_trait]
impl TodoRepository for TodoTable {
    async fn delete_all_by_member_id(
        &mut self,
        member_id: MemberId,
    ) -> Result<u64, RepositoryError> {
        let before = self.rows.len();
        self.rows.retain(|todo| todo.member_id != member_id);
        Ok((before - self.rows.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryDatabase のトランザクション（commit / rollback）
    // - MemberRepository / TodoRepository の基本的な CRUD 操作
    // - email の一意制約
    //
    // 【なぜこのテストが必要か】
    // - UseCase 層は「commit しなければ何も残らない」ことに依存している
    // - 同時 join の競合は Repository の一意制約で防いでいる
    // ========================================

    fn new_member(email: &str) -> NewMember {
        NewMember::new(
            Email::new(email.to_string()).unwrap(),
            "p1".to_string(),
            "A".to_string(),
            "111".to_string(),
            Timestamp::new(1000),
        )
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids_and_commit_persists() {
        // テスト項目: save で連番の ID が払い出され、commit で永続化される
        // given (前提条件):
        let db = InMemoryDatabase::new();
        let mut tx = db.begin().await.unwrap();

        // when (操作):
        let first = tx.members().save(new_member("a@x.com")).await.unwrap();
        let second = tx.members().save(new_member("b@x.com")).await.unwrap();
        tx.commit().await.unwrap();

        // then (期待する結果):
        assert_eq!(first.id.value(), 1);
        assert_eq!(second.id.value(), 2);
        assert_eq!(db.count_members().await, 2);
    }

    #[tokio::test]
    async fn test_drop_without_commit_rolls_back() {
        // テスト項目: commit せずに drop すると変更は破棄される
        // given (前提条件):
        let db = InMemoryDatabase::new();

        // when (操作):
        {
            let mut tx = db.begin().await.unwrap();
            tx.members().save(new_member("a@x.com")).await.unwrap();
        }

        // then (期待する結果):
        assert_eq!(db.count_members().await, 0);
        let mut tx = db.begin().await.unwrap();
        assert!(tx.members().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_duplicate_email_fails() {
        // テスト項目: 既存の email で save すると一意制約エラーになる
        // given (前提条件):
        let db = InMemoryDatabase::new();
        let mut tx = db.begin().await.unwrap();
        tx.members().save(new_member("a@x.com")).await.unwrap();

        // when (操作):
        let result = tx.members().save(new_member("a@x.com")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::DuplicateEmail("a@x.com".to_string()))
        );
    }

    #[tokio::test]
    async fn test_find_by_email_and_id() {
        // テスト項目: email と ID で会員を検索できる
        // given (前提条件):
        let db = InMemoryDatabase::new();
        let mut tx = db.begin().await.unwrap();
        let saved = tx.members().save(new_member("a@x.com")).await.unwrap();

        // when (操作):
        let email = Email::new("a@x.com".to_string()).unwrap();
        let by_email = tx.members().find_by_email(&email).await.unwrap();
        let by_id = tx.members().find_by_id(saved.id).await.unwrap();
        let missing = tx
            .members()
            .find_by_id(MemberId::new(99).unwrap())
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(by_email, Some(saved.clone()));
        assert_eq!(by_id, Some(saved));
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_update_missing_member_fails() {
        // テスト項目: 存在しない会員の update はエラーになる
        // given (前提条件):
        let db = InMemoryDatabase::new();
        let mut tx = db.begin().await.unwrap();
        let ghost = new_member("a@x.com").into_member(MemberId::new(7).unwrap());

        // when (操作):
        let result = tx.members().update(&ghost).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::MemberNotFound(MemberId::new(7).unwrap()))
        );
    }

    #[tokio::test]
    async fn test_update_overwrites_only_target_row() {
        // テスト項目: update は対象の会員の行だけを上書きする
        // given (前提条件):
        let db = InMemoryDatabase::new();
        let mut tx = db.begin().await.unwrap();
        let mut a = tx.members().save(new_member("a@x.com")).await.unwrap();
        let b = tx.members().save(new_member("b@x.com")).await.unwrap();
        a.name = "Renamed".to_string();

        // when (操作):
        let updated = tx.members().update(&a).await.unwrap();

        // then (期待する結果):
        assert_eq!(updated, a);
        assert_eq!(tx.members().find_by_id(a.id).await.unwrap(), Some(a));
        assert_eq!(tx.members().find_by_id(b.id).await.unwrap(), Some(b));
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        // テスト項目: delete_by_id で会員を削除でき、存在しない ID はエラー
        // given (前提条件):
        let db = InMemoryDatabase::new();
        let mut tx = db.begin().await.unwrap();
        let a = tx.members().save(new_member("a@x.com")).await.unwrap();

        // when (操作):
        tx.members().delete_by_id(a.id).await.unwrap();
        let again = tx.members().delete_by_id(a.id).await;

        // then (期待する結果):
        assert!(tx.members().find_all().await.unwrap().is_empty());
        assert_eq!(again, Err(RepositoryError::MemberNotFound(a.id)));
    }

    #[tokio::test]
    async fn test_delete_all_todos_by_member_id() {
        // テスト項目: 指定した会員の Todo だけが削除される
        // given (前提条件):
        let db = InMemoryDatabase::new();
        let alice = MemberId::new(1).unwrap();
        let bob = MemberId::new(2).unwrap();
        db.add_todo(alice, "buy milk").await;
        db.add_todo(alice, "walk dog").await;
        db.add_todo(bob, "read book").await;

        // when (操作):
        let mut tx = db.begin().await.unwrap();
        let deleted = tx.todos().delete_all_by_member_id(alice).await.unwrap();
        tx.commit().await.unwrap();

        // then (期待する結果):
        assert_eq!(deleted, 2);
        assert_eq!(db.count_todos_by_member_id(alice).await, 0);
        assert_eq!(db.count_todos_by_member_id(bob).await, 1);
    }

    #[tokio::test]
    async fn test_transactions_are_serialized() {
        // テスト項目: 先行トランザクションが終わるまで次の begin は待たされる
        // given (前提条件):
        let db = InMemoryDatabase::new();
        let mut first = db.begin().await.unwrap();
        first.members().save(new_member("a@x.com")).await.unwrap();

        // when (操作): 2つ目の begin は先行トランザクションの commit 後に進む
        let db2 = db.clone();
        let second = tokio::spawn(async move {
            let mut tx = db2.begin().await.unwrap();
            tx.members().save(new_member("a@x.com")).await
        });
        tokio::task::yield_now().await;
        first.commit().await.unwrap();

        // then (期待する結果): 後続の save は commit 済みの行と衝突する
        let result = second.await.unwrap();
        assert_eq!(
            result,
            Err(RepositoryError::DuplicateEmail("a@x.com".to_string()))
        );
    }
}
