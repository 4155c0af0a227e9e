//! Core domain models for the member service.

use serde::{Deserialize, Serialize};

use super::value_object::{Email, MemberId, Timestamp};

/// A registered user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Surrogate key assigned by the store
    pub id: MemberId,
    /// Unique business key, also the login identity
    pub email: Email,
    /// Stored as given (plaintext)
    pub password: String,
    /// Display name
    pub name: String,
    /// Phone number
    pub phone: String,
    /// Timestamp when the member joined
    pub created_at: Timestamp,
    /// Timestamp of the last applied patch
    pub updated_at: Timestamp,
}

impl Member {
    /// Check a login password by exact string equality.
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }

    /// Apply a partial update in place.
    ///
    /// Present fields overwrite, absent fields are left untouched.
    /// `updated_at` moves only if something was overwritten.
    ///
    /// # Returns
    ///
    /// `true` if at least one field was present in the patch
    pub fn apply_patch(&mut self, patch: MemberPatch, now: Timestamp) -> bool {
        if patch.is_empty() {
            return false;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        self.updated_at = now;
        true
    }
}

/// A member that has not been stored yet (no id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub email: Email,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub created_at: Timestamp,
}

impl NewMember {
    /// Create a new member record from the four join fields.
    pub fn new(
        email: Email,
        password: String,
        name: String,
        phone: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            email,
            password,
            name,
            phone,
            created_at,
        }
    }

    /// Attach the store-assigned id.
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            email: self.email,
            password: self.password,
            name: self.name,
            phone: self.phone,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Partial update of a member profile
///
/// The email is the business key and cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPatch {
    pub password: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl MemberPatch {
    /// Whether no field is present
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.name.is_none() && self.phone.is_none()
    }
}

/// A to-do item owned by exactly one member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub member_id: MemberId,
    pub title: String,
}

impl Todo {
    /// Create a new to-do item
    pub fn new(id: i64, member_id: MemberId, title: String) -> Self {
        Self {
            id,
            member_id,
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_member() -> Member {
        NewMember::new(
            Email::new("a@x.com".to_string()).unwrap(),
            "p1".to_string(),
            "A".to_string(),
            "111".to_string(),
            Timestamp::new(1000),
        )
        .into_member(MemberId::new(1).unwrap())
    }

    #[test]
    fn test_new_member_into_member() {
        // テスト項目: 保存前の会員に ID を付与すると作成日時と更新日時が揃う
        // when (操作):
        let member = create_member();

        // then (期待する結果):
        assert_eq!(member.id.value(), 1);
        assert_eq!(member.email.as_str(), "a@x.com");
        assert_eq!(member.created_at, Timestamp::new(1000));
        assert_eq!(member.updated_at, Timestamp::new(1000));
    }

    #[test]
    fn test_password_matches_exact_equality() {
        // テスト項目: パスワードは完全一致でのみ照合される
        // given (前提条件):
        let member = create_member();

        // then (期待する結果):
        assert!(member.password_matches("p1"));
        assert!(!member.password_matches("P1"));
        assert!(!member.password_matches("p1 "));
    }

    #[test]
    fn test_apply_patch_overwrites_present_fields_only() {
        // テスト項目: パッチに含まれるフィールドのみ上書きされる
        // given (前提条件):
        let mut member = create_member();
        let patch = MemberPatch {
            name: Some("B".to_string()),
            ..Default::default()
        };

        // when (操作):
        let changed = member.apply_patch(patch, Timestamp::new(2000));

        // then (期待する結果):
        assert!(changed);
        assert_eq!(member.name, "B");
        assert_eq!(member.password, "p1");
        assert_eq!(member.phone, "111");
        assert_eq!(member.updated_at, Timestamp::new(2000));
        assert_eq!(member.created_at, Timestamp::new(1000));
    }

    #[test]
    fn test_apply_patch_all_fields() {
        // テスト項目: 全フィールドを含むパッチで全て上書きされる
        // given (前提条件):
        let mut member = create_member();
        let patch = MemberPatch {
            password: Some("p2".to_string()),
            name: Some("B".to_string()),
            phone: Some("222".to_string()),
        };

        // when (操作):
        member.apply_patch(patch, Timestamp::new(2000));

        // then (期待する結果):
        assert!(member.password_matches("p2"));
        assert_eq!(member.name, "B");
        assert_eq!(member.phone, "222");
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        // テスト項目: 空のパッチでは何も変わらない（更新日時も据え置き）
        // given (前提条件):
        let mut member = create_member();
        let before = member.clone();

        // when (操作):
        let changed = member.apply_patch(MemberPatch::default(), Timestamp::new(2000));

        // then (期待する結果):
        assert!(!changed);
        assert_eq!(member, before);
    }
}
