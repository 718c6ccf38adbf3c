use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// `cpf`는 항상 `DDD.DDD.DDD-DD` 표시 형식입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub cpf: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_string(),
            age: user.age(),
            cpf: user.cpf().formatted(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
