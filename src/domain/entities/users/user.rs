//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 생성 시점에 모든 필드 규칙을 검증하며, 생성 이후에는 변경할 수 없습니다.

use uuid::Uuid;

use crate::core::errors::{ValidationError, ValidationKind};
use crate::domain::value_objects::Cpf;
use crate::utils::string_utils::is_valid_string;

/// 사용자 엔티티
///
/// `User::create`가 유일한 생성 경로입니다. 필드가 비공개이므로
/// 유효하지 않은 상태의 `User`는 존재할 수 없습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// 생성 시 발급되는 고유 ID (UUID v4)
    id: Uuid,
    /// 사용자 이름 (비어 있거나 공백뿐일 수 없음)
    name: String,
    /// 나이 (0 이상)
    age: u32,
    /// 검증된 CPF
    cpf: Cpf,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 이름 → 나이 → CPF 순서로 검증하며, 처음 실패한 규칙의 에러를 반환합니다.
    /// CPF 에러는 [`Cpf::new`]가 반환한 그대로 전달됩니다.
    ///
    /// # 에러
    ///
    /// * `ValidationKind::NameRequired` - 이름이 비어 있거나 공백뿐
    /// * `ValidationKind::AgeNegative` - 나이가 음수
    /// * `Cpf::new`의 모든 에러
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let user = User::create("Maria", 25, "987.654.321-00")?;
    /// assert_eq!(user.cpf().formatted(), "987.654.321-00");
    /// ```
    pub fn create(name: &str, age: i32, cpf: &str) -> Result<Self, ValidationError> {
        if !is_valid_string(name) {
            return Err(ValidationError::new(ValidationKind::NameRequired));
        }

        let age = u32::try_from(age).map_err(|_| ValidationError::new(ValidationKind::AgeNegative))?;

        let cpf = Cpf::new(cpf)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age,
            cpf,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }
}
