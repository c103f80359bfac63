//! Members Entity Module
//!
//! 멤버십 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`Person`] - 회원 그래프의 노드. 값 객체로 구성되며 자신이 소유한 관계(edge)를 가집니다.
//! - [`Relationship`] - `from` → `to` 방향의 타입이 있는 관계. 양 끝점은 person 식별자로 보관합니다.
//! - [`Address`], [`MembershipInformation`] - Person에 임베드되는 하위 객체
//! - [`MembershipType`], [`RelationshipType`], [`States`] - 정수 코드로 영속화되는 열거형
//!
//! # 열거형 코드 정책
//!
//! 모든 열거형은 열거자마다 고정된 정수 코드를 가지며 버전 간 재배치하지 않습니다.
//! 알 수 없는 코드는 `Unknown(code)`로 보존되어 왕복 변환 시 원래 값이 유지됩니다.

/// 고정 정수 코드를 가지는 열거형을 정의합니다.
///
/// `code()`, `from_code()`, `Display`와 알 수 없는 코드를 보존하는 `Unknown(i32)` 변형을 생성합니다.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident = $code:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
            /// 이 버전에서 알 수 없는 코드
            Unknown(i32),
        }

        impl $name {
            /// 열거자 전체 (Unknown 제외), 코드 순서
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// 영속화용 정수 코드
            pub fn code(&self) -> i32 {
                match self {
                    $( $name::$variant => $code, )+
                    $name::Unknown(code) => *code,
                }
            }

            /// 정수 코드에서 복원합니다. 알 수 없는 코드는 `Unknown`으로 보존합니다.
            pub fn from_code(code: i32) -> Self {
                match code {
                    $( $code => $name::$variant, )+
                    other => $name::Unknown(other),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                Self::from_code(code)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $( $name::$variant => f.write_str($label), )+
                    $name::Unknown(code) => write!(f, "Unknown({})", code),
                }
            }
        }
    };
}

pub mod membership_type;
pub mod relationship_type;
pub mod states;
pub mod address;
pub mod membership_information;
pub mod relationship;
pub mod person;

pub use membership_type::MembershipType;
pub use relationship_type::RelationshipType;
pub use states::States;
pub use address::Address;
pub use membership_information::MembershipInformation;
pub use relationship::Relationship;
pub use person::Person;
