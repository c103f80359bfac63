//! MongoDB 기반 멤버십 리포지토리 모듈
//!
//! [`MongoPersonRepository`]와 [`MongoRelationshipRepository`]는 같은 [`Database`](crate::db::Database)
//! 커넥션 풀을 공유합니다. 컬렉션 이름은 [`DatabaseConfig`](crate::config::DatabaseConfig)에서 옵니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let db = Arc::new(Database::new(&config).await?);
//! let persons = MongoPersonRepository::new(db.clone(), &config.person_collection);
//! let relationships = MongoRelationshipRepository::new(db, &config.relationship_collection);
//! ```

pub mod person_repo;
pub mod relationship_repo;

pub use person_repo::MongoPersonRepository;
pub use relationship_repo::MongoRelationshipRepository;
