use std::sync::Arc;

use chrono::NaiveDate;
use mongodb::bson;
use tokio_util::sync::CancellationToken;

use membership_service_backend::domain::dto::{AddressDto, MembershipInformationDto, PersonDto};
use membership_service_backend::domain::entities::{
    Address, MembershipInformation, MembershipType, Person, RelationshipType, States,
};
use membership_service_backend::domain::value_objects::{DateOfBirth, DateOfMembership, EmailAddress, NamePart};
use membership_service_backend::errors::AppError;
use membership_service_backend::repositories::{
    InMemoryPersonRepository, InMemoryRelationshipRepository, PersonRepository,
};
use membership_service_backend::services::members::MembershipService;

struct Fixture {
    persons: Arc<InMemoryPersonRepository>,
    relationships: Arc<InMemoryRelationshipRepository>,
    service: MembershipService,
    token: CancellationToken,
}

fn fixture() -> Fixture {
    let persons = Arc::new(InMemoryPersonRepository::new());
    let relationships = Arc::new(InMemoryRelationshipRepository::new());
    let service = MembershipService::new(persons.clone(), relationships.clone());
    Fixture {
        persons,
        relationships,
        service,
        token: CancellationToken::new(),
    }
}

fn member(first: &str, last: &str, membership_type: MembershipType, active: bool) -> Person {
    Person::new(
        NamePart::new(first).unwrap(),
        NamePart::new(last).unwrap(),
        EmailAddress::new(format!("{}.{}@example.org", first.to_lowercase(), last.to_lowercase())).unwrap(),
        DateOfBirth::new(NaiveDate::from_ymd_opt(1988, 4, 17).unwrap()).unwrap(),
        MembershipInformation::new(
            membership_type,
            DateOfMembership::new(NaiveDate::from_ymd_opt(2012, 6, 1).unwrap()).unwrap(),
            "met at the annual reunion",
            active,
        ),
        Address::new("12 Harbor Rd", Some("Unit 4".to_string()), "Duluth", States::Minnesota, "55802").unwrap(),
    )
}

async fn saved(fx: &Fixture, first: &str, last: &str) -> Person {
    fx.service
        .save_person(&member(first, last, MembershipType::Full, true), &fx.token)
        .await
        .unwrap()
}

fn sorted_edges(person: &Person) -> Vec<(String, String)> {
    let mut edges: Vec<(String, String)> = person
        .relationships
        .iter()
        .map(|r| (r.to.clone(), r.relationship_type.to_string()))
        .collect();
    edges.sort();
    edges
}

#[tokio::test]
async fn unknown_id_yields_default_person() {
    let fx = fixture();

    let person = fx.service.get_person("65f0c0ffee00000000000000", &fx.token).await.unwrap();
    assert!(person.is_empty());
    assert!(person.relationships.is_empty());

    let strict = fx.service.find_person("65f0c0ffee00000000000000", &fx.token).await.unwrap();
    assert!(strict.is_none());
}

#[tokio::test]
async fn saved_person_reads_back_with_relationships() {
    let fx = fixture();
    let jimmy = saved(&fx, "Jimmy", "Walsh").await;
    let ann = saved(&fx, "Ann", "Walsh").await;

    let mut bob = member("Bob", "Walsh", MembershipType::Family, true);
    bob.add_relationship(jimmy.id_str(), RelationshipType::Parent).unwrap();
    bob.add_relationship(ann.id_str(), RelationshipType::Sibling).unwrap();
    let bob = fx.service.save_person(&bob, &fx.token).await.unwrap();

    let id = bob.id.clone().unwrap();
    assert!(bob.updated_on.is_some());
    assert!(bob.relationships.iter().all(|r| r.from == id && r.id.is_some()));

    let loaded = fx.service.get_person(&id, &fx.token).await.unwrap();
    assert_eq!(loaded.first_name, bob.first_name);
    assert_eq!(loaded.address, bob.address);
    assert_eq!(loaded.membership_information, bob.membership_information);
    assert_eq!(loaded.added_on, bob.added_on);
    assert_eq!(sorted_edges(&loaded), sorted_edges(&bob));
}

#[tokio::test]
async fn archived_members_only_with_include_archived() {
    let fx = fixture();
    fx.service
        .save_person(&member("Ada", "Byron", MembershipType::Life, true), &fx.token)
        .await
        .unwrap();
    let retired = fx
        .service
        .save_person(&member("Edith", "Clarke", MembershipType::Full, false), &fx.token)
        .await
        .unwrap();

    let active = fx.service.get_all_active_members(&fx.token).await.unwrap();
    assert_eq!(active.len(), 1);
    assert!(active.iter().all(|p| p.is_active()));
    assert!(active.iter().all(|p| p.id != retired.id));

    let everyone = fx.service.get_all_members(true, &fx.token).await.unwrap();
    assert_eq!(everyone.len(), 2);
    assert!(everyone.iter().any(|p| p.id == retired.id));
}

#[tokio::test]
async fn delete_removes_owned_edges_but_not_incoming() {
    let fx = fixture();
    let jimmy = saved(&fx, "Jimmy", "Walsh").await;
    let ann = saved(&fx, "Ann", "Walsh").await;

    let mut bob = member("Bob", "Walsh", MembershipType::Family, true);
    bob.add_relationship(jimmy.id_str(), RelationshipType::Parent).unwrap();
    bob.add_relationship(ann.id_str(), RelationshipType::Sibling).unwrap();
    let bob = fx.service.save_person(&bob, &fx.token).await.unwrap();

    let mut carl = member("Carl", "Walsh", MembershipType::Full, true);
    carl.add_relationship(bob.id_str(), RelationshipType::Cousin).unwrap();
    let carl = fx.service.save_person(&carl, &fx.token).await.unwrap();
    assert_eq!(fx.relationships.len().await, 3);

    let deletion = fx.service.delete_member(&bob, &fx.token).await.unwrap();
    assert_eq!(deletion.person.deleted_count, 1);
    assert_eq!(deletion.relationships.deleted_count, 2);

    assert_eq!(fx.relationships.len().await, 1);
    let carl = fx.service.get_person(carl.id_str(), &fx.token).await.unwrap();
    assert_eq!(carl.relationships.len(), 1);
    assert_eq!(carl.relationships[0].to, bob.id_str());
    assert!(fx.service.find_person(bob.id_str(), &fx.token).await.unwrap().is_none());
}

#[tokio::test]
async fn name_search_attaches_edges_to_their_owner_only() {
    let fx = fixture();
    let grace = saved(&fx, "Grace", "Hopper").await;

    let mut ann = member("Ann", "Lovelace", MembershipType::Full, true);
    ann.add_relationship(grace.id_str(), RelationshipType::Guardian).unwrap();
    let ann = fx.service.save_person(&ann, &fx.token).await.unwrap();

    let mut lovisa = member("Lovisa", "Smith", MembershipType::Full, true);
    lovisa.add_relationship(ann.id_str(), RelationshipType::Ward).unwrap();
    fx.service.save_person(&lovisa, &fx.token).await.unwrap();

    let found = fx.service.get_persons_by_name("LOV", false, &fx.token).await.unwrap();
    assert_eq!(found.len(), 2);
    for person in &found {
        assert_eq!(person.relationships.len(), 1);
        assert!(person.relationships[0].is_owned_by(person.id_str()));
    }
}

#[tokio::test]
async fn save_rejects_missing_target_before_writing() {
    let fx = fixture();

    let mut bob = member("Bob", "Walsh", MembershipType::Full, true);
    bob.add_relationship("65f0c0ffee0000000000dead", RelationshipType::Parent).unwrap();

    let err = fx.service.save_person(&bob, &fx.token).await.unwrap_err();
    assert_eq!(err.validation_field(), Some("Relationship"));
    assert_eq!(fx.persons.len().await, 0);
    assert_eq!(fx.relationships.len().await, 0);
}

#[tokio::test]
async fn save_rejects_self_relationship() {
    let fx = fixture();
    let mut bob = saved(&fx, "Bob", "Walsh").await;

    // add_relationship는 self-edge를 막으므로 필드를 직접 조작
    bob.add_relationship("placeholder", RelationshipType::Sibling).unwrap();
    bob.relationships[0].to = bob.id.clone().unwrap();

    let err = fx.service.save_person(&bob, &fx.token).await.unwrap_err();
    assert_eq!(err.validation_field(), Some("Relationship"));
    assert_eq!(fx.relationships.len().await, 0);
}

#[tokio::test]
async fn default_person_cannot_be_saved() {
    let fx = fixture();
    let err = fx.service.save_person(&Person::default(), &fx.token).await.unwrap_err();
    assert_eq!(err.validation_field(), Some("FirstName"));
}

#[tokio::test]
async fn relationship_store_failure_leaves_person_saved_and_retry_is_idempotent() {
    let fx = fixture();
    let jimmy = saved(&fx, "Jimmy", "Walsh").await;
    let mut bob = saved(&fx, "Bob", "Walsh").await;
    bob.add_relationship(jimmy.id_str(), RelationshipType::Parent).unwrap();

    fx.relationships.set_unavailable(true);
    let err = fx.service.save_person(&bob, &fx.token).await.unwrap_err();
    assert!(matches!(err, AppError::DatabaseError(_)));
    assert_eq!(fx.persons.len().await, 2);

    fx.relationships.set_unavailable(false);
    let bob = fx.service.save_person(&bob, &fx.token).await.unwrap();
    assert_eq!(fx.persons.len().await, 2);
    assert_eq!(fx.relationships.len().await, 1);
    assert_eq!(bob.relationships.len(), 1);
}

#[tokio::test]
async fn cancelled_token_aborts_without_writing() {
    let fx = fixture();
    let cancelled = CancellationToken::new();
    cancelled.cancel();

    let err = fx.service.get_all_active_members(&cancelled).await.unwrap_err();
    assert!(matches!(err, AppError::Cancelled));

    let err = fx
        .service
        .save_person(&member("Bob", "Walsh", MembershipType::Full, true), &cancelled)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Cancelled));
    assert_eq!(fx.persons.len().await, 0);
}

#[tokio::test]
async fn related_persons_resolve_lazily_and_skip_dangling_edges() {
    let fx = fixture();
    let jimmy = saved(&fx, "Jimmy", "Walsh").await;
    let ann = saved(&fx, "Ann", "Walsh").await;

    let mut bob = member("Bob", "Walsh", MembershipType::Family, true);
    bob.add_relationship(jimmy.id_str(), RelationshipType::Parent).unwrap();
    bob.add_relationship(ann.id_str(), RelationshipType::Sibling).unwrap();
    let bob = fx.service.save_person(&bob, &fx.token).await.unwrap();

    let related = fx.service.get_related_persons(&bob, &fx.token).await.unwrap();
    assert_eq!(related.len(), 2);
    let parent = related
        .iter()
        .find(|r| r.relationship.relationship_type == RelationshipType::Parent)
        .unwrap();
    assert_eq!(parent.person.full_name(), "Jimmy Walsh");

    fx.service.delete_member(&jimmy, &fx.token).await.unwrap();
    let related = fx.service.get_related_persons(&bob, &fx.token).await.unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].person.id, ann.id);
}

#[tokio::test]
async fn queries_by_membership_type_and_relationship_type() {
    let fx = fixture();
    let jimmy = saved(&fx, "Jimmy", "Walsh").await;
    let ann = saved(&fx, "Ann", "Walsh").await;

    let mut bob = member("Bob", "Walsh", MembershipType::Family, true);
    bob.add_relationship(jimmy.id_str(), RelationshipType::Parent).unwrap();
    bob.add_relationship(ann.id_str(), RelationshipType::Sibling).unwrap();
    let bob = fx.service.save_person(&bob, &fx.token).await.unwrap();

    let families = fx
        .service
        .get_members_by_membership_types(&[MembershipType::Family], false, &fx.token)
        .await
        .unwrap();
    assert_eq!(families.len(), 1);
    assert_eq!(families[0].relationships.len(), 2);

    let both = fx
        .service
        .get_members_by_membership_types(&[MembershipType::Family, MembershipType::Full], false, &fx.token)
        .await
        .unwrap();
    assert_eq!(both.len(), 3);

    let parents = fx
        .service
        .get_relationships_by_type(bob.id_str(), RelationshipType::Parent, &fx.token)
        .await
        .unwrap();
    assert_eq!(parents.len(), 1);
    assert_eq!(parents[0].to, jimmy.id_str());
}

#[tokio::test]
async fn corrupt_stored_record_surfaces_as_validation_error() {
    let fx = fixture();
    let record = PersonDto {
        id: Some("65f0c0ffee0000000000a0b3".to_string()),
        first_name: "Bob3".to_string(),
        last_name: "Walsh".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
        email: "bob@example.org".to_string(),
        membership_information: MembershipInformationDto {
            id: None,
            membership_type: 1,
            date_of_membership: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            membership_story: String::new(),
            is_active: true,
        },
        address: AddressDto {
            id: None,
            street_line1: "1 Main St".to_string(),
            street_line2: None,
            city: "Duluth".to_string(),
            state: 23,
            postal_code: "55802".to_string(),
        },
        added_on: bson::DateTime::now(),
        updated: None,
    };
    fx.persons.create_or_update_person(record, &fx.token).await.unwrap();

    let err = fx.service.get_person("65f0c0ffee0000000000a0b3", &fx.token).await.unwrap_err();
    assert_eq!(err.validation_field(), Some("NamePart"));
}
