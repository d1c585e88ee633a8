use campus_core::error::{CampusError, PollError, ResourceError};
use campus_core::types::enums::{ResourceKind, SignupRole, SignupStatus};
use campus_core::types::io::{
    CreateAnnouncementInput, CreateCourseInput, CreateItemInput, CreatePollInput,
    SubmitSignupInput, UpdateAnnouncementInput, UpdateItemInput, VoteInput,
};
use campus_core::polls::PollRepository;
use campus_core::types::poll::PollOption;
use campus_core::{Campus, Store};
use campus_db::{schema, DbStore, MemStore};
use std::time::Duration;

fn sqlite_campus() -> Campus<DbStore> {
    let conn = schema::open_in_memory().expect("in-memory db");
    Campus::new(DbStore::new(conn))
}

fn demo_campus() -> Campus<MemStore> {
    Campus::new(MemStore::new())
}

fn announcement(title: &str, pinned: bool) -> CreateAnnouncementInput {
    CreateAnnouncementInput {
        title: title.to_string(),
        content: "details".to_string(),
        author: None,
        pinned,
        announcement_type: None,
        institution_id: "inst-1".to_string(),
        institution_slug: "tu-berlin".to_string(),
    }
}

fn pinned_announcements_list_first<S: Store>(campus: &Campus<S>) {
    campus
        .announcements()
        .create(announcement("Old note", false))
        .unwrap();
    std::thread::sleep(Duration::from_millis(2));
    campus
        .announcements()
        .create(announcement("Exam schedule", true))
        .unwrap();
    std::thread::sleep(Duration::from_millis(2));
    campus
        .announcements()
        .create(announcement("Fresh note", false))
        .unwrap();

    let listed = campus.announcements().list(Some("tu-berlin")).unwrap();
    let titles: Vec<&str> = listed.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Exam schedule", "Fresh note", "Old note"]);
}

#[test]
fn pinned_announcements_list_first_sqlite() {
    pinned_announcements_list_first(&sqlite_campus());
}

#[test]
fn pinned_announcements_list_first_demo() {
    pinned_announcements_list_first(&demo_campus());
}

fn announcement_update_and_slug_filter<S: Store>(campus: &Campus<S>) {
    let created = campus
        .announcements()
        .create(announcement("Library hours", false))
        .unwrap();
    assert_eq!(created.author, "Admin");

    let mut other = announcement("Elsewhere", false);
    other.institution_slug = "lmu-munich".to_string();
    campus.announcements().create(other).unwrap();

    let updated = campus
        .announcements()
        .update(
            &created.id,
            UpdateAnnouncementInput {
                pinned: Some(true),
                ..UpdateAnnouncementInput::default()
            },
        )
        .unwrap();
    assert!(updated.pinned);
    assert_eq!(updated.title, "Library hours");

    let listed = campus.announcements().list(Some("tu-berlin")).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Library hours");
}

#[test]
fn announcement_update_and_slug_filter_sqlite() {
    announcement_update_and_slug_filter(&sqlite_campus());
}

#[test]
fn announcement_update_and_slug_filter_demo() {
    announcement_update_and_slug_filter(&demo_campus());
}

fn poll_input(title: &str) -> CreatePollInput {
    CreatePollInput {
        title: title.to_string(),
        description: None,
        kind: None,
        options: vec![
            PollOption {
                id: "opt-1".to_string(),
                label: "Yes".to_string(),
            },
            PollOption {
                id: "opt-2".to_string(),
                label: "No".to_string(),
            },
        ],
        target_instructor_id: None,
        target_instructor_name: None,
        created_for: None,
        target_room_id: None,
        created_by: Some("inst-1".to_string()),
    }
}

fn vote(student_id: &str, option_id: &str) -> VoteInput {
    VoteInput {
        student_id: student_id.to_string(),
        student_name: Some("Sam".to_string()),
        option_id: Some(option_id.to_string()),
        text_answer: None,
        target_instructor_id: None,
        satisfaction_level: None,
        content_delivery_rating: None,
        recommendations: None,
    }
}

fn second_vote_is_rejected<S: Store>(campus: &Campus<S>) {
    let poll = campus.polls().create(poll_input("Move the lecture?")).unwrap();
    assert!(poll.is_active);

    campus.polls().vote(&poll.id, vote("student-1", "opt-1")).unwrap();
    let err = campus
        .polls()
        .vote(&poll.id, vote("student-1", "opt-2"))
        .unwrap_err();
    assert!(matches!(err, CampusError::Poll(PollError::DuplicateVote)));

    // A different student still gets through.
    campus.polls().vote(&poll.id, vote("student-2", "opt-2")).unwrap();

    let with_responses = campus.polls().get_with_responses(&poll.id).unwrap();
    assert_eq!(with_responses.responses.len(), 2);
    assert_eq!(with_responses.responses[0].student_id, "student-1");
}

#[test]
fn second_vote_is_rejected_sqlite() {
    second_vote_is_rejected(&sqlite_campus());
}

#[test]
fn second_vote_is_rejected_demo() {
    second_vote_is_rejected(&demo_campus());
}

// Goes through the repository directly: even without the service-level
// check, the demo store must not accept a second response for the same
// student, so two racing votes cannot both land.
#[test]
fn demo_vote_insert_enforces_one_per_student() {
    let store = MemStore::new();
    let poll = store.polls().create(poll_input("Move the lecture?")).unwrap();
    store
        .polls()
        .add_response(&poll.id, vote("student-1", "opt-1"))
        .unwrap();
    let err = store
        .polls()
        .add_response(&poll.id, vote("student-1", "opt-2"))
        .unwrap_err();
    assert!(matches!(err, PollError::DuplicateVote));
    assert_eq!(store.polls().responses(&poll.id).unwrap().len(), 1);
}

#[test]
fn vote_on_unknown_poll_is_not_found() {
    let campus = sqlite_campus();
    let missing = campus_core::types::ids::PollId::generate();
    let err = campus
        .polls()
        .vote(&missing, vote("student-1", "opt-1"))
        .unwrap_err();
    assert!(matches!(err, CampusError::Poll(PollError::PollNotFound)));
}

#[test]
fn evaluation_rating_out_of_range_is_rejected() {
    let campus = sqlite_campus();
    let poll = campus.polls().create(poll_input("Rate the course")).unwrap();
    let mut input = vote("student-1", "opt-1");
    input.satisfaction_level = Some(11);
    let err = campus.polls().vote(&poll.id, input).unwrap_err();
    assert!(matches!(
        err,
        CampusError::Poll(PollError::InvalidInput { .. })
    ));
}

fn course_delete_cascades_to_items<S: Store>(campus: &Campus<S>) {
    let resources = campus.resources();
    let course = resources
        .create_course(CreateCourseInput {
            name: "Databases".to_string(),
            code: Some("DB101".to_string()),
            description: None,
        })
        .unwrap();

    let kept = resources
        .create_course(CreateCourseInput {
            name: "Networks".to_string(),
            code: None,
            description: None,
        })
        .unwrap();

    resources
        .create_item(
            &course.id,
            CreateItemInput {
                title: "Week 1 slides".to_string(),
                kind: ResourceKind::Slides,
                url: Some("https://example.com/w1".to_string()),
                content: None,
                order: Some(1),
            },
        )
        .unwrap();
    let kept_item = resources
        .create_item(
            &kept.id,
            CreateItemInput {
                title: "Syllabus".to_string(),
                kind: ResourceKind::Pdf,
                url: Some("https://example.com/syllabus".to_string()),
                content: None,
                order: None,
            },
        )
        .unwrap();

    resources.delete_course(&course.id).unwrap();

    let err = resources.list_items(&course.id).unwrap_err();
    assert!(matches!(
        err,
        CampusError::Resource(ResourceError::CourseNotFound)
    ));

    let remaining = resources.list_items(&kept.id).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept_item.id);
}

#[test]
fn course_delete_cascades_to_items_sqlite() {
    course_delete_cascades_to_items(&sqlite_campus());
}

#[test]
fn course_delete_cascades_to_items_demo() {
    course_delete_cascades_to_items(&demo_campus());
}

fn items_ordered_by_position<S: Store>(campus: &Campus<S>) {
    let resources = campus.resources();
    let course = resources
        .create_course(CreateCourseInput {
            name: "Algorithms".to_string(),
            code: None,
            description: None,
        })
        .unwrap();

    resources
        .create_item(
            &course.id,
            CreateItemInput {
                title: "Second".to_string(),
                kind: ResourceKind::Text,
                url: None,
                content: Some("b".to_string()),
                order: Some(2),
            },
        )
        .unwrap();
    let first = resources
        .create_item(
            &course.id,
            CreateItemInput {
                title: "First".to_string(),
                kind: ResourceKind::Text,
                url: None,
                content: Some("a".to_string()),
                order: Some(1),
            },
        )
        .unwrap();

    let listed = resources.list_items(&course.id).unwrap();
    let titles: Vec<&str> = listed.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);

    let moved = resources
        .update_item(
            &first.id,
            UpdateItemInput {
                order: Some(3),
                ..UpdateItemInput::default()
            },
        )
        .unwrap();
    assert_eq!(moved.order, 3);

    let listed = resources.list_items(&course.id).unwrap();
    let titles: Vec<&str> = listed.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First"]);
}

#[test]
fn items_ordered_by_position_sqlite() {
    items_ordered_by_position(&sqlite_campus());
}

#[test]
fn items_ordered_by_position_demo() {
    items_ordered_by_position(&demo_campus());
}

fn signup_decision_round_trip<S: Store>(campus: &Campus<S>) {
    let submitted = campus
        .signups()
        .submit(SubmitSignupInput {
            role: SignupRole::Student,
            name: "Sam Student".to_string(),
            email: "sam@example.com".to_string(),
            institution_slug: "tu-berlin".to_string(),
        })
        .unwrap();
    assert_eq!(submitted.status, SignupStatus::Pending);
    assert!(submitted.note.is_none());

    let approved = campus
        .signups()
        .decide(
            &submitted.id,
            SignupStatus::Approved,
            Some("Welcome aboard".to_string()),
        )
        .unwrap();
    assert_eq!(approved.status, SignupStatus::Approved);
    assert_eq!(approved.note.as_deref(), Some("Welcome aboard"));

    // Deciding again without a note keeps the earlier one.
    let rejected = campus
        .signups()
        .decide(&submitted.id, SignupStatus::Rejected, None)
        .unwrap();
    assert_eq!(rejected.status, SignupStatus::Rejected);
    assert_eq!(rejected.note.as_deref(), Some("Welcome aboard"));

    let listed = campus.signups().list("tu-berlin").unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, SignupStatus::Rejected);
}

#[test]
fn signup_decision_round_trip_sqlite() {
    signup_decision_round_trip(&sqlite_campus());
}

#[test]
fn signup_decision_round_trip_demo() {
    signup_decision_round_trip(&demo_campus());
}
