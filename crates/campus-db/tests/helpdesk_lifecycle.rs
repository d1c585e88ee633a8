use campus_core::error::{CampusError, RequestError};
use campus_core::types::enums::{AssigneeType, RequestCategory, RequestStatus};
use campus_core::types::ids::RequestId;
use campus_core::types::io::{CreateRequestInput, CreateSlotInput, RequestFilter, RespondInput};
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

fn sample_request(title: &str) -> CreateRequestInput {
    CreateRequestInput {
        created_by: "student-1".to_string(),
        assignee_type: AssigneeType::Institution,
        assignee_id: None,
        institution_id: Some("inst-1".to_string()),
        institution_slug: Some("tu-berlin".to_string()),
        category: RequestCategory::Administration,
        title: title.to_string(),
        description: Some("please help".to_string()),
    }
}

fn respond(status: RequestStatus, note: &str, by: &str) -> RespondInput {
    RespondInput {
        status,
        note: Some(note.to_string()),
        responded_by: Some(by.to_string()),
    }
}

fn filed_request_starts_pending<S: Store>(campus: &Campus<S>) {
    let request = campus
        .helpdesk()
        .file_request(sample_request("Lost my enrollment letter"))
        .unwrap();

    assert_eq!(request.status, RequestStatus::Pending);
    assert!(request.timeline.is_empty());
    assert_eq!(request.created_at, request.updated_at);

    let fetched = campus.helpdesk().get(&request.id).unwrap();
    assert_eq!(fetched.id, request.id);
    assert_eq!(fetched.status, RequestStatus::Pending);
}

#[test]
fn filed_request_starts_pending_sqlite() {
    filed_request_starts_pending(&sqlite_campus());
}

#[test]
fn filed_request_starts_pending_demo() {
    filed_request_starts_pending(&demo_campus());
}

fn respond_appends_and_sets_status<S: Store>(campus: &Campus<S>) {
    let request = campus
        .helpdesk()
        .file_request(sample_request("Tuition invoice wrong"))
        .unwrap();

    let after_accept = campus
        .helpdesk()
        .respond(
            &request.id,
            respond(RequestStatus::Accepted, "Looking into it", "Admin Office"),
        )
        .unwrap();
    assert_eq!(after_accept.status, RequestStatus::Accepted);
    assert_eq!(after_accept.timeline.len(), 1);

    let after_resolve = campus
        .helpdesk()
        .respond(
            &request.id,
            respond(RequestStatus::Resolved, "Corrected invoice sent", "Admin Office"),
        )
        .unwrap();
    assert_eq!(after_resolve.status, RequestStatus::Resolved);
    assert_eq!(after_resolve.timeline.len(), 2);

    let last = &after_resolve.timeline[1];
    assert_eq!(last.status, RequestStatus::Resolved);
    assert_eq!(last.note.as_deref(), Some("Corrected invoice sent"));
    assert_eq!(last.by.as_deref(), Some("Admin Office"));
    assert!(after_resolve.timeline[0].at <= last.at);
}

#[test]
fn respond_appends_and_sets_status_sqlite() {
    respond_appends_and_sets_status(&sqlite_campus());
}

#[test]
fn respond_appends_and_sets_status_demo() {
    respond_appends_and_sets_status(&demo_campus());
}

fn retried_respond_appends_twice<S: Store>(campus: &Campus<S>) {
    let request = campus
        .helpdesk()
        .file_request(sample_request("Card reader broken"))
        .unwrap();

    let input = respond(RequestStatus::Processing, "Technician dispatched", "IT");
    campus.helpdesk().respond(&request.id, input.clone()).unwrap();
    let after_retry = campus.helpdesk().respond(&request.id, input).unwrap();

    // A retry is a second response, not a no-op.
    assert_eq!(after_retry.timeline.len(), 2);
    assert_eq!(after_retry.timeline[0].note, after_retry.timeline[1].note);
    assert_eq!(after_retry.status, RequestStatus::Processing);
}

#[test]
fn retried_respond_appends_twice_sqlite() {
    retried_respond_appends_twice(&sqlite_campus());
}

#[test]
fn retried_respond_appends_twice_demo() {
    retried_respond_appends_twice(&demo_campus());
}

fn resolved_ticket_can_reopen<S: Store>(campus: &Campus<S>) {
    let request = campus
        .helpdesk()
        .file_request(sample_request("Grade missing"))
        .unwrap();

    campus
        .helpdesk()
        .respond(&request.id, respond(RequestStatus::Resolved, "Posted", "Registrar"))
        .unwrap();
    let reopened = campus
        .helpdesk()
        .respond(
            &request.id,
            respond(RequestStatus::Processing, "Still missing for module 2", "Registrar"),
        )
        .unwrap();

    assert_eq!(reopened.status, RequestStatus::Processing);
    assert_eq!(reopened.timeline.len(), 2);
}

#[test]
fn resolved_ticket_can_reopen_sqlite() {
    resolved_ticket_can_reopen(&sqlite_campus());
}

#[test]
fn resolved_ticket_can_reopen_demo() {
    resolved_ticket_can_reopen(&demo_campus());
}

fn respond_unknown_id_is_not_found<S: Store>(campus: &Campus<S>) {
    let existing = campus
        .helpdesk()
        .file_request(sample_request("Dorm key"))
        .unwrap();

    let missing = RequestId::generate();
    let err = campus
        .helpdesk()
        .respond(&missing, respond(RequestStatus::Accepted, "ok", "Admin"))
        .unwrap_err();
    assert!(matches!(
        err,
        CampusError::Request(RequestError::NotFound)
    ));

    // The failed respond must not have touched the existing ticket.
    let untouched = campus.helpdesk().get(&existing.id).unwrap();
    assert_eq!(untouched.status, RequestStatus::Pending);
    assert!(untouched.timeline.is_empty());
}

#[test]
fn respond_unknown_id_is_not_found_sqlite() {
    respond_unknown_id_is_not_found(&sqlite_campus());
}

#[test]
fn respond_unknown_id_is_not_found_demo() {
    respond_unknown_id_is_not_found(&demo_campus());
}

fn list_filters_by_institution_newest_first<S: Store>(campus: &Campus<S>) {
    let mut berlin = sample_request("First");
    berlin.institution_slug = Some("tu-berlin".to_string());
    campus.helpdesk().file_request(berlin).unwrap();

    std::thread::sleep(Duration::from_millis(2));

    let mut munich = sample_request("Second");
    munich.institution_slug = Some("lmu-munich".to_string());
    campus.helpdesk().file_request(munich).unwrap();

    std::thread::sleep(Duration::from_millis(2));

    let mut berlin_again = sample_request("Third");
    berlin_again.institution_slug = Some("tu-berlin".to_string());
    campus.helpdesk().file_request(berlin_again).unwrap();

    let filter = RequestFilter {
        institution_slug: Some("tu-berlin".to_string()),
        ..RequestFilter::default()
    };
    let listed = campus.helpdesk().list(&filter).unwrap();

    let titles: Vec<&str> = listed.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Third", "First"]);
}

#[test]
fn list_filters_by_institution_newest_first_sqlite() {
    list_filters_by_institution_newest_first(&sqlite_campus());
}

#[test]
fn list_filters_by_institution_newest_first_demo() {
    list_filters_by_institution_newest_first(&demo_campus());
}

fn instructor_sees_unassigned_and_own<S: Store>(campus: &Campus<S>) {
    let mut unassigned = sample_request("Any instructor please");
    unassigned.assignee_type = AssigneeType::Instructor;
    unassigned.assignee_id = None;
    unassigned.category = RequestCategory::Consultation;
    campus.helpdesk().file_request(unassigned).unwrap();

    let mut mine = sample_request("For Jane");
    mine.assignee_type = AssigneeType::Instructor;
    mine.assignee_id = Some("instructor-jane".to_string());
    mine.category = RequestCategory::Consultation;
    campus.helpdesk().file_request(mine).unwrap();

    let mut someone_elses = sample_request("For John");
    someone_elses.assignee_type = AssigneeType::Instructor;
    someone_elses.assignee_id = Some("instructor-john".to_string());
    someone_elses.category = RequestCategory::Consultation;
    campus.helpdesk().file_request(someone_elses).unwrap();

    let mut institution_ticket = sample_request("Office matter");
    institution_ticket.assignee_type = AssigneeType::Institution;
    campus.helpdesk().file_request(institution_ticket).unwrap();

    let filter = RequestFilter {
        assigned_instructor: Some("instructor-jane".to_string()),
        ..RequestFilter::default()
    };
    let listed = campus.helpdesk().list(&filter).unwrap();

    let mut titles: Vec<&str> = listed.iter().map(|r| r.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["Any instructor please", "For Jane"]);
}

#[test]
fn instructor_sees_unassigned_and_own_sqlite() {
    instructor_sees_unassigned_and_own(&sqlite_campus());
}

#[test]
fn instructor_sees_unassigned_and_own_demo() {
    instructor_sees_unassigned_and_own(&demo_campus());
}

fn consultation_accept_flow<S: Store>(campus: &Campus<S>) {
    let mut input = sample_request("Office hours question");
    input.assignee_type = AssigneeType::Instructor;
    input.assignee_id = None;
    input.category = RequestCategory::Consultation;
    let request = campus.helpdesk().file_request(input).unwrap();

    let accepted = campus
        .helpdesk()
        .respond(
            &request.id,
            respond(RequestStatus::Accepted, "Will call Monday", "Jane Doe"),
        )
        .unwrap();

    assert_eq!(accepted.status, RequestStatus::Accepted);
    let entry = accepted.timeline.last().unwrap();
    assert_eq!(entry.status, RequestStatus::Accepted);
    assert_eq!(entry.note.as_deref(), Some("Will call Monday"));
    assert_eq!(entry.by.as_deref(), Some("Jane Doe"));
}

#[test]
fn consultation_accept_flow_sqlite() {
    consultation_accept_flow(&sqlite_campus());
}

#[test]
fn consultation_accept_flow_demo() {
    consultation_accept_flow(&demo_campus());
}

fn delete_removes_request<S: Store>(campus: &Campus<S>) {
    let request = campus
        .helpdesk()
        .file_request(sample_request("Remove me"))
        .unwrap();

    campus.helpdesk().delete(&request.id).unwrap();

    let err = campus.helpdesk().get(&request.id).unwrap_err();
    assert!(matches!(
        err,
        CampusError::Request(RequestError::NotFound)
    ));

    let err = campus.helpdesk().delete(&request.id).unwrap_err();
    assert!(matches!(
        err,
        CampusError::Request(RequestError::NotFound)
    ));
}

#[test]
fn delete_removes_request_sqlite() {
    delete_removes_request(&sqlite_campus());
}

#[test]
fn delete_removes_request_demo() {
    delete_removes_request(&demo_campus());
}

#[test]
fn blank_title_is_rejected() {
    let campus = sqlite_campus();
    let mut input = sample_request("  ");
    input.title = "   ".to_string();
    let err = campus.helpdesk().file_request(input).unwrap_err();
    assert!(matches!(
        err,
        CampusError::Request(RequestError::InvalidInput { .. })
    ));
}

fn slots_sorted_by_weekday_then_start<S: Store>(campus: &Campus<S>) {
    let slots = campus.slots();
    slots
        .publish(CreateSlotInput {
            instructor_id: "instructor-jane".to_string(),
            weekday: 3,
            start_minutes: 600,
            end_minutes: 660,
        })
        .unwrap();
    slots
        .publish(CreateSlotInput {
            instructor_id: "instructor-jane".to_string(),
            weekday: 1,
            start_minutes: 840,
            end_minutes: 900,
        })
        .unwrap();
    slots
        .publish(CreateSlotInput {
            instructor_id: "instructor-john".to_string(),
            weekday: 1,
            start_minutes: 540,
            end_minutes: 600,
        })
        .unwrap();

    let listed = slots.list().unwrap();
    let order: Vec<(u8, u16)> = listed
        .iter()
        .map(|slot| (slot.weekday, slot.start_minutes))
        .collect();
    assert_eq!(order, vec![(1, 540), (1, 840), (3, 600)]);
}

#[test]
fn slots_sorted_by_weekday_then_start_sqlite() {
    slots_sorted_by_weekday_then_start(&sqlite_campus());
}

#[test]
fn slots_sorted_by_weekday_then_start_demo() {
    slots_sorted_by_weekday_then_start(&demo_campus());
}

#[test]
fn slot_with_backwards_window_is_rejected() {
    let campus = sqlite_campus();
    let err = campus
        .slots()
        .publish(CreateSlotInput {
            instructor_id: "instructor-jane".to_string(),
            weekday: 2,
            start_minutes: 700,
            end_minutes: 700,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        CampusError::Slot(campus_core::error::SlotError::InvalidInput { .. })
    ));
}
