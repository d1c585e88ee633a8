use crate::error::{PollError, RequestError, SignupError, SlotError};
use crate::types::io::{CreateRequestInput, CreateSlotInput, SubmitSignupInput, VoteInput};

const MINUTES_PER_DAY: u16 = 24 * 60;

pub fn validate_request_input(input: &CreateRequestInput) -> Result<(), RequestError> {
    if input.title.trim().is_empty() {
        return Err(RequestError::InvalidInput {
            message: "title is required".to_string(),
        });
    }
    if input.created_by.trim().is_empty() {
        return Err(RequestError::InvalidInput {
            message: "createdBy is required".to_string(),
        });
    }
    Ok(())
}

pub fn validate_slot_input(input: &CreateSlotInput) -> Result<(), SlotError> {
    if input.instructor_id.trim().is_empty() {
        return Err(SlotError::InvalidInput {
            message: "instructorId is required".to_string(),
        });
    }
    if input.weekday > 6 {
        return Err(SlotError::InvalidInput {
            message: "weekday must be 0-6".to_string(),
        });
    }
    if input.start_minutes >= input.end_minutes {
        return Err(SlotError::InvalidInput {
            message: "startMinutes must precede endMinutes".to_string(),
        });
    }
    if input.end_minutes > MINUTES_PER_DAY {
        return Err(SlotError::InvalidInput {
            message: "endMinutes out of range".to_string(),
        });
    }
    Ok(())
}

pub fn validate_vote_input(input: &VoteInput) -> Result<(), PollError> {
    if input.student_id.trim().is_empty() {
        return Err(PollError::InvalidInput {
            message: "studentId is required".to_string(),
        });
    }
    for rating in [input.satisfaction_level, input.content_delivery_rating]
        .into_iter()
        .flatten()
    {
        if !(1..=10).contains(&rating) {
            return Err(PollError::InvalidInput {
                message: "ratings must be between 1 and 10".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_signup_input(input: &SubmitSignupInput) -> Result<(), SignupError> {
    for (field, value) in [
        ("name", &input.name),
        ("email", &input.email),
        ("institutionSlug", &input.institution_slug),
    ] {
        if value.trim().is_empty() {
            return Err(SignupError::InvalidInput {
                message: format!("{field} is required"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::enums::{AssigneeType, RequestCategory, SignupRole};

    fn request_input() -> CreateRequestInput {
        CreateRequestInput {
            created_by: "student-1".to_string(),
            assignee_type: AssigneeType::Instructor,
            assignee_id: None,
            institution_id: None,
            institution_slug: Some("demo-institution".to_string()),
            category: RequestCategory::Consultation,
            title: "Need help".to_string(),
            description: None,
        }
    }

    #[test]
    fn accepts_valid_request() {
        assert!(validate_request_input(&request_input()).is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let input = CreateRequestInput {
            title: "   ".to_string(),
            ..request_input()
        };
        assert!(matches!(
            validate_request_input(&input),
            Err(RequestError::InvalidInput { .. })
        ));
    }

    #[test]
    fn rejects_weekday_out_of_range() {
        let input = CreateSlotInput {
            instructor_id: "instr-1".to_string(),
            weekday: 7,
            start_minutes: 540,
            end_minutes: 600,
        };
        assert!(validate_slot_input(&input).is_err());
    }

    #[test]
    fn rejects_inverted_slot_window() {
        let input = CreateSlotInput {
            instructor_id: "instr-1".to_string(),
            weekday: 1,
            start_minutes: 600,
            end_minutes: 540,
        };
        assert!(validate_slot_input(&input).is_err());
    }

    #[test]
    fn rejects_rating_out_of_range() {
        let input = VoteInput {
            student_id: "student-1".to_string(),
            student_name: None,
            option_id: None,
            text_answer: None,
            target_instructor_id: None,
            satisfaction_level: Some(11),
            content_delivery_rating: None,
            recommendations: None,
        };
        assert!(validate_vote_input(&input).is_err());
    }

    #[test]
    fn rejects_signup_missing_email() {
        let input = SubmitSignupInput {
            role: SignupRole::Student,
            name: "Jane".to_string(),
            email: String::new(),
            institution_slug: "demo-institution".to_string(),
        };
        assert!(validate_signup_input(&input).is_err());
    }
}
