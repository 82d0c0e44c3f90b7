#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use crate::database::models::{
        BereavementRelation, Gender, LeaveRequest, LeaveType, LicenseSubtype,
    };
    use crate::services::form::{FormController, FormEvent, FormState};

    #[test]
    fn test_effective_subtype_mapping() {
        let mut form = FormState::default();
        assert_eq!(form.effective_subtype(), None);

        form.leave_type = Some(LeaveType::Marriage);
        assert_eq!(form.effective_subtype(), Some(LicenseSubtype::Marriage));

        form.leave_type = Some(LeaveType::Death);
        assert_eq!(form.effective_subtype(), Some(LicenseSubtype::Bereavement));

        for leave_type in [LeaveType::Birth, LeaveType::Pregnancy, LeaveType::Paternity] {
            form.leave_type = Some(leave_type);
            assert_eq!(form.effective_subtype(), Some(LicenseSubtype::Birth));
        }

        form.leave_type = Some(LeaveType::License);
        assert_eq!(form.effective_subtype(), None);
        form.subtype = Some(LicenseSubtype::Exam);
        assert_eq!(form.effective_subtype(), Some(LicenseSubtype::Exam));

        form.leave_type = Some(LeaveType::Vacation);
        assert_eq!(form.effective_subtype(), None);
    }

    #[test]
    fn test_marriage_selection_derives_end_date() {
        let mut controller = FormController::new();
        controller.apply(FormEvent::SetStartDate("01-01-2024".to_string()));
        assert_eq!(controller.state().end_date, "");

        controller.apply(FormEvent::SetLeaveType(Some(LeaveType::Marriage)));
        assert_eq!(controller.state().end_date, "06-01-2024");
    }

    #[test]
    fn test_bereavement_derives_once_relationship_is_known() {
        let mut controller = FormController::new();
        controller.apply(FormEvent::SetLeaveType(Some(LeaveType::License)));
        controller.apply(FormEvent::SetSubtype(Some(LicenseSubtype::Bereavement)));
        controller.apply(FormEvent::SetStartDate("01-03-2024".to_string()));

        // Undetermined until the relationship tier is chosen.
        assert_eq!(controller.state().end_date, "");

        controller.apply(FormEvent::SetRelationship(Some(
            BereavementRelation::Grandparent,
        )));
        assert_eq!(controller.state().end_date, "04-03-2024");
    }

    #[test]
    fn test_exam_keeps_the_manual_end_date() {
        let mut controller = FormController::new();
        controller.apply(FormEvent::SetLeaveType(Some(LeaveType::License)));
        controller.apply(FormEvent::SetEndDate("02-02-2024".to_string()));
        controller.apply(FormEvent::SetStartDate("01-02-2024".to_string()));
        controller.apply(FormEvent::SetSubtype(Some(LicenseSubtype::Exam)));

        assert_eq!(controller.state().end_date, "02-02-2024");
    }

    #[test]
    fn test_unrelated_edits_do_not_rederive() {
        let mut controller = FormController::new();
        controller.apply(FormEvent::SetLeaveType(Some(LeaveType::Marriage)));
        controller.apply(FormEvent::SetStartDate("01-01-2024".to_string()));
        assert_eq!(controller.state().end_date, "06-01-2024");

        // Manually overwrite the derived date, then touch unrelated fields.
        controller.apply(FormEvent::SetEndDate("08-01-2024".to_string()));
        controller.apply(FormEvent::SetEmployeeName("Ana Torres".to_string()));
        controller.apply(FormEvent::SetDocumentUri(Some("content://docs/1".to_string())));
        controller.apply(FormEvent::SetDoctorName(Some("Dr. Vega".to_string())));

        assert_eq!(controller.state().end_date, "08-01-2024");
    }

    #[test]
    fn test_gender_change_rederives_birth_leave() {
        let mut controller = FormController::new();
        controller.apply(FormEvent::SetLeaveType(Some(LeaveType::Birth)));
        controller.apply(FormEvent::SetStartDate("10-06-2024".to_string()));
        controller.apply(FormEvent::SetGender(Some(Gender::Male)));
        assert_eq!(controller.state().end_date, "24-06-2024");

        controller.apply(FormEvent::SetGender(Some(Gender::Female)));
        assert_eq!(controller.state().end_date, "07-11-2024");
    }

    #[test]
    fn test_subscribers_hear_every_applied_event() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut controller = FormController::new();
        controller.subscribe(move |state: &FormState| {
            sink.borrow_mut().push(state.employee_name.clone());
        });

        controller.apply(FormEvent::SetEmployeeName("A".to_string()));
        controller.apply(FormEvent::SetEmployeeName("An".to_string()));
        controller.apply(FormEvent::SetStartDate("01-01-2024".to_string()));

        assert_eq!(
            *seen.borrow(),
            vec!["A".to_string(), "An".to_string(), "An".to_string()]
        );
    }

    #[test]
    fn test_reset_restores_the_empty_form() {
        let mut controller = FormController::new();
        controller.apply(FormEvent::SetLeaveType(Some(LeaveType::Medical)));
        controller.apply(FormEvent::SetEmployeeName("Ana Torres".to_string()));
        controller.apply(FormEvent::SetStartDate("03-06-2024".to_string()));
        controller.apply(FormEvent::SetEndDate("05-06-2024".to_string()));
        controller.validate();

        controller.apply(FormEvent::Reset);

        assert_eq!(controller.state(), &FormState::default());
    }

    fn filled_form(leave_type: LeaveType) -> FormState {
        FormState {
            leave_type: Some(leave_type),
            employee_name: "Ana Torres".to_string(),
            start_date: "03-06-2024".to_string(),
            end_date: "05-06-2024".to_string(),
            ..FormState::default()
        }
    }

    #[test]
    fn test_assemble_vacation() {
        let form = filled_form(LeaveType::Vacation);
        match form.assemble() {
            Some(LeaveRequest::Vacation(new)) => {
                assert_eq!(new.employee_name, "Ana Torres");
                assert_eq!(new.start_date, "03-06-2024");
                assert_eq!(new.end_date, "05-06-2024");
            }
            other => panic!("expected a vacation request, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_medical_carries_document() {
        let mut form = filled_form(LeaveType::Medical);
        form.document_uri = Some("content://docs/42".to_string());
        form.doctor_name = Some("Dr. Vega".to_string());

        match form.assemble() {
            Some(LeaveRequest::Medical(new)) => {
                assert_eq!(new.document_uri, Some("content://docs/42".to_string()));
                assert_eq!(new.doctor_name, Some("Dr. Vega".to_string()));
            }
            other => panic!("expected a medical request, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_death_maps_to_bereavement_license() {
        let mut form = filled_form(LeaveType::Death);
        form.relationship = Some(BereavementRelation::Sibling);
        // A stale gender from an earlier type selection must not leak in.
        form.gender = Some(Gender::Female);

        match form.assemble() {
            Some(LeaveRequest::License(new)) => {
                assert_eq!(new.subtype, LicenseSubtype::Bereavement);
                assert_eq!(new.relationship, Some(BereavementRelation::Sibling));
                assert_eq!(new.gender, None);
            }
            other => panic!("expected a license request, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_marriage_maps_to_marriage_license() {
        let form = filled_form(LeaveType::Marriage);
        match form.assemble() {
            Some(LeaveRequest::License(new)) => {
                assert_eq!(new.subtype, LicenseSubtype::Marriage);
                assert_eq!(new.relationship, None);
                assert_eq!(new.gender, None);
            }
            other => panic!("expected a license request, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_pregnancy_after_validation_carries_forced_gender() {
        let mut controller = FormController::from_state(filled_form(LeaveType::Pregnancy));
        assert!(controller.validate().ok);

        match controller.submission() {
            Some(LeaveRequest::License(new)) => {
                assert_eq!(new.subtype, LicenseSubtype::Birth);
                assert_eq!(new.gender, Some(Gender::Female));
            }
            other => panic!("expected a license request, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_license_scopes_tier_fields_to_subtype() {
        let mut form = filled_form(LeaveType::License);
        form.subtype = Some(LicenseSubtype::Marriage);
        form.relationship = Some(BereavementRelation::Parent);
        form.gender = Some(Gender::Male);

        match form.assemble() {
            Some(LeaveRequest::License(new)) => {
                assert_eq!(new.subtype, LicenseSubtype::Marriage);
                assert_eq!(new.relationship, None);
                assert_eq!(new.gender, None);
            }
            other => panic!("expected a license request, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_without_a_type_or_subtype_yields_nothing() {
        let mut form = filled_form(LeaveType::License);
        form.leave_type = None;
        assert!(form.assemble().is_none());

        let form = filled_form(LeaveType::License);
        assert!(form.assemble().is_none());
    }
}
