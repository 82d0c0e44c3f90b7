use serde::{Deserialize, Serialize};

use crate::database::models::{
    BereavementRelation, Gender, LeaveRequest, LeaveType, LicenseSubtype, NewLicenseLeave,
    NewMedicalLeave, NewVacationLeave,
};
use crate::services::dates;
use crate::services::validation::{self, Verdict};

/// The mutable state of one leave-request entry form. Owned exclusively by a
/// `FormController` while the user is filling it in; error and warning are
/// advisory overlays recomputed on every validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    pub leave_type: Option<LeaveType>,
    pub employee_name: String,
    pub start_date: String, // DD-MM-YYYY
    pub end_date: String,   // DD-MM-YYYY, user-entered or derived
    pub document_uri: Option<String>,
    pub doctor_name: Option<String>,
    pub subtype: Option<LicenseSubtype>,
    pub relationship: Option<BereavementRelation>,
    pub gender: Option<Gender>,
    pub error: Option<String>,
    pub warning: Option<String>,
}

impl FormState {
    /// The license subtype that governs derivation and assembly. The
    /// top-level Marriage, Birth, Death, Pregnancy and Paternity types are
    /// license-shaped with a forced subtype; for the License type it is
    /// whatever the user picked.
    pub fn effective_subtype(&self) -> Option<LicenseSubtype> {
        match self.leave_type.as_ref()? {
            LeaveType::License => self.subtype.clone(),
            LeaveType::Marriage => Some(LicenseSubtype::Marriage),
            LeaveType::Birth | LeaveType::Pregnancy | LeaveType::Paternity => {
                Some(LicenseSubtype::Birth)
            }
            LeaveType::Death => Some(LicenseSubtype::Bereavement),
            LeaveType::Vacation | LeaveType::Medical => None,
        }
    }

    pub fn reset(&mut self) {
        *self = FormState::default();
    }

    /// Map the form onto exactly one request variant. `None` only when no
    /// leave type is selected, or when License is selected without a subtype;
    /// validation rejects both before assembly is reached.
    pub fn assemble(&self) -> Option<LeaveRequest> {
        let request = match self.leave_type.as_ref()? {
            LeaveType::Vacation => LeaveRequest::Vacation(NewVacationLeave {
                employee_name: self.employee_name.clone(),
                start_date: self.start_date.clone(),
                end_date: self.end_date.clone(),
            }),
            LeaveType::Medical => LeaveRequest::Medical(NewMedicalLeave {
                employee_name: self.employee_name.clone(),
                start_date: self.start_date.clone(),
                end_date: self.end_date.clone(),
                document_uri: self.document_uri.clone(),
                doctor_name: self.doctor_name.clone(),
            }),
            LeaveType::License => {
                let subtype = self.subtype.clone()?;
                let relationship = match subtype {
                    LicenseSubtype::Bereavement => self.relationship.clone(),
                    _ => None,
                };
                let gender = match subtype {
                    LicenseSubtype::Birth => self.gender.clone(),
                    _ => None,
                };
                self.license_request(subtype, relationship, gender)
            }
            LeaveType::Marriage => self.license_request(LicenseSubtype::Marriage, None, None),
            LeaveType::Birth | LeaveType::Pregnancy | LeaveType::Paternity => {
                self.license_request(LicenseSubtype::Birth, None, self.gender.clone())
            }
            LeaveType::Death => {
                self.license_request(LicenseSubtype::Bereavement, self.relationship.clone(), None)
            }
        };
        Some(request)
    }

    fn license_request(
        &self,
        subtype: LicenseSubtype,
        relationship: Option<BereavementRelation>,
        gender: Option<Gender>,
    ) -> LeaveRequest {
        LeaveRequest::License(NewLicenseLeave {
            employee_name: self.employee_name.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            document_uri: self.document_uri.clone(),
            subtype,
            relationship,
            gender,
        })
    }
}

/// A single field mutation applied to the form.
#[derive(Debug, Clone)]
pub enum FormEvent {
    SetLeaveType(Option<LeaveType>),
    SetEmployeeName(String),
    SetStartDate(String),
    SetEndDate(String),
    SetDocumentUri(Option<String>),
    SetDoctorName(Option<String>),
    SetSubtype(Option<LicenseSubtype>),
    SetRelationship(Option<BereavementRelation>),
    SetGender(Option<Gender>),
    Reset,
}

type Subscriber = Box<dyn Fn(&FormState)>;

/// Orchestrates the entry form: applies field events, re-derives the end date
/// when a field that feeds the policy table changes, runs validation, and
/// notifies subscribers after every state change. Subscribers are a plain
/// observer list, nothing here knows about any particular UI.
#[derive(Default)]
pub struct FormController {
    state: FormState,
    subscribers: Vec<Subscriber>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: FormState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&FormState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply one field mutation. The end date is re-derived only after a
    /// change to the start date, subtype, relationship, gender, or the leave
    /// type itself (which can change the effective subtype), never on
    /// unrelated edits.
    pub fn apply(&mut self, event: FormEvent) {
        let derive_after = matches!(
            event,
            FormEvent::SetLeaveType(_)
                | FormEvent::SetStartDate(_)
                | FormEvent::SetSubtype(_)
                | FormEvent::SetRelationship(_)
                | FormEvent::SetGender(_)
        );

        match event {
            FormEvent::SetLeaveType(value) => self.state.leave_type = value,
            FormEvent::SetEmployeeName(value) => self.state.employee_name = value,
            FormEvent::SetStartDate(value) => self.state.start_date = value,
            FormEvent::SetEndDate(value) => self.state.end_date = value,
            FormEvent::SetDocumentUri(value) => self.state.document_uri = value,
            FormEvent::SetDoctorName(value) => self.state.doctor_name = value,
            FormEvent::SetSubtype(value) => self.state.subtype = value,
            FormEvent::SetRelationship(value) => self.state.relationship = value,
            FormEvent::SetGender(value) => self.state.gender = value,
            FormEvent::Reset => self.state.reset(),
        }

        if derive_after {
            self.refresh_end_date();
        }
        self.notify();
    }

    /// Overwrite the end date with the derived one, when it is determinable.
    /// An undetermined result leaves the user-entered end date alone.
    pub fn refresh_end_date(&mut self) {
        let derived = dates::derive_end_date(
            &self.state.start_date,
            self.state.effective_subtype().as_ref(),
            self.state.relationship.as_ref(),
            self.state.gender.as_ref(),
        );
        if let Some(end_date) = derived {
            self.state.end_date = end_date;
        }
    }

    /// Run a validation pass over the current state and notify subscribers of
    /// the refreshed overlays (and any forced gender).
    pub fn validate(&mut self) -> Verdict {
        let verdict = validation::validate(&mut self.state);
        self.notify();
        verdict
    }

    /// The request this form would persist, post-validation.
    pub fn submission(&self) -> Option<LeaveRequest> {
        self.state.assemble()
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }
}
