use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub enum LeaveType {
        Vacation => "vacation",
        Medical => "medical",
        License => "license",
        Marriage => "marriage",
        Birth => "birth",
        Death => "death",
        Pregnancy => "pregnancy",
        Paternity => "paternity",
    }
}

string_enum! {
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub enum LicenseSubtype {
        Exam => "exam",
        Marriage => "marriage",
        Bereavement => "bereavement",
        Birth => "birth",
    }
}

string_enum! {
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub enum BereavementRelation {
        Parent => "parent",
        Child => "child",
        Sibling => "sibling",
        Grandparent => "grandparent",
        Other => "other",
    }
}

string_enum! {
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub enum Gender {
        Male => "male",
        Female => "female",
    }
}

string_enum! {
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub enum LeaveCategory {
        Vacation => "vacation",
        Medical => "medical",
        License => "license",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VacationLeave {
    pub id: i64,
    pub employee_name: String,
    pub start_date: String, // DD-MM-YYYY
    pub end_date: String,   // DD-MM-YYYY
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MedicalLeave {
    pub id: i64,
    pub employee_name: String,
    pub start_date: String,
    pub end_date: String,
    pub document_uri: Option<String>,
    pub doctor_name: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LicenseLeave {
    pub id: i64,
    pub employee_name: String,
    pub start_date: String,
    pub end_date: String,
    pub document_uri: Option<String>,
    pub subtype: LicenseSubtype,
    pub relationship: Option<BereavementRelation>, // only for bereavement
    pub gender: Option<Gender>,                    // only for birth
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVacationLeave {
    pub employee_name: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedicalLeave {
    pub employee_name: String,
    pub start_date: String,
    pub end_date: String,
    pub document_uri: Option<String>,
    pub doctor_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLicenseLeave {
    pub employee_name: String,
    pub start_date: String,
    pub end_date: String,
    pub document_uri: Option<String>,
    pub subtype: LicenseSubtype,
    pub relationship: Option<BereavementRelation>,
    pub gender: Option<Gender>,
}

/// A validated leave request ready for storage. Built only after validation
/// passes, one variant per category table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum LeaveRequest {
    Vacation(NewVacationLeave),
    Medical(NewMedicalLeave),
    License(NewLicenseLeave),
}

/// A stored leave request of any category, as rendered in the history list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum LeaveCard {
    Vacation(VacationLeave),
    Medical(MedicalLeave),
    License(LicenseLeave),
}

impl LeaveCard {
    pub fn start_date(&self) -> &str {
        match self {
            LeaveCard::Vacation(row) => &row.start_date,
            LeaveCard::Medical(row) => &row.start_date,
            LeaveCard::License(row) => &row.start_date,
        }
    }

    pub fn category(&self) -> LeaveCategory {
        match self {
            LeaveCard::Vacation(_) => LeaveCategory::Vacation,
            LeaveCard::Medical(_) => LeaveCategory::Medical,
            LeaveCard::License(_) => LeaveCategory::License,
        }
    }
}
