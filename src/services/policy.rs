use crate::database::models::{BereavementRelation, Gender, LicenseSubtype};

/// Entitlement days for a bereavement leave, by relationship tier.
pub fn bereavement_days(relation: &BereavementRelation) -> i64 {
    match relation {
        BereavementRelation::Parent | BereavementRelation::Child | BereavementRelation::Sibling => {
            5
        }
        BereavementRelation::Grandparent => 3,
        BereavementRelation::Other => 2,
    }
}

/// Entitlement days for a birth leave: paternity or maternity.
pub fn birth_days(gender: &Gender) -> i64 {
    match gender {
        Gender::Male => 14,
        Gender::Female => 150,
    }
}

/// Entitlement days for a license subtype. `None` means undetermined: either
/// the tier key (relationship or gender) has not been chosen yet, or the
/// subtype has no fixed offset at all (exam leave keeps whatever end date the
/// user entered).
pub fn entitlement_days(
    subtype: &LicenseSubtype,
    relation: Option<&BereavementRelation>,
    gender: Option<&Gender>,
) -> Option<i64> {
    match subtype {
        LicenseSubtype::Marriage => Some(5),
        LicenseSubtype::Bereavement => relation.map(bereavement_days),
        LicenseSubtype::Birth => gender.map(birth_days),
        LicenseSubtype::Exam => None,
    }
}
