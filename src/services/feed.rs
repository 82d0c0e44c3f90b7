use std::cmp::Reverse;

use crate::database::models::{LeaveCard, LicenseLeave, MedicalLeave, VacationLeave};
use crate::services::dates;

/// Merge the three category listings into the combined history feed, sorted
/// by descending start date. The sort is stable, so requests sharing a start
/// date keep their per-category arrival order, vacations before medicals
/// before licenses. Rows whose start date does not parse sort last.
///
/// Persistence never sorts across categories; this is the only place the
/// combined order exists.
pub fn merge_feed(
    vacations: Vec<VacationLeave>,
    medicals: Vec<MedicalLeave>,
    licenses: Vec<LicenseLeave>,
) -> Vec<LeaveCard> {
    let mut cards = Vec::with_capacity(vacations.len() + medicals.len() + licenses.len());
    cards.extend(vacations.into_iter().map(LeaveCard::Vacation));
    cards.extend(medicals.into_iter().map(LeaveCard::Medical));
    cards.extend(licenses.into_iter().map(LeaveCard::License));

    cards.sort_by_key(|card| Reverse(dates::try_parse_date(card.start_date())));
    cards
}
