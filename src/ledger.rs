use std::collections::HashMap;

use bigdecimal::BigDecimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{ContactWithTotals, EntryType, KhataContact, KhataEntry};

/// Per-contact totals derived from ledger entries. Positive balance means the
/// contact owes the user; negative means the user owes the contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactTotals {
	pub total_gave: BigDecimal,
	pub total_got: BigDecimal,
	pub balance: BigDecimal,
}

/// Groups a snapshot of a user's entries by contact and sums each side of the
/// ledger. Recomputed in full on every contact-list fetch; there is no
/// incremental state.
pub fn aggregate_entries(entries: &[KhataEntry]) -> HashMap<Uuid, ContactTotals> {
	let mut totals: HashMap<Uuid, ContactTotals> = HashMap::new();
	for entry in entries {
		let t = totals.entry(entry.contact_id).or_default();
		if entry.entry_type == EntryType::Gave.as_str() {
			t.total_gave += entry.amount.clone();
		} else if entry.entry_type == EntryType::Got.as_str() {
			t.total_got += entry.amount.clone();
		}
	}
	for t in totals.values_mut() {
		t.balance = t.total_got.clone() - t.total_gave.clone();
	}
	totals
}

/// Attaches totals to each contact. Contacts with no entries report all
/// zeroes; entries pointing at a contact id not present in `contacts` are
/// dropped on the floor.
pub fn contacts_with_totals(
	contacts: Vec<KhataContact>,
	entries: &[KhataEntry],
) -> Vec<ContactWithTotals> {
	let mut totals = aggregate_entries(entries);
	contacts
		.into_iter()
		.map(|contact| {
			let t = totals.remove(&contact.id).unwrap_or_default();
			ContactWithTotals {
				contact,
				total_gave: t.total_gave,
				total_got: t.total_got,
				balance: t.balance,
			}
		})
		.collect()
}
