use diesel::Insertable;
use giveaway::submission::model::Entry;
use super::schema::entry;

/// Row written for a new entry. Timestamps and id come from column defaults.
#[derive(Insertable, Debug)]
#[diesel(table_name = entry)]
pub struct NewEntry<'a> {
    pub name: &'a str,
    pub address1: &'a str,
    pub address2: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub country: &'a str,
    pub postal_code: &'a str,
    pub email: &'a str
}

impl<'a> From<&'a Entry> for NewEntry<'a> {
    fn from(entry: &'a Entry) -> Self {
        NewEntry {
            name: &entry.name,
            address1: &entry.address1,
            address2: &entry.address2,
            city: &entry.city,
            state: &entry.state,
            country: &entry.country,
            postal_code: &entry.postal_code,
            email: &entry.email
        }
    }
}
