/// A catalogued cafe as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub address: String,
    pub website: String,
    pub has_alcohol: bool,
    pub has_lunch: bool,
    pub google_rate: Option<String>,
    pub price_range: Option<String>,
}

/// Everything but the id, for inserts and whole-record updates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub address: String,
    pub website: String,
    pub has_alcohol: bool,
    pub has_lunch: bool,
    pub google_rate: Option<String>,
    pub price_range: Option<String>,
}
