/// Raw form fields as posted by the landing page.
///
/// Absent fields decode as empty strings so that validation reports them
/// the same way as a field submitted blank.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SubmissionForm {
    pub name: String,
    pub address1: String,
    pub address2: String,
    pub postal_code: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub email: String
}

/// A submission that went through validation and can be handed to a gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub address1: String,
    pub address2: String,
    pub postal_code: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub email: String
}
