use super::String;

#[derive(Debug, Clone)]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub description: String,
    pub discount: String,
    pub code: String,
    pub valid_until: String,
    pub limited: bool,
}
