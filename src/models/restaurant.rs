use super::String;

/// Static restaurant facts shown across the page: identity, contact
/// details and the outbound ordering endpoints.
#[derive(Debug, Clone)]
pub struct Restaurant {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub address: String,
    pub hours: String,
    pub opening_hour: u32,
    pub closing_hour: u32,
    pub phone: String,
    /// Digits-only number for the `wa.me` deep link.
    pub whatsapp: String,
    pub zomato_url: String,
    pub swiggy_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Restaurant {
    /// Open interval check over `[opening_hour, closing_hour)`.
    pub fn is_open(&self, hour: u32) -> bool {
        (self.opening_hour..self.closing_hour).contains(&hour)
    }
}
