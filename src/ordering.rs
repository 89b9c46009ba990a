use super::models::{MenuItem, Offer, Restaurant};

/// Outbound ordering endpoints. Every action here only constructs a
/// URL; launching it is a one-way, fire-and-forget navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingChannel {
    WhatsApp,
    Zomato,
    Swiggy,
}

impl OrderingChannel {
    #[must_use]
    pub fn url(self, info: &Restaurant) -> String {
        match self {
            Self::WhatsApp => whatsapp_url(info, GENERIC_ORDER_MESSAGE),
            Self::Zomato => info.zomato_url.to_string(),
            Self::Swiggy => info.swiggy_url.to_string(),
        }
    }
}

const GENERIC_ORDER_MESSAGE: &str = "Hi! I would like to order food";

#[must_use]
pub fn order_message(item: &MenuItem) -> String {
    format!(
        "Hi! I would like to order {name} for ₹{price}. Can you please help me with the order?",
        name = item.name,
        price = item.price
    )
}

#[must_use]
pub const fn full_menu_message() -> &'static str {
    "Hi! Can you please send me your complete menu? I'd like to see all the available dishes."
}

#[must_use]
pub fn offer_message(offer: &Offer) -> String {
    format!(
        "Hi! I'd like to claim the \"{title}\" offer with code {code}. Can you help me place an order?",
        title = offer.title,
        code = offer.code
    )
}

/// `https://wa.me/<digits>?text=<percent-encoded message>`.
#[must_use]
pub fn whatsapp_url(info: &Restaurant, text: &str) -> String {
    let encoded = glib::Uri::escape_string(text, None, false);
    format!("https://wa.me/{number}?text={encoded}", number = info.whatsapp)
}

#[must_use]
pub fn whatsapp_order_url(info: &Restaurant, item: &MenuItem) -> String {
    whatsapp_url(info, &order_message(item))
}

#[must_use]
pub fn telephone_url(info: &Restaurant) -> String {
    format!("tel:{phone}", phone = info.phone)
}

#[must_use]
pub fn maps_url(info: &Restaurant) -> String {
    format!(
        "https://maps.google.com/?q={latitude},{longitude}",
        latitude = info.latitude,
        longitude = info.longitude
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant() -> Restaurant {
        Restaurant {
            name: "Guwahati Flavors",
            tagline: "Authentic Assamese Cuisine",
            description: "",
            address: "Fancy Bazaar, Guwahati, Assam 781001",
            hours: "10:00 AM - 10:00 PM",
            opening_hour: 10,
            closing_hour: 22,
            phone: "+91-9876543210",
            whatsapp: "919876543210",
            zomato_url: "https://www.zomato.com/guwahati",
            swiggy_url: "https://www.swiggy.com/city/guwahati",
            latitude: 26.1833,
            longitude: 91.7333,
        }
    }

    fn item() -> MenuItem {
        MenuItem {
            id: "laal-sah",
            name: "Laal Sah",
            description: "Traditional Assamese red tea served without milk",
            price: 30,
            image: "laal-sah.jpg",
            is_veg: true,
            is_spicy: false,
            popular: true,
            category: 3,
        }
    }

    #[test]
    fn order_message_embeds_name_and_price() {
        assert_eq!(
            order_message(&item()),
            "Hi! I would like to order Laal Sah for ₹30. Can you please help me with the order?"
        );
    }

    #[test]
    fn whatsapp_order_url_is_percent_encoded() {
        let url = whatsapp_order_url(&restaurant(), &item());

        assert!(url.starts_with("https://wa.me/919876543210?text="));
        assert!(!url.contains(' '));
        assert!(url.contains("%20"));
        // The rupee sign survives as UTF-8 percent escapes.
        assert!(url.contains("%E2%82%B930"));
    }

    #[test]
    fn channel_urls_point_at_their_services() {
        let info = restaurant();

        assert!(OrderingChannel::WhatsApp
            .url(&info)
            .starts_with("https://wa.me/919876543210?text="));
        assert_eq!(OrderingChannel::Zomato.url(&info), info.zomato_url);
        assert_eq!(OrderingChannel::Swiggy.url(&info), info.swiggy_url);
    }

    #[test]
    fn contact_urls_have_the_expected_shapes() {
        let info = restaurant();

        assert_eq!(telephone_url(&info), "tel:+91-9876543210");
        assert_eq!(maps_url(&info), "https://maps.google.com/?q=26.1833,91.7333");
    }

    #[test]
    fn restaurant_open_state_follows_the_hour_window() {
        let info = restaurant();

        assert!(!info.is_open(9));
        assert!(info.is_open(10));
        assert!(info.is_open(21));
        assert!(!info.is_open(22));
    }
}
