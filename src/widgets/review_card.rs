use super::super::models::Review;
use super::super::prelude::*;

use std::cell::Cell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/review_card.ui")]
    #[properties(wrapper_type = super::ReviewCard)]
    pub struct ReviewCard {
        #[template_child(id = "review-card-stars")]
        pub stars_label: TemplateChild<gtk::Label>,
        #[template_child(id = "review-card-comment")]
        pub comment_label: TemplateChild<gtk::Label>,
        #[template_child(id = "review-card-avatar")]
        pub avatar: TemplateChild<adw::Avatar>,
        #[template_child(id = "review-card-author")]
        pub author_label: TemplateChild<gtk::Label>,
        #[template_child(id = "review-card-date")]
        pub date_label: TemplateChild<gtk::Label>,

        #[property(get, set)]
        pub index: Cell<u32>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ReviewCard {
        const NAME: &'static str = "ReviewCard";
        type Type = super::ReviewCard;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for ReviewCard {}
    impl WidgetImpl for ReviewCard {}
    impl BoxImpl for ReviewCard {}
}

glib::wrapper! {
    pub struct ReviewCard(ObjectSubclass<imp::ReviewCard>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl ReviewCard {
    pub fn new(review: &Review, index: usize) -> Self {
        let this: Self = glib::Object::builder()
            .property("index", index as u32)
            .build();

        let imp = this.imp();
        imp.stars_label.set_label(&Self::stars(review.rating));
        imp.comment_label
            .set_label(&format!("\u{201c}{comment}\u{201d}", comment = review.comment));
        imp.avatar.set_text(Some(review.name));
        imp.author_label.set_label(review.name);
        imp.date_label.set_label(&Self::format_date(review.date));

        this
    }

    fn stars(rating: u8) -> String {
        let filled = usize::from(rating.min(5));
        format!(
            "{filled}{empty}",
            filled = "★".repeat(filled),
            empty = "☆".repeat(5 - filled)
        )
    }

    /// `YYYY-MM-DD` → `DD/MM/YYYY`, the display form used everywhere on
    /// the page. Unparseable dates pass through untouched.
    fn format_date(iso: &str) -> String {
        let parts: Vec<&str> = iso.split('-').collect();
        if let [year, month, day] = parts.as_slice() {
            format!("{day}/{month}/{year}")
        } else {
            iso.to_string()
        }
    }
}
