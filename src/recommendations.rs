use rand::seq::SliceRandom;
use rand::Rng;

use super::models::MenuItem;

pub const MAX_RECOMMENDATIONS: usize = 3;

/// Disjoint half-open hour ranges, each mapping to one candidate
/// predicate. Keyword lists match the menu data ("tea", "pitha",
/// "thali", "curry", "momos", "snack").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealTime {
    /// [6, 12)
    Breakfast,
    /// [12, 17)
    Lunch,
    /// [17, 22)
    Dinner,
    /// [22, 24) and [0, 6)
    LateNight,
}

impl MealTime {
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => Self::Breakfast,
            12..=16 => Self::Lunch,
            17..=21 => Self::Dinner,
            _ => Self::LateNight,
        }
    }

    #[must_use]
    pub fn matches(self, item: &MenuItem) -> bool {
        let name = item.name.to_lowercase();
        match self {
            Self::Breakfast => name.contains("tea") || name.contains("pitha") || !item.is_spicy,
            Self::Lunch => name.contains("thali") || name.contains("curry") || item.popular,
            Self::Dinner => item.popular,
            Self::LateNight => name.contains("momos") || name.contains("snack"),
        }
    }

    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Breakfast => "🌅 Perfect for Breakfast",
            Self::Lunch => "🌞 Great for Lunch",
            Self::Dinner => "🌙 Ideal for Dinner",
            Self::LateNight => "⭐ Highly Recommended",
        }
    }
}

/// Picks up to three items to highlight for the given hour. The
/// time-of-day predicate builds the candidate pool; popular items
/// backfill a pool smaller than three (duplicates allowed before the
/// shuffle). The caller supplies the random source so the permutation
/// can be seeded in tests.
pub fn select_recommendations<'a, R: Rng>(
    items: &'a [MenuItem],
    hour: u32,
    rng: &mut R,
) -> Vec<(usize, &'a MenuItem)> {
    let meal_time = MealTime::from_hour(hour);

    let mut pool: Vec<(usize, &MenuItem)> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| meal_time.matches(item))
        .collect();

    if pool.len() < MAX_RECOMMENDATIONS {
        pool.extend(items.iter().enumerate().filter(|(_, item)| item.popular));
    }

    pool.shuffle(rng);
    pool.truncate(MAX_RECOMMENDATIONS);
    pool
}

/// Caption shown next to a recommended item; popularity wins over the
/// time-of-day caption.
#[must_use]
pub fn recommendation_reason(item: &MenuItem, hour: u32) -> &'static str {
    if item.popular {
        "🔥 Popular Choice"
    } else {
        MealTime::from_hour(hour).caption()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(
        id: &'static str,
        name: &'static str,
        is_spicy: bool,
        popular: bool,
    ) -> MenuItem {
        MenuItem {
            id,
            name,
            description: "",
            price: 100,
            image: "",
            is_veg: true,
            is_spicy,
            popular,
            category: 0,
        }
    }

    fn sample_items() -> Vec<MenuItem> {
        vec![
            item("laal-sah", "Laal Sah", false, true),
            item("til-pitha", "Til Pitha", false, true),
            item("assamese-thali", "Assamese Thali", false, true),
            item("masor-tenga", "Masor Tenga", true, true),
            item("duck-curry", "Duck Curry", true, false),
            item("assamese-momos", "Assamese Momos", true, false),
            item("snack-platter", "Evening Snack Platter", true, false),
        ]
    }

    #[test]
    fn hour_buckets_use_half_open_ranges() {
        assert_eq!(MealTime::from_hour(5), MealTime::LateNight);
        assert_eq!(MealTime::from_hour(6), MealTime::Breakfast);
        assert_eq!(MealTime::from_hour(11), MealTime::Breakfast);
        assert_eq!(MealTime::from_hour(12), MealTime::Lunch);
        assert_eq!(MealTime::from_hour(16), MealTime::Lunch);
        assert_eq!(MealTime::from_hour(17), MealTime::Dinner);
        assert_eq!(MealTime::from_hour(21), MealTime::Dinner);
        assert_eq!(MealTime::from_hour(22), MealTime::LateNight);
        assert_eq!(MealTime::from_hour(0), MealTime::LateNight);
    }

    #[test]
    fn breakfast_matches_tea_pitha_or_mild_items() {
        assert!(MealTime::Breakfast.matches(&item("a", "Masala Tea", true, false)));
        assert!(MealTime::Breakfast.matches(&item("b", "Til Pitha", true, false)));
        assert!(MealTime::Breakfast.matches(&item("c", "Aloo Pitika", false, false)));
        assert!(!MealTime::Breakfast.matches(&item("d", "Duck Curry", true, false)));
    }

    #[test]
    fn lunch_matches_thali_curry_or_popular_items() {
        assert!(MealTime::Lunch.matches(&item("a", "Vegetarian Thali", true, false)));
        assert!(MealTime::Lunch.matches(&item("b", "Duck Curry", true, false)));
        assert!(MealTime::Lunch.matches(&item("c", "Laal Sah", false, true)));
        assert!(!MealTime::Lunch.matches(&item("d", "Veg Momos", true, false)));
    }

    #[test]
    fn selection_never_exceeds_three_items_drawn_from_the_input() {
        let items = sample_items();
        let mut rng = rand::thread_rng();

        for hour in 0..24 {
            let picks = select_recommendations(&items, hour, &mut rng);
            assert!(picks.len() <= MAX_RECOMMENDATIONS);
            for (index, picked) in picks {
                assert_eq!(items[index].id, picked.id);
            }
        }
    }

    #[test]
    fn sparse_pool_is_backfilled_with_popular_items() {
        // At dinner time only popular items qualify; with a single
        // popular item the backfill path runs and the pool still holds
        // catalog entries only.
        let items = vec![
            item("laal-sah", "Laal Sah", false, true),
            item("aloo-pitika", "Aloo Pitika", false, false),
        ];
        let mut rng = StdRng::seed_from_u64(7);

        let picks = select_recommendations(&items, 19, &mut rng);
        assert!(!picks.is_empty());
        assert!(picks.len() <= MAX_RECOMMENDATIONS);
        for (_, picked) in picks {
            assert_eq!(picked.id, "laal-sah");
        }
    }

    #[test]
    fn empty_pool_yields_no_recommendations() {
        // Late night with no snack keywords and nothing popular.
        let items = vec![item("amitar-khar", "Amitar Khar", false, false)];
        let mut rng = StdRng::seed_from_u64(7);

        let picks = select_recommendations(&items, 2, &mut rng);
        assert!(picks.is_empty());
    }

    #[test]
    fn seeded_source_pins_the_permutation() {
        let items = sample_items();

        let first: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            select_recommendations(&items, 13, &mut rng)
                .into_iter()
                .map(|(index, _)| index)
                .collect()
        };
        let second: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            select_recommendations(&items, 13, &mut rng)
                .into_iter()
                .map(|(index, _)| index)
                .collect()
        };

        assert_eq!(first, second);
        assert_eq!(first.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn reason_prefers_popularity_over_the_time_bucket() {
        let popular = item("laal-sah", "Laal Sah", false, true);
        let mild = item("aloo-pitika", "Aloo Pitika", false, false);

        assert_eq!(recommendation_reason(&popular, 8), "🔥 Popular Choice");
        assert_eq!(recommendation_reason(&mild, 8), "🌅 Perfect for Breakfast");
        assert_eq!(recommendation_reason(&mild, 19), "🌙 Ideal for Dinner");
    }
}
