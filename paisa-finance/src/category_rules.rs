//! Deterministic keyword rules mapping transaction descriptions to
//! spending categories.
//!
//! No LLM needed — lowercase substring match covers PhonePe descriptions
//! well, since merchants appear verbatim ("Swiggy", "Flipkart", ...).

use paisa_core::Category;

/// Keyword table in classification priority order. `Others` carries no
/// keywords and is the fallback.
const CATEGORY_RULES: [(Category, &[&str]); 9] = [
    (
        Category::FoodAndDining,
        &[
            "swiggy", "zomato", "restaurant", "food", "dining", "cafe", "hotel", "pizza",
            "burger", "kitchen", "eat", "dhaba",
        ],
    ),
    (
        Category::Shopping,
        &[
            "amazon", "flipkart", "myntra", "ajio", "retail", "mart", "shop", "store",
            "market", "mall", "purchase",
        ],
    ),
    (
        Category::Transportation,
        &[
            "uber", "ola", "rapido", "metro", "bus", "auto", "taxi", "cab", "fuel",
            "petrol", "diesel", "parking",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "movie", "netflix", "prime", "hotstar", "theatre", "cinema", "bookmyshow",
            "game", "gaming",
        ],
    ),
    (
        Category::BillsAndUtilities,
        &[
            "electricity", "water", "gas", "bill", "recharge", "mobile", "broadband",
            "internet", "wifi", "dth", "maintenance",
        ],
    ),
    (
        Category::HealthAndWellness,
        &[
            "medical", "medicine", "hospital", "doctor", "clinic", "pharmacy", "health",
            "fitness", "gym",
        ],
    ),
    (
        Category::Education,
        &[
            "school", "college", "university", "course", "class", "training", "workshop",
            "books", "stationery",
        ],
    ),
    (
        Category::Transfer,
        &["transfer", "sent", "upi", "pay", "payment", "credited", "debited"],
    ),
    (Category::Others, &[]),
];

/// Classify a transaction description. Pure and total: every input maps to
/// exactly one category, falling through to `Others`.
///
/// Rules are checked in declaration order and the first match wins, so a
/// description hitting keywords from two categories always resolves to the
/// earlier-declared one.
pub fn classify(description: &str) -> Category {
    let desc = description.to_lowercase();
    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|k| desc.contains(k)) {
            return category;
        }
    }
    Category::Others
}
