use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category — Closed set of spending categories
// ---------------------------------------------------------------------------

/// Spending category of a purchase.
///
/// On the wire a category is its display label (`"Eating Out"`, `"Shopping"`,
/// ...). Labels outside the known set decode to [`Category::Other`] instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Category {
    EatingOut,
    FoodDelivery,
    Shopping,
    Transport,
    Entertainment,
    Other,
}

/// Presentation attributes for a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub label: &'static str,
    /// Hex RGB color, e.g. `"#FF9500"`.
    pub color: &'static str,
    /// SF Symbols icon name.
    pub icon: &'static str,
}

// Indexed by `Category as usize`; order must match the enum declaration.
const CATEGORY_STYLES: [CategoryStyle; 6] = [
    CategoryStyle { label: "Eating Out", color: "#FF9500", icon: "fork.knife" },
    CategoryStyle { label: "Food Delivery", color: "#FF3B30", icon: "bag.fill" },
    CategoryStyle { label: "Shopping", color: "#AF52DE", icon: "cart.fill" },
    CategoryStyle { label: "Transport", color: "#007AFF", icon: "car.fill" },
    CategoryStyle { label: "Entertainment", color: "#FF2D55", icon: "tv.fill" },
    CategoryStyle { label: "Other", color: "#8E8E93", icon: "ellipsis.circle.fill" },
];

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 6] = [
        Category::EatingOut,
        Category::FoodDelivery,
        Category::Shopping,
        Category::Transport,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn style(self) -> &'static CategoryStyle {
        &CATEGORY_STYLES[self as usize]
    }

    /// Display label, also used as the wire value.
    pub fn label(self) -> &'static str {
        self.style().label
    }

    pub fn color(self) -> &'static str {
        self.style().color
    }

    pub fn icon(self) -> &'static str {
        self.style().icon
    }

    /// Look up a category by its exact label, falling back to [`Category::Other`].
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .unwrap_or(Category::Other)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.label()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
