use serde::{Deserialize, Serialize};

/// Spending category shared by expenses and budgets.
///
/// The set is open: a name not listed here is kept as `Custom` so it
/// still round-trips and only matches itself. Custom categories borrow
/// the `Other` icon and colour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpendingCategory {
    Food,
    Transport,
    Bills,
    Entertainment,
    Shopping,
    Health,
    Education,
    Travel,
    Other,
    Custom(String),
}

impl SpendingCategory {
    pub const ALL: [SpendingCategory; 9] = [
        SpendingCategory::Food,
        SpendingCategory::Transport,
        SpendingCategory::Bills,
        SpendingCategory::Entertainment,
        SpendingCategory::Shopping,
        SpendingCategory::Health,
        SpendingCategory::Education,
        SpendingCategory::Travel,
        SpendingCategory::Other,
    ];

    /// Canonical name, as stored in fixture JSON.
    pub fn as_str(&self) -> &str {
        match self {
            SpendingCategory::Food => "Food",
            SpendingCategory::Transport => "Transport",
            SpendingCategory::Bills => "Bills",
            SpendingCategory::Entertainment => "Entertainment",
            SpendingCategory::Shopping => "Shopping",
            SpendingCategory::Health => "Health",
            SpendingCategory::Education => "Education",
            SpendingCategory::Travel => "Travel",
            SpendingCategory::Other => "Other",
            SpendingCategory::Custom(name) => name.as_str(),
        }
    }

    /// Human-readable label for pickers.
    pub fn label(&self) -> &str {
        match self {
            SpendingCategory::Food => "Food & Dining",
            SpendingCategory::Transport => "Transportation",
            SpendingCategory::Bills => "Bills & Utilities",
            SpendingCategory::Entertainment => "Entertainment",
            SpendingCategory::Shopping => "Shopping",
            SpendingCategory::Health => "Health & Fitness",
            SpendingCategory::Education => "Education",
            SpendingCategory::Travel => "Travel",
            SpendingCategory::Other => "Other",
            SpendingCategory::Custom(name) => name.as_str(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SpendingCategory::Food => "UtensilsCrossed",
            SpendingCategory::Transport => "Car",
            SpendingCategory::Bills => "Receipt",
            SpendingCategory::Entertainment => "Music",
            SpendingCategory::Shopping => "ShoppingBag",
            SpendingCategory::Health => "Heart",
            SpendingCategory::Education => "BookOpen",
            SpendingCategory::Travel => "Plane",
            SpendingCategory::Other | SpendingCategory::Custom(_) => "MoreHorizontal",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SpendingCategory::Food => "text-orange-600",
            SpendingCategory::Transport => "text-blue-600",
            SpendingCategory::Bills => "text-red-600",
            SpendingCategory::Entertainment => "text-purple-600",
            SpendingCategory::Shopping => "text-pink-600",
            SpendingCategory::Health => "text-green-600",
            SpendingCategory::Education => "text-indigo-600",
            SpendingCategory::Travel => "text-yellow-600",
            SpendingCategory::Other | SpendingCategory::Custom(_) => "text-gray-600",
        }
    }

    /// Case-sensitive lookup; unknown names become `Custom`.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .unwrap_or_else(|| SpendingCategory::Custom(name.to_string()))
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, SpendingCategory::Custom(_))
    }
}

impl std::fmt::Display for SpendingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SpendingCategory {
    fn from(name: String) -> Self {
        match Self::from_name(&name) {
            SpendingCategory::Custom(_) => SpendingCategory::Custom(name),
            known => known,
        }
    }
}

impl From<SpendingCategory> for String {
    fn from(category: SpendingCategory) -> Self {
        match category {
            SpendingCategory::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Read-only reference record describing a category for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "Id")]
    pub id: u32,

    pub name: String,

    /// Icon tag (e.g., "UtensilsCrossed")
    pub icon: String,

    /// Color tag (e.g., "text-orange-600")
    pub color: String,
}

impl Category {
    /// The spending category this record describes (`Custom` if the name is unknown).
    pub fn spending_category(&self) -> SpendingCategory {
        SpendingCategory::from_name(&self.name)
    }
}
