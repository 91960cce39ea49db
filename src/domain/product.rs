/// Static product catalog. Stands in for a per-farm product collection
/// until farmers can manage their own inventory.
#[derive(Debug, Clone, Copy)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub farm_id: &'static str,
    pub price_cents: i64,
    pub category: &'static str,
    pub description: &'static str,
}

pub const CATALOG: [Product; 6] = [
    Product {
        id: "heirloom-tomatoes",
        name: "Heirloom Tomatoes",
        farm_id: "green-valley-greens",
        price_cents: 499,
        category: "Vegetables",
        description: "Juicy, flavorful heirloom tomatoes in a variety of colors and sizes.",
    },
    Product {
        id: "green-lettuce",
        name: "Green Leaf Lettuce",
        farm_id: "green-valley-greens",
        price_cents: 250,
        category: "Vegetables",
        description: "Crisp green leaf lettuce, grown organically without pesticides.",
    },
    Product {
        id: "free-range-eggs",
        name: "Free-Range Eggs",
        farm_id: "sunrise-eggs",
        price_cents: 600,
        category: "Dairy & Eggs",
        description: "A dozen of our finest free-range brown and white eggs.",
    },
    Product {
        id: "wildflower-honey",
        name: "Wildflower Honey",
        farm_id: "honeybee-meadows",
        price_cents: 1200,
        category: "Pantry",
        description: "Pure, raw wildflower honey. Unfiltered and full of natural goodness.",
    },
    Product {
        id: "fresh-strawberries",
        name: "Fresh Strawberries",
        farm_id: "riverside-market",
        price_cents: 550,
        category: "Fruits",
        description: "Sweet and juicy strawberries, picked at the peak of ripeness.",
    },
    Product {
        id: "organic-zucchini",
        name: "Organic Zucchini",
        farm_id: "riverside-market",
        price_cents: 300,
        category: "Vegetables",
        description: "Versatile organic zucchini, great for grilling or baking.",
    },
];

pub fn find(id: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

pub fn for_farm(farm_id: &str) -> Vec<&'static Product> {
    CATALOG.iter().filter(|p| p.farm_id == farm_id).collect()
}
