use super::Recipe;

pub(super) const RECIPES: &[Recipe] = &[
    Recipe {
        id: 1,
        title: "Classic Chocolate Chip Cookies",
        category: "Cookies",
        time: 30,
        difficulty: "Easy",
        image: Some(
            "https://images.unsplash.com/photo-1600891963920-b8e6f822389b?q=80&w=1200&auto=format&fit=crop",
        ),
        ingredients: &[
            "2 1/4 cups all-purpose flour",
            "1 tsp baking soda",
            "1 tsp salt",
            "1 cup butter, softened",
            "3/4 cup white sugar",
            "3/4 cup brown sugar",
            "2 large eggs",
            "2 cups chocolate chips",
        ],
        steps: &[
            "Preheat oven to 175°C.",
            "Cream butter and sugars until fluffy.",
            "Beat in eggs one at a time.",
            "Mix dry ingredients, then combine.",
            "Fold in chocolate chips.",
            "Scoop onto tray and bake 9–11 minutes.",
        ],
    },
    Recipe {
        id: 2,
        title: "No-Knead Rustic Bread",
        category: "Bread",
        time: 240,
        difficulty: "Medium",
        image: Some(
            "https://images.unsplash.com/photo-1608198093002-ad4e005484ec?q=80&w=1200&auto=format&fit=crop",
        ),
        ingredients: &[
            "3 cups bread flour",
            "1/4 tsp instant yeast",
            "1 1/4 tsp salt",
            "1 1/2 cups water",
        ],
        steps: &[
            "Mix all ingredients until shaggy dough forms.",
            "Cover and rest 12–18 hours.",
            "Shape, rest 30 mins.",
            "Bake in preheated Dutch oven at 230°C for 30 mins covered, 15 mins uncovered.",
        ],
    },
    Recipe {
        id: 3,
        title: "Lemon Drizzle Cake",
        category: "Cakes",
        time: 75,
        difficulty: "Easy",
        image: Some(
            "https://images.unsplash.com/photo-1605478034040-04f1e6c0c4e6?q=80&w=1200&auto=format&fit=crop",
        ),
        ingredients: &[
            "225g unsalted butter",
            "225g caster sugar",
            "4 eggs",
            "225g self-raising flour",
            "2 lemons (zest & juice)",
            "85g icing sugar",
        ],
        steps: &[
            "Heat oven to 180°C and line a loaf tin.",
            "Beat butter & sugar, add eggs gradually.",
            "Fold in flour and lemon zest.",
            "Bake ~45–50 mins.",
            "Mix lemon juice & icing sugar, pour over warm cake.",
        ],
    },
];
