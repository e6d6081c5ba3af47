use crate::models::FoodRecord;

/// Section order for grouped food lists. Headings not listed here follow in
/// the order they first appear.
pub const CATEGORY_ORDER: [&str; 14] = [
    "Getreide",
    "Teigwaren",
    "Brot & Backwaren",
    "Süßgebäck",
    "Obst",
    "Gemüse",
    "Kartoffeln",
    "Hülsenfrüchte & Nüsse",
    "Milchprodukte",
    "Süßwaren",
    "Getränke",
    "Alkoholische Getränke",
    "Fertiggerichte",
    "Fertiggerichte (süß)",
];

/// Foods sharing one primary category.
#[derive(Debug, Clone)]
pub struct FoodGroup<'a> {
    pub heading: String,
    pub foods: Vec<&'a FoodRecord>,
}

/// Group foods by their primary category, in display order.
///
/// Foods without any category are left out.
pub fn group_by_category<'a, I>(foods: I) -> Vec<FoodGroup<'a>>
where
    I: IntoIterator<Item = &'a FoodRecord>,
{
    let mut groups: Vec<FoodGroup<'a>> = Vec::new();

    for food in foods {
        let Some(heading) = food.primary_category() else {
            continue;
        };
        match groups.iter_mut().find(|g| g.heading == heading) {
            Some(group) => group.foods.push(food),
            None => groups.push(FoodGroup {
                heading: heading.to_string(),
                foods: vec![food],
            }),
        }
    }

    // Stable: unknown headings keep first-seen order after the known ones.
    groups.sort_by_key(|g| {
        CATEGORY_ORDER
            .iter()
            .position(|c| *c == g.heading)
            .unwrap_or(CATEGORY_ORDER.len())
    });

    groups
}
