pub mod prompts;
pub mod render;

pub use prompts::{
    parse_amount, pick_food, prompt_grams, prompt_query, prompt_select_food, prompt_yes_no,
};
pub use render::{
    display_calculation, display_food_list, display_grouped, display_meal, display_suggestions,
    format_number,
};
