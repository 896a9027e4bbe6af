//! CLI command messaging system
//!
//! Consistent one-line output for the non-interactive commands
//! (`list`, `add`, `edit`, `delete`, `set-url`, `reset`).

use crate::store::FoodList;
use crate::ui::dashboard::utils::format_price;

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    print!("\x1b[1;33m[INFO]\x1b[0m {}", title);
    if !details.is_empty() {
        println!("\t {}", details);
    } else {
        println!();
    }
}

/// Print CLI command error
pub fn print_error(title: &str, details: Option<&str>) {
    println!("\x1b[1;31m[ERROR]\x1b[0m {}", title);
    if let Some(details) = details {
        println!("\x1b[1;31m[ERROR]\x1b[0m Details: {}", details);
    }
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    print!("\x1b[1;32m[SUCCESS]\x1b[0m {}", title);
    if !details.is_empty() {
        println!("\t {}", details);
    } else {
        println!();
    }
}

/// Print the food list, one food per line.
pub fn print_foods(foods: &FoodList) {
    if foods.is_empty() {
        println!("No foods yet.");
        return;
    }
    for food in foods.iter() {
        let availability = if food.available { "yes" } else { "no" };
        println!(
            "{:>5}  {:<24}  {:>10}  {:<3}  {}",
            food.id,
            food.name,
            format_price(food.price),
            availability,
            food.description
        );
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

/// Macro for CLI success messages
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
