use colored::Colorize;
use grandcat::api::{CmdMessage, CmdResult, MessageLevel};
use grandcat::config::CatalogConfig;
use grandcat::render::ProductCard;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use url::Url;

const NAME_WIDTH: usize = 34;
const WEIGHT_WIDTH: usize = 10;
const SHELF_WIDTH: usize = 9;
const LIKED_MARKER: &str = "♥";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Cards followed by the result's messages.
pub(super) fn print_listing(result: &CmdResult, verbose: bool) {
    if result.listed_products.is_empty() && result.messages.is_empty() {
        println!("No products found.");
    }
    print_cards(&result.listed_products, verbose);
    print_messages(&result.messages);
}

fn print_cards(cards: &[ProductCard], verbose: bool) {
    let idx_width = cards.len().to_string().len() + 2;
    for card in cards {
        let idx_str = format!("{}. ", card.position);
        let idx_padding = idx_width.saturating_sub(idx_str.width());

        let name = truncate_to_width(&card.name, NAME_WIDTH);
        let name_padding = NAME_WIDTH.saturating_sub(name.width());

        let weight = card.net_weight.as_deref().unwrap_or("-");
        let weight = truncate_to_width(weight, WEIGHT_WIDTH);
        let weight_padding = WEIGHT_WIDTH.saturating_sub(weight.width());

        let shelf_padding = SHELF_WIDTH.saturating_sub(card.shelf_life.width());

        let marker = if card.liked {
            LIKED_MARKER.red()
        } else {
            " ".normal()
        };

        println!(
            "  {}{}{}{} {}{} {}{}  {} {}",
            " ".repeat(idx_padding),
            idx_str.yellow(),
            name,
            " ".repeat(name_padding),
            weight.dimmed(),
            " ".repeat(weight_padding),
            " ".repeat(shelf_padding),
            card.shelf_life,
            card.category.cyan(),
            marker
        );

        if verbose {
            let indent = " ".repeat(idx_width + 2);
            println!("{}{}", indent, card.image_url.dimmed());
            println!("{}{}", indent, card.id.to_string().dimmed());
        }
    }
}

pub(super) fn print_share_url(url: &Url) {
    println!("{} {}", "Share:".dimmed(), url.as_str().underline());
}

pub(super) fn print_config(config: &CatalogConfig) {
    for key in CatalogConfig::KEYS {
        println!("{} = {}", key, config.get(key).unwrap_or_default());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
