//! Terminal rendering for gather types.
//!
//! Extension trait adding colored output on top of the core types, so the
//! commands only decide what to show, not how it looks.

use gather_core::comment::Comment;
use gather_core::event::Event;
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let header = match self.id {
            Some(id) => format!("{} {}", self.title.bold(), format!("(#{id})").dimmed()),
            None => self.title.bold().to_string(),
        };

        format!(
            "{header}\n{}\n\n  Date:     {}\n  Time:     {}\n  Location: {}",
            self.description.dimmed(),
            self.date,
            self.time,
            self.location
        )
    }
}

impl Render for Comment {
    fn render(&self) -> String {
        format!(
            "  {} {}\n    {}\n    {}",
            self.name.bold(),
            stars(self.rating).yellow(),
            self.comment,
            self.created_at.dimmed()
        )
    }
}

/// Five-star rating bar, e.g. "★★★☆☆".
pub fn stars(rating: u8) -> String {
    (1..=5)
        .map(|star| if star <= rating { '★' } else { '☆' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_fills_up_to_the_rating() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
    }
}
