//! HTML rendering for the tracker page.

use std::fmt::Write as _;

use crate::models::{Category, Record};

use super::entry::MediaEntry;
use super::schema::schema;
use super::stats::Stats;

/// Escape text for HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One labelled input per schema field, then the submit button.
pub fn render_form(category: Category) -> String {
    let mut html = format!(
        r#"<form id="addForm" method="post" action="/items/{}">"#,
        category.as_str()
    );

    for field in schema(category) {
        let mut attrs = String::new();
        if field.required {
            attrs.push_str(" required");
        }
        if let Some(min) = field.min {
            let _ = write!(attrs, r#" min="{}""#, min);
        }
        if let Some(max) = field.max {
            let _ = write!(attrs, r#" max="{}""#, max);
        }
        if let Some(placeholder) = field.placeholder {
            let _ = write!(attrs, r#" placeholder="{}""#, escape(placeholder));
        }

        let _ = write!(
            html,
            r#"<div class="input-group"><label for="{name}">{label}</label><input type="{kind}" name="{name}" id="{name}"{attrs}></div>"#,
            name = field.name,
            label = escape(field.label),
            kind = field.kind.as_str(),
            attrs = attrs,
        );
    }

    html.push_str(r#"<button type="submit">Add Item</button></form>"#);
    html
}

/// Five star glyphs, the first `rating` filled.
pub fn rating_stars(rating: i64) -> String {
    let mut html = String::new();
    for i in 1..=5 {
        let glyph = if i <= rating { '★' } else { '☆' };
        let _ = write!(html, r#"<span class="star">{}</span>"#, glyph);
    }
    html
}

/// Every record of `category`, or the empty-state placeholder.
pub fn render_list(category: Category, records: &[Record]) -> String {
    if records.is_empty() {
        return format!(
            r#"<div id="mediaList"><div class="empty-state"><h3>No {} added yet</h3><p>Start by adding your first {} above!</p></div></div>"#,
            category.as_str(),
            category.singular(),
        );
    }

    let mut html = String::from(r#"<div id="mediaList">"#);
    for record in records {
        html.push_str(&render_item(category, record));
    }
    html.push_str("</div>");
    html
}

fn render_item(category: Category, record: &Record) -> String {
    let entry = MediaEntry::from_record(category, record);
    let id = record.id().unwrap_or_default();
    let delete_action = format!(
        "/items/{}/{}/delete",
        category.as_str(),
        urlencoding::encode(&id)
    );

    let mut details = String::new();
    for (label, value) in entry.details() {
        let _ = write!(
            details,
            r#"<div class="media-detail">{}: <span>{}</span></div>"#,
            label,
            escape(value)
        );
    }

    if let Some(rating) = entry.rating() {
        let _ = write!(
            details,
            r#"<div class="media-detail">Rating: <span class="rating">{}</span></div>"#,
            rating_stars(rating)
        );
    }

    format!(
        r#"<div class="media-item"><div class="media-info"><div class="media-title">{title}</div><div class="media-details">{details}</div></div><form method="post" action="{action}"><button type="submit" class="delete-btn" data-id="{id}">Remove</button></form></div>"#,
        title = escape(entry.title().unwrap_or("Untitled")),
        details = details,
        action = escape(&delete_action),
        id = escape(&id),
    )
}

pub fn render_stats(stats: &Stats) -> String {
    let cards = [
        (stats.total.to_string(), "Total Items"),
        (stats.movies.to_string(), "Movies"),
        (stats.books.to_string(), "Books"),
        (stats.shows.to_string(), "Shows"),
        (stats.average_display(), "Avg Rating"),
    ];

    let mut html = String::from(r#"<div id="stats">"#);
    for (number, label) in cards {
        let _ = write!(
            html,
            r#"<div class="stat-card"><div class="stat-number">{}</div><div class="stat-label">{}</div></div>"#,
            number, label
        );
    }
    html.push_str("</div>");
    html
}

fn render_tabs(active: Category) -> String {
    let mut html = String::from(r#"<nav class="tabs">"#);
    for category in Category::ALL {
        let class = if category == active { "tab active" } else { "tab" };
        let _ = write!(
            html,
            r#"<form method="post" action="/category/{c}"><button type="submit" class="{class}" data-type="{c}">{title}</button></form>"#,
            c = category.as_str(),
            class = class,
            title = category.title(),
        );
    }
    html.push_str("</nav>");
    html
}

/// Whole page for the active category.
pub fn render_page(active: Category, records: &[Record], stats: &Stats, notice: Option<&str>) -> String {
    let notice = notice
        .map(|msg| format!(r#"<div class="notice error" role="alert">{}</div>"#, escape(msg)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>Media Tracker</title><style>{css}</style></head><body><h1>Media Tracker</h1>{tabs}{notice}{stats}{form}{list}</body></html>"#,
        css = STYLE,
        tabs = render_tabs(active),
        notice = notice,
        stats = render_stats(stats),
        form = render_form(active),
        list = render_list(active, records),
    )
}

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:2rem auto}\
.tabs form,.tabs button{display:inline-block}.tab.active{font-weight:bold}\
.notice{color:#b00020;margin:1rem 0}#stats{display:flex;gap:1rem}\
.stat-card{border:1px solid #ddd;padding:.5rem 1rem}.media-item{display:flex;justify-content:space-between;border-bottom:1px solid #eee;padding:.5rem 0}\
.star{color:#f5b301}";
