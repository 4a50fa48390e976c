use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{NAV_ROUTES, StatusMessage};
use super::layout::AppLayout;
use super::screens::{
    AuthScreen, DetailScreen, ExploreInput, ExploreScreen, HomeScreen, ListingScreen,
    OnboardingScreen, ProfileScreen, SavedScreen, Screen,
};
use crate::auth::AuthMode;
use crate::catalog::Catalog;
use crate::detail::{
    DetailTab, PROPERTY_INSIGHTS, SIMILAR_LIMIT, location_blurb, price_per_sqft,
};
use crate::favorites::{EMPTY_STATE_MESSAGE, SavedView};
use crate::host::MessageKind;
use crate::inquiries::ContactField;
use crate::models::{Property, PropertyType};
use crate::profile::{CURRENT_PROFILE, ProfileTab};
use crate::routes::{Route, map_link};
use crate::utils::{format_baths, format_price, format_thousands, format_timestamp, single_line};
use crate::validation::ValidationErrors;
use crate::wizard::{
    LISTING_FEATURES, ListingField, ListingStep, OnboardingStep, PREFERENCE_FEATURES,
};

const BRAND: &str = "Airben Be";

const ACCENT: Color = Color::Rgb(16, 185, 129); // Emerald
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ERROR: Color = Color::Rgb(239, 68, 68);
const INFO: Color = Color::Rgb(59, 130, 246);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything a frame needs, borrowed from the app
pub struct RenderState<'a> {
    pub route: &'a Route,
    pub screen: &'a Screen,
    pub catalog: &'a Catalog,
    pub status_message: Option<&'a StatusMessage>,
    pub editing: bool,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header_area, state.route);
    match state.screen {
        Screen::Home(screen) => render_home(frame, &layout, screen, state.catalog),
        Screen::Explore(screen) => render_explore(frame, &layout, screen, state.catalog),
        Screen::Detail(screen) => render_detail(frame, &layout, screen, state.catalog),
        Screen::Saved(screen) => render_saved(frame, layout.main_area, screen),
        Screen::Profile(screen) => render_profile(frame, &layout, screen),
        Screen::ListProperty(screen) => render_listing(frame, layout.main_area, screen),
        Screen::Onboarding(screen) => render_onboarding(frame, layout.main_area, screen),
        Screen::Auth(screen) => render_auth(frame, layout.main_area, screen),
        Screen::NotFound(path) => render_not_found(frame, layout.main_area, path),
    }
    render_status_bar(frame, layout.status_area, state);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(format!(" {} ", title))
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    }
}

fn label(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(MUTED))
}

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
    ))
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// One-line card used by every property list
fn property_row(property: &Property, width: u16) -> String {
    let mut badges = String::new();
    if property.is_featured {
        badges.push_str("★ ");
    }
    if property.is_new {
        badges.push_str("NEW ");
    }
    let text = format!(
        "{}{} | {} | {} bd {} ba {} sqft | {}",
        badges,
        property.title,
        format_price(property.price),
        property.beds,
        format_baths(property.baths),
        format_thousands(property.sqft as u64),
        property.location
    );
    single_line(&text, width.saturating_sub(4) as usize)
}

fn property_list<'a>(
    properties: &[&Property],
    selected: usize,
    width: u16,
) -> Vec<ListItem<'a>> {
    properties
        .iter()
        .enumerate()
        .map(|(idx, p)| ListItem::new(property_row(p, width)).style(row_style(idx == selected)))
        .collect()
}

/// Summary panel for a single property
fn property_preview(property: Option<&Property>) -> Text<'static> {
    let Some(property) = property else {
        return Text::from("No property selected");
    };

    let mut lines = vec![
        heading(single_line(&property.title, 80)),
        Line::from(vec![label("Price: "), Span::raw(format_price(property.price))]),
        Line::from(vec![label("Location: "), Span::raw(single_line(&property.location, 80))]),
        Line::from(vec![
            label("Rooms: "),
            Span::raw(format!(
                "{} beds, {} baths, {} sqft",
                property.beds,
                format_baths(property.baths),
                format_thousands(property.sqft as u64)
            )),
        ]),
        Line::from(""),
    ];
    if !property.features.is_empty() {
        lines.push(Line::from(vec![
            label("Features: "),
            Span::raw(single_line(&property.features.join(", "), 200)),
        ]));
        lines.push(Line::from(""));
    }
    for line in property.description.lines() {
        lines.push(Line::from(single_line(line, 400)));
    }
    Text::from(lines)
}

fn render_header(frame: &mut Frame, area: Rect, route: &Route) {
    let nav = NAV_ROUTES
        .iter()
        .map(|(key, route)| format!("{}:{}", key, route.title()))
        .collect::<Vec<_>>()
        .join("  ");
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", BRAND),
            Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", route.title()), Style::default().fg(BRIGHT)),
        label(format!(" {}", nav)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(BAR_BG)), area);
}

fn render_home(frame: &mut Frame, layout: &AppLayout, screen: &HomeScreen, catalog: &Catalog) {
    let (left, right) = layout.split_main();
    let (search_area, list_area) = AppLayout::band(left, 3);

    let search_text = if screen.editing || !screen.search.is_empty() {
        Span::raw(screen.search.clone())
    } else {
        label("Press / to search by location, neighborhood or address")
    };
    let search_block = panel("Find your dream home");
    let search_block = if screen.editing {
        search_block.border_style(Style::default().fg(ACCENT))
    } else {
        search_block
    };
    frame.render_widget(Paragraph::new(Line::from(search_text)).block(search_block), search_area);

    let visible: Vec<&Property> = screen.visible(catalog).iter().collect();
    let title = if screen.pager.has_more(catalog.len()) {
        format!("Properties ({} of {}, m: load more)", visible.len(), catalog.len())
    } else {
        format!("Properties ({})", visible.len())
    };
    let items = property_list(&visible, screen.selected, list_area.width);
    frame.render_widget(List::new(items).block(panel(&title)), list_area);

    let featured: Vec<ListItem> = catalog
        .featured_preview()
        .iter()
        .map(|p| ListItem::new(property_row(p, right.width)).style(Style::default().fg(BRIGHT)))
        .collect();
    let (featured_area, preview_area) = AppLayout::band(right, featured.len() as u16 + 2);
    frame.render_widget(List::new(featured).block(panel("Featured")), featured_area);
    frame.render_widget(
        Paragraph::new(property_preview(visible.get(screen.selected).copied()))
            .block(panel("Preview"))
            .wrap(Wrap { trim: false }),
        preview_area,
    );
}

fn render_explore(
    frame: &mut Frame,
    layout: &AppLayout,
    screen: &ExploreScreen,
    catalog: &Catalog,
) {
    let (left, right) = layout.split_main();
    let (input_area, list_area) = AppLayout::band(left, 3);

    let (title, content) = match screen.mode {
        ExploreInput::Filter => (
            "Filter (type: price: beds: baths: feature:)",
            screen.input.clone(),
        ),
        ExploreInput::Ai => ("Describe your ideal home", screen.input.clone()),
        ExploreInput::Idle => ("Active filters", screen.filter.summary()),
    };
    let mut block = panel(title);
    if let Some(error) = &screen.filter_error {
        block = block.border_style(Style::default().fg(ERROR)).title_bottom(format!(" {} ", error));
    } else if screen.mode != ExploreInput::Idle {
        block = block.border_style(Style::default().fg(ACCENT));
    }
    frame.render_widget(Paragraph::new(content).block(block), input_area);

    let results = screen.results(catalog);
    let shown = screen.pager.visible(results.len());
    let title = if results.is_empty() {
        "No properties match your filters".to_string()
    } else if screen.pager.has_more(results.len()) {
        format!("{} of {} properties (m: load more)", shown, results.len())
    } else {
        format!("{} properties", results.len())
    };
    let items = property_list(&results[..shown], screen.selected, list_area.width);
    frame.render_widget(List::new(items).block(panel(&title)), list_area);

    frame.render_widget(
        Paragraph::new(property_preview(results.get(screen.selected).copied()))
            .block(panel("Preview"))
            .wrap(Wrap { trim: false }),
        right,
    );
}

fn render_detail(frame: &mut Frame, layout: &AppLayout, screen: &DetailScreen, catalog: &Catalog) {
    let Some(property) = catalog.find(&screen.property_id) else {
        render_not_found(frame, layout.main_area, &Route::property(&screen.property_id).path());
        return;
    };
    let (left, right) = layout.split_main();

    let image = screen.carousel.current(&property.images).map(String::as_str).unwrap_or("-");
    let mut lines = vec![
        heading(single_line(&property.title, 120)),
        Line::from(vec![
            Span::styled(
                format_price(property.price),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            label(format!("   {}", single_line(&property.location, 80))),
        ]),
        Line::from(vec![
            label("Photo "),
            Span::raw(screen.carousel.label()),
            label(": "),
            Span::raw(single_line(image, 80)),
        ]),
        Line::from(vec![
            label(if screen.saved { "♥ Saved" } else { "♡ Not saved" }),
            label(match screen.views {
                Some(views) => format!("   Viewed {} times", views),
                None => String::new(),
            }),
        ]),
        Line::from(""),
    ];

    let tabs: Vec<Span> = DetailTab::ALL
        .iter()
        .map(|tab| Span::styled(format!(" {} ", tab.label()), row_style(*tab == screen.tab)))
        .collect();
    lines.push(Line::from(tabs));
    lines.push(Line::from(""));

    match screen.tab {
        DetailTab::Details => {
            lines.push(Line::from(format!(
                "{} beds · {} baths · {} sqft",
                property.beds,
                format_baths(property.baths),
                format_thousands(property.sqft as u64)
            )));
            if let Some(per_sqft) = price_per_sqft(property) {
                lines.push(Line::from(vec![
                    label("Price per sqft: "),
                    Span::raw(format_price(per_sqft)),
                ]));
            }
            lines.push(Line::from(""));
            for line in property.description.lines() {
                lines.push(Line::from(single_line(line, 400)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(location_blurb(&single_line(&property.location, 80))));
            lines.push(Line::from(label(map_link(&property.location))));
        }
        DetailTab::Features => {
            if property.features.is_empty() {
                lines.push(Line::from(label("No features listed")));
            }
            for feature in &property.features {
                lines.push(Line::from(format!("✓ {}", single_line(feature, 60))));
            }
        }
        DetailTab::AiAnalysis => {
            for (title, body) in PROPERTY_INSIGHTS {
                lines.push(heading(title));
                lines.push(Line::from(body));
                lines.push(Line::from(""));
            }
        }
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel("Property")).wrap(Wrap { trim: false }),
        left,
    );

    let similar = catalog.similar_to(&property.id, SIMILAR_LIMIT);
    let (form_area, similar_area) = AppLayout::band(right, ContactField::ALL.len() as u16 * 2 + 3);
    render_contact_form(frame, form_area, screen);

    let items = property_list(&similar, screen.similar_selected, similar_area.width);
    frame.render_widget(List::new(items).block(panel("Similar properties")), similar_area);
}

fn render_contact_form(frame: &mut Frame, area: Rect, screen: &DetailScreen) {
    let mut lines = Vec::new();
    for field in ContactField::ALL {
        let focused = screen.focus == Some(field);
        lines.push(field_line(
            field.label(),
            screen.contact.form.field(field),
            focused,
            false,
        ));
        lines.push(error_line(&screen.contact.errors, field.key()));
    }
    if screen.contact.is_submitting() {
        lines.push(Line::from(Span::styled("Sending...", Style::default().fg(INFO))));
    }

    let title = if screen.focus.is_some() { "Request a viewing" } else { "Request a viewing (c)" };
    let mut block = panel(title);
    if screen.focus.is_some() {
        block = block.border_style(Style::default().fg(ACCENT));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(name: &str, value: &str, focused: bool, masked: bool) -> Line<'static> {
    let shown = if masked { "•".repeat(value.chars().count()) } else { single_line(value, 60) };
    let cursor = if focused { "▏" } else { "" };
    let marker = if focused { "▶ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        label(format!("{}: ", name)),
        Span::styled(format!("{}{}", shown, cursor), Style::default().fg(BRIGHT)),
    ])
}

fn error_line(errors: &ValidationErrors, key: &str) -> Line<'static> {
    match errors.get(key) {
        Some(message) => {
            Line::from(Span::styled(format!("    {}", message), Style::default().fg(ERROR)))
        }
        None => Line::from(""),
    }
}

fn render_saved(frame: &mut Frame, area: Rect, screen: &SavedScreen) {
    let (tabs_area, list_area) = AppLayout::band(area, 1);
    let tabs: Vec<Span> = SavedView::ALL
        .iter()
        .map(|view| Span::styled(format!(" {} ", view.label()), row_style(*view == screen.view)))
        .collect();
    frame.render_widget(Paragraph::new(Line::from(tabs)), tabs_area);

    if screen.items.is_empty() {
        frame.render_widget(
            Paragraph::new(vec![heading("No saved properties"), Line::from(EMPTY_STATE_MESSAGE)])
                .block(panel("Saved")),
            list_area,
        );
        return;
    }

    let now = Utc::now();
    let items: Vec<ListItem> = screen
        .items
        .iter()
        .enumerate()
        .map(|(idx, saved)| {
            let text = format!(
                "{} | {} | {} bd {} ba | {} | saved {} | {} views",
                saved.title,
                saved.price,
                saved.bedrooms,
                format_baths(saved.bathrooms),
                saved.location,
                format_timestamp(&saved.saved_at, &now),
                saved.view_count
            );
            ListItem::new(single_line(&text, list_area.width.saturating_sub(4) as usize))
                .style(row_style(idx == screen.selected))
        })
        .collect();
    let title = format!("Saved ({})", screen.items.len());
    frame.render_widget(List::new(items).block(panel(&title)), list_area);
}

fn render_profile(frame: &mut Frame, layout: &AppLayout, screen: &ProfileScreen) {
    let (left, right) = layout.split_main();
    let dashboard = &screen.dashboard;
    let now = Utc::now();

    let (tabs_area, list_area) = AppLayout::band(left, 1);
    let tabs: Vec<Span> = ProfileTab::ALL
        .iter()
        .map(|tab| {
            let text = format!(" {} ({}) ", tab.label(), dashboard.count(*tab));
            Span::styled(text, row_style(*tab == screen.tab))
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(tabs)), tabs_area);

    let width = list_area.width.saturating_sub(4) as usize;
    let rows: Vec<String> = match screen.tab {
        ProfileTab::Favorites => dashboard
            .saved
            .iter()
            .map(|s| format!("{} | {} | {}", s.title, s.price, s.location))
            .collect(),
        ProfileTab::MyListings => dashboard
            .listings
            .iter()
            .map(|l| {
                format!(
                    "{} | {} | {} | {:?} | listed {}",
                    l.title,
                    format_price(l.price),
                    l.location,
                    l.status,
                    format_timestamp(&l.created_at, &now)
                )
            })
            .collect(),
        ProfileTab::Inquiries => dashboard
            .inquiries
            .iter()
            .map(|i| inquiry_row(&i.property_title, i.date, &i.submitted_at, &now))
            .collect(),
    };
    let items: Vec<ListItem> = if rows.is_empty() {
        vec![ListItem::new("Nothing here yet").style(Style::default().fg(MUTED))]
    } else {
        rows.iter()
            .enumerate()
            .map(|(idx, row)| {
                ListItem::new(single_line(row, width)).style(row_style(idx == screen.selected))
            })
            .collect()
    };
    frame.render_widget(List::new(items).block(panel(screen.tab.label())), list_area);

    let mut lines = vec![
        heading(CURRENT_PROFILE.name),
        Line::from(label(CURRENT_PROFILE.email)),
        Line::from(label(format!("Member since {}", CURRENT_PROFILE.joined))),
        Line::from(""),
        heading("Preferences"),
    ];
    match &dashboard.preferences {
        Some(prefs) => {
            let types: Vec<&str> = prefs.property_types.iter().map(PropertyType::label).collect();
            lines.push(Line::from(vec![label("Types: "), Span::raw(types.join(", "))]));
            lines.push(Line::from(vec![label("Budget: "), Span::raw(format_price(prefs.budget))]));
            if !prefs.location.is_empty() {
                lines.push(Line::from(vec![
                    label("Location: "),
                    Span::raw(single_line(&prefs.location, 60)),
                ]));
            }
            lines.push(Line::from(vec![
                label("Rooms: "),
                Span::raw(format!("{}+ beds, {}+ baths", prefs.bedrooms, prefs.bathrooms)),
            ]));
            if !prefs.features.is_empty() {
                lines.push(Line::from(vec![
                    label("Features: "),
                    Span::raw(prefs.features.join(", ")),
                ]));
            }
        }
        None => lines.push(Line::from(label("Not set. Press e to choose your preferences."))),
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel("Account")).wrap(Wrap { trim: false }),
        right,
    );
}

fn inquiry_row(
    title: &str,
    date: Option<chrono::NaiveDate>,
    submitted_at: &DateTime<Utc>,
    now: &DateTime<Utc>,
) -> String {
    let preferred = date.map_or_else(|| "any date".to_string(), |d| d.format("%b %-d").to_string());
    format!("{} | viewing {} | sent {}", title, preferred, format_timestamp(submitted_at, now))
}

fn render_listing(frame: &mut Frame, area: Rect, screen: &ListingScreen) {
    let wizard = &screen.wizard;
    let draft = wizard.draft();

    match wizard.step() {
        ListingStep::CollectingPhotos => {
            let mut lines = vec![
                heading("Upload property photos"),
                Line::from(label("Type a path or URL and press Enter to add it.")),
                Line::from(""),
                field_line("Photo", &screen.photo_input, true, false),
                Line::from(""),
            ];
            if draft.images.is_empty() {
                lines.push(Line::from(label("No photos yet")));
            }
            for (idx, image) in draft.images.iter().enumerate() {
                lines.push(Line::from(format!("{}. {}", idx + 1, single_line(image, 80))));
            }
            frame.render_widget(
                Paragraph::new(lines).block(panel("List a Property: Photos")),
                area,
            );
        }
        ListingStep::Analyzing => {
            let lines = vec![
                heading("Analyzing your photos..."),
                Line::from(label(format!("{} photo(s) submitted", draft.images.len()))),
            ];
            frame.render_widget(Paragraph::new(lines).block(panel("List a Property")), area);
        }
        ListingStep::DetailsForm => {
            let mut lines = Vec::new();
            for (idx, field) in ListingField::ALL.iter().enumerate() {
                let focused = idx == screen.focus;
                lines.push(field_line(field.label(), draft.field(*field), focused, false));
                if let Some(message) = wizard.errors().get(field.key()) {
                    lines.push(Line::from(Span::styled(
                        format!("    {}", message),
                        Style::default().fg(ERROR),
                    )));
                }
            }

            let type_label = draft.property_type.map_or("Not set", |t| t.label());
            lines.push(field_line(
                "Type",
                type_label,
                screen.focus == ListingScreen::TYPE_ROW,
                false,
            ));

            let on_features = screen.focus == ListingScreen::FEATURES_ROW;
            let mut spans = vec![
                Span::styled(if on_features { "▶ " } else { "  " }, Style::default().fg(ACCENT)),
                label("Features: "),
            ];
            for (idx, tag) in LISTING_FEATURES.iter().enumerate() {
                let text = format!("{} {}  ", checkbox(draft.has_feature(tag)), tag);
                let highlighted = on_features && idx == screen.feature_cursor;
                spans.push(Span::styled(text, row_style(highlighted)));
            }
            lines.push(Line::from(spans));

            frame.render_widget(
                Paragraph::new(lines)
                    .block(panel("List a Property: Details"))
                    .wrap(Wrap { trim: false }),
                area,
            );
        }
        ListingStep::Submitted => {
            let lines = vec![heading("Your property has been listed")];
            frame.render_widget(Paragraph::new(lines).block(panel("List a Property")), area);
        }
    }
}

fn render_onboarding(frame: &mut Frame, area: Rect, screen: &OnboardingScreen) {
    let step = screen.wizard.step();
    let prefs = screen.wizard.preferences();
    let mut lines = vec![
        label(format!("Step {} of {}", step.number(), OnboardingStep::ALL.len())).into(),
        heading(step.title()),
        Line::from(""),
    ];

    match step {
        OnboardingStep::PropertyTypes => {
            for (idx, property_type) in PropertyType::SEARCHABLE.iter().enumerate() {
                let checked = prefs.property_types.contains(property_type);
                let text = format!("{} {}", checkbox(checked), property_type.label());
                lines.push(Line::from(Span::styled(text, row_style(idx == screen.cursor))));
            }
        }
        OnboardingStep::Budget => {
            lines.push(Line::from(vec![
                label("Up to "),
                Span::styled(format_price(prefs.budget), Style::default().fg(ACCENT)),
            ]));
            lines.push(Line::from(label("Left/Right to adjust")));
        }
        OnboardingStep::Location => {
            lines.push(field_line("City, neighborhood or ZIP", &prefs.location, true, false));
        }
        OnboardingStep::Rooms => {
            let rows = [("Bedrooms", prefs.bedrooms), ("Bathrooms", prefs.bathrooms)];
            for (idx, (name, count)) in rows.iter().enumerate() {
                let text = format!("{}: < {}+ >", name, count);
                lines.push(Line::from(Span::styled(text, row_style(idx == screen.cursor))));
            }
        }
        OnboardingStep::Features => {
            for (idx, tag) in PREFERENCE_FEATURES.iter().enumerate() {
                let checked = prefs.features.iter().any(|f| f == tag);
                let text = format!("{} {}", checkbox(checked), tag);
                lines.push(Line::from(Span::styled(text, row_style(idx == screen.cursor))));
            }
        }
    }

    frame.render_widget(
        Paragraph::new(lines).block(panel("Your Preferences")).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_auth(frame: &mut Frame, area: Rect, screen: &AuthScreen) {
    let title = match screen.mode {
        AuthMode::Login => "Welcome back",
        AuthMode::Signup => "Create an account",
    };
    let mut lines = vec![heading(title), Line::from("")];
    for (idx, (key, name, value, masked)) in screen.fields().into_iter().enumerate() {
        lines.push(field_line(name, value, idx == screen.field, masked));
        lines.push(error_line(&screen.errors, key));
    }

    if screen.mode == AuthMode::Signup {
        lines.push(heading("Password requirements"));
        for (rule, met) in screen.signup.requirements().items() {
            let style = if met { Style::default().fg(ACCENT) } else { Style::default().fg(MUTED) };
            lines.push(Line::from(Span::styled(format!("{} {}", checkbox(met), rule), style)));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(panel("Account")), area);
}

fn render_not_found(frame: &mut Frame, area: Rect, path: &str) {
    let lines = vec![
        heading("404"),
        Line::from(format!("Oops! Page not found: {}", single_line(path, 80))),
        Line::from(""),
        Line::from(label("Press Enter to return home")),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("Not Found")), area);
}

/// Key hints for the current screen
fn hints(screen: &Screen, editing: bool) -> &'static str {
    match screen {
        Screen::Home(_) if editing => "Enter: search | Esc: cancel",
        Screen::Home(_) => "/: search | ↑↓: select | Enter: open | f: save | m: more | q: quit",
        Screen::Explore(_) if editing => "Enter: apply | Esc: cancel",
        Screen::Explore(_) => "/: filter | a: AI search | c: clear | Enter: open | f: save",
        Screen::Detail(_) if editing => "Tab: next field | Enter: send request | Esc: close form",
        Screen::Detail(_) => "←→: photos | Tab: tabs | f: save | y: share | c: contact | Esc: back",
        Screen::Saved(_) => "Tab: view | Enter: open | r: remove | y: share | Esc: back",
        Screen::Profile(_) => "Tab: section | Enter: open | e: preferences | x: log out",
        Screen::ListProperty(screen) => match screen.wizard.step() {
            ListingStep::CollectingPhotos => {
                "Enter: add photo / analyze | Ctrl+A: analyze | Ctrl+S: skip | Del: remove last"
            }
            ListingStep::Analyzing => "Esc: cancel analysis",
            ListingStep::DetailsForm => "↑↓: field | ←→/Space: type, features | Enter: submit",
            ListingStep::Submitted => "Esc: back",
        },
        Screen::Onboarding(_) => "↑↓←→: choose | Space: toggle | Enter: continue | Esc: back",
        Screen::Auth(_) => "Tab: next field | Enter: submit | Ctrl+T: switch | Ctrl+G: guest",
        Screen::NotFound(_) => "Enter: home | Esc: back",
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (text, style) = match state.status_message {
        Some(message) => {
            let (icon, color) = match message.kind {
                MessageKind::Success => ("✓", ACCENT),
                MessageKind::Error => ("✗", ERROR),
                MessageKind::Info => ("•", INFO),
            };
            (
                format!(" {} {} ", icon, single_line(&message.text, 200)),
                Style::default().fg(color).bg(BAR_BG),
            )
        }
        None => (
            format!(" {} | Ctrl+C: quit ", hints(state.screen, state.editing)),
            Style::default().fg(BRIGHT).bg(BAR_BG),
        ),
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
