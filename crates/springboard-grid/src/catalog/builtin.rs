//! Stock home screen catalog

use super::{AppEntry, Catalog, Placement, WidgetEntry, WidgetKind, WidgetSize};

/// (id, name, page, row, col)
const GRID_APPS: &[(&str, &str, usize, u8, u8)] = &[
    // Page 1, below the two widgets
    ("facetime", "FaceTime", 0, 2, 0),
    ("calendar", "Calendar", 0, 2, 1),
    ("photos", "Photos", 0, 2, 2),
    ("camera", "Camera", 0, 2, 3),
    ("mail", "Mail", 0, 3, 0),
    ("notes", "Notes", 0, 3, 1),
    ("reminders", "Reminders", 0, 3, 2),
    ("clock", "Clock", 0, 3, 3),
    ("news", "News", 0, 4, 0),
    ("appletv", "TV", 0, 4, 1),
    ("podcasts", "Podcasts", 0, 4, 2),
    ("appstore", "App Store", 0, 4, 3),
    ("maps", "Maps", 0, 5, 0),
    ("health", "Health", 0, 5, 1),
    ("wallet", "Wallet", 0, 5, 2),
    ("settings", "Settings", 0, 5, 3),
    // Page 2
    ("weather", "Weather", 1, 0, 0),
    ("stocks", "Stocks", 1, 0, 1),
    ("voicememos", "Voice Memos", 1, 0, 2),
    ("safari", "Safari", 1, 0, 3),
    ("reddit", "Reddit", 1, 1, 0),
    ("duolingo", "Duolingo", 1, 1, 1),
    ("shortcuts", "Shortcuts", 1, 1, 2),
    ("files", "Files", 1, 1, 3),
    ("calculator", "Calculator", 1, 2, 0),
    ("spotify", "Spotify", 1, 2, 1),
    ("youtube", "YouTube", 1, 2, 2),
    ("github", "GitHub", 1, 5, 1),
    ("linkedin", "LinkedIn", 1, 5, 2),
    ("x", "X", 1, 5, 3),
];

const DOCK_APPS: &[(&str, &str)] = &[
    ("phone", "Phone"),
    ("safari-dock", "Safari"),
    ("messages", "Messages"),
    ("music", "Music"),
];

/// Apps that open a working implementation
const IMPLEMENTED: &[&str] = &["calculator", "reddit", "spotify", "messages", "youtube"];

/// Apps that open an external link instead
const LINKS: &[(&str, &str)] = &[
    ("github", "https://github.com/PenTest-duck"),
    ("linkedin", "https://linkedin.com/in/chris-yoo"),
    ("x", "https://x.com/pentestduck"),
];

const BADGES: &[(&str, u32)] = &[("mail", 3)];

fn with_metadata(mut app: AppEntry) -> AppEntry {
    app.has_implementation = IMPLEMENTED.contains(&app.id.as_str());
    app.url = LINKS
        .iter()
        .find(|(id, _)| *id == app.id)
        .map(|(_, url)| url.to_string());
    app.badge = BADGES
        .iter()
        .find(|(id, _)| *id == app.id)
        .map(|&(_, count)| count);
    app
}

impl Catalog {
    /// The stock two-page home screen
    ///
    /// Weather and calendar widgets fill the top two rows of the first page,
    /// apps fill the rest; the second page holds the remaining apps. Dock
    /// apps are listed but never placed on the grid.
    pub fn builtin() -> Self {
        let mut apps: Vec<AppEntry> = GRID_APPS
            .iter()
            .map(|&(id, name, ..)| AppEntry::new(id, name))
            .collect();
        apps.extend(DOCK_APPS.iter().map(|&(id, name)| AppEntry::dock(id, name)));
        let apps = apps.into_iter().map(with_metadata).collect();

        let widgets = vec![
            WidgetEntry::new("weather-widget", WidgetKind::Weather, WidgetSize::Medium),
            WidgetEntry::new("calendar-widget", WidgetKind::Calendar, WidgetSize::Medium),
        ];

        let mut placements = vec![
            Placement::widget_at("weather-widget", 0, 0, 0),
            Placement::widget_at("calendar-widget", 0, 0, 2),
        ];
        placements.extend(
            GRID_APPS
                .iter()
                .map(|&(id, _, page, row, col)| Placement::app_at(id, page, row, col)),
        );

        Self {
            pages: 2,
            apps,
            widgets,
            placements,
        }
    }
}
