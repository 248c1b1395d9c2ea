use leptos::prelude::*;

/// Stroke paths of the outline icons used across the dashboard.
fn icon_paths(name: &str) -> Option<&'static [&'static str]> {
    let paths: &'static [&'static str] = match name {
        "layout-dashboard" => &[
            "M3 3h7v9H3z",
            "M14 3h7v5h-7z",
            "M14 12h7v9h-7z",
            "M3 16h7v5H3z",
        ],
        "users" => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "user" => &[
            "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
            "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
        ],
        "building" => &[
            "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18z",
            "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
            "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
            "M10 6h4",
            "M10 10h4",
            "M10 14h4",
            "M10 18h4",
        ],
        "gift" => &[
            "M3 8h18v4H3z",
            "M12 8v13",
            "M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7",
            "M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5a2.5 2.5 0 0 1 0 5",
        ],
        "rss" => &[
            "M4 11a9 9 0 0 1 9 9",
            "M4 4a16 16 0 0 1 16 16",
            "M5 18a1 1 0 1 0 0 2a1 1 0 1 0 0-2z",
        ],
        "megaphone" => &["M3 11l18-5v12L3 14v-3z", "M11.6 16.8a3 3 0 1 1-5.8-1.6"],
        "bar-chart" => &["M12 20V10", "M18 20V4", "M6 20v-4"],
        "ticket" => &[
            "M2 9a3 3 0 0 1 0 6v2a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-2a3 3 0 0 1 0-6V7a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2z",
            "M13 5v2",
            "M13 17v2",
            "M13 11v2",
        ],
        "trending-up" => &["M22 7l-8.5 8.5-5-5L2 17", "M16 7h6v6"],
        "search" => &["M11 3a8 8 0 1 0 0 16a8 8 0 1 0 0-16z", "M21 21l-4.3-4.3"],
        "filter" => &["M22 3H2l8 9.46V19l4 2v-8.54z"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "x" => &["M18 6L6 18", "M6 6l12 12"],
        "check" => &["M20 6L9 17l-5-5"],
        "copy" => &[
            "M8 8h14v14H8z",
            "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2",
        ],
        "bell" => &[
            "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
            "M10.3 21a1.94 1.94 0 0 0 3.4 0",
        ],
        "log-out" => &[
            "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
            "M16 17l5-5-5-5",
            "M21 12H9",
        ],
        "menu" => &["M4 6h16", "M4 12h16", "M4 18h16"],
        "moon" => &["M12 3a6 6 0 0 0 9 9a9 9 0 1 1-9-9z"],
        "sun" => &[
            "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M12 2v2",
            "M12 20v2",
            "M4.93 4.93l1.41 1.41",
            "M17.66 17.66l1.41 1.41",
            "M2 12h2",
            "M20 12h2",
            "M6.34 17.66l-1.41 1.41",
            "M19.07 4.93l-1.41 1.41",
        ],
        "map-pin" => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
            "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
        ],
        "phone" => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        "mail" => &["M2 4h20v16H2z", "M22 7l-10 6L2 7"],
        "calendar" => &["M3 4h18v18H3z", "M16 2v4", "M8 2v4", "M3 10h18"],
        "clock" => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 6v6l4 2"],
        "star" => &["M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"],
        "upload" => &[
            "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
            "M17 8l-5-5-5 5",
            "M12 3v12",
        ],
        "image" => &[
            "M3 3h18v18H3z",
            "M9 7a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
            "M21 15l-3.1-3.1a2 2 0 0 0-2.8 0L6 21",
        ],
        "eye" => &[
            "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z",
            "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
        ],
        "eye-off" => &[
            "M9.88 9.88a3 3 0 1 0 4.24 4.24",
            "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68",
            "M6.61 6.61A13.53 13.53 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61",
            "M2 2l20 20",
        ],
        "edit" => &[
            "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
            "M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z",
        ],
        "trash" => &[
            "M3 6h18",
            "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6",
            "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2",
        ],
        "user-check" => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M16 11l2 2 4-4",
        ],
        "user-x" => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M17 8l5 5",
            "M22 8l-5 5",
        ],
        "send" => &["M22 2L11 13", "M22 2l-7 20-4-9-9-4z"],
        "shuffle" => &[
            "M16 3h5v5",
            "M4 20L21 3",
            "M21 16v5h-5",
            "M15 15l6 6",
            "M4 4l5 5",
        ],
        "lock" => &["M3 11h18v11H3z", "M7 11V7a5 5 0 0 1 10 0v4"],
        _ => return None,
    };
    Some(paths)
}

pub fn icon(name: &str) -> AnyView {
    let paths = icon_paths(name).unwrap_or(&["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z"]);
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::navigation::Section;

    #[test]
    fn every_section_has_an_icon() {
        for section in Section::all() {
            assert!(icon_paths(section.icon()).is_some(), "{}", section.icon());
        }
    }

    #[test]
    fn unknown_name_has_no_paths() {
        assert!(icon_paths("spaceship").is_none());
    }
}
