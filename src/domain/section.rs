// SPDX-License-Identifier: MPL-2.0
//! Page sections and nearest-section math.
//!
//! The page is a fixed sequence of five sections. Navigation, the indicator
//! dots, and the background follower all address sections through this enum
//! rather than raw pixel offsets.

/// Sections of the scrolling page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Work,
    About,
    Services,
    Contact,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Work,
        Section::About,
        Section::Services,
        Section::Contact,
    ];

    /// Stable anchor id, used for i18n keys and layout lookup.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Work => "work",
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    /// The i18n key for the section's navigation label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Section::Hero => "nav-home",
            Section::Work => "nav-work",
            Section::About => "nav-about",
            Section::Services => "nav-services",
            Section::Contact => "nav-contact",
        }
    }

    /// Zero-based position within [`Section::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// Sections shown as navigation links (the hero is reachable via the logo).
    #[must_use]
    pub const fn nav_links() -> [Section; 4] {
        [
            Section::Work,
            Section::About,
            Section::Services,
            Section::Contact,
        ]
    }
}

/// Picks the section whose vertical center is nearest `target_center`.
///
/// `centers` pairs each section with its absolute center offset in page
/// coordinates. Ties resolve to the earlier section, matching display order.
#[must_use]
pub fn nearest_to_center(centers: &[(Section, f32)], target_center: f32) -> Section {
    let mut closest = Section::Hero;
    let mut min_distance = f32::INFINITY;

    for (section, center) in centers {
        let distance = (center - target_center).abs();
        if distance < min_distance {
            min_distance = distance;
            closest = *section;
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sections_have_unique_anchors() {
        let anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        for (i, a) in anchors.iter().enumerate() {
            for b in &anchors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn index_matches_display_order() {
        assert_eq!(Section::Hero.index(), 0);
        assert_eq!(Section::Work.index(), 1);
        assert_eq!(Section::Contact.index(), 4);
    }

    #[test]
    fn nav_links_exclude_hero() {
        assert!(!Section::nav_links().contains(&Section::Hero));
        assert_eq!(Section::nav_links().len(), 4);
    }

    #[test]
    fn nearest_picks_closest_section() {
        let centers = [
            (Section::Hero, 400.0),
            (Section::Work, 1400.0),
            (Section::About, 2400.0),
        ];
        assert_eq!(nearest_to_center(&centers, 350.0), Section::Hero);
        assert_eq!(nearest_to_center(&centers, 1500.0), Section::Work);
        assert_eq!(nearest_to_center(&centers, 2300.0), Section::About);
    }

    #[test]
    fn nearest_tie_resolves_to_earlier_section() {
        let centers = [(Section::Hero, 100.0), (Section::Work, 300.0)];
        assert_eq!(nearest_to_center(&centers, 200.0), Section::Hero);
    }

    #[test]
    fn nearest_on_empty_list_defaults_to_hero() {
        assert_eq!(nearest_to_center(&[], 0.0), Section::Hero);
    }
}
