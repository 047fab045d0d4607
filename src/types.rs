//! Shared content types used by the registry, the interaction model and the
//! renderers.
//!
//! Everything here is read-only data. The registry in [`crate::content`] holds
//! `'static` instances of these types; nothing creates or mutates them at
//! runtime.

use serde::{Deserialize, Serialize};

/// A named target on the page that navigation links scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    Programs,
    Features,
    About,
    Gallery,
    Admissions,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Programs,
        Section::Features,
        Section::About,
        Section::Gallery,
        Section::Admissions,
        Section::Contact,
    ];

    /// Element id of the section, without the leading `#`.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Programs => "programs",
            Section::Features => "features",
            Section::About => "about",
            Section::Gallery => "gallery",
            Section::Admissions => "admissions",
            Section::Contact => "contact",
        }
    }

    /// Fragment used in `href` attributes, e.g. `#programs`.
    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

/// The top-level blocks of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Navbar,
    Hero,
    Programs,
    Features,
    About,
    Gallery,
    Admissions,
    Contact,
    Footer,
}

impl Block {
    /// Fixed vertical order of the composed page.
    pub const PAGE_ORDER: [Block; 9] = [
        Block::Navbar,
        Block::Hero,
        Block::Programs,
        Block::Features,
        Block::About,
        Block::Gallery,
        Block::Admissions,
        Block::Contact,
        Block::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Block::Navbar => "Navbar",
            Block::Hero => "Hero",
            Block::Programs => "Programs",
            Block::Features => "Features",
            Block::About => "About",
            Block::Gallery => "Gallery",
            Block::Admissions => "Admissions",
            Block::Contact => "Contact",
            Block::Footer => "Footer",
        }
    }

    /// The anchor this block carries, if it is a scroll target.
    pub fn section(self) -> Option<Section> {
        match self {
            Block::Hero => Some(Section::Home),
            Block::Programs => Some(Section::Programs),
            Block::Features => Some(Section::Features),
            Block::About => Some(Section::About),
            Block::Gallery => Some(Section::Gallery),
            Block::Admissions => Some(Section::Admissions),
            Block::Contact => Some(Section::Contact),
            Block::Navbar | Block::Footer => None,
        }
    }
}

/// A smooth-scroll instruction produced by navigation affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Scroll the matching section into view.
    Anchor(Section),
    /// Scroll the viewport back to the origin.
    Top,
}

impl ScrollRequest {
    /// Link target for the request; `#` for the top of the page.
    pub fn href(self) -> String {
        match self {
            ScrollRequest::Anchor(section) => section.anchor(),
            ScrollRequest::Top => "#".to_string(),
        }
    }
}

/// Icon references. Rendered as glyphs so the site needs no icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Award,
    Baby,
    BookOpen,
    Clock,
    GraduationCap,
    Heart,
    Mail,
    MapPin,
    Mic,
    Palette,
    PartyPopper,
    Phone,
    Shield,
    Sparkles,
    Star,
    Sun,
    UserCheck,
    Users,
    Zap,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Award => "award",
            Icon::Baby => "baby",
            Icon::BookOpen => "book-open",
            Icon::Clock => "clock",
            Icon::GraduationCap => "graduation-cap",
            Icon::Heart => "heart",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Mic => "mic",
            Icon::Palette => "palette",
            Icon::PartyPopper => "party-popper",
            Icon::Phone => "phone",
            Icon::Shield => "shield",
            Icon::Sparkles => "sparkles",
            Icon::Star => "star",
            Icon::Sun => "sun",
            Icon::UserCheck => "user-check",
            Icon::Users => "users",
            Icon::Zap => "zap",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Award => "🏅",
            Icon::Baby => "👶",
            Icon::BookOpen => "📖",
            Icon::Clock => "🕒",
            Icon::GraduationCap => "🎓",
            Icon::Heart => "❤",
            Icon::Mail => "✉",
            Icon::MapPin => "📍",
            Icon::Mic => "🎤",
            Icon::Palette => "🎨",
            Icon::PartyPopper => "🎉",
            Icon::Phone => "📞",
            Icon::Shield => "🛡",
            Icon::Sparkles => "✨",
            Icon::Star => "⭐",
            Icon::Sun => "☀",
            Icon::UserCheck => "✔",
            Icon::Users => "👥",
            Icon::Zap => "⚡",
        }
    }
}

/// Color theme of a card; maps to `theme-*` CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTheme {
    Pink,
    Yellow,
    Blue,
    Purple,
    Green,
}

impl ColorTheme {
    pub fn css_class(self) -> &'static str {
        match self {
            ColorTheme::Pink => "theme-pink",
            ColorTheme::Yellow => "theme-yellow",
            ColorTheme::Blue => "theme-blue",
            ColorTheme::Purple => "theme-purple",
            ColorTheme::Green => "theme-green",
        }
    }
}

/// The five programs offered. Also the only legal values of the admission
/// form's class field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramId {
    #[serde(rename = "Playgroup")]
    Playgroup,
    #[serde(rename = "Nursery")]
    Nursery,
    #[serde(rename = "Junior KG (LKG)")]
    JuniorKg,
    #[serde(rename = "Senior KG (UKG)")]
    SeniorKg,
    #[serde(rename = "Day Care")]
    DayCare,
}

impl ProgramId {
    pub const ALL: [ProgramId; 5] = [
        ProgramId::Playgroup,
        ProgramId::Nursery,
        ProgramId::JuniorKg,
        ProgramId::SeniorKg,
        ProgramId::DayCare,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ProgramId::Playgroup => "Playgroup",
            ProgramId::Nursery => "Nursery",
            ProgramId::JuniorKg => "Junior KG (LKG)",
            ProgramId::SeniorKg => "Senior KG (UKG)",
            ProgramId::DayCare => "Day Care",
        }
    }

    /// Exact-match lookup by display title.
    pub fn from_title(title: &str) -> Option<ProgramId> {
        ProgramId::ALL.into_iter().find(|p| p.title() == title)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Program {
    pub id: ProgramId,
    pub age: &'static str,
    pub icon: Icon,
    pub theme: ColorTheme,
    pub activities: &'static [&'static str],
    /// Admission eligibility shown in the admissions table.
    pub requirement: &'static str,
}

impl Program {
    pub fn title(&self) -> &'static str {
        self.id.title()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// A card in the about section.
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub theme: ColorTheme,
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TrustBadge {
    pub icon: Icon,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    /// Rendered as a double-size tile on wide screens.
    pub featured: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactInfoItem {
    pub icon: Icon,
    pub title: &'static str,
    /// Newline-separated lines.
    pub content: &'static str,
}

impl ContactInfoItem {
    pub fn lines(&self) -> impl Iterator<Item = &'static str> {
        self.content.lines()
    }
}

/// One row of the admissions eligibility table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityRow {
    pub program: &'static str,
    pub age: &'static str,
    pub requirement: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub section: Section,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct HoursRow {
    pub days: &'static str,
    pub hours: &'static str,
}
