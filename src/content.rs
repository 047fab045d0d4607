//! The Content Registry: every piece of copy shown on the page.
//!
//! Collections are `'static` slices. Lists that the page shows in more than one
//! place have exactly one owner here: the navbar and footer both read
//! [`NAV_LINKS`], and the admissions eligibility table and class dropdown are
//! derived from [`PROGRAMS`].

use crate::types::{
    ColorTheme, ContactInfoItem, EligibilityRow, Feature, GalleryImage, Highlight, HoursRow, Icon,
    NavLink, Program, ProgramId, Section, SocialLink, Stat, TrustBadge,
};
use std::collections::HashSet;
use thiserror::Error;

pub const SCHOOL_NAME: &str = "Little Junior DPS";
pub const TAGLINE: &str = "Pre School / Day Care";
pub const AGE_SPAN: &str = "18 months – 12 years";

/// Primary phone number, as dialled by the hero's call link.
pub const PHONE_TEL: &str = "+919742994750";
pub const PHONE_DISPLAY: &str = "+91 1234 567 890";
pub const EMAIL: &str = "info@littlejuniordps.edu";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", section: Section::Home },
    NavLink { name: "Programs", section: Section::Programs },
    NavLink { name: "Features", section: Section::Features },
    NavLink { name: "About", section: Section::About },
    NavLink { name: "Gallery", section: Section::Gallery },
    NavLink { name: "Admissions", section: Section::Admissions },
    NavLink { name: "Contact", section: Section::Contact },
];

pub const TRUST_BADGES: &[TrustBadge] = &[
    TrustBadge { icon: Icon::Star, text: "Expert Faculty" },
    TrustBadge { icon: Icon::Heart, text: "Safe Environment" },
    TrustBadge { icon: Icon::Sparkles, text: "Holistic Growth" },
];

pub const PROGRAMS: &[Program] = &[
    Program {
        id: ProgramId::Playgroup,
        age: "2–3 years",
        icon: Icon::Baby,
        theme: ColorTheme::Pink,
        activities: &[
            "Sensory play & exploration",
            "Basic motor skills development",
            "Introduction to colors & shapes",
            "Music & movement activities",
            "Social interaction skills",
        ],
        requirement: "Child should be 2 years by March 31st",
    },
    Program {
        id: ProgramId::Nursery,
        age: "3–4 years",
        icon: Icon::Sun,
        theme: ColorTheme::Yellow,
        activities: &[
            "Pre-reading & phonics awareness",
            "Number recognition (1-20)",
            "Art & craft projects",
            "Storytelling sessions",
            "Outdoor play & games",
        ],
        requirement: "Child should be 3 years by March 31st",
    },
    Program {
        id: ProgramId::JuniorKg,
        age: "4–5 years",
        icon: Icon::BookOpen,
        theme: ColorTheme::Blue,
        activities: &[
            "Reading & writing basics",
            "Simple math concepts",
            "Environmental awareness",
            "Creative expression",
            "Physical education",
        ],
        requirement: "Child should be 4 years by March 31st",
    },
    Program {
        id: ProgramId::SeniorKg,
        age: "5–6 years",
        icon: Icon::GraduationCap,
        theme: ColorTheme::Purple,
        activities: &[
            "Advanced literacy skills",
            "Math operations basics",
            "Science exploration",
            "School readiness program",
            "Leadership activities",
        ],
        requirement: "Child should be 5 years by March 31st",
    },
    Program {
        id: ProgramId::DayCare,
        age: "18 months – 12 years",
        icon: Icon::Clock,
        theme: ColorTheme::Green,
        activities: &[
            "Extended care hours",
            "Homework assistance",
            "Nutritious meals & snacks",
            "Supervised play time",
            "Rest & relaxation areas",
        ],
        requirement: "Age appropriate enrollment",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Shield,
        title: "CCTV Surveillance",
        description: "24/7 monitoring for complete safety",
    },
    Feature {
        icon: Icon::Users,
        title: "Low Student–Teacher Ratio",
        description: "Personalized attention for every child",
    },
    Feature {
        icon: Icon::Palette,
        title: "Co-curricular Activities",
        description: "Art, music, dance & more",
    },
    Feature {
        icon: Icon::Zap,
        title: "Power Backup",
        description: "Uninterrupted learning environment",
    },
    Feature {
        icon: Icon::UserCheck,
        title: "Expert Staff",
        description: "Trained & certified educators",
    },
    Feature {
        icon: Icon::Heart,
        title: "Safe Environment",
        description: "Child-friendly infrastructure",
    },
    Feature {
        icon: Icon::PartyPopper,
        title: "Celebrations & Events",
        description: "Fun festivals & special days",
    },
    Feature {
        icon: Icon::Mic,
        title: "Stage Exposure",
        description: "Build confidence through performances",
    },
    Feature {
        icon: Icon::Star,
        title: "Personality Development",
        description: "Holistic growth programs",
    },
];

/// Banner under the feature grid.
pub const COMMUNICATION_HIGHLIGHT: Feature = Feature {
    icon: Icon::Mic,
    title: "Communication Skills Development",
    description: "We focus on building strong communication skills through interactive sessions, \
                  group discussions, and public speaking opportunities.",
};

/// About-section body, rendered as Markdown.
pub const ABOUT_MARKDOWN: &str = "\
At **Little Junior DPS**, we believe that every child is unique and deserves an education \
that nurtures their individual talents and abilities.

Our philosophy centers on creating joyful learning experiences that spark curiosity and \
foster a lifelong love of learning. We blend traditional values with modern teaching \
methodologies to prepare children for future success.

With over a decade of experience in early childhood education, our dedicated team of \
educators is committed to providing the highest quality care and education for your \
little ones.
";

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Icon::Heart,
        title: "Safe & Caring",
        description: "A warm, nurturing environment where every child feels secure, valued, and loved.",
        theme: ColorTheme::Pink,
    },
    Highlight {
        icon: Icon::Award,
        title: "Experienced Teachers",
        description: "Our certified educators bring passion and expertise to guide your child's learning journey.",
        theme: ColorTheme::Blue,
    },
    Highlight {
        icon: Icon::Sparkles,
        title: "Holistic Development",
        description: "We nurture cognitive, emotional, social, and physical growth through play-based learning.",
        theme: ColorTheme::Purple,
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "10+", label: "Years Experience" },
    Stat { value: "500+", label: "Happy Students" },
    Stat { value: "50+", label: "Expert Faculty" },
];

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        id: 1,
        src: "https://images.unsplash.com/photo-1587654780291-39c9404d746b?w=600&h=400&fit=crop",
        alt: "Children playing in classroom",
        featured: true,
    },
    GalleryImage {
        id: 2,
        src: "https://images.unsplash.com/photo-1503454537195-1dcabb73ffb9?w=600&h=400&fit=crop",
        alt: "Creative art activities",
        featured: false,
    },
    GalleryImage {
        id: 3,
        src: "https://images.unsplash.com/photo-1544776193-352d25ca82cd?w=600&h=400&fit=crop",
        alt: "Outdoor playground",
        featured: false,
    },
    GalleryImage {
        id: 4,
        src: "https://images.unsplash.com/photo-1544776194-398b41e4651f?w=600&h=400&fit=crop",
        alt: "Reading time",
        featured: false,
    },
    GalleryImage {
        id: 5,
        src: "https://images.unsplash.com/photo-1560541919-eb5c2da6a5a3?w=600&h=400&fit=crop",
        alt: "Music and dance",
        featured: false,
    },
    GalleryImage {
        id: 6,
        src: "https://images.unsplash.com/photo-1559181567-c3190ca9959b?w=600&h=400&fit=crop",
        alt: "Annual day celebration",
        featured: true,
    },
    GalleryImage {
        id: 7,
        src: "https://images.unsplash.com/photo-1607453998774-d533f65dac99?w=600&h=400&fit=crop",
        alt: "Science activities",
        featured: false,
    },
    GalleryImage {
        id: 8,
        src: "https://images.unsplash.com/photo-1509062522246-3755977927d7?w=600&h=400&fit=crop",
        alt: "Group learning",
        featured: false,
    },
];

pub const CONTACT_INFO: &[ContactInfoItem] = &[
    ContactInfoItem {
        icon: Icon::MapPin,
        title: "Address",
        content: "123, Education Lane, Knowledge Park\nSector 15, Noida - 201301\nUttar Pradesh, India",
    },
    ContactInfoItem {
        icon: Icon::Phone,
        title: "Phone",
        content: "+91 1234 567 890\n+91 9876 543 210",
    },
    ContactInfoItem {
        icon: Icon::Mail,
        title: "Email",
        content: "info@littlejuniordps.edu\nadmissions@littlejuniordps.edu",
    },
    ContactInfoItem {
        icon: Icon::Clock,
        title: "Timings",
        content: "Mon – Fri: 8:00 AM – 5:00 PM\nSat: 9:00 AM – 1:00 PM",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", href: "#" },
    SocialLink { label: "Instagram", href: "#" },
    SocialLink { label: "Twitter", href: "#" },
    SocialLink { label: "Youtube", href: "#" },
];

pub const SCHOOL_HOURS: &[HoursRow] = &[
    HoursRow { days: "Monday - Friday", hours: "8:00 AM - 5:00 PM" },
    HoursRow { days: "Saturday", hours: "9:00 AM - 1:00 PM" },
    HoursRow { days: "Sunday", hours: "Closed" },
];

pub const PARENT_RATING: &str = "4.9/5 Rating";

/// Admissions eligibility table, one row per program in registry order.
pub fn eligibility() -> Vec<EligibilityRow> {
    PROGRAMS
        .iter()
        .map(|p| EligibilityRow {
            program: p.title(),
            age: p.age,
            requirement: p.requirement,
        })
        .collect()
}

/// Options of the admission form's class dropdown, in registry order.
pub fn class_options() -> impl Iterator<Item = ProgramId> {
    PROGRAMS.iter().map(|p| p.id)
}

pub fn gallery_image(id: u32) -> Option<&'static GalleryImage> {
    GALLERY.iter().find(|img| img.id == id)
}

// =============================================================================
// Registry checks
// =============================================================================

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("program {0} is listed more than once")]
    DuplicateProgram(&'static str),
    #[error("program {0} is missing from the registry")]
    MissingProgram(&'static str),
    #[error("gallery image id {0} is used more than once")]
    DuplicateImage(u32),
    #[error("section #{0} has no navigation link")]
    UnlinkedSection(&'static str),
    #[error("navigation link {0} appears more than once")]
    DuplicateNavLink(&'static str),
}

/// Check the cross-collection invariants the renderers rely on.
pub fn validate() -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for program in PROGRAMS {
        if !seen.insert(program.id) {
            return Err(ContentError::DuplicateProgram(program.title()));
        }
    }
    if let Some(missing) = ProgramId::ALL.into_iter().find(|id| !seen.contains(id)) {
        return Err(ContentError::MissingProgram(missing.title()));
    }

    let mut ids = HashSet::new();
    for image in GALLERY {
        if !ids.insert(image.id) {
            return Err(ContentError::DuplicateImage(image.id));
        }
    }

    let mut linked = HashSet::new();
    for link in NAV_LINKS {
        if !linked.insert(link.section) {
            return Err(ContentError::DuplicateNavLink(link.name));
        }
    }
    if let Some(section) = Section::ALL.into_iter().find(|s| !linked.contains(s)) {
        return Err(ContentError::UnlinkedSection(section.id()));
    }
    Ok(())
}
