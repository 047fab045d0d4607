//! Section renderers.
//!
//! Each block of the page is a function from the current [`PageState`] to
//! maud [`Markup`]. Interactive controls carry `data-*` hooks that the inline
//! page script binds to; every control also works as plain HTML (anchors,
//! native form constraints) before the script runs.

use crate::config::SiteConfig;
use crate::content;
use crate::forms::{
    AdmissionFields, AdmissionView, ContactFields, FieldSpec, FormFields, FormKind, FormState,
    InputKind, Pattern,
};
use crate::lightbox::Lightbox;
use crate::navbar::motion_labels_for;
use crate::page::{self, PageState};
use crate::types::{Block, Icon, ProgramId, Section};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Render one top-level block of the page.
pub fn render_block(block: Block, state: &PageState, config: &SiteConfig) -> Markup {
    match block {
        Block::Navbar => navbar(state),
        Block::Hero => hero(state, config),
        Block::Programs => programs(state),
        Block::Features => features(state),
        Block::About => about(state),
        Block::Gallery => gallery(state),
        Block::Admissions => admissions(state),
        Block::Contact => contact(state, config),
        Block::Footer => footer(state),
    }
}

// ============================================================================
// Shared pieces
// ============================================================================

fn icon(icon: Icon) -> Markup {
    html! {
        span.icon data-icon=(icon.name()) aria-hidden="true" { (icon.glyph()) }
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// `<section>` wrapper carrying the anchor id and the entrance-animation hook.
fn section_shell(state: &PageState, section: Section, class: &str, body: Markup) -> Markup {
    let mut classes = format!("page-section reveal {class}");
    if state.visibility.has_entered(section) {
        classes.push_str(" in-view");
    }
    html! {
        section id=(section.id()) class=(classes) data-reveal=(section.id()) {
            (body)
        }
    }
}

fn section_header(badge: &str, title: Markup, lead: &str) -> Markup {
    html! {
        header.section-header {
            span.badge { (badge) }
            h2.heading-section { (title) }
            p.text-body { (lead) }
        }
    }
}

fn brand() -> Markup {
    html! {
        a.brand href=(Section::Home.anchor()) data-scroll=(Section::Home.anchor()) {
            span.brand-mark aria-hidden="true" { "LJ" }
            span.brand-text {
                span.brand-name { (content::SCHOOL_NAME) }
                span.brand-tagline { (content::TAGLINE) }
            }
        }
    }
}

// ============================================================================
// Navbar
// ============================================================================

pub fn navbar(state: &PageState) -> Markup {
    let nav = &state.navbar;
    let open = nav.is_menu_open();
    let reduce = nav.reduce_motion();
    let (desktop_label, mobile_label) = nav.motion_labels();
    let (desktop_full, mobile_full) = motion_labels_for(false);
    let (desktop_reduced, mobile_reduced) = motion_labels_for(true);
    let admissions = Section::Admissions.anchor();

    html! {
        nav.navbar.scrolled[nav.is_scrolled()] id="navbar" {
            div.container.navbar-inner {
                (brand())
                ul.nav-links {
                    @for link in content::NAV_LINKS {
                        li {
                            a.nav-link href=(link.section.anchor()) data-scroll=(link.section.anchor()) {
                                (link.name)
                            }
                        }
                    }
                }
                div.nav-actions {
                    button.motion-toggle.active[reduce] type="button" data-motion-toggle
                        data-label-full=(desktop_full) data-label-reduced=(desktop_reduced)
                        aria-pressed=(bool_attr(reduce)) title="Toggle reduced motion" {
                        (desktop_label)
                    }
                    a.btn.btn-primary.pulse href=(admissions) data-scroll=(admissions) {
                        "Admissions Open"
                    }
                }
                button.menu-toggle type="button" data-menu-toggle aria-controls="mobile-menu"
                    aria-expanded=(bool_attr(open)) aria-label="Toggle menu" {
                    @if open { "✕" } @else { "☰" }
                }
            }
            div.mobile-menu id="mobile-menu" hidden[!open] {
                ul {
                    @for link in content::NAV_LINKS {
                        li {
                            a.nav-link href=(link.section.anchor()) data-scroll=(link.section.anchor()) {
                                (link.name)
                            }
                        }
                    }
                }
                button.motion-toggle.active[reduce] type="button" data-motion-toggle
                    data-label-full=(mobile_full) data-label-reduced=(mobile_reduced)
                    aria-pressed=(bool_attr(reduce)) {
                    (mobile_label)
                }
                a.btn.btn-primary href=(admissions) data-scroll=(admissions) {
                    "Admissions Open"
                }
            }
        }
    }
}

// ============================================================================
// Hero
// ============================================================================

pub fn hero(state: &PageState, config: &SiteConfig) -> Markup {
    let enquire = page::enquire_now().href();
    let stat = content::STATS.iter().find(|s| s.label == "Happy Students");

    section_shell(
        state,
        Section::Home,
        "hero",
        html! {
            div.container.hero-grid {
                div.hero-copy {
                    span.badge.badge-secondary {
                        (icon(Icon::Sparkles))
                        span { (content::TAGLINE.to_uppercase()) }
                    }
                    h1.heading-hero {
                        span { "Little Junior" }
                        br;
                        span.text-gradient { "DPS" }
                    }
                    p.hero-lead {
                        "Creative learning for children aged "
                        strong { (content::AGE_SPAN) }
                        ". Where every child discovers the joy of learning in a safe, nurturing environment."
                    }
                    ul.trust-badges {
                        @for badge in content::TRUST_BADGES {
                            li.trust-badge {
                                (icon(badge.icon))
                                span { (badge.text) }
                            }
                        }
                    }
                    div.hero-ctas {
                        a.btn.btn-primary href=(enquire) data-scroll=(enquire) {
                            "Enquire Now " span aria-hidden="true" { "→" }
                        }
                        a.btn.btn-outline href=(page::call_href()) {
                            (icon(Icon::Phone)) " Call Us"
                        }
                    }
                }
                div.hero-media {
                    img src=(config.site.hero_image)
                        alt="Happy children learning at Little Junior DPS" loading="eager";
                    @if let Some(stat) = stat {
                        div.stat-card {
                            span.stat-value { (stat.value) }
                            span.stat-label { (stat.label) }
                        }
                    }
                }
            }
        },
    )
}

// ============================================================================
// Programs
// ============================================================================

pub fn programs(state: &PageState) -> Markup {
    section_shell(
        state,
        Section::Programs,
        "programs",
        html! {
            div.container {
                (section_header(
                    "Our Programs",
                    html! { "Nurturing " span.text-gradient { "Young Minds" } },
                    "Age-appropriate programs designed to foster curiosity, creativity, and \
                     confidence in every child through play-based learning.",
                ))
                div.card-grid.programs-grid {
                    @for program in content::PROGRAMS {
                        article class={ "card program-card " (program.theme.css_class()) } {
                            div.card-icon { (icon(program.icon)) }
                            h3.heading-card { (program.title()) }
                            p.program-age { (program.age) }
                            ul.activity-list {
                                @for activity in program.activities {
                                    li { (activity) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

// ============================================================================
// Features
// ============================================================================

pub fn features(state: &PageState) -> Markup {
    let banner = &content::COMMUNICATION_HIGHLIGHT;
    section_shell(
        state,
        Section::Features,
        "features",
        html! {
            div.container {
                (section_header(
                    "Why Choose Us",
                    html! { "What Makes Us " span.text-gradient.warm { "Special" } },
                    "We provide a nurturing environment where children thrive through expert \
                     care, modern facilities, and engaging activities.",
                ))
                div.board {
                    h3.board-title { "Our Highlights" }
                    div.feature-grid {
                        @for feature in content::FEATURES {
                            div.feature-card {
                                div.card-icon { (icon(feature.icon)) }
                                div {
                                    h4 { (feature.title) }
                                    p { (feature.description) }
                                }
                            }
                        }
                    }
                }
                div.feature-banner {
                    div.card-icon { (icon(banner.icon)) }
                    div {
                        h3 { (banner.title) }
                        p { (banner.description) }
                    }
                }
            }
        },
    )
}

// ============================================================================
// About
// ============================================================================

fn about_body() -> Markup {
    let mut body = String::new();
    md_html::push_html(&mut body, Parser::new(content::ABOUT_MARKDOWN));
    PreEscaped(body)
}

pub fn about(state: &PageState) -> Markup {
    section_shell(
        state,
        Section::About,
        "about",
        html! {
            div.container.about-grid {
                div.about-copy {
                    span.badge { "About Us" }
                    h2.heading-section {
                        "Building " span.text-gradient { "Strong Foundations" }
                    }
                    div.about-body { (about_body()) }
                    dl.stats {
                        @for stat in content::STATS {
                            div.stat {
                                dt { (stat.value) }
                                dd { (stat.label) }
                            }
                        }
                    }
                }
                div.highlights {
                    @for highlight in content::HIGHLIGHTS {
                        div class={ "card highlight-card " (highlight.theme.css_class()) } {
                            div.card-icon { (icon(highlight.icon)) }
                            div {
                                h3.heading-card { (highlight.title) }
                                p { (highlight.description) }
                            }
                        }
                    }
                }
            }
        },
    )
}

// ============================================================================
// Gallery and lightbox
// ============================================================================

pub fn gallery(state: &PageState) -> Markup {
    section_shell(
        state,
        Section::Gallery,
        "gallery",
        html! {
            div.container {
                (section_header(
                    "Gallery",
                    html! { span.text-gradient { "Precious Moments" } " at School" },
                    "Glimpses of joy, learning, and growth from our vibrant campus life.",
                ))
                div.gallery-grid {
                    @for image in content::GALLERY {
                        button.gallery-tile.featured[image.featured] type="button"
                            data-lightbox-open=(image.id) data-src=(image.src) data-alt=(image.alt) {
                            img src=(image.src) alt=(image.alt) loading="lazy";
                            span.tile-overlay {
                                span.tile-zoom aria-hidden="true" { "🔍" }
                                span.tile-caption { (image.alt) }
                            }
                        }
                    }
                }
            }
            (lightbox(&state.lightbox))
        },
    )
}

/// Overlay showing the selected image. Always present in the document, hidden
/// while closed.
pub fn lightbox(lightbox: &Lightbox) -> Markup {
    let image = match lightbox {
        Lightbox::Open(image) => Some(*image),
        Lightbox::Closed => None,
    };
    html! {
        div.lightbox id="lightbox" role="dialog" aria-modal="true" aria-label="Gallery image"
            data-lightbox hidden[image.is_none()] {
            button.lightbox-close type="button" aria-label="Close" data-lightbox-close { "✕" }
            figure.lightbox-frame {
                img id="lightbox-image" src=[image.map(|i| i.src)] alt=[image.map(|i| i.alt)];
                figcaption id="lightbox-caption" {
                    @if let Some(image) = image { (image.alt) }
                }
            }
        }
    }
}

// ============================================================================
// Forms
// ============================================================================

fn control_id(kind: FormKind, name: &str) -> String {
    format!("{}-{}", kind.dom_id(), name)
}

/// `<form>` element with the copy the page script needs to settle a submission.
fn lead_form(kind: FormKind, submitting: bool, controls: Markup) -> Markup {
    let success = kind.success_toast();
    let failure = kind.failure_toast();
    html! {
        form.lead-form id=(kind.dom_id()) data-form=(kind.dom_id()) aria-busy=(bool_attr(submitting))
            data-success-title=(success.title) data-success-description=(success.description)
            data-failure-title=(failure.title) data-failure-description=(failure.description) {
            div.form-grid { (controls) }
            (submit_button(kind, submitting))
        }
    }
}

fn submit_button(kind: FormKind, submitting: bool) -> Markup {
    html! {
        button.btn.btn-primary.btn-submit type="submit" disabled[submitting]
            data-label-idle=(kind.submit_label()) data-label-pending=(kind.pending_label()) {
            @if submitting {
                span.spinner aria-hidden="true" {}
                (kind.pending_label())
            } @else {
                (kind.submit_label())
            }
        }
    }
}

/// A text, tel, email, or textarea control with its native constraints.
fn input_field<F: FormFields>(fields: &F, spec: &FieldSpec) -> Markup {
    let id = control_id(F::KIND, spec.name);
    let value = fields.value(spec.name).unwrap_or_default();
    let rows = match spec.kind {
        InputKind::TextArea { rows } => Some(rows),
        _ => None,
    };
    html! {
        div.field.field-wide[rows.is_some()] {
            label.field-label for=(id) { (spec.display_label()) }
            @if let Some(rows) = rows {
                textarea.input id=(id) name=(spec.name) rows=(rows) maxlength=[spec.max_len]
                    placeholder=(spec.placeholder) required[spec.required] { (value) }
            } @else {
                input.input id=(id) name=(spec.name) type=[spec.kind.input_type()] value=(value)
                    maxlength=[spec.max_len] pattern=[spec.pattern.map(Pattern::html)]
                    placeholder=(spec.placeholder) required[spec.required];
            }
        }
    }
}

/// The custom single-select for the class field.
///
/// The selected title lives in a visually hidden text input so the browser's
/// `required` check covers it.
fn class_dropdown(view: &AdmissionView, spec: &FieldSpec) -> Markup {
    let id = control_id(FormKind::Admission, spec.name);
    let selected = view.form.fields.class_applying;
    let open = view.dropdown_open;
    html! {
        div.field.field-wide {
            label.field-label for=(id) { (spec.display_label()) }
            div.dropdown.open[open] data-dropdown {
                input.choice-input id=(id) type="text" name=(spec.name)
                    value=(selected.map(ProgramId::title).unwrap_or_default())
                    required[spec.required] tabindex="-1" aria-hidden="true";
                button.input.dropdown-trigger type="button" data-dropdown-toggle
                    data-placeholder=(spec.placeholder) aria-haspopup="listbox"
                    aria-expanded=(bool_attr(open)) {
                    @if let Some(class) = selected {
                        span.dropdown-current { (class.title()) }
                    } @else {
                        span.dropdown-current.placeholder { (spec.placeholder) }
                    }
                    span.chevron aria-hidden="true" { "▾" }
                }
                ul.dropdown-menu role="listbox" hidden[!open] {
                    @for option in content::class_options() {
                        @let is_selected = selected == Some(option);
                        li {
                            button.dropdown-option.selected[is_selected] type="button" role="option"
                                aria-selected=(bool_attr(is_selected)) data-value=(option.title()) {
                                (option.title())
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn admission_form(view: &AdmissionView) -> Markup {
    let controls = html! {
        @for spec in AdmissionFields::specs() {
            @if spec.kind == InputKind::Choice {
                (class_dropdown(view, spec))
            } @else {
                (input_field(&view.form.fields, spec))
            }
        }
    };
    lead_form(FormKind::Admission, view.form.submitting, controls)
}

pub fn contact_form(state: &FormState<ContactFields>) -> Markup {
    let controls = html! {
        @for spec in ContactFields::specs() {
            (input_field(&state.fields, spec))
        }
    };
    lead_form(FormKind::Contact, state.submitting, controls)
}

// ============================================================================
// Admissions
// ============================================================================

pub fn admissions(state: &PageState) -> Markup {
    section_shell(
        state,
        Section::Admissions,
        "admissions",
        html! {
            div.container {
                header.section-header {
                    span.badge.badge-glow { "🎉 Admissions Open " (state.admission_session()) }
                    h2.heading-section {
                        "Begin Your Child's " span.text-gradient { "Journey" }
                    }
                    p.text-body {
                        "Take the first step towards a bright future. Fill out the form below \
                         and our team will get in touch with you."
                    }
                }
                div.admissions-grid {
                    div.eligibility {
                        h3.heading-card { "✔ Eligibility Criteria" }
                        table.eligibility-table {
                            thead {
                                tr {
                                    th { "Program" }
                                    th { "Age" }
                                    th { "Requirement" }
                                }
                            }
                            tbody {
                                @for row in content::eligibility() {
                                    tr {
                                        td { (row.program) }
                                        td { (row.age) }
                                        td { (row.requirement) }
                                    }
                                }
                            }
                        }
                    }
                    div.card.form-card {
                        h3.heading-card { "Admission Enquiry Form" }
                        (admission_form(&state.admission))
                    }
                }
            }
        },
    )
}

// ============================================================================
// Contact
// ============================================================================

pub fn contact(state: &PageState, config: &SiteConfig) -> Markup {
    section_shell(
        state,
        Section::Contact,
        "contact",
        html! {
            div.container {
                (section_header(
                    "Contact Us",
                    html! { "Get In " span.text-gradient { "Touch" } },
                    "Have questions? We'd love to hear from you. Reach out to us and we'll \
                     respond as soon as we can.",
                ))
                div.contact-grid {
                    div.contact-info {
                        div.info-cards {
                            @for item in content::CONTACT_INFO {
                                div.card.info-card {
                                    div.card-icon { (icon(item.icon)) }
                                    div {
                                        h4 { (item.title) }
                                        @for line in item.lines() {
                                            p { (line) }
                                        }
                                    }
                                }
                            }
                        }
                        div.map {
                            iframe src=(config.site.map_embed_url) title="Little Junior DPS location"
                                loading="lazy" referrerpolicy="no-referrer-when-downgrade"
                                allowfullscreen {}
                        }
                    }
                    div.card.form-card {
                        h3.heading-card { "Send us a Message" }
                        p.form-lead { "Fill out the form below and we'll get back to you shortly." }
                        (contact_form(&state.contact))
                    }
                }
            }
        },
    )
}

// ============================================================================
// Footer
// ============================================================================

pub fn footer(state: &PageState) -> Markup {
    let address = content::CONTACT_INFO.iter().find(|item| item.icon == Icon::MapPin);
    html! {
        footer.site-footer {
            div.container.footer-grid {
                div.footer-brand {
                    (brand())
                    p {
                        "Nurturing young minds with love, care, and quality education. \
                         Building strong foundations for a bright future."
                    }
                    ul.social-links {
                        @for social in content::SOCIAL_LINKS {
                            li {
                                a.social-link href=(social.href) aria-label=(social.label) {
                                    (social.label)
                                }
                            }
                        }
                    }
                }
                nav.footer-links aria-label="Quick links" {
                    h4 { "Quick Links" }
                    ul {
                        @for link in content::NAV_LINKS {
                            li {
                                a href=(link.section.anchor()) data-scroll=(link.section.anchor()) {
                                    (link.name)
                                }
                            }
                        }
                    }
                }
                div.footer-contact {
                    h4 { "Contact Info" }
                    ul {
                        @if let Some(address) = address {
                            li {
                                (icon(Icon::MapPin))
                                span {
                                    @for line in address.lines().take(2) {
                                        (line) br;
                                    }
                                }
                            }
                        }
                        li {
                            (icon(Icon::Phone))
                            a href=(page::call_href()) { (content::PHONE_DISPLAY) }
                        }
                        li {
                            (icon(Icon::Mail))
                            a href={ "mailto:" (content::EMAIL) } { (content::EMAIL) }
                        }
                    }
                }
                div.footer-hours {
                    h4 { "School Hours" }
                    ul {
                        @for row in content::SCHOOL_HOURS {
                            li {
                                span { (row.days) }
                                span.hours.closed[row.hours == "Closed"] { (row.hours) }
                            }
                        }
                    }
                    div.rating {
                        p { "Trusted by Parents" }
                        p.stars aria-hidden="true" { "★★★★★" }
                        p { (content::PARENT_RATING) }
                    }
                }
            }
            div.container.footer-bottom {
                p { "© " (state.year) " " (content::SCHOOL_NAME) ". All rights reserved." }
                nav.legal {
                    a href="#" { "Privacy Policy" }
                    a href="#" { "Terms of Service" }
                }
            }
            button.scroll-top type="button" data-scroll-top=(page::scroll_to_top().href())
                aria-label="Scroll to top" { "↑" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PageState {
        PageState::for_year(&SiteConfig::default(), 2026)
    }

    #[test]
    fn icon_renders_glyph_hidden_from_screen_readers() {
        let html = icon(Icon::Heart).into_string();
        assert!(html.contains(r#"data-icon="heart""#));
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn sections_carry_anchor_ids() {
        let state = state();
        let config = SiteConfig::default();
        for block in Block::PAGE_ORDER {
            let html = render_block(block, &state, &config).into_string();
            if let Some(section) = block.section() {
                assert!(
                    html.contains(&format!(r#"id="{}""#, section.id())),
                    "{} is missing its anchor",
                    block.name()
                );
            }
        }
    }

    #[test]
    fn entered_sections_get_in_view_class() {
        let state = state();
        assert!(!programs(&state).into_string().contains("in-view"));
        state.visibility.report(Section::Programs, true);
        assert!(programs(&state).into_string().contains("reveal programs in-view"));
        assert!(!features(&state).into_string().contains("in-view"));
    }

    #[test]
    fn navbar_lists_every_link() {
        let html = navbar(&state()).into_string();
        for link in content::NAV_LINKS {
            assert!(html.contains(&format!(r##"href="{}""##, link.section.anchor())));
        }
        assert!(html.contains("Admissions Open"));
    }

    #[test]
    fn navbar_reflects_scroll_and_menu() {
        let mut state = state();
        let html = navbar(&state).into_string();
        assert!(!html.contains("navbar scrolled"));
        assert!(html.contains(r#"id="mobile-menu" hidden"#));

        state.navbar.on_scroll(21.0);
        state.navbar.toggle_menu();
        let html = navbar(&state).into_string();
        assert!(html.contains("navbar scrolled"));
        assert!(!html.contains(r#"id="mobile-menu" hidden"#));
        assert!(html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn motion_toggle_labels_follow_state() {
        let mut state = state();
        let html = navbar(&state).into_string();
        assert!(html.contains("⚡ Motion On</button>"));
        assert!(html.contains(r#"data-label-reduced="✓ Motion Off""#));
        state.navbar.toggle_reduce_motion(&mut state.root);
        let html = navbar(&state).into_string();
        assert!(html.contains("✓ Motion Off</button>"));
        assert!(html.contains("✓ Reduced Motion</button>"));
        assert!(html.contains(r#"aria-pressed="true""#));
    }

    #[test]
    fn hero_links_call_and_enquire() {
        let html = hero(&state(), &SiteConfig::default()).into_string();
        assert!(html.contains(r#"href="tel:+919742994750""#));
        assert!(html.contains(r##"data-scroll="#admissions""##));
        assert!(html.contains("18 months – 12 years"));
        assert!(html.contains("assets/hero-children.png"));
    }

    #[test]
    fn programs_render_five_cards_with_themes() {
        let html = programs(&state()).into_string();
        assert_eq!(html.matches("program-card").count(), 5);
        assert!(html.contains("program-card theme-pink"));
        assert!(html.contains("Junior KG (LKG)"));
    }

    #[test]
    fn features_render_grid_and_banner() {
        let html = features(&state()).into_string();
        assert_eq!(html.matches(r#"class="feature-card""#).count(), 9);
        assert!(html.contains("Communication Skills Development"));
    }

    #[test]
    fn about_body_is_markdown() {
        let body = about_body().into_string();
        assert!(body.contains("<strong>Little Junior DPS</strong>"));
        assert_eq!(body.matches("<p>").count(), 3);
        assert!(about(&state()).into_string().contains("Strong Foundations"));
    }

    #[test]
    fn gallery_marks_featured_tiles() {
        let html = gallery(&state()).into_string();
        assert_eq!(html.matches("gallery-tile featured").count(), 2);
        assert!(html.contains(r#"data-lightbox-open="6""#));
    }

    #[test]
    fn closed_lightbox_is_hidden_and_empty() {
        let html = lightbox(&Lightbox::Closed).into_string();
        assert!(html.contains("hidden"));
        assert!(!html.contains("src="));
    }

    #[test]
    fn open_lightbox_shows_selected_image() {
        let mut lb = Lightbox::Closed;
        lb.open(4).unwrap();
        let html = lightbox(&lb).into_string();
        assert!(!html.contains("hidden"));
        assert!(html.contains(r#"alt="Reading time""#));
        assert!(html.contains("photo-1544776194-398b41e4651f"));
    }

    #[test]
    fn admission_controls_carry_constraints() {
        let html = admission_form(&AdmissionView::default()).into_string();
        assert!(html.contains(r#"id="admission-form""#));
        assert!(html.contains(r#"pattern="[0-9]{10}""#));
        assert!(html.contains(r#"type="tel""#));
        assert!(html.contains(r#"maxlength="10""#));
        assert!(html.contains(r#"maxlength="20""#));
        assert!(html.contains("Message (Optional)"));
        assert!(html.contains("Child's Name *"));
        assert!(html.contains("Submit Enquiry"));
    }

    #[test]
    fn dropdown_lists_programs_and_marks_selection() {
        let mut view = AdmissionView::default();
        let html = admission_form(&view).into_string();
        assert!(html.contains("Select a program"));
        assert_eq!(html.matches(r#"role="option""#).count(), 5);
        assert!(html.contains(r#"role="listbox" hidden"#));

        view.dropdown_open = true;
        view.form.fields.class_applying = Some(ProgramId::SeniorKg);
        let html = admission_form(&view).into_string();
        assert!(html.contains("dropdown open"));
        assert!(html.contains(r#"value="Senior KG (UKG)""#));
        assert!(html.contains("dropdown-option selected"));
    }

    #[test]
    fn pending_form_disables_submit() {
        let state = FormState {
            fields: ContactFields::default(),
            submitting: true,
        };
        let html = contact_form(&state).into_string();
        assert!(html.contains("disabled"));
        assert!(html.contains("Sending..."));
        assert!(html.contains(r#"aria-busy="true""#));

        let html = contact_form(&FormState::default()).into_string();
        assert!(!html.contains("disabled"));
        assert!(html.contains("Send Message"));
    }

    #[test]
    fn contact_phone_is_optional_and_message_required() {
        let html = contact_form(&FormState::default()).into_string();
        assert!(html.contains("Phone Number (Optional)"));
        assert!(html.contains("Message *"));
        assert!(html.contains(r#"maxlength="1000""#));
        assert!(html.contains(r#"rows="5""#));
    }

    #[test]
    fn message_renders_as_wide_textarea_with_value() {
        let state = FormState {
            fields: ContactFields {
                message: "Do you have evening slots?".into(),
                ..Default::default()
            },
            submitting: false,
        };
        let html = contact_form(&state).into_string();
        assert_eq!(html.matches("<textarea").count(), 1);
        assert_eq!(html.matches("field field-wide").count(), 1);
        assert!(html.contains(">Do you have evening slots?</textarea>"));
        assert!(html.contains(r#"<input class="input" id="contact-form-name""#));
    }

    #[test]
    fn form_values_are_escaped() {
        let state = FormState {
            fields: ContactFields {
                name: r#""><script>alert(1)</script>"#.into(),
                ..Default::default()
            },
            submitting: false,
        };
        let html = contact_form(&state).into_string();
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn admissions_badge_uses_render_year() {
        let html = admissions(&state()).into_string();
        assert!(html.contains("Admissions Open 2026-27"));
        assert!(html.contains("Child should be 5 years by March 31st"));
    }

    #[test]
    fn contact_embeds_configured_map() {
        let mut config = SiteConfig::default();
        config.site.map_embed_url = "https://maps.example.com/embed?q=school".into();
        let html = contact(&state(), &config).into_string();
        assert!(html.contains("https://maps.example.com/embed?q=school"));
        assert!(html.contains("admissions@littlejuniordps.edu"));
    }

    #[test]
    fn footer_shows_year_hours_and_scroll_top() {
        let html = footer(&state()).into_string();
        assert!(html.contains("© 2026 Little Junior DPS"));
        assert!(html.contains("hours closed"));
        assert!(html.contains("data-scroll-top"));
        assert!(html.contains("mailto:info@littlejuniordps.edu"));
        assert_eq!(html.matches("data-scroll=").count(), content::NAV_LINKS.len() + 1);
    }
}
