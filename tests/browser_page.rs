//! Browser tests: drive the generated page in headless Chrome and check that
//! the page script performs the same transitions as the interaction model.
//!
//! Run with: `cargo test --test browser_page -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_site_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_little-junior");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                root.join("site").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run little-junior");
        assert!(status.success(), "site build failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_index() -> Arc<Tab> {
    ensure_site_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join("index.html");
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> serde_json::Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .unwrap_or(serde_json::Value::Null)
}

fn eval_bool(tab: &Tab, js: &str) -> bool {
    eval(tab, js).as_bool().unwrap_or(false)
}

fn eval_string(tab: &Tab, js: &str) -> String {
    eval(tab, js).as_str().unwrap_or_default().to_string()
}

// ---------------------------------------------------------------------------
// Navbar
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn navbar_turns_solid_after_threshold() {
    let tab = load_index();
    assert!(!eval_bool(
        &tab,
        "document.querySelector('.navbar').classList.contains('scrolled')"
    ));
    eval(&tab, "window.scrollTo(0, 400); window.dispatchEvent(new Event('scroll'))");
    assert!(eval_bool(
        &tab,
        "document.querySelector('.navbar').classList.contains('scrolled')"
    ));
}

#[test]
#[ignore]
fn reduce_motion_toggle_marks_document_root() {
    let tab = load_index();
    eval(&tab, "document.querySelector('[data-motion-toggle]').click()");
    assert!(eval_bool(
        &tab,
        "document.documentElement.classList.contains('reduce-motion')"
    ));
    assert_eq!(
        eval_string(&tab, "document.querySelector('[data-motion-toggle]').textContent"),
        "✓ Motion Off"
    );

    eval(&tab, "document.querySelector('[data-motion-toggle]').click()");
    assert!(!eval_bool(
        &tab,
        "document.documentElement.classList.contains('reduce-motion')"
    ));
}

#[test]
#[ignore]
fn nav_link_closes_mobile_menu() {
    let tab = load_index();
    eval(&tab, "document.querySelector('[data-menu-toggle]').click()");
    assert!(!eval_bool(&tab, "document.getElementById('mobile-menu').hidden"));
    eval(
        &tab,
        "document.querySelector('#mobile-menu [data-scroll=\"#gallery\"]').click()",
    );
    assert!(eval_bool(&tab, "document.getElementById('mobile-menu').hidden"));
}

// ---------------------------------------------------------------------------
// Lightbox
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn lightbox_opens_on_tile_and_closes_on_backdrop() {
    let tab = load_index();
    assert!(eval_bool(&tab, "document.getElementById('lightbox').hidden"));

    eval(&tab, "document.querySelector('[data-lightbox-open=\"4\"]').click()");
    assert!(!eval_bool(&tab, "document.getElementById('lightbox').hidden"));
    assert_eq!(
        eval_string(&tab, "document.getElementById('lightbox-caption').textContent"),
        "Reading time"
    );

    // Clicking the image itself keeps the overlay open.
    eval(&tab, "document.getElementById('lightbox-image').click()");
    assert!(!eval_bool(&tab, "document.getElementById('lightbox').hidden"));

    eval(&tab, "document.getElementById('lightbox').click()");
    assert!(eval_bool(&tab, "document.getElementById('lightbox').hidden"));
}

#[test]
#[ignore]
fn lightbox_close_button_closes() {
    let tab = load_index();
    eval(&tab, "document.querySelector('[data-lightbox-open=\"1\"]').click()");
    eval(&tab, "document.querySelector('[data-lightbox-close]').click()");
    assert!(eval_bool(&tab, "document.getElementById('lightbox').hidden"));
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn dropdown_selection_sets_class_and_closes() {
    let tab = load_index();
    eval(&tab, "document.querySelector('[data-dropdown-toggle]').click()");
    assert!(!eval_bool(&tab, "document.querySelector('.dropdown-menu').hidden"));

    eval(
        &tab,
        "document.querySelector('.dropdown-option[data-value=\"Senior KG (UKG)\"]').click()",
    );
    assert!(eval_bool(&tab, "document.querySelector('.dropdown-menu').hidden"));
    assert_eq!(
        eval_string(&tab, "document.getElementById('admission-form-classApplying').value"),
        "Senior KG (UKG)"
    );
}

#[test]
#[ignore]
fn empty_admission_form_is_blocked() {
    let tab = load_index();
    assert!(!eval_bool(
        &tab,
        "document.getElementById('admission-form').checkValidity()"
    ));
    eval(&tab, "document.querySelector('#admission-form .btn-submit').click()");
    assert!(!eval_bool(
        &tab,
        "document.querySelector('#admission-form .btn-submit').disabled"
    ));
}

#[test]
#[ignore]
fn short_phone_number_is_a_pattern_mismatch() {
    let tab = load_index();
    assert!(eval_bool(
        &tab,
        r#"(function () {
            const phone = document.getElementById('admission-form-phone');
            phone.value = '98765';
            return phone.validity.patternMismatch;
        })()"#
    ));
}

const FILL_CONTACT: &str = r#"(function () {
    const set = (name, value) => {
        document.getElementById('contact-form-' + name).value = value;
    };
    set('name', 'Asha Rao');
    set('email', 'asha@example.com');
    set('subject', 'Admission inquiry');
    set('message', 'Do you have evening slots?');
})()"#;

#[test]
#[ignore]
fn contact_submission_pends_then_resets_with_toast() {
    let tab = load_index();
    eval(&tab, FILL_CONTACT);
    eval(&tab, "document.querySelector('#contact-form .btn-submit').click()");
    assert!(eval_bool(
        &tab,
        "document.querySelector('#contact-form .btn-submit').disabled"
    ));
    assert!(
        eval_string(&tab, "document.querySelector('#contact-form .btn-submit').textContent")
            .contains("Sending...")
    );

    std::thread::sleep(Duration::from_millis(2000));

    assert!(!eval_bool(
        &tab,
        "document.querySelector('#contact-form .btn-submit').disabled"
    ));
    assert_eq!(
        eval_string(&tab, "document.getElementById('contact-form-name').value"),
        ""
    );
    assert_eq!(
        eval_string(&tab, "document.querySelector('#toasts .toast strong').textContent"),
        "Message sent successfully!"
    );
}

#[test]
#[ignore]
fn resubmitting_while_pending_raises_one_toast() {
    let tab = load_index();
    eval(&tab, FILL_CONTACT);
    // requestSubmit fires the submit event even while the button is disabled.
    eval(
        &tab,
        r#"(function () {
            const form = document.getElementById('contact-form');
            form.requestSubmit();
            form.requestSubmit();
        })()"#,
    );
    assert!(eval_bool(
        &tab,
        "document.querySelector('#contact-form .btn-submit').disabled"
    ));

    std::thread::sleep(Duration::from_millis(2000));

    assert_eq!(
        eval(&tab, "document.querySelectorAll('#toasts .toast').length").as_u64(),
        Some(1)
    );
    assert!(!eval_bool(
        &tab,
        "document.querySelector('#contact-form .btn-submit').disabled"
    ));
}
