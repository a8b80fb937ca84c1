// Fixed visual parameters and the element ids the page script looks up.
// None of these are meant to be tuned at runtime.

use crate::color::Color;

pub const HERO_CANVAS_ID: &str = "hero-canvas";

// Particle field
pub const MIN_PARTICLES: usize = 20;
pub const AREA_PER_PARTICLE: u64 = 9000;
pub const MIN_PARTICLE_SIZE: f64 = 1.0;
pub const MAX_PARTICLE_SIZE: f64 = 3.5;
pub const MAX_PARTICLE_SPEED: f64 = 0.3;
pub const PARTICLE_COLOR: Color = Color::from_u32(0x6366f1);
pub const PARTICLE_ALPHA: f64 = 0.5;

// Connecting lines
pub const LINK_DISTANCE_DIVISOR: f64 = 7.0;
pub const LINK_FADE_FACTOR: f64 = 1.2;
pub const LINK_MAX_OPACITY: f64 = 0.9;
pub const LINK_WIDTH: f64 = 1.0;
pub const LINK_COLOR: Color = Color::from_u32(0x818cf8);

// Hero typing
pub const HERO_TITLE_ID: &str = "hero-title";
pub const HERO_SUBTITLE_ID: &str = "hero-subtitle";
pub const HERO_TITLE_TEXT: &str = "DEVESH SHARMA";
pub const HERO_SUBTITLE_TEXT: &str = "Creative Full-Stack Developer & AI/ML Enthusiast";
pub const TYPING_START_DELAY_MS: i32 = 900;
pub const TITLE_TYPING_SPEED_MS: i32 = 150;
pub const SUBTITLE_TYPING_SPEED_MS: i32 = 50;
pub const TYPING_CURSOR_CLASS: &str = "typing-cursor";

// Scroll chrome
pub const HEADER_ID: &str = "header";
pub const BACK_TO_TOP_ID: &str = "back-to-top";
pub const ABOUT_SECTION_ID: &str = "about";
pub const MOBILE_MENU_BUTTON_ID: &str = "mobile-menu-button";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
pub const CURSOR_OUTLINE_SELECTOR: &str = ".cursor-outline";
pub const HEADER_SCROLLED_AFTER: f64 = 50.0;
pub const BACK_TO_TOP_AFTER: f64 = 300.0;

// Navigation
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_ROOT_MARGIN: &str = "-50% 0px -50% 0px";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";

// Custom cursor
pub const CURSOR_OUTLINE_LAG_MS: f64 = 450.0;
pub const CURSOR_INTERACT_CLASS: &str = "cursor-interact";
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, .card-content, .timeline-item, [type=\"submit\"]";

// Reveal effects
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const TIMELINE_SELECTOR: &str = ".timeline-item";
pub const TIMELINE_THRESHOLD: f64 = 0.2;
pub const CERTIFICATION_SELECTOR: &str = "#certifications .p-4";
pub const CERTIFICATION_STAGGER_MS: i32 = 200;
