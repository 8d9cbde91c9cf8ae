//! Static style catalog and example prompts consumed by the front end.
//!
//! The catalog is advisory: unknown style names are passed through to the
//! service verbatim rather than rejected.

use crate::request::Quality;

/// Style used when the caller does not pick one.
pub const DEFAULT_STYLE: &str = "3blue1brown";

/// One entry in the visual style catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Visual styles supported by the generation service.
pub const STYLES: &[StyleInfo] = &[
    StyleInfo {
        name: "3blue1brown",
        description: "Classic 3Blue1Brown style with blue background and elegant animations",
    },
    StyleInfo {
        name: "minimalist",
        description: "Clean, simple style with white background and basic shapes",
    },
    StyleInfo {
        name: "playful",
        description: "Colorful and fun style with bouncy animations",
    },
    StyleInfo {
        name: "corporate",
        description: "Professional style suitable for business presentations",
    },
    StyleInfo {
        name: "neon",
        description: "Dark background with glowing neon elements",
    },
];

/// Look up a catalog entry by name.
pub fn find_style(name: &str) -> Option<&'static StyleInfo> {
    STYLES.iter().find(|s| s.name == name)
}

/// A ready-made prompt preset shown by the front end.
#[derive(Debug, Clone, Copy)]
pub struct ExamplePrompt {
    pub prompt: &'static str,
    pub style: &'static str,
    pub quality: Quality,
}

/// Example prompts demonstrating typical requests.
pub const EXAMPLE_PROMPTS: &[ExamplePrompt] = &[
    ExamplePrompt {
        prompt: "Show how the Pythagorean theorem works with a visual proof",
        style: "3blue1brown",
        quality: Quality::Low,
    },
    ExamplePrompt {
        prompt: "Visualize the derivative of sin(x) as a rate of change",
        style: "minimalist",
        quality: Quality::Medium,
    },
    ExamplePrompt {
        prompt: "Demonstrate bubble sort algorithm step by step",
        style: "playful",
        quality: Quality::Low,
    },
    ExamplePrompt {
        prompt: "Animate a sine wave transforming into a cosine wave",
        style: "neon",
        quality: Quality::Low,
    },
    ExamplePrompt {
        prompt: "Show how vectors add together in 2D space",
        style: "corporate",
        quality: Quality::Low,
    },
];
