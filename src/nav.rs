//! Route names
//!
//! Symbolic route names mapped to the topic views. This is plain
//! in-process dispatch, not a protocol: the presentation layer asks for a
//! route by name and renders whatever view it resolves to.

/// A navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page.
    Home,
    /// Autism topic (sensory simulation, schedule, timers, breathing).
    Autism,
    /// Hearing topic.
    Hearing,
    /// Vision topic.
    Vision,
    /// Dyslexia topic.
    Dyslexia,
    /// Movement topic.
    Movement,
    /// Emotion topic.
    Emotion,
}

impl Route {
    /// Every route, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Autism,
        Self::Hearing,
        Self::Vision,
        Self::Dyslexia,
        Self::Movement,
        Self::Emotion,
    ];

    /// Resolves a symbolic name (case-insensitive). Unknown names resolve
    /// to nothing; the caller falls back to [`Route::Home`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "home" | "" => Some(Self::Home),
            "autism" => Some(Self::Autism),
            "hearing" => Some(Self::Hearing),
            "vision" => Some(Self::Vision),
            "dyslexia" => Some(Self::Dyslexia),
            "movement" => Some(Self::Movement),
            "emotion" => Some(Self::Emotion),
            _ => None,
        }
    }

    /// The symbolic name used in dispatch.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Autism => "autism",
            Self::Hearing => "hearing",
            Self::Vision => "vision",
            Self::Dyslexia => "dyslexia",
            Self::Movement => "movement",
            Self::Emotion => "emotion",
        }
    }

    /// Human-readable view title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Welcome",
            Self::Autism => "The world of autism",
            Self::Hearing => "Hearing differences",
            Self::Vision => "Vision differences",
            Self::Dyslexia => "Reading with dyslexia",
            Self::Movement => "Movement and mobility",
            Self::Emotion => "Feelings and emotions",
        }
    }
}
