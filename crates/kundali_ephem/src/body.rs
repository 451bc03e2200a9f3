//! The nine grahas of the Vedic chart.

/// Bodies tracked by the chart engine.
///
/// The two lunar nodes (Rahu, Ketu) are mathematical points, not physical
/// bodies; [`Body::is_node`] distinguishes them where it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All nine bodies in the traditional graha order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    /// Index into [`ALL_BODIES`].
    pub const fn index(self) -> usize {
        match self {
            Body::Sun => 0,
            Body::Moon => 1,
            Body::Mars => 2,
            Body::Mercury => 3,
            Body::Jupiter => 4,
            Body::Venus => 5,
            Body::Saturn => 6,
            Body::Rahu => 7,
            Body::Ketu => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
            Body::Mercury => "Mercury",
            Body::Jupiter => "Jupiter",
            Body::Venus => "Venus",
            Body::Saturn => "Saturn",
            Body::Rahu => "Rahu",
            Body::Ketu => "Ketu",
        }
    }

    /// Whether this is a lunar node (Rahu or Ketu).
    pub const fn is_node(self) -> bool {
        matches!(self, Body::Rahu | Body::Ketu)
    }
}
