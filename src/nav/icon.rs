//! Closed icon registry.
//!
//! Menu data refers to icons by symbolic name. Lookup is total: anything the
//! registry does not know renders as `NavIcon::Circle`.

/// Icons the UI knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavIcon {
    #[default]
    Circle,
    Home,
    Sitemap,
    Sort,
    ArrowUp,
    ArrowDown,
    Spinner,
    Check,
    Cross,
    Bars,
}

impl NavIcon {
    pub fn from_name(name: &str) -> Self {
        match name {
            "faHome" => NavIcon::Home,
            "faSitemap" => NavIcon::Sitemap,
            "faSort" => NavIcon::Sort,
            "faArrowUp" => NavIcon::ArrowUp,
            "faArrowDown" => NavIcon::ArrowDown,
            "faBars" => NavIcon::Bars,
            _ => NavIcon::Circle,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NavIcon::Circle => "faCircle",
            NavIcon::Home => "faHome",
            NavIcon::Sitemap => "faSitemap",
            NavIcon::Sort => "faSort",
            NavIcon::ArrowUp => "faArrowUp",
            NavIcon::ArrowDown => "faArrowDown",
            NavIcon::Spinner => "spinner",
            NavIcon::Check => "check",
            NavIcon::Cross => "x",
            NavIcon::Bars => "faBars",
        }
    }

    /// SVG path data, drawn in a 512x512 view box.
    pub fn path(&self) -> &'static str {
        match self {
            NavIcon::Circle => "M256 16a240 240 0 1 0 0 480a240 240 0 1 0 0-480z",
            NavIcon::Home => "M256 32L16 256h64v224h128V336h96v144h128V256h64z",
            NavIcon::Sitemap => {
                "M192 32h128v96H272v64h176v96h48v128H368V288h48v-64H272v64h48v128H192V288h48v-64H96v64h48v128H16V288h48v-96h176v-64H192z"
            }
            NavIcon::Sort => "M256 32L96 208h320zM256 480L96 304h320z",
            NavIcon::ArrowUp => "M256 32L64 240h128v240h128V240h128z",
            NavIcon::ArrowDown => "M256 480L64 272h128V32h128v240h128z",
            NavIcon::Spinner => "M256 32a224 224 0 1 0 224 224h-64a160 160 0 1 1-160-160z",
            NavIcon::Check => "M48 272l64-64l96 96l192-192l64 64l-256 256z",
            NavIcon::Cross => {
                "M96 48l160 160L416 48l48 48l-160 160l160 160l-48 48l-160-160L96 464l-48-48l160-160L48 96z"
            }
            NavIcon::Bars => "M32 96h448v64H32zM32 224h448v64H32zM32 352h448v64H32z",
        }
    }
}
