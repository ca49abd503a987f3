//! Static marketing content rendered on the landing page.

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const COMPANY: &str = "Fox 2 IT Solutions";
pub const TAGLINE: &str = "Global Enterprise IT Services Provider";

pub const SERVICES: &[Service] = &[
    Service {
        icon: "briefcase",
        title: "Virtual CIO",
        description: "Strategic technology leadership and guidance for your enterprise",
    },
    Service {
        icon: "shield",
        title: "Cybersecurity",
        description: "Comprehensive security solutions to protect your digital assets",
    },
    Service {
        icon: "globe",
        title: "Project Management",
        description: "End-to-end project planning and implementation",
    },
    Service {
        icon: "server",
        title: "IT Support",
        description: "Advanced support services across all technology stacks",
    },
];

pub const REACH_TITLE: &str = "Global Reach, Local Expertise";
pub const REACH_TEXT: &str = "Based in South Africa, serving enterprises worldwide with comprehensive IT solutions and support";
